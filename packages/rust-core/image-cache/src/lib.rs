//! Asynchronous WMF/EMF image conversion cache.
//!
//! The compile path is otherwise single-threaded and cooperative; this is
//! its one deliberately concurrent component, so the structure builder
//! doesn't stall on image rasterization while it walks the rest of the
//! document. A single lock guards all memoized state: every observer sees
//! an id as present, pending, or absent, never anything in between.
//!
//! `convert_async` enqueues a conversion (idempotent on id); `get` fetches
//! the result, optionally blocking up to 30 seconds for a pending one. A
//! conversion that times out or fails is memoised as unavailable so later
//! callers don't pay the wait again. No ordering is guaranteed between
//! concurrent conversions, and there's no explicit cancellation: work
//! already queued runs to completion even if nothing is left waiting on
//! its result.

mod pool;

pub use pool::{ImageCache, SizeHint};
