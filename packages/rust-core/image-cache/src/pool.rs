//! The bounded worker pool and its memoization map.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const DEFAULT_WORKERS: usize = 4;
const GET_TIMEOUT: Duration = Duration::from_secs(30);

/// Declared dimensions of the source image, passed through to the
/// converter as a hint for images whose native size can't be recovered
/// from the bytes alone (e.g. a WMF with no embedded bounds).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeHint {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

type ConverterFn = dyn Fn(&[u8], Option<u32>, Option<u32>) -> Option<Vec<u8>> + Send + Sync;

enum Entry {
    Pending,
    Ready(Option<Vec<u8>>),
}

struct Job {
    id: String,
    bytes: Vec<u8>,
    converter: Arc<ConverterFn>,
    size_hint: SizeHint,
}

struct Shared {
    state: Mutex<HashMap<String, Entry>>,
    condvar: Condvar,
}

/// Asynchronous WMF/EMF conversion cache. Cheap to construct; the worker
/// threads aren't spawned until the first `convert_async` call (or an
/// explicit `start()`).
pub struct ImageCache {
    shared: Arc<Shared>,
    num_workers: usize,
    sender: Mutex<Option<Sender<Job>>>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl ImageCache {
    pub fn new(num_workers: usize) -> Self {
        Self {
            shared: Arc::new(Shared { state: Mutex::new(HashMap::new()), condvar: Condvar::new() }),
            num_workers: num_workers.max(1),
            sender: Mutex::new(None),
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Spawn the worker pool if it isn't already running. Idempotent.
    pub fn start(&self) {
        let mut sender_guard = self.sender.lock().unwrap();
        if sender_guard.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel::<Job>();
        let rx = Arc::new(Mutex::new(rx));
        let mut handles = self.handles.lock().unwrap();
        for _ in 0..self.num_workers {
            handles.push(Self::spawn_worker(Arc::clone(&self.shared), Arc::clone(&rx)));
        }
        *sender_guard = Some(tx);
    }

    fn spawn_worker(shared: Arc<Shared>, rx: Arc<Mutex<Receiver<Job>>>) -> JoinHandle<()> {
        thread::spawn(move || loop {
            let job = {
                let guard = rx.lock().unwrap();
                guard.recv()
            };
            let job = match job {
                Ok(job) => job,
                Err(_) => break, // sender dropped: pool is shutting down
            };
            let result = (job.converter)(&job.bytes, job.size_hint.width, job.size_hint.height);
            let mut state = shared.state.lock().unwrap();
            if let Some(entry) = state.get_mut(&job.id) {
                *entry = Entry::Ready(result);
            }
            drop(state);
            shared.condvar.notify_all();
        })
    }

    /// Enqueue a conversion. Idempotent on `id`: a second call while the
    /// first is pending or already cached is a no-op.
    pub fn convert_async<F>(&self, id: impl Into<String>, bytes: Vec<u8>, converter: F, size_hint: SizeHint)
    where
        F: Fn(&[u8], Option<u32>, Option<u32>) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let id = id.into();
        self.start();

        {
            let mut state = self.shared.state.lock().unwrap();
            if state.contains_key(&id) {
                return;
            }
            state.insert(id.clone(), Entry::Pending);
        }

        let sender_guard = self.sender.lock().unwrap();
        if let Some(sender) = sender_guard.as_ref() {
            let job = Job { id, bytes, converter: Arc::new(converter), size_hint };
            // A send error means the pool is mid-shutdown; the entry stays
            // Pending forever, which `get` already treats as a timeout.
            let _ = sender.send(job);
        }
    }

    /// Fetch a conversion result. With `wait = true`, blocks up to 30
    /// seconds for a pending conversion; on timeout the entry is memoised
    /// as unavailable so later calls return immediately. With `wait =
    /// false`, returns `None` immediately for anything still pending.
    pub fn get(&self, id: &str, wait: bool) -> Option<Vec<u8>> {
        let mut state = self.shared.state.lock().unwrap();
        let deadline = Instant::now() + GET_TIMEOUT;
        loop {
            match state.get(id) {
                None => return None,
                Some(Entry::Ready(result)) => return result.clone(),
                Some(Entry::Pending) => {
                    if !wait {
                        return None;
                    }
                    let now = Instant::now();
                    if now >= deadline {
                        state.insert(id.to_string(), Entry::Ready(None));
                        return None;
                    }
                    let (guard, _timed_out) = self.shared.condvar.wait_timeout(state, deadline - now).unwrap();
                    state = guard;
                }
            }
        }
    }

    /// Block until no conversion is pending, or `timeout` elapses.
    /// Returns `true` if every conversion drained, `false` on timeout.
    /// `timeout = None` waits indefinitely.
    pub fn wait_for_all(&self, timeout: Option<Duration>) -> bool {
        let mut state = self.shared.state.lock().unwrap();
        let deadline = timeout.map(|t| Instant::now() + t);
        loop {
            if !state.values().any(|e| matches!(e, Entry::Pending)) {
                return true;
            }
            state = match deadline {
                None => self.shared.condvar.wait(state).unwrap(),
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    let (guard, _timed_out) = self.shared.condvar.wait_timeout(state, deadline - now).unwrap();
                    guard
                }
            };
        }
    }

    /// Tear the pool down. Dropping the sender closes the channel, so
    /// every worker exits once it drains whatever is already queued.
    /// With `wait = true`, blocks until all workers have exited.
    pub fn shutdown(&self, wait: bool) {
        let sender = self.sender.lock().unwrap().take();
        drop(sender);
        if wait {
            let mut handles = self.handles.lock().unwrap();
            for handle in handles.drain(..) {
                let _ = handle.join();
            }
        }
    }

    /// Empty all memoized state (cached, pending, and unavailable alike).
    /// Conversions already queued still run; their results are discarded
    /// on arrival since their `id` is no longer in the map.
    pub fn clear(&self) {
        self.shared.state.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn identity_converter(bytes: &[u8], _w: Option<u32>, _h: Option<u32>) -> Option<Vec<u8>> {
        Some(bytes.to_vec())
    }

    #[test]
    fn convert_then_get_returns_converted_bytes() {
        let cache = ImageCache::new(2);
        cache.convert_async("img1", vec![1, 2, 3], identity_converter, SizeHint::default());
        let result = cache.get("img1", true);
        assert_eq!(result, Some(vec![1, 2, 3]));
        cache.shutdown(true);
    }

    #[test]
    fn unknown_id_returns_none_without_waiting() {
        let cache = ImageCache::new(2);
        assert_eq!(cache.get("missing", true), None);
        cache.shutdown(true);
    }

    #[test]
    fn convert_async_is_idempotent_on_id() {
        let cache = ImageCache::new(1);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let converter = move |bytes: &[u8], _w: Option<u32>, _h: Option<u32>| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            Some(bytes.to_vec())
        };
        cache.convert_async("dup", vec![9], converter.clone(), SizeHint::default());
        cache.convert_async("dup", vec![9], converter, SizeHint::default());
        cache.wait_for_all(Some(Duration::from_secs(5)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        cache.shutdown(true);
    }

    #[test]
    fn failed_conversion_is_memoised_as_none() {
        let cache = ImageCache::new(1);
        cache.convert_async("bad", vec![0], |_, _, _| None, SizeHint::default());
        assert_eq!(cache.get("bad", true), None);
        cache.shutdown(true);
    }

    #[test]
    fn non_blocking_get_returns_none_while_pending() {
        let cache = ImageCache::new(1);
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let release_rx = Arc::new(Mutex::new(release_rx));
        let converter = move |bytes: &[u8], _w: Option<u32>, _h: Option<u32>| {
            let _ = release_rx.lock().unwrap().recv();
            Some(bytes.to_vec())
        };
        cache.convert_async("slow", vec![1], converter, SizeHint::default());
        assert_eq!(cache.get("slow", false), None);
        release_tx.send(()).unwrap();
        assert_eq!(cache.get("slow", true), Some(vec![1]));
        cache.shutdown(true);
    }

    #[test]
    fn clear_drops_memoized_state() {
        let cache = ImageCache::new(1);
        cache.convert_async("img", vec![7], identity_converter, SizeHint::default());
        cache.wait_for_all(Some(Duration::from_secs(5)));
        assert_eq!(cache.get("img", true), Some(vec![7]));
        cache.clear();
        assert_eq!(cache.get("img", false), None);
        cache.shutdown(true);
    }

    #[test]
    fn wait_for_all_drains_multiple_pending_conversions() {
        let cache = ImageCache::new(4);
        for i in 0..10 {
            cache.convert_async(format!("img{i}"), vec![i as u8], identity_converter, SizeHint::default());
        }
        assert!(cache.wait_for_all(Some(Duration::from_secs(5))));
        for i in 0..10 {
            assert_eq!(cache.get(&format!("img{i}"), false), Some(vec![i as u8]));
        }
        cache.shutdown(true);
    }
}
