//! Text utilities for PDF rendering
//!
//! This module provides utilities for text processing, chiefly the
//! `text-transform` case folding that has to happen on the actual glyph
//! run right before it's emitted (alignment, by contrast, is already
//! resolved into each `InlineItem`'s `x` by the time layout reaches here).

use layout_types::{StyleDeclaration, TextTransform};
use std::borrow::Cow;

/// Apply text transformation (uppercase, lowercase, capitalize)
///
/// Returns a `Cow<str>` to avoid unnecessary allocations when no transform is applied.
///
/// # Arguments
///
/// * `text` - The text to transform
/// * `style` - The style declaration containing the text transform property
///
/// # Returns
///
/// A `Cow<str>` containing the transformed text (borrowed if no transform, owned if transformed)
pub fn apply_text_transform<'a>(text: &'a str, style: &StyleDeclaration) -> Cow<'a, str> {
    match style.text.text_transform {
        Some(TextTransform::Uppercase) => Cow::Owned(text.to_uppercase()),
        Some(TextTransform::Lowercase) => Cow::Owned(text.to_lowercase()),
        Some(TextTransform::Capitalize) => {
            let capitalized = text
                .split_whitespace()
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        None => String::new(),
                        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    }
                })
                .collect::<Vec<String>>()
                .join(" ");
            Cow::Owned(capitalized)
        }
        Some(TextTransform::None) | None => Cow::Borrowed(text),
    }
}
