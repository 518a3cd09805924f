//! Contains Converter, which converts simplified Chinese text to traditional Chinese.
//!
//! The conversion is a greedy longest-match over the mapping: at each position, the longest
//! substring found in the mapping wins. There is no real word segmentation or context,
//! so runs of characters that can be split in more than one way may be converted incorrectly.

use crate::{contains_hanzi, Mapping};

/// The default maximum length in chars of a substring matched against the mapping.
pub const DEFAULT_WINDOW: usize = 10;

#[derive(Debug, Clone)]
pub struct Converter<'a> {
    mapping: &'a Mapping,
    window: usize,
}

impl<'a> Converter<'a> {
    pub fn new(mapping: &'a Mapping) -> Self {
        Self::with_window(mapping, DEFAULT_WINDOW)
    }

    /// # Panics
    /// If the window is zero.
    pub fn with_window(mapping: &'a Mapping, window: usize) -> Self {
        assert!(window > 0, "the match window must be at least one character");
        Self { mapping, window }
    }

    /// Converts the text to traditional Chinese.
    /// Text without any hanzi is returned as is.
    pub fn convert(&self, text: &str) -> String {
        if !contains_hanzi(text) {
            return text.to_string();
        }

        // idioms and other multi-character entries may get split up otherwise
        if let Some(traditional) = self.mapping.get(text) {
            return traditional.to_string();
        }

        // byte offsets of each char, plus the end of the text
        let boundaries = text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(text.len()))
            .collect::<Vec<_>>();
        let char_count = boundaries.len() - 1;
        // no key is longer than the longest key, so there's no point in trying longer substrings
        let window = self.window.min(self.mapping.longest_key());

        let mut result = String::with_capacity(text.len());
        let mut idx = 0;
        while idx < char_count {
            let start = boundaries[idx];
            let longest_match = (1..=window.min(char_count - idx)).rev().find_map(|len| {
                let substring = &text[start..boundaries[idx + len]];
                self.mapping
                    .get(substring)
                    .map(|traditional| (len, traditional))
            });
            match longest_match {
                Some((len, traditional)) => {
                    result.push_str(traditional);
                    idx += len;
                }
                None => {
                    let c = &text[start..boundaries[idx + 1]];
                    result.push_str(self.mapping.get(c).unwrap_or(c));
                    idx += 1;
                }
            }
        }

        tracing::trace!("converted {text} to {result}");
        result
    }

    /// Returns the hanzi in the text that have no single-character entry in the mapping.
    /// These pass through conversion unchanged unless they are part of a longer match.
    pub fn unmapped<'t>(&self, text: &'t str) -> Vec<&'t str> {
        crate::hanzi_from_text(text)
            .filter(|hanzi| self.mapping.get(hanzi).is_none())
            .collect()
    }
}
