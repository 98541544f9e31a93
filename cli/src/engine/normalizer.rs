//! # Input Normalizer
//!
//! File: cli/src/engine/normalizer.rs
//! Author: Christi Mahu
//!
//! Turns raw user text into the form keywords are matched against:
//! lowercase, no ASCII punctuation, no stop words, single spaces.

use crate::lexicon::StopWordSet;

/// Normalizes user input against a borrowed stop-word set.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    stop_words: &'a StopWordSet,
}

impl<'a> Normalizer<'a> {
    pub fn new(stop_words: &'a StopWordSet) -> Self {
        Self { stop_words }
    }

    /// Normalizes `raw`. Never fails; empty input gives an empty string.
    ///
    /// Punctuation is removed before stop words are filtered, so a stop word
    /// spelled with an apostrophe (`"what's"`) only filters input that
    /// already arrives without it.
    pub fn normalize(&self, raw: &str) -> String {
        let stripped: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        stripped
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
