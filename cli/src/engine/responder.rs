//! # Keyword Responder
//!
//! File: cli/src/engine/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Scans the lexicon in declaration order and answers with a random reply of
//! the first entry whose keyword matches the normalized input, or with the
//! fallback when nothing matches. The first hit wins, so an earlier keyword
//! shadows every later keyword that would match the same input.
//!
//! The random source is passed in by the caller, which keeps seeded sessions
//! reproducible and lets tests check the distribution.
//!
use super::MatchMode;
use crate::lexicon::{Lexicon, LexiconEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Picks replies for normalized input from a borrowed lexicon.
#[derive(Debug, Clone, Copy)]
pub struct Responder<'a> {
    lexicon: &'a Lexicon,
    mode: MatchMode,
}

impl<'a> Responder<'a> {
    /// Creates a responder over `lexicon` that compares keywords using `mode`.
    pub fn new(lexicon: &'a Lexicon, mode: MatchMode) -> Self {
        Self { lexicon, mode }
    }

    /// Returns the first entry, in declaration order, whose keyword matches.
    pub fn find_entry(&self, normalized: &str) -> Option<&'a LexiconEntry> {
        let hit = self
            .lexicon
            .entries()
            .iter()
            .find(|entry| self.mode.matches(entry.keyword(), normalized));
        trace!(
            "Input {:?} matched keyword {:?}",
            normalized,
            hit.map(LexiconEntry::keyword)
        );
        hit
    }

    /// Chooses a reply for `normalized`, consuming randomness only on a match.
    pub fn respond<R: Rng + ?Sized>(&self, normalized: &str, rng: &mut R) -> &'a str {
        self.find_entry(normalized)
            .and_then(|entry| entry.responses().choose(rng))
            .map(String::as_str)
            .unwrap_or_else(|| self.lexicon.fallback())
    }
}
