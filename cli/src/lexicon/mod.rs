//! # Chatbot Lexicon
//!
//! File: cli/src/lexicon/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The lexicon is the chatbot's whole knowledge: an ordered table of keyword
//! phrases, each with a list of candidate replies, plus the stop words stripped
//! from user input and the fallback reply used when nothing matches.
//!
//! ## Architecture
//!
//! - `LexiconEntry`: one keyword phrase and its non-empty list of responses.
//! - `StopWordSet`: the words dropped during normalization.
//! - `Lexicon`: the validated, immutable bundle of the above.
//! - `builtin`: the data the chatbot ships with.
//!
//! A `Lexicon` is built once at startup (from the built-in data or a TOML file,
//! see `core::config`) and is only ever borrowed afterwards. Entries live in a
//! `Vec` because declaration order is the match priority.
//!
//! ## Examples
//!
//! ```rust
//! use chatbot::lexicon::{Lexicon, LexiconEntry, StopWordSet};
//!
//! let lexicon = Lexicon::new(
//!     vec![LexiconEntry::new("hello", ["Hi!", "Hey!"])],
//!     ["the", "a"].into_iter().collect::<StopWordSet>(),
//!     "Come again?",
//! )?;
//! assert_eq!(lexicon.len(), 1);
//! assert_eq!(lexicon.fallback(), "Come again?");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{ChatbotError, Result};
use crate::engine::Normalizer;
use std::collections::HashSet;
use tracing::debug;

pub mod builtin;

/// A keyword phrase and the replies it can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    keyword: String,
    responses: Vec<String>,
}

impl LexiconEntry {
    /// Creates an entry. Emptiness is checked later, by `Lexicon::new`.
    pub fn new<K, I, S>(keyword: K, responses: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keyword: keyword.into(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// The keyword phrase, compared against normalized input.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Candidate replies, one of which is picked at random on a match.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}

/// Words removed from user input before matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet(HashSet<String>);

impl StopWordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The validated keyword table, stop words, and fallback reply.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    stop_words: StopWordSet,
    fallback: String,
}

impl Lexicon {
    /// Builds a lexicon, rejecting empty or duplicate keywords, entries
    /// without responses, and an empty fallback.
    pub fn new(
        entries: Vec<LexiconEntry>,
        stop_words: StopWordSet,
        fallback: impl Into<String>,
    ) -> Result<Self> {
        let fallback = fallback.into();
        validate(&entries, &fallback)?;
        debug!(
            "Built lexicon with {} entries and {} stop words",
            entries.len(),
            stop_words.len()
        );
        Ok(Self {
            entries,
            stop_words,
            fallback,
        })
    }

    /// The lexicon the chatbot ships with.
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries(),
            stop_words: builtin::stop_words(),
            fallback: builtin::FALLBACK.to_string(),
        }
    }

    /// Entries in declaration order, which is also match priority.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// The reply used when no keyword matches.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its exact keyword.
    pub fn get(&self, keyword: &str) -> Option<&LexiconEntry> {
        self.entries.iter().find(|entry| entry.keyword == keyword)
    }

    /// Keywords that change under normalization and therefore can never be
    /// found in normalized input (upper case, punctuation, or a stop word).
    pub fn unreachable_keywords(&self) -> Vec<&str> {
        let normalizer = Normalizer::new(&self.stop_words);
        self.entries
            .iter()
            .map(LexiconEntry::keyword)
            .filter(|keyword| normalizer.normalize(keyword) != *keyword)
            .collect()
    }
}

fn validate(entries: &[LexiconEntry], fallback: &str) -> Result<()> {
    if fallback.trim().is_empty() {
        return Err(ChatbotError::Config("Fallback message cannot be empty.".to_string()).into());
    }
    let mut seen = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.keyword.trim().is_empty() {
            return Err(ChatbotError::EmptyKeyword { index }.into());
        }
        if entry.responses.is_empty() {
            return Err(ChatbotError::NoResponses {
                keyword: entry.keyword.clone(),
            }
            .into());
        }
        if !seen.insert(entry.keyword.as_str()) {
            return Err(ChatbotError::DuplicateKeyword {
                keyword: entry.keyword.clone(),
            }
            .into());
        }
    }
    Ok(())
}
