//! # Chatbot Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module turns one line of user text into one reply. It is the only part
//! of the chatbot with decision logic; everything around it is I/O.
//!
//! ## Architecture
//!
//! - `normalizer`: lowercases, strips punctuation, drops stop words.
//! - `responder`: finds the first matching keyword and picks a random reply.
//! - `MatchMode`: how a keyword is compared against normalized input.
//! - `Chatbot`: owns the lexicon and match mode and chains the two steps.
//!
//! ## Examples
//!
//! ```rust
//! use chatbot::engine::{Chatbot, MatchMode};
//! use chatbot::lexicon::Lexicon;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let bot = Chatbot::new(Lexicon::builtin(), MatchMode::WholeWord);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let reply = bot.reply("Can you tell me a joke?", &mut rng);
//! assert!(bot.lexicon().get("tell joke").unwrap().responses().iter().any(|r| r == reply));
//! assert_eq!(bot.reply("asdkjasd", &mut rng), bot.lexicon().fallback());
//! ```
//!
use crate::lexicon::Lexicon;
use clap::ValueEnum;
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

pub mod normalizer;
pub mod responder;

pub use normalizer::Normalizer;
pub use responder::Responder;

/// How a keyword phrase is compared against normalized input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// The keyword may appear anywhere, even inside a longer word ("hi" in "this").
    #[default]
    Substring,
    /// The keyword's words must appear as a contiguous run of whole words.
    WholeWord,
}

impl MatchMode {
    /// Whether `keyword` occurs in the normalized input under this mode.
    pub fn matches(self, keyword: &str, normalized: &str) -> bool {
        match self {
            MatchMode::Substring => normalized.contains(keyword),
            MatchMode::WholeWord => {
                let needle: Vec<&str> = keyword.split_whitespace().collect();
                if needle.is_empty() {
                    return false;
                }
                let haystack: Vec<&str> = normalized.split_whitespace().collect();
                haystack
                    .windows(needle.len())
                    .any(|window| window == needle.as_slice())
            }
        }
    }
}

/// A lexicon paired with a match mode: everything needed to answer a line.
#[derive(Debug, Clone)]
pub struct Chatbot {
    lexicon: Lexicon,
    mode: MatchMode,
}

impl Chatbot {
    /// Creates a chatbot that answers from `lexicon` using `mode`.
    pub fn new(lexicon: Lexicon, mode: MatchMode) -> Self {
        Self { lexicon, mode }
    }

    /// The lexicon replies are drawn from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// A normalizer using this lexicon's stop words.
    pub fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(self.lexicon.stop_words())
    }

    /// A responder over this lexicon in this chatbot's match mode.
    pub fn responder(&self) -> Responder<'_> {
        Responder::new(&self.lexicon, self.mode)
    }

    /// Normalizes `raw` and answers it.
    pub fn reply<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> &str {
        let normalized = self.normalizer().normalize(raw);
        debug!("Normalized {:?} to {:?}", raw, normalized);
        self.responder().respond(&normalized, rng)
    }
}
