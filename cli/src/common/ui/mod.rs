//! # Chatbot UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! Terminal presentation helpers. Nothing here affects which reply is chosen.
//!
//! - **`typewriter`**: character-by-character output with a decaying delay.

/// Animated character-by-character output.
pub mod typewriter;

pub use typewriter::Typewriter;
