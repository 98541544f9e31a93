//! # Chatbot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the chatbot. Normalizing
//! and matching user input can never fail, so errors only arise while the
//! lexicon is being located, parsed, and validated at startup, or when the
//! terminal stops accepting output.
//!
//! ## Architecture
//!
//! The error system consists of two components:
//! - `ChatbotError`: A custom error enum using `thiserror` for domain errors
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible propagation
//!
//! ## Examples
//!
//! ```rust
//! use anyhow::Context;
//! use chatbot::core::error::{ChatbotError, Result};
//!
//! fn read_lexicon(path: &std::path::Path) -> Result<String> {
//!     if !path.is_file() {
//!         return Err(ChatbotError::LexiconNotFound {
//!             path: path.display().to_string(),
//!         }
//!         .into());
//!     }
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read lexicon file: {}", path.display()))
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the chatbot application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChatbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lexicon entry #{index} has an empty keyword.")]
    EmptyKeyword { index: usize },

    #[error("Keyword '{keyword}' is declared more than once.")]
    DuplicateKeyword { keyword: String },

    #[error("Keyword '{keyword}' has no responses.")]
    NoResponses { keyword: String },

    #[error("Lexicon file '{path}' not found.")]
    LexiconNotFound { path: String },
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
