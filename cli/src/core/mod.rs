//! # Chatbot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure the chatbot needs before a
//! conversation can start:
//! - `config`: Locating, loading, and merging lexicon files
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use chatbot::core::config; // For loading the lexicon and match mode
//! use chatbot::core::error::{ChatbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
