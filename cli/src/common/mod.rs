//! # Chatbot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! Shared helpers that are not part of the matching logic. Currently this is
//! only terminal presentation (`ui`), used by the session loop.

/// Utilities for terminal user interface elements (typewriter output).
pub mod ui;
