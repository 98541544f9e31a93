//! # Chatbot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A keyword-matching chatbot. Each line of user text is normalized
//! (lowercased, punctuation and stop words removed) and scanned against an
//! ordered table of keyword phrases; the first keyword found picks a random
//! canned reply, otherwise a fallback reply is used. There is no memory
//! between turns.
//!
//! ## Architecture
//!
//! - `core`: configuration loading and error types
//! - `lexicon`: the keyword table, stop words, and built-in data
//! - `engine`: the normalizer, the responder, and the `Chatbot` that chains them
//! - `session`: the interactive read/reply loop
//! - `common`: terminal presentation (typewriter output)
//!
//! The binary (`main.rs`) only parses flags, sets up logging, and wires these
//! modules to stdin/stdout.
//!
pub mod common;
pub mod core;
pub mod engine;
pub mod lexicon;
pub mod session;
