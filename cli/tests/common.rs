//! # Chatbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`main_tests.rs`, `chat.rs`,
//! `lexicon.rs`). Each test runs the compiled `chatbot` binary inside a
//! throwaway directory that also serves as `HOME` and `XDG_CONFIG_HOME`, so
//! lexicon files on the developer's machine never leak into a test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Replies the built-in lexicon gives for "hello".
pub const HELLO_REPLIES: [&str; 3] = [
    "Hi there!",
    "Hello! How can I assist you today?",
    "Hey! Nice to see you.",
];

pub const FALLBACK: &str = "I'm not sure how to respond to that. Can you ask me something else?";

/// An isolated working directory for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create sandbox dir"),
        }
    }

    /// Writes `contents` to `name` inside the sandbox and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write sandbox file");
        path
    }

    /// The `chatbot` binary, running in the sandbox with instant output.
    pub fn chatbot_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("chatbot").expect("Failed to find chatbot binary for testing");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env_remove("CHATBOT_LEXICON")
            .env_remove("RUST_LOG")
            .arg("--instant");
        cmd
    }
}

/// Reply texts (label stripped) in the order they were printed.
pub fn replies(stdout: &str) -> Vec<String> {
    stdout
        .split("You: ")
        .filter_map(|chunk| chunk.lines().find_map(|line| line.strip_prefix("Chatbot: ")))
        .map(str::to_string)
        .collect()
}
