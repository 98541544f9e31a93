//! # Chatbot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module decides which lexicon the chatbot runs with and in which match
//! mode. The built-in lexicon is always available; a TOML lexicon file can
//! replace any part of it.
//!
//! ## Architecture
//!
//! Lexicon file sources (first found wins):
//! 1. The path given with `--lexicon` or `CHATBOT_LEXICON` (`~` is expanded).
//!    A missing explicit file is an error.
//! 2. Project-specific `.chatbot.toml` in the current directory or an
//!    ancestor. The search stops at a directory containing `.git`.
//! 3. User-specific `lexicon.toml` in the platform config directory
//!    (e.g. `~/.config/chatbot/lexicon.toml`).
//! 4. The built-in lexicon.
//!
//! Every key in a lexicon file is optional. A key that is present replaces the
//! built-in value wholesale; a missing key keeps it. The match mode comes from
//! the command line first, then the file, then `MatchMode::default()`.
//!
//! ## Examples
//!
//! Lexicon file format:
//!
//! ```toml
//! fallback = "Sorry, I only know about the weather."
//! match_mode = "whole-word"
//! stop_words = ["a", "the", "is"]
//!
//! [[entries]]
//! keyword = "weather"
//! responses = ["Sunny!", "Rainy."]
//!
//! [[entries]]
//! keyword = "forecast"
//! responses = ["Tomorrow looks fine."]
//! ```
//!
//! Loading settings:
//!
//! ```rust,no_run
//! use chatbot::core::config;
//!
//! let settings = config::load_settings(None, None)?;
//! println!("{} keywords from {}", settings.lexicon.len(), settings.source);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{ChatbotError, Result};
use crate::engine::MatchMode;
use crate::lexicon::{builtin, Lexicon, LexiconEntry};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// File name searched for in the current directory and its ancestors.
pub const PROJECT_LEXICON_FILENAME: &str = ".chatbot.toml";
/// File name looked up in the user config directory.
pub const USER_LEXICON_FILENAME: &str = "lexicon.toml";

/// Contents of a lexicon file. Every field is optional.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct LexiconFile {
    pub fallback: Option<String>,
    pub match_mode: Option<MatchMode>,
    pub stop_words: Option<Vec<String>>,
    pub entries: Option<Vec<EntryFile>>,
}

/// One `[[entries]]` table of a lexicon file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EntryFile {
    pub keyword: String,
    pub responses: Vec<String>,
}

/// Where the active lexicon came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for LexiconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconSource::Builtin => write!(f, "built-in lexicon"),
            LexiconSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The effective settings for a chat session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub lexicon: Lexicon,
    pub match_mode: MatchMode,
    pub source: LexiconSource,
}

/// Locates, loads, and validates the lexicon, then resolves the match mode.
pub fn load_settings(
    explicit_path: Option<&Path>,
    mode_override: Option<MatchMode>,
) -> Result<Settings> {
    let located = locate_lexicon_file(explicit_path)?;
    let settings = match located {
        Some(path) => {
            let file = load_lexicon_file(&path)?;
            let file_mode = file.match_mode;
            let lexicon = build_lexicon(file)
                .with_context(|| format!("Invalid lexicon file: {}", path.display()))?;
            for keyword in lexicon.unreachable_keywords() {
                warn!(
                    "Keyword '{}' in {} can never match normalized input.",
                    keyword,
                    path.display()
                );
            }
            Settings {
                lexicon,
                match_mode: mode_override.or(file_mode).unwrap_or_default(),
                source: LexiconSource::File(path),
            }
        }
        None => Settings {
            lexicon: Lexicon::builtin(),
            match_mode: mode_override.unwrap_or_default(),
            source: LexiconSource::Builtin,
        },
    };
    info!(
        "Using {} ({} keywords, {:?} matching)",
        settings.source,
        settings.lexicon.len(),
        settings.match_mode
    );
    Ok(settings)
}

/// Merges a lexicon file over the built-in data and validates the result.
pub fn build_lexicon(file: LexiconFile) -> Result<Lexicon> {
    let entries = match file.entries {
        Some(entries) => entries
            .into_iter()
            .map(|entry| LexiconEntry::new(entry.keyword, entry.responses))
            .collect(),
        None => builtin::entries(),
    };
    let stop_words = match file.stop_words {
        Some(words) => words.into_iter().collect(),
        None => builtin::stop_words(),
    };
    let fallback = file
        .fallback
        .unwrap_or_else(|| builtin::FALLBACK.to_string());
    Lexicon::new(entries, stop_words, fallback)
}

/// Reads and parses a lexicon file.
pub fn load_lexicon_file(path: &Path) -> Result<LexiconFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn locate_lexicon_file(explicit_path: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit_path {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        if !expanded.is_file() {
            return Err(ChatbotError::LexiconNotFound {
                path: expanded.display().to_string(),
            }
            .into());
        }
        info!("Loading lexicon from: {}", expanded.display());
        return Ok(Some(expanded));
    }

    let current_dir = env::current_dir().context("Failed to get current directory")?;
    if let Some(project_path) = find_project_lexicon_path(&current_dir) {
        info!("Loading project lexicon from: {}", project_path.display());
        return Ok(Some(project_path));
    }

    match user_lexicon_path() {
        Some(user_path) if user_path.is_file() => {
            info!("Loading user lexicon from: {}", user_path.display());
            Ok(Some(user_path))
        }
        Some(user_path) => {
            debug!("User lexicon file not found at {}", user_path.display());
            Ok(None)
        }
        None => {
            warn!("Could not determine user config directory.");
            Ok(None)
        }
    }
}

fn find_project_lexicon_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let candidate = path.join(PROJECT_LEXICON_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project lexicon search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn user_lexicon_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Chatbot", "chatbot")
        .map(|dirs| dirs.config_dir().join(USER_LEXICON_FILENAME))
}
