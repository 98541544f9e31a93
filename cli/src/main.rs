//! # Chatbot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the chatbot CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the lexicon and running the chat session on stdin/stdout
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the built-in lexicon
//! chatbot
//!
//! # Reproducible replies, no typing animation
//! chatbot --seed 7 --instant
//!
//! # Custom lexicon, keywords matched as whole words only
//! chatbot --lexicon ~/bots/weather.toml --match-mode whole-word
//! ```
//!
use chatbot::common::ui::Typewriter;
use chatbot::core::config;
use chatbot::core::error::Result;
use chatbot::engine::{Chatbot, MatchMode};
use chatbot::session::Session;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatbot",
    about = "A keyword-matching chatbot with canned replies",
    long_about = "Chat with a small keyword-matching bot. Type 'exit' to end the chat.\n\
                  Replies come from a lexicon of keyword phrases; the first keyword found\n\
                  in your (normalized) message picks a random reply.",
    version
)]
struct Cli {
    /// TOML lexicon file to use instead of the discovered or built-in one.
    #[arg(short, long, env = "CHATBOT_LEXICON", value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// How keywords are matched; overrides the lexicon file's setting.
    #[arg(short, long, value_enum)]
    match_mode: Option<MatchMode>,

    /// Seed for reply selection, for reproducible conversations.
    #[arg(long)]
    seed: Option<u64>,

    /// Print output immediately instead of typing it out.
    #[arg(long)]
    instant: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Chat session failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let settings = config::load_settings(cli.lexicon.as_deref(), cli.match_mode)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let typewriter = if cli.instant {
        Typewriter::instant()
    } else {
        Typewriter::default()
    };

    let bot = Chatbot::new(settings.lexicon, settings.match_mode);
    let mut session = Session::new(bot, rng, typewriter);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = session.run(stdin.lock(), &mut stdout.lock())?;
    info!("Chat finished: {:?}", outcome);
    Ok(())
}
