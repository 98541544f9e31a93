//! # Chat Session Loop
//!
//! File: cli/src/session/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module runs the interactive conversation: print a banner, then for
//! each line of input either stop (on the `exit` sentinel or end of input) or
//! print the chatbot's reply. Turns are independent; nothing carries over from
//! one line to the next.
//!
//! ## Architecture
//!
//! `Session` owns the `Chatbot`, the random source, and the `Typewriter`.
//! `Session::run` is generic over its input (`BufRead`) and output (`Write`)
//! so the binary drives it with stdin/stdout and tests drive it with
//! in-memory buffers.
//!
//! Turn flow:
//! 1. Print the `You: ` prompt and read one line (line terminator stripped).
//!    Bytes that are not valid UTF-8 become U+FFFD instead of ending the chat.
//! 2. If the raw line is exactly `exit`, stop. The check is case-sensitive and
//!    happens before normalization.
//! 3. Otherwise show the "Generating reply..." indicator (animated sessions
//!    only), then print `Chatbot: <reply>` and a blank line.
//!
//! End of input and read errors end the session the same way the sentinel
//! does. Only a failure to write output is reported as an error.
//!
//! ## Examples
//!
//! ```rust
//! use chatbot::common::ui::Typewriter;
//! use chatbot::engine::{Chatbot, MatchMode};
//! use chatbot::lexicon::Lexicon;
//! use chatbot::session::{Session, SessionEnd};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let bot = Chatbot::new(Lexicon::builtin(), MatchMode::WholeWord);
//! let mut session = Session::new(bot, StdRng::seed_from_u64(1), Typewriter::instant());
//!
//! let mut output = Vec::new();
//! let outcome = session.run("asdkjasd\nexit\n".as_bytes(), &mut output)?;
//! assert_eq!(outcome.turns, 1);
//! assert_eq!(outcome.end, SessionEnd::Sentinel);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::common::ui::Typewriter;
use crate::core::error::Result;
use crate::engine::Chatbot;
use anyhow::Context;
use rand::Rng;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Raw input line that ends the session.
pub const EXIT_SENTINEL: &str = "exit";
/// First line printed when a session starts.
pub const BANNER: &str = "Welcome to Chatbot! Type 'exit' to end the chat.";
pub const PROMPT: &str = "You: ";
pub const REPLY_LABEL: &str = "Chatbot: ";
pub const THINKING: &str = "Generating reply...";
pub const FAREWELL: &str = "exiting chatbot...";

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit sentinel.
    Sentinel,
    /// The input stream ended or could not be read.
    EndOfInput,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Number of replies printed.
    pub turns: usize,
    pub end: SessionEnd,
}

/// An interactive conversation with a `Chatbot`.
pub struct Session<R> {
    bot: Chatbot,
    rng: R,
    typewriter: Typewriter,
}

impl<R: Rng> Session<R> {
    /// Creates a session that answers with `bot`, drawing replies from `rng`.
    pub fn new(bot: Chatbot, rng: R, typewriter: Typewriter) -> Self {
        Self {
            bot,
            rng,
            typewriter,
        }
    }

    /// Runs the conversation until the sentinel or end of input.
    pub fn run<I, O>(&mut self, mut input: I, output: &mut O) -> Result<SessionOutcome>
    where
        I: BufRead,
        O: Write + ?Sized,
    {
        info!(
            "Starting session with {} keywords ({:?} matching)",
            self.bot.lexicon().len(),
            self.bot.mode()
        );
        writeln!(output, "{BANNER}\n").context("Failed to write welcome banner")?;

        let mut buf = Vec::new();
        let mut turns = 0;
        let end = loop {
            write!(output, "{PROMPT}").context("Failed to write prompt")?;
            output.flush().context("Failed to flush prompt")?;

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    debug!("Reached end of input");
                    writeln!(output).context("Failed to write output")?;
                    break SessionEnd::EndOfInput;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Failed to read input, ending session: {}", e);
                    writeln!(output).context("Failed to write output")?;
                    break SessionEnd::EndOfInput;
                }
            }
            let line = decode_line(&buf);

            if line == EXIT_SENTINEL {
                break SessionEnd::Sentinel;
            }

            self.answer(&line, output)?;
            turns += 1;
        };

        self.typewriter
            .type_out(output, &format!("{FAREWELL}\n\n"))
            .context("Failed to write exit message")?;
        info!("Session ended after {} turns ({:?})", turns, end);
        Ok(SessionOutcome { turns, end })
    }

    fn answer<O: Write + ?Sized>(&mut self, line: &str, output: &mut O) -> Result<()> {
        if self.typewriter.is_animated() {
            self.typewriter
                .type_out(output, THINKING)
                .context("Failed to write reply indicator")?;
            // Blank out the indicator so the reply starts on a clean line.
            write!(output, "\r{}\r", " ".repeat(THINKING.len()))
                .context("Failed to clear reply indicator")?;
        }
        let reply = self.bot.reply(line, &mut self.rng);
        writeln!(output, "{REPLY_LABEL}{reply}\n").context("Failed to write reply")?;
        Ok(())
    }
}

/// Strips one `\n` or `\r\n` terminator and decodes the rest lossily.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchMode;
    use crate::lexicon::Lexicon;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::{self, Read};

    const FALLBACK_LINE: &str =
        "Chatbot: I'm not sure how to respond to that. Can you ask me something else?";

    fn session(seed: u64) -> Session<StdRng> {
        Session::new(
            Chatbot::new(Lexicon::builtin(), MatchMode::WholeWord),
            StdRng::seed_from_u64(seed),
            Typewriter::instant(),
        )
    }

    fn run(input: &str) -> (SessionOutcome, String) {
        let mut output = Vec::new();
        let outcome = session(11)
            .run(input.as_bytes(), &mut output)
            .expect("session should run");
        (outcome, String::from_utf8(output).expect("utf-8 output"))
    }

    fn reply_lines(output: &str) -> Vec<&str> {
        output
            .split(PROMPT)
            .filter_map(|chunk| chunk.lines().find(|l| l.starts_with(REPLY_LABEL)))
            .collect()
    }

    #[test]
    fn test_exit_sentinel_stops_without_reply() {
        let (outcome, output) = run("exit\nhello\n");
        assert_eq!(
            outcome,
            SessionOutcome {
                turns: 0,
                end: SessionEnd::Sentinel
            }
        );
        assert!(output.starts_with(&format!("{BANNER}\n\n{PROMPT}")));
        assert!(!output.contains(REPLY_LABEL));
        assert!(output.ends_with(&format!("{FAREWELL}\n\n")));
    }

    #[test]
    fn test_sentinel_is_exact_and_case_sensitive() {
        let (outcome, output) = run("EXIT\n exit\nexit!\nexit\n");
        assert_eq!(outcome.turns, 3);
        assert_eq!(outcome.end, SessionEnd::Sentinel);
        assert_eq!(reply_lines(&output), vec![FALLBACK_LINE; 3]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (outcome, _) = run("exit\r\n");
        assert_eq!(outcome.turns, 0);
        assert_eq!(outcome.end, SessionEnd::Sentinel);
    }

    #[test]
    fn test_invalid_utf8_line_gets_fallback() {
        let mut output = Vec::new();
        let outcome = session(11)
            .run(&b"caf\xe9\nhello\nexit\n"[..], &mut output)
            .unwrap();
        assert_eq!(
            outcome,
            SessionOutcome {
                turns: 2,
                end: SessionEnd::Sentinel
            }
        );

        let output = String::from_utf8(output).unwrap();
        let replies = reply_lines(&output);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0], FALLBACK_LINE);
        let greeting = replies[1].strip_prefix(REPLY_LABEL).unwrap();
        let lexicon = Lexicon::builtin();
        assert!(lexicon.get("hello").unwrap().responses().iter().any(|r| r == greeting));
    }

    #[test]
    fn test_decode_line_strips_one_terminator() {
        assert_eq!(decode_line(b"exit\n"), "exit");
        assert_eq!(decode_line(b"exit\r\n"), "exit");
        assert_eq!(decode_line(b"exit"), "exit");
        assert_eq!(decode_line(b"exit\n\n"), "exit\n");
        assert_eq!(decode_line(b"caf\xe9"), "caf\u{FFFD}");
    }

    #[test]
    fn test_end_of_input_acts_like_exit() {
        let (outcome, output) = run("asdkjasd\n");
        assert_eq!(
            outcome,
            SessionOutcome {
                turns: 1,
                end: SessionEnd::EndOfInput
            }
        );
        assert!(output.ends_with(&format!("{PROMPT}\n{FAREWELL}\n\n")));
    }

    #[test]
    fn test_empty_line_gets_fallback() {
        let (outcome, output) = run("\nexit\n");
        assert_eq!(outcome.turns, 1);
        assert_eq!(reply_lines(&output), vec![FALLBACK_LINE]);
    }

    #[test]
    fn test_replies_are_labelled_and_matched() {
        let (outcome, output) = run("Hello, how are you?\nCan you tell me a joke?\nexit\n");
        assert_eq!(outcome.turns, 2);

        let lexicon = Lexicon::builtin();
        let replies = reply_lines(&output);
        assert_eq!(replies.len(), 2);
        let greeting = replies[0].strip_prefix(REPLY_LABEL).unwrap();
        let joke = replies[1].strip_prefix(REPLY_LABEL).unwrap();
        assert!(lexicon.get("hello").unwrap().responses().iter().any(|r| r == greeting));
        assert!(lexicon.get("tell joke").unwrap().responses().iter().any(|r| r == joke));
    }

    #[test]
    fn test_same_seed_same_conversation() {
        let input = "hello\nhi\ntell me a joke\nweather?\nexit\n";
        let mut first = Vec::new();
        let mut second = Vec::new();
        session(99).run(input.as_bytes(), &mut first).unwrap();
        session(99).run(input.as_bytes(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_instant_session_has_no_indicator() {
        let (_, output) = run("hello\nexit\n");
        assert!(!output.contains(THINKING));
    }

    #[test]
    fn test_animated_session_clears_indicator() {
        let mut session = Session::new(
            Chatbot::new(Lexicon::builtin(), MatchMode::WholeWord),
            StdRng::seed_from_u64(3),
            Typewriter::new(
                std::time::Duration::ZERO,
                std::time::Duration::ZERO,
                std::time::Duration::ZERO,
                std::time::Duration::from_millis(1),
            ),
        );
        let mut output = Vec::new();
        session.run("asdkjasd\nexit\n".as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        let cleared = format!("{THINKING}\r{}\r{FALLBACK_LINE}\n", " ".repeat(THINKING.len()));
        assert!(output.contains(&cleared), "output: {output:?}");
    }

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "stream closed"))
        }
    }

    #[test]
    fn test_read_error_ends_session_cleanly() {
        let mut output = Vec::new();
        let outcome = session(1)
            .run(io::BufReader::new(BrokenInput), &mut output)
            .unwrap();
        assert_eq!(outcome.end, SessionEnd::EndOfInput);
        assert_eq!(outcome.turns, 0);
    }

    struct BrokenOutput;

    impl Write for BrokenOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_reported() {
        let result = session(1).run("hello\n".as_bytes(), &mut BrokenOutput);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to write welcome banner"));
    }
}
