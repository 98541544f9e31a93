//! # Typewriter Output
//!
//! File: cli/src/common/ui/typewriter.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Writes text one character at a time with a short pause after each
//! character. The pause starts long and shrinks by a fixed step per character
//! until it reaches a floor, then a final settle pause follows the whole
//! message. This is purely cosmetic: `Typewriter::instant()` produces the same
//! bytes without sleeping.
//!
//! ## Examples
//!
//! ```rust
//! use chatbot::common::ui::Typewriter;
//! use std::time::Duration;
//!
//! let classic = Typewriter::default();
//! assert_eq!(classic.delay_for(0), Duration::from_millis(120));
//! assert_eq!(classic.delay_for(4), Duration::from_millis(100));
//! assert_eq!(classic.delay_for(50), Duration::from_millis(30));
//!
//! let mut out = Vec::new();
//! Typewriter::instant().type_out(&mut out, "hi")?;
//! assert_eq!(out, b"hi");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Per-character output delay settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typewriter {
    initial: Duration,
    step: Duration,
    floor: Duration,
    settle: Duration,
}

impl Default for Typewriter {
    /// 120ms for the first character, 5ms less for each following one, never
    /// below 30ms, then 300ms once the message is out.
    fn default() -> Self {
        Self::new(
            Duration::from_millis(120),
            Duration::from_millis(5),
            Duration::from_millis(30),
            Duration::from_millis(300),
        )
    }
}

impl Typewriter {
    pub const fn new(initial: Duration, step: Duration, floor: Duration, settle: Duration) -> Self {
        Self {
            initial,
            step,
            floor,
            settle,
        }
    }

    /// A typewriter that never sleeps.
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    /// Whether any output produced by this typewriter is delayed.
    pub fn is_animated(&self) -> bool {
        !(self.initial.is_zero() && self.floor.is_zero() && self.settle.is_zero())
    }

    /// Delay after the character at `index` (0-based).
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.initial
            .saturating_sub(self.step.saturating_mul(index))
            .max(self.floor)
    }

    /// Writes `text` character by character, flushing after each one.
    pub fn type_out<W: Write + ?Sized>(&self, out: &mut W, text: &str) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for (index, ch) in text.chars().enumerate() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            pause(self.delay_for(index));
        }
        pause(self.settle);
        Ok(())
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
