//! Console speech backend
//!
//! Writes each spoken phrase as one line on an output stream, so the board
//! can run in a plain terminal or feed a separate speech process.
//!
//! Text is written as soon as it is spoken, so the rate setting is kept for
//! whoever reads it back but never changes the output. Volume zero mutes.

use crate::speech::Synth;
use crate::{AacError, Result};
use log::debug;
use std::io::{self, Write};

/// Backend that writes spoken text to a stream
pub struct ConsoleSynth {
    /// Destination for spoken text
    out: Box<dyn Write + Send>,

    /// Written before each phrase, separated by a space
    prefix: String,

    /// Cached rate setting (0-100), not applied to output
    rate: u8,

    /// Cached volume setting (0-100); zero mutes output
    volume: u8,
}

impl ConsoleSynth {
    /// Create a backend writing to `out`
    pub fn new(out: Box<dyn Write + Send>, prefix: impl Into<String>) -> Self {
        Self {
            out,
            prefix: prefix.into(),
            rate: 50,
            volume: 100,
        }
    }

    /// Create a backend writing to standard output
    pub fn stdout(prefix: impl Into<String>) -> Self {
        Self::new(Box::new(io::stdout()), prefix)
    }

    /// Create a backend that discards everything
    pub fn silent() -> Self {
        Self::new(Box::new(io::sink()), "")
    }

    /// Current rate setting
    pub fn rate(&self) -> u8 {
        self.rate
    }

    /// Current volume setting
    pub fn volume(&self) -> u8 {
        self.volume
    }
}

impl Synth for ConsoleSynth {
    fn set_rate(&mut self, rate: u8) -> Result<()> {
        debug!("Setting rate to {}", rate);
        self.rate = rate.min(100);
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Setting volume to {}", volume);
        self.volume = volume.min(100);
        Ok(())
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        if text.is_empty() || self.volume == 0 {
            return Ok(());
        }

        debug!("Speaking: {}", text);
        let line = if self.prefix.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.prefix, text)
        };
        writeln!(self.out, "{}", line)
            .and_then(|_| self.out.flush())
            .map_err(|e| AacError::Speech(format!("Speak failed: {}", e)))
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("Canceling speech");
        Ok(())
    }
}
