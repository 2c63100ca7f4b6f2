//! Speech synthesizer abstraction
//!
//! The board hands text to a `Synth` whenever an item is picked. Audio
//! playback is left to hosts; the bundled backend writes the text out.

use super::backends::console::ConsoleSynth;
use crate::state::config::Config;
use crate::Result;
use log::info;

/// Commands sent to a speech backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCommand {
    /// Speak a string of text
    Speak(String),
    /// Cancel/silence current speech
    Cancel,
    /// Set speech rate (0-100)
    SetRate(u8),
    /// Set speech volume (0-100)
    SetVolume(u8),
}

/// Speech synthesizer trait
pub trait Synth: Send {
    /// Send a raw command to the backend
    fn send(&mut self, cmd: SpeechCommand) -> Result<()> {
        match cmd {
            SpeechCommand::Speak(text) => self.speak(&text),
            SpeechCommand::Cancel => self.cancel(),
            SpeechCommand::SetRate(rate) => self.set_rate(rate),
            SpeechCommand::SetVolume(volume) => self.set_volume(volume),
        }
    }

    /// Set speech rate (0-100, where 50 is normal)
    fn set_rate(&mut self, rate: u8) -> Result<()>;

    /// Set speech volume (0-100)
    fn set_volume(&mut self, volume: u8) -> Result<()>;

    /// Speak text to the user
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Cancel/silence current speech
    fn cancel(&mut self) -> Result<()>;
}

/// Create the synthesizer described by `config`
///
/// Rate and volume from the config are applied before returning.
pub fn create_synth(config: &Config) -> Result<Box<dyn Synth>> {
    let mut synth: Box<dyn Synth> = if config.speech_enabled() {
        info!("Speech output to console");
        Box::new(ConsoleSynth::stdout(config.speech_prefix()))
    } else {
        info!("Speech disabled");
        Box::new(ConsoleSynth::silent())
    };

    if let Some(rate) = config.rate() {
        synth.set_rate(rate)?;
        info!("Speech rate set to {}", rate);
    }
    if let Some(volume) = config.volume() {
        synth.set_volume(volume)?;
        info!("Speech volume set to {}", volume);
    }

    Ok(synth)
}
