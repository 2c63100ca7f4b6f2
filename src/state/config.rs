//! Configuration management

use crate::board::LoadMode;
use crate::{AacError, Result};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Persistent settings for the board front end
///
/// Stored as INI in `~/.aacboard.cfg`, with a `[board]` section for the
/// definition file and a `[speech]` section for spoken output.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path
    path: PathBuf,
}

impl Config {
    /// Load configuration from the default location or create it
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| AacError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| AacError::Config(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| AacError::Config(format!("Failed to save config: {}", e)))
    }

    /// Default config file path (~/.aacboard.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".aacboard.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("board"))
            .set("file", "board.txt")
            .set("strict", "false")
            .set("autosave", "false");

        ini.with_section(Some("speech"))
            .set("enabled", "true")
            .set("prefix", "»");

        ini
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Board definition file to open when none is given on the command line
    pub fn board_file(&self) -> PathBuf {
        PathBuf::from(self.get_string("board", "file", "board.txt"))
    }

    /// How strictly the definition file is parsed
    pub fn load_mode(&self) -> LoadMode {
        if self.get_bool("board", "strict", false) {
            LoadMode::Strict
        } else {
            LoadMode::Tolerant
        }
    }

    /// Save a modified board on quit
    pub fn autosave(&self) -> bool {
        self.get_bool("board", "autosave", false)
    }

    /// Speak item text at all
    pub fn speech_enabled(&self) -> bool {
        self.get_bool("speech", "enabled", true)
    }

    /// Text written before each spoken phrase
    pub fn speech_prefix(&self) -> String {
        self.get_string("speech", "prefix", "»")
    }

    /// Speech rate (0-100), for backends that pace their output
    pub fn rate(&self) -> Option<u8> {
        self.get_int("speech", "rate", -1)
            .try_into()
            .ok()
            .filter(|&r| r <= 100)
    }

    /// Speech volume (0-100)
    pub fn volume(&self) -> Option<u8> {
        self.get_int("speech", "volume", -1)
            .try_into()
            .ok()
            .filter(|&v| v <= 100)
    }
}
