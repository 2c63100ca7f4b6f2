//! Application state management
//!
//! `State` ties the board to the things around it: the configuration, the
//! file the board came from, and the synthesizer that speaks picked items.

pub mod config;

use crate::board::{AacMappings, LoadMode};
use crate::speech::Synth;
use crate::Result;
use config::Config;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Session state for one running board
pub struct State {
    /// Configuration loaded from ~/.aacboard.cfg
    pub config: Config,

    /// The board being navigated
    pub board: AacMappings,

    /// Speech synthesizer for picked items
    pub synth: Box<dyn Synth>,

    /// Definition file the board is saved back to
    board_path: PathBuf,

    /// Board changed since it was loaded or last saved
    dirty: bool,
}

impl State {
    /// Create a session around an already built board
    pub fn new(
        config: Config,
        board: AacMappings,
        synth: Box<dyn Synth>,
        board_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            board,
            synth,
            board_path: board_path.into(),
            dirty: false,
        }
    }

    /// Load the board at `board_path`, starting empty if the file does not exist
    pub fn open(
        config: Config,
        synth: Box<dyn Synth>,
        board_path: impl Into<PathBuf>,
        mode: LoadMode,
    ) -> Result<Self> {
        let board_path = board_path.into();
        let board = if board_path.exists() {
            AacMappings::load(&board_path, mode)?
        } else {
            warn!("Board file {} not found, starting empty", board_path.display());
            AacMappings::new()
        };
        info!("Board ready with {} categories", board.category_count());
        Ok(Self::new(config, board, synth, board_path))
    }

    /// Pick an image, speaking any text it yields
    pub fn select(&mut self, image_loc: &str) -> Result<String> {
        let text = self.board.select(image_loc)?;
        if !text.is_empty() {
            self.synth.cancel()?;
            self.synth.speak(&text)?;
        }
        Ok(text)
    }

    /// Add a category or item to the current page
    pub fn add_item(&mut self, image_loc: &str, text: &str) -> Result<()> {
        self.board.add_item(image_loc, text)?;
        self.dirty = true;
        Ok(())
    }

    /// Go back to the home page
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Save the board to the file it was opened from
    pub fn save(&mut self) -> Result<()> {
        self.board.save(&self.board_path)?;
        self.dirty = false;
        Ok(())
    }

    /// Save the board to `path` and use that file from now on
    ///
    /// The board path only changes once the save succeeded.
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.board.save(path)?;
        self.board_path = path.to_path_buf();
        self.dirty = false;
        Ok(())
    }

    /// Finish the session, saving first if autosave is on and the board changed
    pub fn shutdown(&mut self) -> Result<()> {
        if self.dirty && self.config.autosave() {
            info!("Autosaving board to {}", self.board_path.display());
            self.save()?;
        }
        Ok(())
    }

    /// Board file path
    pub fn board_path(&self) -> &Path {
        &self.board_path
    }

    /// Board changed since it was loaded or last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
