//! aacboard - two-level picture board for augmentative and alternative communication
//!
//! The home page offers one image per category. Picking a category opens it;
//! picking an item inside it yields the text to speak. Boards are read from
//! and written to a small line-oriented definition format.

pub mod board;
pub mod error;
pub mod input;
pub mod speech;
pub mod state;

pub use board::{AacCategory, AacMappings, AssociativeArray, LoadMode};
pub use error::{AacError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "aacboard";
