//! The board itself: categories of images and the navigation between them

pub mod assoc;
pub mod category;
pub mod format;
pub mod mappings;

pub use assoc::{AssociativeArray, KvPair};
pub use category::AacCategory;
pub use format::{parse_definition, to_definition_string, write_definition, LoadMode};
pub use mappings::{AacMappings, BoardView, View};
