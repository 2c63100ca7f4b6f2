//! Speech backends

// Writes spoken text to a terminal or other stream
pub mod console;
