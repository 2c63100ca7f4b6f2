//! Board definition file format
//!
//! One line per category or item:
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/watermelon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/shirt.png collared shirt
//! ```
//!
//! A category line is the category image followed by its name. An item line
//! starts with `>` and adds an image and its spoken text to the nearest
//! category above it. Key and text are split at the first space, so names and
//! texts may contain spaces. Lines without a space are ignored.

use super::mappings::AacMappings;
use crate::{AacError, Result};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Marker that starts an item line
const ITEM_MARKER: char = '>';

/// How the loader treats malformed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Log and skip malformed lines
    #[default]
    Tolerant,
    /// Fail on the first malformed line
    Strict,
}

/// One classified line of a definition file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionLine<'a> {
    Category { key: &'a str, name: &'a str },
    Item { key: &'a str, text: &'a str },
}

/// Classify a single line, `None` for lines the format ignores
pub fn parse_line(line: &str) -> Option<DefinitionLine<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (head, rest) = line.split_once(' ')?;

    match head.strip_prefix(ITEM_MARKER) {
        Some(key) => Some(DefinitionLine::Item { key, text: rest }),
        None => Some(DefinitionLine::Category { key: head, name: rest }),
    }
}

/// Build a board from definition text
///
/// The board is populated through its public operations and returned on the
/// home page. Nothing is returned unless the whole source was read.
pub fn parse_definition<R: BufRead>(reader: R, mode: LoadMode) -> Result<AacMappings> {
    let mut board = AacMappings::new();
    let mut have_category = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let outcome = match parse_line(&line) {
            None => {
                if !line.trim().is_empty() {
                    debug!("Ignoring line {}: no separator", line_no);
                }
                continue;
            }
            Some(DefinitionLine::Category { key, name }) => {
                board.reset();
                let declared = board
                    .add_item(key, name)
                    .and_then(|_| board.select(key).map(|_| ()));
                have_category = declared.is_ok();
                declared
            }
            Some(DefinitionLine::Item { key, text }) => {
                if have_category {
                    board.add_item(key, text)
                } else {
                    Err(AacError::Other("item line before any category".to_string()))
                }
            }
        };

        if let Err(e) = outcome {
            let message = match e {
                AacError::InvalidKey => "empty image location".to_string(),
                AacError::Other(msg) => msg,
                other => other.to_string(),
            };
            match mode {
                LoadMode::Strict => {
                    return Err(AacError::SourceFormat {
                        line: line_no,
                        message,
                    })
                }
                LoadMode::Tolerant => warn!("Skipping line {}: {}", line_no, message),
            }
        }
    }

    board.reset();
    Ok(board)
}

/// Write every category and item of `board`, whatever page is showing
pub fn write_definition<W: Write>(board: &AacMappings, mut writer: W) -> Result<()> {
    for (key, category) in board.categories() {
        check_key(key)?;
        if key.starts_with(ITEM_MARKER) {
            return Err(AacError::Unserializable(format!(
                "category image {:?} starts with {:?}",
                key, ITEM_MARKER
            )));
        }
        check_text(category.get_category())?;
        writeln!(writer, "{} {}", key, category.get_category())?;

        for (image, text) in category.items() {
            check_key(image)?;
            check_text(text)?;
            writeln!(writer, "{}{} {}", ITEM_MARKER, image, text)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Render `board` as definition text
pub fn to_definition_string(board: &AacMappings) -> Result<String> {
    let mut buf = Vec::new();
    write_definition(board, &mut buf)?;
    String::from_utf8(buf).map_err(|e| AacError::Other(format!("Invalid UTF-8: {}", e)))
}

fn check_key(key: &str) -> Result<()> {
    if key.contains(&[' ', '\n', '\r'][..]) {
        return Err(AacError::Unserializable(format!(
            "image location {:?} contains a space or line break",
            key
        )));
    }
    Ok(())
}

fn check_text(text: &str) -> Result<()> {
    if text.contains('\n') || text.ends_with('\r') {
        return Err(AacError::Unserializable(format!(
            "text {:?} contains a line break",
            text
        )));
    }
    Ok(())
}

impl AacMappings {
    /// Load a board from a definition file
    pub fn load<P: AsRef<Path>>(path: P, mode: LoadMode) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading board from {:?}", path);

        let file = File::open(path)?;
        let board = parse_definition(BufReader::new(file), mode)?;
        info!(
            "Loaded {} categories from {}",
            board.category_count(),
            path.display()
        );
        Ok(board)
    }

    /// Save the board to a definition file
    ///
    /// Written to a sibling temporary file first and renamed into place.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("Saving board to {:?}", path);

        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = Path::new(&tmp_name);

        let written = File::create(tmp_path)
            .map_err(AacError::from)
            .and_then(|file| write_definition(self, BufWriter::new(file)));
        if let Err(e) = written {
            let _ = fs::remove_file(tmp_path);
            return Err(e);
        }

        fs::rename(tmp_path, path)?;
        info!("Saved {} categories to {}", self.category_count(), path.display());
        Ok(())
    }
}
