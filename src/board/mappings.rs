//! Two-level board navigation
//!
//! The board starts on the home page, which offers one image per category.
//! Selecting a category image opens that category; selecting an item image
//! inside it yields the text to speak. `reset` returns to the home page.

use super::assoc::AssociativeArray;
use super::category::AacCategory;
use crate::{AacError, Result};
use log::{debug, info};
use serde::Serialize;

/// Which page of the board is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Top level, listing categories
    #[default]
    Home,
    /// Inside the category stored under this key
    InCategory(String),
}

/// Serializable snapshot of the current page, for hosts that render the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Display name of the open category, `None` on the home page
    pub category: Option<String>,
    /// Images offered on this page, in board order
    pub images: Vec<String>,
}

/// The full board: every category plus the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AacMappings {
    categories: AssociativeArray<String, AacCategory>,
    view: View,
}

impl AacMappings {
    /// Create an empty board on the home page
    pub fn new() -> Self {
        Self::default()
    }

    /// Act on a picked image
    ///
    /// On the home page a category image opens that category and returns
    /// empty text. Inside a category an item image returns its text. A
    /// failed pick leaves the current page unchanged.
    pub fn select(&mut self, image_loc: &str) -> Result<String> {
        if let View::InCategory(key) = &self.view {
            let text = self.category_for(key)?.select(image_loc)?;
            debug!("Selected item {:?} -> {:?}", image_loc, text);
            return Ok(text.to_string());
        }

        if !self.categories.has_key(image_loc) {
            return Err(AacError::UnknownSelection(image_loc.to_string()));
        }
        debug!("Opening category {:?}", image_loc);
        self.view = View::InCategory(image_loc.to_string());
        Ok(String::new())
    }

    /// Add to the current page
    ///
    /// On the home page this declares a category keyed by `image_loc` and
    /// named `text`, replacing any category already stored under that key.
    /// Inside a category it adds an item to that category.
    pub fn add_item(&mut self, image_loc: &str, text: &str) -> Result<()> {
        match &self.view {
            View::Home => {
                if self.categories.has_key(image_loc) {
                    info!("Replacing category {:?} with new category {:?}", image_loc, text);
                }
                self.categories
                    .set(image_loc.to_string(), AacCategory::new(text))
            }
            View::InCategory(key) => {
                let key = key.clone();
                self.categories
                    .get_mut(key.as_str())
                    .map_err(|_| AacError::UnknownSelection(key.clone()))?
                    .add_item(image_loc, text)
            }
        }
    }

    /// Images offered on the current page
    pub fn get_image_locs(&self) -> Vec<String> {
        match &self.view {
            View::Home => self.categories.keys().cloned().collect(),
            View::InCategory(key) => self
                .categories
                .get(key.as_str())
                .map(AacCategory::get_image_locs)
                .unwrap_or_default(),
        }
    }

    /// Display name of the open category, empty on the home page
    pub fn get_category(&self) -> &str {
        match &self.view {
            View::Home => "",
            View::InCategory(key) => self
                .categories
                .get(key.as_str())
                .map(AacCategory::get_category)
                .unwrap_or(""),
        }
    }

    /// Return to the home page
    pub fn reset(&mut self) {
        if self.view != View::Home {
            debug!("Returning to home page");
        }
        self.view = View::Home;
    }

    /// Check whether `image_loc` is offered on the current page
    pub fn has_image(&self, image_loc: &str) -> bool {
        match &self.view {
            View::Home => self.categories.has_key(image_loc),
            View::InCategory(key) => self
                .categories
                .get(key.as_str())
                .map(|category| category.has_image(image_loc))
                .unwrap_or(false),
        }
    }

    /// The current page
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Key of the open category, if any
    pub fn current(&self) -> Option<&str> {
        match &self.view {
            View::Home => None,
            View::InCategory(key) => Some(key.as_str()),
        }
    }

    /// Snapshot of the current page
    pub fn snapshot(&self) -> BoardView {
        BoardView {
            category: self.current().map(|_| self.get_category().to_string()),
            images: self.get_image_locs(),
        }
    }

    /// Iterate over every (category key, category) pair, regardless of view
    pub fn categories(&self) -> impl Iterator<Item = (&str, &AacCategory)> {
        self.categories.entries().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of categories on the board
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Check if the board has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn category_for(&self, key: &str) -> Result<&AacCategory> {
        self.categories
            .get(key)
            .map_err(|_| AacError::UnknownSelection(key.to_string()))
    }
}
