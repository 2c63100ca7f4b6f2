//! A single page of the board: image locations mapped to spoken text

use super::assoc::AssociativeArray;
use crate::{AacError, Result};
use log::debug;

/// A named group of selectable items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AacCategory {
    name: String,
    items: AssociativeArray<String, String>,
}

impl AacCategory {
    /// Create a new empty category with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: AssociativeArray::new(),
        }
    }

    /// Add or replace the text spoken for `image_loc`
    pub fn add_item(&mut self, image_loc: impl Into<String>, text: impl Into<String>) -> Result<()> {
        let image_loc = image_loc.into();
        debug!("Category {:?}: adding item {:?}", self.name, image_loc);
        self.items.set(image_loc, text.into())
    }

    /// Image locations of every item, in the order they were added
    pub fn get_image_locs(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// The display name of this category
    pub fn get_category(&self) -> &str {
        &self.name
    }

    /// Text to speak for `image_loc`
    pub fn select(&self, image_loc: &str) -> Result<&str> {
        self.items
            .get(image_loc)
            .map(String::as_str)
            .map_err(|_| AacError::ItemNotFound {
                category: self.name.clone(),
                image: image_loc.to_string(),
            })
    }

    /// Check whether `image_loc` is an item of this category
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }

    /// Iterate over (image location, text) pairs in insertion order
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.entries().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the category has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> AacCategory {
        let mut category = AacCategory::new("food");
        category.add_item("img/food/fries.png", "french fries").unwrap();
        category.add_item("img/food/watermelon.png", "watermelon").unwrap();
        category
    }

    #[test]
    fn test_new_category_is_empty() {
        let category = AacCategory::new("clothing");
        assert_eq!(category.get_category(), "clothing");
        assert!(category.get_image_locs().is_empty());
        assert!(category.is_empty());
    }

    #[test]
    fn test_image_locs_in_order() {
        assert_eq!(
            food().get_image_locs(),
            vec!["img/food/fries.png", "img/food/watermelon.png"]
        );
    }

    #[test]
    fn test_select() {
        let category = food();
        assert_eq!(category.select("img/food/fries.png").unwrap(), "french fries");
    }

    #[test]
    fn test_select_missing_item() {
        match food().select("img/clothing/shirt.png") {
            Err(AacError::ItemNotFound { category, image }) => {
                assert_eq!(category, "food");
                assert_eq!(image, "img/clothing/shirt.png");
            }
            other => panic!("expected ItemNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_has_image() {
        let category = food();
        assert!(category.has_image("img/food/watermelon.png"));
        assert!(!category.has_image("img/food/plate.png"));
    }

    #[test]
    fn test_add_item_empty_key() {
        let mut category = food();
        assert!(matches!(category.add_item("", "nothing"), Err(AacError::InvalidKey)));
        assert_eq!(category.len(), 2);
    }

    #[test]
    fn test_add_item_overwrites_text() {
        let mut category = food();
        category.add_item("img/food/fries.png", "chips").unwrap();
        assert_eq!(category.select("img/food/fries.png").unwrap(), "chips");
        assert_eq!(category.len(), 2);
    }
}
