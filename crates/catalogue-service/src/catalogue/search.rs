//! Name-prefix search across the catalogue hierarchy.

use std::str::FromStr;

use serde::Serialize;

use catalogue_core::error::AppError;
use catalogue_entity::{Category, Item, Subcategory};

/// Which kind of catalogue row a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    /// Search categories.
    Category,
    /// Search subcategories.
    Subcategory,
    /// Search items.
    Item,
}

impl FromStr for SearchTarget {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "subcategory" => Ok(Self::Subcategory),
            "item" => Ok(Self::Item),
            other => Err(AppError::validation(format!(
                "Cannot search '{other}', expected category, subcategory or item"
            ))),
        }
    }
}

/// Rows matched by a search, serialized as a plain array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchResults {
    /// Matching categories.
    Categories(Vec<Category>),
    /// Matching subcategories.
    Subcategories(Vec<Subcategory>),
    /// Matching items.
    Items(Vec<Item>),
}

impl SearchResults {
    /// Number of matched rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Categories(rows) => rows.len(),
            Self::Subcategories(rows) => rows.len(),
            Self::Items(rows) => rows.len(),
        }
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parsing() {
        assert_eq!("item".parse::<SearchTarget>().unwrap(), SearchTarget::Item);
        assert_eq!(
            "Category".parse::<SearchTarget>().unwrap(),
            SearchTarget::Category
        );
        assert!("user".parse::<SearchTarget>().is_err());
    }
}
