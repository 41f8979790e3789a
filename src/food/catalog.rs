//! Food Catalog Bootstrap
//!
//! Locates and loads the inventory catalog at startup. Falls back to a
//! built-in menu when no catalog file is available.

use crate::store::CatalogItem;
use rust_decimal::Decimal;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// File name looked up inside the assets directory
pub const CATALOG_FILE_NAME: &str = "food_catalog.json";

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate catalog id: {0}")]
    DuplicateId(u32),

    #[error("Negative price for catalog id {0}")]
    NegativePrice(u32),
}

fn item(id: u32, name: &str, description: &str, cents: i64, image: &str) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        image: image.to_string(),
    }
}

/// Built-in menu used when no catalog file is found
pub fn default_catalog() -> Vec<CatalogItem> {
    vec![
        item(1, "Pizza", "Wood-fired margherita with fresh basil", 999, "🍕"),
        item(2, "Burger", "Beef patty, cheddar and pickles", 849, "🍔"),
        item(3, "Sushi", "Eight-piece salmon and tuna platter", 1250, "🍣"),
        item(4, "Tacos", "Three corn tortillas with carnitas", 725, "🌮"),
        item(5, "Salad", "Garden greens with lemon vinaigrette", 675, "🥗"),
        item(6, "Ramen", "Tonkotsu broth with soft egg", 1100, "🍜"),
    ]
}

/// Checks that ids are unique and prices are non-negative
pub fn validate_catalog(items: &[CatalogItem]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for item in items {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
        if item.price.is_sign_negative() && !item.price.is_zero() {
            return Err(CatalogError::NegativePrice(item.id));
        }
    }

    Ok(())
}

/// Parses and validates a catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let items: Vec<CatalogItem> = serde_json::from_str(json)?;
    validate_catalog(&items)?;
    Ok(items)
}

/// Reads a catalog file from disk
pub async fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>, CatalogError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_catalog(&json)
}

/// Finds `assets/food_catalog.json` in `start` or its parent directory
pub fn find_catalog_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(2)
        .map(|dir| dir.join("assets").join(CATALOG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Resolves the bootstrap catalog.
///
/// An explicit path must load; otherwise `assets/food_catalog.json` is used
/// when present, else [`default_catalog`].
pub async fn bootstrap_catalog(explicit: Option<&Path>) -> Result<Vec<CatalogItem>, CatalogError> {
    if let Some(path) = explicit {
        return load_catalog(path).await;
    }

    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match find_catalog_file(&current_dir) {
        Some(path) => {
            tracing::info!(path = ?path, "Loading food catalog");
            load_catalog(&path).await
        }
        None => {
            tracing::info!("No catalog file found, using built-in menu");
            Ok(default_catalog())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = default_catalog();
        assert!(!catalog.is_empty());
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_parse_catalog_reads_numeric_prices() {
        let items = parse_catalog(
            r#"[{"id": 9, "name": "Soup", "description": "Hot", "price": 4.5, "image": "🍲"}]"#,
        )
        .unwrap();

        assert_eq!(items[0].price, Decimal::new(45, 1));
    }

    #[test]
    fn test_parse_catalog_rejects_duplicates() {
        let json = r#"[
            {"id": 1, "name": "A", "description": "", "price": 1, "image": "a"},
            {"id": 1, "name": "B", "description": "", "price": 2, "image": "b"}
        ]"#;

        assert!(matches!(
            parse_catalog(json),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_parse_catalog_rejects_negative_price() {
        let json = r#"[{"id": 3, "name": "C", "description": "", "price": -1.25, "image": "c"}]"#;

        assert!(matches!(
            parse_catalog(json),
            Err(CatalogError::NegativePrice(3))
        ));
    }

    #[tokio::test]
    async fn test_load_catalog_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/food_catalog.json")).await;
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[tokio::test]
    async fn test_find_catalog_file_checks_parent() {
        let root = std::env::temp_dir().join(format!("food-{}", uuid::Uuid::new_v4().simple()));
        let nested = root.join("bin");
        tokio::fs::create_dir_all(root.join("assets")).await.unwrap();
        tokio::fs::create_dir_all(&nested).await.unwrap();

        assert_eq!(find_catalog_file(&nested), None);

        let file = root.join("assets").join(CATALOG_FILE_NAME);
        tokio::fs::write(&file, r#"[{"id": 1, "name": "Soup", "description": "Hot", "price": 4.5, "image": "🍲"}]"#)
            .await
            .unwrap();

        assert_eq!(find_catalog_file(&nested), Some(file.clone()));
        assert_eq!(find_catalog_file(&root), Some(file.clone()));
        assert_eq!(load_catalog(&file).await.unwrap()[0].name, "Soup");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
