//! Shop catalog
//!
//! Read-only list of businesses, loaded once at startup from a JSON file or
//! the built-in seed.

pub mod seed;

use std::collections::HashSet;
use std::path::Path;

use shared::models::{Shop, ShopKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate shop id: {0}")]
    DuplicateId(i64),
}

/// Listing filters, all optional
#[derive(Debug, Clone, Default)]
pub struct ShopFilter {
    pub kind: Option<ShopKind>,
    /// Case-insensitive category match
    pub category: Option<String>,
}

impl ShopFilter {
    fn matches(&self, shop: &Shop) -> bool {
        if let Some(kind) = self.kind
            && shop.kind != kind
        {
            return false;
        }
        if let Some(category) = &self.category
            && !shop.category.eq_ignore_ascii_case(category)
        {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    shops: Vec<Shop>,
}

impl Catalog {
    pub fn new(shops: Vec<Shop>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for shop in &shops {
            if !seen.insert(shop.id) {
                return Err(CatalogError::DuplicateId(shop.id));
            }
        }
        Ok(Self { shops })
    }

    pub fn seed() -> Self {
        Self {
            shops: seed::shops(),
        }
    }

    /// Load a JSON array of shops
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let shops: Vec<Shop> = serde_json::from_str(&text)?;
        Self::new(shops)
    }

    /// File catalog when a path is given, seed otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::seed(),
        };
        tracing::info!(
            shops = catalog.len(),
            source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "built-in".into()),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: i64) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    pub fn all(&self) -> &[Shop] {
        &self.shops
    }

    pub fn filter<'a>(&'a self, filter: &'a ShopFilter) -> impl Iterator<Item = &'a Shop> + 'a {
        self.shops.iter().filter(move |s| filter.matches(s))
    }

    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}
