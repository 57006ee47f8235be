//! Fixtures

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::products::Product;

/// Seed catalog bundled with the crate.
pub const SEED_CATALOG: &str = include_str!("../fixtures/catalog.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The same product id appears twice
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),
}

/// A list of products to seed a catalog with.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Products in fixture order
    pub products: Vec<Product>,
}

impl Catalog {
    /// The bundled seed catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the bundled YAML is invalid.
    pub fn seed() -> Result<Self, FixtureError> {
        Self::from_yaml(SEED_CATALOG)
    }

    /// Parse a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML is invalid or an id is repeated.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let catalog: Catalog = serde_norway::from_str(yaml)?;

        catalog.check_unique_ids()?;

        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    fn check_unique_ids(&self) -> Result<(), FixtureError> {
        let mut seen = std::collections::HashSet::new();

        for product in &self.products {
            if !seen.insert(product.id.as_str()) {
                return Err(FixtureError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(())
    }
}
