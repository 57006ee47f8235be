//! Products

use serde::{Deserialize, Serialize};

use crate::prices::Cents;

/// Below this many units in stock a product shows a low-stock badge.
pub const LOW_STOCK_THRESHOLD: u64 = 10;

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, e.g. `shirt-001`
    pub id: String,

    /// Product name
    pub name: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Picture URL
    #[serde(default)]
    pub picture: String,

    /// Unit price
    pub price: Cents,

    /// Categories the product is listed under
    #[serde(default)]
    pub categories: Vec<String>,

    /// Units in stock
    #[serde(default)]
    pub stock_quantity: u64,
}

impl Product {
    /// Whether the product can be added to a cart.
    pub fn is_available(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Low-stock badge, e.g. `3 left`.
    pub fn stock_badge(&self) -> Option<String> {
        (self.is_available() && self.stock_quantity < LOW_STOCK_THRESHOLD)
            .then(|| format!("{} left", self.stock_quantity))
    }

    /// Label for the add-to-cart button.
    pub fn cart_button_label(&self) -> &'static str {
        if self.is_available() {
            "Add to Cart"
        } else {
            "Out of Stock"
        }
    }
}

/// A whitespace-separated, case-insensitive product search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    terms: Vec<String>,
}

impl ProductQuery {
    /// Parse a raw `query` parameter. An absent or blank query matches every product.
    pub fn parse(query: Option<&str>) -> Self {
        let terms = query
            .unwrap_or_default()
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Self { terms }
    }

    /// Lowercased search terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether this query matches everything.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// A product matches when any term appears in its name, description or a category.
    pub fn matches(&self, product: &Product) -> bool {
        if self.is_empty() {
            return true;
        }

        let name = product.name.to_lowercase();
        let description = product.description.to_lowercase();
        let categories: Vec<String> = product
            .categories
            .iter()
            .map(|category| category.to_lowercase())
            .collect();

        self.terms.iter().any(|term| {
            name.contains(term.as_str())
                || description.contains(term.as_str())
                || categories
                    .iter()
                    .any(|category| category.contains(term.as_str()))
        })
    }
}

/// Products matching `query`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| query.matches(product))
        .collect()
}
