//! Product listing page

use std::io;

use tabled::{builder::Builder, settings::object::Columns};

use crate::{
    intents::Intent,
    prices::format_price,
    products::{Product, ProductQuery, filter_products},
    views::{ViewError, build_table, write_line, write_message},
};

/// Shown when nothing matches.
pub const NO_PRODUCTS: &str = "No products found";

/// Hint shown under [`NO_PRODUCTS`].
pub const NO_PRODUCTS_HINT: &str = "Try searching for something else";

/// A product as shown in the listing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Product identifier
    pub id: String,

    /// Display name, `Unknown` when the product has none
    pub name: String,

    /// Description
    pub description: String,

    /// Picture URL
    pub picture: String,

    /// Formatted unit price
    pub price: String,

    /// Low-stock badge
    pub stock_badge: Option<String>,

    /// Add button label
    pub button_label: &'static str,

    /// Whether the add button is enabled
    pub can_add: bool,
}

impl ProductCard {
    fn from_product(product: &Product) -> Self {
        let name = if product.name.is_empty() {
            "Unknown".to_string()
        } else {
            product.name.clone()
        };

        Self {
            id: product.id.clone(),
            name,
            description: product.description.clone(),
            picture: product.picture.clone(),
            price: format_price(Some(product.price)),
            stock_badge: product.stock_badge(),
            button_label: product.cart_button_label(),
            can_add: product.is_available(),
        }
    }

    /// Intent raised by the add button, if it is enabled.
    pub fn add_to_cart(&self) -> Option<Intent> {
        self.can_add.then(|| Intent::AddToCart {
            product_id: self.id.clone(),
            name: self.name.clone(),
        })
    }
}

/// Product listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductListingView {
    /// Nothing matched the query.
    Empty,

    /// Matching products.
    Products {
        /// `"shirts" - 5 items`, present only for a search
        heading: Option<String>,
        /// Cards in catalog order
        cards: Vec<ProductCard>,
    },
}

impl ProductListingView {
    /// Build the listing for `products` filtered by the raw `query` parameter.
    pub fn build(products: &[Product], query: Option<&str>) -> Self {
        let query = query.filter(|query| !query.is_empty());
        let matching = filter_products(products, &ProductQuery::parse(query));

        if matching.is_empty() {
            return ProductListingView::Empty;
        }

        let heading = query.map(|query| format!("\"{query}\" - {} items", matching.len()));
        let cards = matching.into_iter().map(ProductCard::from_product).collect();

        ProductListingView::Products { heading, cards }
    }

    /// Cards on the page.
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            ProductListingView::Empty => &[],
            ProductListingView::Products { cards, .. } => cards,
        }
    }

    /// Write the page as text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ViewError> {
        let (heading, cards) = match self {
            ProductListingView::Empty => {
                return write_message(&mut out, NO_PRODUCTS, NO_PRODUCTS_HINT);
            }
            ProductListingView::Products { heading, cards } => (heading, cards),
        };

        if let Some(heading) = heading {
            write_line(&mut out, heading)?;
        }

        let mut builder = Builder::default();

        builder.push_record(["ID", "Product", "Price", "Stock", ""]);

        for card in cards {
            builder.push_record([
                card.id.as_str(),
                card.name.as_str(),
                card.price.as_str(),
                card.stock_badge.as_deref().unwrap_or_default(),
                card.button_label,
            ]);
        }

        write_line(&mut out, build_table(builder, Columns::new(2..3)).to_string())
    }
}
