//! Links to storefront pages for an embedding host.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use url::Url;

/// Search query that lists every product.
pub const ALL_PRODUCTS: &str = "all";

/// Query parameter carrying the order token.
pub const DATA_PARAM: &str = "data";

/// Characters escaped in a search resource URI. Unreserved characters and `/` pass through.
const SEARCH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// How a resource is fetched by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiContent {
    /// Page embedded from an external URL.
    ExternalUrl {
        #[serde(rename = "iframeUrl")]
        iframe_url: Url,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiEncoding {
    Text,
}

/// A page the host should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiResource {
    pub uri: String,
    pub content: UiContent,
    pub encoding: UiEncoding,
}

impl UiResource {
    fn external(uri: impl Into<String>, iframe_url: Url) -> Self {
        Self {
            uri: uri.into(),
            content: UiContent::ExternalUrl { iframe_url },
            encoding: UiEncoding::Text,
        }
    }

    /// URL the host should load.
    pub fn iframe_url(&self) -> &Url {
        match &self.content {
            UiContent::ExternalUrl { iframe_url } => iframe_url,
        }
    }

    /// Serialize for the host.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Builds [`UiResource`]s relative to the storefront's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLinks {
    base: Url,
}

impl UiLinks {
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    fn page(&self, path: &str, query: Option<(&str, &str)>) -> Url {
        let mut url = self.base.clone();

        url.set_path(path);
        url.set_query(None);

        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }

        url
    }

    /// Product listing, optionally filtered. `"all"` or an empty query lists everything.
    pub fn products(&self, query: Option<&str>) -> UiResource {
        match query.filter(|q| !q.is_empty() && *q != ALL_PRODUCTS) {
            Some(query) => {
                UiResource::external(
                    format!(
                        "ui://products/search/{}",
                        utf8_percent_encode(query, SEARCH_SEGMENT)
                    ),
                    self.page("products", Some(("query", query))),
                )
            }
            None => UiResource::external("ui://products/all", self.page("products", None)),
        }
    }

    /// Cart page for `cart_id`.
    pub fn cart(&self, cart_id: &str) -> UiResource {
        UiResource::external("ui://cart", self.page("cart", Some(("cart_id", cart_id))))
    }

    /// Order history for `orders_id`.
    pub fn orders(&self, orders_id: &str) -> UiResource {
        UiResource::external("ui://orders", self.page("orders", Some(("orders_id", orders_id))))
    }

    /// Confirmation page carrying an encoded order token.
    pub fn order_confirmation(&self, order_id: &str, token: &str) -> UiResource {
        UiResource::external(
            format!("ui://order/{order_id}"),
            self.page("order", Some((DATA_PARAM, token))),
        )
    }
}

/// The decoded order token carried by a confirmation URL, if any.
pub fn data_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == DATA_PARAM)
        .map(|(_, value)| value.into_owned())
}
