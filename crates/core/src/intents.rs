//! Intents
//!
//! User actions on a page are reported to the embedding host as plain-text prompts. Pages
//! receive an [`IntentSink`] rather than reaching for a global channel.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Something the user asked the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add one unit of a product to the cart.
    AddToCart {
        /// Product identifier
        product_id: String,
        /// Product name
        name: String,
    },

    /// A cart line's quantity was changed.
    QuantityUpdated {
        /// Product identifier
        product_id: String,
        /// New quantity
        quantity: u64,
    },

    /// A cart line was removed.
    ItemRemoved {
        /// Product identifier
        product_id: String,
    },

    /// Begin checkout.
    Checkout,
}

impl Intent {
    /// Prompt text sent to the host.
    pub fn prompt(&self) -> String {
        self.to_string()
    }

    /// Wrap this intent in its wire envelope.
    pub fn message(&self) -> IntentMessage {
        IntentMessage::prompt(self.prompt())
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Intent::AddToCart { product_id, name } => {
                write!(f, "Add one {name} to my cart (product ID: {product_id})")
            }
            Intent::QuantityUpdated {
                product_id,
                quantity,
            } => write!(
                f,
                "The quantity of product {product_id} has been updated to {quantity} in my cart."
            ),
            Intent::ItemRemoved { product_id } => {
                write!(f, "Product {product_id} has been removed from my cart.")
            }
            Intent::Checkout => write!(f, "Start checkout process"),
        }
    }
}

/// Prompt payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPayload {
    /// Prompt text
    pub prompt: String,
}

/// Message posted to the embedding host: `{"type":"prompt","payload":{"prompt":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum IntentMessage {
    /// A free-text prompt.
    Prompt(PromptPayload),
}

impl IntentMessage {
    /// Build a prompt message.
    pub fn prompt(prompt: impl Into<String>) -> Self {
        IntentMessage::Prompt(PromptPayload {
            prompt: prompt.into(),
        })
    }

    /// Serialize to the JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, IntentError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Errors raised while delivering an intent.
#[derive(Debug, Error)]
pub enum IntentError {
    /// The message could not be serialized.
    #[error("failed to encode intent message: {0}")]
    Encode(#[from] serde_json::Error),

    /// No host is listening.
    #[error("intent host is not connected")]
    Disconnected,
}

/// Destination for intent messages.
pub trait IntentSink: Send + Sync {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// Returns an [`IntentError`] if the message could not be delivered.
    fn send(&self, message: IntentMessage) -> Result<(), IntentError>;
}
