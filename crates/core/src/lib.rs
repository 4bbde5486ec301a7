//! # Mercabot Core
//!
//! Chatbot decision logic: classify a message's keywords into an intent and
//! shape a catalog subset into the reply payload.
//!
//! This crate contains pure classify-and-filter logic plus the one service
//! struct that ties the pieces together per request:
//! - [`UserMessage`] - the validated question text
//! - [`Intent`] - priority-ordered rule dispatch over the keyword list
//! - [`respond`] - pure responder, keyword list + catalog snapshot in, reply out
//! - [`ChatService`] - fetch catalog (fail-soft), tokenize, classify, respond
//!
//! **No API concerns**: HTTP routing and OpenAPI docs belong in the
//! `mercabot-run` binary.

pub mod intent;
pub mod message;
pub mod reply;

pub use intent::Intent;
pub use message::{MessageError, UserMessage};
pub use reply::{respond, ChatReply, ProductView};

use mercabot_catalog::CatalogClient;

/// Per-request chatbot pipeline.
///
/// Stateless between calls: every reply fetches its own catalog snapshot and
/// the keyword list is discarded once the reply is built.
#[derive(Clone)]
pub struct ChatService {
    catalog: CatalogClient,
}

impl ChatService {
    /// Creates a new service backed by the given catalog client.
    pub fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }

    /// Builds the reply for a validated user message.
    ///
    /// Never fails: a catalog outage degrades to an empty snapshot, and an
    /// unclassifiable message degrades to the generic error reply.
    pub async fn reply(&self, message: &UserMessage) -> ChatReply {
        let productos = self.catalog.fetch_active_or_empty().await;
        let palabras = mercabot_nlp::keywords(message.as_str());
        let intent = Intent::classify(&palabras, message.as_str());
        tracing::debug!(?intent, productos = productos.len(), "classified message");

        respond(intent, &productos)
    }
}
