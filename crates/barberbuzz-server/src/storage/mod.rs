// Storage layer for the record backend
// Decision: Use enum dispatch for simplicity over trait objects
//
// Production talks to Airtable over HTTP; dev mode and tests run against an
// in-memory store with the same surface. The auth core only consumes
// `find_barber_by_email` and `create_barber`; the rest serves the feedback
// and admin endpoints.

use anyhow::Result;
use barberbuzz_core::{Feedback, Store};
use std::sync::Arc;

pub mod airtable;
pub mod memory;
pub mod models;

pub use airtable::AirtableClient;
pub use memory::InMemoryStore;
pub use models::*;

use crate::config::AirtableConfig;

/// Record store backend, either Airtable (production) or in-memory (dev)
#[derive(Clone)]
pub enum StorageBackend {
    Airtable(AirtableClient),
    InMemory(Arc<InMemoryStore>),
}

impl StorageBackend {
    /// Pick the backend from configuration: Airtable when credentials are
    /// present, in-memory otherwise.
    pub fn from_config(airtable: Option<&AirtableConfig>) -> Self {
        match airtable {
            Some(config) => Self::Airtable(AirtableClient::new(config)),
            None => {
                tracing::warn!(
                    "AIRTABLE_TOKEN/AIRTABLE_BASE_ID not set, using in-memory store (dev mode)"
                );
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryStore::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    // ============================================
    // Barbers
    // ============================================

    pub async fn find_barber_by_email(&self, email: &str) -> Result<Option<BarberRow>> {
        match self {
            Self::Airtable(client) => client.find_barber_by_email(email).await,
            Self::InMemory(store) => store.find_barber_by_email(email).await,
        }
    }

    pub async fn create_barber(&self, input: CreateBarberRow) -> Result<BarberRow> {
        match self {
            Self::Airtable(client) => client.create_barber(input).await,
            Self::InMemory(store) => store.create_barber(input).await,
        }
    }

    pub async fn list_barbers(&self) -> Result<Vec<BarberRow>> {
        match self {
            Self::Airtable(client) => client.list_barbers().await,
            Self::InMemory(store) => store.list_barbers().await,
        }
    }

    // ============================================
    // Stores
    // ============================================

    pub async fn create_store(&self, input: CreateStoreRow) -> Result<Store> {
        match self {
            Self::Airtable(client) => client.create_store(input).await,
            Self::InMemory(store) => store.create_store(input).await,
        }
    }

    pub async fn get_store_by_slug(&self, slug: &str) -> Result<Option<Store>> {
        match self {
            Self::Airtable(client) => client.get_store_by_slug(slug).await,
            Self::InMemory(store) => store.get_store_by_slug(slug).await,
        }
    }

    // ============================================
    // Feedback
    // ============================================

    pub async fn create_feedback(&self, input: CreateFeedbackRow) -> Result<Feedback> {
        match self {
            Self::Airtable(client) => client.create_feedback(input).await,
            Self::InMemory(store) => store.create_feedback(input).await,
        }
    }

    pub async fn list_feedback_for_store(&self, store_id: &str) -> Result<Vec<Feedback>> {
        match self {
            Self::Airtable(client) => client.list_feedback_for_store(store_id).await,
            Self::InMemory(store) => store.list_feedback_for_store(store_id).await,
        }
    }
}
