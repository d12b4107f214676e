// In-memory record store for dev mode and tests
// Decision: Use parking_lot for thread-safe access
//
// Provides the same API as the Airtable client, backed by HashMaps.
// All data is lost on restart.

use anyhow::Result;
use barberbuzz_core::{Feedback, Store};
use chrono::Utc;
use parking_lot::RwLock;
use rand::Rng;
use std::collections::HashMap;

use super::models::{BarberRow, CreateBarberRow, CreateFeedbackRow, CreateStoreRow};

/// Generate a record ID in the backend's format ("rec" + 14 hex characters)
fn generate_record_id() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 7] = rng.gen();
    format!("rec{}", hex::encode(bytes))
}

/// In-memory record store
#[derive(Default)]
pub struct InMemoryStore {
    barbers: RwLock<HashMap<String, BarberRow>>,
    stores: RwLock<HashMap<String, Store>>,
    feedback: RwLock<HashMap<String, Feedback>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================
    // Barbers
    // ============================================

    pub async fn create_barber(&self, input: CreateBarberRow) -> Result<BarberRow> {
        let row = BarberRow {
            id: generate_record_id(),
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
            is_admin: input.is_admin,
        };
        self.barbers.write().insert(row.id.clone(), row.clone());
        Ok(row)
    }

    pub async fn find_barber_by_email(&self, email: &str) -> Result<Option<BarberRow>> {
        Ok(self
            .barbers
            .read()
            .values()
            .find(|b| b.email == email)
            .cloned())
    }

    pub async fn list_barbers(&self) -> Result<Vec<BarberRow>> {
        let mut rows: Vec<_> = self.barbers.read().values().cloned().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    // ============================================
    // Stores
    // ============================================

    pub async fn create_store(&self, input: CreateStoreRow) -> Result<Store> {
        let store = Store {
            id: generate_record_id(),
            name: input.name,
            slug: input.slug,
            primary_color: input.primary_color,
            accent_color: input.accent_color,
            barber: input.barber,
        };
        self.stores.write().insert(store.id.clone(), store.clone());
        Ok(store)
    }

    pub async fn get_store_by_slug(&self, slug: &str) -> Result<Option<Store>> {
        Ok(self
            .stores
            .read()
            .values()
            .find(|s| s.slug == slug)
            .cloned())
    }

    // ============================================
    // Feedback
    // ============================================

    pub async fn create_feedback(&self, input: CreateFeedbackRow) -> Result<Feedback> {
        let feedback = Feedback {
            id: generate_record_id(),
            store: input.store,
            customer_name: input.customer_name,
            rating: input.rating,
            visit_again: input.visit_again,
            contact: input.contact,
            opt_in: input.opt_in,
            comments: input.comments,
            private_note: None,
            created_time: Utc::now(),
        };
        self.feedback
            .write()
            .insert(feedback.id.clone(), feedback.clone());
        Ok(feedback)
    }

    pub async fn list_feedback_for_store(&self, store_id: &str) -> Result<Vec<Feedback>> {
        let mut rows: Vec<_> = self
            .feedback
            .read()
            .values()
            .filter(|f| f.store == store_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberbuzz_core::VisitAgain;

    fn barber_input(email: &str) -> CreateBarberRow {
        CreateBarberRow {
            name: "Test Barber".to_string(),
            email: email.to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_barber() {
        let store = InMemoryStore::new();
        let created = store.create_barber(barber_input("a@b.com")).await.unwrap();
        assert!(created.id.starts_with("rec"));

        let found = store.find_barber_by_email("a@b.com").await.unwrap();
        assert_eq!(found.unwrap().id, created.id);

        let missing = store.find_barber_by_email("nobody@b.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_store_lookup_by_slug() {
        let store = InMemoryStore::new();
        let created = store
            .create_store(CreateStoreRow {
                name: "Main Street".to_string(),
                slug: "main-street".to_string(),
                primary_color: "#0057D9".to_string(),
                accent_color: "#FFD339".to_string(),
                barber: "rec123".to_string(),
            })
            .await
            .unwrap();

        let found = store.get_store_by_slug("main-street").await.unwrap();
        assert_eq!(found.unwrap().id, created.id);
        assert!(store.get_store_by_slug("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_feedback_listed_newest_first() {
        let store = InMemoryStore::new();
        for name in ["first", "second"] {
            store
                .create_feedback(CreateFeedbackRow {
                    store: "recS1".to_string(),
                    customer_name: name.to_string(),
                    rating: 4,
                    visit_again: VisitAgain::Yes,
                    contact: None,
                    opt_in: false,
                    comments: None,
                })
                .await
                .unwrap();
        }

        let rows = store.list_feedback_for_store("recS1").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].created_time >= rows[1].created_time);

        let other = store.list_feedback_for_store("recS2").await.unwrap();
        assert!(other.is_empty());
    }
}
