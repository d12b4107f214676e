// Airtable REST client for the record store
// Decision: records are decoded from the generic `fields` object with
// lenient coercion, matching how the tables are actually populated
// (missing checkbox fields read back as false, missing text as empty).

use anyhow::{Context, Result};
use barberbuzz_core::{Feedback, Store, VisitAgain};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use super::models::{BarberRow, CreateBarberRow, CreateFeedbackRow, CreateStoreRow};
use crate::config::AirtableConfig;

const API_BASE: &str = "https://api.airtable.com/v0";

const BARBERS_TABLE: &str = "Barbers";
const STORES_TABLE: &str = "Stores";
const FEEDBACK_TABLE: &str = "Feedback";

/// A single record as returned by the Airtable API
#[derive(Debug, Deserialize)]
struct Record {
    id: String,
    #[serde(rename = "createdTime")]
    created_time: DateTime<Utc>,
    #[serde(default)]
    fields: Value,
}

#[derive(Debug, Deserialize)]
struct RecordList {
    records: Vec<Record>,
}

/// Escape a value for interpolation into a `filterByFormula` expression
fn escape_formula_value(value: &str) -> String {
    value.replace('\'', "\\'")
}

fn field_str(fields: &Value, name: &str) -> String {
    fields
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn field_opt_str(fields: &Value, name: &str) -> Option<String> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn field_bool(fields: &Value, name: &str) -> bool {
    fields.get(name).and_then(Value::as_bool).unwrap_or(false)
}

/// Linked-record fields come back as arrays of record IDs
fn field_link(fields: &Value, name: &str) -> String {
    fields
        .get(name)
        .and_then(Value::as_array)
        .and_then(|a| a.first())
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn barber_from_record(record: Record) -> BarberRow {
    BarberRow {
        id: record.id,
        name: field_str(&record.fields, "Name"),
        email: field_str(&record.fields, "Email"),
        password_hash: field_str(&record.fields, "PasswordHash"),
        is_admin: field_bool(&record.fields, "isAdmin"),
    }
}

fn store_from_record(record: Record) -> Store {
    Store {
        id: record.id,
        name: field_str(&record.fields, "Name"),
        slug: field_str(&record.fields, "Slug"),
        primary_color: field_str(&record.fields, "PrimaryColor"),
        accent_color: field_str(&record.fields, "AccentColor"),
        barber: field_link(&record.fields, "Barber"),
    }
}

fn feedback_from_record(record: Record) -> Feedback {
    let rating = record
        .fields
        .get("Rating")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u8;
    let visit_again = record
        .fields
        .get("VisitAgain")
        .and_then(Value::as_str)
        .and_then(VisitAgain::from_record_str)
        .unwrap_or(VisitAgain::Maybe);

    Feedback {
        store: field_link(&record.fields, "Store"),
        customer_name: field_str(&record.fields, "CustomerName"),
        rating,
        visit_again,
        contact: field_opt_str(&record.fields, "Contact"),
        opt_in: field_bool(&record.fields, "OptIn"),
        comments: field_opt_str(&record.fields, "Comments"),
        private_note: field_opt_str(&record.fields, "PrivateNote"),
        created_time: record.created_time,
        id: record.id,
    }
}

/// HTTP client for the Airtable base holding barbers, stores and feedback
#[derive(Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl AirtableClient {
    pub fn new(config: &AirtableConfig) -> Self {
        Self::with_base_url(
            format!("{}/{}", API_BASE, config.base_id),
            config.token.clone(),
        )
    }

    /// Client against an explicit endpoint base. Tests point this at an
    /// unreachable address to exercise backend-outage handling.
    pub fn with_base_url(base_url: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    async fn select(&self, table: &str, query: &[(&str, &str)]) -> Result<Vec<Record>> {
        let list: RecordList = self
            .http
            .get(format!("{}/{}", self.base_url, table))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Airtable request to {} failed", table))?
            .error_for_status()
            .with_context(|| format!("Airtable rejected select on {}", table))?
            .json()
            .await
            .with_context(|| format!("Failed to decode {} records", table))?;
        Ok(list.records)
    }

    async fn create(&self, table: &str, fields: Value) -> Result<Record> {
        self.http
            .post(format!("{}/{}", self.base_url, table))
            .bearer_auth(&self.token)
            .json(&json!({ "fields": fields }))
            .send()
            .await
            .with_context(|| format!("Airtable request to {} failed", table))?
            .error_for_status()
            .with_context(|| format!("Airtable rejected create on {}", table))?
            .json()
            .await
            .with_context(|| format!("Failed to decode created {} record", table))
    }

    // ============================================
    // Barbers
    // ============================================

    pub async fn find_barber_by_email(&self, email: &str) -> Result<Option<BarberRow>> {
        let formula = format!("{{Email}}='{}'", escape_formula_value(email));
        let records = self
            .select(
                BARBERS_TABLE,
                &[("filterByFormula", formula.as_str()), ("maxRecords", "1")],
            )
            .await?;
        Ok(records.into_iter().next().map(barber_from_record))
    }

    pub async fn create_barber(&self, input: CreateBarberRow) -> Result<BarberRow> {
        let record = self
            .create(
                BARBERS_TABLE,
                json!({
                    "Name": input.name,
                    "Email": input.email,
                    "PasswordHash": input.password_hash,
                    "isAdmin": input.is_admin,
                }),
            )
            .await?;
        Ok(barber_from_record(record))
    }

    pub async fn list_barbers(&self) -> Result<Vec<BarberRow>> {
        let records = self.select(BARBERS_TABLE, &[]).await?;
        Ok(records.into_iter().map(barber_from_record).collect())
    }

    // ============================================
    // Stores
    // ============================================

    pub async fn create_store(&self, input: CreateStoreRow) -> Result<Store> {
        let record = self
            .create(
                STORES_TABLE,
                json!({
                    "Name": input.name,
                    "Slug": input.slug,
                    "PrimaryColor": input.primary_color,
                    "AccentColor": input.accent_color,
                    "Barber": [input.barber],
                }),
            )
            .await?;
        Ok(store_from_record(record))
    }

    pub async fn get_store_by_slug(&self, slug: &str) -> Result<Option<Store>> {
        let formula = format!("{{Slug}}='{}'", escape_formula_value(slug));
        let records = self
            .select(
                STORES_TABLE,
                &[("filterByFormula", formula.as_str()), ("maxRecords", "1")],
            )
            .await?;
        Ok(records.into_iter().next().map(store_from_record))
    }

    // ============================================
    // Feedback
    // ============================================

    pub async fn create_feedback(&self, input: CreateFeedbackRow) -> Result<Feedback> {
        let record = self
            .create(
                FEEDBACK_TABLE,
                json!({
                    "Store": [input.store],
                    "CustomerName": input.customer_name,
                    "Rating": input.rating,
                    "VisitAgain": input.visit_again.as_record_str(),
                    "Contact": input.contact.unwrap_or_default(),
                    "OptIn": input.opt_in,
                    "Comments": input.comments.unwrap_or_default(),
                }),
            )
            .await?;
        Ok(feedback_from_record(record))
    }

    pub async fn list_feedback_for_store(&self, store_id: &str) -> Result<Vec<Feedback>> {
        let formula = format!("{{Store}}='{}'", escape_formula_value(store_id));
        let records = self
            .select(
                FEEDBACK_TABLE,
                &[
                    ("filterByFormula", formula.as_str()),
                    ("sort[0][field]", "CreatedTime"),
                    ("sort[0][direction]", "desc"),
                ],
            )
            .await?;
        Ok(records.into_iter().map(feedback_from_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_formula_value() {
        assert_eq!(escape_formula_value("plain"), "plain");
        assert_eq!(escape_formula_value("o'brien"), "o\\'brien");
    }

    #[test]
    fn test_barber_from_record_coerces_missing_fields() {
        let record: Record = serde_json::from_value(json!({
            "id": "rec123",
            "createdTime": "2024-01-01T00:00:00.000Z",
            "fields": { "Name": "Alex", "Email": "alex@example.com" }
        }))
        .unwrap();

        let row = barber_from_record(record);
        assert_eq!(row.id, "rec123");
        assert_eq!(row.name, "Alex");
        assert!(!row.is_admin);
        assert!(row.password_hash.is_empty());
    }

    #[test]
    fn test_feedback_from_record() {
        let record: Record = serde_json::from_value(json!({
            "id": "recF1",
            "createdTime": "2024-06-01T12:00:00.000Z",
            "fields": {
                "Store": ["recS1"],
                "CustomerName": "Jamie",
                "Rating": 5,
                "VisitAgain": "Yes",
                "OptIn": true,
                "Comments": "Great cut"
            }
        }))
        .unwrap();

        let feedback = feedback_from_record(record);
        assert_eq!(feedback.store, "recS1");
        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.visit_again, VisitAgain::Yes);
        assert!(feedback.opt_in);
        assert_eq!(feedback.contact, None);
        assert_eq!(feedback.comments.as_deref(), Some("Great cut"));
    }
}
