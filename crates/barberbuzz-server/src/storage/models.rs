// Row types for the record store.
// Only barbers need a dedicated row: it carries the password hash, which
// must never leave the storage/auth layers. Stores and feedback are read
// back directly as their public shapes.

use barberbuzz_core::{Barber, Identity, VisitAgain};

/// A barber account as stored, including the credential hash
#[derive(Debug, Clone)]
pub struct BarberRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl From<BarberRow> for Barber {
    fn from(row: BarberRow) -> Self {
        Barber {
            id: row.id,
            name: row.name,
            email: row.email,
            is_admin: row.is_admin,
        }
    }
}

impl From<&BarberRow> for Identity {
    fn from(row: &BarberRow) -> Self {
        Identity {
            id: row.id.clone(),
            name: row.name.clone(),
            email: row.email.clone(),
            is_admin: row.is_admin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBarberRow {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone)]
pub struct CreateStoreRow {
    pub name: String,
    pub slug: String,
    pub primary_color: String,
    pub accent_color: String,
    /// Record ID of the owning barber
    pub barber: String,
}

#[derive(Debug, Clone)]
pub struct CreateFeedbackRow {
    /// Record ID of the store receiving the feedback
    pub store: String,
    pub customer_name: String,
    pub rating: u8,
    pub visit_again: VisitAgain,
    pub contact: Option<String>,
    pub opt_in: bool,
    pub comments: Option<String>,
}
