// Public record shapes returned by the API.
// Password hashes live only on storage rows, never on these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A barber account as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

/// A shop location owned by a barber
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    /// URL slug for the public feedback form (`/{slug}`)
    pub slug: String,
    pub primary_color: String,
    pub accent_color: String,
    /// Record ID of the owning barber
    pub barber: String,
}

/// Would the customer come back?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitAgain {
    Yes,
    Maybe,
    No,
}

impl VisitAgain {
    /// Field value as stored in the record backend
    pub fn as_record_str(&self) -> &'static str {
        match self {
            VisitAgain::Yes => "Yes",
            VisitAgain::Maybe => "Maybe",
            VisitAgain::No => "No",
        }
    }

    pub fn from_record_str(s: &str) -> Option<Self> {
        match s {
            "Yes" => Some(VisitAgain::Yes),
            "Maybe" => Some(VisitAgain::Maybe),
            "No" => Some(VisitAgain::No),
            _ => None,
        }
    }
}

/// A single customer feedback entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    /// Record ID of the store the feedback belongs to
    pub store: String,
    pub customer_name: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub visit_again: VisitAgain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub opt_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    pub created_time: DateTime<Utc>,
}
