// Input validation for the public feedback form

use barberbuzz_core::VisitAgain;
use serde::Deserialize;

/// Body of POST /api/feedback. `store` is the store's public slug.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub rating: u8,
    pub visit_again: VisitAgain,
    pub contact: Option<String>,
    #[serde(default)]
    pub opt_in: bool,
    pub comments: Option<String>,
}

/// Validate a feedback submission, returning the first problem found
pub fn validate_feedback(req: &CreateFeedbackRequest) -> Result<(), String> {
    if req.store.is_empty() {
        return Err("Store is required".to_string());
    }
    if req.customer_name.trim().chars().count() < 2 {
        return Err("Name must be at least 2 characters".to_string());
    }
    if !(1..=5).contains(&req.rating) {
        return Err("Rating must be between 1 and 5".to_string());
    }
    if let Some(contact) = &req.contact {
        if contact.trim().chars().count() < 5 {
            return Err("Contact must be at least 5 characters".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateFeedbackRequest {
        CreateFeedbackRequest {
            store: "main-street".to_string(),
            customer_name: "Jamie".to_string(),
            rating: 5,
            visit_again: VisitAgain::Yes,
            contact: None,
            opt_in: false,
            comments: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_feedback(&valid_request()).is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut req = valid_request();
        req.customer_name = "J".to_string();
        assert!(validate_feedback(&req).is_err());
    }

    #[test]
    fn test_rating_bounds() {
        let mut req = valid_request();
        for rating in [0, 6] {
            req.rating = rating;
            assert!(validate_feedback(&req).is_err(), "rating {}", rating);
        }
        for rating in 1..=5 {
            req.rating = rating;
            assert!(validate_feedback(&req).is_ok(), "rating {}", rating);
        }
    }

    #[test]
    fn test_short_contact_rejected() {
        let mut req = valid_request();
        req.contact = Some("123".to_string());
        assert!(validate_feedback(&req).is_err());
    }

    #[test]
    fn test_missing_store_rejected() {
        let mut req = valid_request();
        req.store = String::new();
        assert!(validate_feedback(&req).is_err());
    }
}
