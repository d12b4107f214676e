use serde::{Deserialize, Serialize};

/// The authenticated principal carried inside a session.
///
/// All fields are fixed at token issuance; the identity is reconstructed
/// from the signed token on every request and never persisted server-side.
/// `is_admin` is the only authorization dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Record ID of the barber account
    pub id: String,
    /// Display name
    pub name: String,
    /// Email used for login
    pub email: String,
    /// Role flag for admin-only routes
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_wire_format() {
        let identity = Identity {
            id: "rec123".to_string(),
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            is_admin: true,
        };

        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["id"], "rec123");
        assert_eq!(json["isAdmin"], true);
        // snake_case key must not appear on the wire
        assert!(json.get("is_admin").is_none());
    }

    #[test]
    fn test_identity_rejects_missing_fields() {
        // A payload without isAdmin must not decode into an Identity
        let json = r#"{"id":"rec1","name":"A","email":"a@b.com"}"#;
        assert!(serde_json::from_str::<Identity>(json).is_err());
    }
}
