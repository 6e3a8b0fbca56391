use serde::{Deserialize, Serialize};

/// Body of `POST /api/membership-check`. Missing fields read as empty and
/// are rejected by the service, so the caller always gets the same 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MembershipCheckRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub phone: String,
}

impl MembershipCheckRequest {
    /// Decode a raw request body; an empty body reads as `{}`
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipCheckResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MembershipCheckResponse {
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request = MembershipCheckRequest::from_body(b"{}").unwrap();
        assert!(request.login.is_empty());
        assert!(request.phone.is_empty());
    }

    #[test]
    fn test_empty_body_reads_as_empty_object() {
        let request = MembershipCheckRequest::from_body(b"  \n").unwrap();
        assert!(request.login.is_empty());
    }

    #[test]
    fn test_long_fields_are_kept_verbatim() {
        let phone = "+90 (555) 123 - 45 - 67    (mobile)";
        let body = serde_json::json!({ "login": "u", "phone": phone }).to_string();
        let request = MembershipCheckRequest::from_body(body.as_bytes()).unwrap();
        assert_eq!(request.phone, phone);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(MembershipCheckRequest::from_body(b"{ not json").is_err());
    }
}
