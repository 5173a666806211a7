//! Error body returned by every failing endpoint (RFC 7807 problem details).

use serde::{Deserialize, Serialize};

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,

    /// Short summary of the status, e.g. "Bad Request".
    pub title: String,

    pub status: u16,

    /// What went wrong with this particular request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(401, "Unauthorized").with_detail(detail)
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(403, "Forbidden").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    /// 500 without a `detail` member.
    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_has_no_detail() {
        let value = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(value["status"], 500);
        assert_eq!(value["type"], "about:blank");
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn test_bad_request_carries_detail() {
        let error = ErrorResponse::bad_request("`title` is required");
        assert_eq!(error.status, 400);
        assert_eq!(error.detail.as_deref(), Some("`title` is required"));
    }
}
