//! Error type shared by every REST call.
//!
//! The `Display` of each variant is what the toast layer shows the operator,
//! so non-2xx responses try hard to recover the backend's own message
//! (`{"message": ...}` or `{"error": ...}`) before falling back to the HTTP
//! status text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected our bearer token. The client clears its token and
    /// notifies the unauthorized handler before returning this.
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Any other non-2xx response, with the best message we could extract.
    #[error("{message}")]
    Status { code: u16, message: String },

    /// The request never produced a response (DNS, TLS, refused, offline).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body.
    pub(crate) fn from_status(code: u16, body: &str) -> Self {
        if code == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| generic_status_message(code));
        Self::Status { code, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

fn generic_status_message(code: u16) -> String {
    match code {
        400 => "the server rejected the request".to_string(),
        403 => "you do not have permission to do that".to_string(),
        404 => "not found".to_string(),
        500..=599 => "the server ran into a problem".to_string(),
        _ => format!("request failed with status {code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_is_extracted_from_body() {
        let err = ApiError::from_status(422, r#"{"message": "cron expression is invalid"}"#);
        assert_eq!(err.to_string(), "cron expression is invalid");
    }

    #[test]
    fn error_field_is_extracted_when_message_is_absent() {
        let err = ApiError::from_status(409, r#"{"error": "schedule name already taken"}"#);
        assert_eq!(err.to_string(), "schedule name already taken");
    }

    #[test]
    fn unreadable_body_falls_back_to_status_text() {
        let err = ApiError::from_status(500, "<html>Internal Server Error</html>");
        assert_eq!(err.to_string(), "the server ran into a problem");
    }

    #[test]
    fn status_401_maps_to_unauthorized() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
    }
}
