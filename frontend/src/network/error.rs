use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Everything that can go wrong between a page and the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token. A logout has already been
    /// dispatched by the time a caller sees this.
    #[error("session expired, please log in again")]
    Unauthorized,
    #[error("request failed with status {status}: {detail}")]
    Http { status: u16, detail: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("browser error: {0}")]
    Js(String),
}

/// FastAPI error bodies: `{"detail": "..."}` or a list of validation errors.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Build an `Http` error from a non-2xx response, pulling the message out
    /// of a FastAPI `detail` field when the body has one.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| match b.detail {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Array(items) => {
                    let msgs: Vec<String> = items
                        .iter()
                        .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                        .map(str::to_string)
                        .collect();
                    (!msgs.is_empty()).then(|| msgs.join("; "))
                }
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .unwrap_or_else(|| status_text.to_string());

        ApiError::Http { status, detail }
    }

    /// Classify a non-2xx response. A 401 ends the session only on requests
    /// that carried one; a failed login is an ordinary `Http` error.
    pub fn for_failed_response(
        status: u16,
        status_text: &str,
        body: &str,
        session_request: bool,
    ) -> Self {
        if status == 401 && session_request {
            ApiError::Unauthorized
        } else {
            ApiError::from_response(status, status_text, body)
        }
    }

    pub fn ends_session(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Short text for inline error panels.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::Http { detail, .. } if !detail.is_empty() => detail.clone(),
            ApiError::Http { status, .. } => format!("The server returned an error ({status})."),
            ApiError::Network(_) => "Could not reach the server.".to_string(),
            ApiError::Decode(_) | ApiError::Js(_) => "Something went wrong.".to_string(),
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        // fetch() rejects with a TypeError on connection failures; everything
        // else surfacing as a JsValue is a browser API error.
        if value.is_instance_of::<js_sys::TypeError>() {
            ApiError::Network(format!("{:?}", value))
        } else {
            ApiError::Js(format!("{:?}", value))
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_becomes_message() {
        let err = ApiError::from_response(400, "Bad Request", r#"{"detail":"Email already registered"}"#);
        assert_eq!(
            err,
            ApiError::Http { status: 400, detail: "Email already registered".into() }
        );
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn validation_errors_are_joined() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"too short"}]}"#;
        let err = ApiError::from_response(422, "Unprocessable Entity", body);
        assert_eq!(err.user_message(), "field required; too short");
    }

    #[test]
    fn non_json_body_falls_back_to_status_text() {
        let err = ApiError::from_response(500, "Internal Server Error", "<html>oops</html>");
        assert_eq!(err.user_message(), "Internal Server Error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn not_found_is_detected() {
        let err = ApiError::from_response(404, "Not Found", r#"{"detail":"Career plan not found"}"#);
        assert!(err.is_not_found());
        assert!(!ApiError::Unauthorized.is_not_found());
    }

    #[test]
    fn expired_token_ends_the_session() {
        let body = r#"{"detail":"Could not validate credentials"}"#;
        let err = ApiError::for_failed_response(401, "Unauthorized", body, true);
        assert_eq!(err, ApiError::Unauthorized);
        assert!(err.ends_session());
    }

    #[test]
    fn rejected_login_keeps_its_detail() {
        let body = r#"{"detail":"Incorrect email or password"}"#;
        let err = ApiError::for_failed_response(401, "Unauthorized", body, false);
        assert!(!err.ends_session());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(), "Incorrect email or password");
    }

    #[test]
    fn other_statuses_never_end_the_session() {
        let err = ApiError::for_failed_response(403, "Forbidden", "", true);
        assert!(!err.ends_session());
        assert_eq!(err, ApiError::Http { status: 403, detail: "Forbidden".into() });
    }

    #[test]
    fn decode_errors_convert_from_serde() {
        let err: ApiError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
