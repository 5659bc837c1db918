/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Every error body carries a code, a human-readable message and an optional context object.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::{json, Value};

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_MESSAGE").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. login, ban duration).
pub fn ws_error_message(code: &str, message: &str, context: Option<Value>) -> String {
    json!({
        "type": "Error",
        "content": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(Value::Null),
        }
    })
    .to_string()
}

/// Returns an HTTP error response with a JSON body.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<Value>,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(Value::Null),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws_error_is_valid_json() {
        let text = ws_error_message("BANNED", "quote \" inside", Some(json!({ "login": "a" })));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["type"], "Error");
        assert_eq!(parsed["content"]["code"], "BANNED");
        assert_eq!(parsed["content"]["message"], "quote \" inside");
        assert_eq!(parsed["content"]["context"]["login"], "a");
    }

    #[test]
    fn test_http_error_status() {
        let resp = http_error_response("MISSING_LOGIN", "Missing login", None, StatusCode::BAD_REQUEST);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
