//! Canonical response shape and the normalizer
//!
//! The editor plugin answers in two shapes:
//! - `{"status": "success"|"error", "result": ..., "error": "..."}`
//! - `{"success": bool, "error"|"message": "...", ...fields}`
//!
//! Both are folded into [`BridgeResponse`] before reaching a caller.

use crate::error::ChannelError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error text when the editor did not return a JSON object
pub const NO_RESPONSE: &str = "No response";

/// Error text when a failure envelope carries no message
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Normalized result of one command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub ok: bool,
    pub payload: Option<Value>,
    pub error_text: Option<String>,
}

impl BridgeResponse {
    pub fn success(payload: Value) -> Self {
        Self {
            ok: true,
            payload: Some(payload),
            error_text: None,
        }
    }

    pub fn failure(error_text: impl Into<String>) -> Self {
        Self {
            ok: false,
            payload: None,
            error_text: Some(error_text.into()),
        }
    }
}

impl From<ChannelError> for BridgeResponse {
    fn from(err: ChannelError) -> Self {
        BridgeResponse::failure(err.to_string())
    }
}

/// Fold a raw response envelope into the canonical shape
///
/// Rules, first match wins:
/// 1. `status == "error"` is a failure
/// 2. `success == false` is a failure
/// 3. anything else is a success whose payload is `result` when present, else the whole envelope
/// 4. a missing or non-object response is a failure with [`NO_RESPONSE`]
pub fn normalize(raw: Option<Value>) -> BridgeResponse {
    let Some(Value::Object(mut envelope)) = raw else {
        return BridgeResponse::failure(NO_RESPONSE);
    };

    let status_error = envelope.get("status").and_then(Value::as_str) == Some("error");
    let success_false = envelope.get("success").and_then(Value::as_bool) == Some(false);
    if status_error || success_false {
        return BridgeResponse::failure(failure_text(&envelope));
    }

    match envelope.remove("result") {
        Some(result) if !result.is_null() => BridgeResponse::success(result),
        removed => {
            if let Some(null) = removed {
                envelope.insert("result".into(), null);
            }
            BridgeResponse::success(Value::Object(envelope))
        }
    }
}

fn failure_text(envelope: &Map<String, Value>) -> String {
    ["error", "message"]
        .iter()
        .find_map(|key| match envelope.get(*key)? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_equivalence() {
        let a = normalize(Some(json!({ "status": "error", "error": "x" })));
        let b = normalize(Some(json!({ "success": false, "error": "x" })));
        assert_eq!(a, b);
        assert_eq!(a, BridgeResponse::failure("x"));
    }

    #[test]
    fn test_status_success_unwraps_result() {
        let r = normalize(Some(json!({ "status": "success", "result": { "pong": true } })));
        assert!(r.ok);
        assert_eq!(r.payload, Some(json!({ "pong": true })));
        assert_eq!(r.error_text, None);
    }

    #[test]
    fn test_success_true_keeps_whole_envelope() {
        let raw = json!({ "success": true, "name": "BP_Bird", "path": "/Game/Blueprints/BP_Bird" });
        let r = normalize(Some(raw.clone()));
        assert!(r.ok);
        assert_eq!(r.payload, Some(raw));
    }

    #[test]
    fn test_message_used_when_error_missing() {
        let r = normalize(Some(json!({ "success": false, "message": "not found" })));
        assert_eq!(r, BridgeResponse::failure("not found"));
    }

    #[test]
    fn test_error_preferred_over_message() {
        let r = normalize(Some(
            json!({ "status": "error", "error": "boom", "message": "ignored" }),
        ));
        assert_eq!(r.error_text.as_deref(), Some("boom"));
    }

    #[test]
    fn test_empty_error_falls_through_to_message() {
        let r = normalize(Some(json!({ "status": "error", "error": "", "message": "m" })));
        assert_eq!(r.error_text.as_deref(), Some("m"));
    }

    #[test]
    fn test_failure_without_text() {
        let r = normalize(Some(json!({ "status": "error" })));
        assert_eq!(r.error_text.as_deref(), Some(UNKNOWN_ERROR));
    }

    #[test]
    fn test_non_string_error_rendered_as_json() {
        let r = normalize(Some(json!({ "success": false, "error": { "code": 7 } })));
        assert_eq!(r.error_text.as_deref(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn test_status_error_wins_over_success_true() {
        let r = normalize(Some(json!({ "status": "error", "success": true, "error": "e" })));
        assert!(!r.ok);
    }

    #[test]
    fn test_null_result_returns_envelope() {
        let raw = json!({ "status": "success", "result": null });
        let r = normalize(Some(raw.clone()));
        assert!(r.ok);
        assert_eq!(r.payload, Some(raw));
    }

    #[test]
    fn test_absent_and_non_object() {
        assert_eq!(normalize(None), BridgeResponse::failure(NO_RESPONSE));
        assert_eq!(normalize(Some(json!([1, 2]))), BridgeResponse::failure(NO_RESPONSE));
        assert_eq!(normalize(Some(json!("ok"))), BridgeResponse::failure(NO_RESPONSE));
        assert_eq!(normalize(Some(Value::Null)), BridgeResponse::failure(NO_RESPONSE));
    }

    #[test]
    fn test_canonical_serialization_keeps_nulls() {
        let json = serde_json::to_value(BridgeResponse::failure("not found")).unwrap();
        assert_eq!(
            json,
            json!({ "ok": false, "payload": null, "error_text": "not found" })
        );
    }

    #[test]
    fn test_channel_error_becomes_failure() {
        let r: BridgeResponse = ChannelError::Decode("expected value".into()).into();
        assert!(!r.ok);
        assert!(r.error_text.unwrap().contains("expected value"));
    }
}
