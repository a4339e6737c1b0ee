//! Shared helpers for bridge integration tests: recording sender, request builders, body readers.

#![allow(dead_code)]

pub mod mock_sender;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;
use whatsapp_bridge::{build_router, AppState, BridgeComponents};

pub use mock_sender::RecordingSender;

/// Router plus a handle on its components, built around `sender`.
pub fn test_app(sender: Arc<RecordingSender>) -> (Router, BridgeComponents) {
    let components = BridgeComponents::with_sender(sender);
    (build_router(AppState::new(components.clone())), components)
}

/// application/x-www-form-urlencoded encoding of `pairs`.
pub fn form_encode(pairs: &[(&str, &str)]) -> String {
    fn encode(s: &str) -> String {
        let mut out = String::new();
        for b in s.bytes() {
            match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                    out.push(b as char)
                }
                b' ' => out.push('+'),
                _ => out.push_str(&format!("%{:02X}", b)),
            }
        }
        out
    }
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn form_request(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_encode(pairs)))
        .unwrap()
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Provider inbound webhook body.
pub fn inbound_event(from: &str, to: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "message_uuid": "0f7d5c6e-0000-4000-8000-000000000000",
        "direction": "inbound",
        "from": { "type": "whatsapp", "number": from },
        "to": { "type": "whatsapp", "number": to },
        "message": { "content": { "type": "text", "text": text } },
        "timestamp": "2024-05-01T12:00:00.000Z"
    })
}

/// Serialized credential bundle as the platform sends it back.
pub fn metadata(number: &str) -> String {
    serde_json::json!({ "name": "Acme", "jwt": "test-jwt-token-123", "whatsappNumber": number })
        .to_string()
}
