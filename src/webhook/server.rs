use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use serde::Deserialize;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::{
    event::InboundEvent,
    interface::messenger::Outbound,
    talk::router::Router,
    webhook::{
        dispatch::handle_event,
        payload::parse_callback,
        signature::{Signature, SignatureVerifier},
    },
};

// -----------------------------------------------------------------------------
// Server State
// -----------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    pub router: Arc<Router>,
    pub outbound: Outbound,
    pub verify_token: Arc<str>,
    pub verifier: SignatureVerifier,
}

pub fn app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/callback", get(verify_webhook).post(handle_callback))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// -----------------------------------------------------------------------------
// Handlers
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct VerifyParams {
    #[serde(rename = "hub.mode")]
    mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    challenge: Option<String>,
}

/// Subscription handshake. Answers 200 in every case; only the body differs.
async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> (StatusCode, String) {
    let (Some(mode), Some(token), Some(challenge)) =
        (params.mode, params.verify_token, params.challenge)
    else {
        return (StatusCode::OK, String::new());
    };

    debug!(
        "Received webhook verification request - mode: {} | challenge: {}",
        mode, challenge
    );

    let failure = if mode != "subscribe" {
        format!("Webhook verification failed. Mode '{}' is invalid.", mode)
    } else if token != *state.verify_token {
        "Webhook verification failed. Verify token is invalid.".to_string()
    } else {
        info!("Webhook verified");
        return (StatusCode::OK, challenge);
    };

    warn!("{}", failure);
    (StatusCode::OK, failure)
}

/// Callback delivery. Answers as soon as the batch is verified and decoded;
/// the events are handled afterwards on their own task.
async fn handle_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if body.is_empty() {
        debug!("Callback without body ignored");
        return StatusCode::OK;
    }
    let Some(signature) = Signature::from_headers(&headers) else {
        warn!("Callback without signature ignored");
        return StatusCode::OK;
    };
    if !state.verifier.verify(signature, &body) {
        warn!("Processing of callback payload failed: signature does not match");
        return StatusCode::OK;
    }

    let events = match parse_callback(&body) {
        Ok(events) => events,
        Err(e) => {
            warn!("Processing of callback payload failed: {:#}", e);
            return StatusCode::OK;
        }
    };

    debug!("Processing {} callback events", events.len());
    spawn_batch(&state, events);
    StatusCode::OK
}

/// Handles one callback batch in delivery order. Separate batches may interleave.
fn spawn_batch(state: &AppState, events: Vec<InboundEvent>) -> JoinHandle<()> {
    let router = state.router.clone();
    let outbound = state.outbound.clone();
    tokio::spawn(async move {
        for event in events {
            handle_event(&router, &outbound, event).await;
        }
    })
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chat::OutboundMessage,
        entity::RecipientId,
        interface::messenger::testing::RecordingMessenger,
        talk::{filler::Filler, registry::TopicRegistry},
        webhook::signature::{
            testing::{sign_sha1, sign_sha256},
            SHA1_HEADER, SHA256_HEADER,
        },
    };
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
    };
    use serde_json::json;
    use std::time::Duration;
    use tower::ServiceExt;

    const SECRET: &str = "app-secret";
    const TOKEN: &str = "verify-me";

    fn state() -> (AppState, Arc<RecordingMessenger>) {
        let messenger = Arc::new(RecordingMessenger::default());
        let outbound = Outbound::new(messenger.clone());
        let router = Router::with_filler(TopicRegistry::standard(), outbound.clone(), Filler::seeded(9));
        let state = AppState {
            router: Arc::new(router),
            outbound,
            verify_token: Arc::from(TOKEN),
            verifier: SignatureVerifier::new(SECRET),
        };
        (state, messenger)
    }

    fn setup() -> (axum::Router, Arc<RecordingMessenger>) {
        let (state, messenger) = state();
        (app(state), messenger)
    }

    /// Replies go out after the response, so give the batch task time to run.
    async fn wait_for_sent(messenger: &RecordingMessenger, count: usize) -> Vec<OutboundMessage> {
        for _ in 0..200 {
            let sent = messenger.sent();
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        messenger.sent()
    }

    async fn get_body(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn text_callback(text: &str) -> String {
        json!({
            "object": "page",
            "entry": [{
                "id": "PAGE_ID",
                "time": 1458692752478u64,
                "messaging": [{
                    "sender": { "id": "USER_ID" },
                    "recipient": { "id": "PAGE_ID" },
                    "timestamp": 1458692752478u64,
                    "message": { "mid": "mid.1", "text": text }
                }]
            }]
        })
        .to_string()
    }

    fn post(body: String, headers: &[(&str, String)]) -> Request<Body> {
        let mut request = Request::builder()
            .method(Method::POST)
            .uri("/callback")
            .header("content-type", "application/json");
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }
        request.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn verification_echoes_the_challenge() {
        let (app, _) = setup();
        let (status, body) = get_body(
            app,
            "/callback?hub.mode=subscribe&hub.verify_token=verify-me&hub.challenge=1158201444",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "1158201444");
    }

    #[tokio::test]
    async fn verification_with_wrong_token_explains() {
        let (app, _) = setup();
        let (status, body) = get_body(
            app,
            "/callback?hub.mode=subscribe&hub.verify_token=nope&hub.challenge=42",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Webhook verification failed. Verify token is invalid.");
    }

    #[tokio::test]
    async fn verification_with_wrong_mode_explains() {
        let (app, _) = setup();
        let (_, body) = get_body(
            app,
            "/callback?hub.mode=unsubscribe&hub.verify_token=verify-me&hub.challenge=42",
        )
        .await;
        assert!(body.contains("Mode 'unsubscribe' is invalid"));
    }

    #[tokio::test]
    async fn verification_without_params_is_empty() {
        let (app, _) = setup();
        let (status, body) = get_body(app, "/callback?hub.mode=subscribe").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn health_says_ok() {
        let (app, _) = setup();
        assert_eq!(get_body(app, "/health").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn signed_text_is_routed() {
        let (app, messenger) = setup();
        let body = text_callback("Hello");
        let signature = sign_sha256(SECRET, body.as_bytes());

        let response = app
            .oneshot(post(body, &[(SHA256_HEADER, signature)]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let sent = wait_for_sent(&messenger, 1).await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient.as_str(), "USER_ID");
        assert!(sent[0].text.starts_with("Hello I am The Talking Chess Engine."));
    }

    #[tokio::test]
    async fn sha1_signature_is_accepted() {
        let (app, messenger) = setup();
        let body = text_callback("xyzzy");
        let signature = sign_sha1(SECRET, body.as_bytes());

        let response = app
            .oneshot(post(body, &[(SHA1_HEADER, signature)]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(wait_for_sent(&messenger, 1).await.len(), 1);
    }

    #[tokio::test]
    async fn batch_is_handled_in_delivery_order() {
        let (state, messenger) = state();
        let text = |mid: &str, text: &str| InboundEvent::Text {
            sender: RecipientId::new("USER_ID"),
            message_id: mid.into(),
            text: text.into(),
            timestamp: None,
        };

        spawn_batch(&state, vec![text("mid.1", "Hello"), text("mid.2", "e4")])
            .await
            .unwrap();

        let texts: Vec<_> = messenger.sent().into_iter().map(|m| m.text).collect();
        assert_eq!(texts.len(), 3);
        assert!(texts[0].starts_with("Hello I am The Talking Chess Engine."));
        assert!(texts[1].starts_with("e4 - the best by test."));
        assert_eq!(texts[2], "Would you like to play a game?");
    }

    #[tokio::test]
    async fn bad_signature_is_ignored() {
        let (app, messenger) = setup();
        let body = text_callback("Hello");
        let signature = sign_sha256("wrong-secret", body.as_bytes());

        let response = app
            .oneshot(post(body, &[(SHA256_HEADER, signature)]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn unsigned_or_empty_callbacks_are_ignored() {
        let (app, messenger) = setup();
        let response = app
            .clone()
            .oneshot(post(text_callback("Hello"), &[]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(post(String::new(), &[])).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn malformed_payload_still_gets_200() {
        let (app, messenger) = setup();
        let body = r#"{"object":"page","entry":[{"messaging":[{"no_sender":true}]}]}"#.to_string();
        let signature = sign_sha256(SECRET, body.as_bytes());

        let response = app
            .oneshot(post(body, &[(SHA256_HEADER, signature)]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(messenger.sent().is_empty());
    }
}
