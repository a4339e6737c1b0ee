use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use relay_core::{Credentials, OutboundMessage};
use serde::Deserialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use super::error::ApiError;
use super::extract::FormOrJson;
use super::html::{admin_ui_html, finish_html};
use super::manifest::Manifest;
use crate::components::BridgeComponents;
use crate::handlers::{
    AdminRegistration, AdminSubmission, ChannelbackAck, InboundHandler, OutboundPoller,
    RegistrationError, ReplyDispatcher, ResourceRecord,
};

/// Per-route handlers sharing one queue store.
#[derive(Clone)]
pub struct AppState {
    pub inbound: InboundHandler,
    pub poller: OutboundPoller,
    pub dispatcher: ReplyDispatcher,
    pub admin: AdminRegistration,
}

impl AppState {
    pub fn new(components: BridgeComponents) -> Self {
        Self {
            inbound: InboundHandler::new(components.queues.clone()),
            poller: OutboundPoller::new(components.queues.clone()),
            admin: AdminRegistration::new(components.queues),
            dispatcher: ReplyDispatcher::new(components.sender),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/manifest", get(manifest))
        .route("/admin_ui", post(admin_ui))
        .route("/admin_ui_2", post(admin_ui_2))
        .route("/pull", post(pull))
        .route("/channelback", post(channelback))
        .route("/clickthrough", get(clickthrough))
        .route("/healthcheck", get(healthcheck))
        .route("/event_callback", post(event_callback))
        .route("/inbound", post(inbound))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parses the platform's `metadata` field; absent means an empty bundle.
fn credentials(metadata: Option<&str>) -> Result<Credentials, ApiError> {
    match metadata.filter(|m| !m.trim().is_empty()) {
        Some(m) => Ok(Credentials::from_metadata(m)?),
        None => Ok(Credentials::default()),
    }
}

async fn manifest() -> Json<Manifest> {
    info!("Manifest request");
    Json(Manifest::bridge())
}

#[derive(Debug, Deserialize)]
struct AdminUiForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    metadata: Option<String>,
    #[serde(default)]
    return_url: String,
}

async fn admin_ui(FormOrJson(form): FormOrJson<AdminUiForm>) -> Html<String> {
    info!(return_url = %form.return_url, "Admin UI request");
    // An unreadable bundle just means nothing to prefill.
    let creds = credentials(form.metadata.as_deref()).unwrap_or_default();
    Html(admin_ui_html(&form.name, &creds, &form.return_url, None))
}

#[derive(Debug, Deserialize)]
struct AdminSubmitForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    jwt: String,
    #[serde(rename = "whatsappNumber", default)]
    whatsapp_number: String,
    #[serde(default)]
    return_url: String,
}

async fn admin_ui_2(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<AdminSubmitForm>,
) -> Html<String> {
    info!(number = %form.whatsapp_number, "Admin UI submission");
    let submission = AdminSubmission {
        name: form.name.clone(),
        jwt: form.jwt.clone(),
        whatsapp_number: form.whatsapp_number.clone(),
    };

    match state.admin.register(submission).await {
        Ok(registration) => Html(finish_html(
            &form.return_url,
            &registration.credentials.name,
            &registration.metadata,
        )),
        Err(e) => {
            warn!(error = %e, "Admin submission rejected");
            let entered = Credentials::new(form.name.as_str(), form.jwt, form.whatsapp_number);
            let warning = match e {
                RegistrationError::Relay(_) => "Could not save settings, please try again".to_string(),
                other => other.to_string(),
            };
            Html(admin_ui_html(&form.name, &entered, &form.return_url, Some(&warning)))
        }
    }
}

#[derive(Debug, Deserialize)]
struct PullForm {
    #[serde(default)]
    metadata: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct PullResponse {
    external_resources: Vec<ResourceRecord>,
}

async fn pull(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<PullForm>,
) -> Result<Json<PullResponse>, ApiError> {
    let creds = credentials(form.metadata.as_deref())?;
    // Pull state is accepted and logged; draining does not depend on it.
    let pull_state = form
        .state
        .as_deref()
        .and_then(|s| serde_json::from_str::<Value>(s).ok())
        .unwrap_or_else(|| Value::Object(Default::default()));
    info!(number = %creds.whatsapp_number, state = %pull_state, "Pull request");

    let external_resources = state.poller.poll(&creds.whatsapp_number).await;
    Ok(Json(PullResponse { external_resources }))
}

#[derive(Debug, Deserialize)]
struct ChannelbackForm {
    #[serde(default)]
    message: String,
    thread_id: String,
    metadata: String,
}

async fn channelback(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<ChannelbackForm>,
) -> Result<Json<ChannelbackAck>, ApiError> {
    let creds = credentials(Some(&form.metadata))?;
    info!(
        thread_id = %form.thread_id,
        number = %creds.whatsapp_number,
        text_len = form.message.len(),
        "Channelback request"
    );

    let (ack, _delivery) = state
        .dispatcher
        .dispatch(creds, OutboundMessage::new(form.thread_id, form.message));
    Ok(Json(ack))
}

#[derive(Debug, Deserialize)]
struct ClickthroughQuery {
    external_id: Option<String>,
}

async fn clickthrough(Query(query): Query<ClickthroughQuery>) -> StatusCode {
    info!(external_id = ?query.external_id, "Clickthrough request (not supported)");
    StatusCode::NOT_IMPLEMENTED
}

async fn healthcheck() -> StatusCode {
    debug!("Healthcheck");
    StatusCode::OK
}

async fn event_callback(body: Bytes) -> StatusCode {
    match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => match payload.get("events").and_then(Value::as_array) {
            Some(events) => {
                for event in events {
                    info!(event = %event, "Platform event");
                }
            }
            None => warn!(body = %payload, "Event callback without events array"),
        },
        Err(e) => warn!(error = %e, "Unparseable event callback body"),
    }
    StatusCode::OK
}

/// Provider webhook payload; only the fields the bridge reads.
#[derive(Debug, Default, Deserialize)]
struct InboundEvent {
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    from: Option<Party>,
    #[serde(default)]
    to: Option<Party>,
    #[serde(default)]
    message: Option<InboundMessage>,
}

#[derive(Debug, Deserialize)]
struct Party {
    number: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InboundMessage {
    content: Option<InboundContent>,
}

#[derive(Debug, Deserialize)]
struct InboundContent {
    text: Option<String>,
}

impl InboundEvent {
    /// `(from, to, text)` for inbound text messages; None for anything else.
    fn text_message(self) -> Option<(String, String, String)> {
        if self.direction.as_deref() != Some("inbound") {
            return None;
        }
        let from = self.from?.number?;
        let to = self.to?.number?;
        let text = self.message?.content?.text?;
        Some((from, to, text))
    }
}

async fn inbound(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let event = match serde_json::from_slice::<InboundEvent>(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Unparseable inbound event");
            return StatusCode::OK;
        }
    };
    let direction = event.direction.clone();

    match event.text_message() {
        Some((from, to, text)) => {
            info!(from = %from, to = %to, "Inbound message received");
            state.inbound.handle(&from, &to, &text).await;
        }
        None => debug!(direction = ?direction, "Inbound event ignored"),
    }
    StatusCode::OK
}
