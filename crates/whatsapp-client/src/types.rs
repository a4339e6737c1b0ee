//! Wire types of the Messages API send endpoint.

use serde::{Deserialize, Serialize};

const CHANNEL: &str = "whatsapp";

#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    pub from: Endpoint<'a>,
    pub to: Endpoint<'a>,
    pub message: MessageBody<'a>,
}

impl<'a> SendRequest<'a> {
    pub fn text(from: &'a str, to: &'a str, text: &'a str, locale: &'a str) -> Self {
        Self {
            from: Endpoint {
                kind: CHANNEL,
                number: from,
            },
            to: Endpoint {
                kind: CHANNEL,
                number: to,
            },
            message: MessageBody {
                content: Content { kind: "text", text },
                whatsapp: WhatsAppPolicy {
                    policy: "deterministic",
                    locale,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Endpoint<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub number: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageBody<'a> {
    pub content: Content<'a>,
    pub whatsapp: WhatsAppPolicy<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct WhatsAppPolicy<'a> {
    pub policy: &'static str,
    pub locale: &'a str,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct SendResponse {
    #[serde(default)]
    pub message_uuid: Option<String>,
}
