//! Channel manifest advertised to the platform at `GET /manifest`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: &'static str,
    pub id: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    pub channelback_files: bool,
    pub urls: ManifestUrls,
}

/// Endpoint paths, relative to the manifest URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestUrls {
    pub admin_ui: &'static str,
    pub pull_url: &'static str,
    pub channelback_url: &'static str,
    pub clickthrough_url: &'static str,
    pub healthcheck_url: &'static str,
    pub event_callback_url: &'static str,
}

impl Manifest {
    pub fn bridge() -> Self {
        Self {
            name: "Messages API",
            id: "com.nexmo.integrations.messages.api.three",
            author: "whatsapp-bridge contributors",
            version: concat!("v", env!("CARGO_PKG_VERSION")),
            channelback_files: true,
            urls: ManifestUrls {
                admin_ui: "./admin_ui",
                pull_url: "./pull",
                channelback_url: "./channelback",
                clickthrough_url: "./clickthrough",
                healthcheck_url: "./healthcheck",
                event_callback_url: "./event_callback",
            },
        }
    }
}
