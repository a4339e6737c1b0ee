//! HTTP surface: the platform's channel endpoints plus the provider's inbound webhook.

mod error;
mod extract;
mod html;
mod manifest;
mod routes;

pub use error::ApiError;
pub use extract::FormOrJson;
pub use html::{admin_ui_html, escape_attr, finish_html};
pub use manifest::{Manifest, ManifestUrls};
pub use routes::{build_router, AppState};
