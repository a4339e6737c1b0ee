//! Admin setup: registers the business number's queue and builds the credential bundle the
//! platform will store.

use message_queue::QueueStore;
use relay_core::{Credentials, RelayError};
use thiserror::Error;
use tracing::{info, instrument};

/// Fields submitted from the admin setup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSubmission {
    pub name: String,
    pub jwt: String,
    pub whatsapp_number: String,
}

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("WhatsApp number is required")]
    MissingNumber,

    #[error("JWT is required")]
    MissingJwt,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub credentials: Credentials,
    /// Serialized [`Credentials`] for the platform's `metadata` field.
    pub metadata: String,
    /// False when the number already had a queue; its pending messages were kept.
    pub newly_registered: bool,
}

#[derive(Debug, Clone)]
pub struct AdminRegistration {
    queues: QueueStore,
}

impl AdminRegistration {
    pub fn new(queues: QueueStore) -> Self {
        Self { queues }
    }

    /// Validates the submission, ensures a queue exists for the number and returns the bundle.
    ///
    /// Re-registering a known number leaves its queue untouched. Credentials are not stored here.
    #[instrument(skip(self, submission), fields(number = %submission.whatsapp_number))]
    pub async fn register(
        &self,
        submission: AdminSubmission,
    ) -> Result<Registration, RegistrationError> {
        let whatsapp_number = submission.whatsapp_number.trim().to_string();
        let jwt = submission.jwt.trim().to_string();
        if whatsapp_number.is_empty() {
            return Err(RegistrationError::MissingNumber);
        }
        if jwt.is_empty() {
            return Err(RegistrationError::MissingJwt);
        }

        let credentials = Credentials::new(submission.name, jwt, whatsapp_number);
        let metadata = credentials.to_metadata()?;
        let newly_registered = self.queues.register(&credentials.whatsapp_number).await;
        info!(
            name = %credentials.name,
            number = %credentials.whatsapp_number,
            newly_registered,
            "Admin registration completed"
        );

        Ok(Registration {
            credentials,
            metadata,
            newly_registered,
        })
    }
}
