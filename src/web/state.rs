//! # Web API Application State
//!
//! Shared state for the web API: configuration, the offering catalog, and
//! the registration service with its store and sender collaborators.

use crate::catalog::SeminarCatalog;
use crate::config::SeminarConfig;
use crate::error::Result;
use crate::services::notification::{NoopSender, NotificationSender, SendGridSender};
use crate::services::registration::RegistrationService;
use crate::services::store::{PgRegistrationStore, RegistrationStore};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::warn;

/// Shared application state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SeminarConfig>,
    pub catalog: Arc<SeminarCatalog>,
    pub service: Arc<RegistrationService>,
}

impl AppState {
    /// Wire up production collaborators from configuration and a connected
    /// pool.
    ///
    /// A deployment without an email API key gets a no-op sender: the
    /// endpoint stays alive and registrations still persist, only the
    /// operator notification is dropped (and logged).
    pub fn from_config(config: &SeminarConfig, pool: PgPool) -> Result<Self> {
        let store: Arc<dyn RegistrationStore> = Arc::new(PgRegistrationStore::new(pool));

        let sender: Arc<dyn NotificationSender> = if config.email.api_key.is_empty() {
            warn!("email.api_key is empty; notifications will not be delivered");
            Arc::new(NoopSender)
        } else {
            Arc::new(SendGridSender::from_config(&config.email)?)
        };

        Ok(Self::with_collaborators(config, store, sender))
    }

    /// Wire up state around explicit collaborators. Tests use this to
    /// inject recording doubles.
    pub fn with_collaborators(
        config: &SeminarConfig,
        store: Arc<dyn RegistrationStore>,
        sender: Arc<dyn NotificationSender>,
    ) -> Self {
        let catalog = Arc::new(SeminarCatalog::new(config.seminars.clone()));
        let service = Arc::new(RegistrationService::new(
            store,
            sender,
            Arc::clone(&catalog),
            config.email.notify_to.clone(),
            config.email.subject.clone(),
        ));

        Self { config: Arc::new(config.clone()), catalog, service }
    }
}
