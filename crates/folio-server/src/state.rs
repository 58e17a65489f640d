//! Server state management.
//!
//! Everything shared across requests is read-only: the profile record,
//! the responder over it, and the notifier's HTTP client. No locking is
//! needed anywhere in the request path.

use std::sync::Arc;

use folio_core::{NotifyConfig, Notifier, ProfileRecord, Responder};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<ProfileRecord>,
    pub responder: Arc<Responder>,
    pub notifier: Arc<Notifier>,
}

impl AppState {
    /// Create state over the bundled profile.
    pub fn new(config: NotifyConfig) -> Self {
        Self::with_profile(Arc::new(ProfileRecord::bundled()), config)
    }

    /// Create state over a custom profile record.
    pub fn with_profile(profile: Arc<ProfileRecord>, config: NotifyConfig) -> Self {
        let responder = Arc::new(Responder::new(profile.clone()));
        let notifier = Arc::new(Notifier::new(config));
        Self {
            profile,
            responder,
            notifier,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NotifyConfig::default())
    }
}
