//! Authenticated/unauthenticated state for the host application.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct SessionState {
    authenticated: AtomicBool,
    last_credential: Mutex<Option<String>>,
}

/// Shared session handle.
///
/// Created by the host and passed into [`AuthClient`](crate::AuthClient);
/// clones observe the same state. Concurrent writers are last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Arc<SessionState>,
}

impl Session {
    /// Creates an unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the last successful validation has not been revoked.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated.load(Ordering::SeqCst)
    }

    /// Overrides the authenticated flag, e.g. for a manual logout.
    pub fn set_authenticated(&self, authenticated: bool) {
        self.state
            .authenticated
            .store(authenticated, Ordering::SeqCst);
    }

    /// The last credential the server accepted in this process.
    #[must_use]
    pub fn last_credential(&self) -> Option<String> {
        self.credential_slot().clone()
    }

    /// Returns the session to its initial unauthenticated state.
    pub fn reset(&self) {
        self.set_authenticated(false);
        *self.credential_slot() = None;
    }

    pub(crate) fn record_success(&self, credential: &str) {
        *self.credential_slot() = Some(credential.to_string());
        self.set_authenticated(true);
    }

    fn credential_slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // The slot holds plain data, so a poisoned lock is still consistent.
        self.state
            .last_credential
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
