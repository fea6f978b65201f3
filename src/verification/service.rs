use std::sync::Arc;

use super::domain::{UserVerification, VerificationStatus};
use crate::session::{stored_user_id, SessionStore};

/// Transport seam for the remote verification API so the service can be
/// exercised with a stub in tests.
#[allow(async_fn_in_trait)]
pub trait VerificationClient: Send + Sync {
    /// Fetch the verification case for a user, `None` when nothing has been
    /// submitted yet.
    async fn fetch_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<UserVerification>, VerificationFetchError>;
}

/// Error raised by a verification client. The service never propagates it;
/// failures degrade to the default status.
#[derive(Debug, thiserror::Error)]
pub enum VerificationFetchError {
    #[error("verification endpoint unavailable: {0}")]
    Transport(String),
    #[error("verification response malformed: {0}")]
    Malformed(String),
}

/// Resolves the signed-in user's verification status for profile and badge
/// displays. All failure paths collapse to [`VerificationStatus::NotVerified`]
/// so callers never handle an error.
pub struct VerificationStatusService<C> {
    client: Arc<C>,
}

impl<C> VerificationStatusService<C>
where
    C: VerificationClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Full verification record for profile screens, `None` when the visitor
    /// is anonymous, nothing was submitted, or the fetch failed.
    pub async fn load(&self, store: &dyn SessionStore) -> Option<UserVerification> {
        let Some(user_id) = stored_user_id(store) else {
            tracing::debug!("no stored user id, skipping verification fetch");
            return None;
        };

        match self.client.fetch_for_user(&user_id).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "verification fetch failed, using default status");
                None
            }
        }
    }

    /// Status-only view for badges.
    pub async fn load_status(&self, store: &dyn SessionStore) -> VerificationStatus {
        self.load(store)
            .await
            .map(|record| record.status)
            .unwrap_or_default()
    }
}
