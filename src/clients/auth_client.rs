use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::clients::UserClient;
use crate::domain::User;
use crate::user_actor::UserError;

/// Sign-in front door.
///
/// Login is a plain email lookup after a simulated round-trip delay. No
/// credential is checked.
#[derive(Clone)]
pub struct AuthClient {
    users: UserClient,
    latency: Duration,
}

impl AuthClient {
    pub fn new(users: UserClient, latency: Duration) -> Self {
        Self { users, latency }
    }

    /// Returns the matching user, or `None` for an unknown email.
    #[instrument(skip(self))]
    pub async fn login(&self, email: &str) -> Result<Option<User>, UserError> {
        tokio::time::sleep(self.latency).await;

        let user = self.users.find_by_email(email).await?;
        match &user {
            Some(user) => info!(user_id = %user.id, role = ?user.role, "Login accepted"),
            None => warn!("Login rejected: unknown email"),
        }
        Ok(user)
    }
}
