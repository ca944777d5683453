use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::User;
use crate::user_actor::UserError;

/// Client for the staff directory.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    /// Users with the DOCTOR role, in directory order.
    #[instrument(skip(self))]
    pub async fn list_doctors(&self) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        let mut users = self.inner.list().await?;
        users.retain(User::is_doctor);
        Ok(users)
    }

    /// Exact, case-sensitive email match.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let users = self.inner.list().await?;
        Ok(users.into_iter().find(|user| user.email == email))
    }
}
