use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{CreateUserInput, UpdateUserInput, User};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self, input), fields(user_email = %input.email))]
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(input).await.map_err(UserError::from)
    }

    /// The input's `user_id` only selects the record; it is never written.
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn update_user(&self, input: UpdateUserInput) -> Result<User, UserError> {
        debug!("Sending request");
        let (id, patch) = input.into_parts();
        self.inner.update(id, patch).await.map_err(UserError::from)
    }
}
