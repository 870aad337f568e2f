use crate::actor_framework::Entity;
use crate::domain::{CreateUserInput, User, UserPatch};

impl Entity for User {
    type Id = String;
    type CreateParams = CreateUserInput;
    type Patch = UserPatch;

    fn id(&self) -> &String {
        &self.user_id
    }

    /// Creates a new User from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Directory-assigned unique identifier
    /// * `params` - Email and age; new users always start unsubscribed
    fn from_create_params(id: String, params: CreateUserInput) -> Self {
        Self {
            user_id: id,
            email: params.email,
            age: params.age,
            is_subscribed: false,
        }
    }

    /// Applies the fields present in the patch.
    ///
    /// # Fields Updated
    /// - `age`: User's age
    /// - `is_subscribed`: Subscription flag
    fn on_update(&mut self, patch: UserPatch) {
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(is_subscribed) = patch.is_subscribed {
            self.is_subscribed = is_subscribed;
        }
    }
}
