use serde::{Deserialize, Serialize};

use super::validation::{require_email, require_non_empty, ValidationError};

/// Represents a registered user in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub age: u32,
    pub is_subscribed: bool,
}

/// Payload for creating a new user. The id is always assigned by the directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserInput {
    pub email: String,
    pub age: u32,
}

/// Payload for updating an existing user.
///
/// `user_id` selects the record and is never written back to it; `email`
/// has no update path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserInput {
    pub user_id: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub is_subscribed: Option<bool>,
}

/// The mutable part of an update, with the lookup id split off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub age: Option<u32>,
    pub is_subscribed: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetUserArgs {
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetUsersArgs {
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteUserInput {
    pub user_id: String,
}

impl CreateUserInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_email(&self.email)
    }

    pub fn new(email: impl Into<String>, age: u32) -> Self {
        Self {
            email: email.into(),
            age,
        }
    }
}

impl GetUserArgs {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("userId", &self.user_id)
    }
}

impl DeleteUserInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("userId", &self.user_id)
    }
}

impl UpdateUserInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("userId", &self.user_id)
    }

    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            age: None,
            is_subscribed: None,
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn subscribed(mut self, is_subscribed: bool) -> Self {
        self.is_subscribed = Some(is_subscribed);
        self
    }

    /// Splits the input into the lookup id and the patch to apply.
    pub fn into_parts(self) -> (String, UserPatch) {
        let patch = UserPatch {
            age: self.age,
            is_subscribed: self.is_subscribed,
        };
        (self.user_id, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            user_id: "u1".into(),
            email: "a@example.com".into(),
            age: 30,
            is_subscribed: false,
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"userId": "u1", "email": "a@example.com", "age": 30, "isSubscribed": false})
        );
    }

    #[test]
    fn test_update_input_optional_fields_default_to_none() {
        let input: UpdateUserInput = serde_json::from_value(json!({"userId": "u1"})).unwrap();
        let (id, patch) = input.into_parts();
        assert_eq!(id, "u1");
        assert_eq!(patch, UserPatch::default());
    }

    #[test]
    fn test_update_input_rejects_email_and_unknown_keys() {
        let result = serde_json::from_value::<UpdateUserInput>(
            json!({"userId": "u1", "email": "x@example.com"}),
        );
        assert!(result.is_err());
        let result = serde_json::from_value::<UpdateUserInput>(json!({"userId": "u1", "bogus": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_input_validation() {
        assert!(CreateUserInput::new("a@example.com", 30).validate().is_ok());
        assert_eq!(
            CreateUserInput::new("", 30).validate(),
            Err(ValidationError::Empty { field: "email" })
        );
        assert!(matches!(
            CreateUserInput::new("not-an-email", 30).validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_blank_user_id_is_rejected() {
        let empty = Err(ValidationError::Empty { field: "userId" });
        assert_eq!(GetUserArgs { user_id: String::new() }.validate(), empty);
        assert_eq!(DeleteUserInput { user_id: " ".into() }.validate(), empty);
        assert_eq!(UpdateUserInput::new("").age(3).validate(), empty);
    }
}
