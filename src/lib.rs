//! # User Directory
//!
//! An in-memory user directory built on a single resource actor.
//!
//! - **Domain types** - [`domain::User`] and its operation inputs
//! - **Actor framework** - [`actor_framework::ResourceActor`] owns the records and
//!   handles one request at a time; [`actor_framework::ResourceClient`] is the handle
//! - **Client** - [`clients::UserClient`] maps framework errors into [`user_actor::UserError`]
//! - **Resolver** - [`resolver::Resolver`] serves named JSON operations
//! - **System** - [`app_system::UserSystem`] wires it together; [`app_system::setup_tracing`]
//!   configures logging
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use user_directory::app_system::{DirectoryConfig, UserSystem};
//! use user_directory::domain::CreateUserInput;
//!
//! let system = UserSystem::new(&DirectoryConfig::default());
//! let user = system
//!     .user_client
//!     .create_user(CreateUserInput::new("alice@example.com", 30))
//!     .await?;
//! assert!(!user.is_subscribed);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod resolver;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
