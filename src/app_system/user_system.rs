use tracing::{error, info};
use uuid::Uuid;
use crate::actor_framework::ResourceActor;
use crate::app_system::{DirectoryConfig, SystemError};
use crate::clients::UserClient;
use crate::domain::User;

/// Starts the user actor and hands out the client used to reach it.
pub struct UserSystem {
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl UserSystem {
    pub fn new(config: &DirectoryConfig) -> Self {
        info!(buffer_size = config.buffer_size.get(), "Starting user system");
        let next_user_id = || Uuid::new_v4().to_string();

        let (user_actor, user_resource_client) =
            ResourceActor::<User>::new(config.buffer_size.get(), next_user_id);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        Self {
            user_client,
            handles: vec![user_handle],
        }
    }

    /// Drops the system's client and waits for the actor to drain.
    ///
    /// The actor only stops once every clone of `user_client` is gone, so
    /// callers must drop their own clones first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
