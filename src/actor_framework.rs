use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait and framework errors)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from a freshly generated ID and the creation params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Self;

    /// Apply a partial update. The entity's ID must not change.
    fn on_update(&mut self, patch: Self::Patch);
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns every `T` in insertion order. Requests are handled one at a time, so
/// a read never observes a half-applied mutation.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs until every client handle has been dropped.
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_create(params)));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(&id));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let _ = respond_to.send(self.handle_get_many(&ids));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(&id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(&id));
                }
            }
        }
        info!(remaining = self.store.len(), "ResourceActor stopped");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    #[instrument(skip_all)]
    fn handle_create(&mut self, params: T::CreateParams) -> T {
        let id = (self.next_id_fn)();
        let item = T::from_create_params(id, params);
        self.store.push(item.clone());
        info!(id = %item.id(), "Item created");
        item
    }

    #[instrument(skip_all, fields(id = %id))]
    fn handle_get(&self, id: &T::Id) -> Result<T, FrameworkError> {
        debug!("Processing get request");
        match self.position(id) {
            Some(index) => Ok(self.store[index].clone()),
            None => {
                warn!("Item not found");
                Err(FrameworkError::NotFound(id.to_string()))
            }
        }
    }

    /// Resolves every id in order, aborting on the first miss.
    #[instrument(skip_all, fields(count = ids.len()))]
    fn handle_get_many(&self, ids: &[T::Id]) -> Result<Vec<T>, FrameworkError> {
        ids.iter().map(|id| self.handle_get(id)).collect()
    }

    #[instrument(skip_all, fields(id = %id))]
    fn handle_update(&mut self, id: &T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        debug!(?patch, "Processing update request");
        let Some(index) = self.position(id) else {
            warn!("Item not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let item = &mut self.store[index];
        item.on_update(patch);
        info!("Item updated");
        Ok(item.clone())
    }

    #[instrument(skip_all, fields(id = %id))]
    fn handle_delete(&mut self, id: &T::Id) -> Result<T, FrameworkError> {
        let Some(index) = self.position(id) else {
            warn!("Item not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let item = self.store.remove(index);
        info!("Item deleted");
        Ok(item)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::GetMany { ids, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
