mod inmemory;
mod postgres;

pub use inmemory::InMemoryDeletableRepo;
use kennel_domain::{Deletable, DependentKind, ID};
pub use postgres::PostgresDeletableRepo;

/// Storage of an entity kind that is deleted through a tombstone
#[async_trait::async_trait]
pub trait IDeletableRepo<E: Deletable>: Send + Sync {
    async fn insert(&self, entity: &E) -> anyhow::Result<()>;
    async fn find(&self, entity_id: &ID) -> anyhow::Result<Option<E>>;
    /// Opens a session that sees the latest committed state
    async fn begin(&self) -> anyhow::Result<Box<dyn IDeletionSession<E>>>;
}

/// Explicit unit of work for one delete request.
///
/// Mutations are staged and only become visible on `commit`. Dropping the
/// session without committing discards them.
#[async_trait::async_trait]
pub trait IDeletionSession<E: Deletable>: Send {
    async fn find(&mut self, entity_id: &ID) -> anyhow::Result<Option<E>>;
    /// First kind in `E::DEPENDENTS` with any row referencing `entity_id`
    async fn find_dependent(&mut self, entity_id: &ID) -> anyhow::Result<Option<DependentKind>>;
    async fn update(&mut self, entity: &E) -> anyhow::Result<()>;
    async fn remove(&mut self, entity: &E) -> anyhow::Result<()>;
    async fn commit(self: Box<Self>) -> anyhow::Result<()>;
}
