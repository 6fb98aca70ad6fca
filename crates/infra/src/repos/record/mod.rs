mod inmemory;
mod postgres;

pub use inmemory::InMemoryRecordRepo;
use kennel_domain::{Entity, ID};
pub use postgres::PostgresRecordRepo;

/// Storage of records that are deleted right away, without a tombstone
#[async_trait::async_trait]
pub trait IRecordRepo<R: Entity + Send + Sync>: Send + Sync {
    async fn insert(&self, record: &R) -> anyhow::Result<()>;
    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<R>>;
    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<R>>;
}
