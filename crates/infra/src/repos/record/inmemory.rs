use super::IRecordRepo;
use crate::repos::shared::inmemory_repo::*;
use kennel_domain::ID;
use std::{marker::PhantomData, sync::Arc};

pub struct InMemoryRecordRepo<R> {
    db: Arc<InMemoryDatabase>,
    _record: PhantomData<fn() -> R>,
}

impl<R> InMemoryRecordRepo<R> {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<R: InMemoryTable> IRecordRepo<R> for InMemoryRecordRepo<R> {
    async fn insert(&self, record: &R) -> anyhow::Result<()> {
        self.db.write(|tables| insert(record, R::rows_mut(tables)));
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<R>> {
        Ok(self.db.read(|tables| find(record_id, R::rows(tables))))
    }

    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<R>> {
        Ok(self.db.write(|tables| delete(record_id, R::rows_mut(tables))))
    }
}
