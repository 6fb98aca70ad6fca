use super::{IDeletableRepo, IDeletionSession};
use crate::repos::shared::inmemory_repo::*;
use kennel_domain::{Deletable, DependentKind, ID};
use std::{marker::PhantomData, sync::Arc};

pub struct InMemoryDeletableRepo<E> {
    db: Arc<InMemoryDatabase>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> InMemoryDeletableRepo<E> {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<E: Deletable + InMemoryTable> IDeletableRepo<E> for InMemoryDeletableRepo<E> {
    async fn insert(&self, entity: &E) -> anyhow::Result<()> {
        self.db.write(|tables| insert(entity, E::rows_mut(tables)));
        Ok(())
    }

    async fn find(&self, entity_id: &ID) -> anyhow::Result<Option<E>> {
        Ok(self.db.read(|tables| find(entity_id, E::rows(tables))))
    }

    async fn begin(&self) -> anyhow::Result<Box<dyn IDeletionSession<E>>> {
        Ok(Box::new(InMemoryDeletionSession {
            db: self.db.clone(),
            staged: Vec::new(),
        }))
    }
}

enum Mutation<E> {
    Update(E),
    Remove(ID),
}

struct InMemoryDeletionSession<E> {
    db: Arc<InMemoryDatabase>,
    staged: Vec<Mutation<E>>,
}

#[async_trait::async_trait]
impl<E: Deletable + InMemoryTable> IDeletionSession<E> for InMemoryDeletionSession<E> {
    async fn find(&mut self, entity_id: &ID) -> anyhow::Result<Option<E>> {
        Ok(self.db.read(|tables| find(entity_id, E::rows(tables))))
    }

    async fn find_dependent(&mut self, entity_id: &ID) -> anyhow::Result<Option<DependentKind>> {
        Ok(self.db.read(|tables| {
            E::DEPENDENTS
                .iter()
                .copied()
                .find(|dependents| tables.is_referenced(*dependents, E::KIND, entity_id))
        }))
    }

    async fn update(&mut self, entity: &E) -> anyhow::Result<()> {
        self.staged.push(Mutation::Update(entity.clone()));
        Ok(())
    }

    async fn remove(&mut self, entity: &E) -> anyhow::Result<()> {
        self.staged.push(Mutation::Remove(entity.id().clone()));
        Ok(())
    }

    async fn commit(self: Box<Self>) -> anyhow::Result<()> {
        let Self { db, staged } = *self;
        db.transaction(|tables| {
            for mutation in staged {
                match mutation {
                    Mutation::Update(entity) => {
                        if !save(&entity, E::rows_mut(tables)) {
                            anyhow::bail!("{} {} no longer exists", E::KIND, entity.id());
                        }
                    }
                    Mutation::Remove(entity_id) => {
                        if delete(&entity_id, E::rows_mut(tables)).is_none() {
                            anyhow::bail!("{} {} was already removed", E::KIND, entity_id);
                        }
                    }
                }
            }
            Ok(())
        })
    }
}
