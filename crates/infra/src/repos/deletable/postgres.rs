use super::{IDeletableRepo, IDeletionSession};
use crate::repos::shared::postgres_repo::PgRecord;
use kennel_domain::{Deletable, DependentKind, ID};
use sqlx::{PgPool, Postgres, Transaction};
use std::marker::PhantomData;

pub struct PostgresDeletableRepo<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PostgresDeletableRepo<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<E: Deletable + PgRecord> IDeletableRepo<E> for PostgresDeletableRepo<E> {
    async fn insert(&self, entity: &E) -> anyhow::Result<()> {
        entity.insert_query().execute(&self.pool).await?;
        Ok(())
    }

    async fn find(&self, entity_id: &ID) -> anyhow::Result<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN);
        let row = sqlx::query(&sql)
            .bind(*entity_id.inner_ref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(E::decode).transpose()?)
    }

    async fn begin(&self) -> anyhow::Result<Box<dyn IDeletionSession<E>>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PostgresDeletionSession {
            tx,
            _entity: PhantomData,
        }))
    }
}

/// One database transaction. Rolled back when dropped without `commit`.
struct PostgresDeletionSession<E> {
    tx: Transaction<'static, Postgres>,
    _entity: PhantomData<fn() -> E>,
}

#[async_trait::async_trait]
impl<E: Deletable + PgRecord> IDeletionSession<E> for PostgresDeletionSession<E> {
    async fn find(&mut self, entity_id: &ID) -> anyhow::Result<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN);
        let row = sqlx::query(&sql)
            .bind(*entity_id.inner_ref())
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row.as_ref().map(E::decode).transpose()?)
    }

    async fn find_dependent(&mut self, entity_id: &ID) -> anyhow::Result<Option<DependentKind>> {
        for dependents in E::DEPENDENTS {
            // Foreign key columns are named after the referenced kind
            let sql = format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE {}_uid = $1)",
                dependents.as_str(),
                E::KIND.as_str()
            );
            let exists: bool = sqlx::query_scalar(&sql)
                .bind(*entity_id.inner_ref())
                .fetch_one(&mut *self.tx)
                .await?;
            if exists {
                return Ok(Some(*dependents));
            }
        }
        Ok(None)
    }

    async fn update(&mut self, entity: &E) -> anyhow::Result<()> {
        let sql = format!(
            "UPDATE {} SET is_deleted = $2 WHERE {} = $1",
            E::TABLE,
            E::ID_COLUMN
        );
        let updated = sqlx::query(&sql)
            .bind(*entity.id().inner_ref())
            .bind(entity.is_deleted())
            .execute(&mut *self.tx)
            .await?
            .rows_affected();
        if updated == 0 {
            anyhow::bail!("{} {} no longer exists", E::KIND, entity.id());
        }
        Ok(())
    }

    async fn remove(&mut self, entity: &E) -> anyhow::Result<()> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN);
        let removed = sqlx::query(&sql)
            .bind(*entity.id().inner_ref())
            .execute(&mut *self.tx)
            .await?
            .rows_affected();
        if removed == 0 {
            anyhow::bail!("{} {} was already removed", E::KIND, entity.id());
        }
        Ok(())
    }

    async fn commit(self: Box<Self>) -> anyhow::Result<()> {
        let session = *self;
        session.tx.commit().await?;
        Ok(())
    }
}
