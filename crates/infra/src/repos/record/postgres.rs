use super::IRecordRepo;
use crate::repos::shared::postgres_repo::PgRecord;
use kennel_domain::ID;
use sqlx::PgPool;
use std::marker::PhantomData;

pub struct PostgresRecordRepo<R> {
    pool: PgPool,
    _record: PhantomData<fn() -> R>,
}

impl<R> PostgresRecordRepo<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<R: PgRecord> IRecordRepo<R> for PostgresRecordRepo<R> {
    async fn insert(&self, record: &R) -> anyhow::Result<()> {
        record.insert_query().execute(&self.pool).await?;
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<R>> {
        let sql = format!("SELECT * FROM {} WHERE {} = $1", R::TABLE, R::ID_COLUMN);
        let row = sqlx::query(&sql)
            .bind(*record_id.inner_ref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(R::decode).transpose()?)
    }

    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<R>> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1 RETURNING *",
            R::TABLE,
            R::ID_COLUMN
        );
        let row = sqlx::query(&sql)
            .bind(*record_id.inner_ref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(R::decode).transpose()?)
    }
}
