mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{
    IDeletableRepo, IDeletionSession, IRecordRepo, InMemoryDatabase, Repos, StoredEntity,
    StoredRecord, Tables,
};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};

#[derive(Clone)]
pub struct KennelContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl KennelContext {
    async fn create_postgres(config: Config, connection_string: &str) -> Self {
        let repos = Repos::create_postgres(connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    /// Context backed by the given in-memory database
    pub fn create_inmemory(db: Arc<InMemoryDatabase>) -> Self {
        Self {
            repos: Repos::create_inmemory_with(db),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> KennelContext {
    let config = Config::new();
    match config.database_url.clone() {
        Some(connection_string) => KennelContext::create_postgres(config, &connection_string).await,
        None => KennelContext::create_inmemory(Arc::new(InMemoryDatabase::new())),
    }
}

pub async fn run_migration(connection_string: &str) -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(connection_string)
        .await?;

    sqlx::migrate!().run(&pool).await
}
