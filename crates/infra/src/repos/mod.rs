mod deletable;
mod record;
mod shared;

pub use deletable::{IDeletableRepo, IDeletionSession};
use deletable::{InMemoryDeletableRepo, PostgresDeletableRepo};
use kennel_domain::{
    Booking, BookingStatus, BookingType, Deletable, Entity, EntityKind, PaymentType, Pet,
    PetBreed, PetType, PointRule, PointTransaction, Refund, Voucher, ID,
};
pub use record::IRecordRepo;
use record::{InMemoryRecordRepo, PostgresRecordRepo};
pub use shared::inmemory_repo::{InMemoryDatabase, Tables};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub booking_statuses: Arc<dyn IDeletableRepo<BookingStatus>>,
    pub booking_types: Arc<dyn IDeletableRepo<BookingType>>,
    pub payment_types: Arc<dyn IDeletableRepo<PaymentType>>,
    pub point_rules: Arc<dyn IDeletableRepo<PointRule>>,
    pub pet_types: Arc<dyn IDeletableRepo<PetType>>,
    pub pet_breeds: Arc<dyn IDeletableRepo<PetBreed>>,
    pub pets: Arc<dyn IDeletableRepo<Pet>>,
    pub vouchers: Arc<dyn IDeletableRepo<Voucher>>,
    pub bookings: Arc<dyn IRecordRepo<Booking>>,
    pub refunds: Arc<dyn IRecordRepo<Refund>>,
    pub point_transactions: Arc<dyn IRecordRepo<PointTransaction>>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            booking_statuses: Arc::new(PostgresDeletableRepo::new(pool.clone())),
            booking_types: Arc::new(PostgresDeletableRepo::new(pool.clone())),
            payment_types: Arc::new(PostgresDeletableRepo::new(pool.clone())),
            point_rules: Arc::new(PostgresDeletableRepo::new(pool.clone())),
            pet_types: Arc::new(PostgresDeletableRepo::new(pool.clone())),
            pet_breeds: Arc::new(PostgresDeletableRepo::new(pool.clone())),
            pets: Arc::new(PostgresDeletableRepo::new(pool.clone())),
            vouchers: Arc::new(PostgresDeletableRepo::new(pool.clone())),
            bookings: Arc::new(PostgresRecordRepo::new(pool.clone())),
            refunds: Arc::new(PostgresRecordRepo::new(pool.clone())),
            point_transactions: Arc::new(PostgresRecordRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self::create_inmemory_with(Arc::new(InMemoryDatabase::new()))
    }

    /// In-memory repos sharing the given database
    pub fn create_inmemory_with(db: Arc<InMemoryDatabase>) -> Self {
        Self {
            booking_statuses: Arc::new(InMemoryDeletableRepo::new(db.clone())),
            booking_types: Arc::new(InMemoryDeletableRepo::new(db.clone())),
            payment_types: Arc::new(InMemoryDeletableRepo::new(db.clone())),
            point_rules: Arc::new(InMemoryDeletableRepo::new(db.clone())),
            pet_types: Arc::new(InMemoryDeletableRepo::new(db.clone())),
            pet_breeds: Arc::new(InMemoryDeletableRepo::new(db.clone())),
            pets: Arc::new(InMemoryDeletableRepo::new(db.clone())),
            vouchers: Arc::new(InMemoryDeletableRepo::new(db.clone())),
            bookings: Arc::new(InMemoryRecordRepo::new(db.clone())),
            refunds: Arc::new(InMemoryRecordRepo::new(db.clone())),
            point_transactions: Arc::new(InMemoryRecordRepo::new(db)),
        }
    }

    /// Whether the entity exists and is not marked as deleted
    pub async fn is_active(&self, kind: EntityKind, entity_id: &ID) -> anyhow::Result<bool> {
        match kind {
            EntityKind::BookingStatus => is_active(self.booking_statuses.as_ref(), entity_id).await,
            EntityKind::BookingType => is_active(self.booking_types.as_ref(), entity_id).await,
            EntityKind::PaymentType => is_active(self.payment_types.as_ref(), entity_id).await,
            EntityKind::PointRule => is_active(self.point_rules.as_ref(), entity_id).await,
            EntityKind::PetType => is_active(self.pet_types.as_ref(), entity_id).await,
            EntityKind::PetBreed => is_active(self.pet_breeds.as_ref(), entity_id).await,
            EntityKind::Pet => is_active(self.pets.as_ref(), entity_id).await,
            EntityKind::Voucher => is_active(self.vouchers.as_ref(), entity_id).await,
        }
    }
}

async fn is_active<E: Deletable>(
    repo: &dyn IDeletableRepo<E>,
    entity_id: &ID,
) -> anyhow::Result<bool> {
    Ok(repo
        .find(entity_id)
        .await?
        .map(|entity| !entity.is_deleted())
        .unwrap_or(false))
}

/// Selects the repo of a `Deletable` entity kind
pub trait StoredEntity: Deletable {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>>;
}

/// Selects the repo of a record kind
pub trait StoredRecord: Entity + Clone + Send + Sync + 'static {
    fn repo(repos: &Repos) -> &Arc<dyn IRecordRepo<Self>>;
}

impl StoredEntity for BookingStatus {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>> {
        &repos.booking_statuses
    }
}

impl StoredEntity for BookingType {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>> {
        &repos.booking_types
    }
}

impl StoredEntity for PaymentType {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>> {
        &repos.payment_types
    }
}

impl StoredEntity for PointRule {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>> {
        &repos.point_rules
    }
}

impl StoredEntity for PetType {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>> {
        &repos.pet_types
    }
}

impl StoredEntity for PetBreed {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>> {
        &repos.pet_breeds
    }
}

impl StoredEntity for Pet {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>> {
        &repos.pets
    }
}

impl StoredEntity for Voucher {
    fn repo(repos: &Repos) -> &Arc<dyn IDeletableRepo<Self>> {
        &repos.vouchers
    }
}

impl StoredRecord for Booking {
    fn repo(repos: &Repos) -> &Arc<dyn IRecordRepo<Self>> {
        &repos.bookings
    }
}

impl StoredRecord for Refund {
    fn repo(repos: &Repos) -> &Arc<dyn IRecordRepo<Self>> {
        &repos.refunds
    }
}

impl StoredRecord for PointTransaction {
    fn repo(repos: &Repos) -> &Arc<dyn IRecordRepo<Self>> {
        &repos.point_transactions
    }
}
