use kennel_api_structs::Response;
use kennel_domain::{Deletable, Deletion, DeletionError, DeletionPlan, DeletionTarget};
use kennel_infra::IDeletableRepo;
use tracing::{error, info};

/// Two phase delete shared by every `Deletable` kind.
///
/// The first request marks an active entity as deleted without looking at
/// dependents. A request for an entity that is already marked erases it,
/// unless a dependent row still references it. Each request runs in its own
/// session on the borrowed store and commits at most one mutation.
pub struct TombstoneDeletionPolicy<'a, E: Deletable> {
    store: &'a dyn IDeletableRepo<E>,
}

/// A successful delete together with the name used in its message
#[derive(Debug)]
pub struct Deleted<E> {
    pub name: String,
    pub deletion: Deletion<E>,
}

impl<E> Deleted<E> {
    pub fn message(&self) -> String {
        self.deletion.message(&self.name)
    }

    /// Only the tombstoned entity is returned as `data`
    pub fn into_response(self) -> Response<E> {
        let message = self.message();
        match self.deletion {
            Deletion::Tombstoned(entity) => Response::success(message, Some(entity)),
            Deletion::Erased => Response::success(message, None),
        }
    }
}

impl<'a, E: Deletable> TombstoneDeletionPolicy<'a, E> {
    pub fn new(store: &'a dyn IDeletableRepo<E>) -> Self {
        Self { store }
    }

    pub async fn delete(&self, target: &DeletionTarget) -> Result<Deleted<E>, DeletionError> {
        let store_error = |cause: anyhow::Error| {
            error!(
                "Unable to delete {} with id: {}. Error: {:?}",
                E::KIND,
                target.id,
                cause
            );
            DeletionError::Store {
                kind: E::KIND,
                cause,
            }
        };

        let mut session = self.store.begin().await.map_err(store_error)?;
        let current = session.find(&target.id).await.map_err(store_error)?;
        let name = target.resolve_name(current.as_ref());

        match DeletionPlan::for_current(current) {
            DeletionPlan::NotFound => Err(DeletionError::NotFound { name }),
            DeletionPlan::Tombstone(mut entity) => {
                entity.mark_deleted();
                session.update(&entity).await.map_err(store_error)?;
                session.commit().await.map_err(store_error)?;
                info!("{} with id: {} marked as deleted", E::KIND, entity.id());
                Ok(Deleted {
                    name,
                    deletion: Deletion::Tombstoned(entity),
                })
            }
            DeletionPlan::EraseIfUnreferenced(entity) => {
                let dependents = session
                    .find_dependent(entity.id())
                    .await
                    .map_err(store_error)?;
                if let Some(dependents) = dependents {
                    return Err(DeletionError::Referenced { name, dependents });
                }
                session.remove(&entity).await.map_err(store_error)?;
                session.commit().await.map_err(store_error)?;
                info!("{} with id: {} permanently deleted", E::KIND, entity.id());
                Ok(Deleted {
                    name,
                    deletion: Deletion::Erased,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kennel_domain::{
        Booking, BookingStatus, DependentKind, PaymentType, Pet, PetBreed, PetType, PointRule, ID,
    };
    use kennel_infra::{IDeletionSession, InMemoryDatabase, Repos};
    use std::sync::Arc;

    struct TestStore {
        db: Arc<InMemoryDatabase>,
        repos: Repos,
    }

    fn setup() -> TestStore {
        let db = Arc::new(InMemoryDatabase::new());
        let repos = Repos::create_inmemory_with(db.clone());
        TestStore { db, repos }
    }

    async fn insert_booking_for(repos: &Repos, status: &BookingStatus) {
        let pet_type = PetType::new("Dog");
        let breed = PetBreed::new("Collie", pet_type.id.clone());
        let pet = Pet::new("Lassie", "Sam", pet_type.id.clone(), breed.id.clone());
        let payment_type = PaymentType::new("Card");
        repos.pet_types.insert(&pet_type).await.unwrap();
        repos.pet_breeds.insert(&breed).await.unwrap();
        repos.pets.insert(&pet).await.unwrap();
        repos.payment_types.insert(&payment_type).await.unwrap();
        let booking = Booking {
            id: Default::default(),
            pet_id: pet.id.clone(),
            booking_status_id: status.id.clone(),
            booking_type_id: ID::default(),
            payment_type_id: payment_type.id.clone(),
            voucher_id: None,
            start_ts: 0,
            end_ts: 1000 * 60 * 60 * 24 * 3,
            created: 0,
        };
        repos.bookings.insert(&booking).await.unwrap();
    }

    #[actix_web::main]
    #[test]
    async fn unreferenced_entity_is_tombstoned_then_erased() {
        let store = setup();
        let status = BookingStatus::new("X");
        store.repos.booking_statuses.insert(&status).await.unwrap();
        let policy = TombstoneDeletionPolicy::new(store.repos.booking_statuses.as_ref());
        let target = DeletionTarget::from(&status);

        let res = policy.delete(&target).await.unwrap().into_response();
        let mut tombstoned = status.clone();
        tombstoned.is_deleted = true;
        assert_eq!(
            res,
            Response::success("X marked as deleted", Some(tombstoned.clone()))
        );
        let stored = store.repos.booking_statuses.find(&status.id).await.unwrap();
        assert_eq!(stored, Some(tombstoned));

        let res = policy.delete(&target).await.unwrap().into_response();
        assert_eq!(res, Response::success("X permanently deleted", None));
        assert!(store
            .repos
            .booking_statuses
            .find(&status.id)
            .await
            .unwrap()
            .is_none());

        match policy.delete(&target).await {
            Err(DeletionError::NotFound { name }) => assert_eq!(name, "X"),
            other => panic!("Expected not found, got: {:?}", other),
        }
        assert_eq!(store.db.commits(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn referenced_entity_is_tombstoned_but_never_erased() {
        let store = setup();
        let status = BookingStatus::new("X");
        store.repos.booking_statuses.insert(&status).await.unwrap();
        insert_booking_for(&store.repos, &status).await;
        let policy = TombstoneDeletionPolicy::new(store.repos.booking_statuses.as_ref());
        let target = DeletionTarget::from(&status);

        // Dependents are not checked on the first call
        let deleted = policy.delete(&target).await.unwrap();
        assert_eq!(deleted.message(), "X marked as deleted");

        let commits = store.db.commits();
        let before = store.db.snapshot();
        for _ in 0..2 {
            let err = policy.delete(&target).await.unwrap_err();
            assert_eq!(
                err.to_string(),
                "X is referenced in existing bookings and cannot be deleted"
            );
        }
        assert_eq!(store.db.commits(), commits);
        assert_eq!(store.db.snapshot().booking_statuses, before.booking_statuses);
        let stored = store
            .repos
            .booking_statuses
            .find(&status.id)
            .await
            .unwrap()
            .expect("Tombstoned status to still be stored");
        assert!(stored.is_deleted);
    }

    #[actix_web::main]
    #[test]
    async fn erases_once_dependents_are_gone() {
        let store = setup();
        let mut rule = PointRule::new("Weekend stays", 2, 0);
        rule.is_deleted = true;
        store.repos.point_rules.insert(&rule).await.unwrap();
        let transaction = kennel_domain::PointTransaction {
            id: Default::default(),
            point_rule_id: rule.id.clone(),
            pet_id: ID::default(),
            points: 10,
            created: 0,
        };
        store
            .repos
            .point_transactions
            .insert(&transaction)
            .await
            .unwrap();
        let policy = TombstoneDeletionPolicy::new(store.repos.point_rules.as_ref());
        let target = DeletionTarget::from(&rule);

        match policy.delete(&target).await {
            Err(DeletionError::Referenced { dependents, .. }) => {
                assert_eq!(dependents, DependentKind::PointTransactions)
            }
            other => panic!("Expected referenced conflict, got: {:?}", other),
        }

        store
            .repos
            .point_transactions
            .delete(&transaction.id)
            .await
            .unwrap();
        let deleted = policy.delete(&target).await.unwrap();
        assert_eq!(deleted.message(), "Weekend stays permanently deleted");
    }

    #[actix_web::main]
    #[test]
    async fn tombstoned_dependents_block_erasure() {
        let store = setup();
        let pet_type = PetType::new("Cat");
        let breed = PetBreed::new("Maine Coon", pet_type.id.clone());
        store.repos.pet_types.insert(&pet_type).await.unwrap();
        store.repos.pet_breeds.insert(&breed).await.unwrap();

        let breeds = TombstoneDeletionPolicy::new(store.repos.pet_breeds.as_ref());
        breeds.delete(&DeletionTarget::from(&breed)).await.unwrap();

        let pet_types = TombstoneDeletionPolicy::new(store.repos.pet_types.as_ref());
        let target = DeletionTarget::from(&pet_type);
        pet_types.delete(&target).await.unwrap();
        let err = pet_types.delete(&target).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cat is referenced in existing pet breeds and cannot be deleted"
        );
    }

    #[actix_web::main]
    #[test]
    async fn unknown_id_is_rejected_without_mutation() {
        let store = setup();
        store
            .repos
            .pet_types
            .insert(&PetType::new("Bird"))
            .await
            .unwrap();
        let before = store.db.snapshot();
        let policy = TombstoneDeletionPolicy::new(store.repos.pet_types.as_ref());

        let target = DeletionTarget {
            id: ID::default(),
            display_name: Some("Parrot".into()),
        };
        let err = policy.delete(&target).await.unwrap_err();
        assert_eq!(err.to_string(), "Parrot not found");

        let err = policy
            .delete(&DeletionTarget::new(target.id.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Pet type {} not found", target.id));

        assert_eq!(store.db.commits(), 0);
        assert_eq!(store.db.snapshot().pet_types, before.pet_types);
    }

    #[actix_web::main]
    #[test]
    async fn stale_input_does_not_decide_the_branch() {
        let store = setup();
        let voucher = kennel_domain::Voucher::new("SUMMER", 500, 15);
        store.repos.vouchers.insert(&voucher).await.unwrap();
        let policy = TombstoneDeletionPolicy::new(store.repos.vouchers.as_ref());

        // The caller believes the voucher is already marked as deleted
        let mut stale = voucher.clone();
        stale.is_deleted = true;
        let deleted = policy.delete(&DeletionTarget::from(&stale)).await.unwrap();
        assert!(matches!(deleted.deletion, Deletion::Tombstoned(_)));

        let deleted = policy
            .delete(&DeletionTarget::new(voucher.id.clone()))
            .await
            .unwrap();
        assert_eq!(deleted.message(), "SUMMER permanently deleted");
    }

    struct UnavailableStore;

    #[async_trait::async_trait]
    impl IDeletableRepo<PointRule> for UnavailableStore {
        async fn insert(&self, _: &PointRule) -> anyhow::Result<()> {
            anyhow::bail!("connection refused")
        }

        async fn find(&self, _: &ID) -> anyhow::Result<Option<PointRule>> {
            anyhow::bail!("connection refused")
        }

        async fn begin(&self) -> anyhow::Result<Box<dyn IDeletionSession<PointRule>>> {
            anyhow::bail!("connection refused")
        }
    }

    #[actix_web::main]
    #[test]
    async fn store_failures_become_generic_errors() {
        let store = UnavailableStore;
        let policy = TombstoneDeletionPolicy::<PointRule>::new(&store);
        let err = policy
            .delete(&DeletionTarget::new(ID::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, DeletionError::Store { .. }));
        assert_eq!(
            err.to_string(),
            "An error occurred while deleting the point rule"
        );
    }

    /// Delegates to the in-memory store but loses every commit race
    struct ConflictingStore {
        inner: Repos,
    }

    struct ConflictingSession {
        inner: Box<dyn IDeletionSession<PaymentType>>,
    }

    #[async_trait::async_trait]
    impl IDeletableRepo<PaymentType> for ConflictingStore {
        async fn insert(&self, entity: &PaymentType) -> anyhow::Result<()> {
            self.inner.payment_types.insert(entity).await
        }

        async fn find(&self, entity_id: &ID) -> anyhow::Result<Option<PaymentType>> {
            self.inner.payment_types.find(entity_id).await
        }

        async fn begin(&self) -> anyhow::Result<Box<dyn IDeletionSession<PaymentType>>> {
            let inner = self.inner.payment_types.begin().await?;
            Ok(Box::new(ConflictingSession { inner }))
        }
    }

    #[async_trait::async_trait]
    impl IDeletionSession<PaymentType> for ConflictingSession {
        async fn find(&mut self, entity_id: &ID) -> anyhow::Result<Option<PaymentType>> {
            self.inner.find(entity_id).await
        }

        async fn find_dependent(
            &mut self,
            entity_id: &ID,
        ) -> anyhow::Result<Option<DependentKind>> {
            self.inner.find_dependent(entity_id).await
        }

        async fn update(&mut self, entity: &PaymentType) -> anyhow::Result<()> {
            self.inner.update(entity).await
        }

        async fn remove(&mut self, entity: &PaymentType) -> anyhow::Result<()> {
            self.inner.remove(entity).await
        }

        async fn commit(self: Box<Self>) -> anyhow::Result<()> {
            anyhow::bail!("payment type was removed by a concurrent request")
        }
    }

    #[actix_web::main]
    #[test]
    async fn lost_commit_race_is_a_store_failure() {
        let store = ConflictingStore {
            inner: Repos::create_inmemory(),
        };
        let mut payment_type = PaymentType::new("Invoice");
        payment_type.is_deleted = true;
        store.insert(&payment_type).await.unwrap();

        let policy = TombstoneDeletionPolicy::<PaymentType>::new(&store);
        let err = policy
            .delete(&DeletionTarget::from(&payment_type))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "An error occurred while deleting the payment type"
        );
        assert!(store.find(&payment_type.id).await.unwrap().is_some());
    }
}
