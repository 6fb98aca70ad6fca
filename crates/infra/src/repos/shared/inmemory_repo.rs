use kennel_domain::{
    Booking, BookingStatus, BookingType, DependentKind, Entity, EntityKind, PaymentType, Pet,
    PetBreed, PetType, PointRule, PointTransaction, References, Refund, Voucher, ID,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex, MutexGuard, PoisonError,
};

/// Every collection of the in-memory store. Kept in one place so that
/// dependents checks see all of them under the same lock.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub booking_statuses: Vec<BookingStatus>,
    pub booking_types: Vec<BookingType>,
    pub payment_types: Vec<PaymentType>,
    pub point_rules: Vec<PointRule>,
    pub pet_types: Vec<PetType>,
    pub pet_breeds: Vec<PetBreed>,
    pub pets: Vec<Pet>,
    pub vouchers: Vec<Voucher>,
    pub bookings: Vec<Booking>,
    pub refunds: Vec<Refund>,
    pub point_transactions: Vec<PointTransaction>,
}

impl Tables {
    /// Existence test. Tombstoned dependents count as references.
    pub fn is_referenced(&self, dependents: DependentKind, kind: EntityKind, id: &ID) -> bool {
        match dependents {
            DependentKind::Bookings => any_references(&self.bookings, kind, id),
            DependentKind::Refunds => any_references(&self.refunds, kind, id),
            DependentKind::PointTransactions => any_references(&self.point_transactions, kind, id),
            DependentKind::PetBreeds => any_references(&self.pet_breeds, kind, id),
            DependentKind::Pets => any_references(&self.pets, kind, id),
        }
    }
}

fn any_references<T: References>(collection: &[T], kind: EntityKind, id: &ID) -> bool {
    collection.iter().any(|row| row.references(kind, id))
}

/// Gives generic repositories access to the collection of `Self`
pub trait InMemoryTable: Entity + Clone + Send + Sync + 'static {
    fn rows(tables: &Tables) -> &Vec<Self>;
    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self>;
}

macro_rules! in_memory_table {
    ($type:ty, $field:ident) => {
        impl InMemoryTable for $type {
            fn rows(tables: &Tables) -> &Vec<Self> {
                &tables.$field
            }

            fn rows_mut(tables: &mut Tables) -> &mut Vec<Self> {
                &mut tables.$field
            }
        }
    };
}

in_memory_table!(BookingStatus, booking_statuses);
in_memory_table!(BookingType, booking_types);
in_memory_table!(PaymentType, payment_types);
in_memory_table!(PointRule, point_rules);
in_memory_table!(PetType, pet_types);
in_memory_table!(PetBreed, pet_breeds);
in_memory_table!(Pet, pets);
in_memory_table!(Voucher, vouchers);
in_memory_table!(Booking, bookings);
in_memory_table!(Refund, refunds);
in_memory_table!(PointTransaction, point_transactions);

/// Shared in-memory store used when no database is configured and in tests
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: Mutex<Tables>,
    commits: AtomicUsize,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Default::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn read<T, F: FnOnce(&Tables) -> T>(&self, f: F) -> T {
        f(&self.lock())
    }

    pub fn write<T, F: FnOnce(&mut Tables) -> T>(&self, f: F) -> T {
        f(&mut self.lock())
    }

    /// Applies `f` to a copy of the tables and only keeps the result if it succeeds
    pub fn transaction<F>(&self, f: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Tables) -> anyhow::Result<()>,
    {
        let mut tables = self.lock();
        let mut staged = tables.clone();
        f(&mut staged)?;
        *tables = staged;
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Number of committed transactions
    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Tables {
        self.lock().clone()
    }
}

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &mut Vec<T>) {
    collection.push(val.clone());
}

pub fn save<T: Clone + Entity>(val: &T, collection: &mut [T]) -> bool {
    match collection.iter_mut().find(|row| row.id() == val.id()) {
        Some(row) => {
            *row = val.clone();
            true
        }
        None => false,
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &[T]) -> Option<T> {
    collection.iter().find(|row| row.id() == val_id).cloned()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &mut Vec<T>) -> Option<T> {
    let index = collection.iter().position(|row| row.id() == val_id)?;
    Some(collection.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_transaction_leaves_tables_untouched() {
        let db = InMemoryDatabase::new();
        let pet_type = PetType::new("Dog");
        db.write(|t| insert(&pet_type, &mut t.pet_types));

        let res = db.transaction(|t| {
            t.pet_types.clear();
            anyhow::bail!("abort")
        });
        assert!(res.is_err());
        assert_eq!(db.commits(), 0);
        assert_eq!(db.snapshot().pet_types, vec![pet_type]);
    }

    #[test]
    fn tombstoned_dependents_still_reference() {
        let db = InMemoryDatabase::new();
        let pet_type = PetType::new("Cat");
        let mut breed = PetBreed::new("Siamese", pet_type.id.clone());
        breed.is_deleted = true;
        db.write(|t| {
            insert(&pet_type, &mut t.pet_types);
            insert(&breed, &mut t.pet_breeds);
        });

        db.read(|t| {
            assert!(t.is_referenced(DependentKind::PetBreeds, EntityKind::PetType, &pet_type.id));
            assert!(!t.is_referenced(DependentKind::Pets, EntityKind::PetType, &pet_type.id));
        });
    }
}
