use super::entity::{Entity, ID};
use std::fmt::Display;
use thiserror::Error;

/// The kinds of entities that are removed in two phases: first marked
/// as deleted, then erased once nothing references them anymore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    BookingStatus,
    BookingType,
    PaymentType,
    PointRule,
    PetType,
    PetBreed,
    Pet,
    Voucher,
}

impl EntityKind {
    /// Snake case identifier, also the prefix of the id and foreign key columns
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingStatus => "booking_status",
            Self::BookingType => "booking_type",
            Self::PaymentType => "payment_type",
            Self::PointRule => "point_rule",
            Self::PetType => "pet_type",
            Self::PetBreed => "pet_breed",
            Self::Pet => "pet",
            Self::Voucher => "voucher",
        }
    }

    /// Human readable label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::BookingStatus => "booking status",
            Self::BookingType => "booking type",
            Self::PaymentType => "payment type",
            Self::PointRule => "point rule",
            Self::PetType => "pet type",
            Self::PetBreed => "pet breed",
            Self::Pet => "pet",
            Self::Voucher => "voucher",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Collections whose rows can hold a foreign key to a `Deletable` entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependentKind {
    Bookings,
    Refunds,
    PointTransactions,
    PetBreeds,
    Pets,
}

impl DependentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bookings => "bookings",
            Self::Refunds => "refunds",
            Self::PointTransactions => "point_transactions",
            Self::PetBreeds => "pet_breeds",
            Self::Pets => "pets",
        }
    }
}

impl Display for DependentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Bookings => "bookings",
            Self::Refunds => "refunds",
            Self::PointTransactions => "point transactions",
            Self::PetBreeds => "pet breeds",
            Self::Pets => "pets",
        };
        write!(f, "{}", text)
    }
}

/// An entity carrying a tombstone flag.
///
/// It is in exactly one of three states: active (`is_deleted == false`),
/// tombstoned (`is_deleted == true`) or erased (no longer stored).
pub trait Deletable: Entity + Clone + Send + Sync + 'static {
    const KIND: EntityKind;
    /// Collections checked before erasing, in the order they are checked
    const DEPENDENTS: &'static [DependentKind];

    fn is_deleted(&self) -> bool;
    fn mark_deleted(&mut self);
    fn display_name(&self) -> &str;
}

/// Foreign keys a record holds to `Deletable` entities
pub trait References {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)>;

    fn references(&self, kind: EntityKind, id: &ID) -> bool {
        self.foreign_keys()
            .into_iter()
            .any(|(fk_kind, fk)| fk_kind == kind && fk == id)
    }
}

/// The entity a delete was requested for. Only the `id` is authoritative,
/// the `display_name` is used for messages.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionTarget {
    pub id: ID,
    pub display_name: Option<String>,
}

impl DeletionTarget {
    pub fn new(id: ID) -> Self {
        Self {
            id,
            display_name: None,
        }
    }

    /// Name used in messages: the requested name, then the stored one,
    /// then a generic label built from the kind and id.
    pub fn resolve_name<E: Deletable>(&self, current: Option<&E>) -> String {
        if let Some(name) = self.display_name.as_ref().filter(|n| !n.trim().is_empty()) {
            return name.clone();
        }
        match current {
            Some(e) if !e.display_name().trim().is_empty() => e.display_name().to_string(),
            _ => {
                let label = E::KIND.label();
                let mut chars = label.chars();
                let capitalized = match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                };
                format!("{} {}", capitalized, self.id)
            }
        }
    }
}

impl<E: Deletable> From<&E> for DeletionTarget {
    fn from(e: &E) -> Self {
        Self {
            id: e.id().clone(),
            display_name: Some(e.display_name().to_string()),
        }
    }
}

/// What a delete request does, given the current stored state
#[derive(Debug, Clone, PartialEq)]
pub enum DeletionPlan<E> {
    NotFound,
    Tombstone(E),
    /// Erase, unless some dependent still references the entity
    EraseIfUnreferenced(E),
}

impl<E: Deletable> DeletionPlan<E> {
    pub fn for_current(current: Option<E>) -> Self {
        match current {
            None => Self::NotFound,
            Some(e) if !e.is_deleted() => Self::Tombstone(e),
            Some(e) => Self::EraseIfUnreferenced(e),
        }
    }
}

/// A successful delete
#[derive(Debug, Clone, PartialEq)]
pub enum Deletion<E> {
    /// The entity is now marked as deleted and still stored
    Tombstoned(E),
    /// The entity was removed from the store
    Erased,
}

impl<E> Deletion<E> {
    pub fn message(&self, name: &str) -> String {
        match self {
            Self::Tombstoned(_) => format!("{} marked as deleted", name),
            Self::Erased => format!("{} permanently deleted", name),
        }
    }
}

#[derive(Error, Debug)]
pub enum DeletionError {
    #[error("{name} not found")]
    NotFound { name: String },
    #[error("{name} is referenced in existing {dependents} and cannot be deleted")]
    Referenced {
        name: String,
        dependents: DependentKind,
    },
    /// The store failed. `cause` is for diagnostics and never rendered.
    #[error("An error occurred while deleting the {kind}")]
    Store { kind: EntityKind, cause: anyhow::Error },
}
