mod booking;
mod pet;
mod reward;
mod shared;

pub use booking::{Booking, BookingStatus, BookingType, PaymentType, Refund};
pub use pet::{Pet, PetBreed, PetType};
pub use reward::{PointRule, PointTransaction, Voucher};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::tombstone::{
    Deletable, Deletion, DeletionError, DeletionPlan, DeletionTarget, DependentKind, EntityKind,
    References,
};
