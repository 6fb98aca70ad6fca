use crate::shared::{
    entity::{Entity, ID},
    tombstone::{Deletable, DependentKind, EntityKind, References},
};
use serde::{Deserialize, Serialize};

/// Lifecycle state a `Booking` or `Refund` can be in, e.g. "Checked in"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatus {
    pub id: ID,
    pub name: String,
    pub is_deleted: bool,
}

impl BookingStatus {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            is_deleted: false,
        }
    }
}

impl Entity for BookingStatus {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Deletable for BookingStatus {
    const KIND: EntityKind = EntityKind::BookingStatus;
    const DEPENDENTS: &'static [DependentKind] =
        &[DependentKind::Bookings, DependentKind::Refunds];

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl References for BookingStatus {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingType {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
}

impl BookingType {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            description: description.into(),
            is_deleted: false,
        }
    }
}

impl Entity for BookingType {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Deletable for BookingType {
    const KIND: EntityKind = EntityKind::BookingType;
    const DEPENDENTS: &'static [DependentKind] = &[DependentKind::Bookings];

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl References for BookingType {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentType {
    pub id: ID,
    pub name: String,
    pub is_deleted: bool,
}

impl PaymentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            is_deleted: false,
        }
    }
}

impl Entity for PaymentType {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Deletable for PaymentType {
    const KIND: EntityKind = EntityKind::PaymentType;
    const DEPENDENTS: &'static [DependentKind] = &[DependentKind::Bookings];

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl References for PaymentType {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        Vec::new()
    }
}

/// A stay of a `Pet`. Timestamps are in millis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: ID,
    pub pet_id: ID,
    pub booking_status_id: ID,
    pub booking_type_id: ID,
    pub payment_type_id: ID,
    pub voucher_id: Option<ID>,
    pub start_ts: i64,
    pub end_ts: i64,
    pub created: i64,
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl References for Booking {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        let mut keys = vec![
            (EntityKind::Pet, &self.pet_id),
            (EntityKind::BookingStatus, &self.booking_status_id),
            (EntityKind::BookingType, &self.booking_type_id),
            (EntityKind::PaymentType, &self.payment_type_id),
        ];
        if let Some(voucher_id) = &self.voucher_id {
            keys.push((EntityKind::Voucher, voucher_id));
        }
        keys
    }
}

/// Money paid back for a booking. `amount` is in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: ID,
    pub booking_status_id: ID,
    pub amount: i64,
    pub reason: String,
    pub created: i64,
}

impl Entity for Refund {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl References for Refund {
    fn foreign_keys(&self) -> Vec<(EntityKind, &ID)> {
        vec![(EntityKind::BookingStatus, &self.booking_status_id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_references_optional_voucher() {
        let mut booking = Booking {
            id: Default::default(),
            pet_id: Default::default(),
            booking_status_id: Default::default(),
            booking_type_id: Default::default(),
            payment_type_id: Default::default(),
            voucher_id: None,
            start_ts: 0,
            end_ts: 1000,
            created: 0,
        };
        let voucher_id = ID::default();
        assert_eq!(booking.foreign_keys().len(), 4);
        assert!(!booking.references(EntityKind::Voucher, &voucher_id));

        booking.voucher_id = Some(voucher_id.clone());
        assert!(booking.references(EntityKind::Voucher, &voucher_id));
        // Same id under another kind is not a reference
        assert!(!booking.references(EntityKind::Pet, &voucher_id));
    }
}
