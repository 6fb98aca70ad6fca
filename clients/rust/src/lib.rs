mod base;
mod resource;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use kennel_api_structs::*;
pub use kennel_domain::{
    Booking, BookingStatus, BookingType, PaymentType, Pet, PetBreed, PetType, PointRule,
    PointTransaction, Refund, Voucher, ID,
};
pub use reqwest::StatusCode;
pub use resource::{Resource, ResourceClient};
use status::StatusClient;
use std::sync::Arc;

/// Kennel Server SDK
///
/// The SDK contains methods for interacting with the Kennel server API.
#[derive(Clone)]
pub struct KennelSDK {
    pub booking_status: ResourceClient<BookingStatus>,
    pub booking_type: ResourceClient<BookingType>,
    pub payment_type: ResourceClient<PaymentType>,
    pub point_rule: ResourceClient<PointRule>,
    pub pet_type: ResourceClient<PetType>,
    pub pet_breed: ResourceClient<PetBreed>,
    pub pet: ResourceClient<Pet>,
    pub voucher: ResourceClient<Voucher>,
    pub booking: ResourceClient<Booking>,
    pub refund: ResourceClient<Refund>,
    pub point_transaction: ResourceClient<PointTransaction>,
    pub status: StatusClient,
}

impl KennelSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));

        Self {
            booking_status: ResourceClient::new(base.clone()),
            booking_type: ResourceClient::new(base.clone()),
            payment_type: ResourceClient::new(base.clone()),
            point_rule: ResourceClient::new(base.clone()),
            pet_type: ResourceClient::new(base.clone()),
            pet_breed: ResourceClient::new(base.clone()),
            pet: ResourceClient::new(base.clone()),
            voucher: ResourceClient::new(base.clone()),
            booking: ResourceClient::new(base.clone()),
            refund: ResourceClient::new(base.clone()),
            point_transaction: ResourceClient::new(base.clone()),
            status: StatusClient::new(base),
        }
    }
}
