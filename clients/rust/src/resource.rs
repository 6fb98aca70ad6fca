use crate::base::{APIResponse, BaseClient};
use kennel_api_structs::*;
use kennel_domain::{
    Booking, BookingStatus, BookingType, PaymentType, Pet, PetBreed, PetType, PointRule,
    PointTransaction, Refund, Voucher, ID,
};
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;

/// A type served under `/api/v1/{PATH}`
pub trait Resource: DeserializeOwned {
    type CreateBody: Serialize;

    const PATH: &'static str;
}

macro_rules! resource {
    ($type:ty, $body:ty, $path:literal) => {
        impl Resource for $type {
            type CreateBody = $body;

            const PATH: &'static str = $path;
        }
    };
}

resource!(BookingStatus, create_booking_status::RequestBody, "booking-status");
resource!(BookingType, create_booking_type::RequestBody, "booking-type");
resource!(PaymentType, create_payment_type::RequestBody, "payment-type");
resource!(PointRule, create_point_rule::RequestBody, "point-rule");
resource!(PetType, create_pet_type::RequestBody, "pet-type");
resource!(PetBreed, create_pet_breed::RequestBody, "pet-breed");
resource!(Pet, create_pet::RequestBody, "pet");
resource!(Voucher, create_voucher::RequestBody, "voucher");
resource!(Booking, create_booking::RequestBody, "booking");
resource!(Refund, create_refund::RequestBody, "refund");
resource!(
    PointTransaction,
    create_point_transaction::RequestBody,
    "point-transaction"
);

pub struct ResourceClient<T> {
    base: Arc<BaseClient>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self::new(self.base.clone())
    }
}

impl<T: Resource> ResourceClient<T> {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self {
            base,
            _resource: PhantomData,
        }
    }

    pub async fn create(&self, body: T::CreateBody) -> APIResponse<Response<T>> {
        self.base
            .post(body, T::PATH.to_string(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, id: &ID) -> APIResponse<Response<T>> {
        self.base
            .get(format!("{}/{}", T::PATH, id), StatusCode::OK)
            .await
    }

    /// `data` holds the entity when it was only marked as deleted
    pub async fn delete(&self, id: &ID) -> APIResponse<Response<T>> {
        self.base
            .delete(format!("{}/{}", T::PATH, id), StatusCode::OK)
            .await
    }

    /// Delete by a raw path segment, used to send ids that are not valid
    pub async fn delete_raw(&self, id: &str) -> APIResponse<Response<T>> {
        self.base
            .delete(format!("{}/{}", T::PATH, id), StatusCode::OK)
            .await
    }
}
