use crate::Response;
use kennel_domain::{Booking, BookingStatus, BookingType, PaymentType, Refund, ID};
use serde::{Deserialize, Serialize};

pub mod create_booking_status {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
    }

    pub type APIResponse = Response<BookingStatus>;
}

pub mod create_booking_type {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
    }

    pub type APIResponse = Response<BookingType>;
}

pub mod create_payment_type {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
    }

    pub type APIResponse = Response<PaymentType>;
}

pub mod create_booking {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub pet_id: ID,
        pub booking_status_id: ID,
        pub booking_type_id: ID,
        pub payment_type_id: ID,
        #[serde(default)]
        pub voucher_id: Option<ID>,
        pub start_ts: i64,
        pub end_ts: i64,
    }

    pub type APIResponse = Response<Booking>;
}

pub mod create_refund {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub booking_status_id: ID,
        pub amount: i64,
        #[serde(default)]
        pub reason: String,
    }

    pub type APIResponse = Response<Refund>;
}
