use crate::Response;
use kennel_domain::{PointRule, PointTransaction, Voucher, ID};
use serde::{Deserialize, Serialize};

pub mod create_point_rule {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub points_per_unit: i64,
        #[serde(default)]
        pub minimum_spend: i64,
    }

    pub type APIResponse = Response<PointRule>;
}

pub mod create_voucher {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub code: String,
        pub points_required: i64,
        pub discount_percent: i32,
    }

    pub type APIResponse = Response<Voucher>;
}

pub mod create_point_transaction {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub point_rule_id: ID,
        pub pet_id: ID,
        pub points: i64,
    }

    pub type APIResponse = Response<PointTransaction>;
}
