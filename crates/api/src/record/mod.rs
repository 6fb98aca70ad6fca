mod create_record;
mod delete_record;
mod get_record;

use actix_web::web;
use create_record::create_record_controller;
use delete_record::delete_record_controller;
use get_record::get_record_controller;
use kennel_api_structs::*;
use kennel_domain::{Booking, PointTransaction, References, Refund};
use kennel_infra::StoredRecord;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Rows that only reference `Deletable` entities and are removed right away
pub trait RecordEntity: StoredRecord + References + Serialize + Debug {
    type Body: DeserializeOwned + 'static;

    const PATH: &'static str;
    const LABEL: &'static str;

    /// `created` is left at zero until the record is stamped
    fn from_body(body: Self::Body) -> Self;

    fn stamp_created(&mut self, created: i64);

    fn is_valid(&self) -> bool {
        true
    }
}

fn configure_record_routes<R: RecordEntity>(cfg: &mut web::ServiceConfig) {
    let collection = format!("/{}", R::PATH);
    let single = format!("/{}/{{id}}", R::PATH);
    cfg.route(&collection, web::post().to(create_record_controller::<R>));
    cfg.route(&single, web::get().to(get_record_controller::<R>));
    cfg.route(&single, web::delete().to(delete_record_controller::<R>));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_record_routes::<Booking>(cfg);
    configure_record_routes::<Refund>(cfg);
    configure_record_routes::<PointTransaction>(cfg);
}

impl RecordEntity for Booking {
    type Body = create_booking::RequestBody;

    const PATH: &'static str = "booking";
    const LABEL: &'static str = "booking";

    fn from_body(body: Self::Body) -> Self {
        Self {
            id: Default::default(),
            pet_id: body.pet_id,
            booking_status_id: body.booking_status_id,
            booking_type_id: body.booking_type_id,
            payment_type_id: body.payment_type_id,
            voucher_id: body.voucher_id,
            start_ts: body.start_ts,
            end_ts: body.end_ts,
            created: 0,
        }
    }

    fn stamp_created(&mut self, created: i64) {
        self.created = created;
    }

    fn is_valid(&self) -> bool {
        self.start_ts < self.end_ts
    }
}

impl RecordEntity for Refund {
    type Body = create_refund::RequestBody;

    const PATH: &'static str = "refund";
    const LABEL: &'static str = "refund";

    fn from_body(body: Self::Body) -> Self {
        Self {
            id: Default::default(),
            booking_status_id: body.booking_status_id,
            amount: body.amount,
            reason: body.reason,
            created: 0,
        }
    }

    fn stamp_created(&mut self, created: i64) {
        self.created = created;
    }
}

impl RecordEntity for PointTransaction {
    type Body = create_point_transaction::RequestBody;

    const PATH: &'static str = "point-transaction";
    const LABEL: &'static str = "point transaction";

    fn from_body(body: Self::Body) -> Self {
        Self {
            id: Default::default(),
            point_rule_id: body.point_rule_id,
            pet_id: body.pet_id,
            points: body.points,
            created: 0,
        }
    }

    fn stamp_created(&mut self, created: i64) {
        self.created = created;
    }
}
