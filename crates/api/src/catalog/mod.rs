mod create_entity;
mod delete_entity;
mod get_entity;

use actix_web::web;
use create_entity::create_entity_controller;
use delete_entity::delete_entity_controller;
use get_entity::get_entity_controller;
use kennel_api_structs::*;
use kennel_domain::{
    BookingStatus, BookingType, PaymentType, Pet, PetBreed, PetType, PointRule, References,
    Voucher,
};
use kennel_infra::StoredEntity;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// A `Deletable` kind exposed over http at `/{PATH}`
pub trait CatalogEntity: StoredEntity + References + Serialize + Debug {
    type Body: DeserializeOwned + 'static;

    const PATH: &'static str;

    fn from_body(body: Self::Body) -> Self;
}

fn configure_entity_routes<E: CatalogEntity>(cfg: &mut web::ServiceConfig) {
    let collection = format!("/{}", E::PATH);
    let single = format!("/{}/{{id}}", E::PATH);
    cfg.route(&collection, web::post().to(create_entity_controller::<E>));
    cfg.route(&single, web::get().to(get_entity_controller::<E>));
    cfg.route(&single, web::delete().to(delete_entity_controller::<E>));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_entity_routes::<BookingStatus>(cfg);
    configure_entity_routes::<BookingType>(cfg);
    configure_entity_routes::<PaymentType>(cfg);
    configure_entity_routes::<PointRule>(cfg);
    configure_entity_routes::<PetType>(cfg);
    configure_entity_routes::<PetBreed>(cfg);
    configure_entity_routes::<Pet>(cfg);
    configure_entity_routes::<Voucher>(cfg);
}

impl CatalogEntity for BookingStatus {
    type Body = create_booking_status::RequestBody;

    const PATH: &'static str = "booking-status";

    fn from_body(body: Self::Body) -> Self {
        Self::new(body.name)
    }
}

impl CatalogEntity for BookingType {
    type Body = create_booking_type::RequestBody;

    const PATH: &'static str = "booking-type";

    fn from_body(body: Self::Body) -> Self {
        Self::new(body.name, body.description.unwrap_or_default())
    }
}

impl CatalogEntity for PaymentType {
    type Body = create_payment_type::RequestBody;

    const PATH: &'static str = "payment-type";

    fn from_body(body: Self::Body) -> Self {
        Self::new(body.name)
    }
}

impl CatalogEntity for PointRule {
    type Body = create_point_rule::RequestBody;

    const PATH: &'static str = "point-rule";

    fn from_body(body: Self::Body) -> Self {
        Self::new(body.name, body.points_per_unit, body.minimum_spend)
    }
}

impl CatalogEntity for PetType {
    type Body = create_pet_type::RequestBody;

    const PATH: &'static str = "pet-type";

    fn from_body(body: Self::Body) -> Self {
        Self::new(body.name)
    }
}

impl CatalogEntity for PetBreed {
    type Body = create_pet_breed::RequestBody;

    const PATH: &'static str = "pet-breed";

    fn from_body(body: Self::Body) -> Self {
        Self::new(body.name, body.pet_type_id)
    }
}

impl CatalogEntity for Pet {
    type Body = create_pet::RequestBody;

    const PATH: &'static str = "pet";

    fn from_body(body: Self::Body) -> Self {
        Self::new(body.name, body.owner_name, body.pet_type_id, body.pet_breed_id)
    }
}

impl CatalogEntity for Voucher {
    type Body = create_voucher::RequestBody;

    const PATH: &'static str = "voucher";

    fn from_body(body: Self::Body) -> Self {
        Self::new(body.code, body.points_required, body.discount_percent)
    }
}
