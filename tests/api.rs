mod helpers;

use helpers::setup::spawn_app;
use kennel_domain::{BookingStatus, BookingType, PaymentType, Pet, ID};
use kennel_sdk::{
    create_booking, create_booking_status, create_booking_type, create_payment_type, create_pet,
    create_pet_breed, create_pet_type, create_point_rule, create_point_transaction, KennelSDK,
    StatusCode,
};

struct Catalog {
    pet: Pet,
    status: BookingStatus,
    booking_type: BookingType,
    payment_type: PaymentType,
}

async fn create_catalog(sdk: &KennelSDK) -> Catalog {
    let pet_type = sdk
        .pet_type
        .create(create_pet_type::RequestBody { name: "Dog".into() })
        .await
        .expect("To create pet type")
        .data
        .unwrap();
    let breed = sdk
        .pet_breed
        .create(create_pet_breed::RequestBody {
            name: "Beagle".into(),
            pet_type_id: pet_type.id.clone(),
        })
        .await
        .expect("To create pet breed")
        .data
        .unwrap();
    let pet = sdk
        .pet
        .create(create_pet::RequestBody {
            name: "Rex".into(),
            owner_name: "Ada".into(),
            pet_type_id: pet_type.id.clone(),
            pet_breed_id: breed.id.clone(),
        })
        .await
        .expect("To create pet")
        .data
        .unwrap();
    let status = sdk
        .booking_status
        .create(create_booking_status::RequestBody {
            name: "Checked in".into(),
        })
        .await
        .expect("To create booking status")
        .data
        .unwrap();
    let booking_type = sdk
        .booking_type
        .create(create_booking_type::RequestBody {
            name: "Boarding".into(),
            description: None,
        })
        .await
        .expect("To create booking type")
        .data
        .unwrap();
    let payment_type = sdk
        .payment_type
        .create(create_payment_type::RequestBody {
            name: "Card".into(),
        })
        .await
        .expect("To create payment type")
        .data
        .unwrap();

    Catalog {
        pet,
        status,
        booking_type,
        payment_type,
    }
}

fn booking_body(catalog: &Catalog) -> create_booking::RequestBody {
    create_booking::RequestBody {
        pet_id: catalog.pet.id.clone(),
        booking_status_id: catalog.status.id.clone(),
        booking_type_id: catalog.booking_type.id.clone(),
        payment_type_id: catalog.payment_type.id.clone(),
        voucher_id: None,
        start_ts: 1000,
        end_ts: 2000,
    }
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_delete_unreferenced_entity_twice() {
    let (app, sdk) = spawn_app().await;
    let status = sdk
        .booking_status
        .create(create_booking_status::RequestBody {
            name: "Checked in".into(),
        })
        .await
        .expect("To create booking status")
        .data
        .unwrap();

    let res = sdk
        .booking_status
        .delete(&status.id)
        .await
        .expect("To mark booking status as deleted");
    assert!(res.success);
    assert_eq!(res.message, "Checked in marked as deleted");
    let data = res.data.expect("Tombstoned entity to be returned");
    assert!(data.is_deleted);
    assert_eq!(data.id, status.id);

    let res = sdk
        .booking_status
        .get(&status.id)
        .await
        .expect("Tombstoned entity to still be stored");
    assert!(res.data.unwrap().is_deleted);

    let res = sdk
        .booking_status
        .delete(&status.id)
        .await
        .expect("To erase booking status");
    assert!(res.success);
    assert_eq!(res.message, "Checked in permanently deleted");
    assert!(res.data.is_none());
    assert!(app.db.snapshot().booking_statuses.is_empty());

    let err = sdk
        .booking_status
        .delete(&status.id)
        .await
        .expect_err("Erased entity to not be found");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.message, format!("Booking status {} not found", status.id));
}

#[actix_web::main]
#[test]
async fn test_referenced_entity_is_only_tombstoned() {
    let (app, sdk) = spawn_app().await;
    let catalog = create_catalog(&sdk).await;
    let booking = sdk
        .booking
        .create(booking_body(&catalog))
        .await
        .expect("To create booking")
        .data
        .unwrap();

    // The first delete does not look at dependents
    let res = sdk
        .payment_type
        .delete(&catalog.payment_type.id)
        .await
        .expect("To mark payment type as deleted");
    assert_eq!(res.message, "Card marked as deleted");

    let commits = app.db.commits();
    let err = sdk
        .payment_type
        .delete(&catalog.payment_type.id)
        .await
        .expect_err("Referenced payment type to not be erased");
    assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    assert_eq!(
        err.message,
        "Card is referenced in existing bookings and cannot be deleted"
    );
    assert_eq!(app.db.commits(), commits);

    // Erasable once the booking is gone
    assert!(sdk.booking.delete(&booking.id).await.is_ok());
    let res = sdk
        .payment_type
        .delete(&catalog.payment_type.id)
        .await
        .expect("To erase payment type");
    assert_eq!(res.message, "Card permanently deleted");
}

#[actix_web::main]
#[test]
async fn test_tombstoned_dependent_blocks_erase() {
    let (_, sdk) = spawn_app().await;
    let pet_type = sdk
        .pet_type
        .create(create_pet_type::RequestBody { name: "Cat".into() })
        .await
        .unwrap()
        .data
        .unwrap();
    let breed = sdk
        .pet_breed
        .create(create_pet_breed::RequestBody {
            name: "Siamese".into(),
            pet_type_id: pet_type.id.clone(),
        })
        .await
        .unwrap()
        .data
        .unwrap();

    assert!(sdk.pet_breed.delete(&breed.id).await.is_ok());
    assert!(sdk.pet_type.delete(&pet_type.id).await.is_ok());
    let err = sdk
        .pet_type
        .delete(&pet_type.id)
        .await
        .expect_err("Tombstoned breed to still reference the pet type");
    assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    assert_eq!(
        err.message,
        "Cat is referenced in existing pet breeds and cannot be deleted"
    );
}

#[actix_web::main]
#[test]
async fn test_create_with_tombstoned_reference_is_rejected() {
    let (_, sdk) = spawn_app().await;
    let catalog = create_catalog(&sdk).await;
    assert!(sdk.booking_status.delete(&catalog.status.id).await.is_ok());

    let err = sdk
        .booking
        .create(booking_body(&catalog))
        .await
        .expect_err("Booking with a tombstoned status to be rejected");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(
        err.message,
        format!(
            "The booking status with id: {}, was not found.",
            catalog.status.id
        )
    );
}

#[actix_web::main]
#[test]
async fn test_delete_unknown_and_malformed_ids() {
    let (_, sdk) = spawn_app().await;

    let unknown = ID::default();
    let err = sdk.voucher.delete(&unknown).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.message, format!("Voucher {} not found", unknown));

    let err = sdk.voucher.delete_raw("not-an-id").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
}

#[actix_web::main]
#[test]
async fn test_point_transaction_lifecycle() {
    let (_, sdk) = spawn_app().await;
    let catalog = create_catalog(&sdk).await;
    let rule = sdk
        .point_rule
        .create(create_point_rule::RequestBody {
            name: "Per night".into(),
            points_per_unit: 10,
            minimum_spend: 0,
        })
        .await
        .unwrap()
        .data
        .unwrap();
    let transaction = sdk
        .point_transaction
        .create(create_point_transaction::RequestBody {
            point_rule_id: rule.id.clone(),
            pet_id: catalog.pet.id.clone(),
            points: 30,
        })
        .await
        .expect("To create point transaction")
        .data
        .unwrap();
    assert!(transaction.created > 0);

    assert!(sdk.pet.delete(&catalog.pet.id).await.is_ok());
    let err = sdk.pet.delete(&catalog.pet.id).await.unwrap_err();
    assert_eq!(
        err.message,
        "Rex is referenced in existing point transactions and cannot be deleted"
    );

    assert!(sdk.point_transaction.delete(&transaction.id).await.is_ok());
    let err = sdk
        .point_transaction
        .get(&transaction.id)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(sdk.pet.delete(&catalog.pet.id).await.is_ok());
}
