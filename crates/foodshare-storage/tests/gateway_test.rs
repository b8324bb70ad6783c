//! Mutation gateway over a file-backed store.

mod common;

use chrono::{NaiveDate, NaiveDateTime};
use foodshare_core::errors::StoreError;
use foodshare_core::traits::IReportStore;
use foodshare_core::types::{ClaimStatus, FoodType, MealType};
use foodshare_core::Value;
use foodshare_storage::{
    Assignments, ClaimField, ClaimGateway, FoodListingField, FoodListingGateway, NewClaim,
    NewFoodListing, SqliteStore,
};

fn listing(food_id: Option<i64>) -> NewFoodListing {
    NewFoodListing {
        food_id,
        food_name: "Dal".to_string(),
        quantity: 15,
        expiry_date: NaiveDate::from_ymd_opt(2025, 4, 1),
        provider_id: 2,
        provider_type: "Grocery Store".to_string(),
        location: "Mumbai".to_string(),
        food_type: FoodType::Vegetarian,
        meal_type: MealType::Dinner,
    }
}

fn claim(claim_id: Option<i64>) -> NewClaim {
    NewClaim {
        claim_id,
        food_id: 1,
        receiver_id: 2,
        status: ClaimStatus::Pending,
        timestamp: NaiveDateTime::parse_from_str("2025-03-07 08:15:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
    }
}

#[test]
fn insert_then_delete_twice_is_idempotent() {
    let (_dir, store) = common::seeded_store();
    let gateway = FoodListingGateway::new(&store);

    let id = gateway.insert(&listing(Some(50))).unwrap();
    assert_eq!(id, 50);
    assert_eq!(gateway.fetch(50).unwrap().row_count(), 1);

    assert!(gateway.delete(50).unwrap());
    assert!(!gateway.delete(50).unwrap(), "second delete is a no-op success");
    assert!(gateway.fetch(50).unwrap().is_empty());
}

#[test]
fn insert_without_id_gets_store_assigned_identity() {
    let (_dir, store) = common::seeded_store();
    let gateway = FoodListingGateway::new(&store);

    let id = gateway.insert(&listing(None)).unwrap();
    assert_eq!(id, 4);
    let row = gateway.fetch(id).unwrap();
    assert_eq!(row.get(0, 1), Some(&Value::from("Dal")));
    assert_eq!(row.get(0, 3), Some(&Value::from("2025-04-01")));
}

#[test]
fn insert_without_id_fails_when_store_cannot_assign() {
    let (_dir, store) = common::empty_store();
    store
        .execute("rebuild", "DROP TABLE Claims", &[])
        .unwrap();
    store
        .execute(
            "rebuild",
            "CREATE TABLE Claims (Claim_ID TEXT PRIMARY KEY, Food_ID INTEGER, Receiver_ID INTEGER, Status TEXT, Timestamp TEXT)",
            &[],
        )
        .unwrap();
    let gateway = ClaimGateway::new(&store);

    let err = gateway.insert(&claim(None)).unwrap_err();
    assert!(matches!(err, StoreError::MissingIdentity { entity: "Claim" }), "got {err:?}");
    assert_eq!(store.run_query("SELECT * FROM Claims").unwrap().row_count(), 0);
}

#[test]
fn duplicate_id_is_constraint_violation_and_leaves_state_unchanged() {
    let (_dir, store) = common::seeded_store();
    let gateway = FoodListingGateway::new(&store);
    let before = gateway.fetch(1).unwrap();

    let err = gateway.insert(&listing(Some(1))).unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation { .. }), "got {err:?}");
    assert_eq!(gateway.fetch(1).unwrap(), before);
}

#[test]
fn partial_update_touches_only_named_field() {
    let (_dir, store) = common::seeded_store();
    let gateway = FoodListingGateway::new(&store);
    let before = gateway.fetch(1).unwrap();

    gateway
        .update(1, &Assignments::new().set(FoodListingField::Quantity, 5_i64))
        .unwrap();

    let after = gateway.fetch(1).unwrap();
    let quantity = after.column_index("Quantity").unwrap();
    for (i, (old, new)) in before.rows[0].iter().zip(&after.rows[0]).enumerate() {
        if i == quantity {
            assert_eq!(new, &Value::Integer(5));
        } else {
            assert_eq!(old, new, "column {} changed", after.columns[i]);
        }
    }
}

#[test]
fn update_of_missing_row_is_not_found() {
    let (_dir, store) = common::seeded_store();
    let gateway = FoodListingGateway::new(&store);

    let err = gateway
        .update(999, &Assignments::new().set(FoodListingField::Quantity, 1_i64))
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound { entity: "FoodListing", id: 999 });

    let err = gateway.update(999, &Assignments::new()).unwrap_err();
    assert_eq!(err, StoreError::NotFound { entity: "FoodListing", id: 999 });
}

#[test]
fn empty_update_of_existing_row_is_noop() {
    let (_dir, store) = common::seeded_store();
    let gateway = FoodListingGateway::new(&store);
    let before = gateway.fetch(2).unwrap();
    gateway.update(2, &Assignments::new()).unwrap();
    assert_eq!(gateway.fetch(2).unwrap(), before);
}

#[test]
fn named_update_rejects_unknown_field_before_touching_store() {
    let err = Assignments::<FoodListingField>::from_named([
        ("Quantity", Value::Integer(3)),
        ("Secret_Column", Value::from("x")),
    ])
    .unwrap_err();
    assert!(matches!(err, StoreError::InvalidField { ref field, .. } if field == "Secret_Column"));
}

#[test]
fn negative_quantity_update_is_rejected() {
    let (_dir, store) = common::seeded_store();
    let gateway = FoodListingGateway::new(&store);
    let err = gateway
        .update(1, &Assignments::new().set(FoodListingField::Quantity, -1_i64))
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidField { .. }));
    assert_eq!(gateway.fetch(1).unwrap().get(0, 2), Some(&Value::Integer(40)));
}

#[test]
fn blank_food_name_is_rejected_on_insert() {
    let (_dir, store) = common::seeded_store();
    let gateway = FoodListingGateway::new(&store);
    let mut bad = listing(Some(60));
    bad.food_name = "  ".to_string();
    assert!(matches!(
        gateway.insert(&bad).unwrap_err(),
        StoreError::InvalidField { .. }
    ));
    assert!(gateway.fetch(60).unwrap().is_empty());
}

#[test]
fn claim_lifecycle() {
    let (_dir, store) = common::seeded_store();
    let gateway = ClaimGateway::new(&store);

    let id = gateway.insert(&claim(None)).unwrap();
    assert_eq!(id, 4);

    let update = Assignments::<ClaimField>::from_named([("Status", Value::from("Completed"))]).unwrap();
    gateway.update(id, &update).unwrap();
    let row = gateway.fetch(id).unwrap();
    let status = row.column_index("Status").unwrap();
    assert_eq!(row.get(0, status), Some(&Value::from("Completed")));

    assert!(gateway.delete(id).unwrap());
    assert!(!gateway.delete(id).unwrap());
}

#[test]
fn claim_may_reference_missing_listing() {
    let (_dir, store) = common::seeded_store();
    let gateway = ClaimGateway::new(&store);
    let mut dangling = claim(Some(90));
    dangling.food_id = 12345;
    assert_eq!(gateway.insert(&dangling).unwrap(), 90);
}

#[test]
fn claim_status_update_outside_enum_is_rejected() {
    let (_dir, store) = common::seeded_store();
    let gateway = ClaimGateway::new(&store);
    let update = Assignments::new().set(ClaimField::Status, "Lost");
    assert!(matches!(
        gateway.update(1, &update).unwrap_err(),
        StoreError::InvalidField { .. }
    ));
}

#[test]
fn summaries_feed_pickers() {
    let (_dir, store) = common::seeded_store();
    let listings = FoodListingGateway::new(&store).summaries().unwrap();
    assert_eq!(listings.columns, vec!["Food_ID", "Food_Name", "Quantity"]);
    assert_eq!(listings.row_count(), 3);

    let claims = ClaimGateway::new(&store).summaries().unwrap();
    assert_eq!(claims.columns, vec!["Claim_ID", "Food_ID", "Receiver_ID", "Status"]);
    assert_eq!(claims.row_count(), 3);
}

#[test]
fn gateway_accepts_shared_store_handle() {
    let (_dir, store) = common::seeded_store();
    let shared: std::sync::Arc<SqliteStore> = std::sync::Arc::new(store);
    let listings = FoodListingGateway::new(shared.clone());
    let claims = ClaimGateway::new(shared);
    assert!(listings.delete(3).unwrap());
    assert!(claims.delete(3).unwrap());
}
