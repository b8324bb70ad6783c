//! Shared fixtures for report tests.

#![allow(dead_code)]

use foodshare_core::traits::IReportStore;
use foodshare_storage::SqliteStore;
use tempfile::TempDir;

/// Three providers, four receivers (one without claims), four listings
/// and seven claims: three Completed, two Pending, two Cancelled.
pub const SEED_SQL: &[&str] = &[
    "INSERT INTO Providers (Provider_ID, Name, Type, City, Contact) VALUES
        (1, 'Green Bowl', 'Restaurant', 'Pune', '020-111'),
        (2, 'Daily Mart', 'Grocery Store', 'Mumbai', '022-222'),
        (3, 'Oven Fresh', 'Bakery', 'Pune', '020-333')",
    "INSERT INTO Receivers (Receiver_ID, Name, Type, City, Contact) VALUES
        (1, 'Hope Shelter', 'Shelter', 'Pune', '020-900'),
        (2, 'City Kitchen', 'NGO', 'Mumbai', NULL),
        (3, 'Quiet Corner', 'Charity', 'Delhi', NULL),
        (4, 'Food Bridge', 'NGO', 'Chennai', '044-400')",
    "INSERT INTO Food_Listings (Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID, Provider_Type, Location, Food_Type, Meal_Type) VALUES
        (1, 'Rice', 40, '2025-03-10', 1, 'Restaurant', 'Pune', 'Vegetarian', 'Lunch'),
        (2, 'Bread', 25, NULL, 3, 'Bakery', 'Pune', 'Vegan', 'Breakfast'),
        (3, 'Chicken Curry', 10, '2025-03-08', 1, 'Restaurant', 'Mumbai', 'Non-Vegetarian', 'Dinner'),
        (4, 'Dal', 15, '2025-03-09', 2, 'Grocery Store', 'Mumbai', 'Vegetarian', 'Lunch')",
    "INSERT INTO Claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp) VALUES
        (1, 1, 1, 'Completed', '2025-03-05 10:00:00'),
        (2, 2, 1, 'Pending', '2025-03-05 11:00:00'),
        (3, 3, 2, 'Completed', '2025-03-06 09:30:00'),
        (4, 1, 2, 'Cancelled', '2025-03-06 12:15:00'),
        (5, 3, 4, 'Completed', '2025-03-07 08:00:00'),
        (6, 4, 4, 'Pending', '2025-03-07 09:00:00'),
        (7, 2, 4, 'Cancelled', '2025-03-07 10:00:00')",
];

pub fn empty_store() -> (TempDir, SqliteStore) {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::new(&dir.path().join("food_waste.db"));
    store.initialize().unwrap();
    (dir, store)
}

pub fn seeded_store() -> (TempDir, SqliteStore) {
    let (dir, store) = empty_store();
    for sql in SEED_SQL {
        store.execute("seed", sql, &[]).unwrap();
    }
    (dir, store)
}
