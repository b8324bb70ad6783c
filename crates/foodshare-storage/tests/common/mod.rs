//! Shared fixtures: a file-backed store seeded with a small dataset.

#![allow(dead_code)]

use foodshare_core::traits::IReportStore;
use foodshare_storage::SqliteStore;
use tempfile::TempDir;

pub const SEED_SQL: &[&str] = &[
    "INSERT INTO Providers (Provider_ID, Name, Type, City, Contact) VALUES
        (1, 'Green Bowl', 'Restaurant', 'Pune', '020-111'),
        (2, 'Daily Mart', 'Grocery Store', 'Mumbai', '022-222'),
        (3, 'Oven Fresh', 'Bakery', 'Pune', '020-333')",
    "INSERT INTO Receivers (Receiver_ID, Name, Type, City, Contact) VALUES
        (1, 'Hope Shelter', 'Shelter', 'Pune', NULL),
        (2, 'City Kitchen', 'NGO', 'Mumbai', NULL)",
    "INSERT INTO Food_Listings (Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID, Provider_Type, Location, Food_Type, Meal_Type) VALUES
        (1, 'Rice', 40, '2025-03-10', 1, 'Restaurant', 'Pune', 'Vegetarian', 'Lunch'),
        (2, 'Bread', 25, NULL, 3, 'Bakery', 'Pune', 'Vegan', 'Breakfast'),
        (3, 'Chicken Curry', 10, '2025-03-08', 1, 'Restaurant', 'Pune', 'Non-Vegetarian', 'Dinner')",
    "INSERT INTO Claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp) VALUES
        (1, 1, 1, 'Completed', '2025-03-05 10:00:00'),
        (2, 2, 1, 'Pending', '2025-03-05 11:00:00'),
        (3, 3, 2, 'Cancelled', '2025-03-06 09:30:00')",
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
