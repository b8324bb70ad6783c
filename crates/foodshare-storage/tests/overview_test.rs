//! Overview counts and table dumps.

mod common;

use foodshare_core::types::Table;
use foodshare_storage::{dump_table, overview_counts, OverviewCounts};

#[test]
fn counts_every_table() {
    let (_dir, store) = common::seeded_store();
    assert_eq!(
        overview_counts(&store).unwrap(),
        OverviewCounts {
            providers: 3,
            receivers: 2,
            food_listings: 3,
            claims: 3,
        }
    );
}

#[test]
fn empty_store_counts_zero() {
    let (_dir, store) = common::empty_store();
    assert_eq!(overview_counts(&store).unwrap(), OverviewCounts::default());
}

#[test]
fn dump_returns_all_columns() {
    let (_dir, store) = common::seeded_store();
    let claims = dump_table(&store, Table::Claims).unwrap();
    assert_eq!(
        claims.columns,
        vec!["Claim_ID", "Food_ID", "Receiver_ID", "Status", "Timestamp"]
    );
    assert_eq!(claims.row_count(), 3);

    let providers = dump_table(&store, Table::Providers).unwrap();
    assert_eq!(providers.column_count(), 5);
}
