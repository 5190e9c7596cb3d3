mod common;

use common::{create_test_pool, log_entry_at};

use pl_db::ArchiveRepository;
use pl_core::{ArchiveBundle, LogLevel};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_bundle_when_created_then_round_trips_with_entries() {
    // Given: A bundle snapshotting two entries
    let pool = create_test_pool().await;
    let entries = vec![
        log_entry_at(LogLevel::Info, "first", 120),
        log_entry_at(LogLevel::Error, "second failed", 60),
    ];
    let bundle = ArchiveBundle::new("admin-7", entries);

    // When: Persisting and reloading it
    ArchiveRepository::create(&pool, &bundle).await.unwrap();
    let loaded = ArchiveRepository::find_by_id(&pool, bundle.id)
        .await
        .unwrap()
        .unwrap();

    // Then: Count and entry contents survive
    assert_that!(loaded.logs_count, eq(2));
    assert_that!(loaded.created_by.as_str(), eq("admin-7"));
    assert_that!(loaded.entries, len(eq(2)));
    assert_that!(loaded.entries[1].level, eq(LogLevel::Error));
}

#[tokio::test]
async fn given_unknown_id_when_loading_then_returns_none() {
    let pool = create_test_pool().await;

    let loaded = ArchiveRepository::find_by_id(&pool, Uuid::new_v4())
        .await
        .unwrap();

    assert_that!(loaded.is_none(), eq(true));
}
