mod common;

use common::create_test_new_user;

use fin_db::{PoolSettings, UserRepository, connect};

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_missing_database_file_when_connecting_then_creates_it_and_runs_migrations() {
    // Given: A path inside a directory that does not exist yet
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("users.db");

    // When: Connecting
    let pool = connect(&db_path, &PoolSettings::default()).await.unwrap();

    // Then: The file exists and the users table is usable
    assert!(db_path.exists());
    let repo = UserRepository::new(pool);
    assert_that!(repo.count().await.unwrap(), eq(0));
}

#[tokio::test]
async fn given_existing_database_when_reconnecting_then_data_survives() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("users.db");

    let pool = connect(&db_path, &PoolSettings::default()).await.unwrap();
    let created = UserRepository::new(pool.clone())
        .create(&create_test_new_user("ext-1", "a@x.com"))
        .await
        .unwrap();
    pool.close().await;

    // Reconnecting re-runs migrations, which must be a no-op
    let pool = connect(&db_path, &PoolSettings::default()).await.unwrap();
    let found = UserRepository::new(pool)
        .find_by_external_subject_id("ext-1")
        .await
        .unwrap();

    assert_that!(found.map(|u| u.id), some(eq(created.id)));
}
