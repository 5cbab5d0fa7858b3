#![allow(dead_code)]

use chrono::NaiveDate;
use healthplanner::core::store::StateStore;
use healthplanner::db::Database;
use tempfile::TempDir;

/// Create a temporary on-disk store for testing.
pub fn setup_store() -> (TempDir, StateStore<Database>) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, StateStore::new(db))
}

/// Reopen the store at the same path, as a later invocation would.
pub fn reopen(dir: &TempDir) -> StateStore<Database> {
    StateStore::new(Database::open(&dir.path().join("test.db")).unwrap())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
