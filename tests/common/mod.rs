#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;
use wallet_core::{
    core::WalletManager,
    schedule::FixedClock,
    storage::{JsonFileStore, KeyValueStore},
};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a fresh directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// File-backed store in its own temporary directory.
pub fn setup_store() -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::new(temp_base().join("store")).expect("create json store"))
}

pub fn open_wallet(store: &Arc<JsonFileStore>, today: NaiveDate) -> WalletManager {
    let store: Arc<dyn KeyValueStore> = store.clone();
    WalletManager::open(store, Arc::new(FixedClock::new(today)))
}
