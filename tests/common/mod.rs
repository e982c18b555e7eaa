#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use budget_tracker::{
    storage::{JsonFileBackend, Store},
    BudgetTracker,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique application directory for one test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn file_store(home: &PathBuf) -> Store {
    let backend = JsonFileBackend::new(Some(home.clone())).expect("create json backend");
    Store::new(Box::new(backend))
}

pub fn open_tracker(home: &PathBuf) -> BudgetTracker {
    BudgetTracker::open(file_store(home))
}
