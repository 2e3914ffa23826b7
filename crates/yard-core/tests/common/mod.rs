#![allow(dead_code)]

use yard_core::{access::AccessGate, Dispatcher, DispatcherBuilder};
use tempfile::TempDir;

/// Helper function to create a dispatcher over a throwaway database
pub fn create_test_dispatcher(gate: impl AccessGate + 'static) -> (TempDir, Dispatcher) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let dispatcher = DispatcherBuilder::new()
        .with_database_path(Some(&db_path))
        .with_gate(gate)
        .build()
        .expect("Failed to create dispatcher");
    (temp_dir, dispatcher)
}
