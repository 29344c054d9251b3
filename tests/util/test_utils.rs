//! Test utilities for creating AppState backed by the in-memory database

use std::sync::Arc;

use coronet::{config::Config, model::app::AppState, util::random};
use coronet_test_utils::TestSetup;

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Extension trait for TestSetup to create an AppState with a test config
pub trait TestSetupExt {
    fn app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn app_state(&self) -> AppState {
        let storage_root = std::env::temp_dir().join(format!(
            "coronet-test-{}",
            random::alphanumeric_token(8)
        ));

        AppState {
            db: self.db.clone(),
            config: Arc::new(Config {
                database_url: "sqlite::memory:".to_string(),
                admin_password: Some(TEST_ADMIN_PASSWORD.to_string()),
                bind_address: "127.0.0.1:0".to_string(),
                storage_root,
                public_base_url: "http://localhost:8080".to_string(),
            }),
        }
    }
}
