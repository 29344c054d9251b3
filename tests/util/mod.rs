pub mod test_utils;

pub use test_utils::{TestSetupExt, TEST_ADMIN_PASSWORD};
