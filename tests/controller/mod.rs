//! Tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with extractors rather than through a bound
//! listener; each test builds its own in-memory database and AppState.

mod admin;
mod election;
mod vote;

use coronet_test_utils::prelude::*;

use crate::util::{TestSetupExt, TEST_ADMIN_PASSWORD};
