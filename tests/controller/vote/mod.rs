//! Tests for voting controller endpoints.

mod cast_vote;
mod token_status;

use super::*;
