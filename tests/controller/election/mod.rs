//! Tests for public election data endpoints.

mod get_candidates;
mod get_voting_status;

use super::*;
