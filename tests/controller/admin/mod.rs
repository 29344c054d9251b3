//! Tests for administrative controller endpoints.

mod candidates;
mod login;
mod seed_tokens;
mod upload;

use super::*;
