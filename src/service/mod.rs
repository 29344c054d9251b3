//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories inside transactions and implement the
//! election rules: the vote transaction engine, token resolution and
//! seeding, alias generation, candidate management, administrative reset,
//! and image upload handling.

pub mod admin;
pub mod alias;
pub mod candidate;
pub mod token;
pub mod upload;
pub mod vote;
