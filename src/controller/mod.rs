//! HTTP request handlers.

pub mod admin;
pub mod election;
pub mod vote;
