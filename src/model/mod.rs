//! Application models and type definitions.
//!
//! Contains the shared application state, the election domain enums
//! ([`election::Category`], [`election::VotingStatus`]), and the API
//! request/response DTOs exchanged with voter-facing and admin clients.

pub mod api;
pub mod app;
pub mod election;
