//! Coronet server application core modules.
//!
//! This crate contains all server-side functionality for the Coronet election
//! backend, including HTTP routing, the vote transaction engine, voter token
//! and alias management, candidate administration, and image upload handling.
//! Voting is gated by single-use voter tokens across two parallel categories
//! (king and queen); all correctness-critical state lives in the database.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
