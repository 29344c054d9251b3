//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations for the
//! election collections: voter tokens, token aliases, candidates, the vote
//! audit log, and the singleton voting configuration. All repositories are
//! generic over `ConnectionTrait` so they work against both a connection and
//! an open transaction.

pub mod alias;
pub mod candidate;
pub mod token;
pub mod vote_log;
pub mod voting_config;

pub use alias::TokenAliasRepository;
pub use candidate::CandidateRepository;
pub use token::VoterTokenRepository;
pub use vote_log::VoteLogRepository;
pub use voting_config::VotingConfigRepository;
