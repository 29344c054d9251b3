pub mod candidate;
pub mod candidate_image;
pub mod token_alias;
pub mod vote;
pub mod voter_token;
pub mod voting_config;

pub mod prelude;
