pub use super::candidate::Entity as Candidate;
pub use super::candidate_image::Entity as CandidateImage;
pub use super::token_alias::Entity as TokenAlias;
pub use super::vote::Entity as Vote;
pub use super::voter_token::Entity as VoterToken;
pub use super::voting_config::Entity as VotingConfig;
