use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two parallel elections a voter token may vote in once each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    King,
    Queen,
}

impl Category {
    /// Database representation, matching the serialized wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Queen => "queen",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "king" => Some(Self::King),
            "queen" => Some(Self::Queen),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global voting lifecycle state gating whether votes may be cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum VotingStatus {
    NotStarted,
    Active,
    Ended,
}

impl VotingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::Active => "active",
            Self::Ended => "ended",
        }
    }

    /// Parse a stored status value. A missing or unrecognized value reads as
    /// `NotStarted`, the closed-by-default state.
    pub fn from_db(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "ended" => Self::Ended,
            _ => Self::NotStarted,
        }
    }
}

impl fmt::Display for VotingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
