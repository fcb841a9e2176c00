use std::fmt;

use serde::{Serialize, Serializer};

/// A Codeforces rating: numeric once the account has been rated, otherwise
/// the literal `"Unrated"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Rated(i64),
    Unrated,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Rated(n) => write!(f, "{n}"),
            Rating::Unrated => f.write_str("Unrated"),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Rated(n) => serializer.serialize_i64(*n),
            Rating::Unrated => serializer.serialize_str("Unrated"),
        }
    }
}

/// Public statistics from the Codeforces REST API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeforcesStats {
    /// The queried handle.
    pub username: String,
    /// Contest rating, or `Unrated` for accounts that never competed.
    pub rating: Rating,
    /// Rank title (`"newbie"`, `"expert"`, ...), or `"Unrated"`.
    pub rank: String,
    /// Count of distinct accepted submission ids (see [`fetch`](super::fetch)).
    pub problem_count: u64,
}
