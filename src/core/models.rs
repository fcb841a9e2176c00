//! Shared public models: the platform identifier and the per-platform
//! discriminated profile record.

use std::str::FromStr;

use serde::Serialize;

use crate::codechef::CodeChefStats;
use crate::codeforces::CodeforcesStats;
use crate::core::CpError;
use crate::geeksforgeeks::GeeksForGeeksStats;
use crate::interviewbit::InterviewBitStats;
use crate::leetcode::LeetCodeStats;
use crate::spoj::SpojStats;

/// The six supported platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    CodeChef,
    Codeforces,
    Spoj,
    GeeksForGeeks,
    InterviewBit,
    LeetCode,
}

impl Platform {
    /// The identifier accepted by [`get_details`](crate::get_details).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Platform::CodeChef => "codechef",
            Platform::Codeforces => "codeforces",
            Platform::Spoj => "spoj",
            Platform::GeeksForGeeks => "geeksforgeeks",
            Platform::InterviewBit => "interviewbit",
            Platform::LeetCode => "leetcode",
        }
    }
}

impl FromStr for Platform {
    type Err = CpError;

    /// Exact, case-sensitive match; no canonicalization.
    fn from_str(s: &str) -> Result<Self, CpError> {
        Ok(match s {
            "codechef" => Platform::CodeChef,
            "codeforces" => Platform::Codeforces,
            "spoj" => Platform::Spoj,
            "geeksforgeeks" => Platform::GeeksForGeeks,
            "interviewbit" => Platform::InterviewBit,
            "leetcode" => Platform::LeetCode,
            other => return Err(CpError::PlatformNotSupported(other.to_string())),
        })
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One normalized profile record, discriminated by platform.
///
/// Each variant carries a fixed, fully typed field set; there is no shared
/// schema across platforms beyond the success state itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileStats {
    CodeChef(CodeChefStats),
    Codeforces(CodeforcesStats),
    Spoj(SpojStats),
    GeeksForGeeks(GeeksForGeeksStats),
    InterviewBit(InterviewBitStats),
    LeetCode(LeetCodeStats),
}

impl ProfileStats {
    /// Always `"Success"`.
    ///
    /// A `ProfileStats` value only exists once every required field was
    /// extracted; there is no partial-success state.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        "Success"
    }

    /// The platform label as the upstream records report it.
    #[must_use]
    pub const fn platform(&self) -> &'static str {
        match self {
            ProfileStats::CodeChef(_) => "CodeChef",
            ProfileStats::Codeforces(_) => "Codeforces",
            ProfileStats::Spoj(_) => "SPOJ",
            ProfileStats::GeeksForGeeks(_) => "GeeksForGeeks",
            ProfileStats::InterviewBit(_) => "Interviewbit",
            ProfileStats::LeetCode(_) => "LeetCode",
        }
    }
}
