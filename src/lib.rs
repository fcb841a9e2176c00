//! cpstats-rs: competitive-programming profile statistics client.
//!
//! Given a handle and a platform identifier, fetch the user's public profile
//! from the platform (HTML scrape or informal JSON/GraphQL endpoint) and
//! normalize it into a typed per-platform record.
//!
//! ```no_run
//! use cpstats_rs::{CpClient, get_details};
//!
//! # async fn run() -> Result<(), cpstats_rs::CpError> {
//! let client = CpClient::default();
//! let stats = get_details(&client, "tourist", "codeforces").await?;
//! println!("{} on {}: {:?}", stats.status(), stats.platform(), stats);
//! # Ok(())
//! # }
//! ```
//!
//! Every strategy is a stateless leaf: one or two HTTP requests, fixed
//! extraction rules, a typed record or a typed error. Missing markup is
//! reported as [`CpError::UsernameNotFound`], since a nonexistent handle is
//! by far the most common way a page loses its expected elements.

pub mod core;

pub mod codechef;
pub mod codeforces;
pub mod geeksforgeeks;
pub mod interviewbit;
pub mod leetcode;
pub mod spoj;

mod dispatch;

pub use crate::core::{CpClient, CpClientBuilder, CpError, Platform, ProfileStats};
pub use dispatch::{fetch, get_details};

pub use codechef::CodeChefStats;
pub use codeforces::{CodeforcesStats, Rating};
pub use geeksforgeeks::GeeksForGeeksStats;
pub use interviewbit::InterviewBitStats;
pub use leetcode::LeetCodeStats;
pub use spoj::SpojStats;
