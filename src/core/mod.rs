//! Core components of the `cpstats-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`CpClient`] and its builder.
//! - The primary [`CpError`] type.
//! - Shared data models ([`Platform`], [`ProfileStats`]).
//! - The markup-query and text-coercion helpers the strategies are built on.

/// The main client (`CpClient`), builder, and endpoint configuration.
pub mod client;
/// The primary error type (`CpError`) for the crate.
pub mod error;
/// Shared data models (`Platform`, `ProfileStats`).
pub mod models;

pub(crate) mod markup;
pub(crate) mod text;

// convenient re-exports so most code can just `use crate::core::CpClient`
pub use client::{CpClient, CpClientBuilder};
pub use error::CpError;
pub use models::{Platform, ProfileStats};
