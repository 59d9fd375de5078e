//! Core components shared by both utilities.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`MarketClient`] and its builder.
//! - The primary [`MarketError`] type.
//! - Environment configuration ([`NewsConfig`], `.env` loading) and log setup.
//! - Internal networking helpers.

/// The HTTP client (`MarketClient`), builder, and default endpoints.
pub mod client;
/// Environment and `.env` configuration.
pub mod config;
/// The primary error type (`MarketError`) for the crate.
pub mod error;
/// `tracing` subscriber setup for the binaries.
pub mod logging;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{MarketClient, MarketClientBuilder};
pub use config::NewsConfig;
pub use error::MarketError;
