//! Content source for the studio site.
//!
//! - [`ContentSource`]: the read interface every page builder fetches
//!   through.
//! - [`BaasClient`]: REST client for the hosted document store.
//! - [`FixtureSource`]: serves the same collections from a local JSON file
//!   for offline development and tests.

pub mod client;
pub mod config;
pub mod error;
pub mod fixture;
pub mod query;
pub mod source;

pub use client::BaasClient;
pub use config::{BaasConfig, Collections};
pub use error::BaasError;
pub use fixture::{Fixture, FixtureSource};
pub use source::ContentSource;
