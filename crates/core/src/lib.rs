//! Domain types and pure view-model builders for the studio site.
//!
//! The `core` crate has no I/O: every function takes collections that were
//! already fetched from the content source and returns display-ready data.

pub mod error;
pub mod lookup;
pub mod modal;
pub mod models;
pub mod pricing;
pub mod progress;
pub mod settings;
pub mod site;
pub mod tasks;
pub mod types;
