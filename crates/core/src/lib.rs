//! Store Admin Core - Shared types library.
//!
//! This crate provides common types used across the Algonquin Pet Store
//! admin components:
//! - `admin` - The staff-facing dashboard binary
//! - `integration-tests` - End-to-end tests against live services
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
