//! Client and wire records for the vhoster virtual-host directory API.
//!
//! The server maps public hostnames to internal targets. This crate adds,
//! removes, and lists those mappings over HTTP with JSON payloads.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{VhostClient, VhostClientBuilder};
pub use models::{AddRequest, AddResponse, ListHost, ListResponse};

/// Convenient result alias sharing the `vhost-core` error type.
pub type Result<T> = vhost_core::Result<T>;
