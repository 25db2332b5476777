//! # vhost-core
//!
//! Core types shared by clients of the vhoster directory service.
//!
//! The vhoster service maps externally visible hostnames to internal
//! targets. This crate carries the pieces every client needs regardless of
//! which endpoints it talks to.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and status code classification
//! - [`client`] - HTTP transport configuration (timeouts, pooling)
//! - [`config`] - Serializable, validated client configuration

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use error::{Error, Result};
