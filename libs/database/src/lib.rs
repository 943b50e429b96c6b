//! Database connection layer for the catalog services.
//!
//! The catalog is backed by MongoDB; this crate owns connection
//! configuration, connection establishment with retry, and health checks.

pub mod common;
pub mod mongodb;
