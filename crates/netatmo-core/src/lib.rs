//! netatmo core: data model, error surface and the metric flattening transform.
//!
//! This crate carries no transport or runtime dependencies. The gateway
//! decodes upstream payloads into [`model::Station`] values and hands them to
//! [`flatten::flatten`], which is a pure function.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A malformed measurement surfaces as `ExporterError::Measurement`, never as
//! a crash of the request.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod flatten;
pub mod model;

/// Shared result type.
pub use error::{ErrorKind, ExporterError, Result};
