//! netatmo gateway library entry.
//!
//! Wires the config loader, the upstream Netatmo client, and the HTTP
//! responder into a router. Consumed by the binary (`main.rs`) and by
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod responder;
pub mod router;
pub mod upstream;
