//! Upstream station sources.
//!
//! `StationSource` is the seam between the HTTP responder and the vendor API.
//! The Netatmo implementation authenticates and fetches on every call.

pub mod netatmo;

use std::fmt;

use async_trait::async_trait;
use netatmo_core::error::Result;
use netatmo_core::model::Station;

pub use netatmo::NetatmoSource;

/// Account credentials for the upstream API.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Source of current station readings.
#[async_trait]
pub trait StationSource: Send + Sync {
    /// Complete snapshot of every station visible to the account.
    async fn fetch_readings(&self, creds: &Credentials) -> Result<Vec<Station>>;
}
