//! Shared application state for the netatmo gateway.
//!
//! Holds the immutable config loaded at startup and the station source used
//! by every request. Nothing here is mutated after construction.

use std::sync::Arc;

use crate::config::ExporterConfig;
use crate::upstream::{Credentials, NetatmoSource, StationSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    credentials: Credentials,
    source: Arc<dyn StationSource>,
}

impl AppState {
    /// Build state backed by the Netatmo API at `cfg.api_base_url`.
    pub fn new(cfg: ExporterConfig) -> Self {
        let source = NetatmoSource::new(cfg.api_base_url.clone(), cfg.upstream_timeout());
        Self::with_source(cfg, Arc::new(source))
    }

    /// Build state around an arbitrary source.
    pub fn with_source(cfg: ExporterConfig, source: Arc<dyn StationSource>) -> Self {
        let credentials = cfg.credentials();
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                credentials,
                source,
            }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    pub fn source(&self) -> Arc<dyn StationSource> {
        Arc::clone(&self.inner.source)
    }
}
