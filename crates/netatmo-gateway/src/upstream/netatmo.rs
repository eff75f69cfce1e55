//! Netatmo weather API client.
//!
//! Two calls per fetch:
//! - `POST /oauth2/token` (password grant, `read_station` scope)
//! - `GET /api/getstationsdata` with the bearer token
//!
//! A fresh `reqwest::Client` is built for every fetch; nothing is reused
//! across requests.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use netatmo_core::error::{ExporterError, Result};
use netatmo_core::model::{MeasurementValue, Module, Station};

use super::{Credentials, StationSource};

const TOKEN_PATH: &str = "/oauth2/token";
const STATIONS_PATH: &str = "/api/getstationsdata";
const SCOPE: &str = "read_station";

// --------------------
// Wire types
// --------------------
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct StationsDataResponse {
    body: StationsBody,
}

#[derive(Debug, Deserialize)]
struct StationsBody {
    #[serde(default)]
    devices: Vec<DeviceRaw>,
}

#[derive(Debug, Deserialize)]
struct DeviceRaw {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    station_name: Option<String>,
    #[serde(default)]
    home_name: Option<String>,
    #[serde(default)]
    module_name: Option<String>,
    #[serde(default)]
    dashboard_data: Option<Map<String, Value>>,
    #[serde(default)]
    modules: Vec<ModuleRaw>,
}

#[derive(Debug, Deserialize)]
struct ModuleRaw {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    module_name: Option<String>,
    #[serde(default)]
    dashboard_data: Option<Map<String, Value>>,
}

/// Netatmo-backed [`StationSource`].
#[derive(Debug, Clone)]
pub struct NetatmoSource {
    base_url: String,
    timeout: Duration,
}

impl NetatmoSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, timeout }
    }

    async fn authenticate(&self, http: &reqwest::Client, creds: &Credentials) -> Result<String> {
        let form = [
            ("grant_type", "password"),
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("username", creds.username.as_str()),
            ("password", creds.password.as_str()),
            ("scope", SCOPE),
        ];

        let resp = http
            .post(format!("{}{TOKEN_PATH}", self.base_url))
            .form(&form)
            .send()
            .await
            .map_err(|e| ExporterError::Upstream(format!("token request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExporterError::Auth(format!("token endpoint returned {status}")));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| ExporterError::Decode(format!("token response: {e}")))?;
        Ok(token.access_token)
    }

    async fn stations_data(&self, http: &reqwest::Client, token: &str) -> Result<StationsDataResponse> {
        let resp = http
            .get(format!("{}{STATIONS_PATH}", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ExporterError::Upstream(format!("stations request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExporterError::Upstream(format!("stations endpoint returned {status}")));
        }

        resp.json()
            .await
            .map_err(|e| ExporterError::Decode(format!("stations response: {e}")))
    }
}

#[async_trait]
impl StationSource for NetatmoSource {
    async fn fetch_readings(&self, creds: &Credentials) -> Result<Vec<Station>> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ExporterError::Internal(format!("http client build failed: {e}")))?;

        let token = self.authenticate(&http, creds).await?;
        let data = self.stations_data(&http, &token).await?;

        let stations: Vec<Station> = data.body.devices.into_iter().map(into_station).collect();
        tracing::debug!(stations = stations.len(), "fetched netatmo stations");
        Ok(stations)
    }
}

/// The main device is reported as the first module, ahead of its linked modules.
fn into_station(dev: DeviceRaw) -> Station {
    let name = dev
        .station_name
        .or(dev.home_name)
        .unwrap_or_else(|| dev.id.clone());

    let mut modules = Vec::with_capacity(dev.modules.len() + 1);
    modules.push(into_module(dev.id.clone(), dev.module_name, dev.dashboard_data));
    modules.extend(
        dev.modules
            .into_iter()
            .map(|m| into_module(m.id, m.module_name, m.dashboard_data)),
    );

    Station {
        id: dev.id,
        name,
        modules,
    }
}

fn into_module(id: String, name: Option<String>, dashboard: Option<Map<String, Value>>) -> Module {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => id.clone(),
    };

    let data = dashboard
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .filter(|(k, _)| is_measurement(k))
        .map(|(k, v)| (k, MeasurementValue(v)))
        .collect();

    Module { id, name, data }
}

/// Timestamps and trend labels ride along in `dashboard_data` but are not readings.
fn is_measurement(key: &str) -> bool {
    key != "time_utc" && !key.starts_with("date_") && !key.ends_with("_trend")
}
