//! Metric flattening transform.
//!
//! `station -> module -> measurement` becomes a flat map keyed by
//! `netatmo.<lowercased module name>.<measurement key>`. Later entries
//! overwrite earlier ones under the same key, so input order decides
//! collisions.

use std::collections::BTreeMap;

use crate::model::Station;

/// Metric name prefix.
pub const METRIC_PREFIX: &str = "netatmo";

/// Flat metric name -> value mapping. Sorted by key.
pub type MetricMap = BTreeMap<String, f64>;

/// A measurement that could not be decoded and was left out.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedMeasurement {
    pub metric: String,
    pub reason: String,
}

/// Output of [`flatten_with_report`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flattened {
    pub metrics: MetricMap,
    pub skipped: Vec<SkippedMeasurement>,
}

/// Build the dotted metric name for one measurement.
pub fn metric_name(module_name: &str, key: &str) -> String {
    format!("{METRIC_PREFIX}.{}.{key}", module_name.to_lowercase())
}

/// Flatten stations into metrics, dropping undecodable measurements.
pub fn flatten(stations: &[Station]) -> MetricMap {
    flatten_with_report(stations).metrics
}

/// Flatten stations into metrics and report every measurement that was skipped.
pub fn flatten_with_report(stations: &[Station]) -> Flattened {
    let mut out = Flattened::default();

    for station in stations {
        for module in &station.modules {
            for (key, value) in &module.data {
                let metric = metric_name(&module.name, key);
                match value.decode(key) {
                    Ok(v) => {
                        out.metrics.insert(metric, v);
                    }
                    Err(e) => out.skipped.push(SkippedMeasurement {
                        metric,
                        reason: e.to_string(),
                    }),
                }
            }
        }
    }

    out
}
