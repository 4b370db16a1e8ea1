//! Per-invocation counters flushed as CloudWatch Embedded Metric Format.
//!
//! EMF lines are plain JSON objects written to stdout; the Lambda log
//! pipeline extracts the metrics from them without any API call.

use crate::config::MetricsConfig;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

pub struct Metrics {
    namespace: String,
    service: String,
    enabled: bool,
    counters: BTreeMap<String, f64>,
}

impl Metrics {
    pub fn new(config: &MetricsConfig) -> Self {
        Self {
            namespace: config.namespace.clone(),
            service: config.service_name.clone(),
            enabled: config.enabled,
            counters: BTreeMap::new(),
        }
    }

    pub fn add_count(&mut self, name: &str, value: f64) {
        *self.counters.entry(name.to_string()).or_insert(0.0) += value;
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn to_emf(&self, timestamp_ms: i64) -> Value {
        let definitions: Vec<Value> = self
            .counters
            .keys()
            .map(|name| json!({ "Name": name, "Unit": "Count" }))
            .collect();

        let mut document = Map::new();
        document.insert(
            "_aws".to_string(),
            json!({
                "Timestamp": timestamp_ms,
                "CloudWatchMetrics": [{
                    "Namespace": self.namespace,
                    "Dimensions": [["service"]],
                    "Metrics": definitions,
                }],
            }),
        );
        document.insert("service".to_string(), Value::String(self.service.clone()));
        for (name, value) in &self.counters {
            document.insert(name.clone(), json!(value));
        }

        Value::Object(document)
    }

    /// Writes the accumulated counters and resets them. No-op when disabled or empty.
    pub fn flush(&mut self) {
        if !self.enabled || self.is_empty() {
            self.counters.clear();
            return;
        }

        let document = self.to_emf(chrono::Utc::now().timestamp_millis());
        println!("{}", document);
        self.counters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MetricsConfig {
        MetricsConfig {
            namespace: "ProductApi".to_string(),
            service_name: "product-api".to_string(),
            enabled: true,
        }
    }

    #[test]
    fn test_counters_accumulate() {
        let mut metrics = Metrics::new(&config());
        metrics.add_count("ProductDeleted", 1.0);
        metrics.add_count("ProductDeleted", 1.0);

        let document = metrics.to_emf(1_700_000_000_000);
        assert_eq!(document["ProductDeleted"], json!(2.0));
    }

    #[test]
    fn test_emf_document_shape() {
        let mut metrics = Metrics::new(&config());
        metrics.add_count("ProductCreated", 1.0);

        let document = metrics.to_emf(1_700_000_000_000);
        let directive = &document["_aws"]["CloudWatchMetrics"][0];

        assert_eq!(document["_aws"]["Timestamp"], json!(1_700_000_000_000i64));
        assert_eq!(directive["Namespace"], "ProductApi");
        assert_eq!(directive["Dimensions"], json!([["service"]]));
        assert_eq!(directive["Metrics"][0]["Name"], "ProductCreated");
        assert_eq!(directive["Metrics"][0]["Unit"], "Count");
        assert_eq!(document["service"], "product-api");
    }

    #[test]
    fn test_flush_resets_counters() {
        let mut metrics = Metrics::new(&MetricsConfig {
            enabled: false,
            ..config()
        });
        metrics.add_count("ServerError", 1.0);
        metrics.flush();
        assert!(metrics.is_empty());
    }
}
