#![allow(dead_code)]

use cost_monitor::config::CostConfig;
use serde_json::{json, Map, Value};

/// Builder for cost-limit documents.
///
/// Produces either the JSON text (for writing to disk) or a validated
/// `CostConfig`.
pub struct CostConfigBuilder {
    limits: Map<String, Value>,
    notifications: Map<String, Value>,
    tracking: Map<String, Value>,
}

impl CostConfigBuilder {
    pub fn new() -> Self {
        Self {
            limits: Map::new(),
            notifications: Map::new(),
            tracking: Map::new(),
        }
    }

    pub fn with_limit(mut self, period: &str, limit: CostLimitBuilder) -> Self {
        self.limits.insert(period.to_string(), limit.build());
        self
    }

    pub fn with_notifications(mut self, enabled: bool, thresholds: &[u32], channels: &[&str]) -> Self {
        self.notifications.insert("enabled".into(), json!(enabled));
        self.notifications.insert("thresholds".into(), json!(thresholds));
        self.notifications.insert("channels".into(), json!(channels));
        self
    }

    pub fn with_tracking(mut self, enabled: bool, log_file: &str) -> Self {
        self.tracking.insert("enabled".into(), json!(enabled));
        self.tracking.insert("logFile".into(), json!(log_file));
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "limits": self.limits,
            "notifications": self.notifications,
            "tracking": self.tracking,
        })
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn build(self) -> CostConfig {
        CostConfig::try_from(self.to_value()).expect("Failed to build valid config from builder")
    }
}

impl Default for CostConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `limits.<period>` entry.
pub struct CostLimitBuilder {
    fields: Map<String, Value>,
}

impl CostLimitBuilder {
    pub fn new(amount: f64, action: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("amount".into(), json!(amount));
        fields.insert("currency".into(), json!("USD"));
        fields.insert("action".into(), json!(action));
        Self { fields }
    }

    pub fn currency(mut self, code: &str) -> Self {
        self.fields.insert("currency".into(), json!(code));
        self
    }

    pub fn notification(mut self, channel: &str) -> Self {
        self.fields.insert("notification".into(), json!(channel));
        self
    }

    /// Replace `amount` with an arbitrary JSON value (for invalid inputs).
    pub fn raw_amount(mut self, value: Value) -> Self {
        self.fields.insert("amount".into(), value);
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
