// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{LimitAction, NotificationChannel, Period};

/// Validated cost-limit configuration.
///
/// Mirrors `openclaw-config/cost-limits.json`:
///
/// ```json
/// {
///   "limits": {
///     "daily":      { "amount": 10.0, "currency": "USD", "action": "warn", "notification": "telegram" },
///     "monthly":    { "amount": 100.0, "currency": "USD", "action": "throttle" },
///     "perRequest": { "amount": 2.0, "currency": "USD", "action": "confirm" }
///   },
///   "notifications": { "enabled": true, "thresholds": [50, 75, 90, 100], "channels": ["telegram"] },
///   "tracking": { "enabled": true, "logFile": "~/.openclaw/logs/costs.log" }
/// }
/// ```
///
/// Only obtainable through `TryFrom<serde_json::Value>` (see `validate.rs`),
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CostConfig {
    limits: BTreeMap<String, CostLimit>,
    notifications: Map<String, Value>,
    tracking: Map<String, Value>,
}

/// A single threshold under `limits.<period>`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostLimit {
    /// Finite, non-negative.
    pub amount: f64,
    pub currency: String,
    pub action: LimitAction,
    /// `none` when the key is absent.
    pub notification: NotificationChannel,
}

impl CostConfig {
    /// Assemble a config from parts that have already been validated.
    pub(crate) fn new_unchecked(
        limits: BTreeMap<String, CostLimit>,
        notifications: Map<String, Value>,
        tracking: Map<String, Value>,
    ) -> Self {
        Self {
            limits,
            notifications,
            tracking,
        }
    }

    /// All configured limits keyed by period name, including periods the
    /// monitor does not evaluate.
    pub fn limits(&self) -> &BTreeMap<String, CostLimit> {
        &self.limits
    }

    pub fn limit(&self, key: &str) -> Option<&CostLimit> {
        self.limits.get(key)
    }

    pub fn limit_for(&self, period: Period) -> Option<&CostLimit> {
        self.limit(period.key())
    }

    /// Raw `notifications` map, as written in the file.
    pub fn notifications(&self) -> &Map<String, Value> {
        &self.notifications
    }

    /// Raw `tracking` map, as written in the file.
    pub fn tracking(&self) -> &Map<String, Value> {
        &self.tracking
    }

    /// Limits whose keys are loaded but never compared.
    pub fn unevaluated_periods(&self) -> impl Iterator<Item = &str> {
        self.limits
            .keys()
            .map(String::as_str)
            .filter(|k| !Period::is_evaluated(k))
    }

    /// Typed view of `notifications`. Mistyped keys fall back to defaults.
    pub fn notification_settings(&self) -> NotificationSettings {
        settings_from_map(&self.notifications)
    }

    /// Typed view of `tracking`. Mistyped keys fall back to defaults.
    pub fn tracking_settings(&self) -> TrackingSettings {
        settings_from_map(&self.tracking)
    }
}

fn settings_from_map<T>(map: &Map<String, Value>) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    serde_json::from_value(Value::Object(map.clone())).unwrap_or_default()
}

/// `notifications` section.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub enabled: bool,

    /// Percent-of-limit marks, e.g. `[50, 75, 90, 100]`.
    pub thresholds: Vec<f64>,

    pub channels: Vec<String>,
}

/// `tracking` section.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TrackingSettings {
    pub enabled: bool,

    #[serde(rename = "logFile")]
    pub log_file: Option<String>,
}
