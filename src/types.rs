// src/types.rs

use std::fmt;
use std::str::FromStr;

/// Accounting window that drives alerting.
///
/// Only `daily` and `monthly` are evaluated. Other period keys in the
/// config (e.g. `perRequest`) are loaded but never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Daily,
    Monthly,
}

impl Period {
    /// Evaluation order used by the monitor.
    pub const EVALUATED: [Period; 2] = [Period::Daily, Period::Monthly];

    /// Key used in the config `limits` map and in `Actuals`.
    pub fn key(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Monthly => "monthly",
        }
    }

    /// Capitalised label for report lines.
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Monthly => "Monthly",
        }
    }

    /// Whether a `limits` key is one the monitor evaluates.
    pub fn is_evaluated(key: &str) -> bool {
        Self::EVALUATED.iter().any(|p| p.key() == key)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Period::Daily),
            "monthly" => Ok(Period::Monthly),
            other => Err(format!(
                "unrecognised period: {other} (expected \"daily\" or \"monthly\")"
            )),
        }
    }
}

/// Classified remediation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Warn,
    Throttle,
    Confirm,
    Other,
}

/// Remediation label attached to a limit.
///
/// Informational only: nothing here enforces it. The label is kept exactly
/// as written; `kind` is the case-insensitive classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitAction {
    kind: ActionKind,
    label: String,
}

impl LimitAction {
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }

    pub fn is_known(&self) -> bool {
        self.kind != ActionKind::Other
    }
}

impl From<&str> for LimitAction {
    fn from(s: &str) -> Self {
        let kind = match s.trim().to_lowercase().as_str() {
            "warn" => ActionKind::Warn,
            "throttle" => ActionKind::Throttle,
            "confirm" => ActionKind::Confirm,
            _ => ActionKind::Other,
        };
        Self {
            kind,
            label: s.to_string(),
        }
    }
}

impl fmt::Display for LimitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Classified delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    None,
    Telegram,
    Slack,
    Email,
    Webhook,
    Other,
}

/// Delivery channel named by a limit's `notification` field, kept as
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannel {
    kind: ChannelKind,
    label: String,
}

impl NotificationChannel {
    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }

    pub fn is_known(&self) -> bool {
        self.kind != ChannelKind::Other
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self {
            kind: ChannelKind::None,
            label: "none".to_string(),
        }
    }
}

impl From<&str> for NotificationChannel {
    fn from(s: &str) -> Self {
        let kind = match s.trim().to_lowercase().as_str() {
            "none" => ChannelKind::None,
            "telegram" => ChannelKind::Telegram,
            "slack" => ChannelKind::Slack,
            "email" => ChannelKind::Email,
            "webhook" => ChannelKind::Webhook,
            _ => ChannelKind::Other,
        };
        Self {
            kind,
            label: s.to_string(),
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
