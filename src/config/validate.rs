// src/config/validate.rs

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::config::model::{CostConfig, CostLimit};
use crate::errors::{CostMonitorError, Result};
use crate::types::{LimitAction, NotificationChannel};

/// Walks the parsed document field by field rather than deserializing a
/// raw struct, so every error carries the dotted path of the offending field.
impl TryFrom<Value> for CostConfig {
    type Error = CostMonitorError;

    fn try_from(doc: Value) -> std::result::Result<Self, Self::Error> {
        let mut root = into_object(doc, "$")?;

        let limits = match root.remove("limits") {
            Some(v) => validate_limits(v)?,
            None => return Err(missing("limits")),
        };
        let notifications = required_object(&mut root, "notifications")?;
        let tracking = required_object(&mut root, "tracking")?;

        Ok(CostConfig::new_unchecked(limits, notifications, tracking))
    }
}

fn validate_limits(value: Value) -> Result<BTreeMap<String, CostLimit>> {
    let raw = into_object(value, "limits")?;
    let mut limits = BTreeMap::new();
    for (period, entry) in raw {
        let limit = validate_limit(&period, entry)?;
        limits.insert(period, limit);
    }
    Ok(limits)
}

fn validate_limit(period: &str, value: Value) -> Result<CostLimit> {
    let base = format!("limits.{period}");
    let fields = into_object(value, &base)?;

    let amount = coerce_amount(fields.get("amount"), &format!("{base}.amount"))?;
    let currency = required_str(&fields, "currency", &base)?.to_string();

    let action = LimitAction::from(required_str(&fields, "action", &base)?);
    if !action.is_known() {
        warn!(period, %action, "unrecognised limit action; keeping it verbatim");
    }

    let notification = match fields.get("notification") {
        None | Some(Value::Null) => NotificationChannel::default(),
        Some(Value::String(s)) => NotificationChannel::from(s.as_str()),
        Some(other) => {
            return Err(CostMonitorError::schema(
                format!("{base}.notification"),
                format!("expected a string, got {}", kind(other)),
            ));
        }
    };
    if !notification.is_known() {
        warn!(period, %notification, "unrecognised notification channel; keeping it verbatim");
    }

    Ok(CostLimit {
        amount,
        currency,
        action,
        notification,
    })
}

/// Accept a JSON number or a numeric string; reject everything else.
fn coerce_amount(value: Option<&Value>, path: &str) -> Result<f64> {
    let amount = match value {
        None => return Err(missing(path)),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            CostMonitorError::schema(path, format!("{n} is not representable as a decimal"))
        })?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            CostMonitorError::schema(path, format!("expected a number, got string {s:?}"))
        })?,
        Some(other) => {
            return Err(CostMonitorError::schema(
                path,
                format!("expected a number, got {}", kind(other)),
            ));
        }
    };

    if !amount.is_finite() {
        return Err(CostMonitorError::schema(path, "amount must be finite"));
    }
    if amount < 0.0 {
        return Err(CostMonitorError::schema(
            path,
            format!("amount must be >= 0 (got {amount})"),
        ));
    }
    Ok(amount)
}

fn required_str<'a>(fields: &'a Map<String, Value>, key: &str, base: &str) -> Result<&'a str> {
    let path = format!("{base}.{key}");
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(CostMonitorError::schema(
            path,
            format!("expected a string, got {}", kind(other)),
        )),
        None => Err(missing(&path)),
    }
}

fn required_object(root: &mut Map<String, Value>, key: &str) -> Result<Map<String, Value>> {
    match root.remove(key) {
        Some(v) => into_object(v, key),
        None => Err(missing(key)),
    }
}

fn into_object(value: Value, path: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CostMonitorError::schema(
            path,
            format!("expected an object, got {}", kind(&other)),
        )),
    }
}

fn missing(path: &str) -> CostMonitorError {
    CostMonitorError::schema(path, "field required")
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActionKind, ChannelKind};
    use serde_json::json;

    fn valid_doc() -> Value {
        json!({
            "limits": {
                "daily": {"amount": 10.0, "currency": "USD", "action": "warn", "notification": "telegram"},
                "perRequest": {"amount": 2.0, "currency": "USD", "action": "confirm"}
            },
            "notifications": {"enabled": true},
            "tracking": {"enabled": false}
        })
    }

    fn path_of(doc: Value) -> String {
        CostConfig::try_from(doc)
            .unwrap_err()
            .field_path()
            .map(str::to_string)
            .unwrap_or_default()
    }

    #[test]
    fn valid_document_is_accepted() {
        let cfg = CostConfig::try_from(valid_doc()).unwrap();
        let daily = cfg.limit("daily").unwrap();
        assert_eq!(daily.amount, 10.0);
        assert_eq!(daily.notification.kind(), ChannelKind::Telegram);
        assert_eq!(cfg.limit("perRequest").unwrap().notification.kind(), ChannelKind::None);
    }

    #[test]
    fn numeric_string_amount_is_coerced() {
        let mut doc = valid_doc();
        doc["limits"]["daily"]["amount"] = json!("12.5");
        let cfg = CostConfig::try_from(doc).unwrap();
        assert_eq!(cfg.limit("daily").unwrap().amount, 12.5);
    }

    #[test]
    fn integer_amount_is_accepted() {
        let mut doc = valid_doc();
        doc["limits"]["daily"]["amount"] = json!(10);
        let cfg = CostConfig::try_from(doc).unwrap();
        assert_eq!(cfg.limit("daily").unwrap().amount, 10.0);
    }

    #[test]
    fn non_numeric_amount_names_field() {
        let mut doc = valid_doc();
        doc["limits"]["daily"]["amount"] = json!("ten dollars");
        assert_eq!(path_of(doc), "limits.daily.amount");

        let mut doc = valid_doc();
        doc["limits"]["daily"]["amount"] = json!(true);
        assert_eq!(path_of(doc), "limits.daily.amount");
    }

    #[test]
    fn negative_or_non_finite_amount_is_rejected() {
        let mut doc = valid_doc();
        doc["limits"]["daily"]["amount"] = json!(-1.0);
        assert_eq!(path_of(doc), "limits.daily.amount");

        let mut doc = valid_doc();
        doc["limits"]["daily"]["amount"] = json!("inf");
        assert_eq!(path_of(doc), "limits.daily.amount");
    }

    #[test]
    fn missing_required_fields_name_field() {
        let mut doc = valid_doc();
        doc["limits"]["perRequest"].as_object_mut().unwrap().remove("currency");
        assert_eq!(path_of(doc), "limits.perRequest.currency");

        let mut doc = valid_doc();
        doc["limits"]["daily"].as_object_mut().unwrap().remove("action");
        assert_eq!(path_of(doc), "limits.daily.action");

        let mut doc = valid_doc();
        doc["limits"]["daily"].as_object_mut().unwrap().remove("amount");
        assert_eq!(path_of(doc), "limits.daily.amount");
    }

    #[test]
    fn mistyped_sections_name_field() {
        let mut doc = valid_doc();
        doc["limits"] = json!([1, 2]);
        assert_eq!(path_of(doc), "limits");

        let mut doc = valid_doc();
        doc.as_object_mut().unwrap().remove("limits");
        assert_eq!(path_of(doc), "limits");

        let mut doc = valid_doc();
        doc["tracking"] = json!("on");
        assert_eq!(path_of(doc), "tracking");

        let mut doc = valid_doc();
        doc["limits"]["daily"]["notification"] = json!(3);
        assert_eq!(path_of(doc), "limits.daily.notification");

        assert_eq!(path_of(json!([])), "$");
    }

    #[test]
    fn null_notification_defaults_to_none() {
        let mut doc = valid_doc();
        doc["limits"]["daily"]["notification"] = Value::Null;
        let cfg = CostConfig::try_from(doc).unwrap();
        assert_eq!(cfg.limit("daily").unwrap().notification.kind(), ChannelKind::None);
    }

    #[test]
    fn unknown_action_is_kept() {
        let mut doc = valid_doc();
        doc["limits"]["daily"]["action"] = json!("escalate");
        let cfg = CostConfig::try_from(doc).unwrap();
        let action = &cfg.limit("daily").unwrap().action;
        assert_eq!(action.kind(), ActionKind::Other);
        assert_eq!(action.as_str(), "escalate");
    }
}
