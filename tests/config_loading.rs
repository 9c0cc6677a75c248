mod common;
use crate::common::init_tracing;

use std::io::Write;

use cost_monitor::config::{load_config, CostConfig};
use cost_monitor::errors::CostMonitorError;
use cost_monitor::types::{ActionKind, ChannelKind};
use cost_monitor_test_utils::builders::{CostConfigBuilder, CostLimitBuilder};
use serde_json::json;
use tempfile::NamedTempFile;

const FULL_FIXTURE: &str = r#"
{
    "limits": {
        "daily": {"amount": 10.0, "currency": "USD", "action": "warn", "notification": "telegram"},
        "monthly": {"amount": 100.0, "currency": "USD", "action": "throttle", "notification": "telegram"},
        "perRequest": {"amount": 2.0, "currency": "USD", "action": "confirm"}
    },
    "notifications": {"enabled": true, "thresholds": [50, 75, 90, 100], "channels": ["telegram"]},
    "tracking": {"enabled": true, "logFile": "~/.openclaw/logs/costs.log"}
}
"#;

fn temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn expect_schema_error(contents: &str, expected_path: &str) {
    let file = temp_config(contents);
    match load_config(file.path()) {
        Err(CostMonitorError::SchemaValidation { path, message }) => {
            assert_eq!(path, expected_path, "message: {message}");
        }
        Err(e) => panic!("Expected SchemaValidation error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn full_fixture_loads_every_field() {
    init_tracing();

    let file = temp_config(FULL_FIXTURE);
    let cfg = load_config(file.path()).unwrap();

    let daily = cfg.limit("daily").unwrap();
    assert_eq!(daily.amount, 10.0);
    assert_eq!(daily.currency, "USD");
    assert_eq!(daily.action.kind(), ActionKind::Warn);
    assert_eq!(daily.action.as_str(), "warn");
    assert_eq!(daily.notification.kind(), ChannelKind::Telegram);
    assert_eq!(daily.notification.as_str(), "telegram");

    assert_eq!(cfg.limit("monthly").unwrap().action.kind(), ActionKind::Throttle);

    let per_request = cfg.limit("perRequest").unwrap();
    assert_eq!(per_request.amount, 2.0);
    assert_eq!(per_request.action.kind(), ActionKind::Confirm);
    assert_eq!(per_request.notification.kind(), ChannelKind::None);

    assert_eq!(cfg.notifications()["enabled"], json!(true));
    assert_eq!(cfg.tracking()["enabled"], json!(true));

    let notifications = cfg.notification_settings();
    assert_eq!(notifications.thresholds, vec![50.0, 75.0, 90.0, 100.0]);
    assert_eq!(notifications.channels, vec!["telegram".to_string()]);
    assert_eq!(
        cfg.tracking_settings().log_file.as_deref(),
        Some("~/.openclaw/logs/costs.log")
    );
}

#[test]
fn builder_output_round_trips_through_disk() {
    init_tracing();

    let builder = CostConfigBuilder::new()
        .with_limit("daily", CostLimitBuilder::new(5.0, "warn").currency("EUR"))
        .with_notifications(false, &[80], &["slack"])
        .with_tracking(false, "/tmp/costs.log");
    let file = temp_config(&builder.to_json());

    let from_disk = load_config(file.path()).unwrap();
    assert_eq!(from_disk, builder.build());
    assert_eq!(from_disk.limit("daily").unwrap().currency, "EUR");
}

#[test]
fn notification_defaults_to_none_when_omitted() {
    init_tracing();

    let cfg: CostConfig = CostConfigBuilder::new()
        .with_limit("daily", CostLimitBuilder::new(5.0, "warn"))
        .build();
    assert_eq!(cfg.limit("daily").unwrap().notification.kind(), ChannelKind::None);
    assert_eq!(cfg.limit("daily").unwrap().notification.to_string(), "none");
}

#[test]
fn non_numeric_amount_is_rejected() {
    init_tracing();

    let doc = CostConfigBuilder::new()
        .with_limit("daily", CostLimitBuilder::new(0.0, "warn").raw_amount(json!("lots")))
        .to_json();
    expect_schema_error(&doc, "limits.daily.amount");
}

#[test]
fn missing_limits_is_rejected() {
    init_tracing();

    expect_schema_error(r#"{"notifications": {}, "tracking": {}}"#, "limits");
}

#[test]
fn missing_currency_or_action_is_rejected() {
    init_tracing();

    let doc = CostConfigBuilder::new()
        .with_limit("monthly", CostLimitBuilder::new(1.0, "warn").without("currency"))
        .to_json();
    expect_schema_error(&doc, "limits.monthly.currency");

    let doc = CostConfigBuilder::new()
        .with_limit("monthly", CostLimitBuilder::new(1.0, "warn").without("action"))
        .to_json();
    expect_schema_error(&doc, "limits.monthly.action");
}

#[test]
fn missing_settings_sections_are_rejected() {
    init_tracing();

    expect_schema_error(r#"{"limits": {}, "tracking": {}}"#, "notifications");
    expect_schema_error(r#"{"limits": {}, "notifications": {}}"#, "tracking");
}

#[test]
fn malformed_json_is_rejected() {
    init_tracing();

    let file = temp_config("{ not json");
    match load_config(file.path()) {
        Err(CostMonitorError::SchemaValidation { path, message }) => {
            assert_eq!(path, "$");
            assert!(message.contains("malformed JSON"), "{message}");
            assert!(message.contains("column"), "{message}");
        }
        Err(e) => panic!("Expected SchemaValidation error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
