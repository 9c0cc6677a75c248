// src/monitor/report.rs

//! Human-readable report lines written to stdout.

use std::io::Write;

use crate::config::model::{CostConfig, CostLimit};
use crate::errors::Result;
use crate::types::Period;

pub const HEADER: &str = "📊 Monitoring infrastructure costs...";
pub const WITHIN_LIMITS: &str = "✅ Costs are within defined limits.";

/// Symbol (or code plus space) printed in front of an amount.
pub fn currency_prefix(currency: &str) -> String {
    match currency.trim().to_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        other => format!("{other} "),
    }
}

fn period_icon(period: Period) -> &'static str {
    match period {
        Period::Daily => "📅",
        Period::Monthly => "🗓️ ",
    }
}

pub fn status_line(period: Period, actual: f64, limit: &CostLimit) -> String {
    let prefix = currency_prefix(&limit.currency);
    format!(
        "{} {}: {prefix}{actual:.2} / {prefix}{:.2}",
        period_icon(period),
        period.label(),
        limit.amount,
    )
}

pub fn alert_line(period: Period, limit: &CostLimit) -> String {
    format!(
        "🚨 ALERT: {} limit exceeded! Action: {}",
        period.label(),
        limit.action
    )
}

pub fn error_line(message: impl std::fmt::Display) -> String {
    format!("❌ Error: {message}")
}

/// Print every configured limit and the settings sections, without
/// evaluating anything.
pub fn print_dry_run(cfg: &CostConfig, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "cost-monitor dry-run")?;
    writeln!(out)?;

    writeln!(out, "limits ({}):", cfg.limits().len())?;
    for (key, limit) in cfg.limits() {
        let prefix = currency_prefix(&limit.currency);
        writeln!(out, "  - {key}")?;
        writeln!(out, "      amount: {prefix}{:.2}", limit.amount)?;
        writeln!(out, "      action: {}", limit.action)?;
        writeln!(out, "      notification: {}", limit.notification)?;
        if !Period::is_evaluated(key) {
            writeln!(out, "      evaluated: no")?;
        }
    }

    let notifications = cfg.notification_settings();
    writeln!(out)?;
    writeln!(out, "notifications:")?;
    writeln!(out, "  enabled: {}", notifications.enabled)?;
    if !notifications.thresholds.is_empty() {
        writeln!(out, "  thresholds: {:?}", notifications.thresholds)?;
    }
    if !notifications.channels.is_empty() {
        writeln!(out, "  channels: {:?}", notifications.channels)?;
    }

    let tracking = cfg.tracking_settings();
    writeln!(out, "tracking:")?;
    writeln!(out, "  enabled: {}", tracking.enabled)?;
    if let Some(ref log_file) = tracking.log_file {
        writeln!(out, "  log_file: {log_file}")?;
    }

    Ok(())
}
