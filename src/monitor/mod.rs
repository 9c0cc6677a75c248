// src/monitor/mod.rs

//! Threshold comparison.
//!
//! One linear pass per invocation: check the config exists, load it, fetch
//! actuals once, then compare `daily` and `monthly` in that order. There is
//! no retry anywhere; every failure ends the run with status 1.

pub mod report;

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::config::loader::load_config_with;
use crate::config::model::{CostConfig, CostLimit};
use crate::errors::{CostMonitorError, Result};
use crate::fs::FileSystem;
use crate::source::{Actuals, CostSource};
use crate::types::Period;

/// Binary outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    WithinLimits,
    OverLimit,
}

impl RunStatus {
    /// Process exit status: 0 or 1, nothing else.
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::WithinLimits => 0,
            RunStatus::OverLimit => 1,
        }
    }
}

/// Result of comparing one recognised period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodCheck {
    pub period: Period,
    pub actual: f64,
    pub limit: CostLimit,
}

impl PeriodCheck {
    /// Strict comparison with no tolerance: spending exactly the limit is
    /// still within it.
    pub fn exceeded(&self) -> bool {
        self.actual > self.limit.amount
    }
}

pub struct CostMonitor<'a> {
    fs: &'a dyn FileSystem,
    source: &'a dyn CostSource,
    config_path: PathBuf,
}

impl<'a> CostMonitor<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        source: &'a dyn CostSource,
        config_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            source,
            config_path: config_path.into(),
        }
    }

    /// Load the config, fetch actuals, and write the report to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<RunStatus> {
        writeln!(out, "{}", report::HEADER)?;

        let config = self.load()?;

        debug!(source = self.source.name(), "fetching actual costs");
        let actuals = self.source.fetch()?;
        if actuals.is_empty() {
            warn!(source = self.source.name(), "cost source reported no figures");
        }
        debug!(periods = actuals.len(), "fetched actual costs");

        evaluate(&config, &actuals, out)
    }

    /// Load and print the config without contacting the cost source.
    pub fn dry_run(&self, out: &mut dyn Write) -> Result<RunStatus> {
        let config = self.load()?;
        report::print_dry_run(&config, out)?;
        Ok(RunStatus::WithinLimits)
    }

    fn load(&self) -> Result<CostConfig> {
        if !self.fs.exists(&self.config_path) {
            return Err(CostMonitorError::ConfigNotFound(self.config_path.clone()));
        }
        info!(path = %self.config_path.display(), "loading cost config");
        load_config_with(self.fs, &self.config_path)
    }
}

/// Compare each configured recognised period against its actual and write
/// status/alert lines.
///
/// Periods other than `daily`/`monthly` are never evaluated, even when
/// configured.
pub fn evaluate(config: &CostConfig, actuals: &Actuals, out: &mut dyn Write) -> Result<RunStatus> {
    for key in config.unevaluated_periods() {
        debug!(period = key, "configured limit is not evaluated");
    }

    let mut over_limit = false;
    for period in Period::EVALUATED {
        let Some(check) = check_period(config, actuals, period)? else {
            continue;
        };

        writeln!(out, "{}", report::status_line(period, check.actual, &check.limit))?;
        debug!(
            %period,
            actual = check.actual,
            limit = check.limit.amount,
            "compared spend against limit"
        );

        if check.exceeded() {
            warn!(
                %period,
                actual = check.actual,
                limit = check.limit.amount,
                action = %check.limit.action,
                "cost limit exceeded"
            );
            writeln!(out, "{}", report::alert_line(period, &check.limit))?;
            over_limit = true;
        }
    }

    if over_limit {
        Ok(RunStatus::OverLimit)
    } else {
        writeln!(out, "{}", report::WITHIN_LIMITS)?;
        Ok(RunStatus::WithinLimits)
    }
}

/// `None` when the period has no configured limit.
pub fn check_period(
    config: &CostConfig,
    actuals: &Actuals,
    period: Period,
) -> Result<Option<PeriodCheck>> {
    let Some(limit) = config.limit_for(period) else {
        return Ok(None);
    };

    let actual = actuals
        .for_period(period)
        .ok_or(CostMonitorError::MissingActual(period))?;
    if !actual.is_finite() || actual < 0.0 {
        return Err(CostMonitorError::InvalidActual {
            period,
            value: actual,
        });
    }

    Ok(Some(PeriodCheck {
        period,
        actual,
        limit: limit.clone(),
    }))
}

/// Run the monitor and map every outcome onto an exit status.
///
/// Errors are written to `out` as a single line; the status is then 1.
pub fn execute(monitor: &CostMonitor<'_>, out: &mut dyn Write, dry_run: bool) -> u8 {
    let result = if dry_run {
        monitor.dry_run(out)
    } else {
        monitor.run(out)
    };

    match result {
        Ok(status) => status.exit_code(),
        Err(err) => {
            error!(error = %err, "cost monitor run failed");
            // stdout may itself be the thing that failed; nothing else to do.
            let _ = writeln!(out, "{}", report::error_line(&err));
            1
        }
    }
}
