use std::cell::Cell;

use cost_monitor::errors::{CostMonitorError, Result};
use cost_monitor::source::{Actuals, CostSource};

/// A fake cost source that:
/// - returns a fixed set of actuals
/// - records how many times it was asked.
pub struct RecordingCostSource {
    actuals: Actuals,
    calls: Cell<usize>,
}

impl RecordingCostSource {
    pub fn new<'a>(actuals: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            actuals: Actuals::from_iter(actuals),
            calls: Cell::new(0),
        }
    }

    /// `{daily: 3.42, monthly: 24.18}`.
    pub fn placeholder() -> Self {
        Self::new([("daily", 3.42), ("monthly", 24.18)])
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CostSource for RecordingCostSource {
    fn name(&self) -> &str {
        "recording"
    }

    fn fetch(&self) -> Result<Actuals> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.actuals.clone())
    }
}

/// A source that always fails, standing in for a network or auth error.
pub struct FailingCostSource {
    pub reason: String,
}

impl FailingCostSource {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl CostSource for FailingCostSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn fetch(&self) -> Result<Actuals> {
        Err(CostMonitorError::CostSourceUnavailable(self.reason.clone()))
    }
}
