// src/source/mod.rs

//! Where actual spend figures come from.
//!
//! The monitor talks to a `CostSource` instead of a billing API directly,
//! so tests can plug in a fake that returns canned figures (see the
//! `cost-monitor-test-utils` crate). Authentication, retries and backoff
//! belong to the source implementation, never to the monitor.

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::types::Period;

/// Actual spend per period name, produced fresh on every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actuals {
    spend: BTreeMap<String, f64>,
}

impl Actuals {
    pub fn get(&self, period: &str) -> Option<f64> {
        self.spend.get(period).copied()
    }

    pub fn for_period(&self, period: Period) -> Option<f64> {
        self.get(period.key())
    }

    pub fn len(&self) -> usize {
        self.spend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spend.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Actuals {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            spend: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Trait abstracting how actual spend is obtained.
///
/// Implementations either return a complete mapping or fail; the monitor
/// treats any failure as fatal for the run.
pub trait CostSource {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<Actuals>;
}

/// Placeholder figures used until a billing integration is wired in.
pub const PLACEHOLDER_DAILY: f64 = 3.42;
pub const PLACEHOLDER_MONTHLY: f64 = 24.18;

/// Source that always reports the same figures.
#[derive(Debug, Clone)]
pub struct FixedCostSource {
    actuals: Actuals,
}

impl FixedCostSource {
    pub fn new(actuals: Actuals) -> Self {
        Self { actuals }
    }

    /// `{daily: 3.42, monthly: 24.18}`.
    pub fn placeholder() -> Self {
        Self::new(Actuals::from_iter([
            (Period::Daily.key(), PLACEHOLDER_DAILY),
            (Period::Monthly.key(), PLACEHOLDER_MONTHLY),
        ]))
    }
}

impl Default for FixedCostSource {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl CostSource for FixedCostSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn fetch(&self) -> Result<Actuals> {
        Ok(self.actuals.clone())
    }
}
