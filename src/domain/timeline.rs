//! Periods needed to burn down a fixed scope.

use std::fmt;

use serde::Serialize;

use super::error::DomainResult;
use super::validate::positive_real;

/// Validated timeline input. Only constructible through [`TimelineInput::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineInput {
    scope: f64,
    throughput: f64,
}

impl TimelineInput {
    pub fn new(scope: f64, throughput: f64) -> DomainResult<Self> {
        let scope = positive_real("scope", scope)?;
        let throughput = positive_real("throughput", throughput)?;
        Ok(Self { scope, throughput })
    }

    pub fn scope(&self) -> f64 {
        self.scope
    }

    pub fn throughput(&self) -> f64 {
        self.throughput
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineResult {
    pub periods_needed: u64,
    pub avg_throughput: f64,
}

impl fmt::Display for TimelineResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Periods Needed: {}", self.periods_needed)?;
        write!(f, "Average Throughput: {:.2}", self.avg_throughput)
    }
}

/// `periods_needed = ceil(scope / throughput)`, never less than one.
///
/// The float-to-int cast saturates, so an overflowing ratio yields `u64::MAX`.
pub fn calculate(input: &TimelineInput) -> TimelineResult {
    // ratio can underflow to 0.0 for extreme inputs; scope > 0 still needs a period
    let periods_needed = ((input.scope / input.throughput).ceil() as u64).max(1);
    TimelineResult {
        periods_needed,
        avg_throughput: input.throughput,
    }
}
