//! Total cost for a team at a given utilization.

use std::fmt;

use serde::Serialize;

use super::error::DomainResult;
use super::validate::{positive_count, positive_real, unit_fraction};

/// Utilization applied when the caller does not supply one.
pub const DEFAULT_UTILIZATION: f64 = 0.85;

/// Validated cost input. Only constructible through [`CostInput::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostInput {
    headcount: u64,
    rate_per_fte: f64,
    periods: u64,
    utilization: f64,
}

impl CostInput {
    /// Validate in field order: headcount, rate, periods, utilization.
    pub fn new(headcount: i64, rate_per_fte: f64, periods: i64, utilization: f64) -> DomainResult<Self> {
        let headcount = positive_count("headcount", headcount)?;
        let rate_per_fte = positive_real("rate_per_fte", rate_per_fte)?;
        let periods = positive_count("periods", periods)?;
        let utilization = unit_fraction("utilization", utilization)?;
        Ok(Self {
            headcount,
            rate_per_fte,
            periods,
            utilization,
        })
    }

    /// Same as [`CostInput::new`] with [`DEFAULT_UTILIZATION`].
    pub fn with_default_utilization(headcount: i64, rate_per_fte: f64, periods: i64) -> DomainResult<Self> {
        Self::new(headcount, rate_per_fte, periods, DEFAULT_UTILIZATION)
    }

    pub fn headcount(&self) -> u64 {
        self.headcount
    }

    pub fn rate_per_fte(&self) -> f64 {
        self.rate_per_fte
    }

    pub fn periods(&self) -> u64 {
        self.periods
    }

    pub fn utilization(&self) -> f64 {
        self.utilization
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostResult {
    pub total_cost: f64,
    pub cost_per_period: f64,
    pub effective_utilization: f64,
}

impl fmt::Display for CostResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Cost: {:.2}", self.total_cost)?;
        writeln!(f, "Cost / Period: {:.2}", self.cost_per_period)?;
        write!(f, "Effective Utilization: {:.2}%", self.effective_utilization * 100.0)
    }
}

pub fn calculate(input: &CostInput) -> CostResult {
    let cost_per_period = input.headcount as f64 * input.rate_per_fte * input.utilization;
    let total_cost = cost_per_period * input.periods as f64;
    CostResult {
        total_cost,
        cost_per_period,
        effective_utilization: input.utilization,
    }
}
