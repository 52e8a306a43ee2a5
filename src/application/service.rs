//! Calculation service: builds validated inputs and runs the calculators.

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{
    capacity, cost, timeline, CapacityInput, CapacityResult, CostInput, CostResult, DomainError,
    TimelineInput, TimelineResult, DEFAULT_UTILIZATION,
};

/// A validated input together with the result computed from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation<I, R> {
    pub command: &'static str,
    pub input: I,
    pub result: R,
}

impl<I, R: fmt::Display> fmt::Display for Calculation<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.result.fmt(f)
    }
}

pub type CapacityCalculation = Calculation<CapacityInput, CapacityResult>;
pub type CostCalculation = Calculation<CostInput, CostResult>;
pub type TimelineCalculation = Calculation<TimelineInput, TimelineResult>;

/// Runs one calculator per call. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationService;

impl CalculationService {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self))]
    pub fn capacity(
        &self,
        demand: f64,
        throughput: f64,
        periods: i64,
    ) -> ApplicationResult<CapacityCalculation> {
        let input = CapacityInput::new(demand, throughput, periods).map_err(rejected)?;
        let result = capacity::calculate(&input);
        debug!(?result, "capacity computed");
        Ok(Calculation {
            command: "capacity",
            input,
            result,
        })
    }

    /// Falls back to [`DEFAULT_UTILIZATION`] when `utilization` is `None`.
    #[instrument(skip(self))]
    pub fn cost(
        &self,
        headcount: i64,
        rate: f64,
        periods: i64,
        utilization: Option<f64>,
    ) -> ApplicationResult<CostCalculation> {
        let utilization = utilization.unwrap_or(DEFAULT_UTILIZATION);
        let input = CostInput::new(headcount, rate, periods, utilization).map_err(rejected)?;
        let result = cost::calculate(&input);
        debug!(?result, "cost computed");
        Ok(Calculation {
            command: "cost",
            input,
            result,
        })
    }

    #[instrument(skip(self))]
    pub fn timeline(&self, scope: f64, throughput: f64) -> ApplicationResult<TimelineCalculation> {
        let input = TimelineInput::new(scope, throughput).map_err(rejected)?;
        let result = timeline::calculate(&input);
        debug!(?result, "timeline computed");
        Ok(Calculation {
            command: "timeline",
            input,
            result,
        })
    }
}

fn rejected(e: DomainError) -> DomainError {
    debug!(field = e.field(), "input rejected: {}", e);
    e
}
