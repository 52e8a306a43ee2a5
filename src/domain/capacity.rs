//! Headcount and utilization from demand and per-person throughput.

use std::fmt;

use serde::Serialize;

use super::error::DomainResult;
use super::validate::{positive_count, positive_real};

/// Validated capacity input. Only constructible through [`CapacityInput::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityInput {
    demand: f64,
    throughput_per_person: f64,
    periods: u64,
}

impl CapacityInput {
    /// Validate in field order: demand, throughput, periods.
    pub fn new(demand: f64, throughput_per_person: f64, periods: i64) -> DomainResult<Self> {
        let demand = positive_real("demand", demand)?;
        let throughput_per_person = positive_real("throughput_per_person", throughput_per_person)?;
        let periods = positive_count("periods", periods)?;
        Ok(Self {
            demand,
            throughput_per_person,
            periods,
        })
    }

    pub fn demand(&self) -> f64 {
        self.demand
    }

    pub fn throughput_per_person(&self) -> f64 {
        self.throughput_per_person
    }

    pub fn periods(&self) -> u64 {
        self.periods
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityResult {
    pub headcount_needed: f64,
    pub total_throughput: f64,
    pub utilization: f64,
}

impl fmt::Display for CapacityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Headcount Needed: {:.2}", self.headcount_needed)?;
        writeln!(f, "Total Throughput: {:.2}", self.total_throughput)?;
        write!(f, "Utilization: {:.2}%", self.utilization * 100.0)
    }
}

/// Compute headcount needed over the given periods.
///
/// Utilization is `demand / (headcount_needed * total_throughput)` capped at 1.0.
/// Because `headcount_needed` is derived from the same two values, this is 1.0
/// for every valid input (modulo rounding). The formula is kept as-is for
/// output compatibility; it only becomes meaningful once headcount is supplied
/// externally rather than derived.
pub fn calculate(input: &CapacityInput) -> CapacityResult {
    let total_throughput = input.throughput_per_person * input.periods as f64;
    let headcount_needed = input.demand / total_throughput;
    let utilization = if headcount_needed != 0.0 {
        (input.demand / (headcount_needed * total_throughput)).min(1.0)
    } else {
        0.0
    };
    CapacityResult {
        headcount_needed,
        total_throughput,
        utilization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn computes_reference_scenario() {
        let input = CapacityInput::new(100.0, 10.0, 5).unwrap();
        let result = calculate(&input);
        assert_eq!(result.total_throughput, 50.0);
        assert_eq!(result.headcount_needed, 2.0);
        assert_eq!(result.utilization, 1.0);
    }

    #[rstest]
    #[case(0.0, 10.0, 5, "demand")]
    #[case(-1.0, 10.0, 5, "demand")]
    #[case(100.0, 0.0, 5, "throughput_per_person")]
    #[case(100.0, 10.0, 0, "periods")]
    #[case(100.0, 10.0, -2, "periods")]
    // first violation wins
    #[case(0.0, 0.0, 0, "demand")]
    #[case(1.0, -1.0, 0, "throughput_per_person")]
    fn rejects_first_invalid_field(
        #[case] demand: f64,
        #[case] throughput: f64,
        #[case] periods: i64,
        #[case] field: &str,
    ) {
        let err = CapacityInput::new(demand, throughput, periods).unwrap_err();
        assert_eq!(err.field(), field);
        assert_eq!(err.to_string(), format!("{field} must be > 0"));
    }

    #[test]
    fn underflowing_headcount_reports_zero_utilization() {
        let input = CapacityInput::new(f64::MIN_POSITIVE, f64::MAX, 2).unwrap();
        let result = calculate(&input);
        assert_eq!(result.headcount_needed, 0.0);
        assert_eq!(result.utilization, 0.0);
    }

    #[test]
    fn accepts_periods_beyond_u32() {
        let input = CapacityInput::new(100.0, 10.0, 5_000_000_000).unwrap();
        assert_eq!(input.periods(), 5_000_000_000);
        let result = calculate(&input);
        assert_eq!(result.total_throughput, 5.0e10);
        assert_eq!(result.headcount_needed, 100.0 / 5.0e10);
    }

    #[test]
    fn overflowing_total_throughput_reports_zero_utilization() {
        let result = calculate(&CapacityInput::new(100.0, 1e308, 10).unwrap());
        assert_eq!(result.total_throughput, f64::INFINITY);
        assert_eq!(result.headcount_needed, 0.0);
        assert_eq!(result.utilization, 0.0);
    }

    #[test]
    fn renders_pretty_text() {
        let result = calculate(&CapacityInput::new(70.0, 10.0, 4).unwrap());
        assert_eq!(
            result.to_string(),
            "Headcount Needed: 1.75\nTotal Throughput: 40.00\nUtilization: 100.00%"
        );
    }
}
