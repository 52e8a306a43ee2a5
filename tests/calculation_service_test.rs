//! Tests for CalculationService

use rstest::rstest;

use resourcecalc::application::{ApplicationError, CalculationService};
use resourcecalc::domain::DomainError;
use resourcecalc::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn invalid_field(err: ApplicationError) -> &'static str {
    match err {
        ApplicationError::Domain(DomainError::InvalidInput { field, .. }) => field,
        other => panic!("expected invalid input, got {:?}", other),
    }
}

#[test]
fn given_reference_capacity_when_calculating_then_two_heads_at_full_utilization() {
    let service = CalculationService::default();

    let calc = service.capacity(100.0, 10.0, 5).unwrap();

    assert_eq!(calc.command, "capacity");
    assert_eq!(calc.input.periods(), 5);
    assert_eq!(calc.result.total_throughput, 50.0);
    assert_eq!(calc.result.headcount_needed, 2.0);
    assert_eq!(calc.result.utilization, 1.0);
}

#[test]
fn given_zero_demand_when_calculating_capacity_then_invalid_input_cites_demand() {
    let service = CalculationService::default();

    let err = service.capacity(0.0, 10.0, 5).unwrap_err();

    assert_eq!(err.to_string(), "demand must be > 0");
    assert_eq!(invalid_field(err), "demand");
}

#[test]
fn given_no_utilization_when_costing_then_default_applies() {
    let service = CalculationService::default();

    let calc = service.cost(5, 1000.0, 3, None).unwrap();

    assert_eq!(calc.input.utilization(), 0.85);
    assert_eq!(calc.result.cost_per_period, 4250.0);
    assert_eq!(calc.result.total_cost, 12750.0);
    assert_eq!(calc.result.effective_utilization, 0.85);
}

#[test]
fn given_explicit_utilization_when_costing_then_it_overrides_default() {
    let calc = CalculationService::new().cost(4, 100.0, 2, Some(1.0)).unwrap();

    assert_eq!(calc.result.effective_utilization, 1.0);
    assert_eq!(calc.result.total_cost, 800.0);
}

#[test]
fn given_counts_beyond_u32_when_calculating_then_accepted() {
    let service = CalculationService::new();

    let capacity = service.capacity(100.0, 10.0, 5_000_000_000).unwrap();
    let cost = service.cost(5_000_000_000, 1.0, 1, Some(0.5)).unwrap();

    assert_eq!(capacity.input.periods(), 5_000_000_000);
    assert_eq!(cost.result.total_cost, 2.5e9);
}

#[rstest]
#[case(0, 1000.0, 3, None, "headcount")]
#[case(5, -1.0, 3, None, "rate_per_fte")]
#[case(5, 1000.0, -3, None, "periods")]
#[case(5, 1000.0, 3, Some(0.0), "utilization")]
#[case(5, 1000.0, 3, Some(1.01), "utilization")]
fn given_invalid_cost_input_when_costing_then_first_violation_is_reported(
    #[case] headcount: i64,
    #[case] rate: f64,
    #[case] periods: i64,
    #[case] utilization: Option<f64>,
    #[case] field: &str,
) {
    let err = CalculationService::default()
        .cost(headcount, rate, periods, utilization)
        .unwrap_err();
    assert_eq!(invalid_field(err), field);
}

#[test]
fn given_reference_timeline_when_calculating_then_twelve_periods() {
    let calc = CalculationService::default().timeline(120.0, 10.0).unwrap();

    assert_eq!(calc.command, "timeline");
    assert_eq!(calc.result.periods_needed, 12);
    assert_eq!(calc.result.avg_throughput, 10.0);
}

#[test]
fn given_nan_scope_when_calculating_timeline_then_rejected() {
    let err = CalculationService::default()
        .timeline(f64::NAN, 10.0)
        .unwrap_err();
    assert_eq!(err.to_string(), "scope must be a finite number");
}

#[test]
fn given_calculation_when_displayed_then_matches_result_text() {
    let calc = CalculationService::default().capacity(100.0, 10.0, 5).unwrap();
    assert_eq!(
        calc.to_string(),
        "Headcount Needed: 2.00\nTotal Throughput: 50.00\nUtilization: 100.00%"
    );
}
