//! Application layer: services and use cases
//!
//! This layer wires settings into the pure domain calculators.

pub mod error;
pub mod service;

pub use error::{ApplicationError, ApplicationResult};
pub use service::{
    Calculation, CalculationService, CapacityCalculation, CostCalculation, TimelineCalculation,
};
