//! Domain layer: validated inputs and the pure calculators
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod capacity;
pub mod cost;
pub mod error;
pub mod timeline;
mod validate;

pub use capacity::{CapacityInput, CapacityResult};
pub use cost::{CostInput, CostResult, DEFAULT_UTILIZATION};
pub use error::{DomainError, DomainResult};
pub use timeline::{TimelineInput, TimelineResult};
