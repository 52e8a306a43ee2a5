//! resourcecalc: capacity, cost, and timeline point estimates.
//!
//! Layers, innermost first:
//! - [`domain`]: validated inputs and pure calculators
//! - [`application`]: the calculation service, settings-aware
//! - [`cli`]: argument parsing, dispatch, output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
