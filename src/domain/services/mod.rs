//! Domain Services
//!
//! Stateless services over an injected factor table. No I/O, no logging.

mod calculator;
mod industry;

pub use calculator::{compute_equivalents, compute_impact, ImpactCalculator};
pub use industry::{IndustryBaseline, IndustryComparison};
