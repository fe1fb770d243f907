//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod equivalent;
mod impact_factor;

pub use equivalent::{EquivalentKind, Metric};
pub use impact_factor::ImpactFactor;
