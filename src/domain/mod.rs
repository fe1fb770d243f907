//! Domain Layer
//!
//! Pure calculation logic without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ImpactFactor, EquivalentKind)
//! - `entities/` - Factor table and report types
//! - `services/` - Calculator and industry comparison

pub mod entities;
pub mod services;
pub mod value_objects;
