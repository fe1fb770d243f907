//! garment-impact - sustainability impact calculator for digital fashion
//!
//! Converts a garment choice (category, material, quantity) into the water,
//! CO2, chemicals and waste a digital garment saves over a physical one, plus
//! human-relatable equivalents such as showers or car miles.
//!
//! The calculator is a pure function over an explicitly supplied
//! [`ImpactFactorTable`]:
//!
//! ```
//! use garment_impact::{Category, GarmentDescriptor, ImpactCalculator, ImpactTotals, Material};
//!
//! let calc = ImpactCalculator::with_defaults();
//! let dress = GarmentDescriptor::new(Category::Dress, Material::Cotton, 2).unwrap();
//! let report = calc.compute_impact(&dress).unwrap();
//! assert_eq!(report.water_saved_liters(), 10_000.0);
//! ```

pub mod config;
pub mod defaults;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod models;
pub mod presentation;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, LoadedConfig};
pub use domain::entities::{
    CollectionReport, ImpactFactorTable, ImpactFactorTableBuilder, ImpactReport, ImpactTotals,
};
pub use domain::services::{
    compute_impact, IndustryBaseline, IndustryComparison, ImpactCalculator,
};
pub use domain::value_objects::{EquivalentKind, ImpactFactor, Metric};
pub use error::{ConfigError, ConfigResult, ImpactError, ImpactResult};
pub use infrastructure::FactorTableStore;
pub use models::{Category, GarmentDescriptor, GarmentInput, Material};
