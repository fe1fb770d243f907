//! Domain Entities
//!
//! - `ImpactFactorTable` - per-garment factors and equivalent divisors
//! - `ImpactReport` / `CollectionReport` - calculator output

mod factor_table;
mod impact_report;

pub use factor_table::{ImpactFactorTable, ImpactFactorTableBuilder};
pub use impact_report::{CollectionReport, ImpactReport, ImpactTotals};
