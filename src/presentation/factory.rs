//! Calculator Factory
//!
//! Builds calculators from a resolved configuration. This is the dependency
//! injection point: everything downstream receives the table explicitly.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::services::ImpactCalculator;
use crate::error::ConfigResult;
use crate::infrastructure::FactorTableStore;

/// Calculator over the table described by `config`
pub fn create_calculator(config: &Config) -> ConfigResult<ImpactCalculator> {
    let table = config.build_table()?;
    Ok(ImpactCalculator::new(Arc::new(table)))
}

/// Reloadable store seeded with the table described by `config`
pub fn create_table_store(config: &Config) -> ConfigResult<FactorTableStore> {
    Ok(FactorTableStore::new(config.build_table()?))
}
