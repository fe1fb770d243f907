//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::ImpactFactorTable;
use crate::domain::value_objects::{EquivalentKind, ImpactFactor};
use crate::error::ConfigResult;
use crate::models::{Category, Material};

use super::loader::{self, ConfigWarning};

/// Where the factor table starts from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seed with the built-in 25 factor entries before applying `[[factors]]`.
    /// Equivalent divisors always start from the built-in values.
    #[serde(default = "default_true")]
    pub use_defaults: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { use_defaults: true }
    }
}

fn default_true() -> bool {
    true
}

/// Equivalent divisor overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EquivalentsConfig {
    pub showers: Option<f64>,
    pub drinking_days: Option<f64>,
    pub car_miles: Option<f64>,
    pub car_km: Option<f64>,
    pub trees_planted: Option<f64>,
    pub smartphone_charges: Option<f64>,
}

impl EquivalentsConfig {
    /// Overrides that are set, in kind order
    pub fn overrides(&self) -> Vec<(EquivalentKind, f64)> {
        [
            (EquivalentKind::Showers, self.showers),
            (EquivalentKind::DrinkingDays, self.drinking_days),
            (EquivalentKind::CarMiles, self.car_miles),
            (EquivalentKind::CarKm, self.car_km),
            (EquivalentKind::TreesPlanted, self.trees_planted),
            (EquivalentKind::SmartphoneCharges, self.smartphone_charges),
        ]
        .into_iter()
        .filter_map(|(kind, value)| value.map(|v| (kind, v)))
        .collect()
    }
}

/// One `[[factors]]` overlay entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorEntry {
    #[serde(deserialize_with = "parse_name")]
    pub category: Category,
    #[serde(deserialize_with = "parse_name")]
    pub material: Material,
    pub water_liters: f64,
    pub co2_kg: f64,
    #[serde(default)]
    pub chemicals_kg: f64,
    #[serde(default)]
    pub waste_kg: f64,
}

/// Accept the same names (and aliases) as the command line
fn parse_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl FactorEntry {
    pub fn factor(&self) -> ImpactFactor {
        ImpactFactor::new(self.water_liters, self.co2_kg)
            .with_chemicals(self.chemicals_kg)
            .with_waste(self.waste_kg)
    }
}

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places in text output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    2
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "info" or "garment_impact=debug"
    #[serde(default)]
    pub level: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub equivalents: EquivalentsConfig,

    #[serde(default)]
    pub factors: Vec<FactorEntry>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ConfigResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config file (explicit path, env, project, user) and load it
    pub fn resolve(explicit: Option<&Path>, project_root: &Path) -> ConfigResult<LoadedConfig> {
        loader::resolve(explicit, project_root, &|key| std::env::var(key).ok())
    }

    /// Apply environment variable overrides (GARMENT_IMPACT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(
            self,
            &|key| std::env::var(key).ok(),
            &mut std::io::stderr(),
        )
    }

    /// Build the factor table this config describes.
    ///
    /// Starts from the built-in table (factor entries dropped when
    /// `use_defaults = false`), then applies divisor overrides and
    /// `[[factors]]` entries in file order.
    pub fn build_table(&self) -> ConfigResult<ImpactFactorTable> {
        let mut builder = ImpactFactorTable::defaults().to_builder();
        if !self.table.use_defaults {
            builder.clear_factors();
        }

        for (kind, divisor) in self.equivalents.overrides() {
            tracing::debug!(%kind, divisor, "overriding equivalent divisor");
            builder.register_equivalent(kind, divisor)?;
        }

        for entry in &self.factors {
            tracing::debug!(
                category = %entry.category,
                material = %entry.material,
                water = entry.water_liters,
                co2 = entry.co2_kg,
                "registering impact factor"
            );
            builder.register_impact_profile(entry.category, entry.material, entry.factor())?;
        }

        let table = builder.build();
        tracing::info!(
            entries = table.len(),
            equivalents = table.divisors().count(),
            "factor table ready"
        );
        Ok(table)
    }
}
