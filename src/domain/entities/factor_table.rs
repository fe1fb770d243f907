//! Impact factor table
//!
//! The table is assembled with [`ImpactFactorTableBuilder`] during startup and
//! frozen into an [`ImpactFactorTable`], which has no mutating methods. Share
//! it behind an `Arc`; replacing it after startup goes through
//! [`FactorTableStore`](crate::infrastructure::FactorTableStore).

use std::collections::BTreeMap;

use crate::domain::value_objects::{EquivalentKind, ImpactFactor};
use crate::error::{ImpactError, ImpactResult};
use crate::models::{Category, Material};

/// Read-only factor table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImpactFactorTable {
    factors: BTreeMap<(Category, Material), ImpactFactor>,
    divisors: BTreeMap<EquivalentKind, f64>,
}

impl ImpactFactorTable {
    /// Start an empty builder
    pub fn builder() -> ImpactFactorTableBuilder {
        ImpactFactorTableBuilder::new()
    }

    /// The built-in table (see [`crate::defaults`])
    pub fn defaults() -> Self {
        crate::defaults::default_table()
    }

    /// Assemble a table from figures that are valid by construction.
    ///
    /// Only the built-in table uses this; everything else goes through the
    /// builder so entries are validated.
    pub(crate) fn from_parts(
        factors: BTreeMap<(Category, Material), ImpactFactor>,
        divisors: BTreeMap<EquivalentKind, f64>,
    ) -> Self {
        Self { factors, divisors }
    }

    /// Reopen this table as a builder seeded with its entries
    pub fn to_builder(&self) -> ImpactFactorTableBuilder {
        ImpactFactorTableBuilder {
            factors: self.factors.clone(),
            divisors: self.divisors.clone(),
        }
    }

    pub fn get(&self, category: Category, material: Material) -> Option<&ImpactFactor> {
        self.factors.get(&(category, material))
    }

    pub fn divisor(&self, kind: EquivalentKind) -> Option<f64> {
        self.divisors.get(&kind).copied()
    }

    /// All factor entries in (category, material) order
    pub fn factors(&self) -> impl Iterator<Item = (Category, Material, &ImpactFactor)> {
        self.factors.iter().map(|((c, m), f)| (*c, *m, f))
    }

    /// All equivalent divisors in kind order
    pub fn divisors(&self) -> impl Iterator<Item = (EquivalentKind, f64)> + '_ {
        self.divisors.iter().map(|(k, d)| (*k, *d))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// Mutable staging area for an [`ImpactFactorTable`]
#[derive(Debug, Clone, Default)]
pub struct ImpactFactorTableBuilder {
    factors: BTreeMap<(Category, Material), ImpactFactor>,
    divisors: BTreeMap<EquivalentKind, f64>,
}

impl ImpactFactorTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the water/CO2 factors for a combination.
    ///
    /// Chemicals and waste are set to zero.
    pub fn register_impact_factor(
        &mut self,
        category: Category,
        material: Material,
        water_per_unit: f64,
        co2_per_unit: f64,
    ) -> ImpactResult<&mut Self> {
        self.register_impact_profile(
            category,
            material,
            ImpactFactor::new(water_per_unit, co2_per_unit),
        )
    }

    /// Insert or overwrite the full factor for a combination
    pub fn register_impact_profile(
        &mut self,
        category: Category,
        material: Material,
        factor: ImpactFactor,
    ) -> ImpactResult<&mut Self> {
        factor.validate()?;
        self.factors.insert((category, material), factor);
        Ok(self)
    }

    /// Insert or overwrite an equivalent divisor; must be positive and finite
    pub fn register_equivalent(
        &mut self,
        kind: EquivalentKind,
        divisor: f64,
    ) -> ImpactResult<&mut Self> {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(ImpactError::invalid(
                "divisor",
                format!("{} divisor must be positive and finite, got {}", kind, divisor),
            ));
        }
        self.divisors.insert(kind, divisor);
        Ok(self)
    }

    /// Drop an equivalent so reports no longer include it
    pub fn remove_equivalent(&mut self, kind: EquivalentKind) -> &mut Self {
        self.divisors.remove(&kind);
        self
    }

    /// Drop every factor entry, keeping the divisors
    pub fn clear_factors(&mut self) -> &mut Self {
        self.factors.clear();
        self
    }

    /// Freeze into a read-only table
    pub fn build(self) -> ImpactFactorTable {
        ImpactFactorTable {
            factors: self.factors,
            divisors: self.divisors,
        }
    }
}
