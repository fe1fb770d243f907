//! Per-unit impact factor for one category/material combination

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, ImpactResult};

/// Savings attributed to one digital garment instead of a physical one
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactFactor {
    pub water_liters: f64,
    pub co2_kg: f64,
    #[serde(default)]
    pub chemicals_kg: f64,
    #[serde(default)]
    pub waste_kg: f64,
}

impl ImpactFactor {
    /// Water and CO2 only; chemicals and waste are zero
    pub fn new(water_liters: f64, co2_kg: f64) -> Self {
        Self {
            water_liters,
            co2_kg,
            chemicals_kg: 0.0,
            waste_kg: 0.0,
        }
    }

    pub fn with_chemicals(mut self, chemicals_kg: f64) -> Self {
        self.chemicals_kg = chemicals_kg;
        self
    }

    pub fn with_waste(mut self, waste_kg: f64) -> Self {
        self.waste_kg = waste_kg;
        self
    }

    /// Every value must be finite and non-negative
    pub fn validate(&self) -> ImpactResult<()> {
        check_per_unit("waterPerUnit", self.water_liters)?;
        check_per_unit("co2PerUnit", self.co2_kg)?;
        check_per_unit("chemicalsPerUnit", self.chemicals_kg)?;
        check_per_unit("wastePerUnit", self.waste_kg)
    }
}

fn check_per_unit(field: &'static str, value: f64) -> ImpactResult<()> {
    if !value.is_finite() {
        return Err(ImpactError::invalid(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(ImpactError::invalid(
            field,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}
