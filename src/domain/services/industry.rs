//! Fashion-industry baseline figures for putting a report in context

use serde::{Deserialize, Serialize};

use crate::domain::entities::ImpactTotals;

/// Annual fashion-industry footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryBaseline {
    pub annual_water_usage_liters: f64,
    pub annual_co2_emissions_kg: f64,
    pub annual_textile_waste_kg: f64,
    /// Share of global carbon emissions, in percent
    pub percentage_global_carbon: f64,
    /// Share of global wastewater, in percent
    pub percentage_global_wastewater: f64,
    pub clothes_dumped_per_second_kg: f64,
}

impl Default for IndustryBaseline {
    fn default() -> Self {
        Self {
            annual_water_usage_liters: 9.3e12,
            annual_co2_emissions_kg: 1.2e12,
            annual_textile_waste_kg: 9.2e10,
            percentage_global_carbon: 10.0,
            percentage_global_wastewater: 20.0,
            clothes_dumped_per_second_kg: 2.5,
        }
    }
}

/// A report's totals expressed as fractions of the annual industry footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryComparison {
    pub water_share: f64,
    pub co2_share: f64,
    pub waste_share: f64,
    /// Seconds of industry-wide clothing disposal matched by the waste saved
    pub dumping_seconds: f64,
}

impl IndustryBaseline {
    pub fn compare(&self, totals: &impl ImpactTotals) -> IndustryComparison {
        IndustryComparison {
            water_share: ratio(totals.water_saved_liters(), self.annual_water_usage_liters),
            co2_share: ratio(totals.co2_prevented_kg(), self.annual_co2_emissions_kg),
            waste_share: ratio(totals.waste_reduced_kg(), self.annual_textile_waste_kg),
            dumping_seconds: ratio(totals.waste_reduced_kg(), self.clothes_dumped_per_second_kg),
        }
    }
}

fn ratio(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total
    } else {
        0.0
    }
}
