//! Equivalent value object - human-relatable restatements of a primary metric

use serde::{Deserialize, Serialize};

/// Primary metric an equivalent is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Liters of water
    Water,
    /// Kilograms of CO2
    Co2,
}

/// Kind of real-world equivalent
///
/// Each kind divides one primary total by a per-unit divisor held in the
/// factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquivalentKind {
    /// Showers (liters per shower)
    Showers,
    /// Days of drinking water for one person (liters per day)
    DrinkingDays,
    /// Passenger-car miles (kg CO2 per mile)
    CarMiles,
    /// Passenger-car kilometres (kg CO2 per km)
    CarKm,
    /// Tree-years of absorption (kg CO2 per tree per year)
    TreesPlanted,
    /// Smartphone charges (kg CO2 per charge)
    SmartphoneCharges,
}

impl EquivalentKind {
    pub const ALL: [EquivalentKind; 6] = [
        EquivalentKind::Showers,
        EquivalentKind::DrinkingDays,
        EquivalentKind::CarMiles,
        EquivalentKind::CarKm,
        EquivalentKind::TreesPlanted,
        EquivalentKind::SmartphoneCharges,
    ];

    /// The primary metric this equivalent restates
    pub fn basis(&self) -> Metric {
        match self {
            EquivalentKind::Showers | EquivalentKind::DrinkingDays => Metric::Water,
            EquivalentKind::CarMiles
            | EquivalentKind::CarKm
            | EquivalentKind::TreesPlanted
            | EquivalentKind::SmartphoneCharges => Metric::Co2,
        }
    }

    /// Key used in serialized reports
    pub fn key(&self) -> &'static str {
        match self {
            EquivalentKind::Showers => "showers",
            EquivalentKind::DrinkingDays => "drinkingDays",
            EquivalentKind::CarMiles => "carMiles",
            EquivalentKind::CarKm => "carKm",
            EquivalentKind::TreesPlanted => "treesPlanted",
            EquivalentKind::SmartphoneCharges => "smartphoneCharges",
        }
    }

    /// Human-readable label for text output
    pub fn label(&self) -> &'static str {
        match self {
            EquivalentKind::Showers => "Showers",
            EquivalentKind::DrinkingDays => "Days of drinking water",
            EquivalentKind::CarMiles => "Car miles avoided",
            EquivalentKind::CarKm => "Car kilometres avoided",
            EquivalentKind::TreesPlanted => "Tree-years of absorption",
            EquivalentKind::SmartphoneCharges => "Smartphone charges",
        }
    }

    /// Unit of the divisor, for listing the table
    pub fn divisor_unit(&self) -> &'static str {
        match self {
            EquivalentKind::Showers => "L per shower",
            EquivalentKind::DrinkingDays => "L per day",
            EquivalentKind::CarMiles => "kg CO2 per mile",
            EquivalentKind::CarKm => "kg CO2 per km",
            EquivalentKind::TreesPlanted => "kg CO2 per tree-year",
            EquivalentKind::SmartphoneCharges => "kg CO2 per charge",
        }
    }
}

impl std::fmt::Display for EquivalentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
