//! Built-in impact factors and equivalent divisors
//!
//! Per-garment baselines are for a conventional cotton garment of each
//! category. Other materials scale the baseline by a fixed multiplier per
//! metric. Figures are illustrative.
//!
//! | category  | water L | CO2 kg | chemicals kg | waste kg |
//! |-----------|---------|--------|--------------|----------|
//! | top       | 2700    | 10     | 0.5          | 0.3      |
//! | bottom    | 7500    | 33     | 1.5          | 1.5      |
//! | dress     | 5000    | 25     | 0.8          | 0.8      |
//! | outerwear | 6000    | 28     | 1.2          | 1.2      |
//! | accessory | 1000    | 5      | 0.1          | 0.1      |

use std::collections::BTreeMap;

use crate::domain::entities::ImpactFactorTable;
use crate::domain::value_objects::{EquivalentKind, ImpactFactor};
use crate::models::{Category, Material};

/// Cotton baseline for a category
pub fn category_baseline(category: Category) -> ImpactFactor {
    let (water, co2, chemicals, waste) = match category {
        Category::Top => (2700.0, 10.0, 0.5, 0.3),
        Category::Bottom => (7500.0, 33.0, 1.5, 1.5),
        Category::Dress => (5000.0, 25.0, 0.8, 0.8),
        Category::Outerwear => (6000.0, 28.0, 1.2, 1.2),
        Category::Accessory => (1000.0, 5.0, 0.1, 0.1),
    };
    ImpactFactor::new(water, co2)
        .with_chemicals(chemicals)
        .with_waste(waste)
}

/// Multipliers (water, co2, chemicals, waste) applied to the cotton baseline
pub fn material_multiplier(material: Material) -> (f64, f64, f64, f64) {
    match material {
        Material::Cotton => (1.0, 1.0, 1.0, 1.0),
        Material::Polyester => (0.05, 1.4, 1.2, 1.0),
        Material::Recycled => (0.1, 0.6, 0.5, 0.5),
        Material::Organic => (0.4, 0.55, 0.3, 1.0),
        Material::SyntheticBlend => (0.5, 1.2, 1.1, 1.0),
    }
}

/// Default divisor for an equivalent kind
pub fn default_divisor(kind: EquivalentKind) -> f64 {
    match kind {
        EquivalentKind::Showers => 60.0,
        EquivalentKind::DrinkingDays => 2.0,
        EquivalentKind::CarMiles => 0.404,
        EquivalentKind::CarKm => 0.4,
        EquivalentKind::TreesPlanted => 21.77,
        EquivalentKind::SmartphoneCharges => 0.0002,
    }
}

/// Default factor for one combination
pub fn default_factor(category: Category, material: Material) -> ImpactFactor {
    let base = category_baseline(category);
    let (w, c, ch, wa) = material_multiplier(material);
    ImpactFactor {
        water_liters: base.water_liters * w,
        co2_kg: base.co2_kg * c,
        chemicals_kg: base.chemicals_kg * ch,
        waste_kg: base.waste_kg * wa,
    }
}

/// The complete built-in table: all 25 combinations and all equivalents
pub fn default_table() -> ImpactFactorTable {
    let factors: BTreeMap<_, _> = Category::ALL
        .into_iter()
        .flat_map(|c| Material::ALL.into_iter().map(move |m| ((c, m), default_factor(c, m))))
        .collect();
    let divisors: BTreeMap<_, _> = EquivalentKind::ALL
        .into_iter()
        .map(|kind| (kind, default_divisor(kind)))
        .collect();
    ImpactFactorTable::from_parts(factors, divisors)
}
