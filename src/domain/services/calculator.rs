//! Impact Calculator
//!
//! Converts garment descriptors into impact reports using an injected
//! [`ImpactFactorTable`]. Every function here is a pure function of its
//! arguments: same input and table give bit-identical output.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{CollectionReport, ImpactFactorTable, ImpactReport, ImpactTotals};
use crate::domain::value_objects::{EquivalentKind, Metric};
use crate::error::{ImpactError, ImpactResult};
use crate::models::{GarmentDescriptor, GarmentInput};

/// Compute the impact of one descriptor against `table`
pub fn compute_impact(
    table: &ImpactFactorTable,
    descriptor: &GarmentDescriptor,
) -> ImpactResult<ImpactReport> {
    let category = descriptor.category();
    let material = descriptor.material();
    let factor = table
        .get(category, material)
        .ok_or_else(|| ImpactError::UnknownCombination {
            category: category.to_string(),
            material: material.to_string(),
        })?;

    let quantity = f64::from(descriptor.quantity());
    let water = factor.water_liters * quantity;
    let co2 = factor.co2_kg * quantity;

    let report = ImpactReport::new(
        category,
        material,
        descriptor.quantity(),
        water,
        co2,
        factor.chemicals_kg * quantity,
        factor.waste_kg * quantity,
        compute_equivalents(table, water, co2),
    );
    ensure_finite(&report, u64::from(descriptor.quantity()))?;
    Ok(report)
}

/// Reject reports whose totals or equivalents overflowed `f64`
fn ensure_finite(totals: &impl ImpactTotals, quantity: u64) -> ImpactResult<()> {
    let primary = [
        totals.water_saved_liters(),
        totals.co2_prevented_kg(),
        totals.chemicals_saved_kg(),
        totals.waste_reduced_kg(),
    ];
    let all_finite = primary
        .iter()
        .chain(totals.equivalents().values())
        .all(|v| v.is_finite());
    if all_finite {
        Ok(())
    } else {
        Err(ImpactError::invalid(
            "quantity",
            format!("totals for quantity {} exceed the representable range", quantity),
        ))
    }
}

/// Restate primary totals using every divisor in `table`
pub fn compute_equivalents(
    table: &ImpactFactorTable,
    water_liters: f64,
    co2_kg: f64,
) -> BTreeMap<EquivalentKind, f64> {
    table
        .divisors()
        .map(|(kind, divisor)| {
            let basis = match kind.basis() {
                Metric::Water => water_liters,
                Metric::Co2 => co2_kg,
            };
            (kind, basis / divisor)
        })
        .collect()
}

/// Calculator bound to a shared table snapshot
///
/// Cheap to clone; safe to use from many threads at once.
#[derive(Debug, Clone)]
pub struct ImpactCalculator {
    table: Arc<ImpactFactorTable>,
}

impl ImpactCalculator {
    pub fn new(table: Arc<ImpactFactorTable>) -> Self {
        Self { table }
    }

    /// Calculator over the built-in default table
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(ImpactFactorTable::defaults()))
    }

    pub fn table(&self) -> &ImpactFactorTable {
        &self.table
    }

    pub fn compute_impact(&self, descriptor: &GarmentDescriptor) -> ImpactResult<ImpactReport> {
        compute_impact(&self.table, descriptor)
    }

    /// Validate loosely typed input, then compute
    pub fn compute_impact_from_input(&self, input: &GarmentInput) -> ImpactResult<ImpactReport> {
        let descriptor = input.validate()?;
        self.compute_impact(&descriptor)
    }

    /// Compute every descriptor and aggregate.
    ///
    /// The first failing item fails the whole call.
    pub fn compute_collection_impact(
        &self,
        descriptors: &[GarmentDescriptor],
    ) -> ImpactResult<CollectionReport> {
        let items = descriptors
            .iter()
            .map(|d| self.compute_impact(d))
            .collect::<ImpactResult<Vec<_>>>()?;
        self.aggregate(items)
    }

    /// Validate and compute a collection of loosely typed inputs
    pub fn compute_collection_from_inputs(
        &self,
        inputs: &[GarmentInput],
    ) -> ImpactResult<CollectionReport> {
        let descriptors = inputs
            .iter()
            .map(GarmentInput::validate)
            .collect::<ImpactResult<Vec<_>>>()?;
        self.compute_collection_impact(&descriptors)
    }

    fn aggregate(&self, items: Vec<ImpactReport>) -> ImpactResult<CollectionReport> {
        let water = items.iter().fold(0.0, |acc, r| acc + r.water_saved_liters());
        let co2 = items.iter().fold(0.0, |acc, r| acc + r.co2_prevented_kg());
        let report = CollectionReport::new(items, compute_equivalents(&self.table, water, co2));
        ensure_finite(&report, report.total_quantity())?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Material};

    fn example_table() -> ImpactFactorTable {
        let mut builder = ImpactFactorTable::builder();
        builder
            .register_impact_factor(Category::Dress, Material::Organic, 2700.0, 15.0)
            .unwrap()
            .register_equivalent(EquivalentKind::Showers, 65.0)
            .unwrap()
            .register_equivalent(EquivalentKind::CarMiles, 0.4)
            .unwrap()
            .register_equivalent(EquivalentKind::TreesPlanted, 21.0)
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_single_dress_organic() {
        let table = example_table();
        let d = GarmentDescriptor::single(Category::Dress, Material::Organic);
        let report = compute_impact(&table, &d).unwrap();

        assert_eq!(report.water_saved_liters(), 2700.0);
        assert_eq!(report.co2_prevented_kg(), 15.0);
        assert_eq!(report.equivalents().len(), 3);

        let showers = report.equivalent(EquivalentKind::Showers).unwrap();
        assert!((showers - 41.538).abs() < 0.01);
        let miles = report.equivalent(EquivalentKind::CarMiles).unwrap();
        assert!((miles - 37.5).abs() < 1e-9);
        let trees = report.equivalent(EquivalentKind::TreesPlanted).unwrap();
        assert!((trees - 0.714).abs() < 0.01);
    }

    #[test]
    fn test_quantity_three_scales() {
        let table = example_table();
        let d = GarmentDescriptor::new(Category::Dress, Material::Organic, 3).unwrap();
        let report = compute_impact(&table, &d).unwrap();

        assert_eq!(report.water_saved_liters(), 8100.0);
        assert_eq!(report.co2_prevented_kg(), 45.0);
        let miles = report.equivalent(EquivalentKind::CarMiles).unwrap();
        assert!((miles - 112.5).abs() < 1e-9);
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let mut builder = ImpactFactorTable::builder();
        builder
            .register_impact_factor(Category::Top, Material::Cotton, 1e300, 1.0)
            .unwrap();
        let table = builder.build();

        let d = GarmentDescriptor::new(Category::Top, Material::Cotton, u32::MAX).unwrap();
        let err = compute_impact(&table, &d).unwrap_err();
        assert_eq!(err.field(), Some("quantity"));

        let single = GarmentDescriptor::single(Category::Top, Material::Cotton);
        let single = compute_impact(&table, &single).unwrap();
        let json = serde_json::to_string(&single).unwrap();
        let back: ImpactReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, single);
    }

    #[test]
    fn test_overflowing_equivalents_are_rejected() {
        let mut builder = ImpactFactorTable::builder();
        builder
            .register_impact_factor(Category::Top, Material::Cotton, 1e300, 1.0)
            .unwrap()
            .register_equivalent(EquivalentKind::Showers, 1e-300)
            .unwrap();
        let table = builder.build();

        let d = GarmentDescriptor::single(Category::Top, Material::Cotton);
        assert!(compute_impact(&table, &d).is_err());
    }

    #[test]
    fn test_overflowing_collection_sum_is_rejected() {
        let mut builder = ImpactFactorTable::builder();
        builder
            .register_impact_factor(Category::Top, Material::Cotton, 1e308, 1.0)
            .unwrap();
        let calc = ImpactCalculator::new(Arc::new(builder.build()));

        let d = GarmentDescriptor::single(Category::Top, Material::Cotton);
        assert!(calc.compute_impact(&d).is_ok());
        let err = calc.compute_collection_impact(&[d, d]).unwrap_err();
        assert_eq!(err.field(), Some("quantity"));
    }

    #[test]
    fn test_unknown_combination_is_not_defaulted() {
        let table = example_table();
        let d = GarmentDescriptor::single(Category::Dress, Material::Cotton);
        let err = compute_impact(&table, &d).unwrap_err();
        assert_eq!(
            err,
            ImpactError::UnknownCombination {
                category: "dress".to_string(),
                material: "cotton".to_string(),
            }
        );
    }

    #[test]
    fn test_no_divisors_means_no_equivalents() {
        let mut builder = ImpactFactorTable::builder();
        builder
            .register_impact_factor(Category::Top, Material::Cotton, 1.0, 1.0)
            .unwrap();
        let calc = ImpactCalculator::new(Arc::new(builder.build()));
        let report = calc
            .compute_impact(&GarmentDescriptor::single(Category::Top, Material::Cotton))
            .unwrap();
        assert!(report.equivalents().is_empty());
    }

    #[test]
    fn test_from_input_validates_first() {
        let calc = ImpactCalculator::new(Arc::new(example_table()));
        let err = calc
            .compute_impact_from_input(&GarmentInput::new("dress", "organic", 0))
            .unwrap_err();
        assert_eq!(err.field(), Some("quantity"));

        let report = calc
            .compute_impact_from_input(&GarmentInput::new("Dress", "organic", 2))
            .unwrap();
        assert_eq!(report.water_saved_liters(), 5400.0);
    }

    #[test]
    fn test_collection_recomputes_equivalents_from_totals() {
        let calc = ImpactCalculator::new(Arc::new(example_table()));
        let d = GarmentDescriptor::single(Category::Dress, Material::Organic);
        let report = calc
            .compute_collection_impact(&[d, d.with_quantity(3).unwrap()])
            .unwrap();

        assert_eq!(report.items_count(), 2);
        assert_eq!(report.total_quantity(), 4);
        assert_eq!(report.water_saved_liters(), 10800.0);
        assert_eq!(report.co2_prevented_kg(), 60.0);
        assert_eq!(report.equivalent(EquivalentKind::CarMiles), Some(60.0 / 0.4));
    }

    #[test]
    fn test_collection_fails_on_any_bad_item() {
        let calc = ImpactCalculator::new(Arc::new(example_table()));
        let inputs = vec![
            GarmentInput::new("dress", "organic", 1),
            GarmentInput::new("dress", "cotton", 1),
        ];
        let err = calc.compute_collection_from_inputs(&inputs).unwrap_err();
        assert!(matches!(err, ImpactError::UnknownCombination { .. }));
    }

    #[test]
    fn test_empty_collection() {
        let calc = ImpactCalculator::new(Arc::new(example_table()));
        let report = calc.compute_collection_impact(&[]).unwrap();
        assert_eq!(report.items_count(), 0);
        assert_eq!(report.water_saved_liters(), 0.0);
        assert_eq!(report.equivalent(EquivalentKind::Showers), Some(0.0));
    }

    #[test]
    fn test_calculator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImpactCalculator>();
    }
}
