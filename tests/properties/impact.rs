//! Property tests for impact computation.

use proptest::prelude::*;

use garment_impact::{
    Category, GarmentDescriptor, ImpactCalculator, ImpactTotals, Material,
};

fn category() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

fn material() -> impl Strategy<Value = Material> {
    proptest::sample::select(Material::ALL.to_vec())
}

fn descriptor() -> impl Strategy<Value = GarmentDescriptor> {
    (category(), material(), 1u32..=10_000).prop_map(|(c, m, q)| {
        GarmentDescriptor::new(c, m, q).expect("quantity is at least 1")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the same descriptor and table always give the same report.
    #[test]
    fn property_compute_is_deterministic(d in descriptor()) {
        let calc = ImpactCalculator::with_defaults();
        let first = calc.compute_impact(&d).unwrap();
        let second = calc.compute_impact(&d).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: primary totals scale linearly with quantity.
    ///
    /// Per-unit factor times quantity is a single multiplication, so the
    /// result is exact whether computed directly or from the one-unit report.
    #[test]
    fn property_totals_scale_with_quantity(
        c in category(),
        m in material(),
        q in 1u32..=10_000,
    ) {
        let calc = ImpactCalculator::with_defaults();
        let one = calc.compute_impact(&GarmentDescriptor::single(c, m)).unwrap();
        let many = calc
            .compute_impact(&GarmentDescriptor::new(c, m, q).unwrap())
            .unwrap();
        let k = f64::from(q);

        prop_assert_eq!(many.water_saved_liters(), one.water_saved_liters() * k);
        prop_assert_eq!(many.co2_prevented_kg(), one.co2_prevented_kg() * k);
        prop_assert_eq!(many.chemicals_saved_kg(), one.chemicals_saved_kg() * k);
        prop_assert_eq!(many.waste_reduced_kg(), one.waste_reduced_kg() * k);
    }

    /// PROPERTY: every total and equivalent is finite and non-negative.
    #[test]
    fn property_reports_are_non_negative(d in descriptor()) {
        let report = ImpactCalculator::with_defaults().compute_impact(&d).unwrap();
        for value in [
            report.water_saved_liters(),
            report.co2_prevented_kg(),
            report.chemicals_saved_kg(),
            report.waste_reduced_kg(),
        ] {
            prop_assert!(value.is_finite() && value >= 0.0);
        }
        for value in report.equivalents().values() {
            prop_assert!(value.is_finite() && *value >= 0.0);
        }
    }

    /// PROPERTY: a collection's totals are the sum of its items.
    #[test]
    fn property_collection_sums_items(
        items in proptest::collection::vec(descriptor(), 0..16)
    ) {
        let calc = ImpactCalculator::with_defaults();
        let report = calc.compute_collection_impact(&items).unwrap();

        prop_assert_eq!(report.items_count(), items.len());
        let quantity: u64 = items.iter().map(|d| u64::from(d.quantity())).sum();
        prop_assert_eq!(report.total_quantity(), quantity);

        let water: f64 = report.items().iter().map(|i| i.water_saved_liters()).sum();
        prop_assert!((report.water_saved_liters() - water).abs() <= 1e-6 * water.max(1.0));
    }
}
