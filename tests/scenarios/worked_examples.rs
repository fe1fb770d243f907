//! The organic dress walkthrough, end to end through the public API.

use std::sync::Arc;

use garment_impact::{
    Category, EquivalentKind, GarmentDescriptor, GarmentInput, ImpactCalculator, ImpactError,
    ImpactFactorTable, ImpactTotals, Material,
};

fn dress_table() -> ImpactFactorTable {
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

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn scenario_single_organic_dress() {
    let calc = ImpactCalculator::new(Arc::new(dress_table()));
    let report = calc
        .compute_impact(&GarmentDescriptor::single(Category::Dress, Material::Organic))
        .unwrap();

    assert_eq!(report.water_saved_liters(), 2700.0);
    assert_eq!(report.co2_prevented_kg(), 15.0);
    assert!(approx(report.equivalent(EquivalentKind::Showers).unwrap(), 41.538));
    assert_eq!(report.equivalent(EquivalentKind::CarMiles), Some(37.5));
    assert!(approx(report.equivalent(EquivalentKind::TreesPlanted).unwrap(), 0.714));
    assert_eq!(report.equivalent(EquivalentKind::SmartphoneCharges), None);
}

#[test]
fn scenario_three_dresses_scale_linearly() {
    let calc = ImpactCalculator::new(Arc::new(dress_table()));
    let report = calc
        .compute_impact(&GarmentDescriptor::new(Category::Dress, Material::Organic, 3).unwrap())
        .unwrap();

    assert_eq!(report.water_saved_liters(), 8100.0);
    assert_eq!(report.co2_prevented_kg(), 45.0);
    assert!(approx(report.equivalent(EquivalentKind::Showers).unwrap(), 124.615));
}

#[test]
fn scenario_rejected_inputs() {
    let calc = ImpactCalculator::new(Arc::new(dress_table()));

    let err = calc
        .compute_impact_from_input(&GarmentInput::new("dress", "organic", 0))
        .unwrap_err();
    assert_eq!(err.field(), Some("quantity"));

    let err = calc
        .compute_impact_from_input(&GarmentInput::new("dress", "cotton", 1))
        .unwrap_err();
    assert_eq!(
        err,
        ImpactError::UnknownCombination {
            category: "dress".to_string(),
            material: "cotton".to_string(),
        }
    );
}

#[test]
fn scenario_wardrobe_collection() {
    let calc = ImpactCalculator::with_defaults();
    let inputs: Vec<GarmentInput> = serde_json::from_str(
        r#"[
            {"category": "top", "material": "cotton", "quantity": 2},
            {"category": "accessory", "material": "recycled"}
        ]"#,
    )
    .unwrap();

    let report = calc.compute_collection_from_inputs(&inputs).unwrap();
    assert_eq!(report.items_count(), 2);
    assert_eq!(report.total_quantity(), 3);
    assert_eq!(report.water_saved_liters(), 5400.0 + 100.0);
    assert_eq!(
        report.equivalent(EquivalentKind::Showers),
        Some(report.water_saved_liters() / 60.0)
    );
}
