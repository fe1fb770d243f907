//! Swapping the factor table while calculators are in use.

use std::sync::Arc;
use std::thread;

use garment_impact::{
    Category, Config, FactorTableStore, GarmentDescriptor, ImpactFactorTable, ImpactTotals,
    Material,
};

#[test]
fn scenario_reload_from_config_keeps_old_snapshots_intact() {
    let store = Arc::new(FactorTableStore::new(ImpactFactorTable::defaults()));
    let shirt = GarmentDescriptor::single(Category::Top, Material::Cotton);

    let before = store.calculator();
    assert_eq!(before.compute_impact(&shirt).unwrap().water_saved_liters(), 2700.0);

    let config: Config = toml::from_str(
        r#"
[[factors]]
category = "top"
material = "cotton"
water_liters = 3000.0
co2_kg = 11.0
"#,
    )
    .unwrap();
    let old = store.replace(config.build_table().unwrap());
    assert_eq!(old.get(Category::Top, Material::Cotton).unwrap().water_liters, 2700.0);

    assert_eq!(before.compute_impact(&shirt).unwrap().water_saved_liters(), 2700.0);
    let after = store.calculator();
    assert_eq!(after.compute_impact(&shirt).unwrap().water_saved_liters(), 3000.0);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let report = store.calculator().compute_impact(&shirt).unwrap();
                report.water_saved_liters()
            })
        })
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), 3000.0);
    }
}
