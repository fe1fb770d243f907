#![no_main]

use libfuzzer_sys::fuzz_target;

use garment_impact::{GarmentInput, ImpactCalculator};

fuzz_target!(|data: &[u8]| {
    let Ok(inputs) = serde_json::from_slice::<Vec<GarmentInput>>(data) else {
        return;
    };
    let calc = ImpactCalculator::with_defaults();
    for input in &inputs {
        if let Ok(report) = calc.compute_impact_from_input(input) {
            assert!(report.quantity() >= 1);
        }
    }
    let _ = calc.compute_collection_from_inputs(&inputs);
});
