#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and table building must reject bad input, never panic
        if let Ok(config) = toml::from_str::<garment_impact::Config>(content) {
            let _ = config.build_table();
        }
    }
});
