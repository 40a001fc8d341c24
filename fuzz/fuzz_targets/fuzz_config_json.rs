#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any accepted config must be usable without panicking.
        if let Ok(config) = identifica::IdentificationConfig::from_json(s) {
            let mut validator = identifica::EcuadorIdentification::new(config);
            let _ = validator.validate_all_identifications("1710034065001");
        }
    }
});
