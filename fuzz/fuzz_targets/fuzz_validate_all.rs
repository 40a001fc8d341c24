#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Rejections are fine, panics are bugs.
        let mut validator = identifica::EcuadorIdentification::default();
        for op in identifica::Operation::ALL {
            let _ = validator.run(op, s);
        }
        let _ = validator.identify(s);
    }
});
