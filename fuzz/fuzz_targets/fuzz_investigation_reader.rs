#![no_main]

use isatab::investigation::InvestigationReader;
use isatab::validator::validate_investigation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(info) = InvestigationReader::new().read(data) {
        let _ = validate_investigation(&info);
    }
});
