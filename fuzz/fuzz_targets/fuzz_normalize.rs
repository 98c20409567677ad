#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_query::{Config, normalize};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let config = Config {
        banned_snmp_strings: vec!["Vendor Banner".into()],
        ..Config::default()
    };

    // Single values and walk lines take different prefix handling
    let _ = normalize(s, false, &config);
    let out = normalize(s, true, &config);
    assert!(!config.is_banned(&out));
});
