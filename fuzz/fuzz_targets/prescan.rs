#![no_main]

use encoding_sniffer::{PRESCAN_LIMIT, scan_for_meta_charset};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let found = scan_for_meta_charset(data);
    // Bytes past the window must never influence the result.
    if data.len() > PRESCAN_LIMIT {
        assert_eq!(found, scan_for_meta_charset(&data[..PRESCAN_LIMIT]));
    }
    if let Some(name) = found {
        assert_ne!(name.as_str(), "UTF-16LE");
        assert_ne!(name.as_str(), "UTF-16BE");
        assert_ne!(name.as_str(), "x-user-defined");
    }
});
