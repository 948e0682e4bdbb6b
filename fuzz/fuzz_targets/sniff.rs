#![no_main]

use encoding_sniffer::{SniffOptions, sniff_detailed};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let mut opts = SniffOptions::new().with_xml(flags & 1 != 0);
    if flags & 2 != 0 {
        opts = opts.with_default_encoding("ISO-8859-16");
    }
    if flags & 4 != 0 {
        opts = opts.with_transport_layer_encoding_label("windows-1251");
    }
    opts = opts.with_bom_overrides_transport(flags & 8 != 0);

    let first = sniff_detailed(rest, &opts);
    assert_eq!(first, sniff_detailed(rest, &opts));
    assert!(first.encoding.to_encoding().is_some());
});
