#![no_main]
use std::io::Cursor;

use bmpkit::{DecodeRequest, Limits, Permissiveness};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every permissiveness level must reject or decode without panicking
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    for p in [
        Permissiveness::Strict,
        Permissiveness::Standard,
        Permissiveness::Permissive,
    ] {
        let _ = DecodeRequest::new(Cursor::new(data))
            .with_limits(&limits)
            .with_permissiveness(p)
            .decode();
    }
    let _ = bmpkit::decode_header(Cursor::new(data));
});
