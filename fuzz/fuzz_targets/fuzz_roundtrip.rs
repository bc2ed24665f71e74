#![no_main]
use std::io::Cursor;

use bmpkit::transform::{self, Transform};
use bmpkit::{DecodeRequest, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 16),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(Cursor::new(data))
        .with_limits(&limits)
        .decode()
    else {
        return;
    };

    // If we can decode it, re-encoding and decoding again must be identical
    let reencoded = decoded.to_bmp_bytes().expect("re-encode failed");
    let decoded2 = bmpkit::decode(Cursor::new(&reencoded)).expect("re-encoded data failed to decode");
    assert_eq!(decoded, decoded2, "roundtrip mismatch");

    // Transforms may reject the image but must never panic
    for step in [
        Transform::FlipHorizontal,
        Transform::FlipVertical,
        Transform::RotateRight,
        Transform::RotateLeft,
        Transform::Scale(0.5),
        Transform::Extract(bmpkit::transform::Channels::ALL),
    ] {
        let _ = step.apply(&decoded);
    }
    let _ = transform::crop(&decoded, 1, 1, 2, 2);
});
