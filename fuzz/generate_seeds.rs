#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: u32, height: u32, offset: u32, fill: u8) -> Vec<u8> {
    let stride = (width as usize * 3 + 3) & !3;
    let image_size = (stride * height as usize) as u32;
    let mut out = vec![0u8; offset as usize];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&(offset + image_size).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    out[34..38].copy_from_slice(&image_size.to_le_bytes());
    out.resize(out.len() + image_size as usize, fill);
    out
}

fn main() {
    use std::fs;
    for target in ["fuzz_decode", "fuzz_roundtrip"] {
        let dir = format!("fuzz/corpus/{target}");
        fs::create_dir_all(&dir).unwrap();

        fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 54, 0x7f)).unwrap();
        fs::write(format!("{dir}/bmp_3x2.bmp"), bmp(3, 2, 54, 0x10)).unwrap();
        fs::write(format!("{dir}/bmp_4x4.bmp"), bmp(4, 4, 54, 0xff)).unwrap();
        fs::write(format!("{dir}/bmp_offset_70.bmp"), bmp(2, 2, 70, 0x42)).unwrap();

        // Truncated/malformed seeds for edge coverage
        let mut short_rows = bmp(5, 5, 54, 0x33);
        short_rows.truncate(70);
        fs::write(format!("{dir}/short_rows.bin"), short_rows).unwrap();
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
        fs::write(format!("{dir}/mb_swapped.bin"), b"MB").unwrap();
    }

    println!("Generated seed corpus in fuzz/corpus/");
}
