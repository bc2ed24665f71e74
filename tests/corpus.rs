//! Test corpus: roundtrips and transforms over various patterns and sizes.

use std::io::Cursor;

use bmpkit::transform::{self, Transform};
use bmpkit::*;

fn checkerboard(w: u32, h: u32) -> Image {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            pixels.push(if (x + y) % 2 == 0 {
                Pixel {
                    b: 200,
                    g: 220,
                    r: 240,
                }
            } else {
                Pixel { b: 10, g: 40, r: 70 }
            });
        }
    }
    Image::from_pixels(w, h, &pixels).unwrap()
}

fn noise_pattern(w: u32, h: u32) -> Image {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    let pixels: Vec<Pixel> = (0..w * h)
        .map(|_| Pixel {
            b: next(),
            g: next(),
            r: next(),
        })
        .collect();
    Image::from_pixels(w, h, &pixels).unwrap()
}

// ── Codec ────────────────────────────────────────────────────────────

#[test]
fn every_padding_amount_roundtrips() {
    // widths 1..=8 cover row padding of 1, 2, 3 and 0 bytes twice over
    for w in 1..=8 {
        for h in [1, 2, 5] {
            let img = noise_pattern(w, h);
            let bytes = img.to_bmp_bytes().unwrap();
            let stride = (w as usize * 3).div_ceil(4) * 4;
            assert_eq!(bytes.len(), 54 + stride * h as usize, "{w}x{h}");
            for row in 0..h as usize {
                let pad_start = 54 + row * stride + w as usize * 3;
                assert!(
                    bytes[pad_start..54 + (row + 1) * stride].iter().all(|&b| b == 0),
                    "{w}x{h} row {row} padding is not zero"
                );
            }
            let back = decode(Cursor::new(&bytes)).unwrap();
            assert_eq!(back, img, "{w}x{h}");
        }
    }
}

#[test]
fn strict_accepts_own_output() {
    for (w, h) in [(1, 1), (3, 7), (16, 9), (33, 2)] {
        let bytes = checkerboard(w, h).to_bmp_bytes().unwrap();
        let img = DecodeRequest::new(Cursor::new(&bytes))
            .with_permissiveness(Permissiveness::Strict)
            .decode()
            .unwrap();
        assert_eq!((img.width(), img.height()), (w, h));
    }
}

#[test]
fn empty_image_roundtrips() {
    let img = Image::new(0, 0).unwrap();
    let bytes = img.to_bmp_bytes().unwrap();
    assert_eq!(bytes.len(), 54);
    assert_eq!(decode(Cursor::new(&bytes)).unwrap(), img);
}

// ── Transforms that change geometry ──────────────────────────────────

#[test]
fn transformed_images_encode_consistently() {
    let src = noise_pattern(7, 3);
    let outputs = [
        transform::rotate_right(&src).unwrap(),
        transform::rotate_left(&src).unwrap(),
        transform::scale(&src, 1.7).unwrap(),
        transform::scale(&src, 0.6).unwrap(),
        transform::crop(&src, 2, 1, 5, 2).unwrap(),
    ];
    for out in outputs {
        let h = out.header();
        let stride = (h.width as usize * 3).div_ceil(4) * 4;
        assert_eq!(h.image_size as usize, stride * h.height as usize);
        assert_eq!(h.size, h.offset + h.image_size);
        assert_eq!(out.pixels().len(), (h.width * h.height) as usize);

        let bytes = out.to_bmp_bytes().unwrap();
        assert_eq!(bytes.len() as u32, h.size);
        let back = DecodeRequest::new(Cursor::new(&bytes))
            .with_permissiveness(Permissiveness::Strict)
            .decode()
            .unwrap();
        assert_eq!(back, out);
    }
}

#[test]
fn source_is_untouched() {
    let src = noise_pattern(4, 4);
    let copy = src.clone();
    let _ = transform::extract(&src, "g").unwrap();
    let _ = transform::flip_horizontal(&src).unwrap();
    let _ = transform::rotate_right(&src).unwrap();
    assert_eq!(src, copy);
}

#[test]
fn pipeline_matches_manual_steps() {
    let src = checkerboard(6, 4);
    let steps = [
        Transform::RotateRight,
        Transform::Crop {
            x: 1,
            y: 1,
            width: 2,
            height: 3,
        },
        Transform::Scale(2.0),
        Transform::Extract("rb".parse().unwrap()),
        Transform::FlipVertical,
    ];
    let piped = transform::apply_all(&src, &steps).unwrap();

    let manual = transform::rotate_right(&src).unwrap();
    let manual = transform::crop(&manual, 1, 1, 2, 3).unwrap();
    let manual = transform::scale(&manual, 2.0).unwrap();
    let manual = transform::extract(&manual, "rb").unwrap();
    let manual = transform::flip_vertical(&manual).unwrap();

    assert_eq!(piped, manual);
    assert_eq!((piped.width(), piped.height()), (4, 6));
    assert!(piped.pixels().iter().all(|p| p.g == 0));
}

#[test]
fn pipeline_stops_at_first_error() {
    let src = checkerboard(2, 2);
    let steps = [
        Transform::FlipHorizontal,
        Transform::Scale(-1.0),
        Transform::RotateLeft,
    ];
    assert!(matches!(
        transform::apply_all(&src, &steps),
        Err(BmpError::InvalidArgument(_))
    ));
}
