use bmpkit::transform::*;
use bmpkit::*;

fn px(r: u8, g: u8, b: u8) -> Pixel {
    Pixel { b, g, r }
}

/// 2x2: red, green / blue, white (row-major, first row first).
fn quad() -> Image {
    Image::from_pixels(
        2,
        2,
        &[px(255, 0, 0), px(0, 255, 0), px(0, 0, 255), px(255, 255, 255)],
    )
    .unwrap()
}

fn gradient(w: u32, h: u32) -> Image {
    let pixels: Vec<Pixel> = (0..h)
        .flat_map(|y| (0..w).map(move |x| px(x as u8 * 10, y as u8 * 10, (x + y) as u8)))
        .collect();
    Image::from_pixels(w, h, &pixels).unwrap()
}

#[test]
fn flip_horizontal_2x2() {
    let out = flip_horizontal(&quad()).unwrap();
    assert_eq!(
        out.pixels(),
        &[px(0, 255, 0), px(255, 0, 0), px(255, 255, 255), px(0, 0, 255)]
    );
    assert_eq!(out.header(), quad().header());
}

#[test]
fn flip_vertical_2x2() {
    let out = flip_vertical(&quad()).unwrap();
    assert_eq!(
        out.pixels(),
        &[px(0, 0, 255), px(255, 255, 255), px(255, 0, 0), px(0, 255, 0)]
    );
}

#[test]
fn double_flips_are_identity() {
    let img = gradient(5, 3);
    assert_eq!(flip_horizontal(&flip_horizontal(&img).unwrap()).unwrap(), img);
    assert_eq!(flip_vertical(&flip_vertical(&img).unwrap()).unwrap(), img);
}

#[test]
fn rotations_compose() {
    let img = gradient(5, 3);
    let right = rotate_right(&img).unwrap();
    assert_eq!((right.width(), right.height()), (3, 5));
    assert_eq!(rotate_left(&right).unwrap(), img);

    let mut spun = img.clone();
    for _ in 0..4 {
        spun = rotate_right(&spun).unwrap();
    }
    assert_eq!(spun, img);
}

#[test]
fn rotate_right_reads_columns_bottom_up() {
    // r g
    // b w
    let out = rotate_right(&quad()).unwrap();
    // dst(j, i) = src(1 - i, j)
    assert_eq!(
        out.pixels(),
        &[px(0, 255, 0), px(255, 255, 255), px(255, 0, 0), px(0, 0, 255)]
    );
}

#[test]
fn crop_full_frame_is_identity() {
    let img = gradient(6, 4);
    assert_eq!(crop(&img, 0, 0, 6, 4).unwrap(), img);
}

#[test]
fn crop_past_right_edge_fails() {
    let img = gradient(6, 4);
    assert!(matches!(
        crop(&img, 4, 0, 3, 1),
        Err(BmpError::InvalidArgument(_))
    ));
    assert!(matches!(
        crop(&img, 0, 3, 1, 2),
        Err(BmpError::InvalidArgument(_))
    ));
}

#[test]
fn crop_single_pixel() {
    let img = gradient(6, 4);
    let out = crop(&img, 5, 3, 1, 1).unwrap();
    assert_eq!(out.pixels(), &[*img.pixel(5, 3).unwrap()]);
    assert_eq!(out.header().image_size, 4);
    assert_eq!(out.header().size, 58);
}

#[test]
fn extract_all_channels_is_identity() {
    let img = gradient(4, 4);
    assert_eq!(extract(&img, "rgb").unwrap(), img);
    assert_eq!(extract(&img, "bgr").unwrap(), img);
}

#[test]
fn extract_red_zeroes_green_and_blue() {
    let img = gradient(4, 3);
    let out = extract(&img, "r").unwrap();
    assert_eq!(out.header(), img.header());
    for (a, b) in img.pixels().iter().zip(out.pixels()) {
        assert_eq!(b.r, a.r);
        assert_eq!(b.g, 0);
        assert_eq!(b.b, 0);
    }
}

#[test]
fn extract_two_channels() {
    let out = extract(&quad(), "gb").unwrap();
    assert_eq!(
        out.pixels(),
        &[px(0, 0, 0), px(0, 255, 0), px(0, 0, 255), px(0, 255, 255)]
    );
}

#[test]
fn extract_bad_spec_fails() {
    for spec in ["x", "", "rgbg"] {
        assert!(matches!(
            extract(&quad(), spec),
            Err(BmpError::InvalidArgument(_))
        ));
    }
}

#[test]
fn extract_empty_channel_set_fails() {
    let empty = Channels::default();
    assert!(empty.is_empty());
    assert!(matches!(
        extract_channels(&quad(), empty),
        Err(BmpError::InvalidArgument(_))
    ));
    assert!(matches!(
        Transform::Extract(empty).apply(&quad()),
        Err(BmpError::InvalidArgument(_))
    ));
}

#[test]
fn scale_by_one_is_identity() {
    let img = gradient(7, 5);
    assert_eq!(scale(&img, 1.0).unwrap(), img);
}

#[test]
fn scale_respects_limits() {
    let img = gradient(4, 4);
    let limits = Limits {
        max_pixels: Some(64),
        ..Default::default()
    };
    assert_eq!(scale_with_limits(&img, 2.0, &limits).unwrap().width(), 8);
    assert!(matches!(
        scale_with_limits(&img, 3.0, &limits),
        Err(BmpError::LimitExceeded(_))
    ));
    assert!(matches!(
        Transform::Scale(3.0).apply_with_limits(&img, &limits),
        Err(BmpError::LimitExceeded(_))
    ));
}

#[test]
fn pipeline_limits_catch_rotated_width() {
    let img = gradient(2, 6);
    let limits = Limits {
        max_width: Some(4),
        ..Default::default()
    };
    assert!(apply_all_with_limits(&img, &[Transform::FlipVertical], &limits).is_ok());
    assert!(matches!(
        apply_all_with_limits(&img, &[Transform::RotateLeft], &limits),
        Err(BmpError::LimitExceeded(_))
    ));
    assert_eq!(
        apply_all(&img, &[Transform::RotateLeft]).unwrap().width(),
        6
    );
}

#[test]
fn scale_non_positive_fails() {
    assert!(matches!(
        scale(&quad(), 0.0),
        Err(BmpError::InvalidArgument(_))
    ));
    assert!(matches!(
        scale(&quad(), -2.0),
        Err(BmpError::InvalidArgument(_))
    ));
}

#[test]
fn transform_enum_dispatch() {
    let img = quad();
    assert_eq!(
        Transform::FlipHorizontal.apply(&img).unwrap(),
        flip_horizontal(&img).unwrap()
    );
    let channels: Channels = "g".parse().unwrap();
    assert_eq!(
        Transform::Extract(channels).apply(&img).unwrap(),
        extract(&img, "g").unwrap()
    );
    assert_eq!(
        Transform::Crop {
            x: 1,
            y: 0,
            width: 1,
            height: 2
        }
        .apply(&img)
        .unwrap()
        .pixels(),
        &[px(0, 255, 0), px(255, 255, 255)]
    );
}
