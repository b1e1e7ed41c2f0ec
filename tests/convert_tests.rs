use approx::assert_abs_diff_eq;
use palette::Srgb;
use swatchpad::convert::{
    Cmyk, Hsl, Hsv, Lab, parse_hex, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_lab,
};
use swatchpad::formats::ColorFormats;

/// Every channel value at a stride, plus both ends.
fn channel_samples() -> Vec<u8> {
    let mut values: Vec<u8> = (0..=255).step_by(5).collect();
    values.extend([1, 127, 128, 254]);
    values
}

#[test]
fn test_hex_roundtrip_over_rgb_cube() {
    let samples = channel_samples();
    for &r in &samples {
        for &g in &samples {
            for &b in &samples {
                let color = Srgb::new(r, g, b);
                assert_eq!(parse_hex(&rgb_to_hex(color)), Some(color));
            }
        }
    }
}

#[test]
fn test_hex_roundtrip_every_byte_per_channel() {
    for v in 0..=255u8 {
        for color in [Srgb::new(v, 0, 0), Srgb::new(0, v, 0), Srgb::new(0, 0, v)] {
            assert_eq!(parse_hex(&rgb_to_hex(color)), Some(color));
        }
    }
}

#[test]
fn test_hex_normalizes_case() {
    for input in ["#FF6B6B", "#ff6b6b", "#Ff6B6b", "FF6B6B", "aBcDeF"] {
        let color = parse_hex(input).unwrap();
        let expected = format!("#{}", input.trim_start_matches('#').to_lowercase());
        assert_eq!(rgb_to_hex(color), expected);
    }
}

#[test]
fn test_invalid_hex_has_no_result() {
    for input in ["zzzzzz", "#abc", "", "1234567", "#", "#12345g", "#ff 000"] {
        assert_eq!(parse_hex(input), None, "{input:?} should not parse");
    }
}

#[test]
fn test_pure_red() {
    let red = Srgb::new(255, 0, 0);
    assert_eq!(rgb_to_hex(red), "#ff0000");
    assert_eq!(
        rgb_to_hsl(red),
        Hsl {
            hue: 0,
            saturation: 100,
            lightness: 50
        }
    );
    assert_eq!(
        rgb_to_hsv(red),
        Hsv {
            hue: 0,
            saturation: 100,
            value: 100
        }
    );
    assert_eq!(
        rgb_to_cmyk(red),
        Cmyk {
            cyan: 0,
            magenta: 100,
            yellow: 100,
            key: 0
        }
    );

    let lab = rgb_to_lab(red);
    assert_abs_diff_eq!(f64::from(lab.lightness), 53.0, epsilon = 1.0);
    assert_abs_diff_eq!(f64::from(lab.a), 80.0, epsilon = 1.0);
    assert_abs_diff_eq!(f64::from(lab.b), 67.0, epsilon = 1.0);
}

/// Values that land within one ulp of a .5 tie; they round the way
/// `channel / 255` arithmetic puts them.
#[test]
fn test_near_tie_rounding() {
    // Saturation is 37.500000000000014%.
    assert_eq!(
        rgb_to_hsl(Srgb::new(100, 180, 90)),
        Hsl {
            hue: 113,
            saturation: 38,
            lightness: 53
        }
    );

    // Hue is 197.49999999999997 degrees.
    assert_eq!(
        rgb_to_hsl(Srgb::new(10, 180, 250)),
        Hsl {
            hue: 197,
            saturation: 96,
            lightness: 51
        }
    );
    assert_eq!(
        rgb_to_hsv(Srgb::new(10, 180, 250)),
        Hsv {
            hue: 197,
            saturation: 96,
            value: 98
        }
    );
    assert_eq!(
        ColorFormats::from_rgb(Srgb::new(10, 180, 250)).hsl,
        "hsl(197, 96%, 51%)"
    );
}

#[test]
fn test_black_has_no_division_by_zero() {
    let black = Srgb::new(0, 0, 0);
    assert_eq!(
        rgb_to_hsl(black),
        Hsl {
            hue: 0,
            saturation: 0,
            lightness: 0
        }
    );
    assert_eq!(
        rgb_to_hsv(black),
        Hsv {
            hue: 0,
            saturation: 0,
            value: 0
        }
    );
    assert_eq!(
        rgb_to_cmyk(black),
        Cmyk {
            cyan: 0,
            magenta: 0,
            yellow: 0,
            key: 100
        }
    );
    assert_eq!(
        rgb_to_lab(black),
        Lab {
            lightness: 0,
            a: 0,
            b: 0
        }
    );
}

#[test]
fn test_white_lab_is_neutral() {
    let lab = rgb_to_lab(Srgb::new(255, 255, 255));
    assert_abs_diff_eq!(f64::from(lab.lightness), 100.0, epsilon = 1.0);
    assert_abs_diff_eq!(f64::from(lab.a), 0.0, epsilon = 1.0);
    assert_abs_diff_eq!(f64::from(lab.b), 0.0, epsilon = 1.0);
}

#[test]
fn test_grays_are_achromatic() {
    for v in channel_samples() {
        let gray = Srgb::new(v, v, v);
        let hsl = rgb_to_hsl(gray);
        assert_eq!((hsl.hue, hsl.saturation), (0, 0));
        let cmyk = rgb_to_cmyk(gray);
        assert_eq!((cmyk.cyan, cmyk.magenta, cmyk.yellow), (0, 0, 0));
        let lab = rgb_to_lab(gray);
        assert!(lab.a.abs() <= 1 && lab.b.abs() <= 1, "{v}: {lab:?}");
    }
}

#[test]
fn test_derived_values_stay_in_range() {
    let samples = channel_samples();
    for &r in &samples {
        for &g in &samples {
            for &b in &samples {
                let color = Srgb::new(r, g, b);
                let hsl = rgb_to_hsl(color);
                let hsv = rgb_to_hsv(color);
                let cmyk = rgb_to_cmyk(color);
                assert!(hsl.hue < 360 && hsl.saturation <= 100 && hsl.lightness <= 100);
                assert!(hsv.hue < 360 && hsv.saturation <= 100 && hsv.value <= 100);
                assert!(cmyk.cyan <= 100 && cmyk.magenta <= 100);
                assert!(cmyk.yellow <= 100 && cmyk.key <= 100);
                let lab = rgb_to_lab(color);
                assert!((0..=100).contains(&lab.lightness), "{color:?}: {lab:?}");
            }
        }
    }
}

#[test]
fn test_formats_share_one_color() {
    let formats = ColorFormats::from_rgb(Srgb::new(255, 107, 107));
    assert_eq!(formats.hex, "#FF6B6B");
    assert_eq!(formats.rgb, "rgb(255, 107, 107)");
    assert_eq!(formats.hsl, "hsl(0, 100%, 71%)");
    assert_eq!(formats.hsv, "hsv(0, 58%, 100%)");
    assert_eq!(formats.cmyk, "cmyk(0%, 58%, 58%, 0%)");
}

#[test]
fn test_formats_serialize_to_json() {
    let formats = ColorFormats::from_rgb(Srgb::new(0, 0, 0));
    let json = serde_json::to_value(&formats).unwrap();
    assert_eq!(json["hex"], "#000000");
    assert_eq!(json["cmyk"], "cmyk(0%, 0%, 0%, 100%)");
    assert_eq!(json["lab"], "lab(0, 0, 0)");
}
