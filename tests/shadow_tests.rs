use palette::Srgb;
use swatchpad::offset::Offset;
use swatchpad::shadow::ShadowSettings;

#[test]
fn test_default_declaration() {
    let shadow = ShadowSettings::default();
    assert_eq!(shadow.declaration(), "box-shadow: 10px 10px 10px 0px #1e293b;");
}

#[test]
fn test_negative_values_in_declaration() {
    let mut shadow = ShadowSettings::default();
    shadow.set_offset(Offset::new(-12, 0), 50);
    shadow.set_spread(-4);
    assert_eq!(shadow.css_value(), "-12px 0px 10px -4px #1e293b");
}

#[test]
fn test_ranges_are_enforced() {
    let mut shadow = ShadowSettings::default();
    shadow.set_blur(99);
    shadow.set_spread(-99);
    shadow.set_offset(Offset::new(80, -80), 50);
    assert_eq!(shadow.blur, 50);
    assert_eq!(shadow.spread, -20);
    assert_eq!(shadow.offset(), Offset::new(50, -50));

    shadow.set_blur(-1);
    assert_eq!(shadow.blur, 0);
}

#[test]
fn test_normalized_clamps_every_field() {
    let shadow = ShadowSettings {
        offset_x: 70,
        offset_y: -3,
        blur: 60,
        spread: 25,
        color: "red".to_string(),
    }
    .normalized(50);
    assert_eq!(shadow.declaration(), "box-shadow: 50px -3px 50px 20px red;");
}

#[test]
fn test_color_accepts_css_syntax() {
    let mut shadow = ShadowSettings::default();
    for color in ["rgba(0, 0, 0, 0.4)", "hsl(210, 40%, 20%)", "rebeccapurple", "#fff"] {
        assert!(shadow.set_color(color), "{color} should be accepted");
        assert_eq!(shadow.color, color);
    }
}

#[test]
fn test_invalid_color_keeps_previous() {
    let mut shadow = ShadowSettings::default();
    assert!(!shadow.set_color("not-a-color"));
    assert_eq!(shadow.color, "#1e293b");
    assert_eq!(shadow.color_rgb(), Some(Srgb::new(0x1e, 0x29, 0x3b)));
}
