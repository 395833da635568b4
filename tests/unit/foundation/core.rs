use super::*;

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(Rgba8::from_hex("#ff8000"), Some(Rgba8::opaque(255, 128, 0)));
    assert_eq!(
        Rgba8::from_hex("#10203040"),
        Some(Rgba8 {
            r: 0x10,
            g: 0x20,
            b: 0x30,
            a: 0x40
        })
    );
}

#[test]
fn malformed_hex_colors_are_rejected() {
    assert_eq!(Rgba8::from_hex("ff8000"), None);
    assert_eq!(Rgba8::from_hex("#ff80"), None);
    assert_eq!(Rgba8::from_hex("#gg8000"), None);
}

#[test]
fn tile_serde_uses_plain_fields() {
    let t = Tile::new(4, 9, 13);
    let v = serde_json::to_value(t).unwrap();
    assert_eq!(v, serde_json::json!({ "x": 4, "y": 9, "zoom_level": 13 }));
}

#[test]
fn colors_serialize_as_hex_strings() {
    let v = serde_json::to_value(Rgba8::opaque(0x12, 0xab, 0x00)).unwrap();
    assert_eq!(v, serde_json::json!("#12ab00"));
    let c: Rgba8 = serde_json::from_str("\"#00000080\"").unwrap();
    assert_eq!(c.a, 0x80);
    assert!(serde_json::from_str::<Rgba8>("\"red\"").is_err());
}
