use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TilePaintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TilePaintError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        TilePaintError::NoDrawingLayer.to_string(),
        "no drawing layer selected"
    );
}

#[test]
fn level_out_of_range_names_both_bounds() {
    let msg = TilePaintError::LevelOutOfRange {
        level: 7,
        levels: 3,
    }
    .to_string();
    assert!(msg.contains("level 7"));
    assert!(msg.contains("3 levels"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TilePaintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
