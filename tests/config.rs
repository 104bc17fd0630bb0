use echelon::{FormatConfig, Matrix, Vector};

#[test]
fn partial_json_fills_defaults() {
    let cfg: FormatConfig = serde_json::from_str(r#"{ "precision": 1 }"#).unwrap();
    assert_eq!(cfg.precision, 1);
    assert_eq!(cfg.width, FormatConfig::default().width);
    assert_eq!(cfg.indent, 4);
    assert!(!cfg.highlight_nonzero);
}

#[test]
fn json_round_trip() {
    let cfg = FormatConfig::new(2, 7).with_highlight(true);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"highlight_nonzero\":true"));
    let back: FormatConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn loaded_config_drives_rendering() {
    let cfg: FormatConfig =
        serde_json::from_str(r#"{ "precision": 0, "width": 3, "indent": 0 }"#).unwrap();

    let m = Matrix::from_arrays("m", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(m.render(&cfg), "m:\n\n  1   2\n  3   4\n");

    let v = Vector::from_slice("v", &[5.0, 6.0]).unwrap();
    assert_eq!(v.render(&cfg), "v:\n\n  5\n  6\n");
}

#[test]
fn default_display_uses_three_decimals() {
    let v = Vector::from_slice("v", &[1.0, 2.5]).unwrap();
    let s = v.to_string();
    assert!(s.contains("1.000"));
    assert!(s.contains("2.500"));
}
