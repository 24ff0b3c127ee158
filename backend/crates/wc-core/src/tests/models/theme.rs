use crate::Theme;

use std::str::FromStr;

#[test]
fn test_theme_as_str() {
    assert_eq!(Theme::Classic.as_str(), "classic");
    assert_eq!(Theme::Modern.as_str(), "modern");
    assert_eq!(Theme::Boho.as_str(), "boho");
}

#[test]
fn test_theme_from_str() {
    assert_eq!(Theme::from_str("modern").unwrap(), Theme::Modern);
    assert!(Theme::from_str("gothic").is_err());
    assert!(Theme::from_str("Classic").is_err());
}

#[test]
fn test_theme_default() {
    assert_eq!(Theme::default(), Theme::Classic);
}

#[test]
fn test_invalid_theme_reports_theme_field() {
    let err = Theme::from_str("neon").unwrap_err();
    assert_eq!(err.field(), Some("theme"));
}
