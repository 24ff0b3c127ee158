use crate::{ContentValidator, WeddingContent, starter_content};

#[test]
fn test_required_rejects_blank() {
    assert!(ContentValidator::validate_required("   ", "name", 10).is_err());
    assert!(ContentValidator::validate_required("Asha", "name", 10).is_ok());
}

#[test]
fn test_length_limit_counts_characters() {
    assert!(ContentValidator::validate_optional("ñññ", "name", 3).is_ok());
    assert!(ContentValidator::validate_optional("ññññ", "name", 3).is_err());
}

#[test]
fn test_validation_error_names_field() {
    let err = ContentValidator::validate_required("", "guest_name", 10).unwrap_err();
    assert_eq!(err.field(), Some("guest_name"));
}

#[test]
fn test_username_rules() {
    assert!(ContentValidator::validate_username("prasanna").is_ok());
    assert!(ContentValidator::validate_username("").is_err());
    assert!(ContentValidator::validate_username("two words").is_err());
}

#[test]
fn test_guest_count_bounds() {
    assert!(ContentValidator::validate_guest_count(0).is_err());
    assert!(ContentValidator::validate_guest_count(1).is_ok());
    assert!(ContentValidator::validate_guest_count(51).is_err());
}

#[test]
fn test_wedding_content_requires_first_name() {
    assert!(ContentValidator::validate_wedding_content(&starter_content()).is_ok());
    assert!(ContentValidator::validate_wedding_content(&WeddingContent::default()).is_err());
}
