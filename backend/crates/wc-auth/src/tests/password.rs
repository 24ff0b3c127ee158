use crate::{PasswordScheme, hash_password, verify_password};

#[test]
fn test_hash_and_verify() {
    let hash = hash_password("correct horse").unwrap();

    assert!(verify_password("correct horse", &hash).unwrap());
    assert!(!verify_password("battery staple", &hash).unwrap());
}

#[test]
fn test_same_password_gets_different_salts() {
    let first = hash_password("pw").unwrap();
    let second = hash_password("pw").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_malformed_hash_is_an_error() {
    assert!(verify_password("pw", "pw").is_err());
}

#[test]
fn test_plaintext_scheme_is_exact_match() {
    let scheme = PasswordScheme::Plaintext;

    assert_eq!(scheme.protect("pw").unwrap(), "pw");
    assert!(scheme.matches("pw", "pw").unwrap());
    assert!(!scheme.matches("PW", "pw").unwrap());
}

#[test]
fn test_scheme_parsing() {
    assert_eq!("argon2".parse::<PasswordScheme>(), Ok(PasswordScheme::Argon2));
    assert_eq!(
        "plaintext".parse::<PasswordScheme>(),
        Ok(PasswordScheme::Plaintext)
    );
    assert!("md5".parse::<PasswordScheme>().is_err());
    assert_eq!(PasswordScheme::default(), PasswordScheme::Argon2);
}

#[test]
fn test_argon2_scheme_compares_legacy_plaintext_verbatim() {
    let scheme = PasswordScheme::Argon2;

    assert!(scheme.matches("password123", "password123").unwrap());
    assert!(!scheme.matches("wrong", "password123").unwrap());
}

#[test]
fn test_argon2_scheme_still_verifies_hashes() {
    let scheme = PasswordScheme::Argon2;
    let hash = scheme.protect("pw").unwrap();

    assert!(scheme.matches("pw", &hash).unwrap());
    assert!(!scheme.matches(&hash, &hash).unwrap());
}
