use crate::ClientError;

use wc_core::QrStyle;

#[test]
fn test_api_error_is_not_unreachable() {
    let err = ClientError::api_error(401, "UNAUTHORIZED".into(), "Incorrect".into());
    assert!(!err.is_unreachable());
    assert!(err.to_string().contains("UNAUTHORIZED"));
    assert!(err.to_string().contains("401"));
}

#[test]
fn test_core_error_becomes_invalid_argument() {
    let core = "sparkly".parse::<QrStyle>().unwrap_err();
    let err = ClientError::from(core);
    assert!(matches!(err, ClientError::InvalidArgument { .. }));
    assert!(err.to_string().contains("sparkly"));
}

#[test]
fn test_offline_unsupported_names_command() {
    let err = ClientError::offline_unsupported("rsvp");
    assert!(err.to_string().contains("`rsvp`"));
}

#[test]
fn test_local_error_carries_auth_code() {
    let local = wc_auth::CredentialStore::with_scheme(
        wc_auth::MemoryStorage::new(),
        wc_auth::PasswordScheme::Plaintext,
    )
    .login("nobody", "x")
    .unwrap_err();

    let err = ClientError::from(local);
    assert!(err.to_string().contains("INVALID_CREDENTIALS"));
}
