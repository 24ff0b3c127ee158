use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, PaymentProviderKind};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Payment
// =========================================================================

#[test]
#[serial]
fn given_stripe_without_secret_key_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _provider = EnvGuard::set("WC_PAYMENT_PROVIDER", "stripe");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("stripe_secret_key")
    );
}

#[test]
#[serial]
fn given_stripe_with_blank_secret_key_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _provider = EnvGuard::set("WC_PAYMENT_PROVIDER", "stripe");
    let _key = EnvGuard::set("WC_STRIPE_SECRET_KEY", "   ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_stripe_with_secret_key_in_toml_when_validate_then_ok() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [payment]
            provider = "stripe"
            stripe_secret_key = "sk_test_123"
            stripe_api_base = "http://127.0.0.1:12111"
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.payment.provider, eq(PaymentProviderKind::Stripe));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_uppercase_currency_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _currency = EnvGuard::set("WC_PAYMENT_DEFAULT_CURRENCY", "INR");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("default_currency")
    );
}

#[test]
#[serial]
fn given_unknown_provider_in_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[payment]\nprovider = \"paypal\"");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}
