use crate::{PaymentMethod, PaymentStatus};

use std::str::FromStr;

#[test]
fn test_payment_status_round_trips_through_str() {
    for status in [
        PaymentStatus::Pending,
        PaymentStatus::Completed,
        PaymentStatus::Failed,
    ] {
        assert_eq!(PaymentStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_only_succeeded_provider_status_completes() {
    assert_eq!(
        PaymentStatus::from_provider_status("succeeded"),
        PaymentStatus::Completed
    );
    assert_eq!(
        PaymentStatus::from_provider_status("requires_payment_method"),
        PaymentStatus::Failed
    );
    assert_eq!(
        PaymentStatus::from_provider_status("processing"),
        PaymentStatus::Failed
    );
}

#[test]
fn test_payment_method_from_str() {
    assert_eq!(PaymentMethod::from_str("upi").unwrap(), PaymentMethod::Upi);
    assert_eq!(PaymentMethod::from_str("card").unwrap(), PaymentMethod::Card);
    assert!(PaymentMethod::from_str("cash").is_err());
}
