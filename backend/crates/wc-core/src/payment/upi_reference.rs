//! Client-side references for manual UPI transfers.
//!
//! Format: `UPI-{epoch millis}-{9 lowercase base36 chars}`. The suffix comes
//! from a non-cryptographic RNG; the reference only has to be unique enough
//! to tell transfers apart when the couple reconciles their bank statement.

use chrono::Utc;
use rand::Rng;

pub const UPI_REFERENCE_PREFIX: &str = "UPI";
pub const UPI_SUFFIX_LENGTH: usize = 9;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// New reference stamped with the current time
pub fn generate_upi_reference() -> String {
    upi_reference_at(Utc::now().timestamp_millis())
}

pub fn upi_reference_at(millis: i64) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..UPI_SUFFIX_LENGTH)
        .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
        .collect();

    format!("{}-{}-{}", UPI_REFERENCE_PREFIX, millis, suffix)
}

/// Check that a reference has the shape produced by [`generate_upi_reference`]
pub fn is_valid_upi_reference(reference: &str) -> bool {
    let mut parts = reference.splitn(3, '-');

    let (Some(prefix), Some(millis), Some(suffix)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == UPI_REFERENCE_PREFIX
        && !millis.is_empty()
        && millis.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == UPI_SUFFIX_LENGTH
        && suffix.bytes().all(|b| BASE36_ALPHABET.contains(&b))
}
