use crate::{PUBLIC_GUESTBOOK_ID, normalize_target, resolve_visibility};

use googletest::prelude::*;

#[test]
fn given_public_targets_when_private_requested_then_still_public() {
    // Given / When / Then
    for target in ["public", "default", ""] {
        assert_that!(resolve_visibility(target, Some(false)), eq(true));
    }
}

#[test]
fn given_wedding_target_when_no_flag_then_defaults_public() {
    let target = "6f1c3a52-0000-4000-8000-000000000000";

    assert_that!(resolve_visibility(target, None), eq(true));
    assert_that!(resolve_visibility(target, Some(true)), eq(true));
    assert_that!(resolve_visibility(target, Some(false)), eq(false));
}

#[test]
fn given_empty_target_when_normalized_then_public_id() {
    assert_that!(normalize_target(""), eq(PUBLIC_GUESTBOOK_ID));
    assert_that!(normalize_target("abc12345"), eq("abc12345"));
}
