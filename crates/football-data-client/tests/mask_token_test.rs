//! Tests for [`football_data_client::mask_token`]: API keys never appear in logs in full.

use football_data_client::mask_token;

/// **Test: Keys of 12 chars or fewer are fully masked.**
#[test]
fn mask_token_short_is_fully_masked() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("abc"), "***");
    assert_eq!(mask_token("0123456789ab"), "***");
}

/// **Test: Longer keys keep 4 leading and 4 trailing chars.**
#[test]
fn mask_token_long_keeps_head_and_tail() {
    assert_eq!(mask_token("0123456789abc"), "0123***9abc");
    let masked = mask_token("a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6");
    assert_eq!(masked, "a1b2***c5d6");
    assert_eq!(masked.len(), 4 + 3 + 4);
}
