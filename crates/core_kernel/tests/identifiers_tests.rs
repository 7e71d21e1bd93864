//! Tests for the identifier newtypes

use core_kernel::{AttachmentId, ClaimId, CustomerId, StatusEntryId};

#[test]
fn test_ids_serialize_transparently() {
    let id = ClaimId::new(15);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "15");

    let back: ClaimId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_distinct_id_types_have_distinct_labels() {
    assert_eq!(ClaimId::label(), "claim");
    assert_eq!(CustomerId::label(), "customer");
    assert_eq!(StatusEntryId::label(), "status entry");
    assert_eq!(AttachmentId::label(), "attachment");
}

#[test]
fn test_invalid_parse_is_rejected() {
    assert!("not-a-number".parse::<ClaimId>().is_err());
}
