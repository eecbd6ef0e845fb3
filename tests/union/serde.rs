use error_union::ErrorUnion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Rejected {
    code: u16,
}

#[test]
fn serializes_as_index_and_payload() {
    let err: ErrorUnion<(String, u32)> = ErrorUnion::new(404u32);
    let json = serde_json::to_string(&err).unwrap();

    assert_eq!(json, "[1,404]");
}

#[test]
fn round_trips_through_json() {
    let err: ErrorUnion<(String, Rejected)> = ErrorUnion::new(Rejected { code: 503 });
    let json = serde_json::to_string(&err).unwrap();
    let back: ErrorUnion<(String, Rejected)> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, err);
    assert_eq!(back.get::<Rejected, _>(), Some(&Rejected { code: 503 }));
}

#[test]
fn first_alternative_round_trips_too() {
    let err: ErrorUnion<(String, Rejected)> = ErrorUnion::new("bad request".to_string());
    let json = serde_json::to_string(&err).unwrap();
    let back: ErrorUnion<(String, Rejected)> = serde_json::from_str(&json).unwrap();

    assert_eq!(json, "[0,\"bad request\"]");
    assert_eq!(back, err);
}

#[test]
fn out_of_range_index_is_a_data_error() {
    let parsed = serde_json::from_str::<ErrorUnion<(String, u32)>>("[5,404]");
    assert!(parsed.is_err());
}

#[test]
fn wrong_payload_shape_is_a_data_error() {
    let parsed = serde_json::from_str::<ErrorUnion<(String, u32)>>("[1,\"text\"]");
    assert!(parsed.is_err());
}
