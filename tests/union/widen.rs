use error_union::{dispatch, ErrorUnion};

#[derive(Debug, Clone, PartialEq)]
struct Refused;
#[derive(Debug, Clone, PartialEq)]
struct Unreachable {
    host: &'static str,
}
#[derive(Debug, Clone, PartialEq)]
struct TooSlow {
    millis: u64,
}

#[test]
fn widening_preserves_the_live_payload() {
    let small: ErrorUnion<(Refused, Unreachable)> =
        ErrorUnion::new(Unreachable { host: "db-1" });
    let wide: ErrorUnion<(Refused, Unreachable, TooSlow)> = small.widen();

    assert_eq!(wide.get::<Unreachable, _>(), Some(&Unreachable { host: "db-1" }));
    assert_eq!(wide.case_index(), 1);
}

#[test]
fn widening_may_reorder_the_declared_set() {
    let small: ErrorUnion<(Refused, Unreachable)> = ErrorUnion::new(Refused);
    let reordered: ErrorUnion<(TooSlow, Unreachable, Refused)> = small.widen();

    assert_eq!(reordered.case_index(), 2);
    assert!(reordered.is::<Refused, _>());
}

#[test]
fn widening_round_trips_every_alternative() {
    // Widen then dispatch back down: the payload must come through unchanged
    // for both source alternatives.
    for (which, expected) in [(0, "refused"), (1, "db-9")] {
        let small: ErrorUnion<(Refused, Unreachable)> = if which == 0 {
            ErrorUnion::new(Refused)
        } else {
            ErrorUnion::new(Unreachable { host: "db-9" })
        };

        let wide: ErrorUnion<(Refused, Unreachable, TooSlow)> = small.widen();
        let label = dispatch!(wide, {
            |_e: Refused| "refused".to_string(),
            |e: Unreachable| e.host.to_string(),
            |e: TooSlow| e.millis.to_string(),
        });
        assert_eq!(label, expected);
    }
}

#[test]
fn nested_unions_dissolve_while_widening() {
    type Transport = ErrorUnion<(Refused, Unreachable)>;

    let nested: ErrorUnion<(TooSlow, Transport)> =
        ErrorUnion::new(Transport::new(Unreachable { host: "db-2" }));
    let flat: ErrorUnion<(TooSlow, Refused, Unreachable)> = nested.widen();

    assert_eq!(flat.get::<Unreachable, _>(), Some(&Unreachable { host: "db-2" }));
    assert_eq!(flat.case_index(), 2);
}

#[test]
fn widening_to_the_same_set_is_the_identity() {
    let err: ErrorUnion<(Refused, Unreachable)> = ErrorUnion::new(Refused);
    let same: ErrorUnion<(Refused, Unreachable)> = err.clone().widen();

    assert_eq!(err, same);
}
