use error_union::{dispatch, ErrorUnion, Fallible, FlattenInto};

#[derive(Debug, Clone, Copy, PartialEq)]
struct AuthError;
#[derive(Debug, Clone, Copy, PartialEq)]
struct QuotaError;
#[derive(Debug, Clone, Copy, PartialEq)]
struct IoError;
#[derive(Debug, Clone, Copy, PartialEq)]
struct ParseError;

type Inner = Fallible<i32, (ParseError,)>;
type Policy = ErrorUnion<(AuthError, QuotaError)>;
type Outer = Result<Inner, ErrorUnion<(IoError, Policy)>>;

#[derive(Debug, PartialEq)]
enum Routed {
    Value(i32),
    Parse,
    Io,
    Auth,
    Quota,
}

fn via_dispatch(outer: Outer) -> Routed {
    dispatch!(outer, {
        |value: i32| Routed::Value(value),
        |_e: ParseError| Routed::Parse,
        |_e: IoError| Routed::Io,
        |_e: AuthError| Routed::Auth,
        |_e: QuotaError| Routed::Quota,
    })
}

fn via_structural_match(outer: Outer) -> Routed {
    match outer {
        Ok(Ok(value)) => Routed::Value(value),
        Ok(Err(inner)) => match inner.narrow::<ParseError, _>() {
            Ok(_) => Routed::Parse,
            Err(rest) => rest.never(),
        },
        Err(io_or_policy) => match io_or_policy.narrow::<IoError, _>() {
            Ok(_) => Routed::Io,
            Err(rest) => match rest.into_single().narrow::<AuthError, _>() {
                Ok(_) => Routed::Auth,
                Err(rest) => {
                    let _: QuotaError = rest.into_single();
                    Routed::Quota
                }
            },
        },
    }
}

fn depth_four_samples() -> Vec<Outer> {
    vec![
        Ok(Ok(42)),
        Ok(Err(ErrorUnion::new(ParseError))),
        Err(ErrorUnion::new(IoError)),
        Err(ErrorUnion::new(Policy::new(AuthError))),
        Err(ErrorUnion::new(Policy::new(QuotaError))),
    ]
}

#[test]
fn dispatch_agrees_with_structural_matching_at_every_depth() {
    for sample in depth_four_samples() {
        let expected = via_structural_match(sample);
        assert_eq!(via_dispatch(sample), expected);
    }
}

#[test]
fn nested_results_flatten_through_the_success_side() {
    let deep: Result<Result<i32, ParseError>, IoError> = Ok(Err(ParseError));
    let routed = dispatch!(deep, {
        |value: i32| Routed::Value(value),
        |_e: ParseError| Routed::Parse,
        |_e: IoError| Routed::Io,
    });
    assert_eq!(routed, Routed::Parse);
}

#[test]
fn flatten_into_reaches_the_innermost_case() {
    let nested: ErrorUnion<(IoError, Policy)> = ErrorUnion::new(Policy::new(QuotaError));
    let flat: ErrorUnion<(IoError, AuthError, QuotaError)> = nested.flatten_into();

    assert_eq!(flat.get::<QuotaError, _>(), Some(&QuotaError));
    assert_eq!(flat.case_index(), 2);
}

#[test]
fn a_plain_error_lifts_into_a_union() {
    let flat: ErrorUnion<(IoError, ParseError)> = ParseError.flatten_into();
    assert!(flat.is::<ParseError, _>());
}
