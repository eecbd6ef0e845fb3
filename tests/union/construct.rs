use core::error::Error;
use error_union::ErrorUnion;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NotFound {
    key: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Timeout {
    millis: u64,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {} not found", self.key)
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.millis)
    }
}

impl Error for NotFound {}
impl Error for Timeout {}

#[test]
fn new_tags_the_declared_alternative() {
    let err: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(Timeout { millis: 250 });

    assert_eq!(err.case_index(), 1);
    assert!(err.is::<Timeout, _>());
    assert!(!err.is::<NotFound, _>());
    assert_eq!(err.get::<Timeout, _>(), Some(&Timeout { millis: 250 }));
    assert_eq!(err.get::<NotFound, _>(), None);
}

#[test]
fn case_index_follows_declaration_order() {
    let first: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(NotFound { key: 1 });
    let second: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(Timeout { millis: 1 });

    assert_eq!(first.case_index(), 0);
    assert_eq!(second.case_index(), 1);
}

#[test]
fn single_alternative_unions_unwrap() {
    let err: ErrorUnion<(NotFound,)> = ErrorUnion::new(NotFound { key: 9 });
    assert_eq!(err.into_single(), NotFound { key: 9 });
}

#[test]
fn equality_compares_position_and_payload() {
    let a: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(NotFound { key: 5 });
    let b: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(NotFound { key: 5 });
    let c: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(NotFound { key: 6 });
    let d: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(Timeout { millis: 5 });

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn display_and_error_delegate_to_the_live_alternative() {
    let err: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(NotFound { key: 7 });

    assert_eq!(err.to_string(), "key 7 not found");
    assert!(err.source().is_none());

    let debugged = format!("{err:?}");
    assert!(debugged.contains("NotFound"));
    assert!(debugged.contains("key: 7"));
}

#[test]
fn copy_and_hash_follow_the_payloads() {
    let err: ErrorUnion<(NotFound, Timeout)> = ErrorUnion::new(Timeout { millis: 3 });
    let copied = err;

    // Both usable after the copy.
    assert_eq!(err, copied);

    let mut seen = HashSet::new();
    assert!(seen.insert(err));
    assert!(!seen.insert(copied));
}
