//! Merging two independently-defined error kinds without a shared enum.
//!
//! Run with: `cargo run --example error_kinds`

use error_union::{dispatch, propagate, ErrorUnion, Fallible};

#[derive(Debug, Clone, PartialEq)]
struct ParseError {
    message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct FormatError {
    message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Coordinates {
    x: i32,
    y: i32,
}

impl Coordinates {
    fn parse(raw: &str) -> Fallible<Self, (FormatError, ParseError)> {
        let int = |text: &str| -> Result<i32, ParseError> {
            text.trim()
                .parse()
                .map_err(|_| ParseError { message: "not an integer" })
        };

        let (x, y) = match raw.split_once(',') {
            Some(parts) => parts,
            None => return Err(ErrorUnion::new(FormatError { message: "missing comma" })),
        };

        Ok(Coordinates { x: propagate!(int(x)), y: propagate!(int(y)) })
    }
}

fn main() {
    for raw in ["10,20", "10;20", "10,twenty"] {
        let message = dispatch!(Coordinates::parse(raw), {
            |c: Coordinates| format!("parsed ({}, {})", c.x, c.y),
            |e: FormatError| format!("format error: {}", e.message),
            |e: ParseError| format!("parse error: {}", e.message),
        });
        println!("{raw:>12} => {message}");
    }
}
