//! Parsing a batch of coordinate pairs and keeping only the valid ones.
//!
//! Run with: `cargo run --example coordinates`

use error_union::{dispatch, propagate, ErrorUnion, Fallible, SuccessesExt};

#[derive(Debug, Clone, PartialEq)]
struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct FormatError;

#[derive(Debug, Clone, PartialEq)]
struct NumberError {
    text: String,
}

#[derive(Debug, Clone, PartialEq)]
struct RangeError {
    axis: &'static str,
    value: f64,
}

fn number(text: &str) -> Fallible<f64, (NumberError,)> {
    text.trim()
        .parse()
        .map_err(|_| ErrorUnion::new(NumberError { text: text.trim().to_string() }))
}

fn coordinate(raw: &str) -> Fallible<Coordinate, (FormatError, NumberError, RangeError)> {
    let (lat, lon) = match raw.split_once(',') {
        Some(parts) => parts,
        None => return Err(ErrorUnion::new(FormatError)),
    };

    let latitude = propagate!(number(lat));
    let longitude = propagate!(number(lon));

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ErrorUnion::new(RangeError { axis: "latitude", value: latitude }));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ErrorUnion::new(RangeError { axis: "longitude", value: longitude }));
    }

    Ok(Coordinate { latitude, longitude })
}

fn main() {
    let input = "40.7128,-74.0060; 34.0522,-118.2437; invalid,data; 91.0000,45.0000; 48.8566,2.3522";
    let parsed: Vec<_> = input.split(';').map(coordinate).collect();

    println!("valid coordinates:");
    for coordinate in parsed.iter().cloned().successes() {
        println!("  - lat {:>9.4}, lon {:>9.4}", coordinate.latitude, coordinate.longitude);
    }

    println!("full report:");
    for outcome in parsed {
        let line = dispatch!(outcome, {
            |c: Coordinate| format!("ok ({}, {})", c.latitude, c.longitude),
            |_e: FormatError| "expected `latitude,longitude`".to_string(),
            |e: NumberError| format!("not a number: {:?}", e.text),
            |e: RangeError| format!("{} out of range: {}", e.axis, e.value),
        });
        println!("  - {line}");
    }
}
