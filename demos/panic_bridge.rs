//! Adapting panicking code to the union calling convention.
//!
//! Run with: `cargo run --example panic_bridge --features std`

use error_union::{catch_union, dispatch, Fallible};

#[derive(Debug, Clone, PartialEq)]
struct Corrupt {
    offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct Truncated;

/// A legacy decoder that signals failure by panicking with a typed payload.
fn legacy_decode(frame: &[u8]) -> u32 {
    if frame.len() < 4 {
        std::panic::panic_any(Truncated);
    }
    if frame[0] != 0xAB {
        std::panic::panic_any(Corrupt { offset: 0 });
    }
    u32::from_be_bytes([frame[0], frame[1], frame[2], frame[3]])
}

fn decode(frame: &[u8]) -> Fallible<u32, (Corrupt, Truncated)> {
    catch_union(|| Ok(legacy_decode(frame)))
}

fn main() {
    // Expected panics from the legacy decoder would otherwise clutter stderr.
    std::panic::set_hook(Box::new(|_| {}));

    let frames: [&[u8]; 3] = [&[0xAB, 0x00, 0x00, 0x2A], &[0xFF, 0x00, 0x00, 0x2A], &[0xAB]];

    for frame in frames {
        let report = dispatch!(decode(frame), {
            |word: u32| format!("decoded {word:#010x}"),
            |e: Corrupt| format!("corrupt frame at byte {}", e.offset),
            |_e: Truncated| "truncated frame".to_string(),
        });
        println!("{report}");
    }
}
