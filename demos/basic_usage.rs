//! Basic usage example for bitscan.
//!
//! This example walks through scanning, span iteration, and the
//! yield-function composition check.

use bitscan::{next_set, next_unset, spans, ChartItem, YieldFunction, NOT_FOUND};

fn main() {
    println!("=== bitscan - Basic Usage Example ===\n");

    // Scan a 32-bit word
    let vec = 0b0111_0010;
    println!("vec = {:#010b}", vec);
    println!("  next_set(vec, 0):   {}", next_set(vec, 0));
    println!("  next_set(vec, 2):   {}", next_set(vec, 2));
    println!("  next_unset(vec, 4): {}", next_unset(vec, 4));
    println!("  next_set(vec, 7):   {} (NOT_FOUND = {})", next_set(vec, 7), NOT_FOUND);

    // Top bit and width boundary
    println!("\nWidth boundary:");
    println!("  next_set(i32::MIN, 0): {}", next_set(i32::MIN, 0));
    println!("  next_unset(-1, 0):     {}", next_unset(-1, 0));

    // Runs of set bits
    println!("\nSpans of {:#b}:", 0b1101_1100u64);
    for (start, end) in spans(0b1101_1100u64) {
        println!("  [{}, {})", start, end);
    }

    // Composing chart items: VP -> V NP with a discontinuous VP
    println!("\nComposition:");
    let yf = match YieldFunction::new(&[&[0u8, 1][..], &[0][..]]) {
        Ok(yf) => yf,
        Err(err) => {
            eprintln!("bad yield function: {}", err);
            return;
        }
    };
    println!("  yield function: {:?}", yf.to_components());

    let verb = ChartItem::new(1, 0b1_0001);
    let object = ChartItem::new(2, 0b0_0110);
    match yf.compose(3, &verb, &object) {
        Some(parent) => println!(
            "  {} + {} => {} (fan-out {})",
            verb,
            object,
            parent,
            parent.fan_out()
        ),
        None => println!("  {} + {} do not compose", verb, object),
    }

    let swapped = yf.compose(3, &object, &verb);
    println!("  {} + {} => {:?}", object, verb, swapped);

    println!("\n=== Example Complete ===");
}
