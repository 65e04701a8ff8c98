// ============================================================================
// Basic Usage Example
// ============================================================================

use fixbits::prelude::*;

fn main() {
    println!("=== fixbits Example ===\n");

    // 32-bit storage with 15 fractional bits: values resolve to 2^-15 and
    // the integer part spans 17 bits (roughly -65536..65536)
    type Money = Fixed32<15>;

    // Construction
    println!("Constructing values...");
    let price = Money::from_parts(15, 5); // 15.5
    let qty = Money::from_integer(3);
    let parsed: Money = "46.5".parse().unwrap();

    println!("  price  = {} (raw bits {})", price, price.raw_value());
    println!("  qty    = {}", qty);
    println!("  parsed = {}\n", parsed);

    // The digit sequence scales by count, not position
    println!("Digit-count invariance:");
    println!("  from_parts(15, 5)   = {}", Money::from_parts(15, 5));
    println!("  from_parts(15, 50)  = {}", Money::from_parts(15, 50));
    println!("  from_parts(15, 500) = {}\n", Money::from_parts(15, 500));

    // Arithmetic
    println!("=== Arithmetic ===");
    let total = price * qty;
    println!("  {} * {} = {}", price, qty, total);
    assert_eq!(total, parsed);

    let each = total / qty;
    println!("  {} / {} = {}", total, qty, each);

    let mut running = Money::ZERO;
    running += price;
    running += price;
    running -= Money::from_parts(0, 5);
    println!("  running total = {}\n", running); // 30.5

    // Mixed operands: * and / with a plain integer scale the value itself
    println!("=== Mixed Operands ===");
    let doubled = price * 2;
    println!("  {} * 2 = {}", price, doubled);
    println!("  10 / {} = {}", Money::from_integer(4), 10 / Money::from_integer(4));

    // Comparisons work across forms
    assert!(total > 46);
    assert!(46 < total);
    assert!(Money::from_integer(5) < Money::from_parts(5, 5));
    println!("  {} > 46: {}\n", total, total > 46);

    // The fraction is an added magnitude; it never inherits the sign of
    // the integer part
    println!("=== Fraction Sign Contract ===");
    let x = Money::from_parts(-1, 5);
    println!("  from_parts(-1, 5) = {} (that is -1 + 0.5)", x);
    let minus_one_and_a_half = -Money::from_parts(1, 5);
    println!("  -from_parts(1, 5) = {}\n", minus_one_and_a_half);

    // Other widths
    println!("=== Widths ===");
    println!("  Fixed8<4>:   {}", Fixed8::<4>::from_parts(1, 5));
    println!("  Fixed16<8>:  {}", Fixed16::<8>::from_parts(1, 5));
    println!("  Fixed64<31>: {}", Fixed64::<31>::from_parts(1, 5));

    // rust_decimal at the API boundary
    println!("\n=== Decimal Boundary ===");
    let d = total.to_decimal();
    println!("  to_decimal: {}", d);
    let back = Money::from_decimal(d).unwrap();
    assert_eq!(back, total);
    println!("  from_decimal roundtrip: {}", back);
}
