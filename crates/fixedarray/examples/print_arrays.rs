//! Fixed Array Printing Examples
//!
//! This example demonstrates:
//! - Literal and zero initialization
//! - Printing a prefix with an explicit count
//! - The error reported for a count larger than the buffer

#[cfg(feature = "std")]
use fixedarray::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), ArrayError> {
    println!("{}", "=".repeat(40));
    println!("Fixed Array Printing");
    println!("{}", "=".repeat(40));

    example_1_literals()?;
    example_2_prefix()?;
    example_3_rejected_count();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Literal and zero initialization
fn example_1_literals() -> Result<(), ArrayError> {
    println!("Example 1: Literals");
    println!("{}", "-".repeat(40));

    let a = FixedArray::new([1, 2, 3]);
    print_all(&a)?;

    let d = StaticArray::zeroed();
    print_all(&d)?;

    // Expected output:
    // 1
    // 2
    // 3
    // 0
    // 0
    // 0
    // 0
    // 0
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: First two elements only
fn example_2_prefix() -> Result<(), ArrayError> {
    println!("Example 2: Prefix");
    println!("{}", "-".repeat(40));

    print(&[10, -20, 30], 2)?;

    // Expected output:
    // 10
    // -20
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Count larger than the buffer
fn example_3_rejected_count() {
    println!("Example 3: Rejected count");
    println!("{}", "-".repeat(40));

    if let Err(e) = print(&[1, 2, 3], 4) {
        println!("{}", e);
    }

    // Expected output:
    // Count exceeds buffer length: count 4, length 3
}
