//! Tests for the array printer.
//!
//! These tests verify the print pass:
//! - One decimal integer per line, in index order
//! - Exactly `count` lines for any valid count
//! - Rejection of counts larger than the buffer, with no partial output
//!
//! ## Test Organization
//!
//! 1. **Basic Output** - Lines and ordering
//! 2. **Count Handling** - Prefixes, zero, full length
//! 3. **Rejected Counts** - Errors and absence of output
//! 4. **Sinks** - fmt and io writers

use fixedarray::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn render_with_count(elements: &[i32], count: usize) -> Result<String, ArrayError> {
    Printer::new().count(count).build()?.render(elements)
}

// ============================================================================
// Basic Output Tests
// ============================================================================

/// Test printing three literal values.
///
/// Verifies the lines "1", "2", "3".
#[test]
fn test_print_literal_values() {
    let text = render_with_count(&[1, 2, 3], 3).unwrap();

    assert_eq!(text, "1\n2\n3\n");
}

/// Test negative values keep their sign.
#[test]
fn test_print_negative_values() {
    let text = render_with_count(&[-7, 0, 42, i32::MIN], 4).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["-7", "0", "42", "-2147483648"]);
}

/// Test the zero-initialized static array.
///
/// Verifies five lines, all "0".
#[test]
fn test_print_static_array() {
    let zeros = StaticArray::zeroed();
    let text = Printer::new()
        .count(STATIC_ARRAY_LEN)
        .build()
        .unwrap()
        .render(&zeros)
        .unwrap();

    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().all(|line| line == "0"));
}

// ============================================================================
// Count Handling Tests
// ============================================================================

/// Test every prefix length of a sequence.
///
/// Verifies exactly `n` lines with line `i` equal to `s[i]`.
#[test]
fn test_print_every_prefix() {
    let values = [5, -3, 8, 13, -21, 34];

    for n in 0..=values.len() {
        let text = render_with_count(&values, n).unwrap();
        let lines: Vec<i32> = text.lines().map(|l| l.parse().unwrap()).collect();

        assert_eq!(lines.len(), n, "count {n} should emit {n} lines");
        assert_eq!(lines.as_slice(), &values[..n]);
    }
}

/// Test a zero count emits nothing.
#[test]
fn test_print_zero_count() {
    assert_eq!(render_with_count(&[1, 2, 3], 0).unwrap(), "");
    assert_eq!(render_with_count(&[], 0).unwrap(), "");
}

/// Test an unset count prints the whole sequence.
#[test]
fn test_print_default_count_is_full_length() {
    let printer = Printer::new().build().unwrap();

    assert_eq!(printer.count(), None);
    assert_eq!(printer.render(&[9, 8]).unwrap(), "9\n8\n");
}

// ============================================================================
// Rejected Count Tests
// ============================================================================

/// Test a count larger than the buffer is reported.
#[test]
fn test_count_exceeds_length() {
    let res = render_with_count(&[1, 2, 3], 4);

    assert_eq!(res, Err(ArrayError::CountExceedsLength { count: 4, len: 3 }));
}

/// Test a rejected count writes nothing to the sink.
#[test]
fn test_rejected_count_writes_nothing() {
    let printer = Printer::new().count(10).build().unwrap();
    let mut sink = String::from("prefix");

    let res = printer.write_to(&mut sink, &[1, 2, 3]);

    assert!(res.is_err());
    assert_eq!(sink, "prefix");
}

/// Test the stdout shortcut rejects an oversized count.
#[test]
fn test_print_rejects_oversized_count() {
    let res = print(&[1_i64, 2], 3);

    assert_eq!(res, Err(ArrayError::CountExceedsLength { count: 3, len: 2 }));
}

/// Test duplicate builder parameters are reported.
#[test]
fn test_duplicate_count() {
    let res = Printer::new().count(1).count(2).build();

    assert_eq!(
        res,
        Err(ArrayError::DuplicateParameter { parameter: "count" })
    );
}

// ============================================================================
// Sink Tests
// ============================================================================

/// Test writing to an io sink returns the number of lines.
#[test]
fn test_print_to_io_sink() {
    let printer = Printer::new().count(2).build().unwrap();
    let mut sink: Vec<u8> = Vec::new();

    let written = printer.print_to(&mut sink, &[7_i8, -8, 9]).unwrap();

    assert_eq!(written, 2);
    assert_eq!(sink, b"7\n-8\n");
}

/// Test a failing io sink is reported as a write error.
#[test]
fn test_print_to_failing_sink() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let printer = Printer::new().build().unwrap();
    let res = printer.print_to(&mut Broken, &[1, 2]);

    assert!(matches!(res, Err(ArrayError::Write(msg)) if msg.contains("sink closed")));
}

/// Test the full-array shortcut accepts a fixed array.
#[test]
fn test_print_all_succeeds() {
    let values = FixedArray::new([1, 2, 3]);

    assert_eq!(print_all(&values), Ok(()));
}
