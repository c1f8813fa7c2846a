//! Shared test utilities for the GCOS compliance workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Test data path helpers
//! - Skip macros for optional test data
//! - Synthetic observation/model series generators
//! - Criterion table and colocated document fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{require_test_file, fixtures};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro to skip a test if the required file is not found.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_test_file;
///
/// #[test]
/// fn test_sample_document() {
///     let path = require_test_file!("colocated_od550aer.json");
///     // Test code using path...
/// }
/// ```
///
/// If the file is not found, the test will print a skip message and return early.
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: Test file '{}' not found. Set TEST_DATA_DIR to its location.",
                    $name
                );
                return;
            }
        }
    }};
}

/// Asserts that two floats (fractions, percentages) agree within a tolerance.
///
/// The tolerance defaults to `1e-9` when omitted.
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(2.0 / 3.0 * 100.0, 66.6667, 1e-3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right, tolerance): (f64, f64, f64) = ($left, $right, $tolerance);
        assert!(
            (left - right).abs() <= tolerance,
            "values differ by more than {}: {} vs {}",
            tolerance,
            left,
            right
        );
    }};
}
