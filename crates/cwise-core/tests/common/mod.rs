//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

/// Generate slice lengths that hit packet edges for every backend width
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        3,   // Below f64x4
        4,   // f64x4 width
        5,   // f64x4 width + 1
        7,   // f32x8 width - 1
        8,   // f32x8 width
        9,   // f32x8 width + 1
        15,  // Multiple of no packet width
        16,  // Power of 2
        17,  // Power of 2 + 1
        31,  // Prime
        64,  // Cache line
        127, // Mersenne prime
    ]
}

/// Deterministic test data without pulling in an RNG
pub fn ramp_f64(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i as f64 * 0.37).sin() * 10.0).collect()
}

pub fn ramp_i32(len: usize) -> Vec<i32> {
    (0..len).map(|i| (i as i32 * 7919) % 211 - 105).collect()
}

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        std::f64::consts::PI,
        1e-308, // Near underflow
    ]
}

pub fn special_values_f32() -> Vec<f32> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f32::MIN,
        f32::MAX,
        f32::MIN_POSITIVE,
        -f32::MIN_POSITIVE,
        f32::EPSILON,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        std::f32::consts::E,
        1e-38, // Near underflow
    ]
}

/// Every ordered pair of `values`, split into left and right operands
pub fn all_pairs<T: Copy>(values: &[T]) -> (Vec<T>, Vec<T>) {
    values
        .iter()
        .flat_map(|&a| values.iter().map(move |&b| (a, b)))
        .unzip()
}

/// Equality that treats two NaNs as the same value
pub fn same_value<T: PartialEq>(a: T, b: T) -> bool {
    #[allow(clippy::eq_op)]
    let both_nan = a != a && b != b;
    a == b || both_nan
}
