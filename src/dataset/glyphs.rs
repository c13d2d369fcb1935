use ndarray::prelude::*;

/// Number of pixels in a glyph (3 columns by 4 rows)
pub const GLYPH_PIXELS: usize = 12;

/// Labels of the training glyphs, in class order
const LABELS: [&str; 5] = ["0", "1", ".", "x", "+"];

#[rustfmt::skip]
const PATTERNS: [[f64; GLYPH_PIXELS]; 5] = [
    // 0
    [0.0, 1.0, 0.0,
     1.0, 0.0, 1.0,
     1.0, 0.0, 1.0,
     0.0, 1.0, 0.0],
    // 1
    [0.0, 1.0, 0.0,
     1.0, 1.0, 0.0,
     0.0, 1.0, 0.0,
     0.0, 1.0, 0.0],
    // .
    [0.0, 0.0, 0.0,
     0.0, 0.0, 0.0,
     0.0, 0.0, 0.0,
     0.0, 1.0, 0.0],
    // x
    [0.0, 0.0, 0.0,
     1.0, 0.0, 1.0,
     0.0, 1.0, 0.0,
     1.0, 0.0, 1.0],
    // +
    [0.0, 0.0, 0.0,
     0.0, 1.0, 0.0,
     1.0, 1.0, 1.0,
     0.0, 1.0, 0.0],
];

const TEST_LABELS: [&str; 3] = ["1", "x", "0"];

#[rustfmt::skip]
const TEST_PATTERNS: [[f64; GLYPH_PIXELS]; 3] = [
    [0.0, 1.0, 0.0,
     1.0, 1.0, 0.0,
     0.0, 1.0, 0.0,
     0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0,
     1.0, 0.0, 1.0,
     0.0, 1.0, 0.0,
     1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0,
     1.0, 0.0, 1.0,
     1.0, 0.0, 1.0,
     0.0, 1.0, 0.0],
];

fn to_array(patterns: &[[f64; GLYPH_PIXELS]]) -> Array2<f64> {
    Array2::from_shape_fn((patterns.len(), GLYPH_PIXELS), |(i, j)| patterns[i][j])
}

/// Loads the glyph training set
///
/// Five binary 3×4 pixel glyphs (`0`, `1`, `.`, `x`, `+`), each flattened row by row
/// into 12 values, with one-hot targets.
///
/// # Returns
///
/// A tuple containing:
/// - `Vec<&'static str>`: The label of each class, indexed by class
/// - `Array2<f64>`: A 2D array of shape (5, 12) holding the raw 0/1 pixels
/// - `Array2<f64>`: A 2D array of shape (5, 5) holding the one-hot targets
///
/// # Example
///
/// ```
/// use neuronet::dataset::glyphs::load_glyphs;
///
/// let (labels, patterns, targets) = load_glyphs();
/// assert_eq!(labels.len(), 5);
/// assert_eq!(patterns.shape(), &[5, 12]);
/// assert_eq!(targets.shape(), &[5, 5]);
/// ```
pub fn load_glyphs() -> (Vec<&'static str>, Array2<f64>, Array2<f64>) {
    (
        LABELS.to_vec(),
        to_array(&PATTERNS),
        Array2::eye(LABELS.len()),
    )
}

/// Loads the glyph test set
///
/// # Returns
///
/// A tuple containing:
/// - `Array2<f64>`: A 2D array of shape (3, 12) holding the raw 0/1 pixels
/// - `Vec<&'static str>`: The expected label of each test pattern
pub fn load_glyph_tests() -> (Array2<f64>, Vec<&'static str>) {
    (to_array(&TEST_PATTERNS), TEST_LABELS.to_vec())
}
