/// The complex number type.
///
/// Defines `Complex`, an immutable pair of `f64` values, its arithmetic
/// operators and its conversions from number-like inputs (real scalars,
/// real/imaginary pairs, slices and strings).
pub mod number;
/// Pure functions over complex numbers.
///
/// This module is the numeric domain the evaluator works in: arithmetic,
/// exponentials and logarithms, the trigonometric and hyperbolic families,
/// their inverses, Gaussian-integer rounding and the usual constants. Every
/// function accepts any number-like operand and returns a `Complex`, even when
/// the mathematical result is real.
pub mod math;

pub use number::Complex;
