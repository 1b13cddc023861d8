use std::f64::consts;

use crate::complex::Complex;

/// Euler's number, `e`.
pub const E: Complex = Complex::from_real(consts::E);
/// The imaginary unit, `i`.
pub const I: Complex = Complex::new(0.0, 1.0);
/// Natural logarithm of 2.
pub const LN2: Complex = Complex::from_real(consts::LN_2);
/// Natural logarithm of 10.
pub const LN10: Complex = Complex::from_real(consts::LN_10);
/// Base 2 logarithm of `e`.
pub const LOG2E: Complex = Complex::from_real(consts::LOG2_E);
/// Base 10 logarithm of `e`.
pub const LOG10E: Complex = Complex::from_real(consts::LOG10_E);
/// Ratio of a circle's circumference to its diameter.
pub const PI: Complex = Complex::from_real(consts::PI);
/// Square root of 1/2.
pub const SQRT1_2: Complex = Complex::from_real(consts::FRAC_1_SQRT_2);
/// Square root of 2.
pub const SQRT2: Complex = Complex::from_real(consts::SQRT_2);
