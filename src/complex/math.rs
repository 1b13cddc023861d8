//! ```
//! use complexpr::{Complex, complex::math};
//!
//! assert_eq!(math::norm((3.0, 4.0)), Complex::from(25.0));
//! assert_eq!(math::multiply(2, math::I), Complex::new(0.0, 2.0));
//! ```

/// Named constants such as `PI` and `E`.
pub mod constants;
/// Exponentials, logarithms, powers and roots.
pub mod exponential;
/// Inverse circular and inverse hyperbolic functions.
pub mod inverse;
/// Componentwise rounding and the Gaussian-integer modulus.
pub mod rounding;
/// Circular and hyperbolic functions.
pub mod trigonometric;

pub use constants::{E, I, LN2, LN10, LOG2E, LOG10E, PI, SQRT1_2, SQRT2};

use crate::complex::Complex;

/// Generates free-function wrappers around single-operand `Complex` methods.
macro_rules! unary_math {
    ($($fname:ident => $method:ident),* $(,)?) => {
        $(
            #[doc = concat!("Free-function form of [`Complex::", stringify!($method), "`].")]
            #[must_use]
            pub fn $fname(u: impl Into<Complex>) -> Complex {
                u.into().$method()
            }
        )*
    };
}

unary_math! {
    real      => re,
    imaginary => im,
    negate    => negate,
    conj      => conj,
    norm      => norm,
    abs       => abs,
    arg       => arg,
    exp       => exp,
    ln        => ln,
    sqrt      => sqrt,
    log2      => log2,
    log10     => log10,
    sin       => sin,
    cos       => cos,
    tan       => tan,
    cot       => cot,
    sec       => sec,
    csc       => csc,
    sinh      => sinh,
    cosh      => cosh,
    tanh      => tanh,
    coth      => coth,
    sech      => sech,
    csch      => csch,
    asin      => asin,
    acos      => acos,
    atan      => atan,
    acot      => acot,
    asec      => asec,
    acsc      => acsc,
    asinh     => asinh,
    acosh     => acosh,
    atanh     => atanh,
    acoth     => acoth,
    asech     => asech,
    acsch     => acsch,
    floor     => floor,
    ceil      => ceil,
    nint      => nint,
    frac      => frac,
}

/// Adds two numbers.
#[must_use]
pub fn add(u: impl Into<Complex>, v: impl Into<Complex>) -> Complex {
    u.into() + v.into()
}

/// Subtracts `v` from `u`.
#[must_use]
pub fn subtract(u: impl Into<Complex>, v: impl Into<Complex>) -> Complex {
    u.into() - v.into()
}

/// Multiplies two numbers.
#[must_use]
pub fn multiply(u: impl Into<Complex>, v: impl Into<Complex>) -> Complex {
    u.into() * v.into()
}

/// Divides `u` by `v`. A zero divisor gives IEEE infinities or NaN.
///
/// # Example
/// ```
/// use complexpr::{Complex, complex::math};
/// assert_eq!(math::divide((1.0, 1.0), (0.0, 1.0)), Complex::new(1.0, -1.0));
/// ```
#[must_use]
pub fn divide(u: impl Into<Complex>, v: impl Into<Complex>) -> Complex {
    u.into() / v.into()
}

/// Raises `base` to `power` along the principal branch.
#[must_use]
pub fn pow(base: impl Into<Complex>, power: impl Into<Complex>) -> Complex {
    base.into().pow(power.into())
}

/// The logarithm of `u` to the given `base`.
///
/// # Parameters
/// - `base`: Base of the logarithm.
/// - `u`: Number whose logarithm is taken.
///
/// # Returns
/// `ln(u) / ln(base)`.
#[must_use]
pub fn log(base: impl Into<Complex>, u: impl Into<Complex>) -> Complex {
    u.into().log(base.into())
}

/// The Gaussian-integer remainder of `u` divided by `v`.
#[must_use]
pub fn modulo(u: impl Into<Complex>, v: impl Into<Complex>) -> Complex {
    u.into().modulo(v.into())
}
