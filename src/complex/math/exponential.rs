use std::{
    f64::consts::{LN_2, LN_10},
    num::FpCategory,
};

use crate::complex::Complex;

/// Sign of `x` as `-1`, `1` or `x` itself when `x` is a zero or NaN.
fn sign(x: f64) -> f64 {
    match x.classify() {
        FpCategory::Zero | FpCategory::Nan => x,
        _ => x.signum(),
    }
}

impl Complex {
    /// Raises Euler's number to the power of `self`.
    ///
    /// Computed as `e^a · (cos b + i sin b)`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let c = Complex::new(1.0, 0.0).exp();
    /// assert_eq!(c, Complex::new(std::f64::consts::E, 0.0));
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let magnitude = self.real.exp();
        Self { real:      magnitude * self.imaginary.cos(),
               imaginary: magnitude * self.imaginary.sin(), }
    }

    /// Returns the principal natural logarithm, `(ln |u|, arg u)`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(1.0, 0.0).ln(), Complex::new(0.0, 0.0));
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().real.ln(),
               imaginary: self.arg().real, }
    }

    /// Returns the principal square root using the half-angle formula.
    ///
    /// The imaginary part is scaled by the sign of `self.imaginary`. A zero
    /// imaginary part stays zero with its sign kept, so on the real axis the
    /// result is real: `sqrt(-4)` is `0`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(-3.0, 4.0).sqrt(), Complex::new(1.0, 2.0));
    /// assert_eq!(Complex::new(-4.0, 0.0).sqrt(), Complex::new(0.0, 0.0));
    /// assert_eq!(Complex::new(-4.0, 1e-300).sqrt(), Complex::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let abs = self.abs().real;
        Self { real:      ((self.real + abs) / 2.0).sqrt(),
               imaginary: sign(self.imaginary) * ((-self.real + abs) / 2.0).sqrt(), }
    }

    /// Raises `self` to `power` along the principal branch, `exp(power · ln self)`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let c = Complex::from_real(2.0).pow(Complex::from_real(3.0));
    /// assert!((c.real - 8.0).abs() < 1e-12);
    /// assert!(c.imaginary.abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn pow(self, power: Self) -> Self {
        (power * self.ln()).exp()
    }

    /// Returns the logarithm of `self` to the given `base`, `ln self / ln base`.
    #[must_use]
    pub fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }

    /// Returns the base 2 logarithm.
    #[must_use]
    pub fn log2(self) -> Self {
        self.ln() / Self::from_real(LN_2)
    }

    /// Returns the base 10 logarithm.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::from_real(1.0).log10(), Complex::new(0.0, 0.0));
    /// ```
    #[must_use]
    pub fn log10(self) -> Self {
        self.ln() / Self::from_real(LN_10)
    }
}
