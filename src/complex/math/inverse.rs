use std::f64::consts::FRAC_PI_2;

use crate::complex::{Complex, math::constants::I, number::ONE};

const TWO: Complex = Complex::from_real(2.0);
const HALF_PI: Complex = Complex::from_real(FRAC_PI_2);
const NEGATIVE_I: Complex = Complex::new(0.0, -1.0);
const NEGATIVE_HALF_PI_I: Complex = Complex::new(0.0, -FRAC_PI_2);

// Every inverse below takes the principal branch through `ln` and `sqrt`.
impl Complex {
    /// Returns the inverse sine, `-i ln(iu + sqrt(1 - u²))`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::from_real(0.0).asin(), Complex::new(0.0, 0.0));
    /// ```
    #[must_use]
    pub fn asin(self) -> Self {
        NEGATIVE_I * (I * self + (ONE - self * self).sqrt()).ln()
    }

    /// Returns the inverse cosine, `π/2 + i ln(iu + sqrt(1 - u²))`.
    #[must_use]
    pub fn acos(self) -> Self {
        HALF_PI + I * (I * self + (ONE - self * self).sqrt()).ln()
    }

    /// Returns the inverse tangent, `(i/2) (ln(1 - iu) - ln(1 + iu))`.
    #[must_use]
    pub fn atan(self) -> Self {
        let iu = I * self;
        (I / TWO) * ((ONE - iu).ln() - (ONE + iu).ln())
    }

    /// Returns the inverse cotangent.
    #[must_use]
    pub fn acot(self) -> Self {
        (I / TWO) * (((self - I) / self).ln() - ((self + I) / self).ln())
    }

    /// Returns the inverse secant.
    #[must_use]
    pub fn asec(self) -> Self {
        HALF_PI + I * ((ONE - ONE / (self * self)).sqrt() + I / self).ln()
    }

    /// Returns the inverse cosecant.
    #[must_use]
    pub fn acsc(self) -> Self {
        NEGATIVE_I * ((ONE - ONE / (self * self)).sqrt() + I / self).ln()
    }

    /// Returns the inverse hyperbolic sine, `ln(u + sqrt(u² + 1))`.
    #[must_use]
    pub fn asinh(self) -> Self {
        (self + (self * self + ONE).sqrt()).ln()
    }

    /// Returns the inverse hyperbolic cosine, `ln(u + sqrt(u + 1) sqrt(u - 1))`.
    #[must_use]
    pub fn acosh(self) -> Self {
        (self + (self + ONE).sqrt() * (self - ONE).sqrt()).ln()
    }

    /// Returns the inverse hyperbolic tangent, `(ln(1 + u) - ln(1 - u)) / 2`.
    #[must_use]
    pub fn atanh(self) -> Self {
        ((ONE + self).ln() - (ONE - self).ln()) / TWO
    }

    /// Returns the inverse hyperbolic cotangent.
    #[must_use]
    pub fn acoth(self) -> Self {
        let reciprocal = ONE / self;
        ((ONE + reciprocal).ln() - (ONE - reciprocal).ln()) / TWO
    }

    /// Returns the inverse hyperbolic secant.
    #[must_use]
    pub fn asech(self) -> Self {
        let reciprocal = ONE / self;
        ((reciprocal - ONE).sqrt() * (reciprocal + ONE).sqrt() + reciprocal).ln()
    }

    /// Returns the inverse hyperbolic cosecant, `-iπ/2 + i acos(i/u)`.
    #[must_use]
    pub fn acsch(self) -> Self {
        NEGATIVE_HALF_PI_I + I * (I / self).acos()
    }
}
