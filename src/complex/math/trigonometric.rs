use crate::complex::{Complex, math::constants::I, number::ONE};

const TWO: Complex = Complex::from_real(2.0);
const TWO_I: Complex = Complex::new(0.0, 2.0);

/// Circular functions, built from `exp` only.
impl Complex {
    /// Returns the cosine, `(e^{iu} + e^{-iu}) / 2`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::from_real(0.0).cos(), Complex::from_real(1.0));
    /// ```
    #[must_use]
    pub fn cos(self) -> Self {
        let iu = I * self;
        (iu.exp() + (-iu).exp()) / TWO
    }

    /// Returns the sine, `(e^{iu} - e^{-iu}) / 2i`.
    #[must_use]
    pub fn sin(self) -> Self {
        let iu = I * self;
        (iu.exp() - (-iu).exp()) / TWO_I
    }

    /// Returns the tangent, `(e^{2iu} - 1) / (i (e^{2iu} + 1))`.
    #[must_use]
    pub fn tan(self) -> Self {
        let exp_2iu = (TWO_I * self).exp();
        (exp_2iu - ONE) / (I * (exp_2iu + ONE))
    }

    /// Returns the cotangent.
    #[must_use]
    pub fn cot(self) -> Self {
        ONE / self.tan()
    }

    /// Returns the secant.
    #[must_use]
    pub fn sec(self) -> Self {
        ONE / self.cos()
    }

    /// Returns the cosecant.
    #[must_use]
    pub fn csc(self) -> Self {
        ONE / self.sin()
    }
}

/// Hyperbolic functions.
impl Complex {
    /// Returns the hyperbolic cosine, `(e^u + e^{-u}) / 2`.
    #[must_use]
    pub fn cosh(self) -> Self {
        (self.exp() + (-self).exp()) / TWO
    }

    /// Returns the hyperbolic sine, `(e^u - e^{-u}) / 2`.
    #[must_use]
    pub fn sinh(self) -> Self {
        (self.exp() - (-self).exp()) / TWO
    }

    /// Returns the hyperbolic tangent.
    #[must_use]
    pub fn tanh(self) -> Self {
        let exp_u = self.exp();
        let exp_negate_u = (-self).exp();
        (exp_u - exp_negate_u) / (exp_u + exp_negate_u)
    }

    /// Returns the hyperbolic cotangent.
    #[must_use]
    pub fn coth(self) -> Self {
        ONE / self.tanh()
    }

    /// Returns the hyperbolic secant.
    #[must_use]
    pub fn sech(self) -> Self {
        ONE / self.cosh()
    }

    /// Returns the hyperbolic cosecant.
    #[must_use]
    pub fn csch(self) -> Self {
        ONE / self.sinh()
    }
}
