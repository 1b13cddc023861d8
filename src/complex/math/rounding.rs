use crate::complex::Complex;

const HALF: Complex = Complex::new(0.5, 0.5);

/// Fractional part of a real number, keeping its sign.
fn real_frac(n: f64) -> f64 {
    if n >= 0.0 { n - n.floor() } else { n - n.ceil() }
}

/// Gaussian-integer rounding. Every function works on each component
/// independently.
impl Complex {
    /// Returns the largest Gaussian integer not greater than `self`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(-1.2, -2.7).floor(), Complex::new(-2.0, -3.0));
    /// ```
    #[must_use]
    pub fn floor(self) -> Self {
        Self { real:      self.real.floor(),
               imaginary: self.imaginary.floor(), }
    }

    /// Returns the smallest Gaussian integer not less than `self`.
    #[must_use]
    pub fn ceil(self) -> Self {
        Self { real:      self.real.ceil(),
               imaginary: self.imaginary.ceil(), }
    }

    /// Returns the nearest Gaussian integer, `floor(u + 0.5 + 0.5i)`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(1.2, 2.7).nint(), Complex::new(1.0, 3.0));
    /// ```
    #[must_use]
    pub fn nint(self) -> Self {
        (self + HALF).floor()
    }

    /// Returns the fractional part. `frac(-1.2)` is `-0.2`, not `0.8`.
    #[must_use]
    pub fn frac(self) -> Self {
        Self { real:      real_frac(self.real),
               imaginary: real_frac(self.imaginary), }
    }

    /// Returns the remainder of Gaussian-integer floor division,
    /// `u - v floor(u / v)`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let u = Complex::new(4.0, 2.0);
    /// assert_eq!(u.modulo(Complex::new(3.0, 4.0)), Complex::new(0.0, 5.0));
    /// ```
    #[must_use]
    pub fn modulo(self, divisor: Self) -> Self {
        self - divisor * (self / divisor).floor()
    }
}
