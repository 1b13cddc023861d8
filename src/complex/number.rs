use std::{fmt::Display, ops, str::FromStr};

use crate::error::TypeConversionError;

/// `1` as a complex number.
pub const ONE: Complex = Complex::new(1.0, 0.0);

/// Represents a complex number with real and imaginary parts.
///
/// Values are immutable: every operation returns a new `Complex`. Equality is
/// plain component-wise float equality, so `-0.0` equals `0.0` and `NaN` is
/// never equal to anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (real, imaginary) if real == 0.0 && imaginary == 0.0 => write!(f, "0"),
            (real, imaginary) if imaginary == 0.0 => write!(f, "{real}"),
            (real, imaginary) if real == 0.0 => write!(f, "{imaginary}i"),
            (real, imaginary) if imaginary.is_sign_negative() => {
                write!(f, "{real} - {}i", -imaginary)
            },
            (real, imaginary) => write!(f, "{real} + {imaginary}i"),
        }
    }
}

impl Complex {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let c = Complex::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Constructs a complex number with a zero imaginary part.
    #[must_use]
    pub const fn from_real(real: f64) -> Self {
        Self { real,
               imaginary: 0.0 }
    }

    /// The real part, as a complex number.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(1.0, 2.0).re(), Complex::new(1.0, 0.0));
    /// ```
    #[must_use]
    pub const fn re(self) -> Self {
        Self::from_real(self.real)
    }

    /// The imaginary part, as a complex number.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(1.0, 2.0).im(), Complex::new(2.0, 0.0));
    /// ```
    #[must_use]
    pub const fn im(self) -> Self {
        Self::from_real(self.imaginary)
    }

    /// Returns the negation of the number.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let c = Complex::new(1.0, 5.0);
    /// assert_eq!(c.conj(), Complex::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the norm `a² + b²` of the number.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(3.0, 4.0).norm(), Complex::new(25.0, 0.0));
    /// ```
    #[must_use]
    pub fn norm(self) -> Self {
        Self::from_real(self.real * self.real + self.imaginary * self.imaginary)
    }

    /// Returns the absolute value (magnitude) of the number.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(3.0, 4.0).abs(), Complex::new(5.0, 0.0));
    /// ```
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_real(self.norm().real.sqrt())
    }

    /// Returns the argument (phase angle) in radians.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let c = Complex::new(0.0, 1.0);
    /// assert!((c.arg().real - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn arg(self) -> Self {
        Self::from_real(self.imaginary.atan2(self.real))
    }
}

impl ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real * rhs.real - self.imaginary * rhs.imaginary,
               imaginary: self.real * rhs.imaginary + self.imaginary * rhs.real, }
    }
}

impl ops::Div for Complex {
    type Output = Self;

    // Division by a zero-norm value yields IEEE infinities or NaN.
    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.norm().real;
        Self { real:      (self.real * rhs.real + self.imaginary * rhs.imaginary) / denom,
               imaginary: (self.imaginary * rhs.real - self.real * rhs.imaginary) / denom, }
    }
}

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Self::from_real(value)
    }
}

impl From<f32> for Complex {
    fn from(value: f32) -> Self {
        Self::from_real(value.into())
    }
}

impl From<i32> for Complex {
    fn from(value: i32) -> Self {
        Self::from_real(value.into())
    }
}

impl From<u32> for Complex {
    fn from(value: u32) -> Self {
        Self::from_real(value.into())
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self { real, imaginary }
    }
}

impl From<[f64; 2]> for Complex {
    fn from([real, imaginary]: [f64; 2]) -> Self {
        Self { real, imaginary }
    }
}

impl TryFrom<&[f64]> for Complex {
    type Error = TypeConversionError;

    /// Reads a one-element slice as a real scalar and a two-element slice as a
    /// real/imaginary pair.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    ///
    /// assert_eq!(Complex::try_from(&[2.0][..]).unwrap(), Complex::new(2.0, 0.0));
    /// assert_eq!(Complex::try_from(&[2.0, 3.0][..]).unwrap(), Complex::new(2.0, 3.0));
    /// assert!(Complex::try_from(&[][..]).is_err());
    /// ```
    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match *value {
            [real] => Ok(Self::from_real(real)),
            [real, imaginary] => Ok(Self { real, imaginary }),
            _ => Err(TypeConversionError { input: format!("{value:?}") }),
        }
    }
}

impl FromStr for Complex {
    type Err = TypeConversionError;

    /// Parses `re` or `re,im`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    ///
    /// assert_eq!("1.5".parse::<Complex>().unwrap(), Complex::new(1.5, 0.0));
    /// assert_eq!("1, -2".parse::<Complex>().unwrap(), Complex::new(1.0, -2.0));
    /// assert!("one".parse::<Complex>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || TypeConversionError { input: s.to_string() };

        let parts = s.split(',')
                     .map(|part| part.trim().parse::<f64>())
                     .collect::<Result<Vec<_>, _>>()
                     .map_err(|_| error())?;

        Self::try_from(parts.as_slice()).map_err(|_| error())
    }
}
