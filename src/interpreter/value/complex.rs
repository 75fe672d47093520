use std::ops;

use ordered_float::OrderedFloat;

/// Largest integral exponent raised by repeated squaring instead of through
/// `exp(w ln z)`.
const MAX_SQUARING_EXPONENT: f64 = 1024.0;

/// A complex number with `f64` parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part.
    pub real:      f64,
    /// The imaginary part.
    pub imaginary: f64,
}

impl ComplexNumber {
    /// The imaginary unit, bound to the name `i`.
    pub const I: Self = Self::new(0.0, 1.0);
    /// `1 + 0i`
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// `0 + 0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Builds a complex number from its parts.
    ///
    /// ## Example
    /// ```
    /// use calx::interpreter::value::complex::ComplexNumber;
    ///
    /// let z = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(z.real, 5.0);
    /// assert_eq!(z.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` when both parts are zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Modulus `|z|`.
    ///
    /// ## Example
    /// ```
    /// use calx::interpreter::value::complex::ComplexNumber;
    ///
    /// assert_eq!(ComplexNumber::new(3.0, 4.0).modulus(), 5.0);
    /// ```
    #[must_use]
    pub fn modulus(self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Phase angle in radians, in `(-pi, pi]`.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Complex conjugate.
    #[must_use]
    pub const fn conj(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// Principal square root.
    #[must_use]
    pub fn sqrt(self) -> Self {
        let modulus = self.modulus();
        let real = f64::midpoint(modulus, self.real).sqrt();
        let imaginary = ((modulus - self.real) / 2.0).sqrt().copysign(self.imaginary);

        Self::new(real, imaginary)
    }

    /// `e^z`
    #[must_use]
    pub fn exp(self) -> Self {
        let scale = self.real.exp();
        let (sin, cos) = self.imaginary.sin_cos();

        Self::new(scale * cos, scale * sin)
    }

    /// Principal natural logarithm.
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.modulus().ln(), self.arg())
    }

    /// Sine.
    #[must_use]
    pub fn sin(self) -> Self {
        let (sin, cos) = self.real.sin_cos();
        Self::new(sin * self.imaginary.cosh(), cos * self.imaginary.sinh())
    }

    /// Cosine.
    #[must_use]
    pub fn cos(self) -> Self {
        let (sin, cos) = self.real.sin_cos();
        Self::new(cos * self.imaginary.cosh(), -sin * self.imaginary.sinh())
    }

    /// Tangent.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Raises `self` to the power `exponent`.
    ///
    /// Integral real exponents of moderate size are computed by repeated
    /// squaring, so `i^2` is exactly `-1`. Every other exponent goes
    /// through `exp(exponent * ln(self))`. Callers reject a zero base with a
    /// negative exponent beforehand.
    ///
    /// ## Example
    /// ```
    /// use calx::interpreter::value::complex::ComplexNumber;
    ///
    /// let minus_one = ComplexNumber::I.pow(ComplexNumber::new(2.0, 0.0));
    /// assert_eq!(minus_one, ComplexNumber::new(-1.0, 0.0));
    /// ```
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        if exponent.imaginary == 0.0
           && exponent.real.fract() == 0.0
           && exponent.real.abs() <= MAX_SQUARING_EXPONENT
        {
            return self.powi(exponent.real);
        }
        if self.is_zero() {
            return Self::ZERO;
        }

        (exponent * self.ln()).exp()
    }

    /// Repeated squaring for an integral exponent stored as `f64`.
    fn powi(self, exponent: f64) -> Self {
        let mut base = self;
        let mut result = Self::ONE;
        let mut remaining = exponent.abs();

        while remaining > 0.0 {
            if remaining % 2.0 == 1.0 {
                result *= base;
            }
            base *= base;
            remaining = (remaining / 2.0).floor();
        }

        if exponent < 0.0 { Self::ONE / result } else { result }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.real.mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
                  self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real))
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denominator = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self::new(self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denominator,
                  self.imaginary.mul_add(rhs.real, -(self.real * rhs.imaginary)) / denominator)
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}
