// src/core/complex.rs

//! The scalar complex value type.
//!
//! A `Complex<T>` is exactly two components of an [`Element`] type stored as an
//! ordered `(real, imag)` pair. All derived operations follow IEEE-754
//! propagation: dividing by an exactly zero value yields NaN/Infinity
//! components rather than an error.

use super::element::Element;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{One, Zero};
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Selects how the two scalars handed to [`Complex::with_form`] are read.
///
/// Both forms take two scalars of the same type, so the form has to be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    /// `(real, imag)`
    Rect,
    /// `(magnitude, angle in radians)`
    Polar,
}

/// A complex number `real + i*imag` over a floating-point element type.
///
/// Equality is exact and componentwise; use the `approx` traits for
/// tolerance-based comparison.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    re: T,
    im: T,
}

/// Complex value over `f64`.
pub type Complex64 = Complex<f64>;
/// Complex value over `f32`.
pub type Complex32 = Complex<f32>;

impl<T: Element> Complex<T> {
    /// `1 + 0i`
    pub const ONE: Self = Self { re: T::ONE, im: T::ZERO };
    /// `0 + 0i`
    pub const ZERO: Self = Self { re: T::ZERO, im: T::ZERO };
    /// `-1 + 0i`
    pub const NEG_ONE: Self = Self { re: T::NEG_ONE, im: T::ZERO };
    /// `0 + 1i`
    pub const I: Self = Self { re: T::ZERO, im: T::ONE };
    /// `0 - 1i`
    pub const NEG_I: Self = Self { re: T::ZERO, im: T::NEG_ONE };

    /// Creates a complex value from its rectangular components.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Same as [`Complex::new`]; named for symmetry with [`Complex::polar`].
    #[inline]
    pub const fn rect(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Creates a purely real value (`imag = 0`).
    #[inline]
    pub const fn from_real(re: T) -> Self {
        Self { re, im: T::ZERO }
    }

    /// Creates a value from a magnitude and an angle in radians.
    #[inline]
    pub fn polar(mag: T, rads: T) -> Self {
        Self {
            re: mag * rads.cos(),
            im: mag * rads.sin(),
        }
    }

    /// Creates a value from two scalars interpreted according to `form`.
    pub fn with_form(form: Form, a: T, b: T) -> Self {
        match form {
            Form::Rect => Self::rect(a, b),
            Form::Polar => Self::polar(a, b),
        }
    }

    /// Real component.
    #[inline]
    pub fn real(&self) -> T {
        self.re
    }

    /// Imaginary component.
    #[inline]
    pub fn imag(&self) -> T {
        self.im
    }

    /// Mutable access to the real component.
    #[inline]
    pub fn real_mut(&mut self) -> &mut T {
        &mut self.re
    }

    /// Mutable access to the imaginary component.
    #[inline]
    pub fn imag_mut(&mut self) -> &mut T {
        &mut self.im
    }

    /// Squared modulus `real² + imag²`.
    #[inline]
    pub fn norm(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Modulus, the distance from the origin.
    #[inline]
    pub fn dist(&self) -> T {
        self.norm().sqrt()
    }

    /// Principal argument `atan2(imag, real)` in `(-π, π]`.
    #[inline]
    pub fn angle_in_rads(&self) -> T {
        self.im.atan2(self.re)
    }

    /// `(dist, angle_in_rads)`
    pub fn to_polar(&self) -> (T, T) {
        (self.dist(), self.angle_in_rads())
    }

    /// `real - i*imag`
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Reciprocal `conjugate / norm`.
    ///
    /// Zero is not special-cased: the result is whatever IEEE division by
    /// zero gives (NaN components for `0 + 0i`).
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.norm()
    }

    /// `-real - i*imag`
    #[inline]
    pub fn negative(&self) -> Self {
        Self::new(-self.re, -self.im)
    }

    /// True when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True when either component is NaN.
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

/// Euclidean distance between two complex values.
#[inline]
pub fn dist<T: Element>(lhs: Complex<T>, rhs: Complex<T>) -> T {
    (lhs - rhs).dist()
}

// --- Conversions ---

impl<T: Element> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Element> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl<T: Element> From<num_complex::Complex<T>> for Complex<T> {
    fn from(z: num_complex::Complex<T>) -> Self {
        Self::new(z.re, z.im)
    }
}

impl<T: Element> From<Complex<T>> for num_complex::Complex<T> {
    fn from(z: Complex<T>) -> Self {
        num_complex::Complex::new(z.re, z.im)
    }
}

// --- Complex (op) Complex, Complex (op) scalar ---

impl<T: Element> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Element> Add<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.re + rhs, self.im)
    }
}

impl<T: Element> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Element> Sub<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.re - rhs, self.im)
    }
}

impl<T: Element> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Element> Mul<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl<T: Element> Div for Complex<T> {
    type Output = Self;

    /// Multiplies by the divisor's [`inverse`](Complex::inverse).
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: Element> Div<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

impl<T: Element> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negative()
    }
}

macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Element> $trait for Complex<T> {
            #[inline]
            fn $method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: Element> $trait<T> for Complex<T> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

// --- scalar (op) Complex ---
// Coherence rules only allow these for concrete element types.

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<Complex<$t>> for $t {
            type Output = Complex<$t>;

            #[inline]
            fn add(self, rhs: Complex<$t>) -> Complex<$t> {
                rhs + self
            }
        }

        impl Sub<Complex<$t>> for $t {
            type Output = Complex<$t>;

            #[inline]
            fn sub(self, rhs: Complex<$t>) -> Complex<$t> {
                Complex::new(self - rhs.re, -rhs.im)
            }
        }

        impl Mul<Complex<$t>> for $t {
            type Output = Complex<$t>;

            #[inline]
            fn mul(self, rhs: Complex<$t>) -> Complex<$t> {
                rhs * self
            }
        }

        impl Div<Complex<$t>> for $t {
            type Output = Complex<$t>;

            #[inline]
            fn div(self, rhs: Complex<$t>) -> Complex<$t> {
                rhs.inverse() * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

// --- num-traits / std iterator integration ---

impl<T: Element> Zero for Complex<T> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: Element> One for Complex<T> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<T: Element> Sum for Complex<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, z| acc + z)
    }
}

impl<T: Element> Product for Complex<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, z| acc * z)
    }
}

// --- approx ---

impl<T: Element> AbsDiffEq for Complex<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl<T: Element> RelativeEq for Complex<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}

impl<T: Element> UlpsEq for Complex<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.re.ulps_eq(&other.re, epsilon, max_ulps) && self.im.ulps_eq(&other.im, epsilon, max_ulps)
    }
}

// --- Display ---

/// Renders `real`, followed by the signed imaginary part and `i` when it is non-zero,
/// e.g. `-2+3i`, `4-1.5i`, `7`. Diagnostic output only; not a parse format.
impl<T: Element> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaN prints without a sign, so only a negative value supplies its own
        let sign = if self.im < T::ZERO { "" } else { "+" };
        match f.precision() {
            Some(p) => {
                write!(f, "{:.*}", p, self.re)?;
                if self.im != T::ZERO {
                    write!(f, "{}{:.*}i", sign, p, self.im)?;
                }
            }
            None => {
                write!(f, "{}", self.re)?;
                if self.im != T::ZERO {
                    write!(f, "{}{}i", sign, self.im)?;
                }
            }
        }
        Ok(())
    }
}
