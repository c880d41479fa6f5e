// src/functions/mod.rs

//! Free functions over [`Complex`] values.
//!
//! Every function takes its arguments by value and returns a freshly built
//! complex value; nothing is mutated or retained. Multivalued functions use
//! the principal branch of [`Complex::angle_in_rads`], i.e. arguments in
//! `(-π, π]`. Like the value type, nothing here guards against zero or
//! infinite intermediates: NaN and Infinity propagate per IEEE-754.

pub mod elementary;
pub mod hyperbolic;
pub mod trig;

pub use elementary::{exp, log, log10, log_b, pow, pow_real, sqrt, sqrt_real};
pub use hyperbolic::{
    arccosh, arccosh_real, arccoth, arccsch, arcsech, arcsinh, arctanh, arctanh_real, cosh, coth,
    csch, sech, sinh, tanh,
};
pub use trig::{
    arccos, arccos_real, arccot, arccsc, arccsc_real, arcsec, arcsec_real, arcsin, arcsin_real,
    arctan, cos, cot, csc, sec, sin, tan,
};

pub use crate::core::complex::dist;
use crate::core::{Complex, Element};

#[inline]
pub(crate) fn half<T: Element>() -> T {
    T::ONE / (T::ONE + T::ONE)
}

// --- Properties ---

/// Principal argument, `-π < arg(z) <= π`.
#[inline]
pub fn arg<T: Element>(z: Complex<T>) -> T {
    z.angle_in_rads()
}

/// Modulus `|z|`.
#[inline]
pub fn abs<T: Element>(z: Complex<T>) -> T {
    z.dist()
}

/// Squared modulus `|z|²`.
#[inline]
pub fn abs2<T: Element>(z: Complex<T>) -> T {
    z.norm()
}

/// `ln|z|`
#[inline]
pub fn logabs<T: Element>(z: Complex<T>) -> T {
    z.dist().ln()
}

// --- Construction ---

/// `re + i*im`
pub fn rect<T: Element>(re: T, im: T) -> Complex<T> {
    Complex::rect(re, im)
}

/// `mag * e^(i*rads)`
pub fn polar<T: Element>(mag: T, rads: T) -> Complex<T> {
    Complex::polar(mag, rads)
}

// --- Arithmetic ---

/// `a + b`
pub fn add<T: Element>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    a + b
}

/// `a - b`
pub fn sub<T: Element>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    a - b
}

/// `a * b`
pub fn mul<T: Element>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    a * b
}

/// `a / b`, through the divisor's inverse.
pub fn div<T: Element>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    a / b
}

/// `a + x`
pub fn add_real<T: Element>(a: Complex<T>, x: T) -> Complex<T> {
    a + x
}

/// `a - x`
pub fn sub_real<T: Element>(a: Complex<T>, x: T) -> Complex<T> {
    a - x
}

/// `a * x`
pub fn mul_real<T: Element>(a: Complex<T>, x: T) -> Complex<T> {
    a * x
}

/// `a / x`
pub fn div_real<T: Element>(a: Complex<T>, x: T) -> Complex<T> {
    a / x
}

/// `a + i*y`
pub fn add_imag<T: Element>(a: Complex<T>, y: T) -> Complex<T> {
    a + Complex::new(T::ZERO, y)
}

/// `a - i*y`
pub fn sub_imag<T: Element>(a: Complex<T>, y: T) -> Complex<T> {
    a - Complex::new(T::ZERO, y)
}

/// `a * (i*y)`
pub fn mul_imag<T: Element>(a: Complex<T>, y: T) -> Complex<T> {
    a * Complex::new(T::ZERO, y)
}

/// `a / (i*y)`
pub fn div_imag<T: Element>(a: Complex<T>, y: T) -> Complex<T> {
    a / Complex::new(T::ZERO, y)
}

/// `real - i*imag`
pub fn conjugate<T: Element>(z: Complex<T>) -> Complex<T> {
    z.conjugate()
}

/// `1 / z`
pub fn inverse<T: Element>(z: Complex<T>) -> Complex<T> {
    z.inverse()
}

/// `-z`
pub fn negative<T: Element>(z: Complex<T>) -> Complex<T> {
    z.negative()
}
