// src/functions/hyperbolic.rs

//! Hyperbolic functions and their inverses, derived from the circular ones
//! through the rotation `z -> i*z`.

use super::elementary::{log, sqrt};
use super::half;
use super::trig::{cos, sin};
use crate::core::{Complex, Element};

/// `-i * sin(i*z)`
pub fn sinh<T: Element>(z: Complex<T>) -> Complex<T> {
    Complex::<T>::NEG_I * sin(z * Complex::<T>::I)
}

/// `cos(i*z)`
pub fn cosh<T: Element>(z: Complex<T>) -> Complex<T> {
    cos(z * Complex::<T>::I)
}

/// `sinh / cosh`
pub fn tanh<T: Element>(z: Complex<T>) -> Complex<T> {
    sinh(z) / cosh(z)
}

/// `cosh / sinh`
pub fn coth<T: Element>(z: Complex<T>) -> Complex<T> {
    cosh(z) / sinh(z)
}

/// `1 / cosh`
pub fn sech<T: Element>(z: Complex<T>) -> Complex<T> {
    cosh(z).inverse()
}

/// `1 / sinh`
pub fn csch<T: Element>(z: Complex<T>) -> Complex<T> {
    sinh(z).inverse()
}

/// `log(z + sqrt(z² + 1))`
pub fn arcsinh<T: Element>(z: Complex<T>) -> Complex<T> {
    log(z + sqrt(z * z + T::ONE))
}

/// `log(z + sqrt(z² - 1))`
///
/// For `Re(z) < 0` this lands on `-acosh(z)` of the usual principal value;
/// `cosh` of the result still recovers `z`.
pub fn arccosh<T: Element>(z: Complex<T>) -> Complex<T> {
    log(z + sqrt(z * z - T::ONE))
}

/// `½ * log((1 + z) / (1 - z))`
pub fn arctanh<T: Element>(z: Complex<T>) -> Complex<T> {
    log((Complex::<T>::ONE + z) / (Complex::<T>::ONE - z)) * half::<T>()
}

/// `arccosh(1/z)`
pub fn arcsech<T: Element>(z: Complex<T>) -> Complex<T> {
    arccosh(z.inverse())
}

/// `arcsinh(1/z)`
pub fn arccsch<T: Element>(z: Complex<T>) -> Complex<T> {
    arcsinh(z.inverse())
}

/// `arctanh(1/z)`
pub fn arccoth<T: Element>(z: Complex<T>) -> Complex<T> {
    arctanh(z.inverse())
}

/// [`arccosh`] of `x + 0i`; `x < 1` gives the complex value.
pub fn arccosh_real<T: Element>(x: T) -> Complex<T> {
    arccosh(Complex::from_real(x))
}

/// [`arctanh`] of `x + 0i`; `|x| > 1` gives the complex value.
pub fn arctanh_real<T: Element>(x: T) -> Complex<T> {
    arctanh(Complex::from_real(x))
}
