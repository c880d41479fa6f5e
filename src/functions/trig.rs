// src/functions/trig.rs

//! Circular functions and their inverses.

use super::elementary::{log, sqrt};
use super::half;
use crate::core::{Complex, Element};

/// `sin(a)cosh(b) + i*cos(a)sinh(b)` for `z = a + bi`.
pub fn sin<T: Element>(z: Complex<T>) -> Complex<T> {
    let (a, b) = (z.real(), z.imag());
    Complex::new(a.sin() * b.cosh(), a.cos() * b.sinh())
}

/// `cos(a)cosh(b) - i*sin(a)sinh(b)` for `z = a + bi`.
pub fn cos<T: Element>(z: Complex<T>) -> Complex<T> {
    let (a, b) = (z.real(), z.imag());
    Complex::new(a.cos() * b.cosh(), -(a.sin() * b.sinh()))
}

/// `sin / cos`
pub fn tan<T: Element>(z: Complex<T>) -> Complex<T> {
    sin(z) / cos(z)
}

/// `cos / sin`
pub fn cot<T: Element>(z: Complex<T>) -> Complex<T> {
    cos(z) / sin(z)
}

/// `1 / cos`
pub fn sec<T: Element>(z: Complex<T>) -> Complex<T> {
    cos(z).inverse()
}

/// `1 / sin`
pub fn csc<T: Element>(z: Complex<T>) -> Complex<T> {
    sin(z).inverse()
}

/// `-i * log(i*z + sqrt(1 - z²))`
pub fn arcsin<T: Element>(z: Complex<T>) -> Complex<T> {
    Complex::<T>::NEG_I * log(Complex::<T>::I * z + sqrt(Complex::<T>::ONE - z * z))
}

/// `-i * log(z + i*sqrt(1 - z²))`
pub fn arccos<T: Element>(z: Complex<T>) -> Complex<T> {
    Complex::<T>::NEG_I * log(z + Complex::<T>::I * sqrt(Complex::<T>::ONE - z * z))
}

/// `(-i/2) * log((i - z) / (i + z))`
pub fn arctan<T: Element>(z: Complex<T>) -> Complex<T> {
    Complex::<T>::NEG_I * log((Complex::<T>::I - z) / (Complex::<T>::I + z)) * half::<T>()
}

/// `(-i/2) * log((i + z) / (i - z))`
///
/// This is the reflected form: it equals `-arctan(z)`, not `π/2 - arctan(z)`.
pub fn arccot<T: Element>(z: Complex<T>) -> Complex<T> {
    Complex::<T>::NEG_I * log((Complex::<T>::I + z) / (Complex::<T>::I - z)) * half::<T>()
}

/// `arccos(1/z)`
pub fn arcsec<T: Element>(z: Complex<T>) -> Complex<T> {
    arccos(z.inverse())
}

/// `arcsin(1/z)`
pub fn arccsc<T: Element>(z: Complex<T>) -> Complex<T> {
    arcsin(z.inverse())
}

/// [`arcsin`] of `x + 0i`; `|x| > 1` gives the principal complex value.
pub fn arcsin_real<T: Element>(x: T) -> Complex<T> {
    arcsin(Complex::from_real(x))
}

/// [`arccos`] of `x + 0i`.
pub fn arccos_real<T: Element>(x: T) -> Complex<T> {
    arccos(Complex::from_real(x))
}

/// [`arcsec`] of `x + 0i`.
pub fn arcsec_real<T: Element>(x: T) -> Complex<T> {
    arcsec(Complex::from_real(x))
}

/// [`arccsc`] of `x + 0i`.
pub fn arccsc_real<T: Element>(x: T) -> Complex<T> {
    arccsc(Complex::from_real(x))
}
