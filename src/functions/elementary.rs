// src/functions/elementary.rs

//! Square root, powers, exponential and logarithms.

use crate::core::{Complex, Element};

/// Principal square root, computed in polar form as `(sqrt|z|, arg(z)/2)`.
///
/// Halving an argument in `(-π, π]` keeps the result in the right half-plane.
pub fn sqrt<T: Element>(z: Complex<T>) -> Complex<T> {
    Complex::polar(z.dist().sqrt(), z.angle_in_rads() * super::half::<T>())
}

/// Complex square root of a real number; negative `x` yields `i*sqrt(-x)`.
pub fn sqrt_real<T: Element>(x: T) -> Complex<T> {
    sqrt(Complex::from_real(x))
}

/// General power `z^w` on the principal branch.
///
/// Evaluates `exp(w * log z)` directly in polar form: magnitude
/// `|z|^Re(w) * e^(-Im(w)*arg z)`, angle `Re(w)*arg z + Im(w)*ln|z|`.
pub fn pow<T: Element>(z: Complex<T>, w: Complex<T>) -> Complex<T> {
    let m = z.dist();
    let r = z.angle_in_rads();

    Complex::polar(
        m.powf(w.real()) * (-r * w.imag()).exp(),
        w.real() * r + w.imag() * m.ln(),
    )
}

/// `z^k` for a real exponent: magnitude `|z|^k`, angle `k*arg z`.
pub fn pow_real<T: Element>(z: Complex<T>, k: T) -> Complex<T> {
    Complex::polar(z.dist().powf(k), k * z.angle_in_rads())
}

/// `e^z`, magnitude `e^Re(z)` at angle `Im(z)`.
pub fn exp<T: Element>(z: Complex<T>) -> Complex<T> {
    Complex::polar(z.real().exp(), z.imag())
}

/// Principal natural logarithm `(ln|z|, arg z)`.
///
/// `log(0)` gives `-inf` as its real part.
pub fn log<T: Element>(z: Complex<T>) -> Complex<T> {
    Complex::new(z.dist().ln(), z.angle_in_rads())
}

/// Base-10 logarithm, `log(z) / ln(10)` componentwise.
pub fn log10<T: Element>(z: Complex<T>) -> Complex<T> {
    log(z) / T::LN_10()
}

/// Logarithm of `z` in the complex base `b`, `log(z) / log(b)`.
pub fn log_b<T: Element>(z: Complex<T>, b: Complex<T>) -> Complex<T> {
    log(z) / log(b)
}
