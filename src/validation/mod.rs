// src/validation/mod.rs

//! Opt-in checks that turn IEEE-754 contamination into errors.
//!
//! The value type and function library never fail; they let NaN and
//! Infinity flow through. Callers that want a hard stop instead run results
//! through these helpers.

use crate::core::{dist, Complex, ComplexError, Element};
use log::{debug, trace};

// --- Helper Functions ---

fn reject(err: ComplexError) -> ComplexError {
    debug!("{}", err);
    err
}

// --- Public Validation Functions ---

/// Relative deviation of `actual` from `expected`: `dist(actual, expected) / max(1, |expected|)`.
///
/// Scales by `|expected|` for large values and falls back to absolute distance
/// near the origin. NaN if either side has a NaN component.
pub fn relative_deviation<T: Element>(actual: Complex<T>, expected: Complex<T>) -> T {
    dist(actual, expected) / expected.dist().max(T::ONE)
}

/// Checks that both components of `z` are finite.
///
/// # Returns
/// * `Ok(())` if neither component is NaN or infinite.
/// * `Err(ComplexError::NonFinite)` otherwise.
pub fn check_finite<T: Element>(z: Complex<T>) -> Result<(), ComplexError> {
    if z.is_finite() {
        trace!("{}: finite value {}", T::NAME, z);
        Ok(())
    } else {
        Err(reject(ComplexError::NonFinite {
            message: format!("{} value {} has a NaN or infinite component", T::NAME, z),
        }))
    }
}

/// Checks that `actual` lies within a relative tolerance of `expected`.
///
/// # Arguments
/// * `actual` - The computed value.
/// * `expected` - The reference value.
/// * `tolerance` - Allowed [`relative_deviation`]. Defaults to `T::DEFAULT_TOLERANCE`.
///   Values below `T::EPSILON` are raised to it.
///
/// # Returns
/// * `Ok(())` if the deviation is within tolerance.
/// * `Err(ComplexError::OutOfTolerance)` otherwise, including when the deviation is NaN.
pub fn check_close<T: Element>(
    actual: Complex<T>,
    expected: Complex<T>,
    tolerance: Option<T>,
) -> Result<(), ComplexError> {
    let effective_tolerance = tolerance.unwrap_or(T::DEFAULT_TOLERANCE).max(T::EPSILON);
    let deviation = relative_deviation(actual, expected);
    if deviation <= effective_tolerance {
        trace!("{} within {} of {} (deviation {})", actual, effective_tolerance, expected, deviation);
        Ok(())
    } else {
        Err(reject(ComplexError::OutOfTolerance {
            message: format!(
                "{} deviates from {} by {} (tolerance {})",
                actual, expected, deviation, effective_tolerance
            ),
        }))
    }
}

/// `1 / z`, refusing non-finite input and a divisor whose squared modulus is exactly zero.
///
/// The squared-modulus test also catches values so small that `norm()` underflows.
pub fn checked_inverse<T: Element>(z: Complex<T>) -> Result<Complex<T>, ComplexError> {
    check_finite(z)?;
    if z.norm() == T::ZERO {
        return Err(reject(ComplexError::ZeroModulus {
            message: format!("cannot invert {}: squared modulus is zero", z),
        }));
    }
    Ok(z.inverse())
}

/// `a / b` through [`checked_inverse`].
pub fn checked_div<T: Element>(a: Complex<T>, b: Complex<T>) -> Result<Complex<T>, ComplexError> {
    check_finite(a)?;
    Ok(a * checked_inverse(b)?)
}

/// Runs the finiteness check and, if `expected` is given, the tolerance check.
///
/// # Arguments
/// * `z` - The value to validate.
/// * `expected` - Optional reference value.
/// * `tolerance` - Optional relative tolerance for the comparison.
pub fn validate<T: Element>(
    z: Complex<T>,
    expected: Option<Complex<T>>,
    tolerance: Option<T>,
) -> Result<(), ComplexError> {
    check_finite(z)?;
    if let Some(expected) = expected {
        check_close(z, expected, tolerance)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Complex32, Complex64};

    #[test]
    fn finite_values_pass() {
        assert_eq!(check_finite(Complex64::new(-2.0, 3.0)), Ok(()));
        assert_eq!(check_finite(Complex32::ZERO), Ok(()));
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        let nan = Complex64::ZERO.inverse();
        assert!(matches!(check_finite(nan), Err(ComplexError::NonFinite { .. })));

        let inf = Complex64::new(1.0, 0.0) / 0.0;
        assert!(matches!(check_finite(inf), Err(ComplexError::NonFinite { .. })));
    }

    #[test]
    fn check_close_uses_default_tolerance() {
        let a = Complex64::new(1.0, 1.0);
        assert_eq!(check_close(a, a + 1e-14, None), Ok(()));
        assert!(matches!(
            check_close(a, a + 1e-6, None),
            Err(ComplexError::OutOfTolerance { .. })
        ));
        assert_eq!(check_close(a, a + 1e-6, Some(1e-5)), Ok(()));
    }

    #[test]
    fn check_close_is_relative_for_large_values() {
        let big = Complex64::new(1e12, -1e12);
        assert_eq!(check_close(big + 1.0, big, Some(1e-9)), Ok(()));
        assert!(check_close(big + 1e6, big, Some(1e-9)).is_err());
    }

    #[test]
    fn tolerance_is_floored_at_machine_epsilon() {
        let one_ulp = Complex64::new(1.0 + f64::EPSILON, 0.0);
        assert_eq!(check_close(one_ulp, Complex64::ONE, Some(0.0)), Ok(()));
        assert_eq!(check_close(one_ulp, Complex64::ONE, Some(-1.0)), Ok(()));

        let two_ulps = Complex64::new(1.0 + 2.0 * f64::EPSILON, 0.0);
        assert!(check_close(two_ulps, Complex64::ONE, Some(0.0)).is_err());
    }

    #[test]
    fn nan_deviation_never_passes() {
        let nan = Complex64::new(f64::NAN, 0.0);
        assert!(check_close(nan, Complex64::ONE, Some(f64::MAX)).is_err());
    }

    #[test]
    fn checked_inverse_refuses_zero() {
        assert!(matches!(
            checked_inverse(Complex64::ZERO),
            Err(ComplexError::ZeroModulus { .. })
        ));
        // norm underflows to exactly zero
        assert!(matches!(
            checked_inverse(Complex64::new(1e-200, 0.0)),
            Err(ComplexError::ZeroModulus { .. })
        ));
        assert_eq!(checked_inverse(Complex64::new(0.0, 1.0)), Ok(Complex64::new(0.0, -1.0)));
    }

    #[test]
    fn checked_div_matches_operator_when_defined() -> Result<(), ComplexError> {
        let a = Complex64::new(4.0, 9.0);
        let b = Complex64::new(5.0, 11.0);
        assert_eq!(checked_div(a, b)?, a / b);
        assert!(checked_div(a, Complex64::ZERO).is_err());
        assert!(checked_div(Complex64::new(f64::INFINITY, 0.0), b).is_err());
        Ok(())
    }

    #[test]
    fn validate_combines_checks() {
        let z = Complex32::new(0.5, -0.5);
        assert_eq!(validate(z, None, None), Ok(()));
        assert_eq!(validate(z, Some(Complex32::new(0.5, -0.5)), None), Ok(()));
        assert!(validate(z, Some(Complex32::ONE), None).is_err());
        assert!(validate(Complex32::new(f32::NAN, 0.0), None, None).is_err());
    }
}
