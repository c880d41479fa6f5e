// src/lib.rs

//! `cplx` - Scalar complex numbers and the elementary complex functions
//!
//! This library provides a complex value type generic over its floating-point
//! element type, a library of free functions (powers, logarithms, circular
//! and hyperbolic functions and their inverses) built on it, and tables of
//! machine, mathematical and physical constants.
//!
//! ```
//! use cplx::{functions, Complex64};
//!
//! let a = Complex64::new(4.0, 9.0);
//! let b = Complex64::new(5.0, 11.0);
//! assert_eq!(a * b, Complex64::new(-79.0, 89.0));
//! assert_eq!(format!("{}", a - b), "-1-2i");
//!
//! // 2 * (1 + i) with a scalar on the left
//! assert_eq!(2.0 * Complex64::new(1.0, 1.0), Complex64::new(2.0, 2.0));
//!
//! let r = functions::sqrt(Complex64::new(-4.0, 0.0));
//! assert!((r.imag() - 2.0).abs() < 1e-15);
//! ```

pub mod constants;
pub mod core;
pub mod functions;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{dist, Complex, Complex32, Complex64, ComplexError, Element, Form};
pub use validation::{check_close, check_finite, checked_div, checked_inverse, validate};

// Example 1: Polar construction and the principal argument
// A value built from (magnitude, angle) reads back the same magnitude and
// the angle reduced to (-π, π].
/// ```
/// use cplx::{Complex64, Form};
/// use cplx::constants::math::PI;
///
/// let z = Complex64::with_form(Form::Polar, 2.0, 3.0 * PI / 2.0);
/// let (r, theta) = z.to_polar();
///
/// assert!((r - 2.0).abs() < 1e-12);
/// assert!((theta + PI / 2.0).abs() < 1e-12);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Degenerate division and the checked layer
// Dividing by zero follows IEEE-754 and yields NaN components; the
// validation helpers turn that into an error for callers who want one.
/// ```
/// use cplx::{checked_div, Complex64, ComplexError};
///
/// let q = Complex64::ONE / Complex64::ZERO;
/// assert!(q.is_nan());
///
/// match checked_div(Complex64::ONE, Complex64::ZERO) {
///     Err(ComplexError::ZeroModulus { message }) => println!("refused: {}", message),
///     other => panic!("expected ZeroModulus, got {:?}", other),
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
