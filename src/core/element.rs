// src/core/element.rs

//! The floating-point element types a [`Complex`](super::Complex) can be built over.

use approx::{RelativeEq, UlpsEq};
use num_traits::{Float, FloatConst};
use std::fmt;

/// A real IEEE-754 floating-point scalar usable as the component type of a complex value.
///
/// The associated constants let `Complex<T>` expose its named values
/// (`ONE`, `I`, ...) as real `const` items for every element type. The `approx`
/// bound carries tolerance comparison over to the complex type componentwise.
pub trait Element:
    Float
    + FloatConst
    + RelativeEq<Epsilon = Self>
    + UlpsEq<Epsilon = Self>
    + fmt::Debug
    + fmt::Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Negated multiplicative identity.
    const NEG_ONE: Self;
    /// Machine epsilon of the type; the finest tolerance the validation helpers accept.
    const EPSILON: Self;
    /// Relative tolerance used by the validation helpers when the caller passes none.
    const DEFAULT_TOLERANCE: Self;
    /// Short type name, used in diagnostics.
    const NAME: &'static str;
}

macro_rules! impl_element {
    ($t:ty, $tol:expr) => {
        impl Element for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const EPSILON: Self = <$t>::EPSILON;
            const DEFAULT_TOLERANCE: Self = $tol;
            const NAME: &'static str = stringify!($t);
        }
    };
}

impl_element!(f64, 1e-12);
impl_element!(f32, 1e-5);
