// src/constants/mod.rs

//! Read-only numeric constant tables.
//!
//! Plain `f64` values grouped by unit system. They are compile-time constants:
//! nothing is computed or parsed at run time.

pub mod machine;
pub mod math;
pub mod mksa;
pub mod num;
