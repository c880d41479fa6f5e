// src/core/mod.rs

//! Core data structures and types

pub mod complex;
pub mod element;
pub mod error;

// Re-export public types for convenient access via `cplx::core::TypeName`
pub use complex::{dist, Complex, Complex32, Complex64, Form};
pub use element::Element;
pub use error::ComplexError;
