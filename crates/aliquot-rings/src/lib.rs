//! # aliquot-rings
//!
//! Coefficient capabilities for polynomial arithmetic.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `OrderedRing`, `RealProjection`
//! - Implementations for `Integer` (Z) and `Rational` (Q)
//! - The complex extension `Complex<T>`, e.g. Q(i)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── Field
//!  ├── OrderedRing
//!  └── RealProjection (Real: OrderedRing)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use complex::Complex;
pub use traits::{Field, OrderedRing, RealProjection, Ring};
