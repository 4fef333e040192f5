//! # Aliquot
//!
//! Exact arithmetic in Rust: arbitrary precision integers, canonical
//! rationals, and polynomials whose real roots can be isolated to any
//! requested accuracy.
//!
//! ## Features
//!
//! - **Big Integers**: Sign-magnitude integers with Knuth long division
//! - **Rationals**: Always reduced, exact IEEE float reconstruction,
//!   repeating-decimal formatting
//! - **Algebraic Structures**: Ring and field traits, Gaussian rationals
//! - **Polynomials**: Sparse arithmetic, Sturm sequences, root isolation
//!
//! ## Quick Start
//!
//! ```rust
//! use aliquot::prelude::*;
//!
//! let x = Polynomial::<Rational>::x();
//! let p = x.mul(&x).sub(&Polynomial::constant(Rational::from(2i64)));
//! let tol = Rational::from_i64(1, 1_000_000).unwrap();
//! let roots = real_roots(&p, &tol).unwrap();
//! assert_eq!(roots.len(), 2);
//! println!("{:.6}", roots[1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use aliquot_integers as integers;
pub use aliquot_poly as poly;
pub use aliquot_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use aliquot_integers::{ArithmeticError, Integer, Rational};
    pub use aliquot_poly::{cauchy_bound, real_roots, roots_in_range, sturm_sequence, Polynomial};
    pub use aliquot_rings::{Complex, Field, OrderedRing, RealProjection, Ring};
}
