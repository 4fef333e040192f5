//! # aliquot-poly
//!
//! Sparse univariate polynomials and real root isolation.
//!
//! This crate provides:
//! - [`Polynomial`], a sparse polynomial over any [`Ring`](aliquot_rings::Ring)
//! - Long division over a [`Field`](aliquot_rings::Field)
//! - Sturm sequences and the Cauchy root bound
//! - Root isolation by Sturm-guided bisection
//!
//! ## Example
//!
//! ```
//! use aliquot_integers::Rational;
//! use aliquot_poly::{real_roots, Polynomial};
//!
//! // x^2 - 2x + 1 has a double root at 1
//! let p = Polynomial::from_coeffs([1i64, -2, 1].map(Rational::from));
//! let tol = Rational::from_i64(1, 10_000).unwrap();
//! let roots = real_roots(&p, &tol).unwrap();
//! assert_eq!(roots.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod polynomial;
pub mod roots;
pub mod sturm;

#[cfg(test)]
mod proptests;

pub use polynomial::Polynomial;
pub use roots::{real_roots, roots_in_range};
pub use sturm::{cauchy_bound, reduce_sequence, sign_changes, sturm_sequence, SignCount};
