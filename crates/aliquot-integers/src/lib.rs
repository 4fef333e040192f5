//! # aliquot-integers
//!
//! Arbitrary precision integers and rationals.
//!
//! This crate provides:
//! - [`Integer`]: sign-magnitude integers over 32-bit words, with Knuth
//!   long division and truncating quotient/remainder
//! - [`Rational`]: fractions kept in lowest terms with a positive
//!   denominator, exact float reconstruction and repeating-decimal output
//! - [`ArithmeticError`]: the error type shared by the whole stack
//!
//! ## Example
//!
//! ```
//! use aliquot_integers::{Integer, Rational};
//!
//! let a: Integer = "5120000000000".parse().unwrap();
//! let b: Integer = "2550000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "7670000000000");
//!
//! let third = Rational::from_i64(1, 3).unwrap();
//! assert_eq!(third.to_string(), "0.(3)");
//! ```
//!
//! The word-slice kernels behind [`Integer`] assume trimmed, ordered
//! operands and stay internal:
//!
//! ```compile_fail
//! let _ = aliquot_integers::magnitude::sub(&[1], &[2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub(crate) mod magnitude;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::Integer;
pub use rational::Rational;
