//! Errors shared by every layer of the arithmetic stack.

use thiserror::Error;

/// Errors raised by exact arithmetic operations.
///
/// Every operation is deterministic, so none of these is transient:
/// retrying with the same inputs fails the same way.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A character other than an ASCII digit appeared where a digit was expected.
    #[error("invalid digit {digit:?} at byte {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// The input contained no digits at all.
    #[error("cannot parse a number without digits")]
    EmptyNumber,

    /// Division, remainder or reciprocal with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// A NaN or infinite floating-point bit pattern has no rational value.
    #[error("non-finite floating-point value has no exact rational form")]
    NonFiniteFloat,

    /// A root search was asked to scan an interval with equal bounds.
    #[error("root search interval has zero width")]
    ZeroWidthInterval,

    /// A real value was required but the computation produced a complex one.
    #[error("expected a real value, found {0}")]
    NonRealValue(String),

    /// The root isolation error bound was zero or negative.
    #[error("root isolation tolerance must be positive")]
    InvalidTolerance,
}
