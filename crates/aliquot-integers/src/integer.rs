//! Arbitrary precision integers.
//!
//! This module provides a sign-magnitude integer over a little-endian
//! word array, with the operations needed for rational and polynomial
//! arithmetic.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Shl, Shr, Sub, SubAssign};
use std::str::FromStr;

use crate::magnitude::{self, Word, Words, WORD_BITS};
use crate::ArithmeticError;

/// Largest power of ten that fits a [`Word`], used to convert decimal
/// strings nine digits at a time.
const DECIMAL_CHUNK: Word = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

/// An arbitrary precision integer.
///
/// The magnitude never carries a most-significant zero word and zero is
/// never negative, so the derived equality and hash agree with numeric
/// equality.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    negative: bool,
    words: Words,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_parts(value < 0, magnitude_of(u128::from(value.unsigned_abs())))
    }

    /// The single normalization point: trims the magnitude and clears the
    /// sign of zero.
    fn from_parts(negative: bool, mut words: Words) -> Self {
        magnitude::trim(&mut words);
        let negative = negative && !words.is_empty();
        Self { negative, words }
    }

    fn normalize(&mut self) {
        magnitude::trim(&mut self.words);
        if self.words.is_empty() {
            self.negative = false;
        }
    }

    /// Returns 2^exp.
    #[must_use]
    pub fn power_of_two(exp: usize) -> Self {
        Self::from_parts(false, magnitude::shl(&[1], exp))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            words: self.words.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.words.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if this integer is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.words.is_empty()
    }

    /// Returns true if the lowest bit of the magnitude is clear.
    #[must_use]
    pub fn is_even(&self) -> bool {
        !self.bit(0)
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        magnitude::bit_len(&self.words)
    }

    /// Index of the highest set bit of the magnitude, or `None` for zero.
    #[must_use]
    pub fn top_bit_index(&self) -> Option<usize> {
        self.bit_len().checked_sub(1)
    }

    /// Reads bit `index` of the magnitude.
    #[must_use]
    pub fn bit(&self, index: usize) -> bool {
        magnitude::bit(&self.words, index)
    }

    /// Number of words in the magnitude.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Compares absolute values.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        magnitude::cmp(&self.words, &other.words)
    }

    /// Truncating division with remainder.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign
    /// of the dividend, so `q * divisor + r == self` and `|r| < |divisor|`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        let (q, r) = magnitude::div_rem(&self.words, &divisor.words);
        Ok((
            Self::from_parts(self.negative != divisor.negative, q),
            Self::from_parts(self.negative, r),
        ))
    }

    /// In-place truncating division: `self` becomes the remainder and the
    /// quotient is written to `quotient`.
    ///
    /// Behaves exactly like [`Integer::div_rem`]. The receiver can be neither
    /// the divisor nor the quotient output; the borrow checker rejects both:
    ///
    /// ```compile_fail
    /// use aliquot_integers::Integer;
    ///
    /// let mut a = Integer::new(17);
    /// let mut q = Integer::default();
    /// a.div_rem_assign(&a, &mut q).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero; the
    /// receiver and `quotient` are left untouched.
    pub fn div_rem_assign(&mut self, divisor: &Self, quotient: &mut Self) -> Result<(), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        let (q, r) = magnitude::div_rem(&self.words, &divisor.words);
        *quotient = Self::from_parts(self.negative != divisor.negative, q);
        self.words = r;
        self.normalize();
        Ok(())
    }

    /// Truncating quotient.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder with the sign of the dividend.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Computes the greatest common divisor by repeated remainder.
    ///
    /// The result is non-negative; `gcd(0, 0) == 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.words.clone();
        let mut b = other.words.clone();
        while !b.is_empty() {
            let (_, r) = magnitude::div_rem(&a, &b);
            a = b;
            b = r;
        }
        Self::from_parts(false, a)
    }

    /// Computes the least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        let (q, _) = magnitude::div_rem(&self.words, &g.words);
        Self::from_parts(false, magnitude::mul(&q, &other.words))
    }

    /// Computes self^exp by repeated squaring.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result: Words = Words::from_slice(&[1]);
        let mut base = self.words.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = magnitude::mul(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = magnitude::mul(&base, &base);
            }
        }
        Self::from_parts(self.negative && exp % 2 == 1, result)
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.words.len() > 2 {
            return None;
        }
        let mag = self
            .words
            .iter()
            .rev()
            .fold(0u64, |acc, &w| (acc << WORD_BITS) | u64::from(w));
        if self.negative {
            0i64.checked_sub_unsigned(mag)
        } else {
            i64::try_from(mag).ok()
        }
    }

    /// Formats the value as `0x...` hexadecimal, with a leading `-` for
    /// negative values and a bare `0` for zero.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.is_zero() {
            "0".to_string()
        } else {
            format!("{self:#X}")
        }
    }

    /// Decimal digits of the magnitude, most significant first.
    fn magnitude_to_decimal(&self) -> String {
        if self.words.is_empty() {
            return "0".to_string();
        }
        let mut chunks = Vec::new();
        let mut rest = self.words.clone();
        while !rest.is_empty() {
            let (q, r) = magnitude::div_rem_word(&rest, DECIMAL_CHUNK);
            chunks.push(r);
            rest = q;
        }
        let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            out.push_str(&top.to_string());
        }
        for chunk in iter {
            out.push_str(&format!("{chunk:09}"));
        }
        out
    }

    fn magnitude_to_hex(&self, upper: bool) -> String {
        let mut out = String::new();
        for (i, w) in self.words.iter().rev().enumerate() {
            let digits = match (i, upper) {
                (0, true) => format!("{w:X}"),
                (0, false) => format!("{w:x}"),
                (_, true) => format!("{w:08X}"),
                (_, false) => format!("{w:08x}"),
            };
            out.push_str(&digits);
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

fn magnitude_of(mut value: u128) -> Words {
    let mut words = Words::new();
    while value != 0 {
        words.push(value as Word);
        value >>= WORD_BITS;
    }
    words
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.words.is_empty()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.words.as_slice() == [1]
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Integer {
    type Err = ArithmeticError;

    /// Parses a decimal integer with an optional leading `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits, offset) = match s.strip_prefix('-') {
            Some(rest) => (true, rest, 1),
            None => (false, s, 0),
        };
        if digits.is_empty() {
            return Err(ArithmeticError::EmptyNumber);
        }
        if let Some((position, digit)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ArithmeticError::InvalidDigit {
                digit,
                position: position + offset,
            });
        }

        let bytes = digits.as_bytes();
        let mut words = Words::new();
        let head = bytes.len() % DECIMAL_CHUNK_DIGITS;
        let (first, rest) = bytes.split_at(head);
        if !first.is_empty() {
            magnitude::mul_add_word(&mut words, 1, decimal_chunk(first));
        }
        for chunk in rest.chunks(DECIMAL_CHUNK_DIGITS) {
            magnitude::mul_add_word(&mut words, DECIMAL_CHUNK, decimal_chunk(chunk));
        }
        Ok(Self::from_parts(negative, words))
    }
}

/// Value of at most nine ASCII digits.
fn decimal_chunk(digits: &[u8]) -> Word {
    digits
        .iter()
        .fold(0, |acc, &d| acc * 10 + Word::from(d - b'0'))
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_to_decimal())
    }
}

impl fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.magnitude_to_hex(true))
    }
}

impl fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.magnitude_to_hex(false))
    }
}

// Arithmetic operations

fn add_signed(a_neg: bool, a: &[Word], b_neg: bool, b: &[Word]) -> Integer {
    if a_neg == b_neg {
        return Integer::from_parts(a_neg, magnitude::add(a, b));
    }
    match magnitude::cmp(a, b) {
        Ordering::Less => Integer::from_parts(b_neg, magnitude::sub(b, a)),
        _ => Integer::from_parts(a_neg, magnitude::sub(a, b)),
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        add_signed(self.negative, &self.words, rhs.negative, &rhs.words)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        add_signed(self.negative, &self.words, !rhs.negative, &rhs.words)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer::from_parts(self.negative != rhs.negative, magnitude::mul(&self.words, &rhs.words))
    }
}

impl Div for &Integer {
    type Output = Integer;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Rem for &Integer {
    type Output = Integer;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident),*) => {$(
        impl $imp for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                (&self).$method(rhs)
            }
        }

        impl $imp<Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                self.$method(&rhs)
            }
        }
    )*};
}

forward_binop!(Add add, Sub sub, Mul mul, Div div, Rem rem);

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = &*self * rhs;
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negative = !self.negative;
        self.normalize();
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// Shifts act on the magnitude; the sign is kept.
impl Shl<usize> for &Integer {
    type Output = Integer;

    fn shl(self, bits: usize) -> Self::Output {
        Integer::from_parts(self.negative, magnitude::shl(&self.words, bits))
    }
}

/// Shifts act on the magnitude, so negative values round toward zero.
impl Shr<usize> for &Integer {
    type Output = Integer;

    fn shr(self, bits: usize) -> Self::Output {
        Integer::from_parts(self.negative, magnitude::shr(&self.words, bits))
    }
}

impl Shl<usize> for Integer {
    type Output = Integer;

    fn shl(self, bits: usize) -> Self::Output {
        &self << bits
    }
}

impl Shr<usize> for Integer {
    type Output = Integer;

    fn shr(self, bits: usize) -> Self::Output {
        &self >> bits
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Self::from_parts(value < 0, magnitude_of(value.unsigned_abs() as u128))
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Self::from_parts(false, magnitude_of(value as u128))
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, i128, isize);
from_unsigned!(u8, u16, u32, u64, u128, usize);
