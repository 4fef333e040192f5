//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic for symbolic computation.

use num_traits::{One, Zero};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{ArithmeticError, Integer};

/// Layout of an IEEE 754 binary interchange format.
struct IeeeFormat {
    mantissa_bits: u32,
    exponent_bits: u32,
    bias: i64,
}

const BINARY64: IeeeFormat = IeeeFormat {
    mantissa_bits: 52,
    exponent_bits: 11,
    bias: 1023,
};

const BINARY32: IeeeFormat = IeeeFormat {
    mantissa_bits: 23,
    exponent_bits: 8,
    bias: 127,
};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: Integer,
    denom: Integer,
}

impl Rational {
    /// Fractional digits printed by `Display` when no precision is given.
    pub const DEFAULT_MAX_DIGITS: usize = 20;

    /// Creates a new rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        Ok(Self::canonical(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numer: n,
            denom: Integer::one(),
        }
    }

    /// Reduces to lowest terms and moves the sign to the numerator.
    ///
    /// Every constructor and arithmetic result passes through here. The
    /// denominator must be non-zero.
    fn canonical(numer: Integer, denom: Integer) -> Self {
        debug_assert!(!denom.is_zero());
        let g = numer.gcd(&denom);
        let (mut numer, mut denom) = if g.is_one() {
            (numer, denom)
        } else {
            (exact_div(&numer, &g), exact_div(&denom, &g))
        };
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    /// Reconstructs the exact value of an IEEE 754 double from its bits.
    ///
    /// Subnormals (biased exponent zero) have no implicit leading one and use
    /// the minimum normal exponent.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonFiniteFloat`] for NaN and infinities.
    pub fn from_f64_bits(bits: u64) -> Result<Self, ArithmeticError> {
        Self::from_ieee_bits(bits, &BINARY64)
    }

    /// Reconstructs the exact value of an IEEE 754 single from its bits.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonFiniteFloat`] for NaN and infinities.
    pub fn from_f32_bits(bits: u32) -> Result<Self, ArithmeticError> {
        Self::from_ieee_bits(u64::from(bits), &BINARY32)
    }

    fn from_ieee_bits(bits: u64, format: &IeeeFormat) -> Result<Self, ArithmeticError> {
        let mantissa_mask = (1u64 << format.mantissa_bits) - 1;
        let exponent_mask = (1u64 << format.exponent_bits) - 1;

        let negative = (bits >> (format.mantissa_bits + format.exponent_bits)) & 1 == 1;
        let biased = (bits >> format.mantissa_bits) & exponent_mask;
        let fraction = bits & mantissa_mask;

        if biased == exponent_mask {
            return Err(ArithmeticError::NonFiniteFloat);
        }

        let (significand, biased) = if biased == 0 {
            (fraction, 1)
        } else {
            (fraction | (1u64 << format.mantissa_bits), biased as i64)
        };
        let exp = biased - format.bias - i64::from(format.mantissa_bits);

        let mut numer = Integer::from(significand);
        if negative {
            numer = -numer;
        }
        let shift = exp.unsigned_abs() as usize;
        Ok(if exp >= 0 {
            Self::from_integer(numer << shift)
        } else {
            Self::canonical(numer, Integer::power_of_two(shift))
        })
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numer
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denom
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.numer.clone())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numer.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        // Already coprime; only the sign has to move.
        let (numer, denom) = if self.numer.is_negative() {
            (-&self.denom, -&self.numer)
        } else {
            (self.denom.clone(), self.numer.clone())
        };
        Ok(Self { numer, denom })
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        Ok(Self::canonical(&self.numer * &other.denom, &self.denom * &other.numer))
    }

    /// Computes self^exp; a negative exponent gives the reciprocal of the
    /// positive power.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] for a zero base with a
    /// negative exponent.
    pub fn pow(&self, exp: i32) -> Result<Self, ArithmeticError> {
        let e = exp.unsigned_abs();
        let magnitude = Self {
            numer: self.numer.pow(e),
            denom: self.denom.pow(e),
        };
        if exp < 0 {
            magnitude.recip()
        } else {
            Ok(magnitude)
        }
    }

    /// Largest integer not greater than this value.
    #[must_use]
    pub fn floor(&self) -> Integer {
        let (q, r) = self.trunc_parts();
        if r.is_negative() {
            q - Integer::one()
        } else {
            q
        }
    }

    /// Smallest integer not less than this value.
    #[must_use]
    pub fn ceil(&self) -> Integer {
        let (q, r) = self.trunc_parts();
        if r.is_positive() {
            q + Integer::one()
        } else {
            q
        }
    }

    /// Nearest integer; halves round away from zero.
    #[must_use]
    pub fn round(&self) -> Integer {
        let (q, r) = self.trunc_parts();
        let twice = &r.abs() << 1;
        if twice.cmp_magnitude(&self.denom).is_lt() {
            q
        } else if r.is_negative() {
            q - Integer::one()
        } else {
            q + Integer::one()
        }
    }

    /// Integer part rounded toward zero.
    #[must_use]
    pub fn trunc(&self) -> Integer {
        self.trunc_parts().0
    }

    fn trunc_parts(&self) -> (Integer, Integer) {
        self.numer
            .div_rem(&self.denom)
            .unwrap_or_else(|_| unreachable!("denominator is never zero"))
    }

    /// Decimal expansion with at most `max_digits` fractional digits.
    ///
    /// Long division is simulated on the remainders; when a remainder recurs
    /// the repeating block is wrapped in parentheses, e.g. `1/6` is
    /// `0.1(6)`. Otherwise the expansion stops after `max_digits` digits
    /// without any truncation marker.
    #[must_use]
    pub fn to_decimal_string(&self, max_digits: usize) -> String {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        let numer = self.numer.abs();
        let (int_part, mut rem) = numer
            .div_rem(&self.denom)
            .unwrap_or_else(|_| unreachable!("denominator is never zero"));
        out.push_str(&int_part.to_string());
        if rem.is_zero() {
            return out;
        }

        let ten = Integer::new(10);
        let mut digits = String::new();
        let mut seen: FxHashMap<Integer, usize> = FxHashMap::default();
        while !rem.is_zero() {
            if let Some(&start) = seen.get(&rem) {
                digits.insert(start, '(');
                digits.push(')');
                break;
            }
            if seen.len() >= max_digits {
                break;
            }
            seen.insert(rem.clone(), digits.len());
            let mut quotient = Integer::zero();
            rem = &rem * &ten;
            rem.div_rem_assign(&self.denom, &mut quotient)
                .unwrap_or_else(|_| unreachable!("denominator is never zero"));
            let digit = quotient.to_i64().unwrap_or_default();
            digits.push(char::from(b'0' + digit as u8));
        }

        if !digits.is_empty() {
            out.push('.');
            out.push_str(&digits);
        }
        out
    }

    /// Scientific notation `d.ddd…e±N` with at most `max_digits` digits
    /// after the point; the mantissa uses the same cycle notation as
    /// [`Rational::to_decimal_string`].
    #[must_use]
    pub fn to_scientific_string(&self, max_digits: usize) -> String {
        if self.is_zero() {
            return "0e0".to_string();
        }
        let exponent = self.decimal_exponent();
        let ten = Self::from(10);
        let mantissa = self
            .checked_div(&ten.pow(exponent).unwrap_or_else(|_| unreachable!("ten is not zero")))
            .unwrap_or_else(|_| unreachable!("a power of ten is not zero"));
        format!("{}e{exponent}", mantissa.to_decimal_string(max_digits))
    }

    /// The `e` with `10^e <= |self| < 10^(e + 1)`; `self` must be non-zero.
    fn decimal_exponent(&self) -> i32 {
        let numer = self.numer.abs();
        let digits = |n: &Integer| n.to_string().len() as i32;
        let mut e = digits(&numer) - digits(&self.denom);
        // numer / denom < 10^e  <=>  numer < denom * 10^e
        let below = |e: i32| {
            let ten = Integer::new(10);
            if e >= 0 {
                numer < &self.denom * &ten.pow(e.unsigned_abs())
            } else {
                &numer * &ten.pow(e.unsigned_abs()) < self.denom
            }
        };
        if below(e) {
            e -= 1;
        }
        e
    }
}

fn exact_div(a: &Integer, b: &Integer) -> Integer {
    a.checked_div(b)
        .unwrap_or_else(|_| unreachable!("gcd of a non-zero denominator is non-zero"))
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Rational {
    type Err = ArithmeticError;

    /// Parses `[-]digits[.digits]` exactly: `"1.25"` is `125 / 100`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((int_part, frac_part)) = s.split_once('.') else {
            return s.parse().map(Self::from_integer);
        };
        if let Some(position) = frac_part.find(|c: char| !c.is_ascii_digit()) {
            let digit = frac_part[position..].chars().next().unwrap_or('.');
            return Err(ArithmeticError::InvalidDigit {
                digit,
                position: int_part.len() + 1 + position,
            });
        }
        let digits = format!("{int_part}{frac_part}");
        let numer: Integer = digits.parse()?;
        let scale = Integer::new(10).pow(frac_part.len() as u32);
        Ok(Self::canonical(numer, scale))
    }
}

impl TryFrom<f64> for Rational {
    type Error = ArithmeticError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64_bits(value.to_bits())
    }
}

impl TryFrom<f32> for Rational {
    type Error = ArithmeticError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f32_bits(value.to_bits())
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numer, self.denom)
    }
}

/// Decimal expansion; the formatter precision caps the fractional digits
/// (default [`Rational::DEFAULT_MAX_DIGITS`]).
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(Self::DEFAULT_MAX_DIGITS);
        f.write_str(&self.to_decimal_string(digits))
    }
}

impl fmt::LowerExp for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(Self::DEFAULT_MAX_DIGITS);
        f.write_str(&self.to_scientific_string(digits))
    }
}

// Arithmetic operations

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::canonical(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::canonical(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::canonical(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; see [`Rational::checked_div`].
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident),*) => {$(
        impl $imp for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                (&self).$method(rhs)
            }
        }
    )*};
}

forward_binop!(Add add, Sub sub, Mul mul, Div div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(Integer::new(value))
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::from_integer(Integer::from(value))
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
