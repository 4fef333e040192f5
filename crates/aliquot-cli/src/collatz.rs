//! Collatz sequence explorer.
//!
//! Each step halves an even value or maps an odd value to `3x + 1`. The
//! explorer tracks how many steps of each kind a start value takes to
//! reach 1 and how wide the intermediate values get, and renders values as
//! binary and ternary glyph strings.

use aliquot::prelude::*;
use thiserror::Error;

/// Glyph for the digit 0.
pub const ZERO: &str = "□";
/// Glyph for the ternary digit 1.
pub const ONE: &str = "◪";
/// Glyph for the binary digit 1 and the ternary digit 2.
pub const TWO: &str = "■";

/// Errors raised by the explorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollatzError {
    /// Sequences are only defined for positive start values.
    #[error("collatz start value must be positive, got {0}")]
    NonPositive(Integer),
}

/// Step counts for one start value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of `3x + 1` steps.
    pub multiplies: usize,
    /// Number of halving steps.
    pub halvings: usize,
    /// Bits needed to hold every intermediate value without ever shifting
    /// right: the highest top-bit index reached plus the halvings done so
    /// far, plus one.
    pub peak_bits: usize,
}

impl Stats {
    /// Total number of steps.
    #[must_use]
    pub fn total(&self) -> usize {
        self.multiplies + self.halvings
    }
}

fn ensure_positive(value: &Integer) -> Result<usize, CollatzError> {
    match value.top_bit_index() {
        Some(top) if value.is_positive() => Ok(top),
        _ => Err(CollatzError::NonPositive(value.clone())),
    }
}

/// True when the next step halves the value.
#[must_use]
pub fn next_is_halving(value: &Integer) -> bool {
    value.is_even()
}

/// Applies one step.
#[must_use]
pub fn step(value: &Integer) -> Integer {
    if next_is_halving(value) {
        value >> 1
    } else {
        value * &Integer::new(3) + Integer::new(1)
    }
}

/// Runs the sequence from `start` down to 1.
///
/// # Errors
///
/// Returns [`CollatzError::NonPositive`] for zero or negative values.
pub fn stats(start: &Integer) -> Result<Stats, CollatzError> {
    let mut peak = ensure_positive(start)?;
    let mut value = start.clone();
    let mut result = Stats::default();

    while !value.is_one() {
        if next_is_halving(&value) {
            value = &value >> 1;
            result.halvings += 1;
        } else {
            value = step(&value);
            result.multiplies += 1;
            let top = value.top_bit_index().unwrap_or_default();
            peak = peak.max(top + result.halvings);
        }
    }

    result.peak_bits = peak + 1;
    Ok(result)
}

/// Every value from `start` down to and including 1.
///
/// # Errors
///
/// Returns [`CollatzError::NonPositive`] for zero or negative values.
pub fn trajectory(start: &Integer) -> Result<Vec<Integer>, CollatzError> {
    ensure_positive(start)?;
    let mut values = vec![start.clone()];
    let mut value = start.clone();
    while !value.is_one() {
        value = step(&value);
        values.push(value.clone());
    }
    Ok(values)
}

/// Zero bits between the two lowest set bits; 0 when fewer than two bits
/// are set.
#[must_use]
pub fn gap_between_lowest_bits(value: &Integer) -> usize {
    let Some(top) = value.top_bit_index() else {
        return 0;
    };
    let mut set = (0..=top).filter(|&i| value.bit(i));
    match (set.next(), set.next()) {
        (Some(lo), Some(hi)) => hi - lo - 1,
        _ => 0,
    }
}

/// The low `width` bits, most significant first, grouped in eights from
/// the low end.
#[must_use]
pub fn binary_glyphs(value: &Integer, width: usize) -> String {
    let mut out = String::new();
    for i in (0..width).rev() {
        out.push_str(if value.bit(i) { TWO } else { ZERO });
        if i % 8 == 0 && i != 0 {
            out.push(' ');
        }
    }
    out
}

/// The low `width` ternary digits, most significant first, grouped in
/// eights from the high end.
#[must_use]
pub fn ternary_glyphs(value: &Integer, width: usize) -> String {
    let three = Integer::new(3);
    let mut digits = Vec::with_capacity(width);
    let mut rest = value.abs();
    while !rest.is_zero() && digits.len() < width {
        let (quotient, remainder) = rest
            .div_rem(&three)
            .unwrap_or_else(|_| unreachable!("3 is non-zero"));
        digits.push(match remainder.to_i64() {
            Some(0) => ZERO,
            Some(1) => ONE,
            _ => TWO,
        });
        rest = quotient;
    }
    digits.resize(width, ZERO);

    let mut out = String::new();
    for (i, glyph) in digits.iter().rev().enumerate() {
        out.push_str(glyph);
        if i % 8 == 7 && i + 1 != width {
            out.push(' ');
        }
    }
    out
}

/// Column widths for [`render_line`]; a zero width omits the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    /// Decimal column, left-padded with `_`.
    pub decimal: usize,
    /// Binary glyph digits.
    pub binary: usize,
    /// Ternary glyph digits.
    pub ternary: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            decimal: 10,
            binary: 64,
            ternary: 64,
        }
    }
}

/// One trace line: the value in decimal, binary and ternary, the next
/// step, and the gap between its two lowest set bits.
#[must_use]
pub fn render_line(value: &Integer, columns: Columns) -> String {
    let mut out = String::new();
    if columns.decimal > 0 {
        out.push_str(&format!("{value:_>width$}", width = columns.decimal));
    }
    if columns.binary > 0 {
        out.push_str(" -> 2");
        out.push_str(&binary_glyphs(value, columns.binary));
    }
    if columns.ternary > 0 {
        out.push_str(" 3");
        out.push_str(&ternary_glyphs(value, columns.ternary));
    }
    out.push_str(if next_is_halving(value) { " ( ÷2 )" } else { " (×3+1)" });
    out.push_str(&format!(" <- {}", gap_between_lowest_bits(value)));
    out
}

/// How many times `value` can be tripled while its top bit index stays
/// below `bits`.
///
/// # Errors
///
/// Returns [`CollatzError::NonPositive`] for zero or negative values.
pub fn pow3_exponentiations(value: &Integer, bits: usize) -> Result<usize, CollatzError> {
    let top = ensure_positive(value)?;
    if top >= bits {
        return Ok(0);
    }

    // Each tripling adds log2(3) bits; start just below the estimate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let estimate = ((bits - top - 1) as f64 / 3f64.log2()).floor().max(0.0) as u32;
    let mut count = estimate;
    let mut scaled = value * &Integer::new(3).pow(count);
    while count > 0 && scaled.top_bit_index().unwrap_or_default() >= bits {
        count -= 1;
        scaled = value * &Integer::new(3).pow(count);
    }

    loop {
        let next = &scaled * &Integer::new(3);
        if next.top_bit_index().unwrap_or_default() >= bits {
            break;
        }
        scaled = next;
        count += 1;
    }
    Ok(count as usize)
}
