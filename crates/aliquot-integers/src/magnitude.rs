//! Unsigned multi-word kernels.
//!
//! Magnitudes are little-endian word slices: index 0 holds the least
//! significant word. Every function that returns a [`Words`] hands back a
//! trimmed value (no most-significant zero words), so the empty vector is
//! the only representation of zero.

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;

/// A single digit of a multi-word number.
pub type Word = u32;

/// An accumulator wide enough for `Word * Word + Word + Word`.
pub type DoubleWord = u64;

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

const WORD_MASK: DoubleWord = Word::MAX as DoubleWord;

/// Owned word storage. Values up to 128 bits stay inline.
pub type Words = SmallVec<[Word; 4]>;

#[inline]
const fn lo(x: DoubleWord) -> Word {
    x as Word
}

#[inline]
const fn hi(x: DoubleWord) -> Word {
    (x >> WORD_BITS) as Word
}

/// Drops most-significant zero words.
pub fn trim(words: &mut Words) {
    while words.last() == Some(&0) {
        words.pop();
    }
}

/// Compares two trimmed magnitudes: length first, then from the top word down.
pub fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Computes `a + b`.
pub fn add(a: &[Word], b: &[Word]) -> Words {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Words::with_capacity(long.len() + 1);
    let mut carry: Word = 0;

    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let sum = DoubleWord::from(x) + DoubleWord::from(y) + DoubleWord::from(carry);
        out.push(lo(sum));
        carry = hi(sum);
    }
    if carry != 0 {
        out.push(carry);
    }

    out
}

/// Computes `a - b`.
///
/// The caller guarantees `a >= b`; the borrow out of the top word is then
/// always zero.
pub fn sub(a: &[Word], b: &[Word]) -> Words {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction underflow");
    let mut out = Words::with_capacity(a.len());
    let mut borrow = false;

    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0);
        let (d, b1) = x.overflowing_sub(y);
        let (d, b2) = d.overflowing_sub(Word::from(borrow));
        out.push(d);
        borrow = b1 || b2;
    }
    debug_assert!(!borrow);

    trim(&mut out);
    out
}

/// Schoolbook product, `O(a.len() * b.len())`.
///
/// Each partial product plus the running carry and the word already in the
/// accumulator fits a [`DoubleWord`]: `(2^w - 1)^2 + 2(2^w - 1) = 2^2w - 1`.
pub fn mul(a: &[Word], b: &[Word]) -> Words {
    if a.is_empty() || b.is_empty() {
        return Words::new();
    }

    let mut out: Words = smallvec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let x = DoubleWord::from(x);
        let mut carry: Word = 0;
        for (j, &y) in b.iter().enumerate() {
            let acc = DoubleWord::from(out[i + j]) + x * DoubleWord::from(y) + DoubleWord::from(carry);
            out[i + j] = lo(acc);
            carry = hi(acc);
        }
        out[i + b.len()] = carry;
    }

    trim(&mut out);
    out
}

/// Multiplies in place by a single word and adds another.
pub fn mul_add_word(a: &mut Words, factor: Word, addend: Word) {
    let mut carry = addend;
    for w in a.iter_mut() {
        let acc = DoubleWord::from(*w) * DoubleWord::from(factor) + DoubleWord::from(carry);
        *w = lo(acc);
        carry = hi(acc);
    }
    if carry != 0 {
        a.push(carry);
    }
    trim(a);
}

/// Divides by a single non-zero word, returning quotient and remainder.
pub fn div_rem_word(a: &[Word], divisor: Word) -> (Words, Word) {
    debug_assert!(divisor != 0);
    let divisor = DoubleWord::from(divisor);
    let mut quotient: Words = smallvec![0; a.len()];
    let mut rem: DoubleWord = 0;

    for i in (0..a.len()).rev() {
        let cur = (rem << WORD_BITS) | DoubleWord::from(a[i]);
        quotient[i] = lo(cur / divisor);
        rem = cur % divisor;
    }

    trim(&mut quotient);
    (quotient, lo(rem))
}

/// Normalized long division of `u` by `v` (Knuth, TAOCP vol. 2, 4.3.1 D).
///
/// `v` must be non-zero. Both operands are shifted left until the top bit of
/// the divisor's leading word is set; each quotient word is then estimated
/// from the top two remainder words, corrected against the divisor's second
/// word, and fixed up by a single add-back when the multiply-subtract
/// underflows.
pub fn div_rem(u: &[Word], v: &[Word]) -> (Words, Words) {
    debug_assert!(!v.is_empty(), "division by a zero magnitude");

    if cmp(u, v) == Ordering::Less {
        return (Words::new(), Words::from_slice(u));
    }
    if let [d] = v {
        let (q, r) = div_rem_word(u, *d);
        let mut rem = Words::new();
        if r != 0 {
            rem.push(r);
        }
        return (q, rem);
    }

    let shift = v[v.len() - 1].leading_zeros();
    let v = shl_bits(v, shift);
    let v = &v[..v.len() - 1];
    // The extra top word is kept even when zero: the first step reads u[j + n].
    let mut u = shl_bits(u, shift);

    let n = v.len();
    let m = u.len() - n - 1;
    let v_top = DoubleWord::from(v[n - 1]);
    let v_next = DoubleWord::from(v[n - 2]);
    let mut quotient: Words = smallvec![0; m + 1];

    for j in (0..=m).rev() {
        let numerator = (DoubleWord::from(u[j + n]) << WORD_BITS) | DoubleWord::from(u[j + n - 1]);
        let mut qhat = numerator / v_top;
        let mut rhat = numerator % v_top;

        while qhat > WORD_MASK
            || qhat * v_next > ((rhat << WORD_BITS) | DoubleWord::from(u[j + n - 2]))
        {
            qhat -= 1;
            rhat += v_top;
            if rhat > WORD_MASK {
                break;
            }
        }

        // u[j..=j+n] -= qhat * v
        let mut carry: DoubleWord = 0;
        let mut borrow: i64 = 0;
        for i in 0..n {
            let product = qhat * DoubleWord::from(v[i]) + carry;
            carry = product >> WORD_BITS;
            let t = i64::from(u[i + j]) - (product & WORD_MASK) as i64 + borrow;
            u[i + j] = t as Word;
            borrow = t >> WORD_BITS;
        }
        let t = i64::from(u[j + n]) - carry as i64 + borrow;
        u[j + n] = t as Word;

        if t < 0 {
            qhat -= 1;
            let mut carry: DoubleWord = 0;
            for i in 0..n {
                let sum = DoubleWord::from(u[i + j]) + DoubleWord::from(v[i]) + carry;
                u[i + j] = lo(sum);
                carry = sum >> WORD_BITS;
            }
            u[j + n] = u[j + n].wrapping_add(lo(carry));
        }

        quotient[j] = lo(qhat);
    }

    u.truncate(n);
    let mut remainder = shr_bits(&u, shift);
    trim(&mut quotient);
    trim(&mut remainder);
    (quotient, remainder)
}

/// Shifts left by `shift < WORD_BITS` bits.
///
/// The result always has one more word than the input; the top word holds
/// the bits carried out and may be zero.
pub fn shl_bits(a: &[Word], shift: u32) -> Words {
    debug_assert!(shift < WORD_BITS);
    let mut out = Words::with_capacity(a.len() + 1);
    let mut carry: Word = 0;
    for &w in a {
        let wide = DoubleWord::from(w) << shift;
        out.push(lo(wide) | carry);
        carry = hi(wide);
    }
    out.push(carry);
    out
}

/// Shifts right by `shift < WORD_BITS` bits and trims the result.
pub fn shr_bits(a: &[Word], shift: u32) -> Words {
    debug_assert!(shift < WORD_BITS);
    let mut out: Words = smallvec![0; a.len()];
    let mut carry: Word = 0;
    for i in (0..a.len()).rev() {
        let wide = (DoubleWord::from(a[i]) << WORD_BITS) >> shift;
        out[i] = hi(wide) | carry;
        carry = lo(wide);
    }
    trim(&mut out);
    out
}

/// Shifts left by an arbitrary bit count: whole words first, then the rest.
pub fn shl(a: &[Word], bits: usize) -> Words {
    if a.is_empty() {
        return Words::new();
    }
    let word_shift = bits / WORD_BITS as usize;
    let bit_shift = (bits % WORD_BITS as usize) as u32;

    let mut out: Words = smallvec![0; word_shift];
    out.extend(shl_bits(a, bit_shift));
    trim(&mut out);
    out
}

/// Shifts right by an arbitrary bit count, discarding the bits shifted out.
pub fn shr(a: &[Word], bits: usize) -> Words {
    let word_shift = bits / WORD_BITS as usize;
    if word_shift >= a.len() {
        return Words::new();
    }
    shr_bits(&a[word_shift..], (bits % WORD_BITS as usize) as u32)
}

/// Number of significant bits; zero for an empty magnitude.
pub fn bit_len(a: &[Word]) -> usize {
    match a.last() {
        None => 0,
        Some(&top) => (a.len() - 1) * WORD_BITS as usize + (WORD_BITS - top.leading_zeros()) as usize,
    }
}

/// Reads a single bit; bits beyond the top word are zero.
pub fn bit(a: &[Word], index: usize) -> bool {
    let word = index / WORD_BITS as usize;
    let offset = index % WORD_BITS as usize;
    a.get(word).is_some_and(|w| (w >> offset) & 1 == 1)
}
