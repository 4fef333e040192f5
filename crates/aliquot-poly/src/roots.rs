//! Real root isolation by Sturm bisection.
//!
//! An interval is repeatedly halved until each piece holds at most one
//! root; a piece holding exactly one root is accepted once it is no wider
//! than the requested error, and its midpoint is reported.

use aliquot_integers::ArithmeticError;
use aliquot_rings::{Field, OrderedRing, RealProjection};
use tracing::{debug, trace};

use crate::polynomial::Polynomial;
use crate::sturm::{cauchy_bound, reduce_sequence, sign_changes, sturm_sequence};

/// A pending half-open interval `(lower, upper]` with the sign-change
/// counts at both ends.
struct Pending<T> {
    lower: T,
    upper: T,
    lower_changes: usize,
    upper_changes: usize,
}

impl<T> Pending<T> {
    fn root_count(&self) -> usize {
        self.lower_changes.saturating_sub(self.upper_changes)
    }
}

/// Approximates every real root of the polynomial whose Sturm sequence is
/// `seq` inside `[lower, upper]`.
///
/// Each root is reported once, as the midpoint of an interval of width at
/// most `max_error` that contains it; a root exactly at `lower` is reported
/// as `lower` itself. Results are sorted ascending. Reversed bounds are
/// swapped. An empty sequence (the zero polynomial) has no roots.
///
/// # Errors
///
/// - [`ArithmeticError::ZeroWidthInterval`] if `lower == upper`.
/// - [`ArithmeticError::InvalidTolerance`] if `max_error` is not positive.
/// - [`ArithmeticError::NonRealValue`] if a sequence member evaluates to a
///   non-real value.
pub fn roots_in_range<R>(
    seq: &[Polynomial<R>],
    lower: &R::Real,
    upper: &R::Real,
    max_error: &R::Real,
) -> Result<Vec<R::Real>, ArithmeticError>
where
    R: Field + RealProjection,
    R::Real: Field,
{
    let (lower, upper) = match lower.cmp(upper) {
        std::cmp::Ordering::Equal => return Err(ArithmeticError::ZeroWidthInterval),
        std::cmp::Ordering::Less => (lower.clone(), upper.clone()),
        std::cmp::Ordering::Greater => (upper.clone(), lower.clone()),
    };
    if max_error.signum() <= 0 {
        return Err(ArithmeticError::InvalidTolerance);
    }
    if seq.is_empty() {
        return Ok(Vec::new());
    }

    let seq = reduce_sequence(seq);
    let mut roots = Vec::new();

    let at_lower = sign_changes(&seq, &lower)?;
    if at_lower.is_root {
        roots.push(lower.clone());
    }
    let at_upper = sign_changes(&seq, &upper)?;

    let mut work = vec![Pending {
        lower,
        upper,
        lower_changes: at_lower.changes,
        upper_changes: at_upper.changes,
    }];
    let mut bisections = 0usize;

    while let Some(interval) = work.pop() {
        let count = interval.root_count();
        trace!(count, pending = work.len(), "examining interval");
        if count == 0 {
            continue;
        }

        let width = interval.upper.clone() - interval.lower.clone();
        let mid = (interval.lower.clone() + interval.upper.clone()).half();
        if count == 1 && width <= *max_error {
            roots.push(mid);
            continue;
        }

        bisections += 1;
        let at_mid = sign_changes(&seq, &mid)?;
        // Upper half first so the lower half is popped next.
        work.push(Pending {
            lower: mid.clone(),
            upper: interval.upper,
            lower_changes: at_mid.changes,
            upper_changes: interval.upper_changes,
        });
        work.push(Pending {
            lower: interval.lower,
            upper: mid,
            lower_changes: interval.lower_changes,
            upper_changes: at_mid.changes,
        });
    }

    roots.sort();
    debug!(roots = roots.len(), bisections, "isolated real roots");
    Ok(roots)
}

/// Approximates every real root of `p` to within `max_error`, searching
/// the interval given by the Cauchy bound.
///
/// # Errors
///
/// - [`ArithmeticError::InvalidTolerance`] if `max_error` is not positive.
/// - [`ArithmeticError::NonRealValue`] if `p` has a non-real coefficient.
pub fn real_roots<R>(p: &Polynomial<R>, max_error: &R::Real) -> Result<Vec<R::Real>, ArithmeticError>
where
    R: Field + RealProjection,
    R::Real: Field,
{
    if p.is_zero() {
        if max_error.signum() <= 0 {
            return Err(ArithmeticError::InvalidTolerance);
        }
        return Ok(Vec::new());
    }

    let bound = cauchy_bound(p)?;
    let seq = sturm_sequence(p);
    roots_in_range(&seq, &-bound.clone(), &bound, max_error)
}
