//! The ring of integers.

use crate::traits::{OrderedRing, RealProjection, Ring};
use aliquot_integers::Integer;

impl Ring for Integer {
    fn zero() -> Self {
        <Self as num_traits::Zero>::zero()
    }

    fn one() -> Self {
        <Self as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }

    fn from_i64(n: i64) -> Self {
        Integer::new(n)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self * &Integer::new(n)
    }

    fn pow(&self, n: u32) -> Self {
        Integer::pow(self, n)
    }
}

impl OrderedRing for Integer {
    fn abs(&self) -> Self {
        Integer::abs(self)
    }

    fn signum(&self) -> i8 {
        Integer::signum(self)
    }
}

impl RealProjection for Integer {
    type Real = Integer;

    fn is_real(&self) -> bool {
        true
    }

    fn to_real(&self) -> Option<Self::Real> {
        Some(self.clone())
    }

    fn from_real(real: Self::Real) -> Self {
        real
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ring() {
        let a = <Integer as Ring>::from_i64(12);
        assert!(Ring::is_zero(&(a.clone() - a.clone())));
        assert!(Ring::is_one(&<Integer as Ring>::one()));
        assert_eq!(Ring::pow(&a, 2), Integer::new(144));
        assert_eq!(a.mul_by_scalar(-3), Integer::new(-36));
        assert_eq!(OrderedRing::abs(&Integer::new(-4)), Integer::new(4));
        assert!(Integer::new(-4).is_negative_real());
    }
}
