//! Integers produced by the numeric sources.
//!
//! Values stay in a machine word while they fit, and are promoted to a
//! big integer on overflow, so an unbounded source never wraps or panics.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul},
    rc::Rc,
};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

#[derive(Clone)]
enum IntegerInner {
    Compact(i64),
    // Never holds a value that fits in an i64.
    Big(Rc<BigInt>),
}

#[derive(Clone)]
pub struct Integer(IntegerInner);

impl Integer {
    pub fn to_compact_integer(&self) -> Option<i64> {
        match &self.0 {
            IntegerInner::Compact(i) => Some(*i),
            IntegerInner::Big(i) => i.to_i64(),
        }
    }

    pub fn to_big_integer(&self) -> BigInt {
        match &self.0 {
            IntegerInner::Compact(i) => BigInt::from(*i),
            IntegerInner::Big(i) => (**i).clone(),
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self.0, IntegerInner::Compact(_))
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(i1), Some(i2)) = (self.to_compact_integer(), other.to_compact_integer()) {
            i1 == i2
        } else if let (IntegerInner::Big(i1), IntegerInner::Big(i2)) = (&self.0, &other.0) {
            i1 == i2
        } else {
            false
        }
    }
}

impl Eq for Integer {}

impl PartialEq<i64> for Integer {
    fn eq(&self, other: &i64) -> bool {
        self.to_compact_integer() == Some(*other)
    }
}

impl PartialEq<i32> for Integer {
    fn eq(&self, other: &i32) -> bool {
        self.to_compact_integer() == Some(i64::from(*other))
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (IntegerInner::Compact(i1), IntegerInner::Compact(i2)) => i1.cmp(i2),
            _ => self.to_big_integer().cmp(&other.to_big_integer()),
        }
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Integer {
        if let (IntegerInner::Compact(a), IntegerInner::Compact(b)) = (&self.0, &rhs.0) {
            if let Some(sum) = a.checked_add(*b) {
                return Integer::from(sum);
            }
        }
        Integer::from(self.to_big_integer() + rhs.to_big_integer())
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Integer {
        if let (IntegerInner::Compact(a), IntegerInner::Compact(b)) = (&self.0, &rhs.0) {
            if let Some(product) = a.checked_mul(*b) {
                return Integer::from(product);
            }
        }
        Integer::from(self.to_big_integer() * rhs.to_big_integer())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            IntegerInner::Compact(i) => fmt::Display::fmt(i, f),
            IntegerInner::Big(i) => fmt::Display::fmt(&**i, f),
        }
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<i64> for Integer {
    fn from(i: i64) -> Self {
        Integer(IntegerInner::Compact(i))
    }
}

impl From<i32> for Integer {
    fn from(i: i32) -> Self {
        Integer::from(i64::from(i))
    }
}

impl From<u64> for Integer {
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(i) => Integer::from(i),
            Err(_) => Integer::from(BigInt::from(i)),
        }
    }
}

impl From<BigInt> for Integer {
    fn from(i: BigInt) -> Self {
        Integer(if let Some(i) = i.to_i64() {
            IntegerInner::Compact(i)
        } else {
            IntegerInner::Big(Rc::new(i))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_promotes_on_overflow() {
        let sum = &Integer::from(i64::MAX) + &Integer::from(1);
        assert!(!sum.is_compact());
        assert_eq!(sum.to_string(), "9223372036854775808");
    }

    #[test]
    fn multiplication_promotes_on_overflow() {
        let product = &Integer::from(i64::MAX) * &Integer::from(2);
        assert_eq!(product.to_big_integer(), BigInt::from(i64::MAX) * 2);
    }

    #[test]
    fn big_results_that_fit_are_compact() {
        let big = &Integer::from(i64::MAX) + &Integer::from(1);
        let back = Integer::from(big.to_big_integer() - 2);
        assert!(back.is_compact());
        assert_eq!(back, i64::MAX - 1);
    }

    #[test]
    fn ordering_spans_representations() {
        let big = &Integer::from(i64::MAX) * &Integer::from(4);
        assert!(Integer::from(-3) < Integer::from(2));
        assert!(Integer::from(i64::MAX) < big);
        assert!(big > Integer::from(i64::MIN));
    }

    #[test]
    fn u64_beyond_i64_is_big() {
        let value = Integer::from(u64::MAX);
        assert!(!value.is_compact());
        assert_eq!(format!("{value:?}"), u64::MAX.to_string());
    }
}
