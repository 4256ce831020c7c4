//! Wrapper types around `rug::Integer` and `rug::Rational` with guaranteed `Hash` implementations.
//!
//! These newtypes ensure hash-consing compatibility: `a == b` implies `hash(a) == hash(b)`.

use rug::integer::Order;
use rug::ops::Pow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Arbitrary-precision integer wrapper around `rug::Integer`.
///
/// Provides `Hash` via canonical digit representation, ensuring
/// the hash-consing invariant holds for the expression arena.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct QInt(pub rug::Integer);

impl Hash for QInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the canonical byte representation (most significant first)
        let digits = self.0.to_digits::<u8>(Order::Msf);
        digits.hash(state);
        // Hash the sign to distinguish positive from negative
        self.0.cmp0().hash(state);
    }
}

impl fmt::Display for QInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Convenience constructors ---

impl From<i64> for QInt {
    fn from(val: i64) -> Self {
        QInt(rug::Integer::from(val))
    }
}

impl From<i32> for QInt {
    fn from(val: i32) -> Self {
        QInt(rug::Integer::from(val))
    }
}

impl From<u64> for QInt {
    fn from(val: u64) -> Self {
        QInt(rug::Integer::from(val))
    }
}

impl From<u32> for QInt {
    fn from(val: u32) -> Self {
        QInt(rug::Integer::from(val))
    }
}

impl From<rug::Integer> for QInt {
    fn from(val: rug::Integer) -> Self {
        QInt(val)
    }
}

// --- Arithmetic operations ---

impl Add for QInt {
    type Output = QInt;
    fn add(self, rhs: QInt) -> QInt {
        QInt(rug::Integer::from(&self.0 + &rhs.0))
    }
}

impl<'a> Add<&'a QInt> for &'a QInt {
    type Output = QInt;
    fn add(self, rhs: &'a QInt) -> QInt {
        QInt(rug::Integer::from(&self.0 + &rhs.0))
    }
}

impl Sub for QInt {
    type Output = QInt;
    fn sub(self, rhs: QInt) -> QInt {
        QInt(rug::Integer::from(&self.0 - &rhs.0))
    }
}

impl<'a> Sub<&'a QInt> for &'a QInt {
    type Output = QInt;
    fn sub(self, rhs: &'a QInt) -> QInt {
        QInt(rug::Integer::from(&self.0 - &rhs.0))
    }
}

impl Mul for QInt {
    type Output = QInt;
    fn mul(self, rhs: QInt) -> QInt {
        QInt(rug::Integer::from(&self.0 * &rhs.0))
    }
}

impl<'a> Mul<&'a QInt> for &'a QInt {
    type Output = QInt;
    fn mul(self, rhs: &'a QInt) -> QInt {
        QInt(rug::Integer::from(&self.0 * &rhs.0))
    }
}

impl Div for QInt {
    type Output = QInt;
    /// Integer (truncating) division. Panics if divisor is zero.
    fn div(self, rhs: QInt) -> QInt {
        assert!(
            rhs.0.cmp0() != Ordering::Equal,
            "QInt division by zero"
        );
        QInt(rug::Integer::from(&self.0 / &rhs.0))
    }
}

impl<'a> Div<&'a QInt> for &'a QInt {
    type Output = QInt;
    fn div(self, rhs: &'a QInt) -> QInt {
        assert!(
            rhs.0.cmp0() != Ordering::Equal,
            "QInt division by zero"
        );
        QInt(rug::Integer::from(&self.0 / &rhs.0))
    }
}

impl Neg for QInt {
    type Output = QInt;
    fn neg(self) -> QInt {
        QInt(rug::Integer::from(-&self.0))
    }
}

impl QInt {
    /// Zero constant.
    pub fn zero() -> Self {
        QInt(rug::Integer::from(0))
    }

    /// One constant.
    pub fn one() -> Self {
        QInt(rug::Integer::from(1))
    }

    /// Check if this integer is zero.
    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    /// Raise to a u32 power.
    pub fn pow_u32(&self, exp: u32) -> Self {
        QInt(rug::Integer::from(Pow::pow(&self.0, exp)))
    }

    /// Greatest common divisor (always non-negative).
    pub fn gcd(&self, other: &QInt) -> QInt {
        QInt(self.0.clone().gcd(&other.0))
    }

    /// Exact `n`-th root, or `None` if `self` is not a perfect `n`-th power.
    ///
    /// Negative values only ever have an exact root for odd `n`.
    pub fn exact_root(&self, n: u32) -> Option<QInt> {
        if self.is_zero() {
            return Some(QInt::zero());
        }
        if self.0.cmp0() == Ordering::Less && n % 2 == 0 {
            return None;
        }
        let (root, rem) = self.0.clone().root_rem(rug::Integer::new(), n);
        if rem.cmp0() == Ordering::Equal {
            Some(QInt(root))
        } else {
            None
        }
    }
}

/// Arbitrary-precision rational number wrapper around `rug::Rational`.
///
/// `rug::Rational` automatically reduces to lowest terms on construction.
/// Provides `Hash` via canonical representation of numerator and denominator.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct QRat(pub rug::Rational);

impl Hash for QRat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash numerator and denominator separately using canonical byte representation
        let numer = self.0.numer();
        let denom = self.0.denom();
        numer.to_digits::<u8>(Order::Msf).hash(state);
        numer.cmp0().hash(state);
        denom.to_digits::<u8>(Order::Msf).hash(state);
        denom.cmp0().hash(state);
    }
}

impl fmt::Display for QRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Convenience constructors ---

impl From<(i64, i64)> for QRat {
    fn from((num, den): (i64, i64)) -> Self {
        QRat(rug::Rational::from((
            rug::Integer::from(num),
            rug::Integer::from(den),
        )))
    }
}

impl From<(i32, i32)> for QRat {
    fn from((num, den): (i32, i32)) -> Self {
        QRat(rug::Rational::from((
            rug::Integer::from(num),
            rug::Integer::from(den),
        )))
    }
}

impl From<rug::Rational> for QRat {
    fn from(val: rug::Rational) -> Self {
        QRat(val)
    }
}

impl From<QInt> for QRat {
    fn from(val: QInt) -> Self {
        QRat(rug::Rational::from(val.0))
    }
}

// --- Arithmetic operations ---

impl Add for QRat {
    type Output = QRat;
    fn add(self, rhs: QRat) -> QRat {
        QRat(rug::Rational::from(&self.0 + &rhs.0))
    }
}

impl<'a> Add<&'a QRat> for &'a QRat {
    type Output = QRat;
    fn add(self, rhs: &'a QRat) -> QRat {
        QRat(rug::Rational::from(&self.0 + &rhs.0))
    }
}

impl Sub for QRat {
    type Output = QRat;
    fn sub(self, rhs: QRat) -> QRat {
        QRat(rug::Rational::from(&self.0 - &rhs.0))
    }
}

impl<'a> Sub<&'a QRat> for &'a QRat {
    type Output = QRat;
    fn sub(self, rhs: &'a QRat) -> QRat {
        QRat(rug::Rational::from(&self.0 - &rhs.0))
    }
}

impl Mul for QRat {
    type Output = QRat;
    fn mul(self, rhs: QRat) -> QRat {
        QRat(rug::Rational::from(&self.0 * &rhs.0))
    }
}

impl<'a> Mul<&'a QRat> for &'a QRat {
    type Output = QRat;
    fn mul(self, rhs: &'a QRat) -> QRat {
        QRat(rug::Rational::from(&self.0 * &rhs.0))
    }
}

impl Div for QRat {
    type Output = QRat;
    /// Rational division. Panics if divisor is zero.
    fn div(self, rhs: QRat) -> QRat {
        assert!(
            rhs.0.cmp0() != Ordering::Equal,
            "QRat division by zero"
        );
        QRat(rug::Rational::from(&self.0 / &rhs.0))
    }
}

impl<'a> Div<&'a QRat> for &'a QRat {
    type Output = QRat;
    fn div(self, rhs: &'a QRat) -> QRat {
        assert!(
            rhs.0.cmp0() != Ordering::Equal,
            "QRat division by zero"
        );
        QRat(rug::Rational::from(&self.0 / &rhs.0))
    }
}

impl Neg for QRat {
    type Output = QRat;
    fn neg(self) -> QRat {
        QRat(rug::Rational::from(-&self.0))
    }
}

impl QRat {
    /// Zero constant.
    pub fn zero() -> Self {
        QRat(rug::Rational::from(0))
    }

    /// One constant.
    pub fn one() -> Self {
        QRat(rug::Rational::from(1))
    }

    /// Check if this rational is zero.
    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    /// Get the numerator.
    pub fn numer(&self) -> &rug::Integer {
        self.0.numer()
    }

    /// Get the denominator.
    pub fn denom(&self) -> &rug::Integer {
        self.0.denom()
    }

    /// Check if this rational equals one.
    pub fn is_one(&self) -> bool {
        self.0 == rug::Rational::from(1)
    }

    /// Reciprocal. Panics if `self` is zero.
    pub fn recip(&self) -> QRat {
        assert!(!self.is_zero(), "QRat::recip: reciprocal of zero");
        QRat(rug::Rational::from(self.0.recip_ref()))
    }

    /// Raise to a signed integer power. Panics if `self` is zero and `exp < 0`.
    pub fn pow_i64(&self, exp: i64) -> QRat {
        if exp == 0 {
            return QRat::one();
        }
        let mag = self.pow_u32_mag(exp.unsigned_abs() as u32);
        if exp > 0 { mag } else { mag.recip() }
    }

    fn pow_u32_mag(&self, exp: u32) -> QRat {
        QRat(rug::Rational::from(Pow::pow(&self.0, exp)))
    }

    /// Exact `n`-th root of this rational, or `None` if it is not a perfect
    /// `n`-th power of a rational (numerator and denominator must each be
    /// perfect `n`-th powers of integers).
    pub fn exact_root(&self, n: u32) -> Option<QRat> {
        let numer = QInt(self.0.numer().clone());
        let denom = QInt(self.0.denom().clone());
        let numer_root = numer.exact_root(n)?;
        let denom_root = denom.exact_root(n)?;
        Some(QRat(rug::Rational::from((numer_root.0, denom_root.0))))
    }
}
