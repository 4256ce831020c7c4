//! Arithmetic operations for QRatPoly.
//!
//! Provides Add, Sub, Mul, Neg trait implementations (by value and by reference),
//! scalar operations, and polynomial division (div_rem, exact_div, pseudo_rem).

use super::QRatPoly;
use crate::number::QRat;
use std::ops::{Add, Mul, Neg, Sub};

// ---- Add ----

impl Add<&QRatPoly> for &QRatPoly {
    type Output = QRatPoly;
    fn add(self, rhs: &QRatPoly) -> QRatPoly {
        let len = self.coeffs().len().max(rhs.coeffs().len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            coeffs.push(&self.coeff(i) + &rhs.coeff(i));
        }
        QRatPoly::from_vec(coeffs)
    }
}

impl Add for QRatPoly {
    type Output = QRatPoly;
    fn add(self, rhs: QRatPoly) -> QRatPoly {
        &self + &rhs
    }
}

impl Add<&QRatPoly> for QRatPoly {
    type Output = QRatPoly;
    fn add(self, rhs: &QRatPoly) -> QRatPoly {
        &self + rhs
    }
}

impl Add<QRatPoly> for &QRatPoly {
    type Output = QRatPoly;
    fn add(self, rhs: QRatPoly) -> QRatPoly {
        self + &rhs
    }
}

// ---- Sub ----

impl Sub<&QRatPoly> for &QRatPoly {
    type Output = QRatPoly;
    fn sub(self, rhs: &QRatPoly) -> QRatPoly {
        let len = self.coeffs().len().max(rhs.coeffs().len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            coeffs.push(&self.coeff(i) - &rhs.coeff(i));
        }
        QRatPoly::from_vec(coeffs)
    }
}

impl Sub for QRatPoly {
    type Output = QRatPoly;
    fn sub(self, rhs: QRatPoly) -> QRatPoly {
        &self - &rhs
    }
}

impl Sub<&QRatPoly> for QRatPoly {
    type Output = QRatPoly;
    fn sub(self, rhs: &QRatPoly) -> QRatPoly {
        &self - rhs
    }
}

impl Sub<QRatPoly> for &QRatPoly {
    type Output = QRatPoly;
    fn sub(self, rhs: QRatPoly) -> QRatPoly {
        self - &rhs
    }
}

// ---- Neg ----

impl Neg for &QRatPoly {
    type Output = QRatPoly;
    fn neg(self) -> QRatPoly {
        let coeffs: Vec<QRat> = self.coeffs().iter().map(|c| -c.clone()).collect();
        QRatPoly::from_vec(coeffs)
    }
}

impl Neg for QRatPoly {
    type Output = QRatPoly;
    fn neg(self) -> QRatPoly {
        -&self
    }
}

// ---- Mul ----

impl Mul<&QRatPoly> for &QRatPoly {
    type Output = QRatPoly;
    fn mul(self, rhs: &QRatPoly) -> QRatPoly {
        if self.is_zero() || rhs.is_zero() {
            return QRatPoly::zero();
        }
        let a = self.coeffs();
        let b = rhs.coeffs();
        let result_len = a.len() + b.len() - 1;
        let mut coeffs = vec![QRat::zero(); result_len];
        for (i, ai) in a.iter().enumerate() {
            if ai.is_zero() {
                continue;
            }
            for (j, bj) in b.iter().enumerate() {
                if bj.is_zero() {
                    continue;
                }
                let product = ai * bj;
                coeffs[i + j] = &coeffs[i + j] + &product;
            }
        }
        QRatPoly::from_vec(coeffs)
    }
}

impl Mul for QRatPoly {
    type Output = QRatPoly;
    fn mul(self, rhs: QRatPoly) -> QRatPoly {
        &self * &rhs
    }
}

impl Mul<&QRatPoly> for QRatPoly {
    type Output = QRatPoly;
    fn mul(self, rhs: &QRatPoly) -> QRatPoly {
        &self * rhs
    }
}

impl Mul<QRatPoly> for &QRatPoly {
    type Output = QRatPoly;
    fn mul(self, rhs: QRatPoly) -> QRatPoly {
        self * &rhs
    }
}

// ---- Division ----

impl QRatPoly {
    /// Euclidean polynomial division: returns (quotient, remainder) such that
    /// `self = quotient * divisor + remainder` and `deg(remainder) < deg(divisor)`.
    ///
    /// Panics if divisor is zero.
    pub fn div_rem(&self, divisor: &QRatPoly) -> (QRatPoly, QRatPoly) {
        assert!(!divisor.is_zero(), "QRatPoly::div_rem: division by zero");

        let d_deg = match divisor.degree() {
            Some(d) => d,
            None => unreachable!(), // already checked is_zero
        };
        let s_deg = match self.degree() {
            Some(d) => d,
            None => return (QRatPoly::zero(), QRatPoly::zero()),
        };

        if s_deg < d_deg {
            return (QRatPoly::zero(), self.clone());
        }

        let lc_d = divisor.leading_coeff().unwrap();
        let mut remainder: Vec<QRat> = self.coeffs().to_vec();
        let q_len = s_deg - d_deg + 1;
        let mut quotient = vec![QRat::zero(); q_len];

        for i in (0..q_len).rev() {
            let idx = i + d_deg;
            if idx >= remainder.len() {
                continue;
            }
            let q_coeff = &remainder[idx] / &lc_d;
            if q_coeff.is_zero() {
                continue;
            }
            quotient[i] = q_coeff.clone();
            // Subtract divisor * q_coeff shifted by i
            for (j, dj) in divisor.coeffs().iter().enumerate() {
                let term = dj * &q_coeff;
                remainder[i + j] = &remainder[i + j] - &term;
            }
        }

        (QRatPoly::from_vec(quotient), QRatPoly::from_vec(remainder))
    }

    /// Exact division: returns `self / divisor` and panics if there is a nonzero remainder.
    pub fn exact_div(&self, divisor: &QRatPoly) -> QRatPoly {
        let (q, r) = self.div_rem(divisor);
        assert!(r.is_zero(), "exact_div: nonzero remainder");
        q
    }

    /// Pseudo-remainder: computes `lc(other)^delta * self mod other` where
    /// `delta = deg(self) - deg(other) + 1`.
    ///
    /// This avoids fractions when working with integer-coefficient polynomials.
    pub fn pseudo_rem(&self, other: &QRatPoly) -> QRatPoly {
        if self.is_zero() {
            return QRatPoly::zero();
        }
        let s_deg = match self.degree() {
            Some(d) => d,
            None => return QRatPoly::zero(),
        };
        let o_deg = match other.degree() {
            Some(d) => d,
            None => panic!("QRatPoly::pseudo_rem: division by zero"),
        };
        if s_deg < o_deg {
            return self.clone();
        }

        let delta = s_deg - o_deg + 1;
        let lc_other = other.leading_coeff().unwrap();

        // Scale self by lc(other)^delta
        let mut scale = QRat::one();
        for _ in 0..delta {
            scale = &scale * &lc_other;
        }
        let scaled = self.scalar_mul(&scale);

        let (_q, r) = scaled.div_rem(other);
        r
    }
}
