//! Simple algebraic number fields `NF(alpha)` and their elements.
//!
//! An `NfElem` is a dense coefficient vector reduced modulo the field's
//! minimal polynomial, following `QRatPoly`'s own invariant-on-construction
//! style -- reduce on the way in, stay canonical forever after.
//!
//! Per Open Question (c) in `DESIGN.md`, this is deliberately the *only*
//! representation: no degree-1/degree-2 fast path, unlike the number-field
//! library `ca`'s `nf_elem_t`.

use crate::poly::gcd::poly_resultant;
use crate::poly::QRatPoly;
use crate::number::QRat;

/// A number field `Q(alpha)`, `alpha` a root of `minpoly`.
///
/// `minpoly` is assumed monic and irreducible over `Q`; this crate does not
/// implement a general irreducibility test (that is squarely the
/// "algebraic-number arithmetic" the core treats as an external
/// collaborator), so callers that synthesise a minimal polynomial (the
/// rational-power fallback in `crate::exp`) document when they are relying
/// on this assumption rather than proving it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumberField {
    pub minpoly: QRatPoly,
}

impl NumberField {
    pub fn new(minpoly: QRatPoly) -> Self {
        assert!(
            minpoly.degree().unwrap_or(0) >= 1,
            "NumberField::new: minimal polynomial must have positive degree"
        );
        assert!(
            minpoly.leading_coeff().unwrap().is_one(),
            "NumberField::new: minimal polynomial must be monic"
        );
        NumberField { minpoly }
    }

    pub fn degree(&self) -> usize {
        self.minpoly.degree().unwrap_or(0)
    }

    /// The field `Q(i)`, `i^2 + 1 = 0`.
    pub fn gaussian() -> Self {
        NumberField::new(QRatPoly::from_i64_coeffs(&[1, 0, 1]))
    }

    /// `Q(r^(1/q))` for a rational `r`, via the (possibly reducible, see
    /// struct doc) minimal polynomial `x^q - r`.
    pub fn radical(q: u32, r: QRat) -> Self {
        assert!(q >= 2, "NumberField::radical: q must be at least 2");
        let mut coeffs = vec![QRat::zero(); q as usize + 1];
        coeffs[0] = -r;
        coeffs[q as usize] = QRat::one();
        NumberField::new(QRatPoly::from_vec(coeffs))
    }

    /// An annihilating (not necessarily minimal -- see struct doc)
    /// polynomial for `w` with `w^q = alpha`, where `alpha` has minimal
    /// polynomial `self.minpoly`: substitute `y = x^q` into `self.minpoly`.
    pub fn radical_of(&self, q: u32) -> NumberField {
        let d = self.degree();
        let mut coeffs = vec![QRat::zero(); d * q as usize + 1];
        for i in 0..=d {
            coeffs[i * q as usize] = self.minpoly.coeff(i);
        }
        NumberField::new(QRatPoly::from_vec(coeffs).make_monic())
    }
}

/// An element of a `NumberField`: a polynomial in `alpha` of degree less
/// than the field's degree, reduced modulo `minpoly`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NfElem {
    pub coeffs: QRatPoly,
}

impl NfElem {
    pub fn reduce(field: &NumberField, p: &QRatPoly) -> Self {
        let (_, r) = p.div_rem(&field.minpoly);
        NfElem { coeffs: r }
    }

    pub fn zero() -> Self {
        NfElem {
            coeffs: QRatPoly::zero(),
        }
    }

    pub fn one() -> Self {
        NfElem {
            coeffs: QRatPoly::one(),
        }
    }

    pub fn from_rational(r: QRat) -> Self {
        NfElem {
            coeffs: QRatPoly::constant(r),
        }
    }

    /// The generator `alpha` itself.
    pub fn generator() -> Self {
        NfElem { coeffs: QRatPoly::x() }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_zero()
    }

    pub fn as_rational(&self) -> Option<QRat> {
        if self.coeffs.is_zero() {
            Some(QRat::zero())
        } else if self.coeffs.is_constant() {
            Some(self.coeffs.coeff(0))
        } else {
            None
        }
    }

    pub fn neg(&self) -> NfElem {
        NfElem {
            coeffs: -self.coeffs.clone(),
        }
    }

    pub fn add(&self, field: &NumberField, other: &NfElem) -> NfElem {
        Self::reduce(field, &(self.coeffs.clone() + other.coeffs.clone()))
    }

    pub fn sub(&self, field: &NumberField, other: &NfElem) -> NfElem {
        Self::reduce(field, &(self.coeffs.clone() - other.coeffs.clone()))
    }

    pub fn mul(&self, field: &NumberField, other: &NfElem) -> NfElem {
        Self::reduce(field, &(&self.coeffs * &other.coeffs))
    }

    /// Multiplicative inverse via the extended Euclidean algorithm against
    /// the minimal polynomial. Panics if `self` is zero.
    pub fn inv(&self, field: &NumberField) -> NfElem {
        assert!(!self.is_zero(), "NfElem::inv: division by zero");
        let (g, _, t) = extended_gcd(&field.minpoly, &self.coeffs);
        assert_eq!(
            g.degree(),
            Some(0),
            "NfElem::inv: minimal polynomial is not irreducible against this element"
        );
        let scale = g.coeff(0).recip();
        Self::reduce(field, &t.scalar_mul(&scale))
    }

    pub fn div(&self, field: &NumberField, other: &NfElem) -> NfElem {
        self.mul(field, &other.inv(field))
    }

    pub fn pow_u64(&self, field: &NumberField, mut exp: u64) -> NfElem {
        let mut result = NfElem::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(field, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(field, &base);
            }
        }
        result
    }

    /// Resultant of `self`'s minimal-polynomial annihilator against another
    /// field's defining polynomial -- an elimination primitive kept available
    /// for algebraic-number construction (see `DESIGN.md`; not exercised by
    /// the cyclotomic-only root-of-unity path `exp` currently takes).
    pub fn eliminate(a: &QRatPoly, b: &QRatPoly) -> QRat {
        poly_resultant(a, b)
    }
}

/// Extended Euclidean algorithm for `QRatPoly`: returns `(g, s, t)` with
/// `g = s*a + t*b`.
fn extended_gcd(a: &QRatPoly, b: &QRatPoly) -> (QRatPoly, QRatPoly, QRatPoly) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (QRatPoly::one(), QRatPoly::zero());
    let (mut old_t, mut t) = (QRatPoly::zero(), QRatPoly::one());

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r);
        old_r = r;
        r = rem;
        let new_s = old_s.clone() - &q * &s;
        old_s = s;
        s = new_s;
        let new_t = old_t.clone() - &q * &t;
        old_t = t;
        t = new_t;
    }
    (old_r, old_s, old_t)
}
