//! Sparse multivariate polynomials over `QRat`, the multi-generator
//! analogue of [`super::QRatPoly`].
//!
//! A `FUNC` field is exactly a `PolyRing` with one variable; a `MULTI` field
//! is a `PolyRing` with `k` variables, one per generator, in the order fixed
//! by the field's sorted generator list. Terms are kept in a canonical
//! sorted, duplicate-free, zero-stripped form so that structural equality is
//! mathematical equality, the same discipline `QRatPoly` uses.

use crate::number::QRat;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Exponent vector, one entry per ring variable.
pub type Exponents = SmallVec<[u32; 4]>;

/// The ring `Q[x_0, ..., x_{nvars-1}]` a `FUNC`/`MULTI` field's elements live
/// in. Owned by the `Field`, not by individual representations -- a `Value`
/// only ever needs to know its own field's variable count to interpret its
/// `MPoly`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolyRing {
    pub nvars: usize,
}

impl PolyRing {
    pub fn new(nvars: usize) -> Self {
        assert!(nvars >= 1, "PolyRing::new: need at least one variable");
        PolyRing { nvars }
    }
}

fn cmp_exponents(a: &Exponents, b: &Exponents) -> Ordering {
    a.iter().cmp(b.iter())
}

/// A multivariate polynomial: a sorted, deduplicated, zero-stripped list of
/// (exponent vector, coefficient) terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MPoly {
    nvars: usize,
    terms: Vec<(Exponents, QRat)>,
}

impl MPoly {
    fn normalize(mut terms: Vec<(Exponents, QRat)>) -> Vec<(Exponents, QRat)> {
        terms.sort_by(|a, b| cmp_exponents(&a.0, &b.0));
        let mut merged: Vec<(Exponents, QRat)> = Vec::with_capacity(terms.len());
        for (exp, coeff) in terms {
            if let Some(last) = merged.last_mut() {
                if last.0 == exp {
                    last.1 = &last.1 + &coeff;
                    continue;
                }
            }
            merged.push((exp, coeff));
        }
        merged.retain(|(_, c)| !c.is_zero());
        merged
    }

    pub fn zero(ring: &PolyRing) -> Self {
        MPoly {
            nvars: ring.nvars,
            terms: Vec::new(),
        }
    }

    pub fn one(ring: &PolyRing) -> Self {
        Self::constant(ring, QRat::one())
    }

    pub fn constant(ring: &PolyRing, c: QRat) -> Self {
        let terms: Vec<(Exponents, QRat)> = if c.is_zero() {
            Vec::new()
        } else {
            let exp: Exponents = SmallVec::from_elem(0, ring.nvars);
            vec![(exp, c)]
        };
        MPoly {
            nvars: ring.nvars,
            terms,
        }
    }

    /// The generator variable `x_i`.
    pub fn gen(ring: &PolyRing, i: usize) -> Self {
        assert!(i < ring.nvars, "MPoly::gen: variable index out of range");
        let mut exp: Exponents = SmallVec::from_elem(0, ring.nvars);
        exp[i] = 1;
        MPoly {
            nvars: ring.nvars,
            terms: vec![(exp, QRat::one())],
        }
    }

    pub fn from_terms(ring: &PolyRing, terms: Vec<(Exponents, QRat)>) -> Self {
        for (exp, _) in &terms {
            assert_eq!(exp.len(), ring.nvars, "MPoly::from_terms: arity mismatch");
        }
        MPoly {
            nvars: ring.nvars,
            terms: Self::normalize(terms),
        }
    }

    pub fn nvars(&self) -> usize {
        self.nvars
    }

    pub fn terms(&self) -> &[(Exponents, QRat)] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty() || (self.terms.len() == 1 && self.terms[0].0.iter().all(|&e| e == 0))
    }

    pub fn as_constant(&self) -> Option<QRat> {
        if self.terms.is_empty() {
            Some(QRat::zero())
        } else if self.terms.len() == 1 && self.terms[0].0.iter().all(|&e| e == 0) {
            Some(self.terms[0].1.clone())
        } else {
            None
        }
    }

    /// `true` iff this polynomial is exactly the bare variable `x_i` (the
    /// spec's `is_gen`).
    pub fn is_gen(&self, i: usize) -> bool {
        if self.terms.len() != 1 {
            return false;
        }
        let (exp, coeff) = &self.terms[0];
        if !coeff.is_one() {
            return false;
        }
        exp.iter()
            .enumerate()
            .all(|(j, &e)| if j == i { e == 1 } else { e == 0 })
    }

    /// If this polynomial is `c * x_i` for a single generator `i` and
    /// rational `c`, return `(c, i)`.
    pub fn as_scalar_times_gen(&self) -> Option<(QRat, usize)> {
        if self.terms.len() != 1 {
            return None;
        }
        let (exp, coeff) = &self.terms[0];
        let total_degree: u32 = exp.iter().sum();
        if total_degree != 1 {
            return None;
        }
        let i = exp.iter().position(|&e| e == 1)?;
        Some((coeff.clone(), i))
    }

    pub fn neg(&self) -> MPoly {
        MPoly {
            nvars: self.nvars,
            terms: self.terms.iter().map(|(e, c)| (e.clone(), -c.clone())).collect(),
        }
    }

    pub fn add(&self, other: &MPoly) -> MPoly {
        assert_eq!(self.nvars, other.nvars, "MPoly::add: ring mismatch");
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        MPoly {
            nvars: self.nvars,
            terms: Self::normalize(terms),
        }
    }

    pub fn sub(&self, other: &MPoly) -> MPoly {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &MPoly) -> MPoly {
        assert_eq!(self.nvars, other.nvars, "MPoly::mul: ring mismatch");
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for (ea, ca) in &self.terms {
            for (eb, cb) in &other.terms {
                let exp: Exponents = ea.iter().zip(eb.iter()).map(|(x, y)| x + y).collect();
                terms.push((exp, ca * cb));
            }
        }
        MPoly {
            nvars: self.nvars,
            terms: Self::normalize(terms),
        }
    }

    pub fn scalar_mul(&self, c: &QRat) -> MPoly {
        if c.is_zero() {
            return MPoly {
                nvars: self.nvars,
                terms: Vec::new(),
            };
        }
        MPoly {
            nvars: self.nvars,
            terms: self.terms.iter().map(|(e, x)| (e.clone(), x * c)).collect(),
        }
    }

    pub fn scalar_div(&self, c: &QRat) -> MPoly {
        assert!(!c.is_zero(), "MPoly::scalar_div: division by zero");
        MPoly {
            nvars: self.nvars,
            terms: self.terms.iter().map(|(e, x)| (e.clone(), x / c)).collect(),
        }
    }

    /// Content: gcd/lcm-style rational content, generalising
    /// `QRatPoly::content`. Returns zero for the zero polynomial.
    pub fn content(&self) -> QRat {
        if self.terms.is_empty() {
            return QRat::zero();
        }
        let mut numer_gcd = rug::Integer::from(0);
        let mut denom_lcm = rug::Integer::from(1);
        for (_, c) in &self.terms {
            let n = c.numer().clone().abs();
            let d = c.denom().clone();
            numer_gcd = numer_gcd.gcd(&n);
            denom_lcm = denom_lcm.lcm(&d);
        }
        QRat(rug::Rational::from((numer_gcd, denom_lcm)))
    }

    pub fn primitive_part(&self) -> MPoly {
        let cont = self.content();
        if cont.is_zero() {
            return self.clone();
        }
        self.scalar_div(&cont)
    }

    /// Rename variables according to `mapping` (`mapping[i]` is the target
    /// index of this polynomial's variable `i`) and re-embed into a ring of
    /// `target_nvars` variables. Used by merge's lift step.
    pub fn compose_rename(&self, mapping: &[usize], target_nvars: usize) -> MPoly {
        assert_eq!(mapping.len(), self.nvars, "compose_rename: mapping arity mismatch");
        let terms = self
            .terms
            .iter()
            .map(|(exp, c)| {
                let mut new_exp: Exponents = SmallVec::from_elem(0, target_nvars);
                for (i, &e) in exp.iter().enumerate() {
                    new_exp[mapping[i]] = e;
                }
                (new_exp, c.clone())
            })
            .collect();
        MPoly {
            nvars: target_nvars,
            terms,
        }
    }
}

/// Lexicographic comparison between two polynomials over the same ring,
/// term by term in canonical (sorted) order. Used by the field total order
/// to compare `FUNC`/`MULTI` representations deterministically.
pub fn cmp_mpoly(a: &MPoly, b: &MPoly) -> Ordering {
    a.terms
        .len()
        .cmp(&b.terms.len())
        .then_with(|| {
            for ((ea, ca), (eb, cb)) in a.terms.iter().zip(b.terms.iter()) {
                let c = cmp_exponents(ea, eb).then_with(|| ca.cmp(cb));
                if c != Ordering::Equal {
                    return c;
                }
            }
            Ordering::Equal
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen_is_recognised() {
        let ring = PolyRing::new(2);
        let x0 = MPoly::gen(&ring, 0);
        assert!(x0.is_gen(0));
        assert!(!x0.is_gen(1));
    }

    #[test]
    fn addition_cancels() {
        let ring = PolyRing::new(1);
        let x = MPoly::gen(&ring, 0);
        let neg_x = x.neg();
        assert!(x.add(&neg_x).is_zero());
    }

    #[test]
    fn multiplication_distributes_over_addition() {
        let ring = PolyRing::new(2);
        let x = MPoly::gen(&ring, 0);
        let y = MPoly::gen(&ring, 1);
        let one = MPoly::one(&ring);
        let lhs = x.mul(&y.add(&one));
        let rhs = x.mul(&y).add(&x.mul(&one));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn as_constant_recognises_scalars() {
        let ring = PolyRing::new(3);
        let c = MPoly::constant(&ring, QRat::from((5i64, 2i64)));
        assert_eq!(c.as_constant(), Some(QRat::from((5i64, 2i64))));
        let x = MPoly::gen(&ring, 0);
        assert_eq!(x.as_constant(), None);
    }

    #[test]
    fn compose_rename_relabels_variables() {
        let ring = PolyRing::new(2);
        let x0 = MPoly::gen(&ring, 0);
        let renamed = x0.compose_rename(&[1, 0], 3);
        assert!(renamed.is_gen(1));
    }

    #[test]
    fn as_scalar_times_gen_detects_pattern() {
        let ring = PolyRing::new(2);
        let term = MPoly::gen(&ring, 1).scalar_mul(&QRat::from((3i64, 5i64)));
        assert_eq!(term.as_scalar_times_gen(), Some((QRat::from((3i64, 5i64)), 1)));
        let sum = MPoly::gen(&ring, 0).add(&MPoly::gen(&ring, 1));
        assert_eq!(sum.as_scalar_times_gen(), None);
    }
}
