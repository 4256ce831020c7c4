//! Heuristic numerical enclosures, used only to separate values cheaply.
//!
//! This is deliberately *not* a certified ball-arithmetic type: it is a
//! fixed-precision `rug::Complex` snapshot. Every call site that consults an
//! `Enclosure` already falls back to [`crate::trivalent::Trivalent::Unknown`]
//! when the enclosure doesn't clearly separate two values, so a certified
//! error bound would buy nothing extra here (see `DESIGN.md`).

use crate::poly::QRatPoly;
use rug::Complex;

/// Working precision, in bits, for cached enclosures.
const ENCLOSURE_PRECISION: u32 = 128;

/// A fixed-precision complex floating-point snapshot of a `Value`.
#[derive(Clone, Debug)]
pub struct Enclosure {
    pub value: Complex,
}

impl Enclosure {
    pub fn from_parts(re: f64, im: f64) -> Self {
        Enclosure {
            value: Complex::with_val(ENCLOSURE_PRECISION, (re, im)),
        }
    }

    pub fn zero() -> Self {
        Self::from_parts(0.0, 0.0)
    }

    pub fn one() -> Self {
        Self::from_parts(1.0, 0.0)
    }

    pub fn from_rational(r: &rug::Rational) -> Self {
        Self::from_parts(r.to_f64(), 0.0)
    }

    pub fn add(&self, other: &Enclosure) -> Enclosure {
        Enclosure {
            value: Complex::with_val(ENCLOSURE_PRECISION, &self.value + &other.value),
        }
    }

    pub fn mul(&self, other: &Enclosure) -> Enclosure {
        Enclosure {
            value: Complex::with_val(ENCLOSURE_PRECISION, &self.value * &other.value),
        }
    }

    pub fn neg(&self) -> Enclosure {
        Enclosure {
            value: Complex::with_val(ENCLOSURE_PRECISION, -self.value.clone()),
        }
    }

    /// Magnitude of the difference, as an `f64`. Used for cheap separation
    /// tests; callers must still fall back to `Unknown` near zero, since this
    /// is not a certified bound.
    pub fn distance(&self, other: &Enclosure) -> f64 {
        let diff = Complex::with_val(ENCLOSURE_PRECISION, &self.value - &other.value);
        diff.abs().real().to_f64()
    }

    /// Heuristic zero test: `true` only when the magnitude is far below the
    /// working precision's noise floor. Never used as the sole authority --
    /// callers combine this with a structural check and fall back to
    /// `Unknown` otherwise.
    pub fn looks_like_zero(&self) -> bool {
        self.value.clone().abs().real().to_f64() < 1e-30
    }
}

/// A deterministic (but otherwise arbitrary) complex root of `p`, found by
/// Newton's method from a fixed seed. Used only to give property tests a
/// numeric witness for "lifting preserves value" -- which root of a
/// multi-valued algebraic relation is found does not matter, only that the
/// same `QRatPoly` always yields the same numeric witness, so two
/// representations of "the same" algebraic element agree when re-evaluated.
pub fn newton_root(p: &QRatPoly) -> Enclosure {
    let deg = p.degree().unwrap_or(0);
    if deg == 0 {
        return Enclosure::zero();
    }
    let coeffs: Vec<Complex> = (0..=deg)
        .map(|i| Complex::with_val(ENCLOSURE_PRECISION, (p.coeff(i).0.to_f64(), 0.0)))
        .collect();
    let eval = |z: &Complex| -> (Complex, Complex) {
        let mut val = coeffs[deg].clone();
        let mut deriv = Complex::new(ENCLOSURE_PRECISION);
        for c in coeffs[..deg].iter().rev() {
            deriv = deriv * z.clone() + val.clone();
            val = val * z.clone() + c.clone();
        }
        (val, deriv)
    };
    let mut z = Complex::with_val(ENCLOSURE_PRECISION, (0.4, 0.9));
    for _ in 0..80 {
        let (val, deriv) = eval(&z);
        if deriv.clone().abs().real().to_f64() < 1e-40 {
            break;
        }
        z -= val / deriv;
    }
    Enclosure { value: z }
}
