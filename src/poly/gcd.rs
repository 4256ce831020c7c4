//! Polynomial GCD (subresultant PRS) and resultant.
//!
//! `poly_gcd` uses the subresultant Polynomial Remainder Sequence (PRS) algorithm
//! to compute the GCD of two polynomials without coefficient explosion.
//! `poly_resultant` uses the Euclidean algorithm over Q[x] (exact field, no growth issues).

use super::QRatPoly;
use crate::number::QRat;

/// Raise a QRat to a u32 power via repeated squaring.
fn qrat_pow(base: &QRat, exp: u32) -> QRat {
    if exp == 0 {
        return QRat::one();
    }
    if exp == 1 {
        return base.clone();
    }
    let mut result = QRat::one();
    let mut b = base.clone();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = &result * &b;
        }
        e >>= 1;
        if e > 0 {
            b = &b * &b;
        }
    }
    result
}

/// Compute the GCD of two polynomials using the subresultant PRS algorithm.
///
/// Returns the monic GCD (leading coefficient 1). Over Q\[x\], every pair of
/// polynomials has a unique monic GCD.
///
/// The subresultant PRS prevents coefficient explosion that would make the
/// naive Euclidean algorithm unusable for degree 5-30 polynomials.
pub fn poly_gcd(a: &QRatPoly, b: &QRatPoly) -> QRatPoly {
    // Handle trivial cases
    if a.is_zero() {
        return b.make_monic();
    }
    if b.is_zero() {
        return a.make_monic();
    }
    if a.is_constant() && b.is_constant() {
        return QRatPoly::one();
    }

    // Ensure deg(f) >= deg(g)
    let (f_in, g_in) = {
        let deg_a = a.degree().unwrap();
        let deg_b = b.degree().unwrap();
        if deg_a >= deg_b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    };

    // Extract content and work with primitive parts
    let f = f_in.primitive_part();
    let g = g_in.primitive_part();

    if f.is_zero() {
        return g.make_monic();
    }
    if g.is_zero() {
        return f.make_monic();
    }

    // Subresultant PRS algorithm
    let mut f = f;
    let mut g = g;

    // Initialize psi = -1
    let mut psi = QRat::from((-1i64, 1i64));

    // First iteration is special
    let delta0 = f.degree().unwrap() - g.degree().unwrap();
    let sign0 = if (delta0 + 1) % 2 == 0 {
        QRat::one()
    } else {
        QRat::from((-1i64, 1i64))
    };

    let h = f.pseudo_rem(&g);
    if h.is_zero() {
        return g.primitive_part().make_monic();
    }

    // First beta = (-1)^(delta+1)
    let beta0 = sign0;
    let h = h.scalar_div(&beta0);

    // Update psi after first iteration
    let lc_f_neg = -(f.leading_coeff().unwrap());
    if delta0 == 1 {
        psi = lc_f_neg.clone();
    } else if delta0 > 1 {
        // psi = (-lc(f))^delta / psi^(delta-1)
        let num = qrat_pow(&lc_f_neg, delta0 as u32);
        let den = qrat_pow(&psi, (delta0 - 1) as u32);
        psi = &num / &den;
    }
    // if delta0 == 0, psi stays as -1 (but delta0 >= 0 since we ensured deg(f)>=deg(g))

    // Shift
    f = g;
    g = h;

    // Subsequent iterations
    loop {
        if g.is_zero() {
            return f.primitive_part().make_monic();
        }
        if g.is_constant() {
            // GCD is 1 (coprime)
            return QRatPoly::one();
        }

        let deg_f = f.degree().unwrap();
        let deg_g = g.degree().unwrap();

        if deg_f < deg_g {
            // Should not happen in normal PRS, but handle gracefully
            return g.primitive_part().make_monic();
        }

        let delta = deg_f - deg_g;
        let h = f.pseudo_rem(&g);

        if h.is_zero() {
            return g.primitive_part().make_monic();
        }

        let lc_f = f.leading_coeff().unwrap();
        let neg_lc_f = -(lc_f.clone());

        // beta = -lc(f) * psi^delta
        let psi_delta = qrat_pow(&psi, delta as u32);
        let beta = &neg_lc_f * &psi_delta;
        let h = h.scalar_div(&beta);

        // Update psi
        if delta == 1 {
            psi = neg_lc_f;
        } else if delta > 1 {
            let num = qrat_pow(&neg_lc_f, delta as u32);
            let den = qrat_pow(&psi, (delta - 1) as u32);
            psi = &num / &den;
        }
        // delta == 0: psi unchanged

        f = g;
        g = h;
    }
}

/// Compute the resultant of two polynomials.
///
/// The resultant is zero if and only if the two polynomials share a common root
/// (over the algebraic closure). Uses the Euclidean algorithm over Q\[x\].
pub fn poly_resultant(a: &QRatPoly, b: &QRatPoly) -> QRat {
    if a.is_zero() || b.is_zero() {
        return QRat::zero();
    }

    let m = match a.degree() {
        Some(d) => d,
        None => return QRat::zero(),
    };
    let n = match b.degree() {
        Some(d) => d,
        None => return QRat::zero(),
    };

    // Base cases: constant polynomials
    if m == 0 {
        return qrat_pow(&a.coeff(0), n as u32);
    }
    if n == 0 {
        return qrat_pow(&b.coeff(0), m as u32);
    }

    // Compute remainder via Euclidean division (over Q, no coefficient explosion)
    let (_, r) = a.div_rem(b);

    if r.is_zero() {
        // a and b share a common factor
        return QRat::zero();
    }

    let k = r.degree().unwrap();

    // res(a, b) = (-1)^(m*n) * lc(b)^(m - k) * res(b, r)
    let sign = if (m * n) % 2 == 1 {
        QRat::from((-1i64, 1i64))
    } else {
        QRat::one()
    };

    let lc_b = b.leading_coeff().unwrap();
    let lc_b_power = qrat_pow(&lc_b, (m - k) as u32);

    let sub_res = poly_resultant(b, &r);

    &(&sign * &lc_b_power) * &sub_res
}
