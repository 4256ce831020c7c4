//! Cyclotomic polynomial computation.
//!
//! Provides `cyclotomic_poly(n)` which computes the n-th cyclotomic polynomial
//! Phi_n(x) via recursive division: start with x^n - 1, then divide by Phi_d(x)
//! for every proper divisor d of n.

use super::QRatPoly;

/// Compute all divisors of `n` in ascending order.
fn divisors(n: usize) -> Vec<usize> {
    if n == 0 {
        return vec![];
    }
    let mut divs = Vec::new();
    let mut i = 1;
    while i * i <= n {
        if n % i == 0 {
            divs.push(i);
            if i != n / i {
                divs.push(n / i);
            }
        }
        i += 1;
    }
    divs.sort();
    divs
}

/// Construct the polynomial x^n - 1.
fn x_n_minus_1(n: usize) -> QRatPoly {
    let mut coeffs = vec![0i64; n + 1];
    coeffs[0] = -1;
    coeffs[n] = 1;
    QRatPoly::from_i64_coeffs(&coeffs)
}

/// Compute the n-th cyclotomic polynomial Phi_n(x).
///
/// Uses recursive division: Phi_n(x) = (x^n - 1) / prod_{d | n, d < n} Phi_d(x).
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn cyclotomic_poly(n: usize) -> QRatPoly {
    assert!(n > 0, "cyclotomic_poly: n must be positive");

    // Base case: Phi_1(x) = x - 1
    if n == 1 {
        return QRatPoly::from_i64_coeffs(&[-1, 1]);
    }

    let mut result = x_n_minus_1(n);

    // Divide by Phi_d(x) for each proper divisor d of n
    let divs = divisors(n);
    for &d in &divs {
        if d == n {
            continue; // skip n itself
        }
        let phi_d = cyclotomic_poly(d);
        result = result.exact_div(&phi_d);
    }

    result
}
