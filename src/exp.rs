//! `exp`: the symbolic-simplification decision cascade for the exponential.
//!
//! Direct translation of the original `ca_exp`'s case order (see
//! `examples/original_source/ca/exp.c`): special-value propagation, then
//! `exp(log(z)) = z`, then `exp((p/q) log(z)) = z^(p/q)` via `pow_fmpq`, then
//! `exp(0) = 1`, then the `exp(pi*i*p/q)` root-of-unity shortcut bounded by
//! `q <= 12`, and only then the generic fallback of a fresh `Exp(x)`
//! generator.

use crate::arith::{value_pow_i64, value_pow_u64};
use crate::context::Context;
use crate::ext::ExtHead;
use crate::field::Field;
use crate::number::QRat;
use crate::numfield::{NfElem, NumberField};
use crate::poly::cyclotomic::cyclotomic_poly;
use crate::poly::mpoly::MPoly;
use crate::poly::mratfunc::MRatFunc;
use crate::poly::QRatPoly;
use crate::value::{as_fmpq_pi_i, is_fmpq_times_gen_as_ext, is_gen_as_ext, is_zero, Repr, SpecialKind, Value};

/// Above this denominator, materialising the root of unity as an explicit
/// algebraic extension would build a field larger than this engine wants to
/// carry implicitly; `exp` instead falls back to the generic `Exp(x)`
/// generator. Matches the original `ca_exp`'s policy bound.
const POLICY_MAX_Q: u32 = 12;

pub fn exp(ctx: &mut Context, x: &Value) -> Value {
    match x {
        Value::Special(SpecialKind::PosInf) => return ctx.pos_inf(),
        Value::Special(SpecialKind::NegInf) => return ctx.zero(),
        Value::Special(SpecialKind::UnsignedInf) | Value::Special(SpecialKind::Undefined) => {
            return ctx.undefined();
        }
        Value::Special(SpecialKind::Unknown) => return ctx.unknown(),
        Value::Element(..) => {}
    }

    if is_zero(x).is_true() {
        return ctx.one();
    }

    if let Some(ext_id) = is_gen_as_ext(ctx, x) {
        if ctx.ext(ext_id).head == ExtHead::Log {
            return ctx.ext(ext_id).args[0].clone();
        }
    }

    if let Some((c, ext_id)) = is_fmpq_times_gen_as_ext(ctx, x) {
        if ctx.ext(ext_id).head == ExtHead::Log {
            let z = ctx.ext(ext_id).args[0].clone();
            return pow_fmpq(ctx, &z, &c);
        }
    }

    if let Some(r) = as_fmpq_pi_i(ctx, x) {
        let p = r.numer().to_i64().expect("exp: pi*i coefficient numerator out of range");
        let q = r.denom().to_u32().expect("exp: pi*i coefficient denominator out of range");
        if q <= POLICY_MAX_Q {
            return root_of_unity(ctx, p, q);
        }
    }

    fallback_exp(ctx, x)
}

fn root_of_unity(ctx: &mut Context, p: i64, q: u32) -> Value {
    if q == 1 {
        return if p.rem_euclid(2) == 0 {
            ctx.one()
        } else {
            ctx.rational(QRat::from((-1i64, 1i64)))
        };
    }
    if q == 2 {
        let i = ctx.i();
        let k = p.rem_euclid(4) as u64;
        return value_pow_u64(ctx, &i, k);
    }
    // `exp(p/q * pi*i)` is `zeta^k` for `zeta = exp(pi*i/q)` a primitive
    // `2q`-th root of unity and `k = p mod 2q`. `zeta^k` is itself a
    // primitive `n`-th root of unity with `n = 2q / gcd(k, 2q)`, so its true
    // minimal polynomial is `Phi_n`, not `Phi_2q` -- build the field at that
    // order directly rather than building `NF(Phi_2q)` and leaving the power
    // unreduced inside it. This is the same correction `qqbar_pow_ui` makes
    // via resultants after any algebraic power; here the reduction is just
    // picking the right divisor of `2q` up front, since the power in
    // question is always a root of unity.
    let two_q = 2 * q as u64;
    let k = p.rem_euclid(two_q as i64) as u64;
    let g = gcd_u64(k, two_q);
    let n = two_q / g;
    let m = k / g;
    if n <= 2 {
        return if n == 1 {
            ctx.one()
        } else {
            ctx.rational(QRat::from((-1i64, 1i64)))
        };
    }
    let field = NumberField::new(cyclotomic_poly(n as usize));
    let elem = NfElem::generator().pow_u64(&field, m);
    let fid = ctx.intern_nf(field);
    Value::Element(fid, Repr::NumField(elem))
}

/// Euclidean GCD on `u64`. `q` is policy-bounded to `POLICY_MAX_Q`, so the
/// arguments here never exceed `2 * POLICY_MAX_Q`.
fn gcd_u64(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd_u64(b, a % b)
    }
}

fn fallback_exp(ctx: &mut Context, x: &Value) -> Value {
    let fid = ctx.get_field_fx(ExtHead::Exp, x.clone());
    let ring = ctx.field(fid).ring().copied().expect("fallback_exp: FUNC field has a ring");
    let v = Value::Element(fid, Repr::RatFunc(MRatFunc::from_poly(MPoly::gen(&ring, 0))));
    crate::condense::condense(ctx, crate::ideal::reduce_ideal(ctx, v))
}

/// `a^c` for a rational exponent `c = p/q` in lowest terms: an integer power
/// followed (if `q != 1`) by a `q`-th root.
pub fn pow_fmpq(ctx: &mut Context, a: &Value, c: &QRat) -> Value {
    let p = c.numer().to_i64().expect("pow_fmpq: exponent numerator out of range");
    let q = c.denom().to_u32().expect("pow_fmpq: exponent denominator out of range");
    let base = value_pow_i64(ctx, a, p);
    if q == 1 {
        base
    } else {
        nth_root(ctx, &base, q)
    }
}

/// `q`-th root of `base`: exact when `base` is a rational or algebraic
/// perfect power, otherwise a fresh `NthRoot(q)` generator.
fn nth_root(ctx: &mut Context, base: &Value, q: u32) -> Value {
    match base {
        Value::Special(_) => ctx.undefined(),
        Value::Element(_, Repr::Rational(r)) => match r.exact_root(q) {
            Some(root) => ctx.rational(root),
            None => {
                let field = NumberField::radical(q, r.clone());
                let fid = ctx.intern_nf(field);
                Value::Element(fid, Repr::NumField(NfElem::generator()))
            }
        },
        Value::Element(fid, Repr::NumField(elem)) => {
            if let Field::Nf(nf) = ctx.field(*fid).clone() {
                if elem.coeffs == QRatPoly::x() {
                    let new_field = nf.radical_of(q);
                    let new_fid = ctx.intern_nf(new_field);
                    return Value::Element(new_fid, Repr::NumField(NfElem::generator()));
                }
            }
            generic_nth_root(ctx, base, q)
        }
        Value::Element(_, Repr::RatFunc(_)) => generic_nth_root(ctx, base, q),
    }
}

fn generic_nth_root(ctx: &mut Context, base: &Value, q: u32) -> Value {
    let fid = ctx.get_field_fx(ExtHead::NthRoot(q), base.clone());
    let ring = ctx.field(fid).ring().copied().expect("generic_nth_root: FUNC field has a ring");
    Value::Element(fid, Repr::RatFunc(MRatFunc::from_poly(MPoly::gen(&ring, 0))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_of_zero_is_one() {
        let mut ctx = Context::new();
        let zero = ctx.zero();
        assert_eq!(exp(&mut ctx, &zero), ctx.one());
    }

    #[test]
    fn exp_of_log_z_is_z() {
        let mut ctx = Context::new();
        let z = ctx.rational(QRat::from((5i64, 1i64)));
        let log_fid = ctx.get_field_fx(ExtHead::Log, z.clone());
        let ring = ctx.field(log_fid).ring().copied().unwrap();
        let log_z = Value::Element(log_fid, Repr::RatFunc(MRatFunc::from_poly(MPoly::gen(&ring, 0))));
        assert_eq!(exp(&mut ctx, &log_z), z);
    }

    #[test]
    fn exp_pi_i_is_minus_one() {
        let mut ctx = Context::new();
        let pi_i = ctx.pi_i();
        let result = exp(&mut ctx, &pi_i);
        assert_eq!(result, ctx.rational(QRat::from((-1i64, 1i64))));
    }

    #[test]
    fn exp_half_pi_i_is_i() {
        let mut ctx = Context::new();
        let pi_i = ctx.pi_i();
        let half = ctx.rational(QRat::from((1i64, 2i64)));
        let half_pi_i = crate::arith::value_mul(&mut ctx, &half, &pi_i);
        let result = exp(&mut ctx, &half_pi_i);
        assert_eq!(result, ctx.i());
    }

    #[test]
    fn exp_of_positive_infinity_is_positive_infinity() {
        let mut ctx = Context::new();
        let inf = ctx.pos_inf();
        assert_eq!(exp(&mut ctx, &inf), ctx.pos_inf());
    }

    #[test]
    fn exp_fallback_builds_func_field() {
        let mut ctx = Context::new();
        let x = ctx.rational(QRat::from((3i64, 1i64)));
        let result = exp(&mut ctx, &x);
        assert!(matches!(ctx.field(result.field_id().unwrap()), Field::Func(_)));
    }
}
