//! Worked scenarios for the symbolic exponential (S1-S4 of the extension
//! field engine's testable properties).
//!
//! Each test builds its input the same way a caller would -- via the
//! `Context` construction helpers and `get_field_fx` -- rather than poking
//! at private representation details.

use qsym_core::number::QRat;
use qsym_core::poly::mpoly::MPoly;
use qsym_core::poly::mratfunc::MRatFunc;
use qsym_core::poly::QRatPoly;
use qsym_core::{exp, Context, ExtHead, Field, Repr, Value};

fn rat(n: i64, d: i64) -> QRat {
    QRat::from((n, d))
}

#[test]
fn s1_exp_of_zero_is_one_in_qq() {
    let mut ctx = Context::new();
    let zero = ctx.zero();
    let result = exp(&mut ctx, &zero);
    assert_eq!(result, ctx.one());
    assert_eq!(result.field_id(), Some(ctx.qq()));
}

#[test]
fn s2_exp_of_log_two_condenses_back_to_two() {
    let mut ctx = Context::new();
    let two = ctx.rational(rat(2, 1));
    let log_fid = ctx.get_field_fx(ExtHead::Log, two.clone());
    let ring = ctx.field(log_fid).ring().copied().unwrap();
    let log_two = Value::Element(log_fid, Repr::RatFunc(MRatFunc::from_poly(MPoly::gen(&ring, 0))));

    let result = exp(&mut ctx, &log_two);
    assert_eq!(result, two);
    assert_eq!(result.field_id(), Some(ctx.qq()));
}

#[test]
fn s3_exp_of_half_log_three_is_sqrt_three() {
    let mut ctx = Context::new();
    let three = ctx.rational(rat(3, 1));
    let log_fid = ctx.get_field_fx(ExtHead::Log, three.clone());
    let ring = ctx.field(log_fid).ring().copied().unwrap();
    let log_three = Value::Element(log_fid, Repr::RatFunc(MRatFunc::from_poly(MPoly::gen(&ring, 0))));
    let half = ctx.rational(rat(1, 2));
    let x = qsym_core::arith::value_mul(&mut ctx, &half, &log_three);

    let result = exp(&mut ctx, &x);
    let fid = result.field_id().expect("sqrt(3) is a field element");
    match ctx.field(fid) {
        Field::Nf(nf) => assert_eq!(nf.minpoly, QRatPoly::from_i64_coeffs(&[-3, 0, 1])),
        other => panic!("expected an NF field, got {:?}", other),
    }
    // Squaring the result must recover 3.
    let squared = qsym_core::arith::value_mul(&mut ctx, &result, &result);
    assert_eq!(qsym_core::condense::condense(&ctx, squared), three);
}

#[test]
fn s4_exp_two_thirds_pi_i_is_a_primitive_cube_root_of_unity() {
    let mut ctx = Context::new();
    let pi_i = ctx.pi_i();
    let two_thirds = ctx.rational(rat(2, 3));
    let x = qsym_core::arith::value_mul(&mut ctx, &two_thirds, &pi_i);

    let result = exp(&mut ctx, &x);
    let fid = result.field_id().expect("root of unity is a field element");
    match ctx.field(fid) {
        // Phi_3 = y^2 + y + 1, not Phi_6 = y^2 - y + 1: exp((2/3)*pi*i) is a
        // primitive cube root of unity, and landing in the degree-2 field
        // for the *wrong* primitive order would satisfy a weaker
        // `degree() == 2` check without being the right number field.
        Field::Nf(nf) => assert_eq!(nf.minpoly, QRatPoly::from_i64_coeffs(&[1, 1, 1])),
        other => panic!("expected an NF field, got {:?}", other),
    }

    // Not 1, but its cube is.
    assert_ne!(result, ctx.one());
    let cubed = qsym_core::arith::value_pow_u64(&ctx, &result, 3);
    assert_eq!(qsym_core::condense::condense(&ctx, cubed), ctx.one());
}

#[test]
fn s1_exp_of_positive_and_negative_infinity() {
    let mut ctx = Context::new();
    let pos = ctx.pos_inf();
    let neg = ctx.neg_inf();
    assert_eq!(exp(&mut ctx, &pos), ctx.pos_inf());
    assert_eq!(exp(&mut ctx, &neg), ctx.zero());
}

#[test]
fn exp_of_undefined_and_unsigned_infinity_is_undefined() {
    let mut ctx = Context::new();
    let undef = ctx.undefined();
    let uinf = ctx.uinf();
    assert_eq!(exp(&mut ctx, &undef), ctx.undefined());
    assert_eq!(exp(&mut ctx, &uinf), ctx.undefined());
}
