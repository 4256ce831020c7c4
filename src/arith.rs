//! Field-element arithmetic on `Value`: dispatches on same-field,
//! QQ-embedding, and differing-field (merge-then-operate) cases.
//!
//! Grounded on the original `ca_add`/`ca_mul`/`ca_div` dispatch shape (see
//! `examples/original_source/ca/merge_fields.c`'s callers): same field is a
//! direct ring operation, a `QQ` operand embeds into the other side's field
//! as a constant (Open Question (a)), and two different non-`QQ` fields go
//! through `crate::merge::merge_fields` first so both operands land in a
//! common field before the ring operation runs.

use crate::context::Context;
use crate::field::{Field, FieldId};
use crate::merge::merge_fields;
use crate::number::QRat;
use crate::numfield::NfElem;
use crate::poly::mpoly::MPoly;
use crate::poly::mratfunc::MRatFunc;
use crate::value::{Repr, SpecialKind, Value};

/// The Special result of combining `x` and `y` when at least one is Special,
/// per the universal "Unknown propagates to Unknown, else Undefined" rule.
fn special_result(ctx: &Context, x: &Value, y: &Value) -> Value {
    if matches!(x, Value::Special(SpecialKind::Unknown))
        || matches!(y, Value::Special(SpecialKind::Unknown))
    {
        ctx.unknown()
    } else {
        ctx.undefined()
    }
}

/// Embeds a `QQ` rational as a constant of `field`, for the QQ-fast-path.
fn embed_constant(ctx: &Context, field: FieldId, r: &QRat) -> Repr {
    match ctx.field(field) {
        Field::Qq => Repr::Rational(r.clone()),
        Field::Nf(_) => Repr::NumField(NfElem::from_rational(r.clone())),
        Field::Func(f) => Repr::RatFunc(MRatFunc::constant(&f.ring, r.clone())),
        Field::Multi(f) => Repr::RatFunc(MRatFunc::constant(&f.ring, r.clone())),
    }
}

/// Brings `x` and `y` to a common field, returning `(field, repr_x, repr_y)`.
/// Panics on `Special` inputs -- callers (e.g. `exp`) are expected to handle
/// special-value propagation before reaching here.
fn common_field(ctx: &mut Context, x: &Value, y: &Value) -> (FieldId, Repr, Repr) {
    let (fx, rx) = match x {
        Value::Element(f, r) => (*f, r.clone()),
        Value::Special(_) => panic!("arith: special values must be handled before common_field"),
    };
    let (fy, ry) = match y {
        Value::Element(f, r) => (*f, r.clone()),
        Value::Special(_) => panic!("arith: special values must be handled before common_field"),
    };
    if fx == fy {
        return (fx, rx, ry);
    }
    if ctx.field(fx).is_qq() {
        return (fy, embed_constant(ctx, fy, rx.as_rational_unchecked()), ry);
    }
    if ctx.field(fy).is_qq() {
        return (fx, rx, embed_constant(ctx, fx, ry.as_rational_unchecked()));
    }
    let (lx, ly) = merge_fields(ctx, x, y);
    match (lx, ly) {
        (Value::Element(f, rx), Value::Element(_, ry)) => (f, rx, ry),
        _ => unreachable!("merge_fields never returns a Special for Element inputs"),
    }
}

impl Repr {
    /// Extracts the rational out of a `QQ`-field representation. Only valid
    /// when the caller already knows this `Repr` belongs to `QQ`.
    fn as_rational_unchecked(&self) -> &QRat {
        match self {
            Repr::Rational(r) => r,
            _ => panic!("as_rational_unchecked: not a QQ representation"),
        }
    }
}

fn ring_add(ctx: &Context, field: FieldId, a: &Repr, b: &Repr) -> Repr {
    match (ctx.field(field), a, b) {
        (Field::Qq, Repr::Rational(x), Repr::Rational(y)) => Repr::Rational(x + y),
        (Field::Nf(f), Repr::NumField(x), Repr::NumField(y)) => Repr::NumField(x.add(f, y)),
        (Field::Func(f), Repr::RatFunc(x), Repr::RatFunc(y)) => Repr::RatFunc(x.add(&f.ring, y)),
        (Field::Multi(f), Repr::RatFunc(x), Repr::RatFunc(y)) => Repr::RatFunc(x.add(&f.ring, y)),
        _ => unreachable!("ring_add: representation kind must match field"),
    }
}

fn ring_mul(ctx: &Context, field: FieldId, a: &Repr, b: &Repr) -> Repr {
    match (ctx.field(field), a, b) {
        (Field::Qq, Repr::Rational(x), Repr::Rational(y)) => Repr::Rational(x * y),
        (Field::Nf(f), Repr::NumField(x), Repr::NumField(y)) => Repr::NumField(x.mul(f, y)),
        (Field::Func(f), Repr::RatFunc(x), Repr::RatFunc(y)) => Repr::RatFunc(x.mul(&f.ring, y)),
        (Field::Multi(f), Repr::RatFunc(x), Repr::RatFunc(y)) => Repr::RatFunc(x.mul(&f.ring, y)),
        _ => unreachable!("ring_mul: representation kind must match field"),
    }
}

fn ring_neg(repr: &Repr) -> Repr {
    match repr {
        Repr::Rational(x) => Repr::Rational(-x.clone()),
        Repr::NumField(x) => Repr::NumField(x.neg()),
        Repr::RatFunc(x) => Repr::RatFunc(x.neg()),
    }
}

fn ring_inv(ctx: &Context, field: FieldId, a: &Repr) -> Repr {
    match (ctx.field(field), a) {
        (Field::Qq, Repr::Rational(x)) => Repr::Rational(x.recip()),
        (Field::Nf(f), Repr::NumField(x)) => Repr::NumField(x.inv(f)),
        (Field::Func(f), Repr::RatFunc(x)) => Repr::RatFunc(x.inv(&f.ring)),
        (Field::Multi(f), Repr::RatFunc(x)) => Repr::RatFunc(x.inv(&f.ring)),
        _ => unreachable!("ring_inv: representation kind must match field"),
    }
}

pub fn value_neg(ctx: &Context, x: &Value) -> Value {
    match x {
        Value::Special(SpecialKind::PosInf) => ctx.neg_inf(),
        Value::Special(SpecialKind::NegInf) => ctx.pos_inf(),
        Value::Special(_) => x.clone(),
        Value::Element(fid, repr) => Value::Element(*fid, ring_neg(repr)),
    }
}

pub fn value_add(ctx: &mut Context, x: &Value, y: &Value) -> Value {
    if x.is_special() || y.is_special() {
        return special_result(ctx, x, y);
    }
    let (field, rx, ry) = common_field(ctx, x, y);
    Value::Element(field, ring_add(ctx, field, &rx, &ry))
}

pub fn value_sub(ctx: &mut Context, x: &Value, y: &Value) -> Value {
    value_add(ctx, x, &value_neg(ctx, y))
}

pub fn value_mul(ctx: &mut Context, x: &Value, y: &Value) -> Value {
    if x.is_special() || y.is_special() {
        return special_result(ctx, x, y);
    }
    let (field, rx, ry) = common_field(ctx, x, y);
    Value::Element(field, ring_mul(ctx, field, &rx, &ry))
}

pub fn value_inv(ctx: &mut Context, x: &Value) -> Value {
    match x {
        Value::Special(SpecialKind::Unknown) => ctx.unknown(),
        Value::Special(_) => ctx.undefined(),
        Value::Element(fid, repr) => {
            let is_zero = match repr {
                Repr::Rational(r) => r.is_zero(),
                Repr::NumField(e) => e.is_zero(),
                Repr::RatFunc(rf) => rf.is_zero(),
            };
            if is_zero {
                return ctx.uinf();
            }
            Value::Element(*fid, ring_inv(ctx, *fid, repr))
        }
    }
}

pub fn value_div(ctx: &mut Context, x: &Value, y: &Value) -> Value {
    value_mul(ctx, x, &value_inv(ctx, y))
}

/// `x^n` for a non-negative integer `n`, by repeated squaring in `x`'s own
/// field (no field change).
pub fn value_pow_u64(ctx: &Context, x: &Value, mut n: u64) -> Value {
    match x {
        Value::Special(_) => x.clone(),
        Value::Element(fid, repr) => {
            if n == 0 {
                return Value::Element(ctx.qq(), Repr::Rational(QRat::one()));
            }
            let mut result = repr.clone();
            let mut base = repr.clone();
            n -= 1;
            while n > 0 {
                if n & 1 == 1 {
                    result = ring_mul(ctx, *fid, &result, &base);
                }
                n >>= 1;
                if n > 0 {
                    base = ring_mul(ctx, *fid, &base, &base);
                }
            }
            Value::Element(*fid, result)
        }
    }
}

pub fn value_pow_i64(ctx: &mut Context, x: &Value, n: i64) -> Value {
    if n >= 0 {
        value_pow_u64(ctx, x, n as u64)
    } else {
        value_inv(ctx, &value_pow_u64(ctx, x, (-n) as u64))
    }
}

/// Constructs `c * g` inside `field`, where `g` is the bare `i`-th generator
/// of `field`'s ring (a `FUNC`/`MULTI` field). Used by `crate::exp`'s
/// rational-power-of-a-generator case.
pub fn scalar_times_gen(ctx: &Context, field: FieldId, c: &QRat, i: usize) -> Value {
    let ring = ctx
        .field(field)
        .ring()
        .expect("scalar_times_gen: field must have a ring");
    let poly = MPoly::gen(ring, i).scalar_mul(c);
    Value::Element(field, Repr::RatFunc(MRatFunc::from_poly(poly)))
}
