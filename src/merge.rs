//! `merge_fields`: the shared-field construction two non-`QQ` operands need
//! before a binary operation can run.
//!
//! Direct translation of the original `ca_merge_fields`'s flatten/sort/lift
//! shape (see `examples/original_source/ca/merge_fields.c`): each operand's
//! field is flattened to its ordered list of single-generator fields (a
//! singleton for `NF`/`FUNC`, the existing list for `MULTI`), the two lists
//! are merged in lockstep by [`crate::context::Context::field_order`]
//! (deduplicating shared generators), and each operand's representation is
//! then lifted (re-expressed) into the resulting `MULTI` field's ring.

use crate::context::Context;
use crate::field::{Field, FieldId};
use crate::poly::mpoly::{Exponents, MPoly, PolyRing};
use crate::poly::mratfunc::MRatFunc;
use crate::value::{Repr, Value};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// The ordered list of single-generator fields a field is built from: empty
/// for `QQ`, a singleton for `NF`/`FUNC`, the stored list for `MULTI`.
fn generator_list(ctx: &Context, fid: FieldId) -> Vec<FieldId> {
    match ctx.field(fid) {
        Field::Qq => Vec::new(),
        Field::Nf(_) | Field::Func(_) => vec![fid],
        Field::Multi(m) => m.gens.clone(),
    }
}

fn position_of(gens: &[FieldId], fid: FieldId) -> usize {
    gens.iter()
        .position(|&g| g == fid)
        .expect("merge_fields: generator missing from its own merged list")
}

/// Re-expresses `repr` (an element of `src_field`) as an element of
/// `new_field`'s ring, whose variables are `merged` in order.
fn lift(ctx: &Context, src_field: FieldId, repr: &Repr, new_ring: &PolyRing, merged: &[FieldId]) -> Repr {
    match (ctx.field(src_field), repr) {
        (Field::Nf(nf), Repr::NumField(elem)) => {
            let pos = position_of(merged, src_field);
            let mut terms: Vec<(Exponents, crate::number::QRat)> = Vec::new();
            for d in 0..nf.degree() {
                let c = elem.coeffs.coeff(d);
                if !c.is_zero() {
                    let mut exp: Exponents = SmallVec::from_elem(0, new_ring.nvars);
                    exp[pos] = d as u32;
                    terms.push((exp, c));
                }
            }
            Repr::RatFunc(MRatFunc::from_poly(MPoly::from_terms(new_ring, terms)))
        }
        (Field::Func(_), Repr::RatFunc(rf)) => Repr::RatFunc(rf.compose_rename(&[position_of(merged, src_field)], new_ring.nvars)),
        (Field::Multi(m), Repr::RatFunc(rf)) => {
            let mapping: Vec<usize> = m.gens.iter().map(|&g| position_of(merged, g)).collect();
            Repr::RatFunc(rf.compose_rename(&mapping, new_ring.nvars))
        }
        _ => unreachable!("lift: representation kind must match its own field"),
    }
}

/// Brings two field elements, neither `QQ` nor `Special`, into a common
/// (generally `MULTI`) field, each lifted to match.
///
/// Panics on `Special` or `QQ` inputs -- callers (`crate::arith`) handle
/// special-value propagation and the `QQ`-embedding fast path before
/// reaching here; merge only ever needs to run when both sides genuinely
/// carry their own generators.
pub fn merge_fields(ctx: &mut Context, x: &Value, y: &Value) -> (Value, Value) {
    let (fx, rx) = match x {
        Value::Element(f, r) => (*f, r.clone()),
        Value::Special(_) => panic!("merge_fields: operands must not be special"),
    };
    let (fy, ry) = match y {
        Value::Element(f, r) => (*f, r.clone()),
        Value::Special(_) => panic!("merge_fields: operands must not be special"),
    };
    assert!(
        !ctx.field(fx).is_qq() && !ctx.field(fy).is_qq(),
        "merge_fields: QQ operands should take the embedding fast path instead"
    );

    if fx == fy {
        return (x.clone(), y.clone());
    }

    let gens_x = generator_list(ctx, fx);
    let gens_y = generator_list(ctx, fy);
    let mut merged: Vec<FieldId> = Vec::with_capacity(gens_x.len() + gens_y.len());
    let (mut i, mut j) = (0, 0);
    while i < gens_x.len() && j < gens_y.len() {
        match ctx.field_order(gens_x[i], gens_y[j]) {
            Ordering::Less => {
                merged.push(gens_x[i]);
                i += 1;
            }
            Ordering::Greater => {
                merged.push(gens_y[j]);
                j += 1;
            }
            Ordering::Equal => {
                merged.push(gens_x[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&gens_x[i..]);
    merged.extend_from_slice(&gens_y[j..]);

    let new_field = ctx.intern_multi(merged.clone());
    let new_ring = ctx.field(new_field).ring().copied().expect("merge result is always FUNC/MULTI");

    let lifted_x = lift(ctx, fx, &rx, &new_ring, &merged);
    let lifted_y = lift(ctx, fy, &ry, &new_ring, &merged);
    (Value::Element(new_field, lifted_x), Value::Element(new_field, lifted_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::ExtHead;
    use crate::number::QRat;
    use crate::numfield::NumberField;

    #[test]
    fn merging_two_distinct_nf_generators_builds_multi() {
        let mut ctx = Context::new();
        let sqrt2 = ctx.intern_nf(NumberField::radical(2, QRat::from((2i64, 1i64))));
        let sqrt3 = ctx.intern_nf(NumberField::radical(2, QRat::from((3i64, 1i64))));
        let x = Value::Element(sqrt2, Repr::NumField(crate::numfield::NfElem::generator()));
        let y = Value::Element(sqrt3, Repr::NumField(crate::numfield::NfElem::generator()));
        let (lx, ly) = merge_fields(&mut ctx, &x, &y);
        assert_eq!(lx.field_id(), ly.field_id());
        let fid = lx.field_id().unwrap();
        assert!(matches!(ctx.field(fid), Field::Multi(_)));
    }

    #[test]
    fn merging_same_field_is_identity() {
        let mut ctx = Context::new();
        let pi = ctx.pi();
        let (lx, ly) = merge_fields(&mut ctx, &pi, &pi);
        assert_eq!(lx, pi);
        assert_eq!(ly, pi);
    }

    #[test]
    fn lifted_values_preserve_numeric_enclosure() {
        let mut ctx = Context::new();
        let pi_field = ctx.get_field_const(ExtHead::Pi);
        let x = Value::Element(pi_field, Repr::RatFunc(MRatFunc::from_poly(MPoly::gen(&PolyRing::new(1), 0))));
        let sqrt2 = ctx.intern_nf(NumberField::radical(2, QRat::from((2i64, 1i64))));
        let y = Value::Element(sqrt2, Repr::NumField(crate::numfield::NfElem::generator()));
        let before = ctx.enclose(&x);
        let (lx, _ly) = merge_fields(&mut ctx, &x, &y);
        let after = ctx.enclose(&lx);
        assert!(before.distance(&after) < 1e-10);
    }
}
