//! `condense`: demote a `Value` to the smallest field that still represents
//! it exactly.
//!
//! An `NF`/`FUNC`/`MULTI` element that happens to have collapsed to a
//! rational constant (e.g. after an arithmetic cancellation) is re-expressed
//! directly as a `QQ` value. This is the crate's only field-shrinking step;
//! it is intentionally idempotent (condensing an already-condensed value is
//! a no-op), matching the "minimal idempotent pass" contract the original
//! `ca` library's simplification loop relies on.

use crate::context::Context;
use crate::field::Field;
use crate::value::{Repr, Value};

pub fn condense(ctx: &Context, v: Value) -> Value {
    match &v {
        Value::Special(_) => v,
        Value::Element(fid, repr) => match (ctx.field(*fid), repr) {
            (Field::Nf(_), Repr::NumField(e)) => match e.as_rational() {
                Some(r) => {
                    log::debug!("condensed NF element in {:?} down to QQ", fid);
                    Value::Element(ctx.qq(), Repr::Rational(r))
                }
                None => v,
            },
            (Field::Func(_), Repr::RatFunc(rf)) | (Field::Multi(_), Repr::RatFunc(rf)) => match rf.as_constant() {
                Some(r) => {
                    log::debug!("condensed generator element in {:?} down to QQ", fid);
                    Value::Element(ctx.qq(), Repr::Rational(r))
                }
                None => v,
            },
            _ => v,
        },
    }
}
