//! Value: a field element, or one of the special markers.
//!
//! Grounded on `qsym-core/src/expr.rs`'s `Expr` enum shape (atoms vs.
//! compound variants, derived `Hash`/`Eq`), even though `Value` does not
//! need hash-consing itself -- only `Ext`/`Field` do. The special-marker vs.
//! field-element split mirrors `Expr::{Infinity, Undefined}` vs. the
//! compound variants.
//!
//! Structural equality/hash on `Value` is exactly `(field_id, repr)`
//! equality after each side's own canonicalisation -- per SS4.1, this is
//! also what makes two `Ext`s with equal arguments the same interned Ext.

use crate::context::Context;
use crate::ext::ExtHead;
use crate::ext::ExtId;
use crate::field::{Field, FieldId};
use crate::number::QRat;
use crate::numfield::NfElem;
use crate::poly::mratfunc::MRatFunc;
use crate::trivalent::Trivalent;

/// The non-field-element Values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    PosInf,
    NegInf,
    UnsignedInf,
    Undefined,
    Unknown,
}

/// A field element's representation, tagged by which `Field` variant it
/// belongs to (a rational for `QQ`, a reduced number-field element for `NF`,
/// a reduced rational function for `FUNC`/`MULTI`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Repr {
    Rational(QRat),
    NumField(NfElem),
    RatFunc(MRatFunc),
}

/// A field element: either a special marker, or a `(field, representation)`
/// pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Special(SpecialKind),
    Element(FieldId, Repr),
}

impl Value {
    pub fn is_special(&self) -> bool {
        matches!(self, Value::Special(_))
    }

    pub fn field_id(&self) -> Option<FieldId> {
        match self {
            Value::Element(fid, _) => Some(*fid),
            Value::Special(_) => None,
        }
    }
}

// ---- Construction helpers (SS6: "construction helpers for the primitive
// constants (0, 1, i, -i, +-infinity, undefined, unknown, pi, pi*i)") ----

impl Context {
    pub fn zero(&self) -> Value {
        Value::Element(self.qq(), Repr::Rational(QRat::zero()))
    }

    pub fn one(&self) -> Value {
        Value::Element(self.qq(), Repr::Rational(QRat::one()))
    }

    pub fn rational(&self, r: QRat) -> Value {
        Value::Element(self.qq(), Repr::Rational(r))
    }

    pub fn pos_inf(&self) -> Value {
        Value::Special(SpecialKind::PosInf)
    }

    pub fn neg_inf(&self) -> Value {
        Value::Special(SpecialKind::NegInf)
    }

    pub fn uinf(&self) -> Value {
        Value::Special(SpecialKind::UnsignedInf)
    }

    pub fn undefined(&self) -> Value {
        Value::Special(SpecialKind::Undefined)
    }

    pub fn unknown(&self) -> Value {
        Value::Special(SpecialKind::Unknown)
    }

    pub fn i(&mut self) -> Value {
        let fid = self.field_i();
        Value::Element(fid, Repr::NumField(NfElem::generator()))
    }

    pub fn neg_i(&mut self) -> Value {
        let fid = self.field_i();
        Value::Element(fid, Repr::NumField(NfElem::generator().neg()))
    }

    pub fn pi(&mut self) -> Value {
        let fid = self.get_field_const(ExtHead::Pi);
        let ring = self.field(fid).ring().copied().expect("pi: FUNC field has a ring");
        Value::Element(fid, Repr::RatFunc(MRatFunc::from_poly(crate::poly::mpoly::MPoly::gen(&ring, 0))))
    }

    pub fn pi_i(&mut self) -> Value {
        let fid = self.get_field_const(ExtHead::PiI);
        let ring = self.field(fid).ring().copied().expect("pi_i: FUNC field has a ring");
        Value::Element(fid, Repr::RatFunc(MRatFunc::from_poly(crate::poly::mpoly::MPoly::gen(&ring, 0))))
    }
}

// ---- Classification predicates (SS4.3) ----

pub fn is_special(x: &Value) -> bool {
    x.is_special()
}

pub fn is_zero(x: &Value) -> Trivalent {
    match x {
        Value::Special(SpecialKind::Unknown) | Value::Special(SpecialKind::Undefined) => Trivalent::Unknown,
        Value::Special(_) => Trivalent::False,
        Value::Element(_, repr) => Trivalent::from_bool(match repr {
            Repr::Rational(r) => r.is_zero(),
            Repr::NumField(e) => e.is_zero(),
            Repr::RatFunc(rf) => rf.is_zero(),
        }),
    }
}

pub fn is_one(x: &Value) -> Trivalent {
    match x {
        Value::Special(SpecialKind::Unknown) | Value::Special(SpecialKind::Undefined) => Trivalent::Unknown,
        Value::Special(_) => Trivalent::False,
        Value::Element(_, repr) => Trivalent::from_bool(match repr {
            Repr::Rational(r) => r.is_one(),
            Repr::NumField(e) => e.as_rational().map_or(false, |r| r.is_one()),
            Repr::RatFunc(rf) => rf.as_constant().map_or(false, |r| r.is_one()),
        }),
    }
}

pub fn is_pos_inf(x: &Value) -> Trivalent {
    match x {
        Value::Special(SpecialKind::Unknown) => Trivalent::Unknown,
        Value::Special(SpecialKind::PosInf) => Trivalent::True,
        _ => Trivalent::False,
    }
}

pub fn is_neg_inf(x: &Value) -> Trivalent {
    match x {
        Value::Special(SpecialKind::Unknown) => Trivalent::Unknown,
        Value::Special(SpecialKind::NegInf) => Trivalent::True,
        _ => Trivalent::False,
    }
}

pub fn is_uinf(x: &Value) -> Trivalent {
    match x {
        Value::Special(SpecialKind::Unknown) => Trivalent::Unknown,
        Value::Special(SpecialKind::UnsignedInf) => Trivalent::True,
        _ => Trivalent::False,
    }
}

pub fn is_undefined(x: &Value) -> Trivalent {
    match x {
        Value::Special(SpecialKind::Unknown) => Trivalent::Unknown,
        Value::Special(SpecialKind::Undefined) => Trivalent::True,
        _ => Trivalent::False,
    }
}

/// `x` is exactly the bare generator of its own `FUNC` field (not merely a
/// rational multiple of it, and not a generator embedded in a larger
/// `MULTI` field). Grounded on the original `ca_is_gen_as_ext` (see
/// `examples/original_source/ca/exp.c`), which `exp(log(z)) = z` needs and
/// which is strictly narrower than `is_fmpq_times_gen_as_ext` below.
pub fn is_gen_as_ext(ctx: &Context, x: &Value) -> Option<ExtId> {
    if let Value::Element(fid, Repr::RatFunc(rf)) = x {
        if let Field::Func(f) = ctx.field(*fid) {
            if rf.is_gen(0) {
                return Some(f.ext);
            }
        }
    }
    None
}

/// `x` equals `c * g` where `g` is exactly one of the current field's
/// generators and `c` is rational; `None` if the field is `QQ`/`NF` (no
/// generators) or the pattern doesn't match.
pub fn is_fmpq_times_gen_as_ext(ctx: &Context, x: &Value) -> Option<(QRat, ExtId)> {
    let (fid, rf) = match x {
        Value::Element(fid, Repr::RatFunc(rf)) => (*fid, rf),
        _ => return None,
    };
    match ctx.field(fid) {
        Field::Func(f) => {
            let (c, _) = rf.as_scalar_times_gen()?;
            Some((c, f.ext))
        }
        Field::Multi(m) => {
            let (c, i) = rf.as_scalar_times_gen()?;
            match ctx.field(m.gens[i]) {
                Field::Func(f) => Some((c, f.ext)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Succeeds iff `x` is representable as a rational multiple of `pi*i` in the
/// current field: constructs `pi*i`, divides, and checks the quotient lands
/// in `QQ`.
pub fn as_fmpq_pi_i(ctx: &mut Context, x: &Value) -> Option<QRat> {
    if x.is_special() {
        return None;
    }
    let pi_i = ctx.pi_i();
    let quotient = crate::arith::value_div(ctx, x, &pi_i);
    // The division lands in whichever field `x`/`pi*i` share; a quotient
    // that is rational may still be represented as a constant rational
    // function there, so condense before testing for QQ.
    match crate::condense::condense(ctx, quotient) {
        Value::Element(fid, Repr::Rational(r)) if fid == ctx.qq() => Some(r),
        _ => None,
    }
}
