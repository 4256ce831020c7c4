//! Context: the registry owning every `Ext` and `Field` created during a
//! session, and the process-wide field total order.
//!
//! Grounded on `qsym-core/src/arena.rs`'s dedup-map idiom
//! (`dedup: FxHashMap<Expr, ExprRef>` backing a growable `Vec`), applied here
//! to two tables instead of one. A `Context` is not `Sync`; per SS5, a
//! process may hold several independent `Context`s, but their Fields/Exts
//! are never interoperable -- a `FieldId`/`ExtId` is only meaningful
//! relative to the `Context` that produced it.

use crate::enclosure::{newton_root, Enclosure};
use crate::ext::{EnclosureCache, ExtData, ExtHead, ExtId};
use crate::field::{Field, FieldId, FuncField, MultiField};
use crate::numfield::NumberField;
use crate::poly::mpoly::PolyRing;
use crate::poly::QRatPoly;
use crate::value::{Repr, Value};
use rug::ops::Pow;
use rug::Complex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cmp::Ordering;

const ENCLOSURE_PRECISION: u32 = 128;

fn horner_complex(p: &QRatPoly, alpha: &Enclosure) -> Enclosure {
    let deg = p.degree().unwrap_or(0);
    let mut acc = Complex::new(ENCLOSURE_PRECISION);
    for i in (0..=deg).rev() {
        let c = Complex::with_val(ENCLOSURE_PRECISION, (p.coeff(i).0.to_f64(), 0.0));
        acc = acc * alpha.value.clone() + c;
    }
    Enclosure { value: acc }
}

fn eval_mpoly(p: &crate::poly::mpoly::MPoly, points: &[Enclosure]) -> Enclosure {
    let mut total = Complex::new(ENCLOSURE_PRECISION);
    for (exp, coeff) in p.terms() {
        let mut term = Complex::with_val(ENCLOSURE_PRECISION, (coeff.0.to_f64(), 0.0));
        for (i, &e) in exp.iter().enumerate() {
            for _ in 0..e {
                term *= points[i].value.clone();
            }
        }
        total += term;
    }
    Enclosure { value: total }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum FieldKey {
    Nf(QRatPoly),
    Func(ExtId),
    Multi(Vec<FieldId>),
}

pub struct Context {
    exts: Vec<ExtData>,
    ext_enclosures: Vec<EnclosureCache>,
    ext_dedup: FxHashMap<ExtData, ExtId>,
    fields: Vec<Field>,
    field_dedup: FxHashMap<FieldKey, FieldId>,
    qq: FieldId,
    gaussian: Option<FieldId>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        let mut ctx = Context {
            exts: Vec::new(),
            ext_enclosures: Vec::new(),
            ext_dedup: FxHashMap::default(),
            fields: Vec::new(),
            field_dedup: FxHashMap::default(),
            qq: FieldId(0),
            gaussian: None,
        };
        ctx.fields.push(Field::Qq);
        ctx.qq = FieldId(0);
        ctx
    }

    pub fn qq(&self) -> FieldId {
        self.qq
    }

    /// The field `Q(i)`, created lazily and cached.
    pub fn field_i(&mut self) -> FieldId {
        if let Some(id) = self.gaussian {
            return id;
        }
        let id = self.intern_nf(NumberField::gaussian());
        self.gaussian = Some(id);
        id
    }

    // ---- Ext interning ----

    /// Returns the unique `Ext` handle for `(head, args)`.
    pub fn intern_ext(&mut self, head: ExtHead, args: SmallVec<[Value; 2]>) -> ExtId {
        let data = ExtData::new(head, args);
        if let Some(&id) = self.ext_dedup.get(&data) {
            return id;
        }
        let id = ExtId(self.exts.len() as u32);
        self.exts.push(data.clone());
        self.ext_enclosures.push(EnclosureCache::empty());
        self.ext_dedup.insert(data, id);
        id
    }

    pub fn ext(&self, id: ExtId) -> &ExtData {
        &self.exts[id.index()]
    }

    pub fn ext_enclosure(&self, id: ExtId) -> &EnclosureCache {
        &self.ext_enclosures[id.index()]
    }

    // ---- Field interning ----

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    fn push_field(&mut self, key: FieldKey, field: Field) -> FieldId {
        if let Some(&id) = self.field_dedup.get(&key) {
            return id;
        }
        let id = FieldId(self.fields.len() as u32);
        log::debug!("registering field {:?} as {:?} ({} fields total)", key, id, self.fields.len() + 1);
        self.fields.push(field);
        self.field_dedup.insert(key, id);
        id
    }

    pub fn intern_nf(&mut self, field: NumberField) -> FieldId {
        let key = FieldKey::Nf(field.minpoly.clone());
        self.push_field(key, Field::Nf(field))
    }

    pub fn intern_func(&mut self, ext: ExtId) -> FieldId {
        let key = FieldKey::Func(ext);
        self.push_field(
            key,
            Field::Func(FuncField {
                ext,
                ring: PolyRing::new(1),
            }),
        )
    }

    /// `gens` must already be sorted (by [`Context::field_order`]) and
    /// deduplicated; this is an interning primitive, not a sort.
    pub fn intern_multi(&mut self, gens: Vec<FieldId>) -> FieldId {
        assert!(gens.len() >= 2, "intern_multi: need at least two generators");
        let nvars = gens.len();
        let key = FieldKey::Multi(gens.clone());
        self.push_field(
            key,
            Field::Multi(MultiField {
                gens,
                ring: PolyRing::new(nvars),
            }),
        )
    }

    /// `get_field_fx(head, x)`: the `FUNC` field whose sole generator is
    /// `intern_ext(head, [x])`.
    pub fn get_field_fx(&mut self, head: ExtHead, x: Value) -> FieldId {
        let mut args = SmallVec::new();
        args.push(x);
        let ext = self.intern_ext(head, args);
        self.intern_func(ext)
    }

    /// The nullary `FUNC` field for a zero-argument head (`Pi`, `PiI`).
    pub fn get_field_const(&mut self, head: ExtHead) -> FieldId {
        let ext = self.intern_ext(head, SmallVec::new());
        self.intern_func(ext)
    }

    // ---- Field total order (SS4.2) ----

    /// Deterministic strict total order on fields: `QQ < NF < FUNC < MULTI`,
    /// with ties broken by minimal polynomial (`NF`), by `Ext` (`FUNC`), and
    /// elementwise over the sorted generator list (`MULTI`). Does not depend
    /// on allocation order -- only on the fields' and exts' content.
    pub fn field_order(&self, a: FieldId, b: FieldId) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let fa = self.field(a);
        let fb = self.field(b);
        fa.rank().cmp(&fb.rank()).then_with(|| match (fa, fb) {
            (Field::Qq, Field::Qq) => Ordering::Equal,
            (Field::Nf(na), Field::Nf(nb)) => na.minpoly.cmp(&nb.minpoly),
            (Field::Func(fa), Field::Func(fb)) => self.ext_order(fa.ext, fb.ext),
            (Field::Multi(ma), Field::Multi(mb)) => {
                ma.gens.len().cmp(&mb.gens.len()).then_with(|| {
                    for (&ga, &gb) in ma.gens.iter().zip(mb.gens.iter()) {
                        let c = self.field_order(ga, gb);
                        if c != Ordering::Equal {
                            return c;
                        }
                    }
                    Ordering::Equal
                })
            }
            _ => unreachable!("rank comparison already separated variants"),
        })
    }

    /// Compares two `Ext`s by head, then recursively by their argument
    /// `Value`s' fields (and, for `QQ`-field arguments, their rationals).
    pub fn ext_order(&self, a: ExtId, b: ExtId) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let da = self.ext(a);
        let db = self.ext(b);
        da.head.cmp(&db.head).then_with(|| {
            da.args
                .len()
                .cmp(&db.args.len())
                .then_with(|| {
                    for (va, vb) in da.args.iter().zip(db.args.iter()) {
                        let c = self.value_order(va, vb);
                        if c != Ordering::Equal {
                            return c;
                        }
                    }
                    Ordering::Equal
                })
        })
    }

    // ---- Numerical enclosures (heuristic; SS3/SS4.3, testable property 2) ----

    /// A numeric witness for a `Value`, used by property tests to check that
    /// lifting (and other representation changes) preserve mathematical
    /// value. Not a certified ball -- see `enclosure.rs`.
    pub fn enclose(&self, v: &Value) -> Enclosure {
        match v {
            Value::Special(_) => Enclosure::zero(),
            Value::Element(fid, repr) => match repr {
                Repr::Rational(r) => Enclosure::from_rational(&r.0),
                Repr::NumField(elem) => {
                    let alpha = self.generator_enclosure(*fid);
                    horner_complex(&elem.coeffs, &alpha)
                }
                Repr::RatFunc(rf) => {
                    let gens = match self.field(*fid) {
                        Field::Func(_) => vec![*fid],
                        Field::Multi(f) => f.gens.clone(),
                        _ => unreachable!("RatFunc representation implies FUNC or MULTI field"),
                    };
                    let points: Vec<Enclosure> = gens.iter().map(|&g| self.generator_enclosure(g)).collect();
                    let numer = eval_mpoly(&rf.numer, &points);
                    let denom = eval_mpoly(&rf.denom, &points);
                    Enclosure {
                        value: Complex::with_val(ENCLOSURE_PRECISION, numer.value / denom.value),
                    }
                }
            },
        }
    }

    /// Numeric value of the single generator of an `NF` or `FUNC` field.
    fn generator_enclosure(&self, fid: FieldId) -> Enclosure {
        match self.field(fid) {
            Field::Nf(nf) => newton_root(&nf.minpoly),
            Field::Func(f) => self.ext_enclosure_value(f.ext),
            _ => unreachable!("generator_enclosure called on a non-generator field"),
        }
    }

    /// Numeric value of a generator `Ext`, memoized through its
    /// [`EnclosureCache`] -- the recursion through `enclose` revisits the
    /// same generators repeatedly (e.g. a `MULTI` field's rational function
    /// evaluated at every one of its generators), so this is worth caching
    /// even though the cache holds only a heuristic, not a certified value.
    fn ext_enclosure_value(&self, id: ExtId) -> Enclosure {
        if let Some(cached) = self.ext_enclosure(id).0.borrow().as_ref() {
            return cached.clone();
        }
        let data = self.ext(id);
        let value = match data.head {
            ExtHead::Pi => Enclosure::from_parts(std::f64::consts::PI, 0.0),
            ExtHead::PiI => Enclosure::from_parts(0.0, std::f64::consts::PI),
            ExtHead::Exp => {
                let arg = self.enclose(&data.args[0]);
                Enclosure {
                    value: arg.value.exp(),
                }
            }
            ExtHead::Log => {
                let arg = self.enclose(&data.args[0]);
                Enclosure {
                    value: arg.value.ln(),
                }
            }
            ExtHead::Sin => {
                let arg = self.enclose(&data.args[0]);
                Enclosure { value: arg.value.sin() }
            }
            ExtHead::Cos => {
                let arg = self.enclose(&data.args[0]);
                Enclosure { value: arg.value.cos() }
            }
            ExtHead::Sqrt => {
                let arg = self.enclose(&data.args[0]);
                Enclosure { value: arg.value.sqrt() }
            }
            ExtHead::NthRoot(q) => {
                let arg = self.enclose(&data.args[0]);
                let exponent = Complex::with_val(ENCLOSURE_PRECISION, (1.0 / q as f64, 0.0));
                Enclosure {
                    value: arg.value.pow(exponent),
                }
            }
        };
        *self.ext_enclosure(id).0.borrow_mut() = Some(value.clone());
        value
    }

    /// Deterministic order between two `Value`s, used only to break ties
    /// among `Ext` arguments (not exposed as a general comparison).
    fn value_order(&self, a: &Value, b: &Value) -> Ordering {
        use crate::value::Value as V;
        match (a, b) {
            (V::Special(sa), V::Special(sb)) => (*sa as u8).cmp(&(*sb as u8)),
            (V::Special(_), V::Element(..)) => Ordering::Less,
            (V::Element(..), V::Special(_)) => Ordering::Greater,
            (V::Element(fa, ra), V::Element(fb, rb)) => self.field_order(*fa, *fb).then_with(|| match (ra, rb) {
                (Repr::Rational(x), Repr::Rational(y)) => x.cmp(y),
                (Repr::NumField(x), Repr::NumField(y)) => x.coeffs.cmp(&y.coeffs),
                (Repr::RatFunc(x), Repr::RatFunc(y)) => crate::poly::mratfunc::cmp_mratfunc(x, y),
                _ => unreachable!("field_order already equated the representation kind"),
            }),
        }
    }
}
