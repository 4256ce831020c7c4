//! Ext: the syntactic handle for a transcendental extension generator.
//!
//! An `Ext` is a head symbol plus an ordered list of `Value` arguments. Two
//! Ext instances with equal head and structurally equal arguments are the
//! same interned handle -- see [`crate::context::Context::intern_ext`].

use crate::enclosure::Enclosure;
use crate::value::Value;
use smallvec::SmallVec;
use std::cell::RefCell;

/// Stable handle to an interned [`ExtData`] inside a [`crate::context::Context`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtId(pub(crate) u32);

impl ExtId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Head symbol of an `Ext`, drawn from a closed enumeration.
///
/// `Pi` and `PiI` are nullary (the constants pi and pi*i, the latter kept as
/// its own generator rather than a product of `Pi` and a separate `I`
/// generator -- see `DESIGN.md` for why the imaginary unit itself is not
/// routed through here at all: `i` is algebraic and is built as a dedicated
/// `NF` field instead). `Exp`, `Log`, `Sin`, `Cos`, `Sqrt` take exactly one
/// argument. `NthRoot(q)` is a family indexed by the root degree, used by the
/// rational-power fallback when the radicand is not itself rational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtHead {
    Pi,
    PiI,
    Exp,
    Log,
    Sin,
    Cos,
    Sqrt,
    NthRoot(u32),
}

impl ExtHead {
    /// Expected argument count for this head.
    pub fn arity(self) -> usize {
        match self {
            ExtHead::Pi | ExtHead::PiI => 0,
            _ => 1,
        }
    }
}

/// The interned payload of an Ext: head and arguments. This is the hash-cons
/// key -- identity is purely structural, down to the `Value` arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtData {
    pub head: ExtHead,
    pub args: SmallVec<[Value; 2]>,
}

impl ExtData {
    pub fn new(head: ExtHead, args: SmallVec<[Value; 2]>) -> Self {
        assert_eq!(
            args.len(),
            head.arity(),
            "ExtData::new: wrong argument count for {:?}",
            head
        );
        ExtData { head, args }
    }
}

/// Per-Ext cached numerical enclosure, kept out of the hash-cons key (it is
/// a cache, not part of identity) in a side table indexed by `ExtId`.
#[derive(Default)]
pub struct EnclosureCache(pub(crate) RefCell<Option<Enclosure>>);

impl EnclosureCache {
    pub fn empty() -> Self {
        EnclosureCache(RefCell::new(None))
    }
}
