//! Q-Symbolic Core: an exact symbolic-numeric engine for complex numbers
//! built from the rationals via algebraic operations and a small set of
//! transcendental generators (`exp`/`log`, roots of unity).
//!
//! Every field element is a [`Value`]: either a special marker (the
//! infinities, `Undefined`, `Unknown`) or an element of some interned
//! [`Field`] owned by a [`Context`]. Binary operations between elements of
//! different fields go through [`merge_fields`] to land in a common field
//! first; [`exp`] is the one transcendental simplification this core
//! performs symbolically.

pub mod arith;
pub mod condense;
pub mod context;
pub mod enclosure;
pub mod exp;
pub mod ext;
pub mod field;
pub mod ideal;
pub mod merge;
pub mod number;
pub mod numfield;
pub mod poly;
pub mod trivalent;
pub mod value;

// Re-export key types at crate root for convenience.
pub use context::Context;
pub use ext::{ExtHead, ExtId};
pub use exp::exp;
pub use field::{Field, FieldId};
pub use merge::merge_fields;
pub use number::{QInt, QRat};
pub use poly::{Factorization, QRatPoly, factor_over_q, poly_gcd, poly_resultant};
pub use trivalent::Trivalent;
pub use value::{Repr, SpecialKind, Value};
