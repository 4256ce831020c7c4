//! `reduce_ideal`: normalise a `Value` against the relations its own field's
//! generators satisfy.
//!
//! A general Groebner-basis-style reduction against an arbitrary ideal of
//! relations among several transcendental generators is out of scope here
//! (see `DESIGN.md`) -- this crate's generators are constructed so that the
//! only relation a freshly-built `FUNC`/`MULTI` representation can already
//! satisfy is "it happens to be constant", which [`crate::condense::condense`]
//! already detects. `reduce_ideal` is kept as its own pass (rather than
//! folded into `condense`) so callers that build up a field incrementally
//! have one idempotent entry point to call after every construction step,
//! matching the shape of the original `ca` simplification loop.
use crate::context::Context;
use crate::value::Value;

/// Idempotent by construction: condensing an already-condensed value is a
/// no-op, and there is currently no other reduction this crate performs.
pub fn reduce_ideal(ctx: &Context, v: Value) -> Value {
    log::trace!("reducing ideal for value in field {:?}", v.field_id());
    crate::condense::condense(ctx, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_ideal_is_idempotent() {
        let mut ctx = Context::new();
        let pi = ctx.pi();
        let once = reduce_ideal(&ctx, pi.clone());
        let twice = reduce_ideal(&ctx, once.clone());
        assert_eq!(once, twice);
        assert_eq!(once, pi);
    }
}
