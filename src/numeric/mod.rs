// ============================================================================
// Numeric Module
// Exact decimal arithmetic behind adaptive precision contexts
// ============================================================================
//
// This module provides:
// - RoundingMode: the five rounding rules amounts support
// - DecimalContext: a precision + rounding bundle applied to every operation
// - parse(): strict decimal-string parsing
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Two immutable base contexts: a 19-digit context chosen when every
//   operand coefficient fits in 31 bits (decimal64-class fast path), and a
//   full-width context otherwise (decimal128-class). The choice is a pure
//   performance heuristic and never changes an exactly-representable result.
// - Contexts with a non-default rounding rule are copies of a base context;
//   the shared statics are never mutated.

mod context;

pub use context::RoundingMode;

pub(crate) use context::{context_for, parse, rounding_context, DecimalContext};
