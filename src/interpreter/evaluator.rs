/// Operator table lookup and dispatch for binary operators.
///
/// Handles type selection, promotion of both operands to the chosen rank,
/// per-rank implementations, vector broadcasting and indexing.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators with the same table and broadcast shape as
/// the binary ones.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, which owns the configuration and the
/// variable environment, and the walk over a line's expression tree.
pub mod core;
