/// Parser state, token handling and error recovery.
///
/// Holds the token source, the single token of lookahead and the session
/// context, and turns every failure into a located diagnostic before skipping
/// to the next line.
pub mod core;

/// Line parsing.
///
/// Recognizes blank lines, assignments and bare expressions, evaluates the
/// expression and records the result.
pub mod statement;

/// Expression parsing.
///
/// Builds the tree for operands, prefix and binary operators, vector literals
/// and indexing. All binary operators share one precedence level and
/// associate to the right.
pub mod expr;
