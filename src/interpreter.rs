/// The evaluator module computes the value of a line's expression tree.
///
/// It owns the operator tables, promotes operands to a common rank, broadcasts
/// over vectors and keeps the session's variables.
///
/// # Responsibilities
/// - Dispatches every operator through its type-selection rule and per-rank
///   implementations.
/// - Holds the configuration and the variable environment for a session.
/// - Reports runtime errors such as division by zero or mismatched lengths.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads raw text and produces numbers, rationals, identifiers,
/// operators, brackets, assignments and line ends, each tagged with the line
/// it came from. Operator words such as `idiv` come out as operators.
pub mod lexer;
/// The parser module reads a line of tokens, builds its expression tree and
/// evaluates it.
///
/// # Responsibilities
/// - Recognizes assignments, vector literals, indexing and prefix operators.
/// - Resolves variables as soon as they are read.
/// - Recovers from any failure by skipping to the next line.
pub mod parser;
/// The value module defines the numeric tower.
///
/// This module declares the `Value` enum and its `Rank`, with promotion,
/// canonicalization, literal parsing and configured rendering.
pub mod value;
