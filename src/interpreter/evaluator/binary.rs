/// Binary operator dispatch.
///
/// Picks the result rank, promotes the operands and calls the implementation
/// registered for that rank.
pub mod core;
/// The static operator tables.
///
/// One entry per operator: a type-selection rule and an optional
/// implementation for each scalar rank.
pub mod table;
/// `+`, `-`, `*` and exact division `/`.
pub mod arith;
/// Truncating (`idiv`, `imod`) and Euclidean (`div`, `mod`) integer division.
pub mod division;
/// Exponentiation.
pub mod power;
/// Bitwise operators and shifts.
pub mod bitwise;
/// Comparisons, `min` and `max`.
pub mod comparison;
/// Elementwise application over vectors.
pub mod vector;
/// Element selection with `[]`.
pub mod index;
