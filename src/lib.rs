//! # vecalc
//!
//! vecalc is an interactive calculator for exact arithmetic over a numeric
//! tower. Values are native integers, big integers, exact rationals and
//! vectors of them. Operators pick a common rank for their operands, promote
//! both, compute, and shrink the result back to its smallest exact form.
//! Scalars broadcast against vectors elementwise.
//!
//! Input is read a line at a time. Each line is parsed, evaluated and either
//! produces a value or a located diagnostic; a failing line never stops the
//! session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Diagnostic,
    interpreter::{
        evaluator::core::Context,
        lexer::{Lexer, TokenSource},
        parser::core::{Line, Parser},
        value::core::Value,
    },
};

/// Defines the expression tree built for each line.
///
/// This module declares the binary and prefix operators with their source
/// spellings, and the `Expr` tree that the parser builds and the evaluator
/// walks.
pub mod ast;
/// Display formats, index origin and debug flags.
///
/// The configuration is fixed for a session and only read by the evaluator.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors that can abandon a line of input, and the
/// `Diagnostic` that locates one of them by file name and line number.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders each failure as a single human-readable line.
pub mod error;
/// Ties together lexing, parsing, evaluation and the value types.
pub mod interpreter;
/// Numeric helpers shared by literal parsing and the operators.
///
/// Big-number literal parsing and checked conversions from big integers to
/// native shift counts, exponents and indexes.
pub mod util;

/// Evaluates every line from `tokens` in `context`.
///
/// Returns one entry per line that produced a value or failed, in input
/// order. Blank lines and assignments produce nothing. Variables assigned
/// along the way stay in `context`.
pub fn run<S: TokenSource>(context: &mut Context, tokens: S) -> Vec<Result<Value, Diagnostic>> {
    let mut parser = Parser::new(tokens, context);
    let mut results = Vec::new();

    loop {
        match parser.line() {
            Ok(Line::Eof) => break,
            Ok(Line::Empty | Line::Assignment(_)) => {},
            Ok(Line::Value(value)) => results.push(Ok(value)),
            Err(diagnostic) => results.push(Err(diagnostic)),
        }
    }

    results
}

/// Evaluates a whole source text.
///
/// `file_name` is only used in diagnostics.
///
/// # Examples
/// ```
/// use vecalc::{evaluate, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
/// let results = evaluate(&mut context, "<doc>", "x := 1/3\nx + 1/6\n5 idiv 0\n2 ** 10");
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].as_ref().unwrap().to_string(), "1/2");
/// assert_eq!(results[1].as_ref().unwrap_err().to_string(), "<doc>:3: Division by zero.");
/// assert_eq!(results[2].as_ref().unwrap().to_string(), "1024");
/// ```
pub fn evaluate(context: &mut Context,
                file_name: &str,
                source: &str)
                -> Vec<Result<Value, Diagnostic>> {
    run(context, Lexer::new(file_name, source))
}
