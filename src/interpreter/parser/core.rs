use tracing::debug;

use crate::{
    error::{Diagnostic, ErrorKind},
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, TokenKind, TokenSource},
        value::core::Value,
    },
};

/// Result type used by the parser.
///
/// Parsing a line also evaluates it and resolves variables, so a line can fail
/// with either a parse error or a runtime error.
pub type ParseResult<T> = Result<T, ErrorKind>;

/// The outcome of one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// The input is exhausted.
    Eof,
    /// A blank or comment-only line.
    Empty,
    /// An assignment; holds the name that was bound. Nothing is printed.
    Assignment(String),
    /// An expression and its value, to be printed.
    Value(Value),
}

/// Reads lines from a [`TokenSource`] and evaluates them in a [`Context`].
///
/// # Example
/// ```
/// use vecalc::interpreter::{
///     evaluator::core::Context,
///     lexer::Lexer,
///     parser::core::{Line, Parser},
///     value::core::Value,
/// };
///
/// let mut context = Context::new();
/// let mut parser = Parser::new(Lexer::new("<test>", "x := 6\nx * 7\n"), &mut context);
///
/// assert_eq!(parser.line().unwrap(), Line::Assignment("x".to_string()));
/// assert_eq!(parser.line().unwrap(), Line::Value(Value::SmallInt(42)));
/// assert_eq!(parser.line().unwrap(), Line::Eof);
/// ```
pub struct Parser<'c, S: TokenSource> {
    tokens:             S,
    pub(super) context: &'c mut Context,
    line_num:           usize,
    peek_tok:           Option<Token>,
    last_kind:          TokenKind,
}

impl<'c, S: TokenSource> Parser<'c, S> {
    #[must_use]
    pub fn new(tokens: S, context: &'c mut Context) -> Self {
        Self { tokens,
               context,
               line_num: 0,
               peek_tok: None,
               last_kind: TokenKind::Newline }
    }

    /// Parses and evaluates the next line.
    ///
    /// On failure the rest of the line is discarded, so the following call
    /// starts cleanly on the next line.
    ///
    /// # Errors
    /// Returns a [`Diagnostic`] naming the file and line of the failure.
    pub fn line(&mut self) -> Result<Line, Diagnostic> {
        match self.parse_line() {
            Ok(line) => Ok(line),
            Err(kind) => {
                let line = self.line_num;
                self.flush();
                debug!(file = self.tokens.file_name(), line, error = %kind, "line abandoned");

                Err(Diagnostic::new(self.tokens.file_name(), line, kind))
            },
        }
    }

    /// Consumes the next token.
    pub(super) fn next(&mut self) -> Token {
        let tok = self.peek_tok.take().unwrap_or_else(|| self.tokens.next_token());
        self.line_num = tok.line;
        self.last_kind = tok.kind;

        tok
    }

    /// Returns the next token without consuming it.
    pub(super) fn peek(&mut self) -> &Token {
        self.peek_tok.get_or_insert_with(|| self.tokens.next_token())
    }

    /// Skips the remainder of the current line, unless the failure was raised
    /// on the line terminator itself.
    fn flush(&mut self) {
        while !matches!(self.last_kind, TokenKind::Newline | TokenKind::Eof) {
            self.next();
        }
    }
}
