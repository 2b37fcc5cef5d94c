use crate::{
    config::PARSE_DEBUG,
    error::ParseError,
    interpreter::{
        evaluator::core::LAST_VALUE,
        lexer::{Token, TokenKind, TokenSource},
        parser::core::{Line, ParseResult, Parser},
        value::core::Value,
    },
};

impl<S: TokenSource> Parser<'_, S> {
    /// Parses one line:
    ///
    /// ```text
    /// line := EOF | newline | identifier ':=' expr | expr
    /// ```
    pub(super) fn parse_line(&mut self) -> ParseResult<Line> {
        let tok = self.next();

        match tok.kind {
            TokenKind::Eof => Ok(Line::Eof),
            TokenKind::Newline => Ok(Line::Empty),
            TokenKind::Identifier if self.peek().kind == TokenKind::Assign => {
                self.next();
                let first = self.next();
                let value = self.statement(first)?;
                self.context.set_variable(&tok.text, value);

                Ok(Line::Assignment(tok.text))
            },
            _ => Ok(Line::Value(self.statement(tok)?)),
        }
    }

    /// Parses an expression running to the end of the line, evaluates it and
    /// stores the result in `_`.
    fn statement(&mut self, tok: Token) -> ParseResult<Value> {
        let expr = self.expr(tok)?;

        let end = self.next();
        if !matches!(end.kind, TokenKind::Newline | TokenKind::Eof) {
            return Err(ParseError::UnexpectedToken { token: end.to_string() }.into());
        }

        if self.context.config().debug(PARSE_DEBUG) {
            println!("{}", expr.tree());
        }

        let value = self.context.eval(&expr)?;
        self.context.set_variable(LAST_VALUE, value.clone());

        Ok(value)
    }
}
