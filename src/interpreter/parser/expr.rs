use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
        value::{core::Value, parse::parse_value},
    },
};

impl<S: TokenSource> Parser<'_, S> {
    /// Parses an expression starting with `tok`:
    ///
    /// ```text
    /// expr := operand (operator expr)?
    /// ```
    ///
    /// Recursing on the right makes every binary operator right-associative,
    /// so `2 - 1 - 1` is `2 - (1 - 1)`.
    pub(super) fn expr(&mut self, tok: Token) -> ParseResult<Expr> {
        let left = self.operand(tok)?;

        let next = self.peek().clone();
        match next.kind {
            TokenKind::Newline | TokenKind::Eof | TokenKind::RightParen | TokenKind::RightBrack => {
                Ok(left)
            },
            TokenKind::Operator => {
                let tok = self.next();
                let op = BinaryOperator::from_symbol(&tok.text)
                         .ok_or(RuntimeError::UnknownOperator { symbol: tok.text })?;
                let first = self.next();
                let right = self.expr(first)?;

                Ok(Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) })
            },
            _ => Err(ParseError::UnexpectedAfterExpression { token: next.to_string() }.into()),
        }
    }

    /// Parses an operand:
    ///
    /// ```text
    /// operand := operator expr
    ///          | '(' expr ')' index*
    ///          | number index*
    ///          | identifier index*
    /// ```
    ///
    /// A prefix operator applies to the whole expression on its right.
    /// Variables are looked up as soon as they are read.
    fn operand(&mut self, tok: Token) -> ParseResult<Expr> {
        match tok.kind {
            TokenKind::Operator => {
                let op = UnaryOperator::from_symbol(&tok.text)
                         .ok_or(RuntimeError::UnknownOperator { symbol: tok.text })?;
                let first = self.next();
                let operand = self.expr(first)?;

                Ok(Expr::Unary { op,
                                 operand: Box::new(operand) })
            },
            TokenKind::LeftParen => {
                let first = self.next();
                let inner = self.expr(first)?;

                let close = self.next();
                if close.kind != TokenKind::RightParen {
                    return Err(ParseError::ExpectedClosingParen { found: close.to_string() }.into());
                }

                self.index(inner)
            },
            TokenKind::Number | TokenKind::Rational => {
                let value = self.number_or_vector(&tok)?;
                self.index(Expr::Value(value))
            },
            TokenKind::Identifier => {
                let value = self.context
                                .variable(&tok.text)
                                .cloned()
                                .ok_or(RuntimeError::UndefinedVariable { name: tok.text })?;
                self.index(Expr::Value(value))
            },
            TokenKind::Error => Err(ParseError::InvalidToken { text: tok.text }.into()),
            _ => Err(ParseError::UnexpectedToken { token: tok.to_string() }.into()),
        }
    }

    /// Wraps `expr` in an index node for each trailing `[expr]`.
    fn index(&mut self, mut expr: Expr) -> ParseResult<Expr> {
        while self.peek().kind == TokenKind::LeftBrack {
            self.next();
            let first = self.next();
            let index = self.expr(first)?;

            let close = self.next();
            if close.kind != TokenKind::RightBrack {
                return Err(ParseError::ExpectedClosingBracket { found: close.to_string() }.into());
            }

            expr = Expr::Binary { op:    BinaryOperator::Index,
                                  left:  Box::new(expr),
                                  right: Box::new(index), };
        }

        Ok(expr)
    }

    /// Reads a number, or a vector literal when several numbers follow one
    /// another, as in `1 2 3`.
    fn number_or_vector(&mut self, tok: &Token) -> ParseResult<Value> {
        let first = parse_value(&tok.text)?;
        if !Self::is_number(self.peek().kind) {
            return Ok(first);
        }

        let mut elements = vec![first];
        while Self::is_number(self.peek().kind) {
            let tok = self.next();
            elements.push(parse_value(&tok.text)?);
        }

        Ok(Value::from(elements))
    }

    const fn is_number(kind: TokenKind) -> bool {
        matches!(kind, TokenKind::Number | TokenKind::Rational)
    }
}
