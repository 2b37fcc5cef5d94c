use logos::Logos;

use crate::ast::is_operator_word;

/// The kind of a token handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer or decimal literal such as `42`, `0x1f` or `1.5`.
    Number,
    /// A rational literal such as `1/3`.
    Rational,
    /// A variable name.
    Identifier,
    /// An operator symbol or operator word, such as `+`, `**` or `idiv`.
    Operator,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBrack,
    /// `]`
    RightBrack,
    /// `:=`
    Assign,
    /// End of a line of input.
    Newline,
    /// End of input.
    Eof,
    /// Text the lexer could not recognize.
    Error,
}

/// A token with its literal text and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The source text of the token.
    pub text: String,
    /// The source line where the token starts.
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }
}

/// Describes the token the way diagnostics quote it.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Eof => write!(f, "EOF"),
            _ => write!(f, "{:?}", self.text),
        }
    }
}

/// Anything that can feed tokens to the parser.
///
/// Once the input is exhausted, `next_token` keeps returning a token of kind
/// [`TokenKind::Eof`].
pub trait TokenSource {
    /// Reads the next token.
    fn next_token(&mut self) -> Token;

    /// Name of the input, used in diagnostics.
    fn file_name(&self) -> &str;
}

/// The raw lexemes recognized in source text.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    /// Integer and decimal literals, such as `42`, `1.5`, `.5`, `2e10` or
    /// `0x1F`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"0[oO][0-7]+")]
    #[regex(r"0[bB][01]+")]
    Number,
    /// `1/3`
    #[regex(r"[0-9]+/[0-9]+")]
    Rational,
    /// Variable names and operator words.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Operator symbols.
    #[regex(r"\*\*|<<|>>|==|!=|<=|>=|[-+*/&|^<>]")]
    Operator,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `[`
    #[token("[")]
    LeftBrack,
    /// `]`
    #[token("]")]
    RightBrack,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Lexeme::Newline
    })]
    Newline,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A [`TokenSource`] over an in-memory string.
///
/// # Example
/// ```
/// use vecalc::interpreter::lexer::{Lexer, TokenKind, TokenSource};
///
/// let mut lexer = Lexer::new("<test>", "x := 1/3 idiv 2");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///                                 let tok = lexer.next_token();
///                                 (tok.kind != TokenKind::Eof).then_some(tok.kind)
///                             }).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Rational,
///             TokenKind::Operator,
///             TokenKind::Number]);
/// ```
pub struct Lexer<'s> {
    name:  String,
    inner: logos::Lexer<'s, Lexeme>,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer over `source`, numbering lines from 1.
    #[must_use]
    pub fn new(name: &str, source: &'s str) -> Self {
        Self::starting_at(name, source, 1)
    }

    /// Creates a lexer over `source` whose first line is numbered `line`.
    ///
    /// Used when input arrives one line at a time.
    #[must_use]
    pub fn starting_at(name: &str, source: &'s str, line: usize) -> Self {
        Self { name:  name.to_string(),
               inner: Lexeme::lexer_with_extras(source, LexerExtras { line }), }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let line = self.inner.extras.line;
        let Some(lexeme) = self.inner.next() else {
            return Token::new(TokenKind::Eof, "", line);
        };
        let text = self.inner.slice();

        let kind = match lexeme {
            Ok(Lexeme::Number) => TokenKind::Number,
            Ok(Lexeme::Rational) => TokenKind::Rational,
            Ok(Lexeme::Identifier) if is_operator_word(text) => TokenKind::Operator,
            Ok(Lexeme::Identifier) => TokenKind::Identifier,
            Ok(Lexeme::Operator) => TokenKind::Operator,
            Ok(Lexeme::LeftParen) => TokenKind::LeftParen,
            Ok(Lexeme::RightParen) => TokenKind::RightParen,
            Ok(Lexeme::LeftBrack) => TokenKind::LeftBrack,
            Ok(Lexeme::RightBrack) => TokenKind::RightBrack,
            Ok(Lexeme::Assign) => TokenKind::Assign,
            Ok(Lexeme::Newline) => TokenKind::Newline,
            Ok(Lexeme::Comment | Lexeme::Ignored) | Err(()) => TokenKind::Error,
        };

        Token::new(kind, text, line)
    }

    fn file_name(&self) -> &str {
        &self.name
    }
}
