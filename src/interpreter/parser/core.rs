use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::Token, parser::statement::parse_statement},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of an operator position, low to high.
///
/// The Pratt loop continues consuming infix operators while the upcoming
/// token binds more tightly than the level it was entered with, which makes
/// every binary operator left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The entry level; also the level of every non-operator token.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `-x` and `!x`
    Prefix,
    /// Calls `f(x)` and indexing `a[i]`
    Call,
}

/// Returns the binding strength of a token in infix position.
///
/// Tokens that cannot continue an expression are [`Precedence::Lowest`].
///
/// # Example
/// ```
/// use petrel::interpreter::{lexer::Token, parser::core::{Precedence, precedence_of}};
///
/// assert_eq!(precedence_of(&Token::Plus), Precedence::Sum);
/// assert_eq!(precedence_of(&Token::LParen), Precedence::Call);
/// assert_eq!(precedence_of(&Token::RParen), Precedence::Lowest);
/// ```
#[must_use]
pub const fn precedence_of(token: &Token) -> Precedence {
    match token {
        Token::EqualEqual | Token::BangEqual => Precedence::Equals,
        Token::Less | Token::Greater => Precedence::LessGreater,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Star | Token::Slash => Precedence::Product,
        Token::LParen | Token::LBracket => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

/// The parser state machine.
///
/// Holds exactly two lookahead slots: `current`, the token being parsed, and
/// `next`, the one after it. [`Parser::advance`] shifts `next` into `current`
/// and pulls a fresh token from the stream; construction advances twice to
/// fill both slots. Exhaustion of the stream stands for the end of input and
/// is rendered as `EOF` in error messages.
///
/// Parsing never fails as a whole: errors are accumulated in order and the
/// offending statement is skipped.
pub struct Parser {
    tokens: std::vec::IntoIter<(Token, usize)>,
    pub(in crate::interpreter::parser) current: Option<(Token, usize)>,
    pub(in crate::interpreter::parser) next: Option<(Token, usize)>,
    errors: Vec<ParseError>,
    line:   usize,
}

impl Parser {
    /// Creates a parser over a token stream.
    ///
    /// # Example
    /// ```
    /// use petrel::interpreter::{lexer::lex, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(lex("let answer = 42;"));
    /// let program = parser.parse_program();
    ///
    /// assert!(parser.errors().is_empty());
    /// assert_eq!(program.to_string(), "let answer = 42;");
    /// ```
    #[must_use]
    pub fn new(tokens: Vec<(Token, usize)>) -> Self {
        let mut parser = Self { tokens:  tokens.into_iter(),
                                current: None,
                                next:    None,
                                errors:  Vec::new(),
                                line:    1, };
        parser.advance();
        parser.advance();
        parser
    }

    /// Parses the whole token stream into a program.
    ///
    /// Statements that fail to parse are skipped up to the next statement
    /// boundary (`;` or end of input) and their error recorded; everything
    /// that parsed successfully is kept, in order.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.current.is_some() {
            match parse_statement(self) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                },
            }
            self.advance();
        }

        Program { statements }
    }

    /// The errors collected so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, yielding the collected errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Shifts `next` into `current` and pulls a fresh token.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.next, self.tokens.next());
        if let Some((_, line)) = &self.current {
            self.line = *line;
        }
    }

    /// Skips ahead to the next statement boundary after a parse failure.
    fn synchronize(&mut self) {
        while !(self.current.is_none() || self.current_is(&Token::Semicolon)) {
            self.advance();
        }
    }

    pub(in crate::interpreter::parser) fn current_is(&self, token: &Token) -> bool {
        matches!(&self.current, Some((current, _)) if current == token)
    }

    pub(in crate::interpreter::parser) fn next_is(&self, token: &Token) -> bool {
        matches!(&self.next, Some((next, _)) if next == token)
    }

    pub(in crate::interpreter::parser) fn current_kind(&self) -> &'static str {
        self.current.as_ref().map_or("EOF", |(token, _)| token.kind_name())
    }

    pub(in crate::interpreter::parser) fn next_kind(&self) -> &'static str {
        self.next.as_ref().map_or("EOF", |(token, _)| token.kind_name())
    }

    pub(in crate::interpreter::parser) fn current_line(&self) -> usize {
        self.current.as_ref().map_or(self.line, |(_, line)| *line)
    }

    pub(in crate::interpreter::parser) fn next_line(&self) -> usize {
        self.next.as_ref().map_or(self.line, |(_, line)| *line)
    }

    /// The binding strength of the upcoming token.
    pub(in crate::interpreter::parser) fn next_precedence(&self) -> Precedence {
        self.next
            .as_ref()
            .map_or(Precedence::Lowest, |(token, _)| precedence_of(token))
    }

    /// The binding strength of the current token.
    pub(in crate::interpreter::parser) fn current_precedence(&self) -> Precedence {
        self.current
            .as_ref()
            .map_or(Precedence::Lowest, |(token, _)| precedence_of(token))
    }

    /// Advances past the upcoming token when it has the expected kind.
    ///
    /// On a mismatch an error naming both kinds is returned and the parser
    /// does not consume anything beyond its existing lookahead.
    pub(in crate::interpreter::parser) fn expect_next(&mut self, expected: &Token)
                                                      -> ParseResult<()> {
        if self.next_is(expected) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: expected.kind_name(),
                                              found:    self.next_kind(),
                                              line:     self.next_line(), })
        }
    }

    /// Advances past the upcoming token when it is an identifier, yielding
    /// its name.
    pub(in crate::interpreter::parser) fn expect_next_identifier(&mut self)
                                                                 -> ParseResult<String> {
        match &self.next {
            Some((Token::Identifier(name), _)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            },
            _ => Err(ParseError::UnexpectedToken { expected: "IDENT",
                                                   found:    self.next_kind(),
                                                   line:     self.next_line(), }),
        }
    }
}
