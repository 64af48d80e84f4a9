use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Identifier tokens; binding or parameter names such as `x` or `square`.
    /// Digits are not part of identifiers.
    #[regex(r"[a-zA-Z_][a-zA-Z_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. A literal that does not fit a
    /// 64-bit signed integer lexes as an illegal token.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`. There are no escape
    /// sequences and a literal cannot span lines; an unterminated string
    /// consumes the rest of its line.
    #[regex(r#""[^"\n]*""#, trim_string_quotes)]
    #[regex(r#""[^"\n]*"#, trim_open_quote)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Any character no other rule recognizes.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 1)]
    Illegal(String),

    /// Newlines; skipped, but counted for line numbers.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Token {
    /// Returns the display name of the token's kind.
    ///
    /// Single-lexeme tokens display as their lexeme, token classes as their
    /// class name. The names appear in parse error messages.
    ///
    /// # Example
    /// ```
    /// use petrel::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Assign.kind_name(), "=");
    /// assert_eq!(Token::Integer(7).kind_name(), "INT");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "IDENT",
            Self::Integer(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Illegal(_) => "ILLEGAL",
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::NewLine => "\n",
            Self::Ignored => " ",
        }
    }
}

/// Tokenizes source text into a stream of tokens with line numbers.
///
/// The lexer never fails: input no rule recognizes (including integer
/// literals that overflow `i64`) is produced as [`Token::Illegal`] so the
/// parser can report it in order with any other syntax errors. End of input
/// is the end of the stream; the parser treats exhaustion as `EOF`.
///
/// # Parameters
/// - `source`: The source text to tokenize.
///
/// # Returns
/// The tokens paired with the line each one started on.
///
/// # Examples
/// ```
/// use petrel::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let x = 5;");
/// let kinds: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![&Token::Let,
///                 &Token::Identifier("x".to_string()),
///                 &Token::Assign,
///                 &Token::Integer(5),
///                 &Token::Semicolon]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(token) => tokens.push((token, line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), line)),
        }
    }

    tokens
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a terminated string literal.
fn trim_string_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Strips the opening quote from an unterminated string literal.
fn trim_open_quote(lex: &logos::Lexer<Token>) -> String {
    lex.slice()[1..].to_string()
}
