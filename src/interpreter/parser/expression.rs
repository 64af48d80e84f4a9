use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser, Precedence},
            statement::parse_block,
        },
    },
};

/// Parses a full expression at the given precedence level.
///
/// This is the Pratt core loop: the current token's prefix production yields
/// the left-hand side, then while the upcoming token is not a semicolon and
/// binds more tightly than `min`, the matching infix production extends it.
/// Because the loop uses a strict comparison, every binary operator is
/// left-associative.
///
/// # Parameters
/// - `parser`: The parser, positioned at the first token of the expression.
/// - `min`: The precedence level the expression was entered with.
///
/// # Returns
/// The parsed expression node; the current token is its last token.
pub fn parse_expression(parser: &mut Parser, min: Precedence) -> ParseResult<Expr> {
    let mut left = parse_prefix(parser)?;

    while !parser.next_is(&Token::Semicolon) && min < parser.next_precedence() {
        parser.advance();
        left = parse_infix(parser, left)?;
    }

    Ok(left)
}

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for every token that is not one of the eight binary
/// operators; call and index expressions are dispatched separately.
///
/// # Example
/// ```
/// use petrel::{ast::InfixOperator,
///              interpreter::{lexer::Token, parser::expression::token_to_infix_operator}};
///
/// assert_eq!(token_to_infix_operator(&Token::Plus), Some(InfixOperator::Plus));
/// assert_eq!(token_to_infix_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Plus),
        Token::Minus => Some(InfixOperator::Minus),
        Token::Star => Some(InfixOperator::Asterisk),
        Token::Slash => Some(InfixOperator::Slash),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        _ => None,
    }
}

/// Applies the prefix production for the current token.
///
/// Literals and identifiers reduce to themselves; `!` and `-` parse their
/// operand at prefix precedence; `(` parses a grouped expression; `if`,
/// `fn` and `[` begin their respective constructs. A token with no prefix
/// production is a parse error.
fn parse_prefix(parser: &mut Parser) -> ParseResult<Expr> {
    let Some((token, line)) = parser.current.clone() else {
        return Err(ParseError::UnexpectedEndOfInput { line: parser.current_line() });
    };

    match token {
        Token::Identifier(name) => Ok(Expr::Identifier { name, line }),
        Token::Integer(value) => Ok(Expr::IntegerLiteral { value, line }),
        Token::Str(value) => Ok(Expr::StringLiteral { value, line }),
        Token::True => Ok(Expr::Boolean { value: true, line }),
        Token::False => Ok(Expr::Boolean { value: false, line }),
        Token::Bang => parse_prefix_expression(parser, PrefixOperator::Bang, line),
        Token::Minus => parse_prefix_expression(parser, PrefixOperator::Minus, line),
        Token::LParen => parse_grouped_expression(parser),
        Token::If => parse_if_expression(parser, line),
        Token::Function => parse_function_literal(parser, line),
        Token::LBracket => {
            let items = parse_expression_list(parser, &Token::RBracket)?;
            Ok(Expr::List { items, line })
        },
        Token::Illegal(literal) => Err(ParseError::IllegalToken { literal, line }),
        other => Err(ParseError::NoPrefixParse { found: other.kind_name(),
                                                 line }),
    }
}

/// Applies the infix production for the current token.
///
/// `(` after an expression opens an argument list, `[` opens an index
/// expression, and the binary operator tokens build an infix node.
fn parse_infix(parser: &mut Parser, left: Expr) -> ParseResult<Expr> {
    let line = parser.current_line();

    match &parser.current {
        Some((Token::LParen, _)) => {
            let arguments = parse_expression_list(parser, &Token::RParen)?;
            Ok(Expr::Call { function: Box::new(left),
                            arguments,
                            line })
        },
        Some((Token::LBracket, _)) => {
            parser.advance();
            let index = parse_expression(parser, Precedence::Lowest)?;
            parser.expect_next(&Token::RBracket)?;

            Ok(Expr::Index { left: Box::new(left),
                             index: Box::new(index),
                             line })
        },
        _ => parse_infix_expression(parser, left, line),
    }
}

/// Parses a binary operator application.
///
/// The right operand is parsed at the operator's own precedence, so a
/// following operator of the same strength does not attach to it.
fn parse_infix_expression(parser: &mut Parser, left: Expr, line: usize) -> ParseResult<Expr> {
    let Some(op) = parser.current
                         .as_ref()
                         .and_then(|(token, _)| token_to_infix_operator(token))
    else {
        return Err(ParseError::NoInfixParse { found: parser.current_kind(),
                                              line });
    };

    let precedence = parser.current_precedence();
    parser.advance();
    let right = parse_expression(parser, precedence)?;

    Ok(Expr::Infix { op,
                     left: Box::new(left),
                     right: Box::new(right),
                     line })
}

/// Parses a prefix operator application; the operand binds at
/// [`Precedence::Prefix`].
fn parse_prefix_expression(parser: &mut Parser,
                           op: PrefixOperator,
                           line: usize)
                           -> ParseResult<Expr> {
    parser.advance();
    let right = parse_expression(parser, Precedence::Prefix)?;

    Ok(Expr::Prefix { op,
                      right: Box::new(right),
                      line })
}

/// Parses a parenthesized expression and returns the inner expression
/// unwrapped. The closing `)` is required.
fn parse_grouped_expression(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance();
    let expr = parse_expression(parser, Precedence::Lowest)?;
    parser.expect_next(&Token::RParen)?;

    Ok(expr)
}

/// Parses `if (COND) { … }` with an optional `else { … }`.
fn parse_if_expression(parser: &mut Parser, line: usize) -> ParseResult<Expr> {
    parser.expect_next(&Token::LParen)?;
    parser.advance();

    let condition = parse_expression(parser, Precedence::Lowest)?;

    parser.expect_next(&Token::RParen)?;
    parser.expect_next(&Token::LBrace)?;

    let consequence = parse_block(parser)?;

    let alternative = if parser.next_is(&Token::Else) {
        parser.advance();
        parser.expect_next(&Token::LBrace)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative,
                  line })
}

/// Parses a function literal `fn(a, b) { … }`.
fn parse_function_literal(parser: &mut Parser, line: usize) -> ParseResult<Expr> {
    parser.expect_next(&Token::LParen)?;
    let parameters = parse_parameter_list(parser)?;
    parser.expect_next(&Token::LBrace)?;
    let body = parse_block(parser)?;

    Ok(Expr::FunctionLiteral { parameters,
                               body,
                               line })
}

/// Parses a comma-separated list of parameter names up to the closing `)`.
///
/// The parser must be positioned on the opening `(`. An immediately
/// following `)` produces an empty list.
fn parse_parameter_list(parser: &mut Parser) -> ParseResult<Vec<String>> {
    let mut parameters = Vec::new();

    if parser.next_is(&Token::RParen) {
        parser.advance();
        return Ok(parameters);
    }

    parameters.push(parser.expect_next_identifier()?);

    while parser.next_is(&Token::Comma) {
        parser.advance();
        parameters.push(parser.expect_next_identifier()?);
    }

    parser.expect_next(&Token::RParen)?;

    Ok(parameters)
}

/// Parses a comma-separated list of expressions up to a closing token.
///
/// Shared by list literals (`]`) and call argument lists (`)`). Elements are
/// parsed at [`Precedence::Lowest`], so commas separate complete
/// expressions. The parser must be positioned on the opening delimiter; on
/// success the current token is the closing one.
fn parse_expression_list(parser: &mut Parser, closing: &Token) -> ParseResult<Vec<Expr>> {
    let mut items = Vec::new();

    if parser.next_is(closing) {
        parser.advance();
        return Ok(items);
    }

    parser.advance();
    items.push(parse_expression(parser, Precedence::Lowest)?);

    while parser.next_is(&Token::Comma) {
        parser.advance();
        parser.advance();
        items.push(parse_expression(parser, Precedence::Lowest)?);
    }

    parser.expect_next(closing)?;

    Ok(items)
}
