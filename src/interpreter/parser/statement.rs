use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser, Precedence},
            expression::parse_expression,
        },
    },
};

/// Parses a single statement.
///
/// Dispatch is on the current token: `let` begins a binding, `return` begins
/// a return statement, and anything else is parsed as an expression
/// statement. Every statement parser leaves the parser's current token on
/// the last token it consumed.
///
/// # Parameters
/// - `parser`: The parser, positioned at the first token of the statement.
///
/// # Returns
/// The parsed [`Statement`] node.
pub fn parse_statement(parser: &mut Parser) -> ParseResult<Statement> {
    match &parser.current {
        Some((Token::Let, _)) => parse_let_statement(parser),
        Some((Token::Return, _)) => parse_return_statement(parser),
        _ => parse_expression_statement(parser),
    }
}

/// Parses a binding of the form `let NAME = EXPR;`.
///
/// The trailing semicolon is optional and consumed when present. A missing
/// name or `=` records an "expected … got …" error and skips the statement.
fn parse_let_statement(parser: &mut Parser) -> ParseResult<Statement> {
    let line = parser.current_line();

    let name = parser.expect_next_identifier()?;
    parser.expect_next(&Token::Assign)?;
    parser.advance();

    let value = parse_expression(parser, Precedence::Lowest)?;

    if parser.next_is(&Token::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Let { name, value, line })
}

/// Parses a `return EXPR;` statement. The semicolon is optional.
fn parse_return_statement(parser: &mut Parser) -> ParseResult<Statement> {
    let line = parser.current_line();
    parser.advance();

    let value = parse_expression(parser, Precedence::Lowest)?;

    if parser.next_is(&Token::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Return { value, line })
}

/// Parses a bare expression in statement position. The semicolon is
/// optional.
fn parse_expression_statement(parser: &mut Parser) -> ParseResult<Statement> {
    let line = parser.current_line();

    let expr = parse_expression(parser, Precedence::Lowest)?;

    if parser.next_is(&Token::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression { expr, line })
}

/// Parses a brace-delimited block of statements.
///
/// The parser must be positioned on the opening `{`; on success the current
/// token is the closing `}`. Reaching the end of input before the closing
/// brace is an error.
pub(in crate::interpreter::parser) fn parse_block(parser: &mut Parser) -> ParseResult<Block> {
    let line = parser.current_line();
    parser.advance();

    let mut statements = Vec::new();

    while !(parser.current.is_none() || parser.current_is(&Token::RBrace)) {
        statements.push(parse_statement(parser)?);
        parser.advance();
    }

    if parser.current.is_none() {
        return Err(ParseError::UnexpectedToken { expected: "}",
                                                 found:    parser.current_kind(),
                                                 line:     parser.current_line(), });
    }

    Ok(Block { statements, line })
}
