//! Statement parser for sketch scripts.
//!
//! Turns source text into raw [`Statement`]s. Attribute values are kept
//! unresolved here; [`validate`](super::validate) checks them and the line
//! geometry. The public entry point is [`parse_statements`], which recovers
//! after each bad statement so every syntax error is reported in one pass.

use winnow::{
    Parser as _,
    ascii::{float, multispace1},
    combinator::{alt, cut_err, delimited, not, opt, peek, preceded, repeat, separated, separated_pair, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, one_of, take_while},
};

use gridarea_core::geometry::{Point, Segment};

use crate::{
    error::{Diagnostic, Diagnostics, ErrorCode},
    span::{Span, Spanned},
};

/// Diagnostic details attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParserDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<ParserDiagnostic>>;

/// A raw attribute value, before it is checked against its attribute.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AttributeValue {
    Text(String),
    Number(f32),
}

/// A `name=value` pair from an `area` statement.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Attribute<'a> {
    pub name: Spanned<&'a str>,
    pub value: Spanned<AttributeValue>,
}

/// A syntactically valid statement.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Statement<'a> {
    Line(Segment),
    Area {
        point: Point,
        attributes: Vec<Attribute<'a>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Line,
    Area,
}

/// Parse line comment starting with '//'
fn line_comment(input: &mut Input<'_>) -> IResult<()> {
    ("//", take_while(0.., |c: char| c != '\n'))
        .void()
        .parse_next(input)
}

/// Skip whitespace, newlines and comments
fn ws0(input: &mut Input<'_>) -> IResult<()> {
    repeat(0.., alt((multispace1.void(), line_comment))).parse_next(input)
}

/// Skip spaces and tabs only
fn inline_ws0(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., [' ', '\t', '\r'])
        .void()
        .parse_next(input)
}

/// Parse a finite decimal number
fn number(input: &mut Input<'_>) -> IResult<f32> {
    float
        .verify(|value: &f32| value.is_finite())
        .parse_next(input)
}

/// Parse a point: `(x, y)`
fn point(input: &mut Input<'_>) -> IResult<Point> {
    delimited(
        ('(', ws0),
        separated_pair(number, (ws0, ',', ws0), number),
        (ws0, ')'),
    )
    .map(|(x, y)| Point::new(x, y))
    .parse_next(input)
}

/// Parse a statement keyword with word boundary checking
fn keyword(input: &mut Input<'_>) -> IResult<Keyword> {
    terminated(
        alt((
            literal("line").value(Keyword::Line),
            literal("area").value(Keyword::Area),
        )),
        peek(not(one_of(|c: char| c.is_ascii_alphanumeric() || c == '_'))),
    )
    .parse_next(input)
}

/// Parse an attribute name
fn identifier<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .verify(|s: &str| {
            s.chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        })
        .parse_next(input)
}

/// Parse a double-quoted string; strings cannot span lines
fn string_literal(input: &mut Input<'_>) -> IResult<String> {
    let start = input.current_token_start();

    preceded(
        '"',
        cut_err(terminated(
            take_while(0.., |c: char| c != '"' && c != '\n'),
            '"',
        ))
        .context(ParserDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated string literal",
            help: Some("add closing `\"`"),
            start,
        }),
    )
    .map(str::to_string)
    .parse_next(input)
}

/// Parse a single `name=value` attribute
fn attribute<'a>(input: &mut Input<'a>) -> IResult<Attribute<'a>> {
    (
        identifier.with_span(),
        (ws0, '=', ws0),
        alt((
            string_literal.map(AttributeValue::Text),
            number.map(AttributeValue::Number),
        ))
        .with_span(),
    )
        .map(|((name, name_range), _, (value, value_range))| Attribute {
            name: Spanned::new(name, Span::new(name_range)),
            value: Spanned::new(value, Span::new(value_range)),
        })
        .parse_next(input)
}

/// Parse an attribute list: `[name=value, ...]`
fn attributes<'a>(input: &mut Input<'a>) -> IResult<Vec<Attribute<'a>>> {
    let start = input.current_token_start();

    preceded(
        ('[', ws0),
        cut_err(terminated(
            separated(0.., attribute, (ws0, ',', ws0)),
            (ws0, ']'),
        ))
        .context(ParserDiagnostic {
            code: ErrorCode::E100,
            message: "malformed attribute list",
            help: Some("write attributes as `[fill_color=\"teal\", fill_opacity=0.3]`"),
            start,
        }),
    )
    .parse_next(input)
}

/// Parse the body of a `line` statement: `(x, y) -> (x, y)`
fn line_body(input: &mut Input<'_>, start: usize) -> IResult<Segment> {
    cut_err((ws0, point, ws0, "->", ws0, point))
        .context(ParserDiagnostic {
            code: ErrorCode::E100,
            message: "expected `(x, y) -> (x, y)` after `line`",
            help: Some("write a line as `line (0, 0) -> (40, 0);`"),
            start,
        })
        .map(|(_, from, _, _, _, to)| Segment::new(from, to))
        .parse_next(input)
}

/// Parse the body of an `area` statement: `(x, y)` with optional attributes
fn area_body<'a>(input: &mut Input<'a>, start: usize) -> IResult<Statement<'a>> {
    let point = cut_err(preceded(ws0, point))
        .context(ParserDiagnostic {
            code: ErrorCode::E100,
            message: "expected `(x, y)` after `area`",
            help: Some("query a region as `area (20, 20);`"),
            start,
        })
        .parse_next(input)?;

    let attributes = opt(preceded(inline_ws0, attributes)).parse_next(input)?;

    Ok(Statement::Area {
        point,
        attributes: attributes.unwrap_or_default(),
    })
}

/// Parse the `;` that closes a statement
fn terminator(input: &mut Input<'_>, start: usize) -> IResult<()> {
    cut_err((inline_ws0, ';'))
        .void()
        .context(ParserDiagnostic {
            code: ErrorCode::E101,
            message: "missing `;` after statement",
            help: Some("end every statement with `;`"),
            start,
        })
        .parse_next(input)
}

/// Parse a complete statement with position tracking
fn statement<'a>(input: &mut Input<'a>) -> IResult<Spanned<Statement<'a>>> {
    let start = input.current_token_start();

    let statement = match keyword(input)? {
        Keyword::Line => Statement::Line(line_body(input, start)?),
        Keyword::Area => area_body(input, start)?,
    };
    terminator(input, start)?;

    let end = input.current_token_start();
    Ok(Spanned::new(statement, Span::new(start..end)))
}

/// Parser state that accumulates statements and diagnostics.
struct ScriptParser<'a> {
    source: &'a str,
    statements: Vec<Spanned<Statement<'a>>>,
    diagnostics: Diagnostics,
}

impl<'a> ScriptParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            statements: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Parse every statement, recovering at the next `;` or newline after an error.
    fn parse(&mut self) {
        let mut input = LocatingSlice::new(self.source);

        loop {
            // Whitespace and comments cannot fail to parse
            let _ = ws0(&mut input);
            if input.eof_offset() == 0 {
                break;
            }

            let start = input.current_token_start();
            match statement(&mut input) {
                Ok(statement) => self.statements.push(statement),
                Err(err) => {
                    let error_pos = input.current_token_start().max(start);
                    let diagnostic = self.convert_err_mode(err, start, error_pos);
                    self.diagnostics.push(diagnostic);
                    Self::recover(&mut input);
                }
            }
        }
    }

    /// Skip past the rest of a broken statement.
    fn recover(input: &mut Input<'a>) {
        while let Some(c) = input.next_token() {
            if c == ';' || c == '\n' {
                break;
            }
        }
    }

    /// Convert a winnow error into a [`Diagnostic`].
    ///
    /// Uses the innermost [`ParserDiagnostic`] context when present. Without
    /// context the statement did not even start with a keyword: a word gets
    /// E100, anything else E002.
    fn convert_err_mode(
        &self,
        err: ErrMode<ContextError<ParserDiagnostic>>,
        start: usize,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(ParserDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = Span::new(*start..error_pos);
            let mut diag = Diagnostic::new(*code, span, *message);
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let rest = &self.source[start..];
        let word_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());

        if word_len > 0 {
            let word = &rest[..word_len];
            Diagnostic::new(
                ErrorCode::E100,
                Span::new(start..start + word_len),
                format!("unknown statement `{word}`"),
            )
            .with_label("expected `line` or `area`")
                .with_help("statements are `line (x, y) -> (x, y);` and `area (x, y);`")
        } else {
            let char_len = rest.chars().next().map_or(1, char::len_utf8);
            Diagnostic::new(
                ErrorCode::E002,
                Span::new(start..start + char_len),
                "unexpected character",
            )
        }
    }

    fn finish(self) -> (Vec<Spanned<Statement<'a>>>, Diagnostics) {
        (self.statements, self.diagnostics)
    }
}

/// Parse all statements in `source`.
///
/// Returns the statements that parsed cleanly together with a collector
/// holding a diagnostic for each statement that did not.
pub(crate) fn parse_statements(source: &str) -> (Vec<Spanned<Statement<'_>>>, Diagnostics) {
    let mut parser = ScriptParser::new(source);
    parser.parse();
    parser.finish()
}
