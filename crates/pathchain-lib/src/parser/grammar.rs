//! Recursive-descent parser over the token stream.
//!
//! ```text
//! path    := segment+
//! segment := '/' (step | '.') | '//' [step | '.'] | '.'
//! step    := '*' | qname
//! qname   := prefix ':' local | local
//! prefix  := name | '*' | uri
//! local   := name | '*'
//! ```
//!
//! Steps after `/` are absolute until the first accepted `//`; from then on
//! they are relative and take no braced namespace, since relative steps render
//! without braces. A leading `PATH:` tag (as produced by rendering) is skipped;
//! the bare tag is the empty chain.

use pathchain_core::{Axis, DEFAULT_PATH_FIELD};

use super::error::ParseError;
use super::lexer::{Token, TokenKind, lex, token_text};
use super::options::ParseOptions;
use crate::query::{AppendOutcome, PathQuery, Rejection};

const EXPECTED_SEGMENT: &str = "'/', '//' or '.'";
const EXPECTED_STEP: &str = "a name, namespace or '*'";
const EXPECTED_LOCAL: &str = "a local name or '*'";
const EXPECTED_RELATIVE_STEP: &str = "a prefix name or '*'";

/// A step the chain refused to link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dropped {
    /// Byte offset of the step in the source.
    pub offset: usize,
    pub rejection: Rejection,
}

/// Outcome of a successful parse.
#[derive(Clone, Debug)]
pub struct Parsed {
    pub query: PathQuery,
    pub dropped: Vec<Dropped>,
}

/// Parse with default options.
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    parse_with(source, &ParseOptions::default())
}

pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Parsed, ParseError> {
    let mut query = PathQuery::new();
    query.set_path_field(options.path_field.as_str());
    query.set_repeats(options.repeats);

    let mut parser = Parser {
        source,
        tokens: lex(source),
        pos: 0,
        query,
        dropped: Vec::new(),
        steps: 0,
        max_steps: options.max_steps,
        relative: false,
    };
    parser.parse_path()?;

    let Parser {
        mut query, dropped, ..
    } = parser;
    if options.strip_descendant_suffix {
        query.remove_descendant_and_self();
    }

    tracing::debug!(
        source,
        steps = query.step_count(),
        dropped = dropped.len(),
        "parsed path expression"
    );
    Ok(Parsed { query, dropped })
}

struct Parser<'s> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
    query: PathQuery,
    dropped: Vec<Dropped>,
    steps: usize,
    max_steps: usize,
    /// Set once the chain accepts a `//`.
    relative: bool,
}

impl<'s> Parser<'s> {
    fn parse_path(&mut self) -> Result<(), ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        self.skip_field_tag();

        while let Some(token) = self.bump() {
            match token.kind {
                TokenKind::Slash => match self.peek_kind() {
                    Some(TokenKind::Dot) => {
                        let dot = self.bump_expect(TokenKind::Dot)?;
                        self.push(dot, Axis::SelfAxis, None, None)?;
                    }
                    Some(_) => self.parse_step(self.step_axis())?,
                    None => {
                        return Err(ParseError::UnexpectedEnd {
                            expected: EXPECTED_STEP,
                        });
                    }
                },
                TokenKind::DoubleSlash => {
                    if self
                        .push(token, Axis::DescendantOrSelf, None, None)?
                        .is_appended()
                    {
                        self.relative = true;
                    }
                    match self.peek_kind() {
                        Some(TokenKind::Dot) => {
                            let dot = self.bump_expect(TokenKind::Dot)?;
                            self.push(dot, Axis::SelfAxis, None, None)?;
                        }
                        Some(TokenKind::Star | TokenKind::Name | TokenKind::Uri) => {
                            self.parse_step(self.step_axis())?;
                        }
                        _ => {}
                    }
                }
                TokenKind::Dot => {
                    self.push(token, Axis::SelfAxis, None, None)?;
                }
                _ => return Err(self.unexpected(token, EXPECTED_SEGMENT)),
            }
        }
        Ok(())
    }

    fn step_axis(&self) -> Axis {
        if self.relative {
            Axis::Relative
        } else {
            Axis::Absolute
        }
    }

    fn parse_step(&mut self, axis: Axis) -> Result<(), ParseError> {
        let first = self.bump_or_end(EXPECTED_STEP)?;
        let first_text = match first.kind {
            TokenKind::Star => None,
            TokenKind::Name => Some(self.text(&first)),
            TokenKind::Uri if axis == Axis::Relative => {
                return Err(self.unexpected(first, EXPECTED_RELATIVE_STEP));
            }
            TokenKind::Uri => uri_text(self.text(&first)),
            _ => return Err(self.unexpected(first, EXPECTED_STEP)),
        };

        if self.peek_kind() != Some(TokenKind::Colon) {
            if first.kind == TokenKind::Uri {
                return match self.peek() {
                    Some(next) => Err(self.unexpected(next, "':'")),
                    None => Err(ParseError::UnexpectedEnd { expected: "':'" }),
                };
            }
            self.push(first, axis, None, first_text)?;
            return Ok(());
        }

        self.bump_expect(TokenKind::Colon)?;
        let local = self.bump_or_end(EXPECTED_LOCAL)?;
        let local_text = match local.kind {
            TokenKind::Star => None,
            TokenKind::Name => Some(self.text(&local)),
            _ => return Err(self.unexpected(local, EXPECTED_LOCAL)),
        };
        self.push(first, axis, first_text, local_text)?;
        Ok(())
    }

    fn push(
        &mut self,
        at: Token,
        axis: Axis,
        node_test: Option<&str>,
        value_test: Option<&str>,
    ) -> Result<AppendOutcome, ParseError> {
        self.steps += 1;
        if self.steps > self.max_steps {
            return Err(ParseError::TooManySteps {
                limit: self.max_steps,
            });
        }

        let outcome = self.query.append_step(axis, node_test, value_test);
        if let AppendOutcome::Rejected(rejection) = outcome {
            self.dropped.push(Dropped {
                offset: at.start,
                rejection,
            });
        }
        Ok(outcome)
    }

    /// Skip a leading `PATH:` tag.
    fn skip_field_tag(&mut self) {
        if let [name, colon, ..] = self.tokens.as_slice()
            && name.kind == TokenKind::Name
            && colon.kind == TokenKind::Colon
            && self.text(name) == DEFAULT_PATH_FIELD
        {
            self.pos = 2;
        }
    }

    fn text(&self, token: &Token) -> &'s str {
        token_text(self.source, token)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn bump_or_end(&mut self, expected: &'static str) -> Result<Token, ParseError> {
        self.bump().ok_or(ParseError::UnexpectedEnd { expected })
    }

    fn bump_expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.bump_or_end(kind.describe())?;
        if token.kind != kind {
            return Err(self.unexpected(token, kind.describe()));
        }
        Ok(token)
    }

    fn unexpected(&self, token: Token, expected: &'static str) -> ParseError {
        let found = match token.kind {
            TokenKind::Garbage | TokenKind::Name | TokenKind::Uri => {
                format!("'{}'", self.text(&token))
            }
            kind => kind.describe().to_owned(),
        };
        ParseError::UnexpectedToken {
            offset: token.start,
            found,
            expected,
        }
    }
}

/// Namespace text inside braces; `{}` and `{*}` are wildcards.
fn uri_text(braced: &str) -> Option<&str> {
    let inner = braced
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(braced);
    match inner {
        "" | "*" => None,
        uri => Some(uri),
    }
}
