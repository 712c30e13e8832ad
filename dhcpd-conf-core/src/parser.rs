use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::lexer::{line_column, tokenize, Spanned, Token};
use crate::tree::{Block, BlockKeyword, Document, Line, OptionKeyword, Statement};

/// Errors that can occur while reading a configuration into a [`Document`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read input file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// A character sequence matched no token pattern.
    #[error("unrecognized input {fragment:?} at line {line}, column {column}")]
    Lex {
        line: usize,
        column: usize,
        fragment: String,
    },
    /// A token did not fit the grammar at its position.
    #[error("expected {expected} but found {found} at line {line}, column {column}")]
    Syntax {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },
    /// Input ended in the middle of a statement or block.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
    /// A `}` with no open block.
    #[error("unmatched '}}' at line {line}, column {column}")]
    UnmatchedClose { line: usize, column: usize },
}

/// Parse configuration text into a [`Document`].
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        source,
        tokens: &tokens,
        pos: 0,
    };
    let document = parser.document()?;
    tracing::debug!(
        tokens = tokens.len(),
        statements = document.statements.len(),
        "parsed dhcpd config"
    );
    Ok(document)
}

/// Parse a configuration file into a [`Document`].
pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Spanned],
    pos: usize,
}

impl<'a> Parser<'a> {
    // Open blocks live on an explicit stack so nesting depth is not bounded
    // by the call stack.
    fn document(&mut self) -> Result<Document, ParseError> {
        let mut statements = Vec::new();
        let mut stack: Vec<(Line, Vec<Statement>)> = Vec::new();

        while let Some(next) = self.peek() {
            if next.token == Token::RBrace {
                let (header, body) = stack.pop().ok_or_else(|| {
                    let (line, column) = line_column(self.source, next.span.start);
                    ParseError::UnmatchedClose { line, column }
                })?;
                self.pos += 1;
                let block = Statement::Block(Block { header, body });
                match stack.last_mut() {
                    Some((_, parent)) => parent.push(block),
                    None => statements.push(block),
                }
                continue;
            }

            let header = self.line()?;
            let next = self.bump("';' or '{'")?;
            match next.token {
                Token::Semicolon => {
                    let line = Statement::Line(header);
                    match stack.last_mut() {
                        Some((_, parent)) => parent.push(line),
                        None => statements.push(line),
                    }
                }
                Token::LBrace => stack.push((header, Vec::new())),
                _ => return Err(self.unexpected(next, "';' or '{'")),
            }
        }

        if !stack.is_empty() {
            return Err(ParseError::UnexpectedEof {
                expected: "'}'".to_string(),
            });
        }
        Ok(Document { statements })
    }

    fn line(&mut self) -> Result<Line, ParseError> {
        let first = self.bump("a statement")?;
        let token = &first.token;

        if token.is_keyword("option") || token.is_keyword("hardware") {
            let keyword = if token.is_keyword("option") {
                OptionKeyword::Option
            } else {
                OptionKeyword::Hardware
            };
            let key = self.key()?;
            let mut values = vec![self.value()?];
            while self.peek().is_some_and(|next| next.token == Token::Comma) {
                self.pos += 1;
                values.push(self.value()?);
            }
            return Ok(Line::Option {
                keyword,
                key,
                values,
            });
        }

        if token.is_keyword("subnet") {
            let subnet = self.value()?;
            self.keyword("netmask")?;
            let netmask = self.value()?;
            return Ok(Line::Subnet { subnet, netmask });
        }

        if token.is_keyword("pool") {
            return Ok(Line::Single(BlockKeyword::Pool));
        }
        if token.is_keyword("group") {
            return Ok(Line::Single(BlockKeyword::Group));
        }

        if token.is_keyword("range") {
            let start = self.value()?;
            let end = self.value()?;
            return Ok(Line::Range { start, end });
        }

        let Some(key) = token.as_key() else {
            return Err(self.unexpected(first, "a statement keyword"));
        };
        let value = self.value()?;
        Ok(Line::Pair {
            key: key.to_string(),
            value,
        })
    }

    fn key(&mut self) -> Result<String, ParseError> {
        let next = self.bump("a key")?;
        next.token
            .as_key()
            .map(str::to_string)
            .ok_or_else(|| self.unexpected(next, "a key"))
    }

    fn value(&mut self) -> Result<String, ParseError> {
        let next = self.bump("a value")?;
        next.token
            .as_value()
            .map(str::to_string)
            .ok_or_else(|| self.unexpected(next, "a value"))
    }

    fn keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        let expected = format!("'{keyword}'");
        let next = self.bump(&expected)?;
        if next.token.is_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(next, &expected))
        }
    }

    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self, expected: &str) -> Result<&'a Spanned, ParseError> {
        let next = self.peek().ok_or_else(|| ParseError::UnexpectedEof {
            expected: expected.to_string(),
        })?;
        self.pos += 1;
        Ok(next)
    }

    fn unexpected(&self, found: &Spanned, expected: &str) -> ParseError {
        let (line, column) = line_column(self.source, found.span.start);
        ParseError::Syntax {
            line,
            column,
            expected: expected.to_string(),
            found: found.token.describe(),
        }
    }
}
