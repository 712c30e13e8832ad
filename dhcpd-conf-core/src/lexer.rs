//! Tokenizer for the dhcpd configuration dialect.
//!
//! Whitespace and `#` comments are skipped here, so the parser never sees
//! them. Bare words are not split into keys and values at this stage: a
//! word such as `unit1` is a valid key and a valid value, and only the
//! grammar position decides which one the parser wants.

use logos::Logos;

use crate::parser::ParseError;

/// A single lexical token.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|#[^\n]*)")]
pub enum Token {
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    /// Double-quoted string, already unescaped and without the quotes.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, |lex| unescape(lex.slice()))]
    Quoted(String),
    /// Bare run of letters, digits, `.`, `:`, `_` and `-`.
    #[regex(r"[0-9A-Za-z.:_\-]+", |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    /// The word text if this token can stand in a `KEY` position.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Token::Word(word) if is_key(word) => Some(word),
            _ => None,
        }
    }

    /// The value text if this token can stand in a `VALUE` position.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Token::Quoted(text) => Some(text),
            Token::Word(word) if is_bare_value(word) => Some(word),
            _ => None,
        }
    }

    /// True if this is the bare word `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(word) if word == keyword)
    }

    /// Short human-readable description used in syntax errors.
    pub fn describe(&self) -> String {
        match self {
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::Semicolon => "';'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Quoted(text) => format!("string \"{text}\""),
            Token::Word(word) => format!("'{word}'"),
        }
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Split `source` into tokens.
///
/// Fails on the first character sequence that matches no token pattern,
/// reporting its line and column.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push(Spanned { token, span }),
            Err(()) => {
                let (line, column) = line_column(source, span.start);
                return Err(ParseError::Lex {
                    line,
                    column,
                    fragment: lexer.slice().to_string(),
                });
            }
        }
    }

    Ok(tokens)
}

/// Convert a byte offset into a 1-based `(line, column)` pair.
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => before[newline + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}

fn is_key(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

fn is_bare_value(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == ':' || c == '_')
}

fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("tokenize should succeed")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn tokenizes_host_block() {
        let tokens = kinds("host \"unit1\" {\n  hardware ethernet aa:bb:cc:dd:ee:ff;\n}");
        assert_eq!(
            tokens,
            vec![
                Token::Word("host".to_string()),
                Token::Quoted("unit1".to_string()),
                Token::LBrace,
                Token::Word("hardware".to_string()),
                Token::Word("ethernet".to_string()),
                Token::Word("aa:bb:cc:dd:ee:ff".to_string()),
                Token::Semicolon,
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn comments_are_dropped() {
        let tokens = kinds("# leading\nfixed-address 10.0.0.5; # trailing\n# last");
        assert_eq!(
            tokens,
            vec![
                Token::Word("fixed-address".to_string()),
                Token::Word("10.0.0.5".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn hash_inside_string_is_not_a_comment() {
        let tokens = kinds(r#"option domain-name "a#b";"#);
        assert_eq!(tokens[2], Token::Quoted("a#b".to_string()));
    }

    #[test]
    fn quoted_string_escapes_are_resolved() {
        let tokens = kinds(r#""say \"hi\" \\ ok""#);
        assert_eq!(tokens, vec![Token::Quoted(r#"say "hi" \ ok"#.to_string())]);
    }

    #[test]
    fn classifies_words() {
        let word = |s: &str| Token::Word(s.to_string());
        assert_eq!(word("fixed-address").as_key(), Some("fixed-address"));
        assert_eq!(word("fixed-address").as_value(), None);
        assert_eq!(word("10.0.0.5").as_key(), None);
        assert_eq!(word("10.0.0.5").as_value(), Some("10.0.0.5"));
        assert_eq!(word("unit1").as_key(), Some("unit1"));
        assert_eq!(word("unit1").as_value(), Some("unit1"));
        assert_eq!(word("10-20").as_key(), None);
        assert_eq!(word("10-20").as_value(), None);
        assert_eq!(Token::Quoted("x y".to_string()).as_key(), None);
    }

    #[test]
    fn reports_position_of_unknown_character() {
        let err = tokenize("host a {\n  fixed-address 10.0.0.1/24;\n}").unwrap_err();
        match err {
            ParseError::Lex {
                line,
                column,
                fragment,
            } => {
                assert_eq!((line, column), (2, 25));
                assert_eq!(fragment, "/");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_is_a_lexical_error() {
        assert!(matches!(
            tokenize("host \"open {"),
            Err(ParseError::Lex { line: 1, column: 6, .. })
        ));
    }

    #[test]
    fn line_column_counts_from_one() {
        assert_eq!(line_column("ab\ncd", 0), (1, 1));
        assert_eq!(line_column("ab\ncd", 4), (2, 2));
    }
}
