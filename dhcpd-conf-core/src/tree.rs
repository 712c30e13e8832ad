//! Statement tree produced by the parser.
//!
//! Blocks nest without limit, so traversals here keep their own work stack
//! instead of recursing per level.

use std::fmt::{self, Display, Formatter};

/// A parsed configuration file: the top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub statements: Vec<Statement>,
}

/// One statement of the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A line terminated by `;`.
    Line(Line),
    /// A line followed by a `{ ... }` body.
    Block(Block),
}

/// A block header together with its body statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: Line,
    pub body: Vec<Statement>,
}

/// The shapes a line may take, before either `;` or `{`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `option KEY VALUE, ...` or `hardware KEY VALUE, ...`.
    Option {
        keyword: OptionKeyword,
        key: String,
        values: Vec<String>,
    },
    /// Generic `KEY VALUE`, e.g. `host unit1` or `fixed-address 10.0.0.5`.
    Pair { key: String, value: String },
    /// `subnet VALUE netmask VALUE`.
    Subnet { subnet: String, netmask: String },
    /// Bare `pool` or `group`.
    Single(BlockKeyword),
    /// `range VALUE VALUE`.
    Range { start: String, end: String },
}

/// Leading keyword of a [`Line::Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKeyword {
    Option,
    Hardware,
}

/// Keyword of a parameterless [`Line::Single`] block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKeyword {
    Pool,
    Group,
}

impl OptionKeyword {
    /// The keyword as written in a config file.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKeyword::Option => "option",
            OptionKeyword::Hardware => "hardware",
        }
    }
}

impl BlockKeyword {
    /// The keyword as written in a config file.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKeyword::Pool => "pool",
            BlockKeyword::Group => "group",
        }
    }
}

impl Statement {
    /// Search the subtree rooted at this statement for the first line that
    /// `pick` accepts.
    ///
    /// Traversal is pre-order and left to right: a block's header is tried
    /// before its body, and nested blocks are searched all the way down.
    pub fn find_first<'a, T>(&'a self, pick: &impl Fn(&'a Line) -> Option<T>) -> Option<T> {
        let mut pending = vec![self];
        while let Some(statement) = pending.pop() {
            match statement {
                Statement::Line(line) => {
                    if let Some(found) = pick(line) {
                        return Some(found);
                    }
                }
                Statement::Block(block) => {
                    if let Some(found) = pick(&block.header) {
                        return Some(found);
                    }
                    pending.extend(block.body.iter().rev());
                }
            }
        }
        None
    }
}

// Tear nested bodies down level by level; the derived drop would recurse.
impl Drop for Block {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.body);
        while let Some(statement) = pending.pop() {
            if let Statement::Block(mut block) = statement {
                pending.append(&mut block.body);
            }
        }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Line::Option {
                keyword,
                key,
                values,
            } => {
                write!(f, "{} {} ", keyword.as_str(), key)?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write_value(f, value)?;
                }
                Ok(())
            }
            Line::Pair { key, value } => {
                write!(f, "{key} ")?;
                write_value(f, value)
            }
            Line::Subnet { subnet, netmask } => {
                write!(f, "subnet ")?;
                write_value(f, subnet)?;
                write!(f, " netmask ")?;
                write_value(f, netmask)
            }
            Line::Single(keyword) => write!(f, "{}", keyword.as_str()),
            Line::Range { start, end } => {
                write!(f, "range ")?;
                write_value(f, start)?;
                write!(f, " ")?;
                write_value(f, end)
            }
        }
    }
}

enum Render<'a> {
    Statement(&'a Statement),
    Text(&'static str),
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Render::Statement(self)];
        while let Some(item) = pending.pop() {
            match item {
                Render::Text(text) => write!(f, "{text}")?,
                Render::Statement(Statement::Line(line)) => write!(f, "{line};")?,
                Render::Statement(Statement::Block(block)) => {
                    write!(f, "{} {{", block.header)?;
                    pending.push(Render::Text(" }"));
                    for child in block.body.iter().rev() {
                        pending.push(Render::Statement(child));
                        pending.push(Render::Text(" "));
                    }
                }
            }
        }
        Ok(())
    }
}

// Values that would not survive re-lexing as a bare word are quoted.
fn write_value(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '_'));
    if bare {
        return write!(f, "{value}");
    }
    write!(f, "\"")?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            write!(f, "\\")?;
        }
        write!(f, "{c}")?;
    }
    write!(f, "\"")
}
