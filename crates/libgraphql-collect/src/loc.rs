use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// A line/column position within some GraphQL source text, optionally paired
/// with the path of the file the text was read from.
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// carries the file path along with it.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where some schema or executable-document element was defined (or
/// referenced).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Implicitly defined by the GraphQL specification (e.g. the `Boolean`
    /// scalar or the `@skip` directive).
    GraphQLBuiltIn,

    Position(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_ast_position(
        file: Option<&Path>,
        pos: &ast::AstPos,
    ) -> Self {
        Self::Position(FilePosition {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        })
    }

    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Position(file_pos) => Some(file_pos),
        }
    }

    /// Produce a new [`SourceLocation`] in the same file as this one, but at a
    /// different line/column.
    pub(crate) fn with_ast_position(&self, pos: &ast::AstPos) -> Self {
        let file = self.file_position().and_then(|file_pos| file_pos.file.as_deref());
        Self::from_ast_position(file, pos)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::Position(file_pos) => file_pos.fmt(f),
        }
    }
}

/// The lines of some GraphQL source text, for recovering positions the
/// parser doesn't record.
#[derive(Debug)]
pub(crate) struct SourceLines<'src> {
    lines: Vec<&'src str>,
}
impl<'src> SourceLines<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            lines: source.lines().collect(),
        }
    }

    /// The position of the `...` token ending just before `pos`, skipping
    /// any whitespace, commas, and comments in between.
    ///
    /// The parser positions fragment spreads and inline fragments at the
    /// token following their `...`.
    pub(crate) fn ellipsis_before(&self, pos: &ast::AstPos) -> Option<ast::AstPos> {
        let line_idx = pos.line.checked_sub(1)?;
        let line = self.lines.get(line_idx)?;
        let head_end = line.char_indices()
            .nth(pos.column.saturating_sub(1))
            .map_or(line.len(), |(byte_idx, _)| byte_idx);

        // Comments run to the end of a line, so only ignored characters can
        // sit between `...` and the token on the token's own line.
        let head = trim_ignored(&line[..head_end]);
        if !head.is_empty() {
            return ellipsis_at_end(head, pos.line);
        }

        for line_idx in (0..line_idx).rev() {
            let line = self.lines[line_idx];
            let code = trim_ignored(&line[..comment_start(line).unwrap_or(line.len())]);
            if !code.is_empty() {
                return ellipsis_at_end(code, line_idx + 1);
            }
        }

        None
    }
}

/// Byte offset of the `#` opening a comment on `line`, ignoring any `#`
/// within a string value.
fn comment_start(line: &str) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    for (byte_idx, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '#' if !in_string => return Some(byte_idx),
            _ => (),
        }
    }
    None
}

fn ellipsis_at_end(text: &str, line: usize) -> Option<ast::AstPos> {
    let before = text.strip_suffix("...")?;
    Some(ast::AstPos {
        column: before.chars().count() + 1,
        line,
    })
}

fn is_ignored(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '\u{feff}'
}

fn trim_ignored(text: &str) -> &str {
    text.trim_end_matches(is_ignored)
}
