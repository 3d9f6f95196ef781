use std::path::Path;

use lift_core::tree::{SyntaxTree, TreeError};
use tree_sitter::{Language, Node, Parser};

mod lower;

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Parse `source` and lower it into a [`SyntaxTree`].
    ///
    /// Sources with syntax errors are rejected: the rules patch text by
    /// offset and must not run against a recovered tree.
    pub fn parse(&mut self, lang_name: &str, source: &str) -> Result<SyntaxTree, ParseError> {
        let lang = language_for_name(lang_name)?;
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = self
            .parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::ParseFailed)?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root).start_position();
            return Err(ParseError::Syntax {
                line: at.row as u32 + 1,
                column: at.column as u32 + 1,
            });
        }

        Ok(lower::lower(root, source)?)
    }

    /// Parse a file's contents, picking the grammar from its extension.
    pub fn parse_file(&mut self, path: &Path, source: &str) -> Result<SyntaxTree, ParseError> {
        let lang = detect_language(path)
            .ok_or_else(|| ParseError::UnsupportedLanguage(path.display().to_string()))?;
        self.parse(lang, source)
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
    #[error("syntax error at {line}:{column}")]
    Syntax { line: u32, column: u32 },
    #[error(transparent)]
    Tree(#[from] TreeError),
}

fn language_for_name(name: &str) -> Result<Language, ParseError> {
    match name {
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        other => Err(ParseError::UnsupportedLanguage(other.to_string())),
    }
}

pub fn detect_language(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        _ => None,
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .filter(|c| c.has_error() || c.is_missing())
        .find_map(first_error);
    found
}
