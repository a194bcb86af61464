//! tree-sitter front end: picks a grammar by file extension and converts the
//! concrete syntax tree into the ESTree-shaped [`SyntaxTree`].

mod convert;
mod literal;

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tree_sitter::{Node, Parser};

use crate::error::{HumanFirstError, Result};
use crate::syntax::SyntaxTree;

pub use literal::{parse_number, unescape};

/// Longest source excerpt quoted in a syntax error.
const EXCERPT_LIMIT: usize = 24;

/// Source dialect, each backed by its own grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLanguage {
    /// JavaScript with JSX.
    JavaScript,
    TypeScript,
    Tsx,
}

impl SourceLanguage {
    /// Extensions handled when no `[files] extensions` list is configured.
    pub const DEFAULT_EXTENSIONS: &'static [&'static str] =
        &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    fn grammar(self) -> tree_sitter::Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Tsx => "TSX",
        })
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load {language} grammar: {source}")]
    Grammar {
        language: SourceLanguage,
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("parser produced no tree")]
    NoTree,

    #[error("{line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

/// Parse `source` in the given dialect.
///
/// # Errors
/// Returns [`ParseError::Syntax`] at the first error or missing node when the
/// source does not parse cleanly.
pub fn parse_source(
    source: &str,
    language: SourceLanguage,
) -> std::result::Result<SyntaxTree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&language.grammar())
        .map_err(|source| ParseError::Grammar { language, source })?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(syntax_error(root, source));
    }

    Ok(convert::Converter::new(source).convert(root))
}

/// Parse a file's contents, choosing the dialect from its extension.
///
/// # Errors
/// Returns an error if the extension is not a supported dialect or the
/// source has syntax errors.
pub fn parse_file(path: &Path, source: &str) -> Result<SyntaxTree> {
    let language = SourceLanguage::from_path(path)
        .ok_or_else(|| HumanFirstError::UnsupportedLanguage(path.to_path_buf()))?;
    parse_source(source, language).map_err(|e| HumanFirstError::parse(path, e.to_string()))
}

fn syntax_error(root: Node<'_>, source: &str) -> ParseError {
    let Some(node) = first_error(root) else {
        return ParseError::Syntax {
            line: 1,
            column: 1,
            message: "syntax error".to_string(),
        };
    };

    let position = node.start_position();
    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let excerpt: String = source[node.byte_range()]
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(EXCERPT_LIMIT)
            .collect();
        if excerpt.trim().is_empty() {
            "unexpected token".to_string()
        } else {
            format!("unexpected `{}`", excerpt.trim())
        }
    };

    ParseError::Syntax {
        line: position.row + 1,
        column: position.column + 1,
        message,
    }
}

/// First error or missing node in document order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
