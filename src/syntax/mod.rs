//! Syntax model shared by every rule.
//!
//! Nodes live in an arena ([`SyntaxTree`]) and refer to their parent by index,
//! so walking the ancestor chain never needs ownership or reference counting.
//! Kinds follow ESTree naming; the `parse` module maps tree-sitter output onto
//! this model.

mod kind;
mod tree;

pub use kind::{DeclarationKind, NodeKind, Role};
pub use tree::{
    Ancestors, Comment, CommentKind, LiteralValue, NodeFlags, NodeId, NodeRef, Position, Span,
    SyntaxNode, SyntaxTree, TreeBuilder,
};
