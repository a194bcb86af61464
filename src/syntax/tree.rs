use std::fmt;

use super::kind::{DeclarationKind, NodeKind, Role};

/// 1-based line and column of a source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Byte range of a node or comment, plus its line/column bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub start_pos: Position,
    pub end_pos: Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            start_pos: Position::new(1, start + 1),
            end_pos: Position::new(1, end + 1),
        }
    }

    #[must_use]
    pub const fn with_positions(mut self, start_pos: Position, end_pos: Position) -> Self {
        self.start_pos = start_pos;
        self.end_pos = end_pos;
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// The value carried by a numeric or string literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    Text(String),
}

impl LiteralValue {
    /// The form used in diagnostics: JavaScript `String(n)` for numbers,
    /// double-quoted text for strings.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) => format_js_number(*n),
            Self::Text(s) => format!("\"{s}\""),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn format_js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{n:e}");
        return if formatted.contains("e-") {
            formatted
        } else {
            formatted.replacen('e', "e+", 1)
        };
    }
    if n.fract() == 0.0 {
        return format!("{n:.0}");
    }
    format!("{n}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Per-node flags that only some kinds use.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeFlags {
    /// `a[b]` member access or `{ [k]: v }` property.
    pub computed: bool,
    pub is_async: bool,
    pub generator: bool,
    /// `static` class member.
    pub is_static: bool,
    pub getter: bool,
    pub setter: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    kind: NodeKind,
    role: Role,
    span: Span,
    value: Option<LiteralValue>,
    name: Option<String>,
    declaration: Option<DeclarationKind>,
    flags: NodeFlags,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SyntaxNode {
    #[must_use]
    pub const fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            role: Role::Child,
            span: Span::new(0, 0),
            value: None,
            name: None,
            declaration: None,
            flags: NodeFlags {
                computed: false,
                is_async: false,
                generator: false,
                is_static: false,
                getter: false,
                setter: false,
            },
            parent: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn literal(value: LiteralValue) -> Self {
        let mut node = Self::new(NodeKind::Literal);
        node.value = Some(value);
        node
    }

    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Identifier).with_name(name)
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_declaration(mut self, kind: DeclarationKind) -> Self {
        self.declaration = Some(kind);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn computed(mut self) -> Self {
        self.flags.computed = true;
        self
    }
}

/// A syntax comment, with delimiters stripped from `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
    Shebang,
}

/// Arena of nodes in tree order. Parents always precede their children.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    comments: Vec<Comment>,
}

impl SyntaxTree {
    /// The root node, `None` for an empty tree.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_>> {
        (!self.nodes.is_empty()).then(|| self.get(NodeId(0)))
    }

    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.0 < self.nodes.len(), "node id out of range");
        NodeRef { tree: self, id }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in tree order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef {
            tree: self,
            id: NodeId(i),
        })
    }

    /// Numeric and string literals in tree order.
    pub fn literals(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.nodes().filter(|node| node.value().is_some())
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

/// Borrowed handle to a node that can navigate the tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn data(self) -> &'a SyntaxNode {
        &self.tree.nodes[self.id.0]
    }

    #[must_use]
    pub const fn id(self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn kind(self) -> &'a NodeKind {
        &self.data().kind
    }

    #[must_use]
    pub fn role(self) -> Role {
        self.data().role
    }

    #[must_use]
    pub fn span(self) -> Span {
        self.data().span
    }

    #[must_use]
    pub fn value(self) -> Option<&'a LiteralValue> {
        self.data().value.as_ref()
    }

    #[must_use]
    pub fn name(self) -> Option<&'a str> {
        self.data().name.as_deref()
    }

    #[must_use]
    pub fn declaration_kind(self) -> Option<DeclarationKind> {
        self.data().declaration
    }

    #[must_use]
    pub fn flags(self) -> NodeFlags {
        self.data().flags
    }

    #[must_use]
    pub fn is_computed(self) -> bool {
        self.data().flags.computed
    }

    #[must_use]
    pub fn is(self, kind: &NodeKind) -> bool {
        self.kind() == kind
    }

    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.data().parent.map(|id| Self {
            tree: self.tree,
            id,
        })
    }

    /// Ancestors from the parent up to the root.
    #[must_use]
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors {
            next: self.parent(),
        }
    }

    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    #[must_use]
    pub fn child_with_role(self, role: Role) -> Option<Self> {
        self.children().find(|child| child.role() == role)
    }

    /// Children in `Param(_)` slots, in declaration order.
    pub fn params(self) -> impl Iterator<Item = NodeRef<'a>> {
        self.children()
            .filter(|child| matches!(child.role(), Role::Param(_)))
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", self.kind())
            .field("role", &self.role())
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

/// Iterator over a node's ancestor chain.
///
/// Terminates because each parent index is strictly smaller than its child's.
pub struct Ancestors<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// Builds a [`SyntaxTree`] one node at a time, parents first.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: SyntaxTree,
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the root node.
    ///
    /// # Panics
    /// Panics if a root was already added.
    pub fn root(&mut self, node: SyntaxNode) -> NodeId {
        assert!(self.tree.nodes.is_empty(), "tree already has a root");
        self.tree.nodes.push(node);
        NodeId(0)
    }

    /// Append `node` as the last child of `parent`.
    pub fn push(&mut self, parent: NodeId, mut node: SyntaxNode) -> NodeId {
        let id = NodeId(self.tree.nodes.len());
        node.parent = Some(parent);
        self.tree.nodes.push(node);
        self.tree.nodes[parent.0].children.push(id);
        id
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.tree.comments.push(comment);
    }

    #[must_use]
    pub fn finish(mut self) -> SyntaxTree {
        self.tree.comments.sort_by_key(|c| c.span.start);
        self.tree
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
