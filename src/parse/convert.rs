//! tree-sitter CST to [`SyntaxTree`].
//!
//! The walk is iterative and pushes children in reverse, so nodes land in the
//! arena in pre-order. Grouping nodes (`parenthesized_expression`,
//! `computed_property_name`) are dropped and their inner expression takes
//! their slot; `arguments` and `formal_parameters` are flattened into indexed
//! slots on the call or function.

use tree_sitter::Node;

use crate::syntax::{
    Comment, CommentKind, DeclarationKind, LiteralValue, NodeFlags, NodeId, NodeKind, Position,
    Role, Span, SyntaxNode, SyntaxTree, TreeBuilder,
};

use super::literal::{parse_number, unescape};

const PROPERTY_DEFINITION: &str = "PropertyDefinition";
const PARAMETER_PROPERTY: &str = "TSParameterProperty";
const EXPORT_ASSIGNMENT: &str = "TSExportAssignment";
const NAMESPACE_EXPORT: &str = "TSNamespaceExportDeclaration";

/// Static-type constructs that do not follow the suffix conventions checked in
/// [`is_type_construct`].
const TYPE_CONSTRUCTS: &[&str] = &[
    "as_expression",
    "satisfies_expression",
    "non_null_expression",
    "type_assertion",
    "instantiation_expression",
    "enum_declaration",
    "enum_body",
    "interface_declaration",
    "interface_body",
    "type_alias_declaration",
    "internal_module",
    "module",
    "ambient_declaration",
    "type_parameters",
    "type_parameter",
    "type_arguments",
    "implements_clause",
    "extends_type_clause",
    "import_alias",
    "import_require_clause",
    "type_predicate",
    "asserts",
    "mapped_type_clause",
    "constraint",
    "nested_type_identifier",
    "accessibility_modifier",
    "override_modifier",
];

struct Frame<'t> {
    node: Node<'t>,
    parent: Option<NodeId>,
    role: Role,
}

pub(super) struct Converter<'s> {
    source: &'s str,
    builder: TreeBuilder,
}

impl<'s> Converter<'s> {
    pub(super) fn new(source: &'s str) -> Self {
        Self {
            source,
            builder: TreeBuilder::new(),
        }
    }

    pub(super) fn convert(mut self, root: Node<'_>) -> SyntaxTree {
        let mut stack = vec![Frame {
            node: root,
            parent: None,
            role: Role::Child,
        }];
        while let Some(frame) = stack.pop() {
            self.visit(frame, &mut stack);
        }
        self.builder.finish()
    }

    fn visit<'t>(&mut self, frame: Frame<'t>, stack: &mut Vec<Frame<'t>>) {
        let node = frame.node;
        match node.kind() {
            "comment" => {
                self.add_comment(node);
                return;
            }
            "hash_bang_line" => {
                self.add_shebang(node);
                return;
            }
            _ if !node.is_named() => return,
            _ => {}
        }

        let mut parent = frame.parent;
        let mut role = frame.role;
        if let Some(parent) = parent
            && is_grouping(node.kind())
        {
            push_grouped(node, parent, role, stack);
            return;
        }
        if let Some(outer) = parent
            && is_parameter_property(node)
        {
            let wrapper = SyntaxNode::new(NodeKind::TypeConstruct(PARAMETER_PROPERTY.into()))
                .with_role(role)
                .with_span(span(node));
            parent = Some(self.builder.push(outer, wrapper));
            role = Role::Child;
        }

        let mapped = self.map_node(node, role);
        let id = match parent {
            Some(parent) => self.builder.push(parent, mapped),
            None => self.builder.root(mapped),
        };
        if !matches!(node.kind(), "number" | "string") {
            push_children(node, id, stack);
        }
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        &self.source[node.byte_range()]
    }

    fn map_node(&self, node: Node<'_>, role: Role) -> SyntaxNode {
        let kind = node.kind();
        let mapped = match kind {
            "program" => SyntaxNode::new(NodeKind::Program),
            "number" => parse_number(self.text(node)).map_or_else(
                || SyntaxNode::new(NodeKind::Other(kind.to_string())),
                |value| SyntaxNode::literal(LiteralValue::Number(value)),
            ),
            "string" => SyntaxNode::literal(LiteralValue::Text(self.string_value(node))),
            "identifier"
            | "property_identifier"
            | "shorthand_property_identifier"
            | "shorthand_property_identifier_pattern"
            | "private_property_identifier"
            | "statement_identifier"
            | "type_identifier" => SyntaxNode::identifier(self.text(node)),
            "expression_statement" => SyntaxNode::new(NodeKind::ExpressionStatement),
            "lexical_declaration" | "variable_declaration" => {
                let mut declaration = SyntaxNode::new(NodeKind::VariableDeclaration);
                if let Some(keyword) = self.declaration_kind(node) {
                    declaration = declaration.with_declaration(keyword);
                }
                declaration
            }
            "variable_declarator" => SyntaxNode::new(NodeKind::VariableDeclarator),
            "unary_expression" => SyntaxNode::new(NodeKind::UnaryExpression),
            "object" => SyntaxNode::new(NodeKind::ObjectExpression),
            "pair" | "pair_pattern" => SyntaxNode::new(NodeKind::Property),
            "member_expression" | "subscript_expression" => {
                SyntaxNode::new(NodeKind::MemberExpression)
            }
            "call_expression" => {
                let dynamic_import = node
                    .child_by_field_name("function")
                    .is_some_and(|callee| callee.kind() == "import");
                SyntaxNode::new(if dynamic_import {
                    NodeKind::ImportExpression
                } else {
                    NodeKind::CallExpression
                })
            }
            "assignment_pattern" | "object_assignment_pattern" => {
                SyntaxNode::new(NodeKind::AssignmentPattern)
            }
            "required_parameter" | "optional_parameter"
                if node.child_by_field_name("value").is_some() =>
            {
                SyntaxNode::new(NodeKind::AssignmentPattern)
            }
            "import_statement" => SyntaxNode::new(NodeKind::ImportDeclaration),
            "export_statement" => SyntaxNode::new(export_kind(node)),
            "jsx_attribute" => SyntaxNode::new(NodeKind::JsxAttribute),
            "jsx_expression" => SyntaxNode::new(NodeKind::JsxExpressionContainer),
            "function_declaration" | "generator_function_declaration" => {
                SyntaxNode::new(NodeKind::FunctionDeclaration)
            }
            "function_expression" | "function" | "generator_function" => {
                SyntaxNode::new(NodeKind::FunctionExpression)
            }
            "arrow_function" => SyntaxNode::new(NodeKind::ArrowFunctionExpression),
            "method_definition" => SyntaxNode::new(NodeKind::MethodDefinition),
            "field_definition" | "public_field_definition" => {
                SyntaxNode::new(NodeKind::Other(PROPERTY_DEFINITION.into()))
            }
            "enum_assignment" => SyntaxNode::new(NodeKind::EnumMember),
            _ if is_type_construct(kind) => SyntaxNode::new(NodeKind::TypeConstruct(kind.into())),
            _ => SyntaxNode::new(NodeKind::Other(kind.into())),
        };

        mapped
            .with_role(role)
            .with_span(span(node))
            .with_flags(node_flags(node))
    }

    fn declaration_kind(&self, node: Node<'_>) -> Option<DeclarationKind> {
        if node.kind() == "variable_declaration" {
            return Some(DeclarationKind::Var);
        }
        let keyword = node.child_by_field_name("kind").or_else(|| node.child(0))?;
        DeclarationKind::from_keyword(self.text(keyword))
    }

    /// Cooked value of a string literal. JSX attribute strings take no escapes.
    fn string_value(&self, node: Node<'_>) -> String {
        let raw = self.text(node);
        let inner = if raw.len() >= 2 {
            &raw[1..raw.len() - 1]
        } else {
            ""
        };
        let in_jsx = node
            .parent()
            .is_some_and(|parent| parent.kind() == "jsx_attribute");
        if in_jsx {
            inner.to_string()
        } else {
            unescape(inner)
        }
    }

    fn add_comment(&mut self, node: Node<'_>) {
        let text = self.text(node);
        let (kind, value) = if let Some(body) = text.strip_prefix("//") {
            (CommentKind::Line, body.trim_end_matches('\r'))
        } else if let Some(body) = text.strip_prefix("/*") {
            (CommentKind::Block, body.strip_suffix("*/").unwrap_or(body))
        } else {
            (CommentKind::Line, text)
        };
        self.builder.add_comment(Comment {
            kind,
            value: value.to_string(),
            span: span(node),
        });
    }

    fn add_shebang(&mut self, node: Node<'_>) {
        let text = self.text(node);
        self.builder.add_comment(Comment {
            kind: CommentKind::Shebang,
            value: text.strip_prefix("#!").unwrap_or(text).to_string(),
            span: span(node),
        });
    }
}

fn span(node: Node<'_>) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(node.start_byte(), node.end_byte()).with_positions(
        Position::new(start.row + 1, start.column + 1),
        Position::new(end.row + 1, end.column + 1),
    )
}

fn is_grouping(kind: &str) -> bool {
    matches!(kind, "parenthesized_expression" | "computed_property_name")
}

fn is_type_construct(kind: &str) -> bool {
    kind.ends_with("_type")
        || kind.ends_with("_annotation")
        || kind.ends_with("_signature")
        || TYPE_CONSTRUCTS.contains(&kind)
}

/// `constructor(private x = 1)`: a parameter carrying a class-member modifier.
fn is_parameter_property(node: Node<'_>) -> bool {
    if !matches!(node.kind(), "required_parameter" | "optional_parameter") {
        return false;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| {
        matches!(child.kind(), "accessibility_modifier" | "override_modifier" | "readonly")
    })
}

fn export_kind(node: Node<'_>) -> NodeKind {
    let mut cursor = node.walk();
    let mut kind = NodeKind::ExportNamedDeclaration;
    for child in node.children(&mut cursor) {
        match child.kind() {
            "default" if !child.is_named() => return NodeKind::ExportDefaultDeclaration,
            "=" => return NodeKind::TypeConstruct(EXPORT_ASSIGNMENT.into()),
            "namespace" if !child.is_named() => {
                return NodeKind::TypeConstruct(NAMESPACE_EXPORT.into());
            }
            "*" | "namespace_export" => kind = NodeKind::ExportAllDeclaration,
            _ => {}
        }
    }
    kind
}

fn node_flags(node: Node<'_>) -> NodeFlags {
    let kind = node.kind();
    let mut flags = NodeFlags::default();

    let key_field = match kind {
        "subscript_expression" => {
            flags.computed = true;
            None
        }
        "pair" | "pair_pattern" => Some("key"),
        "method_definition" | "public_field_definition" => Some("name"),
        "field_definition" => Some("property"),
        _ => None,
    };
    if let Some(field) = key_field {
        flags.computed = node
            .child_by_field_name(field)
            .is_some_and(|key| key.kind() == "computed_property_name");
    }

    let has_modifiers = matches!(
        kind,
        "function_declaration"
            | "generator_function_declaration"
            | "function_expression"
            | "function"
            | "generator_function"
            | "arrow_function"
            | "method_definition"
            | "field_definition"
            | "public_field_definition"
    );
    if has_modifiers {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor).filter(|child| !child.is_named()) {
            match child.kind() {
                "async" => flags.is_async = true,
                "*" => flags.generator = true,
                "static" => flags.is_static = true,
                "get" => flags.getter = true,
                "set" => flags.setter = true,
                _ => {}
            }
        }
        if kind.starts_with("generator_function") {
            flags.generator = true;
        }
    }

    flags
}

/// Slot for a child reached through `field` of a `parent` node.
fn field_role(parent: &str, field: Option<&str>) -> Role {
    let Some(field) = field else {
        return Role::Child;
    };
    match (parent, field) {
        ("variable_declarator", "name") | ("enum_assignment", "name") => Role::Id,
        ("variable_declarator" | "enum_assignment", "value") => Role::Init,
        ("method_definition" | "public_field_definition", "name")
        | ("field_definition", "property")
        | (_, "key") => Role::Key,
        ("export_statement", "value") => Role::Expression,
        ("required_parameter" | "optional_parameter", "value") => Role::Right,
        ("required_parameter" | "optional_parameter", "pattern") => Role::Left,
        (_, "name") => Role::Id,
        (_, "value") => Role::Value,
        (_, "object") => Role::Object,
        (_, "property") | ("subscript_expression", "index") => Role::Property,
        (_, "function" | "constructor") => Role::Callee,
        (_, "argument") => Role::Operand,
        (_, "left") => Role::Left,
        (_, "right") => Role::Right,
        (_, "parameter") => Role::Param(0),
        (_, "body") => Role::Body,
        (_, "source") => Role::Source,
        _ => Role::Child,
    }
}

fn push_children<'t>(node: Node<'t>, id: NodeId, stack: &mut Vec<Frame<'t>>) {
    let parent_kind = node.kind();
    let mut frames = Vec::new();
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.is_named() {
                match child.kind() {
                    "arguments" => flatten_list(child, id, Role::Argument, &mut frames),
                    "formal_parameters" => flatten_list(child, id, Role::Param, &mut frames),
                    _ => frames.push(Frame {
                        node: child,
                        parent: Some(id),
                        role: field_role(parent_kind, cursor.field_name()),
                    }),
                }
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    stack.extend(frames.into_iter().rev());
}

/// Lift the entries of an argument or parameter list into indexed slots.
/// Comments inside the list do not take an index.
fn flatten_list<'t>(
    list: Node<'t>,
    parent: NodeId,
    slot: fn(usize) -> Role,
    frames: &mut Vec<Frame<'t>>,
) {
    let mut cursor = list.walk();
    let mut index = 0;
    for child in list.named_children(&mut cursor) {
        let role = if child.is_extra() {
            Role::Child
        } else {
            index += 1;
            slot(index - 1)
        };
        frames.push(Frame {
            node: child,
            parent: Some(parent),
            role,
        });
    }
}

/// Children of a grouping node; the grouped expression inherits the group's
/// slot.
fn push_grouped<'t>(node: Node<'t>, parent: NodeId, role: Role, stack: &mut Vec<Frame<'t>>) {
    let mut cursor = node.walk();
    let mut inherited = false;
    let frames: Vec<Frame<'t>> = node
        .named_children(&mut cursor)
        .map(|child| {
            let child_role = if !inherited && !child.is_extra() {
                inherited = true;
                role
            } else {
                Role::Child
            };
            Frame {
                node: child,
                parent: Some(parent),
                role: child_role,
            }
        })
        .collect();
    stack.extend(frames.into_iter().rev());
}
