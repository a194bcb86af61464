use super::*;
use crate::syntax::{DeclarationKind, NodeKind, Role};

fn const_declaration_tree() -> (SyntaxTree, NodeId) {
    let mut builder = TreeBuilder::new();
    let program = builder.root(SyntaxNode::new(NodeKind::Program));
    let declaration = builder.push(
        program,
        SyntaxNode::new(NodeKind::VariableDeclaration).with_declaration(DeclarationKind::Const),
    );
    let declarator = builder.push(declaration, SyntaxNode::new(NodeKind::VariableDeclarator));
    builder.push(
        declarator,
        SyntaxNode::identifier("TIMEOUT").with_role(Role::Id),
    );
    let literal = builder.push(
        declarator,
        SyntaxNode::literal(LiteralValue::Number(3000.0)).with_role(Role::Init),
    );
    (builder.finish(), literal)
}

#[test]
fn ancestors_walk_to_root() {
    let (tree, literal) = const_declaration_tree();
    let kinds: Vec<String> = tree
        .get(literal)
        .ancestors()
        .map(|node| node.kind().name().to_string())
        .collect();

    assert_eq!(
        kinds,
        vec!["VariableDeclarator", "VariableDeclaration", "Program"]
    );
}

#[test]
fn root_has_no_ancestors() {
    let (tree, _) = const_declaration_tree();
    let root = tree.root().unwrap();
    assert_eq!(root.ancestors().count(), 0);
    assert!(root.parent().is_none());
}

#[test]
fn empty_tree_has_no_root() {
    let tree = TreeBuilder::new().finish();
    assert!(tree.root().is_none());
    assert!(tree.is_empty());
}

#[test]
fn child_with_role_finds_slot() {
    let (tree, literal) = const_declaration_tree();
    let declarator = tree.get(literal).parent().unwrap();

    assert_eq!(declarator.child_with_role(Role::Init), Some(tree.get(literal)));
    assert_eq!(
        declarator.child_with_role(Role::Id).and_then(NodeRef::name),
        Some("TIMEOUT")
    );
    assert!(declarator.child_with_role(Role::Callee).is_none());
}

#[test]
fn literals_are_listed_in_tree_order() {
    let (tree, literal) = const_declaration_tree();
    let ids: Vec<NodeId> = tree.literals().map(NodeRef::id).collect();
    assert_eq!(ids, vec![literal]);
}

#[test]
fn comments_are_sorted_by_position() {
    let mut builder = TreeBuilder::new();
    builder.root(SyntaxNode::new(NodeKind::Program));
    builder.add_comment(Comment {
        kind: CommentKind::Line,
        value: " second".to_string(),
        span: Span::new(20, 29),
    });
    builder.add_comment(Comment {
        kind: CommentKind::Block,
        value: " first ".to_string(),
        span: Span::new(0, 11),
    });
    let tree = builder.finish();

    let values: Vec<&str> = tree.comments().iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec![" first ", " second"]);
}

#[test]
fn number_display_matches_javascript() {
    assert_eq!(LiteralValue::Number(200.0).display(), "200");
    assert_eq!(LiteralValue::Number(1.5).display(), "1.5");
    assert_eq!(LiteralValue::Number(0.1).display(), "0.1");
    assert_eq!(LiteralValue::Number(1e21).display(), "1e+21");
    assert_eq!(LiteralValue::Number(1.5e-7).display(), "1.5e-7");
    assert_eq!(LiteralValue::Number(-0.0).display(), "0");
}

#[test]
fn text_display_is_quoted() {
    assert_eq!(LiteralValue::Text("admin".into()).display(), "\"admin\"");
    assert_eq!(LiteralValue::Text(String::new()).display(), "\"\"");
}

#[test]
fn type_and_module_kind_groups() {
    assert!(NodeKind::EnumMember.is_type_construct());
    assert!(NodeKind::TypeConstruct("TSAsExpression".into()).is_type_construct());
    assert!(NodeKind::ExportAllDeclaration.is_module_syntax());
    assert!(!NodeKind::CallExpression.is_module_syntax());
}
