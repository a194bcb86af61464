use super::*;
use crate::rules::{Diagnostic, Severity};
use crate::syntax::{DeclarationKind, NodeId, NodeKind, Role, SyntaxNode, SyntaxTree, TreeBuilder};

fn number(value: f64) -> SyntaxNode {
    SyntaxNode::literal(LiteralValue::Number(value))
}

fn text(value: &str) -> SyntaxNode {
    SyntaxNode::literal(LiteralValue::Text(value.to_string()))
}

/// `status === <literal>` inside an expression statement.
fn comparison(literal: SyntaxNode) -> (SyntaxTree, NodeId) {
    let mut b = TreeBuilder::new();
    let program = b.root(SyntaxNode::new(NodeKind::Program));
    let statement = b.push(program, SyntaxNode::new(NodeKind::ExpressionStatement));
    let binary = b.push(
        statement,
        SyntaxNode::new(NodeKind::Other("binary_expression".into())).with_role(Role::Expression),
    );
    b.push(binary, SyntaxNode::identifier("status").with_role(Role::Left));
    let id = b.push(binary, literal.with_role(Role::Right));
    (b.finish(), id)
}

fn index_access(index: f64) -> (SyntaxTree, NodeId) {
    let mut b = TreeBuilder::new();
    let program = b.root(SyntaxNode::new(NodeKind::Program));
    let statement = b.push(program, SyntaxNode::new(NodeKind::ExpressionStatement));
    let member = b.push(
        statement,
        SyntaxNode::new(NodeKind::MemberExpression)
            .computed()
            .with_role(Role::Expression),
    );
    b.push(member, SyntaxNode::identifier("arr").with_role(Role::Object));
    let id = b.push(member, number(index).with_role(Role::Property));
    (b.finish(), id)
}

fn default_parameter(literal: SyntaxNode) -> (SyntaxTree, NodeId) {
    let mut b = TreeBuilder::new();
    let program = b.root(SyntaxNode::new(NodeKind::Program));
    let function = b.push(program, SyntaxNode::new(NodeKind::FunctionDeclaration));
    let pattern = b.push(
        function,
        SyntaxNode::new(NodeKind::AssignmentPattern).with_role(Role::Param(0)),
    );
    b.push(pattern, SyntaxNode::identifier("x").with_role(Role::Left));
    let id = b.push(pattern, literal.with_role(Role::Right));
    (b.finish(), id)
}

fn strict() -> MagicValueOptions {
    MagicValueOptions {
        ignore_numbers: Vec::new(),
        ignore_array_indexes: false,
        ignore_default_values: false,
    }
}

fn magic(display: &str, kind: ValueKind) -> Verdict {
    Verdict::Magic {
        kind,
        display: display.to_string(),
    }
}

#[test]
fn default_options() {
    let options = MagicValueOptions::default();
    assert_eq!(options.ignore_numbers, vec![-1.0, 0.0, 1.0, 2.0]);
    assert!(options.ignore_array_indexes);
    assert!(options.ignore_default_values);
}

#[test]
fn options_parse_camel_case() {
    let options: MagicValueOptions =
        toml::from_str("ignoreNumbers = [0, 100]\nignoreArrayIndexes = false").unwrap();
    assert_eq!(options.ignore_numbers, vec![0.0, 100.0]);
    assert!(!options.ignore_array_indexes);
    assert!(options.ignore_default_values);
}

#[test]
fn options_reject_unknown_keys() {
    let parsed: std::result::Result<MagicValueOptions, _> = toml::from_str("ignoreStrings = true");
    assert!(parsed.is_err());
}

#[test]
fn comparison_number_is_magic() {
    let (tree, id) = comparison(number(200.0));
    assert_eq!(
        classify(tree.get(id), &MagicValueOptions::default(), LiteralKinds::Numbers),
        magic("200", ValueKind::Number)
    );
}

#[test]
fn ignored_numbers_are_always_exempt() {
    let options = MagicValueOptions {
        ignore_numbers: vec![200.0],
        ..strict()
    };
    let (tree, id) = comparison(number(200.0));
    assert_eq!(
        classify(tree.get(id), &options, LiteralKinds::NumbersAndStrings),
        Verdict::Exempt
    );
}

#[test]
fn const_declaration_is_exempt() {
    let mut b = TreeBuilder::new();
    let program = b.root(SyntaxNode::new(NodeKind::Program));
    let decl = b.push(
        program,
        SyntaxNode::new(NodeKind::VariableDeclaration).with_declaration(DeclarationKind::Const),
    );
    let declarator = b.push(decl, SyntaxNode::new(NodeKind::VariableDeclarator));
    b.push(declarator, SyntaxNode::identifier("TIMEOUT").with_role(Role::Id));
    let number_id = b.push(declarator, number(3000.0).with_role(Role::Init));
    let tree = b.finish();

    assert_eq!(
        classify(tree.get(number_id), &strict(), LiteralKinds::NumbersAndStrings),
        Verdict::Exempt
    );
}

#[test]
fn array_index_follows_option() {
    let (tree, id) = index_access(5.0);
    assert_eq!(
        classify(tree.get(id), &MagicValueOptions::default(), LiteralKinds::Numbers),
        Verdict::Exempt
    );
    assert_eq!(
        classify(tree.get(id), &strict(), LiteralKinds::Numbers),
        magic("5", ValueKind::Number)
    );
}

#[test]
fn default_value_follows_option_for_both_kinds() {
    let (tree, id) = default_parameter(number(10.0));
    let verdict = classify(tree.get(id), &MagicValueOptions::default(), LiteralKinds::Numbers);
    assert!(!verdict.is_magic());
    assert!(classify(tree.get(id), &strict(), LiteralKinds::Numbers).is_magic());

    let (tree, id) = default_parameter(text("guest"));
    let options = MagicValueOptions::default();
    assert!(!classify(tree.get(id), &options, LiteralKinds::NumbersAndStrings).is_magic());
    assert_eq!(
        classify(tree.get(id), &strict(), LiteralKinds::NumbersAndStrings),
        magic("\"guest\"", ValueKind::Text)
    );
}

#[test]
fn strings_are_skipped_in_numbers_mode() {
    let (tree, id) = comparison(text("admin"));
    assert_eq!(
        classify(tree.get(id), &strict(), LiteralKinds::Numbers),
        Verdict::Exempt
    );
    assert_eq!(
        classify(tree.get(id), &strict(), LiteralKinds::NumbersAndStrings),
        magic("\"admin\"", ValueKind::Text)
    );
}

#[test]
fn empty_string_is_exempt() {
    let (tree, id) = comparison(text(""));
    assert_eq!(
        classify(tree.get(id), &strict(), LiteralKinds::NumbersAndStrings),
        Verdict::Exempt
    );
}

#[test]
fn directive_string_is_exempt_under_strict_options() {
    let mut b = TreeBuilder::new();
    let program = b.root(SyntaxNode::new(NodeKind::Program));
    let statement = b.push(program, SyntaxNode::new(NodeKind::ExpressionStatement));
    let id = b.push(statement, text("use strict").with_role(Role::Expression));
    let tree = b.finish();

    assert_eq!(
        classify(tree.get(id), &strict(), LiteralKinds::NumbersAndStrings),
        Verdict::Exempt
    );
}

#[test]
fn non_literal_node_is_exempt() {
    let (tree, _) = comparison(number(200.0));
    let root = tree.root().unwrap();
    assert_eq!(
        classify(root, &strict(), LiteralKinds::NumbersAndStrings),
        Verdict::Exempt
    );
}

#[test]
fn classification_is_deterministic() {
    let (tree, id) = comparison(number(42.0));
    let options = MagicValueOptions::default();
    let first = classify(tree.get(id), &options, LiteralKinds::NumbersAndStrings);
    for _ in 0..3 {
        assert_eq!(
            classify(tree.get(id), &options, LiteralKinds::NumbersAndStrings),
            first
        );
    }
}

fn run(rule: &dyn Rule, tree: &SyntaxTree, meta: &'static RuleMeta) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut ctx = RuleContext::new("", tree, meta, Severity::Warn, &mut diagnostics);
    for node in tree.nodes() {
        rule.check_node(node, &mut ctx);
    }
    diagnostics
}

#[test]
fn values_rule_reports_strings_and_numbers() {
    let (tree, _) = comparison(text("admin"));
    let diagnostics = run(&NoMagicValues::default(), &tree, &VALUES_META);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule_id, "human-first/no-magic-values");
    assert_eq!(diagnostics[0].message_id, MessageId::NoMagicString);
    assert_eq!(
        diagnostics[0].message,
        "No magic string: \"admin\". Extract to a named constant."
    );
    assert_eq!(diagnostics[0].severity, Severity::Warn);
}

#[test]
fn numbers_rule_ignores_strings() {
    let (tree, _) = comparison(text("admin"));
    assert!(run(&NoMagicNumbers::default(), &tree, &NUMBERS_META).is_empty());

    let (tree, _) = comparison(number(1.5));
    let diagnostics = run(&NoMagicNumbers::default(), &tree, &NUMBERS_META);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "No magic number: 1.5. Extract to a named constant."
    );
}
