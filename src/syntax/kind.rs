use std::fmt;

/// Node tags, named after their ESTree counterparts.
///
/// The set is closed for the constructs rules inspect and open through
/// [`NodeKind::TypeConstruct`] and [`NodeKind::Other`], which carry the grammar's
/// own name for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Literal,
    Identifier,
    ExpressionStatement,
    VariableDeclaration,
    VariableDeclarator,
    UnaryExpression,
    ObjectExpression,
    Property,
    MemberExpression,
    CallExpression,
    AssignmentPattern,
    ImportDeclaration,
    ImportExpression,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
    JsxAttribute,
    JsxExpressionContainer,
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunctionExpression,
    MethodDefinition,
    /// `TSEnumMember`
    EnumMember,
    /// Any other static-type construct (`TSAsExpression`, `TSTypeAnnotation`,
    /// `TSModuleDeclaration`, ...).
    TypeConstruct(String),
    Other(String),
}

impl NodeKind {
    /// True for nodes that only exist in typed dialects.
    #[must_use]
    pub const fn is_type_construct(&self) -> bool {
        matches!(self, Self::EnumMember | Self::TypeConstruct(_))
    }

    /// True for import and export syntax, including dynamic `import()`.
    #[must_use]
    pub const fn is_module_syntax(&self) -> bool {
        matches!(
            self,
            Self::ImportDeclaration
                | Self::ImportExpression
                | Self::ExportNamedDeclaration
                | Self::ExportDefaultDeclaration
                | Self::ExportAllDeclaration
        )
    }

    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration
                | Self::FunctionExpression
                | Self::ArrowFunctionExpression
                | Self::MethodDefinition
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Program => "Program",
            Self::Literal => "Literal",
            Self::Identifier => "Identifier",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::VariableDeclarator => "VariableDeclarator",
            Self::UnaryExpression => "UnaryExpression",
            Self::ObjectExpression => "ObjectExpression",
            Self::Property => "Property",
            Self::MemberExpression => "MemberExpression",
            Self::CallExpression => "CallExpression",
            Self::AssignmentPattern => "AssignmentPattern",
            Self::ImportDeclaration => "ImportDeclaration",
            Self::ImportExpression => "ImportExpression",
            Self::ExportNamedDeclaration => "ExportNamedDeclaration",
            Self::ExportDefaultDeclaration => "ExportDefaultDeclaration",
            Self::ExportAllDeclaration => "ExportAllDeclaration",
            Self::JsxAttribute => "JSXAttribute",
            Self::JsxExpressionContainer => "JSXExpressionContainer",
            Self::FunctionDeclaration => "FunctionDeclaration",
            Self::FunctionExpression => "FunctionExpression",
            Self::ArrowFunctionExpression => "ArrowFunctionExpression",
            Self::MethodDefinition => "MethodDefinition",
            Self::EnumMember => "TSEnumMember",
            Self::TypeConstruct(name) | Self::Other(name) => name,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The keyword a `VariableDeclaration` was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
    Using,
}

impl DeclarationKind {
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "const" => Some(Self::Const),
            "let" => Some(Self::Let),
            "var" => Some(Self::Var),
            "using" => Some(Self::Using),
            _ => None,
        }
    }
}

/// The structural slot a node occupies inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// No named slot (statement lists, array elements, ...).
    #[default]
    Child,
    Id,
    Init,
    Key,
    Value,
    Object,
    Property,
    Callee,
    Argument(usize),
    Operand,
    Left,
    Right,
    Param(usize),
    Body,
    Source,
    Expression,
}
