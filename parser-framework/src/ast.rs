//! AST node types of the reference front end.
//!
//! Node categories are sum types rather than marker traits: a [`Node`] is a
//! statement, a declaration or an expression, and each category enumerates
//! the concrete nodes it can hold.

use crate::traits::AstNode;
use common_framework::{Position, Span};

/// A name, and where it appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub name_pos: Position,
}

impl AstNode for Identifier {
    fn start(&self) -> Position {
        self.name_pos
    }

    /// Identifiers never span lines.
    fn end(&self) -> Position {
        Position::at(
            self.name_pos.line,
            self.name_pos.column + self.name.chars().count(),
            self.name_pos.offset + self.name.len(),
        )
    }
}

/// `package <name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Position of the `package` keyword.
    pub token: Position,
    pub name: Identifier,
}

impl AstNode for Package {
    fn start(&self) -> Position {
        self.token
    }

    fn end(&self) -> Position {
        self.name.end()
    }
}

/// `struct <Name> {}`
///
/// A capitalized name makes the struct public. The body is not parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    /// Position of the `struct` keyword.
    pub token: Position,
    pub name: Identifier,
    pub public: bool,
    pub lbrace: Position,
    pub rbrace: Position,
}

impl AstNode for Struct {
    fn start(&self) -> Position {
        self.token
    }

    fn end(&self) -> Position {
        Position::at(
            self.rbrace.line,
            self.rbrace.column + 1,
            self.rbrace.offset + 1,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Package(Package),
    Struct(Struct),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declaration(Declaration),
    Expression(Expression),
}

/// Any top-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Statement(Statement),
    Declaration(Declaration),
    Expression(Expression),
}

impl AstNode for Expression {
    fn start(&self) -> Position {
        match self {
            Expression::Identifier(ident) => ident.start(),
        }
    }

    fn end(&self) -> Position {
        match self {
            Expression::Identifier(ident) => ident.end(),
        }
    }
}

impl AstNode for Declaration {
    fn start(&self) -> Position {
        match self {
            Declaration::Package(pkg) => pkg.start(),
            Declaration::Struct(node) => node.start(),
        }
    }

    fn end(&self) -> Position {
        match self {
            Declaration::Package(pkg) => pkg.end(),
            Declaration::Struct(node) => node.end(),
        }
    }
}

impl AstNode for Statement {
    fn start(&self) -> Position {
        match self {
            Statement::Declaration(decl) => decl.start(),
            Statement::Expression(expr) => expr.start(),
        }
    }

    fn end(&self) -> Position {
        match self {
            Statement::Declaration(decl) => decl.end(),
            Statement::Expression(expr) => expr.end(),
        }
    }
}

impl AstNode for Node {
    fn start(&self) -> Position {
        match self {
            Node::Statement(stmt) => stmt.start(),
            Node::Declaration(decl) => decl.start(),
            Node::Expression(expr) => expr.start(),
        }
    }

    fn end(&self) -> Position {
        match self {
            Node::Statement(stmt) => stmt.end(),
            Node::Declaration(decl) => decl.end(),
            Node::Expression(expr) => expr.end(),
        }
    }
}

impl From<Identifier> for Expression {
    fn from(ident: Identifier) -> Self {
        Expression::Identifier(ident)
    }
}

impl From<Package> for Declaration {
    fn from(pkg: Package) -> Self {
        Declaration::Package(pkg)
    }
}

impl From<Struct> for Declaration {
    fn from(node: Struct) -> Self {
        Declaration::Struct(node)
    }
}

impl From<Statement> for Node {
    fn from(stmt: Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl From<Declaration> for Node {
    fn from(decl: Declaration) -> Self {
        Node::Declaration(decl)
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Node::Expression(expr)
    }
}

impl From<Identifier> for Node {
    fn from(ident: Identifier) -> Self {
        Node::Expression(ident.into())
    }
}

impl From<Package> for Node {
    fn from(pkg: Package) -> Self {
        Node::Declaration(pkg.into())
    }
}

impl From<Struct> for Node {
    fn from(node: Struct) -> Self {
        Node::Declaration(node.into())
    }
}

/// The root of a parse: the top-level nodes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File<N = Node> {
    pub nodes: Vec<N>,
}

impl<N> File<N> {
    pub fn new(nodes: Vec<N>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N: AstNode> File<N> {
    /// From the start of the first node to the end of the last, if any.
    pub fn span(&self) -> Option<Span> {
        let first = self.nodes.first()?;
        let last = self.nodes.last()?;
        Some(Span::new(first.start(), last.end()))
    }
}

impl<N> Default for File<N> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
