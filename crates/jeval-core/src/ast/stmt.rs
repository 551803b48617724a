//! Typed statement nodes and code fragments.

use crate::Span;
use crate::ast::decl::LocalDecl;
use crate::ast::expr::Expr;

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stmt<'ast> {
    pub kind: StmtKind<'ast>,
    pub text: &'ast str,
    pub span: Span,
}

impl<'ast> Stmt<'ast> {
    pub fn new(kind: StmtKind<'ast>, text: &'ast str) -> Self {
        Self {
            kind,
            text,
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// The kind of statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StmtKind<'ast> {
    /// `;`
    Empty,
    /// Expression statement
    Expr(&'ast Expr<'ast>),
    /// Local variable declaration
    Decl(VarDeclStmt<'ast>),
    /// `{ ... }`
    Block(&'ast [Stmt<'ast>]),
    /// `if (c) a else b`
    If(IfStmt<'ast>),
    /// `while (c) body`
    While(WhileStmt<'ast>),
    /// `do body while (c);`
    DoWhile(DoWhileStmt<'ast>),
    /// `for (init; cond; update) body`
    For(ForStmt<'ast>),
    /// `break label?;`
    Break(Option<&'ast str>),
    /// `continue label?;`
    Continue(Option<&'ast str>),
    /// `return value?;`
    Return(Option<&'ast Expr<'ast>>),
    /// `throw value;`
    Throw(&'ast Expr<'ast>),
    /// `label: stmt`
    Labeled(LabeledStmt<'ast>),
    /// `for (T x : xs)`
    Foreach,
    /// `switch`
    Switch,
    /// `try`
    Try,
    /// `synchronized`
    Synchronized,
    /// `assert`
    Assert,
    /// Local class declaration
    LocalClass,
}

/// One or more declarators sharing a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDeclStmt<'ast> {
    pub vars: &'ast [VarDeclarator<'ast>],
}

/// `name = init` inside a declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDeclarator<'ast> {
    pub decl: &'ast LocalDecl<'ast>,
    pub init: Option<&'ast Expr<'ast>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_branch: &'ast Stmt<'ast>,
    pub else_branch: Option<&'ast Stmt<'ast>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub body: &'ast Stmt<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoWhileStmt<'ast> {
    pub body: &'ast Stmt<'ast>,
    pub condition: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForStmt<'ast> {
    pub init: &'ast [Stmt<'ast>],
    pub condition: Option<&'ast Expr<'ast>>,
    pub update: &'ast [Expr<'ast>],
    pub body: &'ast Stmt<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledStmt<'ast> {
    pub label: &'ast str,
    pub body: &'ast Stmt<'ast>,
}

/// A free-standing statement list compiled as if inserted at the
/// suspended position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeFragment<'ast> {
    pub stmts: &'ast [Stmt<'ast>],
    pub text: &'ast str,
    pub span: Span,
}

impl<'ast> CodeFragment<'ast> {
    pub fn new(stmts: &'ast [Stmt<'ast>], text: &'ast str) -> Self {
        Self {
            stmts,
            text,
            span: Span::default(),
        }
    }
}
