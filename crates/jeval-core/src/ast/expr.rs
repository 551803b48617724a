//! Typed expression nodes.
//!
//! Every [`Expr`] carries its resolved static type (`None` when the resolver
//! failed to type it), its exact source text and its span. Children are
//! borrowed from the caller's arena, so the whole tree is `Copy`.

use crate::Span;
use crate::ast::decl::{Decl, MethodDecl};
use crate::ast::ops::{AssignOp, BinaryOp, PostfixOp, UnaryOp};
use crate::class_id::ClassId;
use crate::types::Type;

/// A typed expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expr<'ast> {
    pub kind: ExprKind<'ast>,
    /// Resolved static type.
    pub ty: Option<Type>,
    /// Source text, quoted back in compile errors.
    pub text: &'ast str,
    pub span: Span,
}

impl<'ast> Expr<'ast> {
    pub fn new(kind: ExprKind<'ast>, ty: Option<Type>, text: &'ast str) -> Self {
        Self {
            kind,
            ty,
            text,
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// The kind of expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprKind<'ast> {
    /// Literal value
    Literal(LiteralKind<'ast>),
    /// Simple or qualified name (`x`, `obj.f`, `Outer.CONST`)
    Name(NameExpr<'ast>),
    /// `this` or `Outer.this`
    This(ThisExpr),
    /// `super` or `Outer.super`, only valid as a qualifier
    Super(SuperExpr),
    /// `T.class`
    ClassLiteral(Type),
    /// Parenthesized expression
    Paren(&'ast Expr<'ast>),
    /// Flattened chain of binary operators at one precedence tier
    Binary(PolyadicExpr<'ast>),
    /// Prefix operation
    Unary(UnaryExpr<'ast>),
    /// Postfix `++`/`--`
    Postfix(PostfixExpr<'ast>),
    /// Assignment
    Assign(AssignExpr<'ast>),
    /// `c ? a : b`
    Conditional(ConditionalExpr<'ast>),
    /// `e instanceof T`
    InstanceOf(InstanceOfExpr<'ast>),
    /// `(T) e`
    Cast(CastExpr<'ast>),
    /// `a[i]`
    Index(IndexExpr<'ast>),
    /// Method call
    Call(CallExpr<'ast>),
    /// `new T(...)`
    New(NewExpr<'ast>),
    /// `new T[n]...` or `new T[]{...}`
    NewArray(NewArrayExpr<'ast>),
    /// Bare initializer `{...}` in a declaration
    ArrayInit(ArrayInitExpr<'ast>),
    /// Lambda expression
    Lambda,
    /// Method reference (`String::length`)
    MethodRef,
}

/// The kind of literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    Null,
    Bool(bool),
    Char(char),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(&'ast str),
}

impl LiteralKind<'_> {
    /// The static type of the literal.
    pub fn ty(&self) -> Type {
        match self {
            LiteralKind::Null => Type::Null,
            LiteralKind::Bool(_) => Type::BOOLEAN,
            LiteralKind::Char(_) => Type::CHAR,
            LiteralKind::Int(_) => Type::INT,
            LiteralKind::Long(_) => Type::LONG,
            LiteralKind::Float(_) => Type::FLOAT,
            LiteralKind::Double(_) => Type::DOUBLE,
            LiteralKind::String(_) => Type::STRING,
        }
    }
}

/// A name reference, optionally qualified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameExpr<'ast> {
    pub qualifier: Option<&'ast Expr<'ast>>,
    pub name: &'ast str,
    pub decl: Decl<'ast>,
}

/// `this`, optionally qualified by an enclosing class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThisExpr {
    pub qualifier: Option<ClassId>,
}

/// `super`, optionally qualified by an enclosing class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperExpr {
    pub qualifier: Option<ClassId>,
}

/// `a op b op c ...` with `ops.len() == operands.len() - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyadicExpr<'ast> {
    pub operands: &'ast [Expr<'ast>],
    pub ops: &'ast [BinaryOp],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    pub op: UnaryOp,
    pub operand: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostfixExpr<'ast> {
    pub op: PostfixOp,
    pub operand: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignExpr<'ast> {
    pub op: AssignOp,
    pub target: &'ast Expr<'ast>,
    pub value: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalExpr<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_expr: &'ast Expr<'ast>,
    pub else_expr: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceOfExpr<'ast> {
    pub operand: &'ast Expr<'ast>,
    pub target: Type,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastExpr<'ast> {
    pub target: Type,
    pub operand: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexExpr<'ast> {
    pub array: &'ast Expr<'ast>,
    pub index: &'ast Expr<'ast>,
}

/// A method call. `method` is `None` when the resolver could not bind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// Receiver expression; `None` for unqualified calls.
    pub qualifier: Option<&'ast Expr<'ast>>,
    pub name: &'ast str,
    pub method: Option<&'ast MethodDecl<'ast>>,
    pub args: &'ast [Expr<'ast>],
}

/// Instance creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewExpr<'ast> {
    pub class: ClassId,
    pub constructor: &'ast MethodDecl<'ast>,
    /// Explicit enclosing instance (`outer.new Inner()`).
    pub outer: Option<&'ast Expr<'ast>>,
    pub args: &'ast [Expr<'ast>],
    /// The expression declares an anonymous class body.
    pub anonymous_body: bool,
}

/// Array creation. `ty` of the enclosing [`Expr`] is the created array type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewArrayExpr<'ast> {
    /// Explicit dimension expressions (`new int[a][b]` has two).
    pub dims: &'ast [Expr<'ast>],
    pub initializer: Option<&'ast Expr<'ast>>,
}

/// `{a, b, c}`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayInitExpr<'ast> {
    pub elements: &'ast [Expr<'ast>],
}
