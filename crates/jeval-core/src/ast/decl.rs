//! Resolved declarations attached to name references.
//!
//! The resolver binds every identifier in the typed AST to one of these
//! before the compiler sees it.

use bitflags::bitflags;

use crate::Span;
use crate::ast::expr::LiteralKind;
use crate::class_id::ClassId;
use crate::types::Type;

bitflags! {
    /// Declaration modifiers relevant to code generation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
        const SYNCHRONIZED = 1 << 6;
    }
}

impl Modifiers {
    pub fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    pub fn is_final(self) -> bool {
        self.contains(Modifiers::FINAL)
    }
}

/// Where a local variable was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalOrigin {
    /// In the body of a method (or initializer) of `class` in the debuggee.
    Method { class: ClassId },
    /// Inside the code fragment being compiled.
    Fragment,
}

/// Whether a local is a plain variable or a method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalKind {
    Variable,
    Parameter { index: u32 },
}

/// A local variable or parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDecl<'ast> {
    pub name: &'ast str,
    pub ty: Type,
    pub kind: LocalKind,
    pub origin: LocalOrigin,
    pub modifiers: Modifiers,
    /// Compile-time constant initializer of a `final` local, if it has one.
    pub constant: Option<LiteralKind<'ast>>,
    pub span: Span,
}

impl<'ast> LocalDecl<'ast> {
    /// A variable declared in a method of `class`.
    pub fn variable(name: &'ast str, ty: Type, class: ClassId) -> Self {
        Self {
            name,
            ty,
            kind: LocalKind::Variable,
            origin: LocalOrigin::Method { class },
            modifiers: Modifiers::empty(),
            constant: None,
            span: Span::default(),
        }
    }

    /// Parameter `index` of a method of `class`.
    pub fn parameter(name: &'ast str, ty: Type, class: ClassId, index: u32) -> Self {
        Self {
            kind: LocalKind::Parameter { index },
            ..Self::variable(name, ty, class)
        }
    }

    /// A variable declared inside the code fragment.
    pub fn fragment(name: &'ast str, ty: Type) -> Self {
        Self {
            name,
            ty,
            kind: LocalKind::Variable,
            origin: LocalOrigin::Fragment,
            modifiers: Modifiers::empty(),
            constant: None,
            span: Span::default(),
        }
    }

    /// Mark the local `final` with a compile-time constant initializer.
    pub fn with_constant(mut self, value: LiteralKind<'ast>) -> Self {
        self.modifiers |= Modifiers::FINAL;
        self.constant = Some(value);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// A field of a class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDecl<'ast> {
    pub name: &'ast str,
    pub ty: Type,
    pub declaring: ClassId,
    pub modifiers: Modifiers,
}

impl FieldDecl<'_> {
    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }
}

/// A method or constructor with its parameter types already substituted
/// for the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodDecl<'ast> {
    pub name: &'ast str,
    pub declaring: ClassId,
    pub params: &'ast [Type],
    pub return_type: Type,
    /// The last parameter is variable-arity (`T...`, typed as `T[]`).
    pub varargs: bool,
    pub modifiers: Modifiers,
}

impl MethodDecl<'_> {
    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }
}

/// What a name reference resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decl<'ast> {
    Local(&'ast LocalDecl<'ast>),
    Field(&'ast FieldDecl<'ast>),
    Method(&'ast MethodDecl<'ast>),
    /// A class or array type used as a qualifier (`Math.PI`).
    Type(Type),
    /// The resolver could not bind the name.
    Unresolved,
}
