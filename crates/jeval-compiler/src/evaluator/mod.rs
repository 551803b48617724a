//! Evaluator IR.
//!
//! The compiler's output is a tree of [`Evaluator`] nodes. Each composite node
//! owns its children; there is no sharing and no back-reference, so a tree can
//! be handed to the executor and dropped as a unit.
//!
//! Nodes that need a runtime conversion always carry a fully resolved target
//! type. The executor never re-derives types.

mod display;

use jeval_core::ast::{BinaryOp, LiteralKind};
use jeval_core::{ClassId, PrimitiveKind, Type};
use ordered_float::OrderedFloat;

// ============================================================================
// Leaves
// ============================================================================

/// A constant value embedded in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Char(char),
    Int(i32),
    Long(i64),
    Float(OrderedFloat<f32>),
    Double(OrderedFloat<f64>),
    String(String),
}

impl LiteralValue {
    /// The zero value a freshly declared local of type `ty` holds.
    pub fn default_for(ty: Type) -> LiteralValue {
        match ty.primitive() {
            Some(PrimitiveKind::Boolean) => LiteralValue::Bool(false),
            Some(PrimitiveKind::Char) => LiteralValue::Char('\0'),
            Some(PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int) => {
                LiteralValue::Int(0)
            }
            Some(PrimitiveKind::Long) => LiteralValue::Long(0),
            Some(PrimitiveKind::Float) => LiteralValue::Float(OrderedFloat(0.0)),
            Some(PrimitiveKind::Double) => LiteralValue::Double(OrderedFloat(0.0)),
            None => LiteralValue::Null,
        }
    }
}

impl From<LiteralKind<'_>> for LiteralValue {
    fn from(kind: LiteralKind<'_>) -> Self {
        match kind {
            LiteralKind::Null => LiteralValue::Null,
            LiteralKind::Bool(v) => LiteralValue::Bool(v),
            LiteralKind::Char(v) => LiteralValue::Char(v),
            LiteralKind::Int(v) => LiteralValue::Int(v),
            LiteralKind::Long(v) => LiteralValue::Long(v),
            LiteralKind::Float(v) => LiteralValue::Float(OrderedFloat(v)),
            LiteralKind::Double(v) => LiteralValue::Double(OrderedFloat(v)),
            LiteralKind::String(v) => LiteralValue::String(v.to_string()),
        }
    }
}

/// How the executor finds a local variable's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalSlot {
    /// Variable of the suspended frame.
    Frame,
    /// Parameter `n` of the suspended frame.
    Parameter(u32),
    /// Variable declared by the code fragment itself.
    Fragment,
    /// Unresolved at compile time; looked up by name when executed.
    Deferred,
}

/// Restricts which class a field lookup may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassFilter {
    /// First field with the name on the runtime object.
    Any,
    /// Field declared by this class.
    Class(ClassId),
}

/// Prefix operators that survive into the IR.
///
/// `++`/`--` lower to assignments and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
    BitNot,
    Not,
}

impl UnaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Not => "!",
        }
    }
}

/// Everything the executor needs to invoke a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub declaring: ClassId,
    pub name: String,
    pub params: Vec<Type>,
    pub return_type: Type,
    pub is_static: bool,
    pub varargs: bool,
}

/// One local introduced by a declaration statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalDeclaration {
    pub name: String,
    pub ty: Type,
    /// Zero value for `ty`, stored before `init` runs.
    pub default: Box<Evaluator>,
    /// Explicit initializer, compiled as an assignment to the local.
    pub init: Option<Box<Evaluator>>,
}

// ============================================================================
// Evaluator
// ============================================================================

/// One composable unit of runtime computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Evaluator {
    Literal {
        value: LiteralValue,
        ty: Type,
    },
    LocalVariable {
        name: String,
        slot: LocalSlot,
    },
    Field {
        object: Box<Evaluator>,
        name: String,
        filter: ClassFilter,
    },
    /// The instance reached after `depth` enclosing-instance hops.
    This {
        depth: u32,
    },
    /// Like [`Evaluator::This`], with non-virtual member dispatch.
    Super {
        depth: u32,
    },
    /// A type used as the target of static member access.
    TypeRef(Type),
    /// `T.class`
    ClassObject(Type),
    MethodCall {
        object: Box<Evaluator>,
        method: MethodRef,
        args: Vec<Evaluator>,
    },
    NewInstance {
        class: ClassId,
        constructor: MethodRef,
        args: Vec<Evaluator>,
    },
    NewArray {
        ty: Type,
        dimension: Option<Box<Evaluator>>,
        initializer: Option<Vec<Evaluator>>,
    },
    ArrayAccess {
        array: Box<Evaluator>,
        index: Box<Evaluator>,
    },
    Assignment {
        target: Box<Evaluator>,
        value: Box<Evaluator>,
        /// Yield the value held before the store (`x++`).
        postfix: bool,
    },
    Binary {
        op: BinaryOp,
        left: Box<Evaluator>,
        right: Box<Evaluator>,
        ty: Type,
    },
    Unary {
        op: UnaryOperator,
        operand: Box<Evaluator>,
        ty: Type,
    },
    Conditional {
        condition: Box<Evaluator>,
        then_branch: Box<Evaluator>,
        else_branch: Box<Evaluator>,
    },
    InstanceOf {
        operand: Box<Evaluator>,
        ty: Type,
    },
    Cast {
        operand: Box<Evaluator>,
        ty: Type,
    },
    Box {
        operand: Box<Evaluator>,
        kind: PrimitiveKind,
    },
    Unbox {
        operand: Box<Evaluator>,
        kind: PrimitiveKind,
    },
    /// Keeps the statement's value reachable until the enclosing block ends.
    Pin(Box<Evaluator>),
    Block(Vec<Evaluator>),
    Declaration(Vec<LocalDeclaration>),
    If {
        label: Option<String>,
        condition: Box<Evaluator>,
        then_branch: Box<Evaluator>,
        else_branch: Option<Box<Evaluator>>,
    },
    While {
        label: Option<String>,
        condition: Box<Evaluator>,
        body: Box<Evaluator>,
    },
    DoWhile {
        label: Option<String>,
        body: Box<Evaluator>,
        condition: Box<Evaluator>,
    },
    For {
        label: Option<String>,
        init: Vec<Evaluator>,
        condition: Option<Box<Evaluator>>,
        update: Vec<Evaluator>,
        body: Box<Evaluator>,
    },
    Break(Option<String>),
    Continue(Option<String>),
    Return(Option<Box<Evaluator>>),
    Throw(Box<Evaluator>),
    CodeFragment(Vec<Evaluator>),
}

impl Evaluator {
    pub fn literal(value: LiteralValue, ty: Type) -> Evaluator {
        Evaluator::Literal { value, ty }
    }

    /// `1` as an `int` literal.
    pub fn int_one() -> Evaluator {
        Evaluator::literal(LiteralValue::Int(1), Type::INT)
    }

    pub fn local(name: impl Into<String>, slot: LocalSlot) -> Evaluator {
        Evaluator::LocalVariable {
            name: name.into(),
            slot,
        }
    }

    pub fn field(object: Evaluator, name: impl Into<String>, filter: ClassFilter) -> Evaluator {
        Evaluator::Field {
            object: Box::new(object),
            name: name.into(),
            filter,
        }
    }

    pub fn boxed(self, kind: PrimitiveKind) -> Evaluator {
        Evaluator::Box {
            operand: Box::new(self),
            kind,
        }
    }

    pub fn unboxed(self, kind: PrimitiveKind) -> Evaluator {
        Evaluator::Unbox {
            operand: Box::new(self),
            kind,
        }
    }

    pub fn cast(self, ty: Type) -> Evaluator {
        Evaluator::Cast {
            operand: Box::new(self),
            ty,
        }
    }

    pub fn pinned(self) -> Evaluator {
        Evaluator::Pin(Box::new(self))
    }

    /// Whether the node denotes a storage location an assignment can target.
    pub fn is_lvalue(&self) -> bool {
        matches!(
            self,
            Evaluator::LocalVariable { .. } | Evaluator::Field { .. } | Evaluator::ArrayAccess { .. }
        )
    }

    /// Number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Visit every node in pre-order.
    pub fn walk(&self, visit: &mut impl FnMut(&Evaluator)) {
        visit(self);
        match self {
            Evaluator::Literal { .. }
            | Evaluator::LocalVariable { .. }
            | Evaluator::This { .. }
            | Evaluator::Super { .. }
            | Evaluator::TypeRef(_)
            | Evaluator::ClassObject(_)
            | Evaluator::Break(_)
            | Evaluator::Continue(_) => {}
            Evaluator::Field { object, .. } => object.walk(visit),
            Evaluator::MethodCall { object, args, .. } => {
                object.walk(visit);
                args.iter().for_each(|a| a.walk(visit));
            }
            Evaluator::NewInstance { args, .. } => args.iter().for_each(|a| a.walk(visit)),
            Evaluator::NewArray {
                dimension,
                initializer,
                ..
            } => {
                if let Some(dimension) = dimension {
                    dimension.walk(visit);
                }
                for element in initializer.iter().flatten() {
                    element.walk(visit);
                }
            }
            Evaluator::ArrayAccess { array, index } => {
                array.walk(visit);
                index.walk(visit);
            }
            Evaluator::Assignment { target, value, .. } => {
                target.walk(visit);
                value.walk(visit);
            }
            Evaluator::Binary { left, right, .. } => {
                left.walk(visit);
                right.walk(visit);
            }
            Evaluator::Unary { operand, .. }
            | Evaluator::InstanceOf { operand, .. }
            | Evaluator::Cast { operand, .. }
            | Evaluator::Box { operand, .. }
            | Evaluator::Unbox { operand, .. }
            | Evaluator::Pin(operand)
            | Evaluator::Throw(operand) => operand.walk(visit),
            Evaluator::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                condition.walk(visit);
                then_branch.walk(visit);
                else_branch.walk(visit);
            }
            Evaluator::Block(stmts) | Evaluator::CodeFragment(stmts) => {
                stmts.iter().for_each(|s| s.walk(visit))
            }
            Evaluator::Declaration(locals) => {
                for local in locals {
                    local.default.walk(visit);
                    if let Some(init) = &local.init {
                        init.walk(visit);
                    }
                }
            }
            Evaluator::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                condition.walk(visit);
                then_branch.walk(visit);
                if let Some(else_branch) = else_branch {
                    else_branch.walk(visit);
                }
            }
            Evaluator::While {
                condition, body, ..
            } => {
                condition.walk(visit);
                body.walk(visit);
            }
            Evaluator::DoWhile {
                body, condition, ..
            } => {
                body.walk(visit);
                condition.walk(visit);
            }
            Evaluator::For {
                init,
                condition,
                update,
                body,
                ..
            } => {
                init.iter().for_each(|i| i.walk(visit));
                if let Some(condition) = condition {
                    condition.walk(visit);
                }
                update.iter().for_each(|u| u.walk(visit));
                body.walk(visit);
            }
            Evaluator::Return(value) => {
                if let Some(value) = value {
                    value.walk(visit);
                }
            }
        }
    }
}
