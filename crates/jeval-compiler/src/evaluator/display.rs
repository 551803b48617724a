//! Compact s-expression rendering of evaluator trees.
//!
//! ```text
//! (= x (box int (+:int (unbox int x) 1)))
//! ```

use std::fmt;

use super::{ClassFilter, Evaluator, LiteralValue, LocalSlot};

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => f.write_str("null"),
            LiteralValue::Bool(v) => write!(f, "{v}"),
            LiteralValue::Char(v) => write!(f, "'{}'", v.escape_default()),
            LiteralValue::Int(v) => write!(f, "{v}"),
            LiteralValue::Long(v) => write!(f, "{v}L"),
            LiteralValue::Float(v) => write!(f, "{:?}f", v.0),
            LiteralValue::Double(v) => write!(f, "{:?}", v.0),
            LiteralValue::String(v) => write!(f, "{v:?}"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Evaluator]) -> fmt::Result {
    for item in items {
        write!(f, " {item}")?;
    }
    Ok(())
}

fn write_label(f: &mut fmt::Formatter<'_>, label: &Option<String>) -> fmt::Result {
    match label {
        Some(label) => write!(f, " @{label}"),
        None => Ok(()),
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::Literal { value, .. } => write!(f, "{value}"),
            Evaluator::LocalVariable { name, slot } => match slot {
                LocalSlot::Frame | LocalSlot::Fragment => f.write_str(name),
                LocalSlot::Parameter(index) => write!(f, "{name}#{index}"),
                LocalSlot::Deferred => write!(f, "{name}?"),
            },
            Evaluator::Field {
                object,
                name,
                filter,
            } => match filter {
                ClassFilter::Any => write!(f, "(. {object} {name})"),
                ClassFilter::Class(class) => write!(f, "(. {object} {name} {class})"),
            },
            Evaluator::This { depth } => write!(f, "(this {depth})"),
            Evaluator::Super { depth } => write!(f, "(super {depth})"),
            Evaluator::TypeRef(ty) => write!(f, "(type {ty})"),
            Evaluator::ClassObject(ty) => write!(f, "(class {ty})"),
            Evaluator::MethodCall {
                object,
                method,
                args,
            } => {
                write!(f, "(call {object} {}", method.name)?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Evaluator::NewInstance { class, args, .. } => {
                write!(f, "(new {class}")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Evaluator::NewArray {
                ty,
                dimension,
                initializer,
            } => {
                write!(f, "(new-array {ty}")?;
                if let Some(dimension) = dimension {
                    write!(f, " {dimension}")?;
                }
                if let Some(elements) = initializer {
                    f.write_str(" {")?;
                    write_list(f, elements)?;
                    f.write_str(" }")?;
                }
                f.write_str(")")
            }
            Evaluator::ArrayAccess { array, index } => write!(f, "([] {array} {index})"),
            Evaluator::Assignment {
                target,
                value,
                postfix,
            } => {
                let op = if *postfix { "=post" } else { "=" };
                write!(f, "({op} {target} {value})")
            }
            Evaluator::Binary {
                op,
                left,
                right,
                ty,
            } => write!(f, "({op}:{ty} {left} {right})"),
            Evaluator::Unary { op, operand, ty } => write!(f, "({}:{ty} {operand})", op.symbol()),
            Evaluator::Conditional {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "(? {condition} {then_branch} {else_branch})"),
            Evaluator::InstanceOf { operand, ty } => write!(f, "(instanceof {operand} {ty})"),
            Evaluator::Cast { operand, ty } => write!(f, "(cast {ty} {operand})"),
            Evaluator::Box { operand, kind } => write!(f, "(box {kind} {operand})"),
            Evaluator::Unbox { operand, kind } => write!(f, "(unbox {kind} {operand})"),
            Evaluator::Pin(inner) => write!(f, "(pin {inner})"),
            Evaluator::Block(stmts) => {
                f.write_str("(block")?;
                write_list(f, stmts)?;
                f.write_str(")")
            }
            Evaluator::Declaration(locals) => {
                f.write_str("(decl")?;
                for local in locals {
                    write!(f, " ({} {} {}", local.ty, local.name, local.default)?;
                    if let Some(init) = &local.init {
                        write!(f, " {init}")?;
                    }
                    f.write_str(")")?;
                }
                f.write_str(")")
            }
            Evaluator::If {
                label,
                condition,
                then_branch,
                else_branch,
            } => {
                f.write_str("(if")?;
                write_label(f, label)?;
                write!(f, " {condition} {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " {else_branch}")?;
                }
                f.write_str(")")
            }
            Evaluator::While {
                label,
                condition,
                body,
            } => {
                f.write_str("(while")?;
                write_label(f, label)?;
                write!(f, " {condition} {body})")
            }
            Evaluator::DoWhile {
                label,
                body,
                condition,
            } => {
                f.write_str("(do")?;
                write_label(f, label)?;
                write!(f, " {body} {condition})")
            }
            Evaluator::For {
                label,
                init,
                condition,
                update,
                body,
            } => {
                f.write_str("(for")?;
                write_label(f, label)?;
                f.write_str(" (")?;
                write_list(f, init)?;
                f.write_str(" )")?;
                match condition {
                    Some(condition) => write!(f, " {condition}")?,
                    None => f.write_str(" true")?,
                }
                f.write_str(" (")?;
                write_list(f, update)?;
                write!(f, " ) {body})")
            }
            Evaluator::Break(label) => match label {
                Some(label) => write!(f, "(break {label})"),
                None => f.write_str("(break)"),
            },
            Evaluator::Continue(label) => match label {
                Some(label) => write!(f, "(continue {label})"),
                None => f.write_str("(continue)"),
            },
            Evaluator::Return(value) => match value {
                Some(value) => write!(f, "(return {value})"),
                None => f.write_str("(return)"),
            },
            Evaluator::Throw(value) => write!(f, "(throw {value})"),
            Evaluator::CodeFragment(stmts) => {
                f.write_str("(fragment")?;
                write_list(f, stmts)?;
                f.write_str(")")
            }
        }
    }
}
