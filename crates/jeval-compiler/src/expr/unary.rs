//! Prefix and postfix operators.
//!
//! `++`/`--` lower to an assignment whose value re-reads the target:
//! `x++` on an `Integer` becomes
//! `(=post x (box int (+:int (unbox int x) 1)))`.

use jeval_core::ast::{BinaryOp, Expr, PostfixExpr, PostfixOp, UnaryExpr, UnaryOp};
use jeval_core::{CompilationError, PrimitiveKind, Type};

use super::assignment::compile_lvalue;
use super::{ExprCompiler, Result, type_of};
use crate::conversion::{Operand, unary_numeric_promotion, unbox_if_wrapper};
use crate::evaluator::{Evaluator, UnaryOperator};

/// Compile a prefix operator.
pub fn compile_unary(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    un: &UnaryExpr<'_>,
) -> Result<Evaluator> {
    let op = match un.op {
        UnaryOp::PreInc => return compile_increment(compiler, expr, un.operand, BinaryOp::Add, false),
        UnaryOp::PreDec => return compile_increment(compiler, expr, un.operand, BinaryOp::Sub, false),
        UnaryOp::Plus => UnaryOperator::Plus,
        UnaryOp::Minus => UnaryOperator::Minus,
        UnaryOp::BitNot => UnaryOperator::BitNot,
        UnaryOp::Not => UnaryOperator::Not,
    };

    let operand = compiler.compile_operand(un.operand)?;
    let operand = match op {
        UnaryOperator::Not => unbox_if_wrapper(operand),
        _ => unary_numeric_promotion(operand),
    };

    let accepted = match (op, operand.ty.primitive()) {
        (UnaryOperator::Not, Some(kind)) => kind == PrimitiveKind::Boolean,
        (UnaryOperator::BitNot, Some(kind)) => kind.is_integral(),
        (_, Some(kind)) => kind.is_numeric(),
        (_, None) => false,
    };
    if !accepted {
        return Err(CompilationError::IncompatibleOperand {
            op: un.op.to_string(),
            operand: compiler.ctx().type_name(operand.ty),
            text: expr.text.to_string(),
            span: expr.span,
        });
    }

    Ok(Evaluator::Unary {
        op,
        operand: Box::new(operand.eval),
        ty: operand.ty,
    })
}

/// Compile `x++` or `x--`.
pub fn compile_postfix(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    post: &PostfixExpr<'_>,
) -> Result<Evaluator> {
    let op = match post.op {
        PostfixOp::Inc => BinaryOp::Add,
        PostfixOp::Dec => BinaryOp::Sub,
    };
    compile_increment(compiler, expr, post.operand, op, true)
}

fn compile_increment(
    compiler: &ExprCompiler<'_, '_>,
    expr: &Expr<'_>,
    operand: &Expr<'_>,
    op: BinaryOp,
    postfix: bool,
) -> Result<Evaluator> {
    let ty = type_of(operand)?;
    let kind = match ty.primitive_or_unboxed() {
        Some(kind) if kind.is_numeric() => kind,
        _ => {
            return Err(CompilationError::IncompatibleOperand {
                op: if op == BinaryOp::Add { "++" } else { "--" }.to_string(),
                operand: compiler.ctx().type_name(ty),
                text: expr.text.to_string(),
                span: expr.span,
            });
        }
    };

    let target = compile_lvalue(compiler, operand)?;
    let read = unbox_if_wrapper(Operand::new(target.clone(), ty));
    let promoted = Type::Primitive(PrimitiveKind::binary_promotion(kind, PrimitiveKind::Int));
    let read = read.cast_to(promoted);
    let step = Operand::new(
        Evaluator::Binary {
            op,
            left: Box::new(read.eval),
            right: Box::new(Operand::new(Evaluator::int_one(), Type::INT).cast_to(promoted).eval),
            ty: promoted,
        },
        promoted,
    );

    let stored = step.cast_to(Type::Primitive(kind));
    let value = if ty.is_class() {
        stored.eval.boxed(kind)
    } else {
        stored.eval
    };

    Ok(Evaluator::Assignment {
        target: Box::new(target),
        value: Box::new(value),
        postfix,
    })
}
