//! Typed input AST.
//!
//! Produced by the resolver, consumed read-only by the compiler. Nodes are
//! allocated in a caller-owned `bumpalo::Bump` and borrowed for `'ast`:
//!
//! ```ignore
//! let arena = Bump::new();
//! let one = arena.alloc(Expr::new(
//!     ExprKind::Literal(LiteralKind::Int(1)),
//!     Some(Type::INT),
//!     "1",
//! ));
//! ```

pub mod decl;
pub mod expr;
pub mod ops;
pub mod stmt;

pub use decl::{Decl, FieldDecl, LocalDecl, LocalKind, LocalOrigin, MethodDecl, Modifiers};
pub use expr::{
    ArrayInitExpr, AssignExpr, CallExpr, CastExpr, ConditionalExpr, Expr, ExprKind, IndexExpr,
    InstanceOfExpr, LiteralKind, NameExpr, NewArrayExpr, NewExpr, PolyadicExpr, PostfixExpr,
    SuperExpr, ThisExpr, UnaryExpr,
};
pub use ops::{AssignOp, BinaryOp, PostfixOp, UnaryOp};
pub use stmt::{
    CodeFragment, DoWhileStmt, ForStmt, IfStmt, LabeledStmt, Stmt, StmtKind, VarDeclStmt,
    VarDeclarator, WhileStmt,
};
