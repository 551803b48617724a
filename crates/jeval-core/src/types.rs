//! Static types as seen by the compiler.
//!
//! [`Type`] is `Copy`: class and array types refer to classes through
//! [`ClassId`], and the class table owns the names. This keeps types cheap to
//! store in both the bump-allocated input AST and the owned evaluator tree.

use std::fmt;

use crate::class_id::{ClassId, well_known};

// ============================================================================
// PrimitiveKind
// ============================================================================

/// The eight primitive kinds of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Source-level keyword for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// The wrapper class that boxes this kind.
    pub const fn wrapper(self) -> ClassId {
        match self {
            PrimitiveKind::Boolean => well_known::BOOLEAN,
            PrimitiveKind::Byte => well_known::BYTE,
            PrimitiveKind::Short => well_known::SHORT,
            PrimitiveKind::Char => well_known::CHARACTER,
            PrimitiveKind::Int => well_known::INTEGER,
            PrimitiveKind::Long => well_known::LONG,
            PrimitiveKind::Float => well_known::FLOAT,
            PrimitiveKind::Double => well_known::DOUBLE,
        }
    }

    /// The primitive kind boxed by `class`, if it is a wrapper class.
    pub fn from_wrapper(class: ClassId) -> Option<Self> {
        const ALL: [PrimitiveKind; 8] = [
            PrimitiveKind::Boolean,
            PrimitiveKind::Byte,
            PrimitiveKind::Short,
            PrimitiveKind::Char,
            PrimitiveKind::Int,
            PrimitiveKind::Long,
            PrimitiveKind::Float,
            PrimitiveKind::Double,
        ];
        ALL.into_iter().find(|kind| kind.wrapper() == class)
    }

    /// Every kind except `boolean`.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveKind::Boolean)
    }

    /// `byte`, `short`, `char`, `int` and `long`.
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte
                | PrimitiveKind::Short
                | PrimitiveKind::Char
                | PrimitiveKind::Int
                | PrimitiveKind::Long
        )
    }

    /// Unary numeric promotion: `byte`, `short` and `char` widen to `int`.
    ///
    /// Returns `None` when the kind is left unchanged.
    pub const fn unary_promotion(self) -> Option<Self> {
        match self {
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Char => {
                Some(PrimitiveKind::Int)
            }
            _ => None,
        }
    }

    /// Binary numeric promotion of two numeric kinds.
    ///
    /// `double > float > long > int`; anything narrower than `int` promotes to
    /// `int`.
    pub const fn binary_promotion(left: Self, right: Self) -> Self {
        use PrimitiveKind::*;
        match (left, right) {
            (Double, _) | (_, Double) => Double,
            (Float, _) | (_, Float) => Float,
            (Long, _) | (_, Long) => Long,
            _ => Int,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Type
// ============================================================================

/// Element of an array type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayElement {
    Primitive(PrimitiveKind),
    Class(ClassId),
}

impl ArrayElement {
    fn as_type(self) -> Type {
        match self {
            ArrayElement::Primitive(kind) => Type::Primitive(kind),
            ArrayElement::Class(class) => Type::Class(class),
        }
    }
}

/// A resolved static type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Result type of a void method call.
    Void,
    /// Type of the `null` literal.
    Null,
    /// A primitive value.
    Primitive(PrimitiveKind),
    /// A class, interface or enum reference.
    Class(ClassId),
    /// An array with `dims >= 1` dimensions.
    Array { element: ArrayElement, dims: u8 },
}

impl Type {
    pub const BOOLEAN: Type = Type::Primitive(PrimitiveKind::Boolean);
    pub const BYTE: Type = Type::Primitive(PrimitiveKind::Byte);
    pub const SHORT: Type = Type::Primitive(PrimitiveKind::Short);
    pub const CHAR: Type = Type::Primitive(PrimitiveKind::Char);
    pub const INT: Type = Type::Primitive(PrimitiveKind::Int);
    pub const LONG: Type = Type::Primitive(PrimitiveKind::Long);
    pub const FLOAT: Type = Type::Primitive(PrimitiveKind::Float);
    pub const DOUBLE: Type = Type::Primitive(PrimitiveKind::Double);
    pub const OBJECT: Type = Type::Class(well_known::OBJECT);
    pub const STRING: Type = Type::Class(well_known::STRING);

    /// The wrapper class type boxing `kind`.
    pub const fn boxed(kind: PrimitiveKind) -> Type {
        Type::Class(kind.wrapper())
    }

    /// An array of `element` with one more dimension.
    pub fn array_of(element: Type) -> Option<Type> {
        match element {
            Type::Primitive(kind) => Some(Type::Array {
                element: ArrayElement::Primitive(kind),
                dims: 1,
            }),
            Type::Class(class) => Some(Type::Array {
                element: ArrayElement::Class(class),
                dims: 1,
            }),
            Type::Array { element, dims } => Some(Type::Array {
                element,
                dims: dims.checked_add(1)?,
            }),
            Type::Void | Type::Null => None,
        }
    }

    /// The component type of an array type.
    ///
    /// `None` for non-arrays and for a malformed zero-dimension array.
    pub fn component(self) -> Option<Type> {
        match self {
            Type::Array { element, dims: 1 } => Some(element.as_type()),
            Type::Array { element, dims } => Some(Type::Array {
                element,
                dims: dims.checked_sub(1)?,
            }),
            _ => None,
        }
    }

    /// The primitive kind, if this is a primitive type.
    pub const fn primitive(self) -> Option<PrimitiveKind> {
        match self {
            Type::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    /// The primitive kind boxed by this type, if it is a wrapper class.
    pub fn unboxed(self) -> Option<PrimitiveKind> {
        match self {
            Type::Class(class) => PrimitiveKind::from_wrapper(class),
            _ => None,
        }
    }

    /// The primitive kind of this type after unboxing (primitives map to themselves).
    pub fn primitive_or_unboxed(self) -> Option<PrimitiveKind> {
        self.primitive().or_else(|| self.unboxed())
    }

    /// Numeric after unboxing: the operand of an arithmetic operator.
    pub fn is_numeric(self) -> bool {
        self.primitive_or_unboxed()
            .is_some_and(PrimitiveKind::is_numeric)
    }

    /// `boolean` or `Boolean`.
    pub fn is_boolean(self) -> bool {
        self.primitive_or_unboxed() == Some(PrimitiveKind::Boolean)
    }

    pub const fn is_primitive(self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    /// A class type (never the null type or an array).
    pub const fn is_class(self) -> bool {
        matches!(self, Type::Class(_))
    }

    /// Class, array and null types.
    pub const fn is_reference(self) -> bool {
        matches!(self, Type::Class(_) | Type::Array { .. } | Type::Null)
    }

    pub const fn is_null(self) -> bool {
        matches!(self, Type::Null)
    }

    pub const fn is_array(self) -> bool {
        matches!(self, Type::Array { .. })
    }

    pub fn is_string(self) -> bool {
        self == Type::STRING
    }

    pub const fn class(self) -> Option<ClassId> {
        match self {
            Type::Class(class) => Some(class),
            _ => None,
        }
    }
}

/// Primitive names, class hashes, and `[]` per array dimension. Use
/// [`ClassTable::display_type`](crate::ClassTable::display_type) for class names.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => f.write_str("void"),
            Type::Null => f.write_str("null"),
            Type::Primitive(kind) => f.write_str(kind.name()),
            Type::Class(class) => write!(f, "{class}"),
            Type::Array { element, dims } => {
                match element {
                    ArrayElement::Primitive(kind) => f.write_str(kind.name())?,
                    ArrayElement::Class(class) => write!(f, "{class}")?,
                }
                for _ in 0..*dims {
                    f.write_str("[]")?;
                }
                Ok(())
            }
        }
    }
}

impl From<PrimitiveKind> for Type {
    fn from(kind: PrimitiveKind) -> Self {
        Type::Primitive(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_round_trip() {
        for kind in [PrimitiveKind::Boolean, PrimitiveKind::Char, PrimitiveKind::Double] {
            assert_eq!(PrimitiveKind::from_wrapper(kind.wrapper()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_wrapper(well_known::STRING), None);
    }

    #[test]
    fn binary_promotion_precedence() {
        use PrimitiveKind::*;
        assert_eq!(PrimitiveKind::binary_promotion(Int, Long), Long);
        assert_eq!(PrimitiveKind::binary_promotion(Long, Float), Float);
        assert_eq!(PrimitiveKind::binary_promotion(Float, Double), Double);
        assert_eq!(PrimitiveKind::binary_promotion(Byte, Char), Int);
        assert_eq!(PrimitiveKind::binary_promotion(Short, Short), Int);
    }

    #[test]
    fn unary_promotion_only_widens_narrow_kinds() {
        assert_eq!(
            PrimitiveKind::Char.unary_promotion(),
            Some(PrimitiveKind::Int)
        );
        assert_eq!(PrimitiveKind::Int.unary_promotion(), None);
        assert_eq!(PrimitiveKind::Long.unary_promotion(), None);
    }

    #[test]
    fn boxed_types_are_numeric_references() {
        let integer = Type::boxed(PrimitiveKind::Int);
        assert!(integer.is_numeric());
        assert!(integer.is_reference());
        assert_eq!(integer.unboxed(), Some(PrimitiveKind::Int));
        assert!(!Type::STRING.is_numeric());
        assert!(Type::boxed(PrimitiveKind::Boolean).is_boolean());
    }

    #[test]
    fn array_component() {
        let matrix = Type::array_of(Type::array_of(Type::INT).unwrap()).unwrap();
        assert_eq!(matrix.component(), Type::array_of(Type::INT));
        assert_eq!(matrix.component().and_then(Type::component), Some(Type::INT));
        assert_eq!(Type::INT.component(), None);
        assert_eq!(Type::array_of(Type::Null), None);
    }

    #[test]
    fn zero_dimension_array_has_no_component() {
        let malformed = Type::Array {
            element: ArrayElement::Primitive(PrimitiveKind::Int),
            dims: 0,
        };
        assert_eq!(malformed.component(), None);
    }

    #[test]
    fn display_primitive_arrays() {
        let matrix = Type::array_of(Type::array_of(Type::LONG).unwrap()).unwrap();
        assert_eq!(matrix.to_string(), "long[][]");
        assert_eq!(Type::BOOLEAN.to_string(), "boolean");
    }
}
