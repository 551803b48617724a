//! Deterministic class identity.
//!
//! A [`ClassId`] is a 64-bit hash of a fully-qualified class name. The same
//! name always yields the same id, so the resolver, the compiler and the
//! executor can agree on class identity without sharing a registration order.
//!
//! ```
//! use jeval_core::{ClassId, well_known};
//!
//! assert_eq!(ClassId::from_name("java.lang.Integer"), well_known::INTEGER);
//! ```

use std::fmt;

use xxhash_rust::const_xxh64;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every class hash.
const CLASS_DOMAIN: u64 = 0x2fac10b63a6cc57c;

/// Hash identifying a class, interface or enum by its qualified name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ClassId(pub u64);

impl ClassId {
    /// Create a class id from a fully-qualified name (`java.util.List`).
    #[inline]
    pub fn from_name(name: &str) -> Self {
        ClassId(CLASS_DOMAIN ^ xxh64(name.as_bytes(), 0))
    }

    /// Const-evaluable variant of [`ClassId::from_name`].
    #[inline]
    pub const fn from_name_const(name: &str) -> Self {
        ClassId(CLASS_DOMAIN ^ const_xxh64::xxh64(name.as_bytes(), 0))
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({:#018x})", self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Ids of the classes the conversion rules depend on.
pub mod well_known {
    use super::ClassId;

    /// `java.lang.Object`
    pub const OBJECT: ClassId = ClassId::from_name_const("java.lang.Object");
    /// `java.lang.String`
    pub const STRING: ClassId = ClassId::from_name_const("java.lang.String");
    /// `java.lang.Boolean`
    pub const BOOLEAN: ClassId = ClassId::from_name_const("java.lang.Boolean");
    /// `java.lang.Byte`
    pub const BYTE: ClassId = ClassId::from_name_const("java.lang.Byte");
    /// `java.lang.Short`
    pub const SHORT: ClassId = ClassId::from_name_const("java.lang.Short");
    /// `java.lang.Character`
    pub const CHARACTER: ClassId = ClassId::from_name_const("java.lang.Character");
    /// `java.lang.Integer`
    pub const INTEGER: ClassId = ClassId::from_name_const("java.lang.Integer");
    /// `java.lang.Long`
    pub const LONG: ClassId = ClassId::from_name_const("java.lang.Long");
    /// `java.lang.Float`
    pub const FLOAT: ClassId = ClassId::from_name_const("java.lang.Float");
    /// `java.lang.Double`
    pub const DOUBLE: ClassId = ClassId::from_name_const("java.lang.Double");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(ClassId::from_name("a.B"), ClassId::from_name("a.B"));
        assert_ne!(ClassId::from_name("a.B"), ClassId::from_name("a.C"));
    }

    #[test]
    fn const_and_runtime_hash_agree() {
        assert_eq!(
            ClassId::from_name("java.lang.String"),
            ClassId::from_name_const("java.lang.String")
        );
        assert_eq!(ClassId::from_name("java.lang.Long"), well_known::LONG);
    }
}
