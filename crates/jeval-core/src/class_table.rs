//! The frozen class database the compiler reads from.
//!
//! The resolver fills a [`ClassTable`] with every class the compiled code can
//! mention. The compiler only ever borrows it immutably, so the view cannot
//! change in the middle of a compile.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::class_id::{ClassId, well_known};
use crate::types::{ArrayElement, Type};

/// How a class is nested in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// Not nested in anything.
    TopLevel,
    /// Non-static member class; instances hold an enclosing instance.
    Inner,
    /// Static member class; no enclosing instance.
    StaticNested,
    /// Named class declared inside a method body.
    Local,
    /// Anonymous class.
    Anonymous,
}

impl ClassKind {
    /// Whether instances of this kind keep a reference to an enclosing instance.
    pub fn has_outer_instance(self) -> bool {
        matches!(self, ClassKind::Inner | ClassKind::Local | ClassKind::Anonymous)
    }
}

/// Everything the compiler needs to know about one class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptor {
    pub id: ClassId,
    /// Fully-qualified name (`com.acme.Outer$Inner`).
    pub name: String,
    pub superclass: Option<ClassId>,
    pub interfaces: Vec<ClassId>,
    /// The lexically enclosing class, if any.
    pub outer: Option<ClassId>,
    pub kind: ClassKind,
}

impl ClassDescriptor {
    /// A top-level class extending `java.lang.Object`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: ClassId::from_name(&name),
            name,
            superclass: Some(well_known::OBJECT),
            interfaces: Vec::new(),
            outer: None,
            kind: ClassKind::TopLevel,
        }
    }

    /// Set the superclass.
    pub fn extends(mut self, superclass: ClassId) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, interface: ClassId) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Nest this class inside `outer` with the given kind.
    pub fn nested_in(mut self, outer: ClassId, kind: ClassKind) -> Self {
        self.outer = Some(outer);
        self.kind = kind;
        self
    }
}

/// Immutable view of the declared classes.
#[derive(Debug, Default, Clone)]
pub struct ClassTable {
    classes: FxHashMap<ClassId, ClassDescriptor>,
}

impl ClassTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding `Object`, `String` and the wrapper classes.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        let mut object = ClassDescriptor::new("java.lang.Object");
        object.superclass = None;
        table.insert(object);
        table.insert(ClassDescriptor::new("java.lang.String"));
        table.insert(ClassDescriptor::new("java.lang.Number"));
        let number = ClassId::from_name("java.lang.Number");
        for (name, numeric) in [
            ("java.lang.Boolean", false),
            ("java.lang.Byte", true),
            ("java.lang.Short", true),
            ("java.lang.Character", false),
            ("java.lang.Integer", true),
            ("java.lang.Long", true),
            ("java.lang.Float", true),
            ("java.lang.Double", true),
        ] {
            let class = ClassDescriptor::new(name);
            table.insert(if numeric { class.extends(number) } else { class });
        }
        table
    }

    /// Add or replace a class.
    pub fn insert(&mut self, class: ClassDescriptor) -> ClassId {
        let id = class.id;
        self.classes.insert(id, class);
        id
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassDescriptor> {
        self.classes.get(&id)
    }

    /// Qualified name of a class, or its hash when it is not in the table.
    pub fn name_of(&self, id: ClassId) -> String {
        self.get(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The lexical chain starting at `innermost` and following `outer` links.
    pub fn enclosing_chain(&self, innermost: ClassId) -> Vec<ClassId> {
        let mut chain = vec![innermost];
        let mut current = self.get(innermost).and_then(|c| c.outer);
        while let Some(id) = current {
            if chain.contains(&id) {
                break;
            }
            chain.push(id);
            current = self.get(id).and_then(|c| c.outer);
        }
        chain
    }

    /// Whether instances of `id` hold an enclosing instance.
    pub fn has_outer_instance(&self, id: ClassId) -> bool {
        self.get(id).is_some_and(|c| c.kind.has_outer_instance())
    }

    /// Whether `sub` is `sup` or inherits from it through superclasses or interfaces.
    pub fn is_subclass(&self, sub: ClassId, sup: ClassId) -> bool {
        if sub == sup || sup == well_known::OBJECT {
            return true;
        }
        let mut visited = FxHashSet::default();
        let mut pending = vec![sub];
        while let Some(id) = pending.pop() {
            if id == sup {
                return true;
            }
            if !visited.insert(id) {
                continue;
            }
            if let Some(class) = self.get(id) {
                pending.extend(class.superclass);
                pending.extend(class.interfaces.iter().copied());
            }
        }
        false
    }

    /// Reference assignability of `from` to `to` (identity, widening reference).
    ///
    /// Primitive types are only assignable to themselves here; numeric
    /// conversions are decided by the conversion engine.
    pub fn is_assignable(&self, from: Type, to: Type) -> bool {
        match (from, to) {
            _ if from == to => true,
            (Type::Null, to) => to.is_reference(),
            (Type::Class(a), Type::Class(b)) => self.is_subclass(a, b),
            (Type::Array { .. }, Type::Class(b)) => b == well_known::OBJECT,
            (
                Type::Array {
                    element: ArrayElement::Class(a),
                    dims: da,
                },
                Type::Array {
                    element: ArrayElement::Class(b),
                    dims: db,
                },
            ) if da == db => self.is_subclass(a, b),
            (
                Type::Array { dims: da, .. },
                Type::Array {
                    element: ArrayElement::Class(b),
                    dims: db,
                },
            ) => da > db && b == well_known::OBJECT,
            _ => false,
        }
    }

    /// Render a type the way the source language spells it.
    pub fn display_type(&self, ty: Type) -> String {
        match ty {
            Type::Void => "void".to_string(),
            Type::Null => "null".to_string(),
            Type::Primitive(kind) => kind.name().to_string(),
            Type::Class(id) => self.name_of(id),
            Type::Array { element, dims } => {
                let base = match element {
                    ArrayElement::Primitive(kind) => kind.name().to_string(),
                    ArrayElement::Class(id) => self.name_of(id),
                };
                format!("{base}{}", "[]".repeat(dims as usize))
            }
        }
    }
}
