//! Declared-type descriptors.

/// Declared, schema-level type of a field, independent of its current
/// runtime value.
///
/// A descriptor carries a lower-case type name and, for variable-length
/// sequence declarations, the element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    element: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// A plain named type: a primitive (`"float32"`, `"bool"`, ...) or a
    /// record type name. Names are lower-cased on construction.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            element: None,
        }
    }

    /// An unbounded sequence of `element`.
    pub fn sequence(element: TypeDescriptor) -> Self {
        Self {
            name: "sequence".to_owned(),
            element: Some(Box::new(element)),
        }
    }

    /// The descriptor's own lower-case type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element type, present only for variable-length sequence
    /// declarations.
    pub fn element(&self) -> Option<&TypeDescriptor> {
        self.element.as_deref()
    }
}

/// A field's name as exposed by the message — carrying its one-character
/// slot marker — together with its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared: TypeDescriptor,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declared: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            declared,
        }
    }
}
