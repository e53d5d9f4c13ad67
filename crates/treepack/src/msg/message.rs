//! [`Message`] — an ordered collection of described, valued fields.

use crate::msg::{FieldDescriptor, FieldValue, TypeDescriptor};

/// An ordered collection of fields, each a descriptor (marker-prefixed name
/// plus declared type) and the field's current runtime value.
///
/// Owned by the caller; the converter only reads it. Field order is
/// declaration order and is preserved in the output tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    fields: Vec<(FieldDescriptor, FieldValue)>,
}

impl Message {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field, preserving declaration order.
    pub fn push(&mut self, descriptor: FieldDescriptor, value: FieldValue) {
        self.fields.push((descriptor, value));
    }

    /// Builder-style [`Message::push`].
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        declared: TypeDescriptor,
        value: FieldValue,
    ) -> Self {
        self.push(FieldDescriptor::new(name, declared), value);
        self
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &(FieldDescriptor, FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
