//! Case-insensitive header lookup layered on [`FieldList`].

use std::fmt;

use crate::headers::error::{CapacityError, HeaderError};
use crate::headers::list::FieldList;

/// A single `name: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    /// The field name, stored as received.
    pub name: String,
    /// The field value.
    pub value: String,
}

/// An insertion-ordered multimap of header fields.
///
/// `put` always appends; it never replaces an existing field with the same
/// name. Lookups compare names ASCII case-insensitively and return the first
/// match in insertion order.
#[derive(Debug, Clone, Default)]
pub struct HeaderStore {
    fields: FieldList<HeaderField>,
}

impl HeaderStore {
    /// Create an empty store without a field limit.
    pub fn new() -> Self {
        Self {
            fields: FieldList::new(),
        }
    }

    /// Create an empty store that accepts at most `limit` fields.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            fields: FieldList::with_limit(limit),
        }
    }

    /// Append a field.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<(), CapacityError> {
        self.fields.push(HeaderField {
            name: name.into(),
            value: value.into(),
        })?;
        Ok(())
    }

    /// Get the name and value stored at `index`.
    pub fn get(&self, index: usize) -> Result<(&str, &str), HeaderError> {
        let field = self.fields.get(index)?;
        Ok((&field.name, &field.value))
    }

    /// Find the index of the first field named `name` at or after `start`.
    pub fn find(&self, name: &str, start: usize) -> Option<usize> {
        self.fields
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, field)| field.name.eq_ignore_ascii_case(name))
            .map(|(index, _)| index)
    }

    /// Value of the first field named `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.find(name, 0)
            .and_then(|index| self.fields.get(index).ok())
            .map(|field| field.value.as_str())
    }

    /// Whether a field named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name, 0).is_some()
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.fields.iter()
    }
}

impl fmt::Display for HeaderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.iter() {
            writeln!(f, "{}: {}", field.name, field.value)?;
        }
        Ok(())
    }
}
