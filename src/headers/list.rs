//! Growable, append-only list used as the backing storage for header stores.

use crate::headers::error::{CapacityError, HeaderError};

/// Capacity reserved by a fresh list before the first insertion.
const INITIAL_CAPACITY: usize = 4;

/// An append-only sequence with power-of-two capacity growth and an optional
/// upper bound on the number of elements.
///
/// Elements are never moved relative to each other: pushing only appends, and
/// growth reserves the next power of two at or above the required size.
#[derive(Debug, Clone)]
pub struct FieldList<T> {
    items: Vec<T>,
    limit: usize,
}

impl<T> FieldList<T> {
    /// Create an empty list without an element limit.
    pub fn new() -> Self {
        Self::with_limit(usize::MAX)
    }

    /// Create an empty list that accepts at most `limit` elements.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY.min(limit)),
            limit,
        }
    }

    /// Append an element, returning its index.
    ///
    /// # Errors
    ///
    /// [`CapacityError::LimitReached`] when the list is full, or
    /// [`CapacityError::Alloc`] when the backing storage cannot grow.
    pub fn push(&mut self, item: T) -> Result<usize, CapacityError> {
        let len = self.items.len();
        if len >= self.limit {
            return Err(CapacityError::LimitReached(self.limit));
        }

        if len == self.items.capacity() {
            let target = (len + 1).checked_next_power_of_two().unwrap_or(len + 1);
            self.items.try_reserve_exact(target - len)?;
        }

        self.items.push(item);
        Ok(len)
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, HeaderError> {
        self.items.get(index).ok_or(HeaderError::OutOfRange {
            index,
            count: self.items.len(),
        })
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Maximum number of elements this list accepts.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for FieldList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a FieldList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
