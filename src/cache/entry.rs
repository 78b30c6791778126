//! Cache Entry Module
//!
//! Defines the key/value pair stored in the cache and its byte charge.

// == Cache Entry ==
/// A single cached key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The lookup key, fixed once the entry exists
    pub key: String,
    /// The stored value, replaced in place on update
    pub value: String,
}

impl Entry {
    // == Constructor ==
    pub fn new(key: String, value: String) -> Self {
        Self { key, value }
    }

    // == Charge ==
    /// Number of bytes this entry counts against the budget.
    pub fn charge(&self) -> usize {
        self.key.len() + self.value.len()
    }

    // == Replace Value ==
    /// Swaps in a new value and returns the old one.
    pub fn replace_value(&mut self, value: String) -> String {
        std::mem::replace(&mut self.value, value)
    }
}
