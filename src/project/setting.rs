//! Tracked option values.
//!
//! Every optional field of a project entry carries two independent flags next
//! to its value: whether the value was explicitly present in the parsed
//! document, and whether the writer should emit it. Keeping both flags inside
//! one wrapper means a field can never gain one flag without the other being
//! defined.

use serde::{Deserialize, Serialize};

/// A field value with "present in document" and "persist on save" flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting<T> {
    value: T,
    present: bool,
    persist: bool,
}

impl<T> Setting<T> {
    /// Create an absent setting holding `value`, persisted by default
    pub fn new(value: T) -> Self {
        Self {
            value,
            present: false,
            persist: true,
        }
    }

    /// Current value (the constructor default when absent)
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutable access to the value without touching the presence flag
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the value and mark it as explicitly present
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.present = true;
    }

    /// Whether the value was explicitly provided
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Override the presence flag
    pub fn set_present(&mut self, present: bool) {
        self.present = present;
    }

    /// Whether the writer should emit this value
    pub fn persist(&self) -> bool {
        self.persist
    }

    /// Enable or disable emission of this value
    pub fn set_persist(&mut self, persist: bool) {
        self.persist = persist;
    }

    /// The value if it was explicitly provided
    pub fn explicit(&self) -> Option<&T> {
        self.present.then_some(&self.value)
    }
}

impl<T: Default> Default for Setting<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl Setting<String> {
    /// Append text to a string value and mark it present
    pub fn append(&mut self, text: &str) {
        self.value.push_str(text);
        self.present = true;
    }
}
