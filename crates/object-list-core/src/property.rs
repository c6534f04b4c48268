//! Change-detecting values.
//!
//! A [`Property<T>`] wraps a value and reports whether an assignment actually
//! changed it. Owners pair properties with a [`Signal`](crate::Signal) and
//! emit only when [`set`](Property::set) returns `true`, so observers are not
//! woken up by assignments of the current value.
//!
//! # Example
//!
//! ```
//! use object_list_core::{Property, Signal};
//!
//! struct Label {
//!     text: Property<String>,
//!     changed: Signal<()>,
//! }
//!
//! impl Label {
//!     fn set_text(&self, text: &str) {
//!         if self.text.set(text.to_string()) {
//!             self.changed.emit(());
//!         }
//!     }
//! }
//!
//! let label = Label { text: Property::new("a".into()), changed: Signal::new() };
//! label.set_text("a");
//! label.set_text("b");
//! assert_eq!(label.text.get(), "b");
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value behind interior mutability that knows when it changed.
///
/// `Send + Sync` whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Wraps `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Returns a clone of the value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Mutates the value in place and returns the result.
    ///
    /// Nothing is compared; callers that notify unconditionally use this.
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.value.write();
        f(&mut value);
        value.clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Stores `value` if it differs from the current one.
    ///
    /// Returns `true` when something was stored.
    pub fn set(&self, value: T) -> bool {
        self.replace(value).is_some()
    }

    /// Stores `value` if it differs, handing back the previous value.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current == value {
            return None;
        }
        Some(std::mem::replace(&mut *current, value))
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&*self.value.read()).finish()
    }
}
