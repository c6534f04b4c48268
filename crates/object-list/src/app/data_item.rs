//! The item shown in each list row.

use std::fmt;

use object_list_core::{Property, Signal};

use crate::model::ObservableItem;

/// A row item with an identifier and a text value.
///
/// Both properties notify through the single [`changed`](DataItem::changed)
/// signal, and only when an assignment actually changes them.
pub struct DataItem {
    id: Property<i32>,
    value: Property<String>,
    changed: Signal<()>,
}

impl DataItem {
    /// Identifier of a default-constructed item.
    pub const DEFAULT_ID: i32 = 42;
    /// Value of a default-constructed item.
    pub const DEFAULT_VALUE: &'static str = "The main question";

    /// Creates an item.
    pub fn new(id: i32, value: impl Into<String>) -> Self {
        Self {
            id: Property::new(id),
            value: Property::new(value.into()),
            changed: Signal::new(),
        }
    }

    /// Returns the identifier.
    pub fn id(&self) -> i32 {
        self.id.get()
    }

    /// Returns the text value.
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Sets the identifier, emitting `changed` if it differs.
    pub fn set_id(&self, id: i32) {
        if self.id.set(id) {
            self.changed.emit(());
        }
    }

    /// Sets the text value, emitting `changed` if it differs.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        if self.value.set(value.clone()) {
            tracing::debug!(target: "object_list::app", %value, "item value changed");
            self.changed.emit(());
        }
    }

    /// Doubles the identifier.
    ///
    /// Always emits `changed`, even when the id stays the same (zero). The
    /// multiplication wraps on overflow.
    pub fn double_id(&self) {
        self.id.update(|id| *id = id.wrapping_mul(2));
        self.changed.emit(());
    }

    /// Signal emitted after the id or the value changed.
    pub fn changed(&self) -> &Signal<()> {
        &self.changed
    }
}

impl Default for DataItem {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ID, Self::DEFAULT_VALUE)
    }
}

impl ObservableItem for DataItem {
    fn changed(&self) -> &Signal<()> {
        &self.changed
    }
}

impl fmt::Debug for DataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataItem")
            .field("id", &self.id())
            .field("value", &self.value())
            .finish()
    }
}

static_assertions::assert_impl_all!(DataItem: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn count_changes(item: &DataItem) -> Arc<Mutex<usize>> {
        let count = Arc::new(Mutex::new(0));
        let c = count.clone();
        item.changed().connect(move |_| *c.lock() += 1);
        count
    }

    #[test]
    fn test_default_item() {
        let item = DataItem::default();
        assert_eq!(item.id(), 42);
        assert_eq!(item.value(), "The main question");
    }

    #[test]
    fn test_set_value_notifies_on_change_only() {
        let item = DataItem::new(1, "a");
        let changes = count_changes(&item);

        item.set_value("a");
        assert_eq!(*changes.lock(), 0);

        item.set_value("b");
        assert_eq!(item.value(), "b");
        assert_eq!(*changes.lock(), 1);
    }

    #[test]
    fn test_set_id_notifies_on_change_only() {
        let item = DataItem::new(7, "a");
        let changes = count_changes(&item);

        item.set_id(7);
        item.set_id(8);
        item.set_id(8);

        assert_eq!(item.id(), 8);
        assert_eq!(*changes.lock(), 1);
    }

    #[test]
    fn test_double_id() {
        let item = DataItem::new(21, "x");
        let changes = count_changes(&item);

        item.double_id();
        assert_eq!(item.id(), 42);
        assert_eq!(*changes.lock(), 1);
    }

    #[test]
    fn test_double_zero_id_still_notifies() {
        let item = DataItem::new(0, "x");
        let changes = count_changes(&item);

        item.double_id();
        assert_eq!(item.id(), 0);
        assert_eq!(*changes.lock(), 1);
    }

    #[test]
    fn test_double_id_wraps() {
        let item = DataItem::new(i32::MAX, "x");
        item.double_id();
        assert_eq!(item.id(), -2);
    }
}
