//! Generic list model over shared objects.
//!
//! `ObjectListModel<T>` stores `Arc<T>` handles in view order and keeps an
//! [`IndexedChangeTracker`] in step with the storage: every mutation of the
//! vector runs inside the tracker's begin/end bracket, so at no point can an
//! observer see a row count that disagrees with the stored items.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use object_list_core::ConnectionId;
use parking_lot::{Mutex, RwLock};

use super::change_tracker::IndexedChangeTracker;
use super::role::{ItemData, ItemRole, MODEL_DATA_ROLE_NAME, RoleNames, default_role_names};
use super::traits::{ItemModel, ModelSignals, ObservableItem};

/// Forwarding state for one distinct stored item.
///
/// `rows` counts how many rows hold the item; the connection goes away with
/// the last of them.
struct Watch<T> {
    item: Weak<T>,
    connection: ConnectionId,
    rows: usize,
}

/// Identity of a stored item, stable while any row holds it.
fn item_key<T>(item: &Arc<T>) -> usize {
    Arc::as_ptr(item).cast::<()>() as usize
}

/// A list model of shared objects for declarative list views.
///
/// Delegates get the object itself through the `modelData` role
/// ([`ItemRole::MODEL_DATA`]) and bind to its properties directly. While an
/// item is stored, its [`ObservableItem::changed`] signal is forwarded to
/// [`ModelSignals::data_changed`] once for every row holding it.
///
/// Out-of-range operations are ignored.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use object_list::app::DataItem;
/// use object_list::model::{ItemModel, ItemRole, ObjectListModel};
///
/// let model = ObjectListModel::new();
/// model.append(Arc::new(DataItem::new(1, "one")));
/// model.append_all([Arc::new(DataItem::new(2, "two")), Arc::new(DataItem::new(3, "three"))]);
/// model.remove_at(0);
///
/// assert_eq!(model.length(), 2);
/// let first = model.data(0, ItemRole::MODEL_DATA).into_item().unwrap();
/// assert_eq!(first.id(), 2);
/// ```
pub struct ObjectListModel<T: ObservableItem> {
    items: Arc<RwLock<Vec<Arc<T>>>>,
    watches: Mutex<HashMap<usize, Watch<T>>>,
    tracker: Arc<IndexedChangeTracker>,
}

impl<T: ObservableItem> ObjectListModel<T> {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            watches: Mutex::new(HashMap::new()),
            tracker: Arc::new(IndexedChangeTracker::new()),
        }
    }

    /// Creates a model holding `items`.
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        let model = Self::new();
        model.append_all(items);
        model
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the model holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// The `length` property: the row count views bind to.
    ///
    /// Changes are announced on [`ModelSignals::count_changed`].
    pub fn length(&self) -> usize {
        self.tracker.count()
    }

    /// Returns the model signals.
    pub fn signals(&self) -> &ModelSignals {
        self.tracker.signals()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Appends an item to the end of the list.
    pub fn append(&self, item: Arc<T>) {
        self.insert(self.len(), item);
    }

    /// Appends a batch of items, announced as one inserted range.
    ///
    /// An empty batch emits nothing.
    pub fn append_all<I>(&self, items: I)
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        let batch: Vec<Arc<T>> = items.into_iter().collect();
        if batch.is_empty() {
            return;
        }

        let index = signed(self.len());
        let count = signed(batch.len());
        let result = self.tracker.try_insert_with(index, count, || {
            for item in &batch {
                self.watch(item);
            }
            self.items.write().extend(batch);
        });
        if let Err(err) = result {
            tracing::trace!(target: "object_list::model", %err, "ignored append");
        }
    }

    /// Inserts an item at `index`.
    ///
    /// Ignored unless `index <= len()`.
    pub fn insert(&self, index: usize, item: Arc<T>) {
        let result = self.tracker.try_insert_with(signed(index), 1, || {
            self.watch(&item);
            self.items.write().insert(index, item);
        });
        if let Err(err) = result {
            tracing::trace!(target: "object_list::model", %err, "ignored insert");
        }
    }

    /// Removes and returns the item at `index`.
    ///
    /// Returns `None` and emits nothing unless `index < len()`.
    pub fn remove_at(&self, index: usize) -> Option<Arc<T>> {
        let result = self
            .tracker
            .try_remove_with(signed(index), 1, || self.items.write().remove(index));

        match result {
            Ok(item) => {
                self.unwatch(&item);
                Some(item)
            }
            Err(err) => {
                tracing::trace!(target: "object_list::model", %err, "ignored remove");
                None
            }
        }
    }

    /// Removes the first row holding `item` (the same object, not an equal one).
    ///
    /// Returns `true` if a row was removed.
    pub fn remove_one(&self, item: &Arc<T>) -> bool {
        self.index_of(item)
            .and_then(|index| self.remove_at(index))
            .is_some()
    }

    /// Removes the first item, if any.
    pub fn remove_first(&self) -> Option<Arc<T>> {
        if self.is_empty() {
            return None;
        }
        self.remove_at(0)
    }

    /// Removes the last item, if any.
    pub fn remove_last(&self) -> Option<Arc<T>> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.remove_at(len - 1)
    }

    /// Replaces the item at `index` by removing it and inserting `item`.
    ///
    /// Views observe a removal followed by an insertion. Each half is checked
    /// on its own: at `index == len()` the removal is ignored and the item is
    /// appended. Returns the removed item.
    pub fn replace(&self, index: usize, item: Arc<T>) -> Option<Arc<T>> {
        let removed = self.remove_at(index);
        self.insert(index, item);
        removed
    }

    /// Removes all items with a single reset.
    pub fn clear(&self) {
        let removed = self
            .tracker
            .reset_with(0, || std::mem::take(&mut *self.items.write()));
        for item in &removed {
            self.unwatch(item);
        }
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    /// Returns a non-owning handle to the item at `index`.
    ///
    /// The model keeps ownership. The handle is meant to be used until the
    /// next structural change; after the item leaves every collection and all
    /// shared handles are gone, it no longer upgrades.
    pub fn item_at(&self, index: usize) -> Option<Weak<T>> {
        self.items.read().get(index).map(Arc::downgrade)
    }

    /// Returns a shared handle to the item at `index`.
    ///
    /// The item stays alive as long as the handle does, even after removal.
    pub fn get(&self, index: usize) -> Option<Arc<T>> {
        self.items.read().get(index).cloned()
    }

    /// Returns the first item.
    pub fn first(&self) -> Option<Arc<T>> {
        self.get(0)
    }

    /// Returns the last item.
    pub fn last(&self) -> Option<Arc<T>> {
        self.items.read().last().cloned()
    }

    /// Returns the first row holding `item`.
    pub fn index_of(&self, item: &Arc<T>) -> Option<usize> {
        self.items
            .read()
            .iter()
            .position(|stored| Arc::ptr_eq(stored, item))
    }

    /// Returns `true` if some row holds `item`.
    pub fn contains(&self, item: &Arc<T>) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns a snapshot of the stored handles in row order.
    pub fn items(&self) -> Vec<Arc<T>> {
        self.items.read().clone()
    }

    // -------------------------------------------------------------------------
    // Item change forwarding
    // -------------------------------------------------------------------------

    /// Counts one more row holding `item`, connecting on the first.
    fn watch(&self, item: &Arc<T>) {
        let mut watches = self.watches.lock();
        if let Some(watch) = watches.get_mut(&item_key(item)) {
            watch.rows += 1;
            return;
        }

        let weak_item = Arc::downgrade(item);
        let items = Arc::downgrade(&self.items);
        let tracker = Arc::downgrade(&self.tracker);
        let connection = item.changed().connect(move |_| {
            let (Some(item), Some(items), Some(tracker)) =
                (weak_item.upgrade(), items.upgrade(), tracker.upgrade())
            else {
                return;
            };
            let rows: Vec<usize> = items
                .read()
                .iter()
                .enumerate()
                .filter(|(_, stored)| Arc::ptr_eq(stored, &item))
                .map(|(row, _)| row)
                .collect();
            for row in rows {
                tracker.signals().emit_data_changed_single(row);
            }
        });

        watches.insert(
            item_key(item),
            Watch {
                item: Arc::downgrade(item),
                connection,
                rows: 1,
            },
        );
    }

    /// Counts one row less holding `item`, disconnecting after the last.
    fn unwatch(&self, item: &Arc<T>) {
        let key = item_key(item);
        let mut watches = self.watches.lock();
        let Some(watch) = watches.get_mut(&key) else {
            return;
        };
        watch.rows -= 1;
        if watch.rows > 0 {
            return;
        }
        if let Some(watch) = watches.remove(&key) {
            item.changed().disconnect(watch.connection);
        }
    }
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

impl<T: ObservableItem> Default for ObjectListModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ObservableItem> Drop for ObjectListModel<T> {
    fn drop(&mut self) {
        for (_, watch) in self.watches.get_mut().drain() {
            if let Some(item) = watch.item.upgrade() {
                item.changed().disconnect(watch.connection);
            }
        }
    }
}

impl<T: ObservableItem> Extend<Arc<T>> for ObjectListModel<T> {
    fn extend<I: IntoIterator<Item = Arc<T>>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T: ObservableItem> FromIterator<Arc<T>> for ObjectListModel<T> {
    fn from_iter<I: IntoIterator<Item = Arc<T>>>(iter: I) -> Self {
        Self::with_items(iter)
    }
}

impl<T: ObservableItem> ItemModel for ObjectListModel<T> {
    type Item = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn data(&self, row: usize, role: ItemRole) -> ItemData<T> {
        if role == ItemRole::MODEL_DATA {
            self.get(row).into()
        } else {
            ItemData::None
        }
    }

    fn role_names(&self) -> RoleNames {
        let mut names = default_role_names();
        names.insert(ItemRole::MODEL_DATA, MODEL_DATA_ROLE_NAME);
        names
    }

    fn signals(&self) -> &ModelSignals {
        self.tracker.signals()
    }
}

impl<T: ObservableItem> fmt::Debug for ObjectListModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectListModel")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_list_core::Signal;

    struct Row {
        name: &'static str,
        changed: Signal<()>,
    }

    impl Row {
        fn new(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                changed: Signal::new(),
            })
        }
    }

    impl ObservableItem for Row {
        fn changed(&self) -> &Signal<()> {
            &self.changed
        }
    }

    fn names(model: &ObjectListModel<Row>) -> Vec<&'static str> {
        model.items().iter().map(|row| row.name).collect()
    }

    fn record_structure(model: &ObjectListModel<Row>) -> Arc<Mutex<Vec<String>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let signals = model.signals();

        let e = events.clone();
        signals
            .rows_inserted
            .connect(move |(f, l)| e.lock().push(format!("insert {f}..{l}")));
        let e = events.clone();
        signals
            .rows_removed
            .connect(move |(f, l)| e.lock().push(format!("remove {f}..{l}")));
        let e = events.clone();
        signals
            .model_reset
            .connect(move |_| e.lock().push("reset".to_string()));

        events
    }

    #[test]
    fn test_append_and_length() {
        let model = ObjectListModel::new();
        let events = record_structure(&model);

        model.append(Row::new("a"));
        model.append(Row::new("b"));

        assert_eq!(model.len(), 2);
        assert_eq!(model.length(), 2);
        assert_eq!(names(&model), vec!["a", "b"]);
        assert_eq!(*events.lock(), vec!["insert 0..0", "insert 1..1"]);
    }

    #[test]
    fn test_append_all_is_one_event() {
        let model = ObjectListModel::new();
        let events = record_structure(&model);

        model.append_all([Row::new("x"), Row::new("y"), Row::new("z")]);

        assert_eq!(model.length(), 3);
        assert_eq!(*events.lock(), vec!["insert 0..2"]);

        model.append_all(Vec::new());
        assert_eq!(events.lock().len(), 1);
    }

    #[test]
    fn test_remove_at_middle() {
        let model = ObjectListModel::with_items([Row::new("a"), Row::new("b"), Row::new("c")]);
        let events = record_structure(&model);

        let removed = model.remove_at(1).unwrap();

        assert_eq!(removed.name, "b");
        assert_eq!(names(&model), vec!["a", "c"]);
        assert_eq!(model.length(), 2);
        assert_eq!(*events.lock(), vec!["remove 1..1"]);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let model = ObjectListModel::with_items([Row::new("a")]);
        let events = record_structure(&model);

        model.insert(2, Row::new("late"));
        assert!(model.remove_at(1).is_none());
        assert!(model.item_at(1).is_none());

        assert_eq!(names(&model), vec!["a"]);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_insert_at_bounds() {
        let model = ObjectListModel::with_items([Row::new("b")]);
        model.insert(0, Row::new("a"));
        model.insert(2, Row::new("c"));
        assert_eq!(names(&model), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_one_uses_identity() {
        let twin_a = Row::new("same");
        let twin_b = Row::new("same");
        let model = ObjectListModel::with_items([twin_a.clone(), twin_b.clone()]);

        assert!(model.remove_one(&twin_b));
        assert!(model.contains(&twin_a));
        assert!(!model.contains(&twin_b));
        assert!(!model.remove_one(&twin_b));
    }

    #[test]
    fn test_remove_first_and_last() {
        let model = ObjectListModel::with_items([Row::new("a"), Row::new("b"), Row::new("c")]);

        assert_eq!(model.remove_first().unwrap().name, "a");
        assert_eq!(model.remove_last().unwrap().name, "c");
        assert_eq!(names(&model), vec!["b"]);

        model.clear();
        assert!(model.remove_first().is_none());
        assert!(model.remove_last().is_none());
    }

    #[test]
    fn test_replace_emits_remove_then_insert() {
        let model = ObjectListModel::with_items([Row::new("a"), Row::new("b")]);
        let events = record_structure(&model);

        let old = model.replace(1, Row::new("B"));

        assert_eq!(old.unwrap().name, "b");
        assert_eq!(names(&model), vec!["a", "B"]);
        assert_eq!(*events.lock(), vec!["remove 1..1", "insert 1..1"]);
    }

    #[test]
    fn test_replace_past_end_appends() {
        let model = ObjectListModel::with_items([Row::new("a")]);
        assert!(model.replace(1, Row::new("b")).is_none());
        assert_eq!(names(&model), vec!["a", "b"]);

        model.replace(5, Row::new("c"));
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_clear_resets() {
        let model = ObjectListModel::with_items([Row::new("a"), Row::new("b")]);
        let events = record_structure(&model);
        let counts = Arc::new(Mutex::new(Vec::new()));
        let c = counts.clone();
        model.signals().count_changed.connect(move |&n| c.lock().push(n));

        model.clear();

        assert!(model.is_empty());
        assert_eq!(model.length(), 0);
        assert_eq!(*events.lock(), vec!["reset"]);
        assert_eq!(*counts.lock(), vec![0]);
    }

    #[test]
    fn test_item_at_is_non_owning() {
        let model = ObjectListModel::with_items([Row::new("a")]);
        let weak = model.item_at(0).unwrap();
        assert_eq!(weak.upgrade().unwrap().name, "a");

        model.clear();
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_shared_handle_outlives_removal() {
        let model = ObjectListModel::with_items([Row::new("a")]);
        let held = model.get(0).unwrap();
        model.remove_at(0);
        assert_eq!(held.name, "a");
        assert_eq!(Arc::strong_count(&held), 1);
    }

    #[test]
    fn test_data_and_role_names() {
        let model = ObjectListModel::with_items([Row::new("a")]);

        let data = model.data(0, ItemRole::MODEL_DATA);
        assert_eq!(data.into_item().unwrap().name, "a");
        assert!(model.data(0, ItemRole::Display).is_none());
        assert!(model.data(1, ItemRole::MODEL_DATA).is_none());

        let roles = model.role_names();
        assert_eq!(roles[&ItemRole::MODEL_DATA], "modelData");
        assert_eq!(roles[&ItemRole::Display], "display");
        assert_eq!(model.row_count(), 1);
    }

    #[test]
    fn test_length_matches_storage_at_every_event() {
        let model = Arc::new(ObjectListModel::<Row>::new());
        let mismatches = Arc::new(Mutex::new(0));

        let check = |model: &Arc<ObjectListModel<Row>>| {
            let weak = Arc::downgrade(model);
            let mismatches = mismatches.clone();
            move |_: &(usize, usize)| {
                if let Some(model) = weak.upgrade() {
                    if model.len() != model.length() {
                        *mismatches.lock() += 1;
                    }
                }
            }
        };
        let signals = model.signals();
        signals.rows_about_to_be_inserted.connect(check(&model));
        signals.rows_inserted.connect(check(&model));
        signals.rows_about_to_be_removed.connect(check(&model));
        signals.rows_removed.connect(check(&model));

        model.append(Row::new("a"));
        model.append_all([Row::new("b"), Row::new("c")]);
        model.insert(1, Row::new("d"));
        model.remove_at(0);
        model.replace(1, Row::new("e"));
        model.remove_last();

        assert_eq!(*mismatches.lock(), 0);
        assert_eq!(model.len(), model.length());
    }

    #[test]
    fn test_item_change_is_forwarded_while_stored() {
        let a = Row::new("a");
        let b = Row::new("b");
        let model = ObjectListModel::with_items([a.clone(), b.clone()]);
        let changed = Arc::new(Mutex::new(Vec::new()));
        let c = changed.clone();
        model
            .signals()
            .data_changed
            .connect(move |&range| c.lock().push(range));

        b.changed.emit(());
        model.remove_at(0);
        b.changed.emit(());
        a.changed.emit(());

        assert_eq!(*changed.lock(), vec![(1, 1), (0, 0)]);
        assert_eq!(a.changed.connection_count(), 0);
    }

    #[test]
    fn test_shared_item_notifies_every_row() {
        let a = Row::new("a");
        let model = ObjectListModel::with_items([a.clone()]);
        model.append(a.clone());
        let changed = Arc::new(Mutex::new(Vec::new()));
        let c = changed.clone();
        model
            .signals()
            .data_changed
            .connect(move |&range| c.lock().push(range));

        a.changed.emit(());

        assert_eq!(*changed.lock(), vec![(0, 0), (1, 1)]);
        assert_eq!(a.changed.connection_count(), 1);
    }

    #[test]
    fn test_shared_item_stays_watched_until_last_row_leaves() {
        let a = Row::new("a");
        let b = Row::new("b");
        let model = ObjectListModel::with_items([a.clone(), b.clone(), a.clone()]);
        let changed = Arc::new(Mutex::new(Vec::new()));
        let c = changed.clone();
        model
            .signals()
            .data_changed
            .connect(move |&range| c.lock().push(range));

        model.remove_at(0);
        a.changed.emit(());
        assert_eq!(*changed.lock(), vec![(1, 1)]);
        assert_eq!(a.changed.connection_count(), 1);

        assert!(model.remove_one(&a));
        a.changed.emit(());
        assert_eq!(changed.lock().len(), 1);
        assert_eq!(a.changed.connection_count(), 0);
        assert_eq!(b.changed.connection_count(), 1);
    }

    #[test]
    fn test_clear_disconnects_shared_item() {
        let a = Row::new("a");
        let model = ObjectListModel::with_items([a.clone(), a.clone()]);
        model.clear();
        assert_eq!(a.changed.connection_count(), 0);

        model.append(a.clone());
        assert_eq!(a.changed.connection_count(), 1);
    }

    #[test]
    fn test_drop_disconnects_items() {
        let a = Row::new("a");
        {
            let _model = ObjectListModel::with_items([a.clone(), a.clone()]);
            assert_eq!(a.changed.connection_count(), 1);
        }
        assert_eq!(a.changed.connection_count(), 0);
    }

    #[test]
    fn test_extend_and_collect() {
        let mut model: ObjectListModel<Row> = [Row::new("a")].into_iter().collect();
        model.extend([Row::new("b"), Row::new("c")]);
        assert_eq!(names(&model), vec!["a", "b", "c"]);
        assert_eq!(model.first().unwrap().name, "a");
        assert_eq!(model.last().unwrap().name, "c");
    }
}
