//! The contracts between models, views and items.
//!
//! [`ItemModel`] is what a view adapter consumes, [`ModelSignals`] is what it
//! listens to, and [`ObservableItem`] is what an item must offer to be stored
//! in an object list.

use object_list_core::Signal;

use super::role::{ItemData, ItemRole, RoleNames, default_role_names};

/// The capability interface a view uses to render a flat list.
///
/// A view asks for the row count, pulls data row by row through
/// [`data`](ItemModel::data), binds delegates by [`role_names`](ItemModel::role_names)
/// and subscribes to [`signals`](ItemModel::signals) to update incrementally.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use object_list::model::{ItemData, ItemModel, ItemRole, ModelSignals};
///
/// struct Names {
///     rows: Vec<Arc<String>>,
///     notifications: ModelSignals,
/// }
///
/// impl ItemModel for Names {
///     type Item = String;
///
///     fn row_count(&self) -> usize {
///         self.rows.len()
///     }
///
///     fn data(&self, row: usize, role: ItemRole) -> ItemData<String> {
///         if role == ItemRole::MODEL_DATA {
///             self.rows.get(row).cloned().into()
///         } else {
///             ItemData::None
///         }
///     }
///
///     fn signals(&self) -> &ModelSignals {
///         &self.notifications
///     }
/// }
///
/// let names = Names { rows: vec![Arc::new("a".into())], notifications: ModelSignals::new() };
/// assert!(names.has_rows());
/// ```
pub trait ItemModel: Send + Sync {
    /// The type handed to delegates.
    type Item;

    /// Number of rows the view should show.
    fn row_count(&self) -> usize;

    /// Answers a view's query for one facet of a row.
    ///
    /// Out-of-range rows and unsupported roles yield `ItemData::None`.
    fn data(&self, row: usize, role: ItemRole) -> ItemData<Self::Item>;

    /// Role names delegates can bind against.
    fn role_names(&self) -> RoleNames {
        default_role_names()
    }

    /// Change notifications for this model.
    fn signals(&self) -> &ModelSignals;

    /// Returns `true` unless the model is empty.
    fn has_rows(&self) -> bool {
        self.row_count() > 0
    }
}

/// Items that announce their own mutations.
///
/// An object list forwards `changed` of the items it holds to its
/// [`ModelSignals::data_changed`] so views refresh the affected row.
pub trait ObservableItem: Send + Sync + 'static {
    /// Emitted after any property of the item changed.
    fn changed(&self) -> &Signal<()>;
}

/// Notifications a list model sends to its views.
///
/// Structural changes come in brackets. The `*_about_to_*` signal fires while
/// the model still has its old shape, the matching completion signal fires
/// once storage and row count agree again, and `count_changed` follows with
/// the new length. Ranges are inclusive `(first, last)` row pairs.
#[derive(Debug, Default)]
pub struct ModelSignals {
    /// Rows `first..=last` are about to appear.
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,
    /// Rows `first..=last` now exist.
    pub rows_inserted: Signal<(usize, usize)>,
    /// Rows `first..=last` are about to disappear.
    pub rows_about_to_be_removed: Signal<(usize, usize)>,
    /// Rows formerly at `first..=last` are gone.
    pub rows_removed: Signal<(usize, usize)>,
    /// Every row is about to be invalidated.
    pub model_about_to_reset: Signal<()>,
    /// The model was rebuilt; views re-query everything.
    pub model_reset: Signal<()>,
    /// The row count after a structural change.
    pub count_changed: Signal<usize>,
    /// Items in rows `first..=last` changed in place.
    pub data_changed: Signal<(usize, usize)>,
}

impl ModelSignals {
    /// Creates a set of signals without connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `insert_fn` inside an insertion bracket for `first..=last`.
    pub fn emit_rows_inserted<F, R>(&self, first: usize, last: usize, insert_fn: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.rows_about_to_be_inserted.emit((first, last));
        let result = insert_fn();
        self.rows_inserted.emit((first, last));
        result
    }

    /// Runs `remove_fn` inside a removal bracket for `first..=last`.
    pub fn emit_rows_removed<F, R>(&self, first: usize, last: usize, remove_fn: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.rows_about_to_be_removed.emit((first, last));
        let result = remove_fn();
        self.rows_removed.emit((first, last));
        result
    }

    /// Runs `reset_fn` inside a reset bracket.
    pub fn emit_reset<F, R>(&self, reset_fn: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.model_about_to_reset.emit(());
        let result = reset_fn();
        self.model_reset.emit(());
        result
    }

    /// Announces that the item in `row` changed.
    pub fn emit_data_changed_single(&self, row: usize) {
        self.data_changed.emit((row, row));
    }
}
