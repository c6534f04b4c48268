//! Row bookkeeping for list models.
//!
//! [`IndexedChangeTracker`] holds no item data, only a row count, and emits the
//! bracketed structural signals a view needs to update incrementally. Typed
//! models compose one and mutate their storage inside its brackets.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::{ModelError, ModelResult};
use super::role::{ItemData, ItemRole};
use super::traits::{ItemModel, ModelSignals};

/// A row counter that announces structural changes.
///
/// Row positions and counts are signed because views usually compute them
/// (`count - n`, `index - 1`); a negative result is rejected instead of
/// wrapping around.
///
/// Every successful operation emits, in order: the "about to" signal, the
/// count update, the "done" signal, then [`ModelSignals::count_changed`].
/// Invalid operations emit nothing.
///
/// # Example
///
/// ```
/// use object_list::model::IndexedChangeTracker;
///
/// let tracker = IndexedChangeTracker::new();
/// tracker.push(3);
/// tracker.remove_at(1, 1);
/// assert_eq!(tracker.count(), 2);
///
/// // Out of range: silently ignored.
/// tracker.remove_at(5, 1);
/// assert_eq!(tracker.count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct IndexedChangeTracker {
    length: AtomicUsize,
    signals: ModelSignals,
}

impl IndexedChangeTracker {
    /// Creates a tracker with zero rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker that starts with `count` rows, without emitting.
    pub fn with_count(count: usize) -> Self {
        Self {
            length: AtomicUsize::new(count),
            signals: ModelSignals::new(),
        }
    }

    /// Returns the current row count.
    pub fn count(&self) -> usize {
        self.length.load(Ordering::SeqCst)
    }

    /// Returns the structural signals.
    pub fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    // -------------------------------------------------------------------------
    // Checked operations
    // -------------------------------------------------------------------------

    /// Inserts `count` rows at `index`, running `insert_fn` inside the bracket.
    ///
    /// Valid when `0 <= index <= count()` and `count >= 1`. On error nothing is
    /// emitted and `insert_fn` is not called.
    pub fn try_insert_with<F, R>(&self, index: isize, count: isize, insert_fn: F) -> ModelResult<R>
    where
        F: FnOnce() -> R,
    {
        let len = self.count();
        let (first, rows) = Self::check_insert(index, count, len)?;
        let last = first + rows - 1;

        let result = self.signals.emit_rows_inserted(first, last, || {
            let result = insert_fn();
            self.length.fetch_add(rows, Ordering::SeqCst);
            result
        });
        self.signals.count_changed.emit(self.count());
        Ok(result)
    }

    /// Removes `count` rows starting at `index`, running `remove_fn` inside the
    /// bracket.
    ///
    /// Valid when `0 <= index`, `index + count <= count()` and `count >= 1`.
    /// On error nothing is emitted and `remove_fn` is not called.
    pub fn try_remove_with<F, R>(&self, index: isize, count: isize, remove_fn: F) -> ModelResult<R>
    where
        F: FnOnce() -> R,
    {
        let len = self.count();
        let (first, rows) = Self::check_remove(index, count, len)?;
        let last = first + rows - 1;

        let result = self.signals.emit_rows_removed(first, last, || {
            let result = remove_fn();
            self.length.fetch_sub(rows, Ordering::SeqCst);
            result
        });
        self.signals.count_changed.emit(self.count());
        Ok(result)
    }

    /// Checked form of [`insert_at`](Self::insert_at).
    pub fn try_insert_at(&self, index: isize, count: isize) -> ModelResult<()> {
        self.try_insert_with(index, count, || ())
    }

    /// Checked form of [`remove_at`](Self::remove_at).
    pub fn try_remove_at(&self, index: isize, count: isize) -> ModelResult<()> {
        self.try_remove_with(index, count, || ())
    }

    fn check_insert(index: isize, count: isize, len: usize) -> ModelResult<(usize, usize)> {
        if count < 1 {
            return Err(ModelError::InvalidCount { count });
        }
        match usize::try_from(index) {
            Ok(first) if first <= len => Ok((first, count.unsigned_abs())),
            _ => Err(ModelError::InsertOutOfRange { index, len }),
        }
    }

    fn check_remove(index: isize, count: isize, len: usize) -> ModelResult<(usize, usize)> {
        if count < 1 {
            return Err(ModelError::InvalidCount { count });
        }
        let out_of_range = ModelError::RemoveOutOfRange { index, count, len };
        let first = usize::try_from(index).map_err(|_| out_of_range)?;
        let rows = count.unsigned_abs();
        match first.checked_add(rows) {
            Some(end) if len > 0 && end <= len => Ok((first, rows)),
            _ => Err(out_of_range),
        }
    }

    // -------------------------------------------------------------------------
    // Lenient operations
    // -------------------------------------------------------------------------

    /// Announces `count` new rows at `index`.
    ///
    /// Invalid arguments are ignored.
    pub fn insert_at(&self, index: isize, count: isize) {
        if let Err(err) = self.try_insert_at(index, count) {
            tracing::trace!(target: "object_list::model", %err, "ignored insert");
        }
    }

    /// Announces the removal of `count` rows starting at `index`.
    ///
    /// Invalid arguments are ignored.
    pub fn remove_at(&self, index: isize, count: isize) {
        if let Err(err) = self.try_remove_at(index, count) {
            tracing::trace!(target: "object_list::model", %err, "ignored remove");
        }
    }

    /// Appends `count` rows.
    pub fn push(&self, count: isize) {
        self.insert_at(self.signed_count(), count);
    }

    /// Removes the last `count` rows.
    pub fn pop(&self, count: isize) {
        self.remove_at(self.signed_count().saturating_sub(count), count);
    }

    /// Replaces the row count with `max(new_count, 0)`.
    ///
    /// Always emits the reset bracket, even if the count stays the same.
    pub fn reset(&self, new_count: isize) {
        self.reset_with(new_count, || ());
    }

    /// Resets to `max(new_count, 0)` rows, running `reset_fn` inside the bracket.
    pub fn reset_with<F, R>(&self, new_count: isize, reset_fn: F) -> R
    where
        F: FnOnce() -> R,
    {
        let rows = usize::try_from(new_count).unwrap_or(0);
        let result = self.signals.emit_reset(|| {
            let result = reset_fn();
            self.length.store(rows, Ordering::SeqCst);
            result
        });
        self.signals.count_changed.emit(self.count());
        result
    }

    fn signed_count(&self) -> isize {
        isize::try_from(self.count()).unwrap_or(isize::MAX)
    }
}

impl ItemModel for IndexedChangeTracker {
    type Item = ();

    fn row_count(&self) -> usize {
        self.count()
    }

    fn data(&self, _row: usize, _role: ItemRole) -> ItemData<()> {
        ItemData::None
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}
