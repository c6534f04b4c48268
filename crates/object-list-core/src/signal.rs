//! Change notification for models and items.
//!
//! A [`Signal<Args>`] keeps a set of slots (closures) and calls each of them
//! when [`emit`](Signal::emit) is called. Every connection is direct: slots run
//! synchronously on the emitting thread before `emit` returns, which is what
//! list views rely on to keep begin/end change brackets ordered.
//!
//! - [`Signal<Args>`]: a notification source
//! - [`ConnectionId`]: handle for undoing a [`connect`](Signal::connect)
//!
//! # Re-entrancy
//!
//! The connection list is snapshotted before slots run. A slot may therefore
//! query the emitting object, connect new slots, or disconnect itself without
//! deadlocking; connections made during an emission take effect on the next
//! one.
//!
//! # Example
//!
//! ```
//! use object_list_core::Signal;
//!
//! let rows_inserted = Signal::<(usize, usize)>::new();
//!
//! let view = rows_inserted.connect(|&(first, last)| {
//!     println!("rows {first}..={last} appeared");
//! });
//!
//! rows_inserted.emit((0, 2));
//! rows_inserted.disconnect(view);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifies one slot connected to a [`Signal`].
    ///
    /// Stays valid until passed to [`Signal::disconnect`]; ids are never
    /// reused for later connections.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification source with any number of connected slots.
///
/// `Args` is what slots receive by reference: `()` for a bare "something
/// changed", `usize` for a new length, `(usize, usize)` for a row range.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Creates a signal nobody listens to yet.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Adds `slot` to the set called on every emission.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Removes the slot behind `id`.
    ///
    /// Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Calls every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "object_list_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        // Release the lock before running slots so they can touch this signal.
        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: "object_list_core::signal", slots = slots.len(), "emit");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.lock().len())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(Signal<(usize, usize)>: Send, Sync);
