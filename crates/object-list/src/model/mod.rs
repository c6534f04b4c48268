//! Model/View layer for object lists.
//!
//! Views never own the items they show. They ask a model for its row count,
//! fetch each row's item through a role and listen to the model's signals to
//! update incrementally instead of rebuilding.
//!
//! # Core Types
//!
//! - `ItemRole`: Specifies what facet of an item a view asks for
//! - `ItemData`: The answer to a data query
//! - `ItemModel`: The trait views consume
//! - `ModelSignals`: Bracketed change notifications
//! - `IndexedChangeTracker`: A row count that emits the notifications
//! - `ObjectListModel`: A typed list of shared objects built on the tracker
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use object_list::app::DataItem;
//! use object_list::model::{ItemModel, ObjectListModel};
//!
//! let model = ObjectListModel::new();
//! model.signals().rows_inserted.connect(|&(first, last)| {
//!     println!("rows {first}..={last} inserted");
//! });
//! model.signals().count_changed.connect(|&len| {
//!     println!("length is now {len}");
//! });
//!
//! model.append(Arc::new(DataItem::default()));
//! assert_eq!(model.row_count(), 1);
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  ObjectListModel │────>│ ModelSignals │────>│    View     │
//! │  (ItemModel)     │     │              │     │             │
//! └──────────────────┘     └──────────────┘     └─────────────┘
//!       │    ▲                                        │
//!       │    │ changed         ┌─────────────┐        │
//!       │  items ─────────────>│  ItemRole   │<───────┘
//!       │                      │  ItemData   │
//!       └─────────────────────>└─────────────┘
//! ```

mod change_tracker;
mod error;
mod object_list;
mod role;
mod traits;

pub use change_tracker::IndexedChangeTracker;
pub use error::{ModelError, ModelResult};
pub use object_list::ObjectListModel;
pub use role::{ItemData, ItemRole, MODEL_DATA_ROLE_NAME, RoleNames, default_role_names};
pub use traits::{ItemModel, ModelSignals, ObservableItem};
