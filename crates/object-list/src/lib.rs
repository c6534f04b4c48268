//! Object List - observable object collections for declarative list views.
//!
//! This is the main crate: it re-exports the core systems and adds the
//! model/view layer plus a small demo application.
//!
//! # Example
//!
//! ```
//! use object_list::app::Provider;
//! use object_list::model::ItemModel;
//!
//! let provider = Provider::new();
//! provider.add_item();
//! provider.add_items3();
//! provider.remove_item();
//!
//! assert_eq!(provider.items().row_count(), 3);
//! ```

pub use object_list_core::*;

pub mod app;
pub mod model;
