//! Core systems for Object List.
//!
//! This crate provides the building blocks the model/view layer is made of:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property System**: Values that report whether an assignment changed them
//! - **Type Registry**: Registration of native types for the view layer
//! - **Logging**: `tracing` targets used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use object_list_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod registry;
pub mod signal;

pub use error::{RegistryError, RegistryResult};
pub use property::Property;
pub use registry::{TypeInfo, TypeRegistry, TypeVersion};
pub use signal::{ConnectionId, Signal};
