//! Demo application layer.
//!
//! A [`Provider`] owns an object list of [`DataItem`]s and exposes the
//! operations a view's buttons trigger. [`register_types`] makes the types
//! known to a [`TypeRegistry`](crate::TypeRegistry) under the `App` module.

mod config;
mod data_item;
mod provider;
mod registration;

pub use config::{ConfigError, ProviderConfig};
pub use data_item::DataItem;
pub use provider::Provider;
pub use registration::{APP_MODULE, APP_VERSION, register_types};
