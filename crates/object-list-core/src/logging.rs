//! Tracing integration for Object List.
//!
//! The libraries only emit `tracing` events; installing a subscriber is left
//! to the application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("object_list=debug,object_list_core=info")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "object_list_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "object_list_core::signal";
    /// Type registry target.
    pub const REGISTRY: &str = "object_list_core::registry";
    /// Model/view target (trackers and list models).
    pub const MODEL: &str = "object_list::model";
    /// Demo application target (items and providers).
    pub const APP: &str = "object_list::app";
}
