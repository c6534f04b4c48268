//! Data roles for item models.
//!
//! Roles define which facet of an item a view is asking for. Object list
//! models answer a single role, [`ItemRole::MODEL_DATA`], with the item
//! itself; the standard roles are still named so generic views can inspect
//! them.

use std::collections::HashMap;
use std::sync::Arc;

/// Role name under which list models expose the whole item to delegates.
///
/// The name matches what views use for plain array models, so arrays can
/// stand in for real models while prototyping a view.
pub const MODEL_DATA_ROLE_NAME: &str = "modelData";

/// Standard roles for accessing different aspects of item data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary text to display.
    Display,
    /// Icon or decoration to show.
    Decoration,
    /// Value for editing.
    Edit,
    /// Tooltip text shown on hover.
    ToolTip,
    /// Text shown in status bar.
    StatusTip,
    /// Extended "What's This?" help text.
    WhatsThis,
    /// Application-specific roles, numbered from 256.
    User(u32),
}

impl ItemRole {
    /// The role answering with the item object itself.
    pub const MODEL_DATA: ItemRole = ItemRole::User(0);

    /// Returns `true` if this is a user-defined role.
    #[inline]
    pub fn is_user_role(&self) -> bool {
        matches!(self, ItemRole::User(_))
    }

    /// Returns the numeric value of this role.
    ///
    /// User roles too large to offset by 256 saturate at `u32::MAX`.
    pub fn value(&self) -> u32 {
        match self {
            ItemRole::Display => 0,
            ItemRole::Decoration => 1,
            ItemRole::Edit => 2,
            ItemRole::ToolTip => 3,
            ItemRole::StatusTip => 4,
            ItemRole::WhatsThis => 5,
            ItemRole::User(n) => 256u32.saturating_add(*n),
        }
    }

    /// Creates an ItemRole from a numeric value.
    ///
    /// Returns `None` for values with no standard role (6-255).
    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            0 => Some(ItemRole::Display),
            1 => Some(ItemRole::Decoration),
            2 => Some(ItemRole::Edit),
            3 => Some(ItemRole::ToolTip),
            4 => Some(ItemRole::StatusTip),
            5 => Some(ItemRole::WhatsThis),
            6..=255 => None,
            n => Some(ItemRole::User(n - 256)),
        }
    }
}

/// Mapping from role to the name delegates bind against.
pub type RoleNames = HashMap<ItemRole, &'static str>;

/// Names of the standard roles.
pub fn default_role_names() -> RoleNames {
    HashMap::from([
        (ItemRole::Display, "display"),
        (ItemRole::Decoration, "decoration"),
        (ItemRole::Edit, "edit"),
        (ItemRole::ToolTip, "toolTip"),
        (ItemRole::StatusTip, "statusTip"),
        (ItemRole::WhatsThis, "whatsThis"),
    ])
}

/// Result of a data query.
///
/// Object list models hand out the item itself, so the payload is a shared
/// handle rather than a value copy.
#[derive(Debug)]
pub enum ItemData<T> {
    /// No data for this row/role.
    None,
    /// The item stored at the row.
    Item(Arc<T>),
}

impl<T> Clone for ItemData<T> {
    fn clone(&self) -> Self {
        match self {
            ItemData::None => ItemData::None,
            ItemData::Item(item) => ItemData::Item(Arc::clone(item)),
        }
    }
}

impl<T> Default for ItemData<T> {
    fn default() -> Self {
        ItemData::None
    }
}

impl<T> ItemData<T> {
    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns `true` if this holds an item.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Borrows the item, if any.
    pub fn as_item(&self) -> Option<&Arc<T>> {
        match self {
            ItemData::Item(item) => Some(item),
            ItemData::None => None,
        }
    }

    /// Converts into the item handle, if any.
    pub fn into_item(self) -> Option<Arc<T>> {
        match self {
            ItemData::Item(item) => Some(item),
            ItemData::None => None,
        }
    }
}

impl<T> From<Option<Arc<T>>> for ItemData<T> {
    fn from(item: Option<Arc<T>>) -> Self {
        item.map_or(ItemData::None, ItemData::Item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_role_values() {
        assert_eq!(ItemRole::Display.value(), 0);
        assert_eq!(ItemRole::WhatsThis.value(), 5);
        assert_eq!(ItemRole::MODEL_DATA.value(), 256);
        assert_eq!(ItemRole::User(10).value(), 266);
    }

    #[test]
    fn test_large_user_role_saturates() {
        assert_eq!(ItemRole::User(u32::MAX).value(), u32::MAX);
        assert_eq!(ItemRole::User(u32::MAX - 256).value(), u32::MAX);
        assert_eq!(ItemRole::from_value(u32::MAX), Some(ItemRole::User(u32::MAX - 256)));
    }

    #[test]
    fn test_item_role_from_value() {
        assert_eq!(ItemRole::from_value(0), Some(ItemRole::Display));
        assert_eq!(ItemRole::from_value(256), Some(ItemRole::MODEL_DATA));
        assert_eq!(ItemRole::from_value(100), None);
        assert!(ItemRole::from_value(300).unwrap().is_user_role());
    }

    #[test]
    fn test_default_role_names() {
        let names = default_role_names();
        assert_eq!(names.len(), 6);
        assert_eq!(names[&ItemRole::Display], "display");
        assert!(!names.contains_key(&ItemRole::MODEL_DATA));
    }

    #[test]
    fn test_item_data_from_option() {
        let data = ItemData::from(Some(Arc::new(5)));
        assert!(data.is_some());
        assert_eq!(data.as_item().map(|v| **v), Some(5));

        let empty: ItemData<i32> = ItemData::from(None);
        assert!(empty.is_none());
        assert!(empty.into_item().is_none());
    }
}
