//! Business logic exposing a list of [`DataItem`]s to a view.

use std::sync::Arc;

use crate::model::ObjectListModel;

use super::config::ProviderConfig;
use super::data_item::DataItem;

/// Owns the item list and the operations a view can trigger on it.
///
/// Items created by the provider get the id the list length had when they
/// were added.
#[derive(Debug, Default)]
pub struct Provider {
    items: ObjectListModel<DataItem>,
    config: ProviderConfig,
}

impl Provider {
    /// Creates a provider with an empty list and the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider with an empty list and the given config.
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            items: ObjectListModel::new(),
            config,
        }
    }

    /// The list views bind to.
    pub fn items(&self) -> &ObjectListModel<DataItem> {
        &self.items
    }

    /// The active config.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Appends one item.
    pub fn add_item(&self) {
        let item = self.new_item(0);
        tracing::debug!(target: "object_list::app", id = item.id(), "add item");
        self.items.append(item);
    }

    /// Appends three items at once.
    pub fn add_items3(&self) {
        let batch: Vec<_> = (0..3).map(|offset| self.new_item(offset)).collect();
        tracing::debug!(target: "object_list::app", first_id = batch[0].id(), "add three items");
        self.items.append_all(batch);
    }

    /// Replaces the middle item with the configured replacement.
    pub fn change_item(&self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }

        let index = len / 2;
        let item = DataItem::new(self.config.replacement_id, self.config.replacement_value.clone());
        tracing::debug!(target: "object_list::app", index, "change item");
        self.items.replace(index, Arc::new(item));
    }

    /// Removes the middle item.
    pub fn remove_item(&self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }

        let index = len / 2;
        tracing::debug!(target: "object_list::app", index, "remove item");
        self.items.remove_at(index);
    }

    fn new_item(&self, offset: usize) -> Arc<DataItem> {
        let id = self.items.len().saturating_add(offset);
        let id = i32::try_from(id).unwrap_or(i32::MAX);
        Arc::new(DataItem::new(id, self.config.default_value.clone()))
    }
}

static_assertions::assert_impl_all!(Provider: Send, Sync);
