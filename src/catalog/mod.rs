//! Static price table used by the cost estimator.
//!
//! The catalog is loaded once at startup (built-in table or an operator file)
//! and shared read-only behind an `Arc` for the life of the process.

pub mod loader;
pub mod models;

use std::collections::HashSet;
use thiserror::Error;

pub use loader::{load_catalog, load_catalog_file, parse_catalog_json, parse_catalog_toml};
pub use models::{AddonGroup, AddonItem, Catalog, EventTypeDefinition, GuestCount, Money};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog defines no event types")]
    NoEventTypes,
    #[error("{0} id cannot be empty")]
    EmptyId(&'static str),
    #[error("event type '{0}' is defined more than once")]
    DuplicateEventType(String),
    #[error("add-on group '{0}' is defined more than once")]
    DuplicateGroup(String),
    #[error("event type '{event_type}' references unknown add-on group '{group}'")]
    UnknownGroup { event_type: String, group: String },
    #[error("add-on group '{0}' has no items")]
    EmptyGroup(String),
    #[error("add-on item '{0}' is defined more than once")]
    DuplicateItem(String),
    #[error("failed to parse catalog: {0}")]
    Parse(String),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

impl Catalog {
    /// The KaSha price table shipped with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        parse_catalog_json(BUILTIN_CATALOG)
    }

    pub fn event_type(&self, id: &str) -> Option<&EventTypeDefinition> {
        self.event_types.iter().find(|e| e.id == id)
    }

    pub fn group(&self, group_id: &str) -> Option<&AddonGroup> {
        self.addon_groups.iter().find(|g| g.group_id == group_id)
    }

    /// Groups valid for `event_type`, in the event type's declared order.
    /// Unresolvable ids are skipped.
    pub fn applicable_groups<'a>(
        &'a self,
        event_type: &'a EventTypeDefinition,
    ) -> impl Iterator<Item = &'a AddonGroup> + 'a {
        event_type
            .applicable_addon_group_ids
            .iter()
            .filter_map(move |id| self.group(id))
    }

    /// First declared event type; the form's initial selection
    pub fn default_event_type(&self) -> Option<&EventTypeDefinition> {
        self.event_types.first()
    }

    /// Look up an add-on item and its group anywhere in the catalog
    pub fn addon_item(&self, item_id: &str) -> Option<(&AddonGroup, &AddonItem)> {
        self.addon_groups.iter().find_map(|group| {
            group
                .items
                .iter()
                .find(|item| item.id == item_id)
                .map(|item| (group, item))
        })
    }

    pub fn item_count(&self) -> usize {
        self.addon_groups.iter().map(|g| g.items.len()).sum()
    }

    /// Check the structural invariants of the price table
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.event_types.is_empty() {
            return Err(CatalogError::NoEventTypes);
        }

        let mut group_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for group in &self.addon_groups {
            if group.group_id.is_empty() {
                return Err(CatalogError::EmptyId("add-on group"));
            }
            if !group_ids.insert(group.group_id.as_str()) {
                return Err(CatalogError::DuplicateGroup(group.group_id.clone()));
            }
            if group.items.is_empty() {
                return Err(CatalogError::EmptyGroup(group.group_id.clone()));
            }
            for item in &group.items {
                if item.id.is_empty() {
                    return Err(CatalogError::EmptyId("add-on item"));
                }
                if !item_ids.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateItem(item.id.clone()));
                }
            }
        }

        let mut event_ids = HashSet::new();
        for event_type in &self.event_types {
            if event_type.id.is_empty() {
                return Err(CatalogError::EmptyId("event type"));
            }
            if !event_ids.insert(event_type.id.as_str()) {
                return Err(CatalogError::DuplicateEventType(event_type.id.clone()));
            }
            for group in &event_type.applicable_addon_group_ids {
                if !group_ids.contains(group.as_str()) {
                    return Err(CatalogError::UnknownGroup {
                        event_type: event_type.id.clone(),
                        group: group.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
