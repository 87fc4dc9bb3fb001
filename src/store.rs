use anyhow::{anyhow, Context, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Item;

/// Field changes applied by [`ItemStore::update`]
#[derive(Debug, Default, Clone)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Shareable in-memory item store for use across async handlers
///
/// Items are kept in insertion order. Every operation holds the lock for its
/// whole read-modify-write, so concurrent requests are serialized here.
#[derive(Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    /// Create a store holding `items` in the given order.
    ///
    /// Ids in `items` must already be unique.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    /// Create a store holding the two startup items
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Item>>> {
        self.inner
            .read()
            .map_err(|_| anyhow!("Item store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Item>>> {
        self.inner
            .write()
            .map_err(|_| anyhow!("Item store lock poisoned"))
    }

    /// Return every item in insertion order
    pub fn list(&self) -> Result<Vec<Item>> {
        Ok(self.read()?.clone())
    }

    /// Find an item by id
    pub fn get(&self, id: i64) -> Result<Option<Item>> {
        Ok(self.read()?.iter().find(|item| item.id == id).cloned())
    }

    /// Append a new item and return it
    ///
    /// The id is one more than the largest live id, or 1 when the store is
    /// empty. Callers are responsible for rejecting an empty `name`.
    pub fn create(&self, name: String, description: String) -> Result<Item> {
        let mut items = self.write()?;
        let item = Item {
            id: next_id(&items)?,
            name,
            description,
        };
        items.push(item.clone());

        tracing::debug!("Inserted item with id: {}", item.id);
        Ok(item)
    }

    /// Apply `changes` to the item with the given id in place.
    ///
    /// A `name` is only applied when it is non-empty; an empty name is
    /// dropped without error. A `description` is applied whenever it is
    /// supplied, including the empty string. Returns `None` when no item has
    /// that id.
    pub fn update(&self, id: i64, changes: ItemChanges) -> Result<Option<Item>> {
        let mut items = self.write()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name.filter(|name| !name.is_empty()) {
            item.name = name;
        }
        if let Some(description) = changes.description {
            item.description = description;
        }

        tracing::debug!("Updated item with id: {}", id);
        Ok(Some(item.clone()))
    }

    /// Remove the item with the given id. Returns whether an item was removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let mut items = self.write()?;
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                tracing::debug!("Removed item with id: {}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn next_id(items: &[Item]) -> Result<i64> {
    match items.iter().map(|item| item.id).max() {
        Some(max) => max.checked_add(1).context("Item id space exhausted"),
        None => Ok(1),
    }
}

fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Item 1".to_string(),
            description: "First item".to_string(),
        },
        Item {
            id: 2,
            name: "Item 2".to_string(),
            description: "Second item".to_string(),
        },
    ]
}
