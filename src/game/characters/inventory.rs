// Ordered, index-addressed item storage

use super::PlayerError;
use crate::game::items::Item;

/// Items in pickup order; the slot index is what the UI shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the last slot
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Result<&Item, PlayerError> {
        self.items.get(index).ok_or(PlayerError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Take an item out, shifting later slots down by one
    pub fn remove(&mut self, index: usize) -> Result<Item, PlayerError> {
        if index >= self.items.len() {
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    #[allow(dead_code)]
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
