//! Consumable items and the player's inventory.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Heal,
    Buff,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub magnitude: u32,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ItemCategory,
        magnitude: u32,
    ) -> Self {
        Self { name: name.into(), description: description.into(), category, magnitude }
    }
}

/// Ordered item list. Entries are removed when used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Remove and return the entry at `index`, keeping the order of the rest.
    pub fn take(&mut self, index: usize) -> Option<Item> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potion() -> Item {
        Item::new("Health Potion", "Restores 20 HP", ItemCategory::Heal, 20)
    }

    #[test]
    fn take_removes_entry_and_preserves_order() {
        let mut inventory = Inventory::new();
        inventory.add(potion());
        inventory.add(Item::new("Berserk Potion", "+5 attack", ItemCategory::Buff, 5));
        inventory.add(Item::new("Pebble", "Does nothing", ItemCategory::Other, 0));

        let taken = inventory.take(1).expect("slot 1 should exist");
        assert_eq!(taken.name, "Berserk Potion");
        assert_eq!(inventory.len(), 2);
        let names: Vec<&str> = inventory.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Health Potion", "Pebble"]);
    }

    #[test]
    fn take_out_of_range_leaves_inventory_untouched() {
        let mut inventory: Inventory = [potion()].into_iter().collect();
        assert!(inventory.take(3).is_none());
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn empty_inventory_reports_empty() {
        let mut inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert!(inventory.take(0).is_none());
    }
}
