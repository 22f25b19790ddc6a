//! The five-slot hotbar holding the player's immediately "held" item.

use crate::inventory::Inventory;
use crate::item::{Item, ItemKind};

/// Number of hotbar slots.
pub const HOTBAR_SLOTS: usize = 5;

/// A 1x5 inventory specialization with a selected slot. The item in the
/// selected slot is what the player is holding for tool, seed, and sell
/// interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotbar {
    inventory: Inventory,
    selected_slot: usize,
}

impl Hotbar {
    /// Create an empty hotbar with slot 0 selected.
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(1, HOTBAR_SLOTS),
            selected_slot: 0,
        }
    }

    /// Currently selected slot index (0-4).
    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    /// Select a slot by explicit index. Out-of-range indices are ignored.
    pub fn select_slot(&mut self, index: usize) {
        if index < HOTBAR_SLOTS {
            self.selected_slot = index;
        }
    }

    /// Move the selection by `direction` slots, wrapping in both directions.
    pub fn scroll(&mut self, direction: i32) {
        let count = HOTBAR_SLOTS as i32;
        self.selected_slot = (self.selected_slot as i32 + direction).rem_euclid(count) as usize;
    }

    /// Item in the selected slot.
    pub fn selected_item(&self) -> Option<&Item> {
        self.inventory.get_item(0, self.selected_slot)
    }

    /// Mutable access to the item in the selected slot.
    pub fn selected_item_mut(&mut self) -> Option<&mut Item> {
        self.inventory.get_item_mut(0, self.selected_slot)
    }

    /// Remove and return the whole selected stack.
    pub fn take_selected(&mut self) -> Option<Item> {
        self.inventory.remove_item(0, self.selected_slot)
    }

    /// True when the selected slot holds an item of `kind`.
    pub fn holds(&self, kind: ItemKind) -> bool {
        self.selected_item().is_some_and(|item| item.kind == kind)
    }

    /// Remove one unit from the selected stack, clearing the slot when it
    /// reaches zero. Returns `false` when the selected slot is empty.
    pub fn consume_selected_one(&mut self) -> bool {
        let Some(item) = self.inventory.get_item_mut(0, self.selected_slot) else {
            return false;
        };
        item.count -= 1;
        if item.count == 0 {
            self.inventory.remove_item(0, self.selected_slot);
        }
        true
    }

    /// Place a stack into a hotbar slot, returning whatever it displaced.
    pub fn put_item(&mut self, slot: usize, item: Item) -> Result<Option<Item>, Item> {
        self.inventory.put_item(0, slot, item)
    }

    /// Read access to the underlying 1x5 grid.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the underlying grid, used for slot transfers.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

impl Default for Hotbar {
    fn default() -> Self {
        Self::new()
    }
}
