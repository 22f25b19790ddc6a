//! Fixed-size slot grids shared by the player inventory, hotbar, and chests.

use crate::item::{Item, ItemKind, MAX_STACK};

/// A row-major grid of optional item stacks. Dimensions are fixed at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    rows: usize,
    cols: usize,
    slots: Vec<Option<Item>>,
}

impl Inventory {
    /// Create an empty grid with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            slots: vec![None; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Read-only slot access. Out-of-range addresses read as empty.
    pub fn get_item(&self, row: usize, col: usize) -> Option<&Item> {
        self.index(row, col).and_then(|i| self.slots[i].as_ref())
    }

    /// Mutable slot access. Out-of-range addresses read as empty.
    pub fn get_item_mut(&mut self, row: usize, col: usize) -> Option<&mut Item> {
        self.index(row, col).and_then(|i| self.slots[i].as_mut())
    }

    /// Clear a slot and return its stack, or `None` when out of bounds or
    /// already empty.
    pub fn remove_item(&mut self, row: usize, col: usize) -> Option<Item> {
        self.index(row, col).and_then(|i| self.slots[i].take())
    }

    /// Place a stack directly into a slot, returning whatever it displaced.
    /// Fails (returns the incoming stack) when the address is out of bounds.
    pub fn put_item(&mut self, row: usize, col: usize, item: Item) -> Result<Option<Item>, Item> {
        match self.index(row, col) {
            Some(i) => Ok(self.slots[i].replace(item)),
            None => Err(item),
        }
    }

    /// Add a stack, merging into same-kind slots and filling empty slots in
    /// row-major scan order. Merges clamp at [`MAX_STACK`] and the remainder
    /// spills into later slots. All-or-nothing: when the whole count does not
    /// fit, nothing is mutated and `false` is returned.
    pub fn add_item(&mut self, item: Item) -> bool {
        if item.count == 0 {
            return true;
        }

        let mut capacity = 0u32;
        for slot in &self.slots {
            capacity += match slot {
                None => MAX_STACK,
                Some(existing) if existing.kind == item.kind => existing.space_left(),
                Some(_) => 0,
            };
            if capacity >= item.count {
                break;
            }
        }
        if capacity < item.count {
            return false;
        }

        let mut remaining = item.count;
        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            match slot {
                Some(existing) if existing.kind == item.kind && !existing.is_full() => {
                    let moved = remaining.min(existing.space_left());
                    existing.count += moved;
                    remaining -= moved;
                }
                None => {
                    let moved = remaining.min(MAX_STACK);
                    *slot = Some(Item::new(item.kind, moved));
                    remaining -= moved;
                }
                _ => {}
            }
        }
        debug_assert_eq!(remaining, 0);
        true
    }

    /// Move the stack at `from` into `other`'s `to` slot.
    ///
    /// Destination empty: the whole stack relocates. Same kind: merge up to
    /// the destination's remaining capacity, leaving any overflow remainder
    /// in the source slot. Different kind: the two slots swap atomically.
    /// Returns `false` when either address is out of bounds or the source
    /// slot is empty.
    pub fn transfer_item(
        &mut self,
        from: (usize, usize),
        other: &mut Inventory,
        to: (usize, usize),
    ) -> bool {
        let Some(from_idx) = self.index(from.0, from.1) else {
            return false;
        };
        let Some(to_idx) = other.index(to.0, to.1) else {
            return false;
        };
        let Some(mut item) = self.slots[from_idx].take() else {
            return false;
        };

        match &mut other.slots[to_idx] {
            dest @ None => {
                *dest = Some(item);
            }
            Some(dest) if dest.kind == item.kind => {
                let moved = item.count.min(dest.space_left());
                dest.count += moved;
                item.count -= moved;
                if item.count > 0 {
                    self.slots[from_idx] = Some(item);
                }
            }
            Some(_) => {
                let displaced = other.slots[to_idx].replace(item);
                self.slots[from_idx] = displaced;
            }
        }
        true
    }

    /// Total quantity of `kind` held across all slots.
    pub fn total_of(&self, kind: ItemKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|item| item.kind == kind)
            .map(|item| item.count)
            .sum()
    }

    /// True when no slot holds an item.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate over all slots with their (row, col) addresses.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Option<&Item>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(move |(i, slot)| ((i / self.cols, i % self.cols), slot.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_fills_grid_exactly_once_per_slot() {
        let mut inv = Inventory::new(2, 3);
        // Full stacks cannot merge, so each add claims a fresh slot.
        for _ in 0..6 {
            assert!(inv.add_item(Item::new(ItemKind::Burger, MAX_STACK)));
        }
        assert!(!inv.add_item(Item::new(ItemKind::Burger, 1)));
        assert_eq!(inv.total_of(ItemKind::Burger), 6 * MAX_STACK);
    }

    #[test]
    fn add_stacks_into_existing_slot() {
        let mut inv = Inventory::new(1, 3);
        assert!(inv.add_item(Item::new(ItemKind::TomatoSeed, 5)));
        assert!(inv.add_item(Item::new(ItemKind::TomatoSeed, 3)));
        assert_eq!(inv.get_item(0, 0).unwrap().count, 8);
        assert!(inv.get_item(0, 1).is_none());
    }

    #[test]
    fn merge_clamps_and_spills_into_next_slot() {
        let mut inv = Inventory::new(1, 3);
        assert!(inv.add_item(Item::new(ItemKind::Tomato, 60)));
        assert!(inv.add_item(Item::new(ItemKind::Tomato, 10)));
        assert_eq!(inv.get_item(0, 0).unwrap().count, MAX_STACK);
        assert_eq!(inv.get_item(0, 1).unwrap().count, 6);
    }

    #[test]
    fn add_is_all_or_nothing_when_full() {
        let mut inv = Inventory::new(1, 2);
        assert!(inv.add_item(Item::new(ItemKind::Tomato, 60)));
        assert!(inv.add_item(Item::new(ItemKind::Burger, 60)));
        // 4 units of tomato capacity remain; 10 must be rejected untouched.
        assert!(!inv.add_item(Item::new(ItemKind::Tomato, 10)));
        assert_eq!(inv.get_item(0, 0).unwrap().count, 60);
        assert_eq!(inv.total_of(ItemKind::Tomato), 60);
    }

    #[test]
    fn earlier_empty_slot_wins_over_later_stackable() {
        let mut inv = Inventory::new(1, 3);
        inv.put_item(0, 1, Item::new(ItemKind::Tomato, 5)).unwrap();
        assert!(inv.add_item(Item::new(ItemKind::Tomato, 3)));
        // Scan order reaches the empty (0,0) slot first.
        assert_eq!(inv.get_item(0, 0).unwrap().count, 3);
        assert_eq!(inv.get_item(0, 1).unwrap().count, 5);
    }

    #[test]
    fn out_of_range_addresses_read_as_empty() {
        let mut inv = Inventory::new(2, 2);
        assert!(inv.get_item(5, 0).is_none());
        assert!(inv.get_item(0, 9).is_none());
        assert!(inv.remove_item(2, 0).is_none());
        assert!(inv.put_item(9, 9, Item::single(ItemKind::Hoe)).is_err());
    }

    #[test]
    fn remove_clears_the_slot() {
        let mut inv = Inventory::new(1, 1);
        inv.add_item(Item::new(ItemKind::Burger, 3));
        let removed = inv.remove_item(0, 0).unwrap();
        assert_eq!(removed.count, 3);
        assert!(inv.is_empty());
        assert!(inv.remove_item(0, 0).is_none());
    }

    #[test]
    fn transfer_into_empty_slot_relocates() {
        let mut src = Inventory::new(1, 1);
        let mut dst = Inventory::new(1, 1);
        src.add_item(Item::new(ItemKind::Tomato, 7));
        assert!(src.transfer_item((0, 0), &mut dst, (0, 0)));
        assert!(src.is_empty());
        assert_eq!(dst.get_item(0, 0).unwrap().count, 7);
    }

    #[test]
    fn transfer_merges_and_leaves_remainder_in_source() {
        let mut src = Inventory::new(1, 1);
        let mut dst = Inventory::new(1, 1);
        src.add_item(Item::new(ItemKind::Tomato, 20));
        dst.add_item(Item::new(ItemKind::Tomato, 60));
        assert!(src.transfer_item((0, 0), &mut dst, (0, 0)));
        assert_eq!(dst.get_item(0, 0).unwrap().count, MAX_STACK);
        assert_eq!(src.get_item(0, 0).unwrap().count, 16);
    }

    #[test]
    fn transfer_swaps_different_kinds() {
        let mut src = Inventory::new(1, 1);
        let mut dst = Inventory::new(1, 1);
        src.add_item(Item::new(ItemKind::Tomato, 2));
        dst.add_item(Item::new(ItemKind::Burger, 4));
        assert!(src.transfer_item((0, 0), &mut dst, (0, 0)));
        assert_eq!(src.get_item(0, 0).unwrap().kind, ItemKind::Burger);
        assert_eq!(dst.get_item(0, 0).unwrap().kind, ItemKind::Tomato);
    }

    #[test]
    fn transfer_from_empty_slot_fails() {
        let mut src = Inventory::new(1, 1);
        let mut dst = Inventory::new(1, 1);
        assert!(!src.transfer_item((0, 0), &mut dst, (0, 0)));
    }

    proptest! {
        // On an empty N*M grid, N*M distinct-slot adds succeed and the next
        // one fails.
        #[test]
        fn grid_capacity_is_rows_times_cols(rows in 1usize..5, cols in 1usize..7) {
            let mut inv = Inventory::new(rows, cols);
            for _ in 0..rows * cols {
                prop_assert!(inv.add_item(Item::new(ItemKind::Hoe, MAX_STACK)));
            }
            prop_assert!(!inv.add_item(Item::new(ItemKind::Hoe, 1)));
        }

        // No sequence of adds may push a stack above MAX_STACK.
        #[test]
        fn stacks_never_exceed_max(counts in proptest::collection::vec(1u32..=MAX_STACK, 1..12)) {
            let mut inv = Inventory::new(2, 3);
            for count in counts {
                let _ = inv.add_item(Item::new(ItemKind::TomatoSeed, count));
                for ((_, _), slot) in inv.iter() {
                    if let Some(item) = slot {
                        prop_assert!(item.count <= MAX_STACK);
                    }
                }
            }
        }
    }
}
