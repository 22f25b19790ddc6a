//! Item system - crops, produce, tools, and other stackable goods.

use serde::{Deserialize, Serialize};

/// Maximum number of items in a single stack.
pub const MAX_STACK: u32 = 64;

/// Item kind identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Plantable tomato seed.
    TomatoSeed,
    /// Harvested tomato produce.
    Tomato,
    /// Burger food item.
    Burger,
    /// Hoe - tills dirt into farmland. Not sellable.
    Hoe,
    /// Cow prop collected as an inert item.
    Cow,
}

impl ItemKind {
    /// Human-readable display name.
    pub fn display_name(self) -> &'static str {
        match self {
            ItemKind::TomatoSeed => "Tomato Seed",
            ItemKind::Tomato => "Tomato",
            ItemKind::Burger => "Burger",
            ItemKind::Hoe => "Hoe",
            ItemKind::Cow => "Cow",
        }
    }

    /// Unit sell price in coins. Zero marks the kind as non-sellable (tools).
    pub fn sell_price(self) -> u32 {
        match self {
            ItemKind::TomatoSeed => 2,
            ItemKind::Tomato => 10,
            ItemKind::Burger => 25,
            ItemKind::Hoe => 0,
            ItemKind::Cow => 50,
        }
    }

    /// Whether a selling point accepts this kind.
    pub fn is_sellable(self) -> bool {
        self.sell_price() > 0
    }

    /// Flat color used when the texture for this kind is unavailable.
    pub fn fallback_color(self) -> [f32; 3] {
        match self {
            ItemKind::TomatoSeed => [0.8, 0.2, 0.2],
            ItemKind::Tomato => [0.9, 0.1, 0.1],
            ItemKind::Burger => [0.8, 0.6, 0.2],
            ItemKind::Hoe => [0.0, 0.0, 0.0],
            ItemKind::Cow => [0.9, 0.9, 0.85],
        }
    }

    /// Key the renderer uses to look up this kind's texture.
    pub fn texture_key(self) -> Option<&'static str> {
        match self {
            ItemKind::TomatoSeed => Some("tomato_seed"),
            ItemKind::Tomato => Some("tomato"),
            ItemKind::Burger => Some("burger"),
            ItemKind::Hoe => Some("hoe"),
            ItemKind::Cow => Some("cow"),
        }
    }

    /// Produce granted when a planted seed of this kind is harvested.
    /// `None` for kinds that cannot be planted.
    pub fn harvest_produce(self) -> Option<ItemKind> {
        match self {
            ItemKind::TomatoSeed => Some(ItemKind::Tomato),
            _ => None,
        }
    }

    /// True for kinds that can be planted on farmland.
    pub fn is_seed(self) -> bool {
        self.harvest_produce().is_some()
    }
}

/// An item stack occupying one inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Kind of item.
    pub kind: ItemKind,
    /// Quantity in the stack, never above [`MAX_STACK`].
    pub count: u32,
}

impl Item {
    /// Create a new item stack.
    pub fn new(kind: ItemKind, count: u32) -> Self {
        debug_assert!(count <= MAX_STACK);
        Self { kind, count }
    }

    /// Convenience constructor for a single item.
    pub fn single(kind: ItemKind) -> Self {
        Self::new(kind, 1)
    }

    /// Whether the stack is at capacity.
    pub fn is_full(&self) -> bool {
        self.count >= MAX_STACK
    }

    /// How many more items fit into this stack.
    pub fn space_left(&self) -> u32 {
        MAX_STACK.saturating_sub(self.count)
    }
}
