#![warn(missing_docs)]
//! Core item and inventory primitives shared across the workspace.

pub mod hotbar;
pub mod inventory;
pub mod item;

// Re-export commonly used types
pub use hotbar::{Hotbar, HOTBAR_SLOTS};
pub use inventory::Inventory;
pub use item::{Item, ItemKind, MAX_STACK};
