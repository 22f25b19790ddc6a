//! World objects, capability traits, and the per-frame coordinator.

#![warn(missing_docs)]

mod chest;
mod crate_box;
mod dirt_block;
mod object;
mod pickup;
mod player;
mod selling_point;
mod table;
mod ui;
mod world;

pub use chest::{Chest, CHEST_COLS, CHEST_ROWS};
pub use crate_box::CrateBox;
pub use dirt_block::{BlockState, DirtBlock, DEFAULT_GROWTH_DURATION};
pub use object::{Collidable, DialogueSink, Interactable, Pickable, Renderer, Spatial, WorldObject};
pub use pickup::Pickup;
pub use player::{Player, DEFAULT_INTERACTION_RANGE, DEFAULT_SPEED};
pub use selling_point::SellingPoint;
pub use table::Table;
pub use ui::{GridLayout, SLOT_PADDING, SLOT_SIZE};
pub use world::World;
