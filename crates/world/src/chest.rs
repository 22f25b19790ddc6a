//! Storage chest with its own 3x5 inventory grid.

use glam::Vec3;
use homestead_core::Inventory;
use homestead_physics::Aabb;

use crate::object::{Collidable, Interactable, Renderer, Spatial, WorldObject};
use crate::player::Player;

/// Rows in a chest's storage grid.
pub const CHEST_ROWS: usize = 3;
/// Columns in a chest's storage grid.
pub const CHEST_COLS: usize = 5;

/// A solid chest. Interacting toggles its UI open state; the world
/// coordinator routes slot clicks while it is open.
#[derive(Debug, Clone)]
pub struct Chest {
    position: Vec3,
    size: Vec3,
    /// Storage grid, independent from the player's inventory.
    pub inventory: Inventory,
    is_open: bool,
}

impl Chest {
    /// Place an empty chest at `position` with per-axis scale `size`.
    pub fn new(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            size,
            inventory: Inventory::new(CHEST_ROWS, CHEST_COLS),
            is_open: false,
        }
    }

    /// Whether the chest UI is currently open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Force the open state, used when the UI is dismissed externally.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }
}

impl Spatial for Chest {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn size(&self) -> Vec3 {
        self.size
    }
}

impl Collidable for Chest {
    fn collision_box(&self) -> Aabb {
        Aabb::new(Vec3::new(-0.4, 0.0, -0.4), Vec3::new(0.4, 0.8, 0.4))
    }
}

impl Interactable for Chest {
    fn on_interact(&mut self, _player: &mut Player) -> String {
        self.is_open = !self.is_open;
        if self.is_open {
            "Opened chest".to_owned()
        } else {
            "Closed chest".to_owned()
        }
    }

    fn interaction_prompt(&self) -> &'static str {
        "Press E to open chest"
    }
}

impl WorldObject for Chest {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_model("chest", self.position, self.size);
    }

    fn as_collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn as_interactable_mut(&mut self) -> Option<&mut dyn Interactable> {
        Some(self)
    }

    fn as_chest_mut(&mut self) -> Option<&mut Chest> {
        Some(self)
    }
}
