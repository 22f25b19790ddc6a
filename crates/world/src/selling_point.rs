//! Selling point: converts the held item into coins.

use glam::Vec3;
use homestead_physics::Aabb;

use crate::object::{Collidable, Interactable, Renderer, Spatial, WorldObject};
use crate::player::Player;

/// A market stall. Selling always draws from the hotbar's selected slot, one
/// unit per interaction.
#[derive(Debug, Clone)]
pub struct SellingPoint {
    position: Vec3,
    size: Vec3,
}

impl SellingPoint {
    /// Place a selling point at `position` with per-axis scale `size`.
    pub fn new(position: Vec3, size: Vec3) -> Self {
        Self { position, size }
    }
}

impl Spatial for SellingPoint {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn size(&self) -> Vec3 {
        self.size
    }
}

impl Collidable for SellingPoint {
    fn collision_box(&self) -> Aabb {
        Aabb::unit_cube()
    }
}

impl Interactable for SellingPoint {
    fn on_interact(&mut self, player: &mut Player) -> String {
        let Some(item) = player.hotbar.selected_item() else {
            return "You're not holding anything to sell!".to_owned();
        };
        let kind = item.kind;
        let price = kind.sell_price();
        if price == 0 {
            return format!("Can't sell {}!", kind.display_name());
        }
        player.hotbar.consume_selected_one();
        player.coins += price as f32;
        format!("Sold {} for ${}!", kind.display_name(), price)
    }

    fn interaction_prompt(&self) -> &'static str {
        "Press E to sell held item"
    }
}

impl WorldObject for SellingPoint {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_model("selling_point", self.position, self.size);
    }

    fn as_collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn as_interactable_mut(&mut self) -> Option<&mut dyn Interactable> {
        Some(self)
    }
}
