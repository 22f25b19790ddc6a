//! Decorative crate prop with a one-shot open interaction.

use glam::Vec3;
use homestead_physics::Aabb;

use crate::object::{Collidable, Interactable, Renderer, Spatial, WorldObject};
use crate::player::Player;

/// A wooden crate. Opening it is flavor only; it never holds items.
#[derive(Debug, Clone)]
pub struct CrateBox {
    position: Vec3,
    size: Vec3,
    has_been_opened: bool,
}

impl CrateBox {
    /// Place a crate at `position` with per-axis scale `size`.
    pub fn new(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            size,
            has_been_opened: false,
        }
    }
}

impl Spatial for CrateBox {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn size(&self) -> Vec3 {
        self.size
    }
}

impl Collidable for CrateBox {
    fn collision_box(&self) -> Aabb {
        Aabb::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0))
    }
}

impl Interactable for CrateBox {
    fn on_interact(&mut self, _player: &mut Player) -> String {
        if self.has_been_opened {
            "Hey stop! This crate is already opened.".to_owned()
        } else {
            self.has_been_opened = true;
            "You opened the crate! It's empty...".to_owned()
        }
    }

    fn interaction_prompt(&self) -> &'static str {
        "Press E to open crate"
    }
}

impl WorldObject for CrateBox {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_model("crate", self.position, self.size);
    }

    fn as_collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn as_interactable_mut(&mut self) -> Option<&mut dyn Interactable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_once_then_refuses() {
        let mut crate_box = CrateBox::new(Vec3::ZERO, Vec3::ONE);
        let mut player = Player::new(Vec3::ZERO);
        assert_eq!(
            crate_box.on_interact(&mut player),
            "You opened the crate! It's empty..."
        );
        assert_eq!(
            crate_box.on_interact(&mut player),
            "Hey stop! This crate is already opened."
        );
    }

    #[test]
    fn scaled_collision_box_shrinks_with_size() {
        let crate_box = CrateBox::new(Vec3::new(4.0, 0.0, 0.0), Vec3::splat(0.5));
        let world = crate_box.world_collision_box();
        assert_eq!(world.min, Vec3::new(3.5, 0.0, -0.5));
        assert_eq!(world.max, Vec3::new(4.5, 1.0, 0.5));
    }
}
