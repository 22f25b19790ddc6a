//! Static table prop. Solid, never interactable.

use glam::Vec3;
use homestead_physics::Aabb;

use crate::object::{Collidable, Renderer, Spatial, WorldObject};

/// A solid table the player can walk around but not use.
#[derive(Debug, Clone)]
pub struct Table {
    position: Vec3,
    size: Vec3,
}

impl Table {
    /// Place a table at `position` with per-axis scale `size`.
    pub fn new(position: Vec3, size: Vec3) -> Self {
        Self { position, size }
    }
}

impl Spatial for Table {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn size(&self) -> Vec3 {
        self.size
    }
}

impl Collidable for Table {
    fn collision_box(&self) -> Aabb {
        Aabb::new(Vec3::new(-2.0, 0.0, -1.0), Vec3::new(2.0, 1.1, 1.0))
    }
}

impl WorldObject for Table {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_model("table", self.position, self.size);
    }

    fn as_collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_interaction() {
        let mut table = Table::new(Vec3::ZERO, Vec3::ONE);
        assert!(WorldObject::as_interactable_mut(&mut table).is_none());
        assert!(WorldObject::as_collidable(&table).is_some());
    }
}
