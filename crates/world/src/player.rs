//! Player character: movement with collision gating, interaction ranging,
//! inventory and currency.

use glam::Vec3;
use homestead_core::{Hotbar, Inventory, Item};
use homestead_physics::Aabb;
use tracing::debug;

use crate::object::{Collidable, Renderer, Spatial, WorldObject};

/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 5.0;

/// Default interaction reach, measured center-to-center.
pub const DEFAULT_INTERACTION_RANGE: f32 = 3.0;

/// The sole interaction actor in the world.
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec3,
    velocity: Vec3,
    speed: f32,
    interaction_range: f32,
    /// Main 4x9 inventory grid.
    pub inventory: Inventory,
    /// Five-slot hotbar; the selected slot is the held item.
    pub hotbar: Hotbar,
    /// Currency balance.
    pub coins: f32,
}

impl Player {
    /// Create a player at `position` with default tuning.
    pub fn new(position: Vec3) -> Self {
        Self::with_tuning(position, DEFAULT_SPEED, DEFAULT_INTERACTION_RANGE)
    }

    /// Create a player with explicit speed and interaction range.
    pub fn with_tuning(position: Vec3, speed: f32, interaction_range: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            speed,
            interaction_range,
            inventory: Inventory::new(4, 9),
            hotbar: Hotbar::new(),
            coins: 0.0,
        }
    }

    /// Interaction reach (center-to-center, boundary inclusive).
    pub fn interaction_range(&self) -> f32 {
        self.interaction_range
    }

    /// Displacement applied on the last committed move.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// True while the last move committed a non-zero displacement.
    pub fn is_moving(&self) -> bool {
        self.velocity != Vec3::ZERO
    }

    /// Place the player directly, bypassing collision checks.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Add a stack to the main inventory grid.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.inventory.add_item(item)
    }

    /// Move in `direction` for one frame, gated by the obstacle boxes.
    ///
    /// The tentative position is reverted wholesale on any overlap, so a
    /// blocked diagonal rejects fully rather than sliding along one axis.
    /// This discrete response is an intentional simplification.
    pub fn apply_move(&mut self, direction: Vec3, dt: f32, obstacles: &[Aabb]) {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            self.velocity = Vec3::ZERO;
            return;
        }

        let delta = direction * self.speed * dt;
        let old = self.position;
        self.position = old + delta;

        let moved_box = self.world_collision_box();
        if obstacles.iter().any(|b| moved_box.intersects(b)) {
            debug!(from = ?old, "movement blocked, reverting");
            self.position = old;
            self.velocity = Vec3::ZERO;
        } else {
            self.velocity = delta;
        }
    }

    /// Index of the nearest interactable prop within range, center-to-center.
    ///
    /// The range check is inclusive at the boundary. The strict `<` on the
    /// best-so-far comparison keeps the first candidate in scan order on
    /// ties. Inactive props (collected pickups) never qualify.
    pub fn find_interactable(&self, objects: &mut [Box<dyn WorldObject>]) -> Option<usize> {
        let mut nearest = None;
        let mut nearest_distance = f32::INFINITY;

        for (index, obj) in objects.iter_mut().enumerate() {
            if obj.as_interactable_mut().is_none() {
                continue;
            }
            let distance = self.position.distance(obj.position());
            if distance <= self.interaction_range && distance < nearest_distance {
                nearest = Some(index);
                nearest_distance = distance;
            }
        }
        nearest
    }
}

impl Spatial for Player {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl Collidable for Player {
    fn collision_box(&self) -> Aabb {
        // Approximate body bounds: head at the origin, legs below.
        Aabb::new(Vec3::new(-1.2, -3.0, -0.6), Vec3::new(1.2, 1.0, 0.6))
    }
}

impl WorldObject for Player {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_model("player", self.position, self.size());
    }

    fn as_collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }
}
