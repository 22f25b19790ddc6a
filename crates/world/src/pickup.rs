//! Ground pickups: props that hand the player one item, once, then go
//! inactive.

use glam::Vec3;
use homestead_core::ItemKind;

use crate::object::{Interactable, Pickable, Renderer, Spatial, WorldObject};
use crate::player::Player;

/// A collectible prop lying in the world.
///
/// Pickups have no collision box, so the player can walk over them freely.
#[derive(Debug, Clone)]
pub struct Pickup {
    position: Vec3,
    size: Vec3,
    kind: ItemKind,
    picked_up: bool,
}

impl Pickup {
    /// Place a pickup of `kind` at `position` with per-axis scale `size`.
    pub fn new(position: Vec3, size: Vec3, kind: ItemKind) -> Self {
        Self {
            position,
            size,
            kind,
            picked_up: false,
        }
    }

    /// A hoe lying on a surface, rendered slightly undersized.
    pub fn hoe(position: Vec3) -> Self {
        Self::new(position, Vec3::splat(0.7), ItemKind::Hoe)
    }

    /// A cow standing in the field, collectible whole.
    pub fn cow(position: Vec3) -> Self {
        Self::new(position, Vec3::ONE, ItemKind::Cow)
    }
}

impl Spatial for Pickup {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn size(&self) -> Vec3 {
        self.size
    }
}

impl Pickable for Pickup {
    fn pickup_kind(&self) -> ItemKind {
        self.kind
    }

    fn is_picked_up(&self) -> bool {
        self.picked_up
    }

    fn mark_picked_up(&mut self) {
        self.picked_up = true;
    }
}

impl Interactable for Pickup {
    fn on_interact(&mut self, player: &mut Player) -> String {
        self.pick_up(player)
    }

    fn interaction_prompt(&self) -> &'static str {
        match self.kind {
            ItemKind::Hoe => "Pick up hoe",
            ItemKind::Cow => "Pick up cow",
            _ => "Pick up item",
        }
    }
}

impl WorldObject for Pickup {
    fn draw(&self, renderer: &mut dyn Renderer) {
        if let Some(key) = self.kind.texture_key() {
            renderer.draw_model(key, self.position, self.size);
        }
    }

    fn as_interactable_mut(&mut self) -> Option<&mut dyn Interactable> {
        if self.picked_up {
            None
        } else {
            Some(self)
        }
    }

    fn is_active(&self) -> bool {
        !self.picked_up
    }
}
