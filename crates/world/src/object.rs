//! Capability traits world objects compose in any combination, plus the
//! collaborator seams the core exposes to the rendering and dialogue layers.

use glam::Vec3;
use homestead_core::{Item, ItemKind};
use homestead_physics::Aabb;

use crate::chest::Chest;
use crate::player::Player;

/// Anything with a world position and a per-axis scale.
pub trait Spatial {
    /// World-space position of the object's origin.
    fn position(&self) -> Vec3;

    /// Per-axis scale multiplier applied to local geometry.
    fn size(&self) -> Vec3 {
        Vec3::ONE
    }
}

/// Objects that expose a local collision box and participate in movement
/// gating.
pub trait Collidable: Spatial {
    /// Collision box in local, unscaled coordinates.
    fn collision_box(&self) -> Aabb;

    /// Collision box in world coordinates. Scaling happens before the
    /// translation so the scaled box stays centered on the object.
    fn world_collision_box(&self) -> Aabb {
        self.collision_box().to_world(self.size(), self.position())
    }

    /// True when the two world-space boxes overlap.
    fn collides_with(&self, other: &dyn Collidable) -> bool {
        self.world_collision_box()
            .intersects(&other.world_collision_box())
    }
}

/// A context-sensitive action the player can trigger on an object.
pub trait Interactable {
    /// Apply the interaction and return the message to display. Side effects
    /// mutate the entity and/or the acting player's inventory and coins. A
    /// refusal ("cannot do X") is still a message, never an error.
    fn on_interact(&mut self, player: &mut Player) -> String;

    /// Prompt shown when this object is the nearest interaction candidate.
    fn interaction_prompt(&self) -> &'static str;
}

/// Interactable props that hand the player exactly one unit of an item, once.
pub trait Pickable: Spatial {
    /// Item kind deposited into the interactor's inventory.
    fn pickup_kind(&self) -> ItemKind;

    /// Whether the prop has already been collected.
    fn is_picked_up(&self) -> bool;

    /// Record that the prop has been collected.
    fn mark_picked_up(&mut self);

    /// Deposit one unit into `player`, marking the prop collected on success.
    fn pick_up(&mut self, player: &mut Player) -> String {
        if self.is_picked_up() {
            return "There is nothing left to pick up.".to_owned();
        }
        let kind = self.pickup_kind();
        if player.add_item(Item::single(kind)) {
            self.mark_picked_up();
            format!(
                "You picked up the {}!",
                kind.display_name().to_lowercase()
            )
        } else {
            "No space in inventory!".to_owned()
        }
    }
}

/// The polymorphic contract the world coordinator drives every frame.
///
/// Capability accessors return `None` by default; each variant opts into the
/// capabilities it actually has.
pub trait WorldObject: Spatial {
    /// Per-frame state update.
    fn update(&mut self, _dt: f32) {}

    /// Issue draw calls through the renderer collaborator.
    fn draw(&self, renderer: &mut dyn Renderer);

    /// Collision capability, when present.
    fn as_collidable(&self) -> Option<&dyn Collidable> {
        None
    }

    /// Interaction capability, when present.
    fn as_interactable_mut(&mut self) -> Option<&mut dyn Interactable> {
        None
    }

    /// Chest downcast used by the coordinator to track the opened chest.
    fn as_chest_mut(&mut self) -> Option<&mut Chest> {
        None
    }

    /// False once a pickup prop has been collected; inactive objects are
    /// neither rendered nor offered for interaction.
    fn is_active(&self) -> bool {
        true
    }
}

/// Draw-call sink implemented by the rendering collaborator.
pub trait Renderer {
    /// Draw the named model at `position`, scaled per-axis by `size`.
    fn draw_model(&mut self, key: &str, position: Vec3, size: Vec3);

    /// Draw a wireframe box for the collision debug overlay.
    fn draw_wire_box(&mut self, aabb: Aabb, color: [f32; 4]);
}

/// Message sink implemented by the dialogue/UI collaborator, which owns
/// display-duration timing.
pub trait DialogueSink {
    /// Display `text` to the player.
    fn show_message(&mut self, text: &str);
}
