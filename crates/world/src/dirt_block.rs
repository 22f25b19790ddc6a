//! Farmable dirt blocks: the till / plant / grow / harvest state machine.

use glam::Vec3;
use homestead_core::{Item, ItemKind};
use homestead_physics::Aabb;

use crate::object::{Collidable, Interactable, Renderer, Spatial, WorldObject};
use crate::player::Player;

/// Seconds a planted crop takes to mature.
pub const DEFAULT_GROWTH_DURATION: f32 = 5.0;

/// Times a block can be harvested before reverting to plain dirt.
const FARMLAND_USES: u32 = 3;

/// Farming lifecycle of a dirt block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// Plain dirt. Needs tilling before anything can be planted.
    Dirt,
    /// Tilled and ready for seeds.
    Farmland,
    /// A crop is growing or ready to harvest.
    Planted,
}

/// A solid block of ground the player can till, plant and harvest.
#[derive(Debug, Clone)]
pub struct DirtBlock {
    position: Vec3,
    size: Vec3,
    state: BlockState,
    uses_remaining: u32,
    planted_kind: Option<ItemKind>,
    growth_timer: f32,
    growth_duration: f32,
}

impl DirtBlock {
    /// Place a block at `position` with the default growth duration.
    pub fn new(position: Vec3, size: Vec3) -> Self {
        Self::with_growth_duration(position, size, DEFAULT_GROWTH_DURATION)
    }

    /// Place a block with an explicit growth duration in seconds.
    pub fn with_growth_duration(position: Vec3, size: Vec3, growth_duration: f32) -> Self {
        Self {
            position,
            size,
            state: BlockState::Dirt,
            uses_remaining: FARMLAND_USES,
            planted_kind: None,
            growth_timer: 0.0,
            growth_duration,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Seconds until the current crop matures; zero when none is growing.
    pub fn growth_remaining(&self) -> f32 {
        self.growth_timer
    }

    /// Harvests left before the block reverts to plain dirt.
    pub fn uses_remaining(&self) -> u32 {
        self.uses_remaining
    }

    fn till(&mut self, player: &mut Player) -> String {
        if player.hotbar.holds(ItemKind::Hoe) {
            self.state = BlockState::Farmland;
            "Tilled the dirt block!".to_owned()
        } else {
            "This dirt needs a hoe to till".to_owned()
        }
    }

    fn plant(&mut self, player: &mut Player) -> String {
        let Some(kind) = player.hotbar.selected_item().map(|item| item.kind) else {
            return "Need tomato seeds to plant".to_owned();
        };
        if !kind.is_seed() {
            return "Need tomato seeds to plant".to_owned();
        }
        player.hotbar.consume_selected_one();
        self.state = BlockState::Planted;
        self.planted_kind = Some(kind);
        self.growth_timer = self.growth_duration;
        format!("Planted {}!", kind.display_name().to_lowercase())
    }

    fn harvest(&mut self, player: &mut Player) -> String {
        if self.growth_timer > 0.0 {
            return format!("Growing... {:.1}s remaining", self.growth_timer);
        }
        let Some(seed_kind) = self.planted_kind else {
            return "Cannot harvest this crop".to_owned();
        };
        let Some(produce) = seed_kind.harvest_produce() else {
            return "Cannot harvest this crop".to_owned();
        };

        // Stage the yield against a copy so a full inventory rejects the
        // whole harvest without losing the crop or partially depositing.
        let mut staged = player.inventory.clone();
        if !staged.add_item(Item::single(produce)) || !staged.add_item(Item::new(seed_kind, 2)) {
            return "Inventory full!".to_owned();
        }
        player.inventory = staged;

        self.planted_kind = None;
        self.uses_remaining -= 1;
        if self.uses_remaining == 0 {
            self.state = BlockState::Dirt;
            self.uses_remaining = FARMLAND_USES;
            "Harvested tomato + 2 seeds! Block returned to dirt.".to_owned()
        } else {
            self.state = BlockState::Farmland;
            format!(
                "Harvested tomato + 2 seeds! Block ready to replant. ({} uses left)",
                self.uses_remaining
            )
        }
    }
}

impl Spatial for DirtBlock {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn size(&self) -> Vec3 {
        self.size
    }
}

impl Collidable for DirtBlock {
    fn collision_box(&self) -> Aabb {
        Aabb::unit_cube()
    }
}

impl Interactable for DirtBlock {
    fn on_interact(&mut self, player: &mut Player) -> String {
        match self.state {
            BlockState::Dirt => self.till(player),
            BlockState::Farmland => self.plant(player),
            BlockState::Planted => self.harvest(player),
        }
    }

    fn interaction_prompt(&self) -> &'static str {
        match self.state {
            BlockState::Dirt => "Press E to till (needs hoe)",
            BlockState::Farmland => "Press E to plant",
            BlockState::Planted => "Press E to check growth",
        }
    }
}

impl WorldObject for DirtBlock {
    fn update(&mut self, dt: f32) {
        if self.state == BlockState::Planted {
            self.growth_timer = (self.growth_timer - dt).max(0.0);
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let key = match self.state {
            BlockState::Dirt => "dirt",
            BlockState::Farmland => "farmland",
            BlockState::Planted => {
                if self.growth_timer > 0.0 {
                    "crop_growing"
                } else {
                    "crop_ready"
                }
            }
        };
        renderer.draw_model(key, self.position, self.size);
    }

    fn as_collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn as_interactable_mut(&mut self) -> Option<&mut dyn Interactable> {
        Some(self)
    }
}
