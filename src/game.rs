//! Game session: scene construction, the per-frame step, and a scripted
//! playthrough that exercises the full farming loop.

use anyhow::{ensure, Result};
use glam::{vec3, Vec3};
use homestead_core::{Item, ItemKind};
use homestead_world::{
    Chest, CrateBox, DirtBlock, GridLayout, Pickup, Player, Renderer, SellingPoint, Spatial,
    Table, World, CHEST_COLS, CHEST_ROWS,
};
use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::dialogue::DialogueBox;
use crate::input::{FrameIntents, InputEvent, InputTracker, Key};
use crate::scene::{PropSpec, SceneConfig};

const TICK: f32 = 1.0 / 60.0;

/// A running game: world, dialogue box and input tracker, stepped at a
/// fixed tick.
pub struct Session {
    world: World,
    dialogue: DialogueBox,
    input: InputTracker,
    chest_layout: GridLayout,
    player_layout: GridLayout,
    show_inventory: bool,
    show_collisions: bool,
}

impl Session {
    /// Build the built-in farm scene from `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self::from_scene(config, &SceneConfig::builtin())
    }

    /// Build a session from an explicit scene layout.
    pub fn from_scene(config: &GameConfig, scene: &SceneConfig) -> Self {
        let player = Player::with_tuning(
            Vec3::ZERO,
            config.player_speed,
            config.interaction_range,
        );
        let mut world = World::new(player);
        let mut rng = rand::thread_rng();

        for prop in &scene.props {
            match prop {
                PropSpec::Table { position } => {
                    world.add_object(Box::new(Table::new(Vec3::from(*position), Vec3::ONE)));
                }
                PropSpec::HoePickup { position } => {
                    world.add_object(Box::new(Pickup::hoe(Vec3::from(*position))));
                }
                PropSpec::CowPickup { position } => {
                    world.add_object(Box::new(Pickup::cow(Vec3::from(*position))));
                }
                PropSpec::Chest { position, contents } => {
                    let mut chest = Chest::new(Vec3::from(*position), Vec3::ONE);
                    for slot in contents {
                        let _ = chest.inventory.put_item(
                            slot.row,
                            slot.col,
                            Item::new(slot.kind, slot.count),
                        );
                    }
                    world.add_object(Box::new(chest));
                }
                PropSpec::DirtBlock { position } => {
                    world.add_object(Box::new(DirtBlock::with_growth_duration(
                        Vec3::from(*position),
                        Vec3::ONE,
                        config.growth_duration,
                    )));
                }
                PropSpec::SellingPoint { position } => {
                    world.add_object(Box::new(SellingPoint::new(
                        Vec3::from(*position),
                        Vec3::ONE,
                    )));
                }
                PropSpec::Crate { position, size } => {
                    let jitter = vec3(rng.gen_range(-0.5..0.5), 0.0, rng.gen_range(-0.5..0.5));
                    world.add_object(Box::new(CrateBox::new(
                        Vec3::from(*position) + jitter,
                        Vec3::from(*size),
                    )));
                }
            }
        }

        let window = config.window_width as f32;
        Self {
            world,
            dialogue: DialogueBox::new(config.dialogue_seconds),
            input: InputTracker::default(),
            chest_layout: GridLayout::centered(window, 300.0, CHEST_ROWS, CHEST_COLS),
            player_layout: GridLayout::centered(window, 100.0, 4, 9),
            show_inventory: false,
            show_collisions: config.debug_collisions,
        }
    }

    /// The world under simulation.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The message currently on screen, if any.
    pub fn current_message(&self) -> Option<&str> {
        self.dialogue.message()
    }

    /// Whether the inventory panel is open.
    pub fn inventory_open(&self) -> bool {
        self.show_inventory
    }

    /// Whether the collision overlay is enabled.
    pub fn collision_overlay(&self) -> bool {
        self.show_collisions
    }

    /// Draw one frame: the scene, plus the collision overlay when enabled.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.world.draw(renderer);
        if self.show_collisions {
            self.world.draw_collision_overlay(renderer);
        }
    }

    /// Advance one fixed tick with the given raw input events.
    pub fn step(&mut self, events: &[InputEvent], dt: f32) {
        let intents = self.input.process(events);
        self.apply_intents(&intents, dt);
    }

    fn apply_intents(&mut self, intents: &FrameIntents, dt: f32) {
        if let Some(slot) = intents.select_slot {
            self.world.player.hotbar.select_slot(slot);
        }
        if intents.scroll != 0 {
            self.world.player.hotbar.scroll(intents.scroll);
        }
        if intents.toggle_inventory {
            self.show_inventory = !self.show_inventory;
            // Dismissing the panel also dismisses any open chest UI.
            if !self.show_inventory {
                self.world.close_chest();
            }
        }
        if intents.toggle_collisions {
            self.show_collisions = !self.show_collisions;
        }

        self.world.move_player(intents.movement, dt);

        if intents.interact {
            if let Some(prompt) = self.world.interaction_prompt() {
                debug!(prompt, "interacting");
            }
            self.world.handle_player_interaction(&mut self.dialogue);
        }
        for &(x, y) in &intents.clicks {
            self.world
                .handle_inventory_click(x, y, &self.chest_layout, &self.player_layout);
        }

        self.world.update(dt);
        self.dialogue.update(dt);
    }

    fn press(&mut self, key: Key) {
        self.step(
            &[InputEvent::Pressed(key), InputEvent::Released(key)],
            TICK,
        );
    }

    fn click(&mut self, x: f32, y: f32) {
        self.step(&[InputEvent::Click { x, y }], TICK);
    }

    fn idle(&mut self, seconds: f32) {
        let ticks = (seconds / TICK).ceil() as usize;
        for _ in 0..ticks {
            self.step(&[], TICK);
        }
    }

    /// Walk toward `target` with 8-way key input until within arrival
    /// distance, releasing each axis as it closes.
    fn walk_towards(&mut self, target: Vec3, max_ticks: usize) -> Result<()> {
        for _ in 0..max_ticks {
            let delta = target - self.world.player.position();
            if delta.length() < 0.2 {
                self.step(
                    &[
                        InputEvent::Released(Key::Forward),
                        InputEvent::Released(Key::Backward),
                        InputEvent::Released(Key::Left),
                        InputEvent::Released(Key::Right),
                    ],
                    TICK,
                );
                return Ok(());
            }

            let mut events = Vec::with_capacity(4);
            axis_events(delta.x, Key::Right, Key::Left, &mut events);
            axis_events(delta.z, Key::Backward, Key::Forward, &mut events);
            self.step(&events, TICK);
        }
        let position = self.world.player.position();
        anyhow::bail!("could not reach {target}, stopped at {position}");
    }

    /// Scripted playthrough of the core loop: collect the hoe, restock seeds
    /// from the chest, till, plant, wait, harvest, and sell the produce.
    pub fn run_demo(&mut self) -> Result<()> {
        // Hoe first.
        self.walk_towards(vec3(2.6, 0.0, 0.0), 600)?;
        self.press(Key::Interact);
        ensure!(
            self.current_message() == Some("You picked up the hoe!"),
            "hoe pickup failed: {:?}",
            self.current_message()
        );
        let moved = self.world.player.inventory.transfer_item(
            (0, 0),
            self.world.player.hotbar.inventory_mut(),
            (0, 0),
        );
        ensure!(moved, "hoe was not in the first inventory slot");
        ensure!(
            self.world.player.hotbar.holds(ItemKind::Hoe),
            "hoe missing from hotbar"
        );

        // Seeds from the chest.
        self.walk_towards(vec3(0.0, 0.0, 6.4), 900)?;
        self.press(Key::Interact);
        ensure!(
            self.current_message() == Some("Opened chest"),
            "chest did not open: {:?}",
            self.current_message()
        );
        let (sx, sy) = self.chest_layout.slot_center(0, 0);
        self.click(sx, sy);
        ensure!(
            self.world.player.inventory.total_of(ItemKind::TomatoSeed) == 5,
            "seed stack did not transfer"
        );
        self.press(Key::Interact);
        debug!("chest closed, seeds in inventory");
        let moved = self.world.player.inventory.transfer_item(
            (0, 0),
            self.world.player.hotbar.inventory_mut(),
            (0, 1),
        );
        ensure!(moved, "seeds were not in the first inventory slot");

        // Till and plant the nearest dirt block.
        self.walk_towards(vec3(-4.0, 0.0, 0.0), 900)?;
        self.press(Key::Slot(0));
        self.press(Key::Interact);
        ensure!(
            self.current_message() == Some("Tilled the dirt block!"),
            "till failed: {:?}",
            self.current_message()
        );
        self.press(Key::Slot(1));
        self.press(Key::Interact);
        ensure!(
            self.current_message() == Some("Planted tomato seed!"),
            "plant failed: {:?}",
            self.current_message()
        );
        ensure!(
            self.world.player.hotbar.inventory().total_of(ItemKind::TomatoSeed) == 4,
            "planting should consume exactly one seed"
        );

        // Wait out the growth timer, then harvest.
        self.idle(6.0);
        self.press(Key::Interact);
        let harvested = self
            .current_message()
            .is_some_and(|m| m.starts_with("Harvested"));
        ensure!(harvested, "harvest failed: {:?}", self.current_message());
        ensure!(
            self.world.player.inventory.total_of(ItemKind::Tomato) == 1,
            "tomato missing after harvest"
        );

        // Sell the tomato.
        let moved = self.world.player.inventory.transfer_item(
            (0, 0),
            self.world.player.hotbar.inventory_mut(),
            (0, 2),
        );
        ensure!(moved, "tomato was not in the first inventory slot");
        self.walk_towards(vec3(0.0, 0.0, -4.0), 900)?;
        self.press(Key::Slot(2));
        self.press(Key::Interact);
        ensure!(
            self.current_message() == Some("Sold Tomato for $10!"),
            "sale failed: {:?}",
            self.current_message()
        );
        ensure!(self.world.player.coins == 10.0, "coins not credited");

        info!(coins = self.world.player.coins, "demo run complete");
        Ok(())
    }
}

fn axis_events(delta: f32, positive: Key, negative: Key, events: &mut Vec<InputEvent>) {
    if delta > 0.1 {
        events.push(InputEvent::Pressed(positive));
        events.push(InputEvent::Released(negative));
    } else if delta < -0.1 {
        events.push(InputEvent::Pressed(negative));
        events.push(InputEvent::Released(positive));
    } else {
        events.push(InputEvent::Released(positive));
        events.push(InputEvent::Released(negative));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> GameConfig {
        GameConfig {
            growth_duration: 0.5,
            ..GameConfig::default()
        }
    }

    #[test]
    fn demo_run_completes_the_farming_loop() {
        let mut session = Session::new(&quick_config());
        session.run_demo().unwrap();
        assert_eq!(session.world().player.coins, 10.0);
    }

    #[test]
    fn collision_overlay_toggles() {
        let mut session = Session::new(&quick_config());
        assert!(!session.collision_overlay());
        session.press(Key::ToggleCollisions);
        assert!(session.collision_overlay());
    }

    #[test]
    fn closing_the_inventory_panel_closes_the_chest() {
        let mut session = Session::new(&quick_config());
        session.walk_towards(vec3(0.0, 0.0, 6.4), 900).unwrap();
        session.press(Key::Interact);
        assert!(session.world().opened_chest().is_some());

        session.press(Key::ToggleInventory);
        assert!(session.inventory_open());
        session.press(Key::ToggleInventory);
        assert!(!session.inventory_open());
        assert!(session.world().opened_chest().is_none());
    }

    #[test]
    fn dialogue_expires_between_interactions() {
        let mut session = Session::new(&quick_config());
        session.walk_towards(vec3(2.6, 0.0, 0.0), 600).unwrap();
        session.press(Key::Interact);
        assert!(session.current_message().is_some());
        session.idle(4.0);
        assert!(session.current_message().is_none());
    }
}
