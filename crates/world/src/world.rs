//! World coordinator: owns the player and the prop list, drives updates,
//! movement, interaction dispatch and chest UI click routing.

use glam::Vec3;
use homestead_physics::Aabb;
use tracing::debug;

use crate::chest::Chest;
use crate::object::{Collidable, DialogueSink, Renderer, WorldObject};
use crate::player::Player;
use crate::ui::GridLayout;

/// The scene: every prop plus the player, with the player owned separately
/// so interactions can mutate both sides without aliasing.
pub struct World {
    objects: Vec<Box<dyn WorldObject>>,
    /// The interaction actor.
    pub player: Player,
    opened_chest: Option<usize>,
}

impl World {
    /// Build an empty world around `player`.
    pub fn new(player: Player) -> Self {
        Self {
            objects: Vec::new(),
            player,
            opened_chest: None,
        }
    }

    /// Add a prop and return its stable index handle.
    pub fn add_object(&mut self, object: Box<dyn WorldObject>) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// All props, in insertion order.
    pub fn objects(&self) -> &[Box<dyn WorldObject>] {
        &self.objects
    }

    /// The chest at `index`, if that prop is a chest.
    pub fn chest_mut(&mut self, index: usize) -> Option<&mut Chest> {
        self.objects.get_mut(index)?.as_chest_mut()
    }

    /// Handle of the chest whose UI is open, if any.
    pub fn opened_chest(&self) -> Option<usize> {
        self.opened_chest
    }

    /// Advance every prop by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for object in &mut self.objects {
            object.update(dt);
        }
    }

    /// Move the player in `direction`, blocked by every collidable prop.
    pub fn move_player(&mut self, direction: Vec3, dt: f32) {
        let obstacles: Vec<Aabb> = self
            .objects
            .iter()
            .filter(|o| o.is_active())
            .filter_map(|o| o.as_collidable())
            .map(|c| c.world_collision_box())
            .collect();
        self.player.apply_move(direction, dt, &obstacles);
    }

    /// Interaction prompt for the current nearest candidate, if any.
    pub fn interaction_prompt(&mut self) -> Option<&'static str> {
        let index = self.player.find_interactable(&mut self.objects)?;
        self.objects[index]
            .as_interactable_mut()
            .map(|i| i.interaction_prompt())
    }

    /// Dispatch an interaction to the nearest candidate in range and forward
    /// the resulting message to the dialogue sink.
    pub fn handle_player_interaction(&mut self, dialogue: &mut dyn DialogueSink) {
        let Some(index) = self.player.find_interactable(&mut self.objects) else {
            return;
        };
        let object = &mut self.objects[index];
        let Some(interactable) = object.as_interactable_mut() else {
            return;
        };
        let message = interactable.on_interact(&mut self.player);
        debug!(index, %message, "interaction");

        // Track which chest UI, if any, is open after this interaction.
        if let Some(chest) = object.as_chest_mut() {
            self.opened_chest = chest.is_open().then_some(index);
        }
        dialogue.show_message(&message);
    }

    /// Close the open chest UI, if any.
    pub fn close_chest(&mut self) {
        if let Some(index) = self.opened_chest.take() {
            if let Some(chest) = self.objects[index].as_chest_mut() {
                chest.set_open(false);
            }
        }
    }

    /// Route a click at `(x, y)` while a chest UI is open. A hit on a chest
    /// slot moves that stack toward the player inventory; a hit on a player
    /// slot moves it toward the chest. At most one transfer happens per
    /// click. Returns whether anything moved.
    pub fn handle_inventory_click(
        &mut self,
        x: f32,
        y: f32,
        chest_layout: &GridLayout,
        player_layout: &GridLayout,
    ) -> bool {
        let Some(index) = self.opened_chest else {
            return false;
        };
        let Some(chest) = self.objects[index].as_chest_mut() else {
            return false;
        };

        if let Some((row, col)) = chest_layout.slot_at(x, y) {
            let Some(item) = chest.inventory.get_item(row, col).copied() else {
                return false;
            };
            // Only clear the chest slot once the whole stack fits.
            if self.player.inventory.add_item(item) {
                chest.inventory.remove_item(row, col);
                debug!(row, col, "moved stack from chest to player");
                return true;
            }
            return false;
        }

        if let Some((row, col)) = player_layout.slot_at(x, y) {
            let Some(item) = self.player.inventory.get_item(row, col).copied() else {
                return false;
            };
            if chest.inventory.add_item(item) {
                self.player.inventory.remove_item(row, col);
                debug!(row, col, "moved stack from player to chest");
                return true;
            }
            return false;
        }

        false
    }

    /// Draw the player and every active prop.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.player.draw(renderer);
        for object in &self.objects {
            if object.is_active() {
                object.draw(renderer);
            }
        }
    }

    /// Draw wireframe collision boxes: the player in green, props in red.
    pub fn draw_collision_overlay(&self, renderer: &mut dyn Renderer) {
        renderer.draw_wire_box(self.player.world_collision_box(), [0.0, 1.0, 0.0, 0.5]);
        for object in &self.objects {
            if !object.is_active() {
                continue;
            }
            if let Some(collidable) = object.as_collidable() {
                renderer.draw_wire_box(collidable.world_collision_box(), [1.0, 0.0, 0.0, 0.5]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chest::Chest;
    use crate::crate_box::CrateBox;
    use crate::object::Spatial;
    use crate::pickup::Pickup;
    use glam::vec3;
    use homestead_core::{Item, ItemKind};

    struct MessageLog(Vec<String>);

    impl DialogueSink for MessageLog {
        fn show_message(&mut self, text: &str) {
            self.0.push(text.to_owned());
        }
    }

    #[test]
    fn interaction_dispatches_to_nearest_in_range() {
        let mut world = World::new(Player::new(Vec3::ZERO));
        world.add_object(Box::new(CrateBox::new(vec3(2.0, 0.0, 0.0), Vec3::ONE)));
        world.add_object(Box::new(CrateBox::new(vec3(20.0, 0.0, 0.0), Vec3::ONE)));

        let mut log = MessageLog(Vec::new());
        world.handle_player_interaction(&mut log);
        assert_eq!(log.0, vec!["You opened the crate! It's empty...".to_owned()]);
    }

    #[test]
    fn prompt_tracks_the_nearest_candidate() {
        let mut world = World::new(Player::new(Vec3::ZERO));
        assert_eq!(world.interaction_prompt(), None);

        world.add_object(Box::new(Chest::new(vec3(2.0, 0.0, 0.0), Vec3::ONE)));
        assert_eq!(world.interaction_prompt(), Some("Press E to open chest"));
    }

    #[test]
    fn out_of_range_interaction_is_silent() {
        let mut world = World::new(Player::new(Vec3::ZERO));
        world.add_object(Box::new(CrateBox::new(vec3(20.0, 0.0, 0.0), Vec3::ONE)));

        let mut log = MessageLog(Vec::new());
        world.handle_player_interaction(&mut log);
        assert!(log.0.is_empty());
    }

    #[test]
    fn chest_interaction_tracks_open_handle() {
        let mut world = World::new(Player::new(Vec3::ZERO));
        let chest = world.add_object(Box::new(Chest::new(vec3(2.0, 0.0, 0.0), Vec3::ONE)));

        let mut log = MessageLog(Vec::new());
        world.handle_player_interaction(&mut log);
        assert_eq!(world.opened_chest(), Some(chest));

        world.handle_player_interaction(&mut log);
        assert_eq!(world.opened_chest(), None);
        assert_eq!(log.0, vec!["Opened chest".to_owned(), "Closed chest".to_owned()]);
    }

    #[test]
    fn close_chest_resets_both_sides() {
        let mut world = World::new(Player::new(Vec3::ZERO));
        let chest = world.add_object(Box::new(Chest::new(vec3(2.0, 0.0, 0.0), Vec3::ONE)));
        let mut log = MessageLog(Vec::new());
        world.handle_player_interaction(&mut log);

        world.close_chest();
        assert_eq!(world.opened_chest(), None);
        assert!(!world.chest_mut(chest).map(|c| c.is_open()).unwrap_or(true));
    }

    #[test]
    fn collected_pickup_stops_blocking_and_drawing() {
        let mut world = World::new(Player::new(Vec3::ZERO));
        world.add_object(Box::new(Pickup::hoe(vec3(1.0, 0.0, 0.0))));

        let mut log = MessageLog(Vec::new());
        world.handle_player_interaction(&mut log);
        assert_eq!(log.0, vec!["You picked up the hoe!".to_owned()]);

        // Second press finds no candidate.
        world.handle_player_interaction(&mut log);
        assert_eq!(log.0.len(), 1);
    }

    #[test]
    fn movement_is_blocked_by_props() {
        let mut world = World::new(Player::new(Vec3::ZERO));
        world.add_object(Box::new(CrateBox::new(vec3(2.5, 0.0, 0.0), Vec3::ONE)));

        world.move_player(vec3(1.0, 0.0, 0.0), 0.1);
        // One step of 0.5 units brings the player box (half-width 1.2) into
        // the crate box spanning x 1.5..3.5.
        assert_eq!(world.player.position(), Vec3::ZERO);
    }

    #[test]
    fn click_routing_requires_open_chest() {
        let mut world = World::new(Player::new(Vec3::ZERO));
        let index = world.add_object(Box::new(Chest::new(vec3(2.0, 0.0, 0.0), Vec3::ONE)));
        if let Some(chest) = world.chest_mut(index) {
            let _ = chest
                .inventory
                .put_item(0, 0, Item::new(ItemKind::TomatoSeed, 5));
        }

        let chest_layout = GridLayout::centered(800.0, 300.0, 3, 5);
        let player_layout = GridLayout::centered(800.0, 100.0, 4, 9);
        let (cx, cy) = chest_layout.slot_center(0, 0);

        assert!(!world.handle_inventory_click(cx, cy, &chest_layout, &player_layout));

        let mut log = MessageLog(Vec::new());
        world.handle_player_interaction(&mut log);
        assert!(world.handle_inventory_click(cx, cy, &chest_layout, &player_layout));
        assert_eq!(world.player.inventory.total_of(ItemKind::TomatoSeed), 5);
        assert!(world
            .chest_mut(index)
            .map(|c| c.inventory.is_empty())
            .unwrap_or(false));
    }

    #[test]
    fn player_overlay_box_is_scaled_world_space() {
        let world = World::new(Player::new(vec3(1.0, 0.0, 0.0)));
        let aabb = world.player.world_collision_box();
        assert_eq!(aabb.min, vec3(-0.2, -3.0, -0.6));
        assert_eq!(aabb.max, vec3(2.2, 1.0, 0.6));
    }
}
