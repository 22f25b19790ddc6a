//! Keyboard state tracking and per-frame intent translation.

use glam::Vec3;

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move forward (negative Z).
    Forward,
    /// Move backward (positive Z).
    Backward,
    /// Strafe left (negative X).
    Left,
    /// Strafe right (positive X).
    Right,
    /// Interact with the nearest candidate.
    Interact,
    /// Toggle the player inventory panel.
    ToggleInventory,
    /// Toggle the collision debug overlay.
    ToggleCollisions,
    /// Select a hotbar slot directly (0-based).
    Slot(usize),
}

/// A raw input event fed into the key state tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key transitioned to held.
    Pressed(Key),
    /// Key transitioned to released.
    Released(Key),
    /// Scroll wheel ticks; positive is away from the user.
    Scroll(i32),
    /// Left mouse click at window coordinates.
    Click { x: f32, y: f32 },
}

/// Held-key state for the movement keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

impl KeyState {
    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Forward => self.forward = held,
            Key::Backward => self.backward = held,
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            _ => {}
        }
    }

    /// Raw movement direction from the held keys. Opposite keys cancel; the
    /// caller normalizes before applying speed.
    pub fn direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.backward {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

/// Everything the game loop needs to know about one frame of input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameIntents {
    /// Movement direction, unnormalized.
    pub movement: Vec3,
    /// Interact key was pressed this frame.
    pub interact: bool,
    /// Inventory panel toggle was pressed this frame.
    pub toggle_inventory: bool,
    /// Collision overlay toggle was pressed this frame.
    pub toggle_collisions: bool,
    /// Direct hotbar slot selection, 0-based.
    pub select_slot: Option<usize>,
    /// Net scroll ticks this frame.
    pub scroll: i32,
    /// Left clicks this frame, in window coordinates.
    pub clicks: Vec<(f32, f32)>,
}

/// Folds raw events into held-key state and per-frame intents.
#[derive(Debug, Default)]
pub struct InputTracker {
    keys: KeyState,
}

impl InputTracker {
    /// Consume one frame's worth of events and produce the frame intents.
    pub fn process(&mut self, events: &[InputEvent]) -> FrameIntents {
        let mut intents = FrameIntents::default();
        for event in events {
            match *event {
                InputEvent::Pressed(key) => {
                    self.keys.set(key, true);
                    match key {
                        Key::Interact => intents.interact = true,
                        Key::ToggleInventory => intents.toggle_inventory = true,
                        Key::ToggleCollisions => intents.toggle_collisions = true,
                        Key::Slot(slot) => intents.select_slot = Some(slot),
                        _ => {}
                    }
                }
                InputEvent::Released(key) => self.keys.set(key, false),
                InputEvent::Scroll(ticks) => intents.scroll += ticks,
                InputEvent::Click { x, y } => intents.clicks.push((x, y)),
            }
        }
        intents.movement = self.keys.direction();
        intents
    }
}
