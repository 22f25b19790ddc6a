//! On-screen dialogue box with a display-duration countdown.

use homestead_world::DialogueSink;
use tracing::info;

/// Holds the current dialogue message and expires it after a fixed duration.
#[derive(Debug)]
pub struct DialogueBox {
    message: Option<String>,
    timer: f32,
    duration: f32,
}

impl DialogueBox {
    /// A dialogue box whose messages stay visible for `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            message: None,
            timer: 0.0,
            duration,
        }
    }

    /// The message currently on screen, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Count down the display timer, clearing the message on expiry.
    pub fn update(&mut self, dt: f32) {
        if self.message.is_none() {
            return;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.message = None;
            self.timer = 0.0;
        }
    }
}

impl DialogueSink for DialogueBox {
    fn show_message(&mut self, text: &str) {
        info!(dialogue = %text);
        self.message = Some(text.to_owned());
        self.timer = self.duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_expires_after_duration() {
        let mut dialogue = DialogueBox::new(3.0);
        dialogue.show_message("Tilled the dirt block!");
        assert_eq!(dialogue.message(), Some("Tilled the dirt block!"));

        dialogue.update(2.9);
        assert!(dialogue.message().is_some());
        dialogue.update(0.2);
        assert_eq!(dialogue.message(), None);
    }

    #[test]
    fn new_message_resets_the_timer() {
        let mut dialogue = DialogueBox::new(3.0);
        dialogue.show_message("first");
        dialogue.update(2.5);
        dialogue.show_message("second");
        dialogue.update(2.5);
        assert_eq!(dialogue.message(), Some("second"));
    }
}
