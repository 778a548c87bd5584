use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton, PointerMoveEvent};

/// Per-frame input deltas.
///
/// `InputState` is what is held right now; `InputFrame` is what changed
/// since the last presented frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,

    /// Auto-repeat presses, in arrival order. Not in `keys_pressed`.
    pub keys_repeated: Vec<Key>,

    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.keys_repeated.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Keys that went down this frame, presses first, then auto-repeats.
    pub fn key_hits(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys_pressed.iter().chain(&self.keys_repeated).copied()
    }

    /// Pointer positions reported this frame, oldest first.
    pub fn pointer_moves(&self) -> impl Iterator<Item = PointerMoveEvent> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::PointerMoved(m) => Some(*m),
            _ => None,
        })
    }
}
