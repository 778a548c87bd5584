//! Input subsystem.
//!
//! Public types are platform-agnostic; the window runtime translates winit
//! events into [`InputEvent`]s and feeds them to [`InputState::apply_event`].

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};
