//! Per-frame input snapshot

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Left,
    Right,
    Up,
    Down,
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Discrete events collected since the previous frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close request
    Quit,
    KeyDown(Key),
    MouseDown { button: MouseButton, pos: Vec2 },
}

impl InputEvent {
    /// Position of a primary-button click, if this is one
    pub fn left_click(&self) -> Option<Vec2> {
        match *self {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            } => Some(pos),
            _ => None,
        }
    }

    pub fn click(pos: Vec2) -> Self {
        InputEvent::MouseDown {
            button: MouseButton::Left,
            pos,
        }
    }
}

/// Arrow keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Everything the game consumes for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub held: HeldKeys,
    /// Wall-clock milliseconds since the previous frame
    pub elapsed_ms: u32,
}

impl FrameInput {
    /// An input with no events
    pub fn idle(elapsed_ms: u32) -> Self {
        Self {
            elapsed_ms,
            ..Default::default()
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn quit_requested(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::Quit))
    }
}
