//! Platform abstraction layer
//!
//! The host (window/event loop) translates its native events into the types
//! defined here and hands them to the game once per frame.

pub mod input;

pub use input::{FrameInput, HeldKeys, InputEvent, Key, MouseButton};
