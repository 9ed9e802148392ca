//! Draw-list rendering
//!
//! The renderer turns the app state into a flat, back-to-front list of
//! draw commands. A host executes them with whatever 2D backend it has;
//! nothing here touches a window.

pub mod scene;
pub mod starfield;

pub use scene::{Fonts, compose};
pub use starfield::Starfield;

use glam::Vec2;

use crate::sim::{Facing, Rect};

/// RGBA, 0.0 - 1.0
pub type Color = [f32; 4];

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// UI colors
pub mod palette {
    use super::{Color, rgb};

    pub const WHITE: Color = rgb(255, 255, 255);
    pub const BLACK: Color = rgb(0, 0, 0);
    /// Dark blue button fill
    pub const BUTTON: Color = rgb(39, 44, 78);
    pub const LOCKED: Color = rgb(128, 128, 128);
    pub const LOCKED_TEXT: Color = rgb(96, 96, 96);
    pub const PANEL: Color = rgb(60, 60, 60);
    pub const BORDER: Color = rgb(200, 200, 200);
    /// Translucent black laid over the scene behind menus and overlays
    pub const DIM: Color = [0.0, 0.0, 0.0, 150.0 / 255.0];
}

/// Text styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Big,
    Button,
    ButtonSmall,
}

/// How a text position is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Image assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Logo,
    RulesPage(u32),
    Player { facing: Facing, frame: u32 },
    Hazard { variant: u8 },
    Pickup,
    /// Station artwork, by asset path
    Station(String),
    Goal,
    HealthIcon,
    ProgressIcon,
}

impl Sprite {
    pub fn asset_path(&self) -> String {
        match self {
            Sprite::Background => "PICS/Background/cosmos4.png".into(),
            Sprite::Logo => "PICS/Player_right/LOGO.png".into(),
            Sprite::RulesPage(page) => format!("PICS/Rules/Rules/Ru{}.png", page + 1),
            Sprite::Player { facing, frame } => {
                let n = frame + 1;
                match facing {
                    Facing::Right => format!("PICS/Player_right/R{n}{n}.png"),
                    Facing::Left => format!("PICS/Player_left/L{n}{n}.png"),
                }
            }
            Sprite::Hazard { variant } => format!("PICS/Enemy/Stone{}.png", variant + 1),
            Sprite::Pickup => "PICS/Stats/key.png".into(),
            Sprite::Station(path) => path.clone(),
            Sprite::Goal => "PICS/New Hero, Rocket/last planet.png".into(),
            Sprite::HealthIcon => "PICS/Stats/gear-cog-setting.png".into(),
            Sprite::ProgressIcon => "PICS/Departaments/visited depa.png".into(),
        }
    }
}

/// One primitive for the host to draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Image scaled into `rect`
    Image { sprite: Sprite, rect: Rect },
    /// Solid rectangle
    Fill { rect: Rect, color: Color },
    /// Rounded button body with an optional outline
    Panel {
        rect: Rect,
        fill: Color,
        border: Option<Color>,
        radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Option<Color>,
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: Anchor,
        size: FontSize,
        color: Color,
    },
}

impl DrawCmd {
    pub fn image(sprite: Sprite, rect: Rect) -> Self {
        DrawCmd::Image { sprite, rect }
    }

    pub fn text(text: impl Into<String>, pos: Vec2, size: FontSize, color: Color) -> Self {
        DrawCmd::Text {
            text: text.into(),
            pos,
            anchor: Anchor::Center,
            size,
            color,
        }
    }

    pub fn text_at(text: impl Into<String>, pos: Vec2, size: FontSize, color: Color) -> Self {
        DrawCmd::Text {
            text: text.into(),
            pos,
            anchor: Anchor::TopLeft,
            size,
            color,
        }
    }

    /// Text content, for text commands
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCmd::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
