//! Core types for the surface engine
//!
//! Plain value types shared by the scene tree, the restaurant simulation and
//! whichever graphics backend is driving them. None of these depend on Bevy.

use anyhow::{bail, Context, Result};

/// Milliseconds since an arbitrary epoch (process start, test start, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(pub u64);

impl Millis {
    /// Milliseconds elapsed since `earlier`, saturating at zero
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn plus(self, ms: u64) -> Millis {
        Millis(self.0 + ms)
    }
}

/// A screen-space position in pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Axis-aligned rectangle used for hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub origin: Position,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Position) -> bool {
        let right = self.origin.x as i64 + self.size.w as i64;
        let bottom = self.origin.y as i64 + self.size.h as i64;
        (point.x as i64) >= self.origin.x as i64
            && (point.x as i64) < right
            && (point.y as i64) >= self.origin.y as i64
            && (point.y as i64) < bottom
    }

    pub fn center(&self) -> Position {
        Position {
            x: self.origin.x + (self.size.w / 2) as i32,
            y: self.origin.y + (self.size.h / 2) as i32,
        }
    }
}

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            bail!("expected #RRGGBB, got {hex:?}");
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("invalid hex color {hex:?}"))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Opaque reference to an image (or rasterized text) owned by a graphics backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// Which pointer button an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Input events polled from the windowing layer once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerDown { button: PointerButton, pos: Position },
    PointerUp { button: PointerButton, pos: Position },
    PointerMoved { pos: Position },
}

impl InputEvent {
    pub fn left_click(pos: Position) -> [InputEvent; 2] {
        [
            InputEvent::PointerDown {
                button: PointerButton::Left,
                pos,
            },
            InputEvent::PointerUp {
                button: PointerButton::Left,
                pos,
            },
        ]
    }
}
