//! Surface engine
//!
//! A retained tree of positioned nodes that own their image, animation and
//! text content, cascade visibility and movement to their children, run
//! per-frame hooks, and receive input through an event broadcast. Drawing
//! goes through the [`Graphics`] and [`Canvas`] traits, so the engine runs
//! the same with or without a window.

mod animation;
mod button;
mod canvas;
mod events;
mod node;
mod text;
mod types;

/// Frames per second of the host loop; animations never run faster
pub const HOST_TICK_RATE: u32 = 60;

pub use animation::{AnimatedSprite, AnimationSource, FinishedAction};
pub use button::{ActionFn, Button};
pub use canvas::{Canvas, DrawCall, DrawList, Graphics, HeadlessGraphics, TextStyle};
pub use events::{EventBus, EventHandler, HandlerId, SharedHandler};
pub use node::{FrameContext, HiddenMode, SceneCommand, SceneNode, ScreenId, UpdateFn};
pub use text::TextLabel;
pub use types::{Color, ImageHandle, InputEvent, Millis, PointerButton, Position, Rect, Size};
