//! Standalone restaurant simulation module
//!
//! This module contains the game state and the game driver, which can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod autoplay;
mod clock;
mod cooking;
mod game_state;
mod items;
mod world;

pub use autoplay::AutoPlayer;
pub use clock::{military_to_standard_time, SessionClock, MS_PER_HOUR};
pub use cooking::{CookSlot, CookState, CookStation, Kitchen, Recipe, StationKind};
pub use game_state::{
    GameConfig, GameSession, DEFAULT_FRYER_COOK_MS, DEFAULT_FRYER_LANES, DEFAULT_GRILL_COOK_MS,
    DEFAULT_HOTDOG_SLOTS, DEFAULT_PATTY_SLOTS, DEFAULT_SHIFT_DURATION_MS, DEFAULT_SHIFT_END_HOUR,
    DEFAULT_SHIFT_START_HOUR, SCREEN_HEIGHT, SCREEN_WIDTH,
};
pub use items::{Inventory, Item};
pub use world::Game;
