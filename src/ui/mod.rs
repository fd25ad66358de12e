//! UI module that shows the game in a Bevy window
//!
//! This module is purely a frontend - all game logic is in the `scene`,
//! `screens` and `simulation` modules. Each frame the game ticks once with
//! the polled input, and its draw list is mirrored into sprites.

mod components;
mod graphics;
mod input;
mod sync;

use std::path::PathBuf;

use bevy::prelude::*;
use log::error;

pub use components::{FrameDrawList, GameResource, GameSettings, ImageRegistry};
pub use graphics::BevyGraphics;

use crate::scene::Millis;
use crate::simulation::{Game, GameConfig};
use components::MainCamera;
use input::tick_game;
use sync::sync_frame;

/// Plugin to register all UI systems
pub struct BurgerShiftUIPlugin {
    config: GameConfig,
    asset_root: PathBuf,
}

impl BurgerShiftUIPlugin {
    /// `asset_root` must be the directory the `AssetPlugin` reads from
    pub fn new(config: GameConfig, asset_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            asset_root: asset_root.into(),
        }
    }
}

impl Plugin for BurgerShiftUIPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GameSettings {
            config: self.config.clone(),
            asset_root: self.asset_root.clone(),
        })
        .init_resource::<ImageRegistry>()
        .init_resource::<FrameDrawList>()
        .add_systems(Startup, setup_game)
        .add_systems(Update, (tick_game, sync_frame).chain());
    }
}

/// Startup system that spawns the camera and builds the scene tree
///
/// On failure no game resource is inserted and the tick system shuts the app
/// down with an error.
fn setup_game(world: &mut World) {
    world.spawn((MainCamera, Camera2d));

    let settings = world.resource::<GameSettings>().clone();
    let assets = world.resource::<AssetServer>().clone();
    let now = Millis(world.resource::<Time>().elapsed().as_millis() as u64);

    let mut registry = world.remove_resource::<ImageRegistry>().unwrap_or_default();
    let built = {
        let mut gfx = BevyGraphics::new(&assets, &settings.asset_root, &mut registry);
        Game::new(settings.config, &mut gfx, now)
    };
    world.insert_resource(registry);

    match built {
        Ok(game) => world.insert_non_send_resource(GameResource(game)),
        Err(err) => error!("Failed to build the game: {err:#}"),
    }
}
