//! UI components and resources for linking Bevy to the game

use std::collections::HashMap;
use std::path::PathBuf;

use bevy::prelude::*;

use crate::scene::{DrawList, ImageHandle, Size, TextStyle};
use crate::simulation::{Game, GameConfig};

/// Resource wrapper for the game
///
/// The scene tree shares buttons through `Rc`, so this lives as a non-send
/// resource and every system touching it runs on the main thread.
pub struct GameResource(pub Game);

/// Config the game is built from at startup
#[derive(Resource, Clone)]
pub struct GameSettings {
    pub config: GameConfig,
    /// Directory the asset server reads from; loads are checked against it
    pub asset_root: PathBuf,
}

/// The draw calls of the most recent tick
#[derive(Resource, Default)]
pub struct FrameDrawList(pub DrawList);

/// Marker for entities respawned from the draw list every frame
#[derive(Component)]
pub struct FrameSprite;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// What an image handle stands for on the Bevy side
pub enum RegistryEntry {
    Image {
        handle: Handle<Image>,
        size: Option<Size>,
    },
    Text {
        text: String,
        font: Option<Handle<Font>>,
        size: u32,
        color: Color,
    },
}

/// Maps scene image handles to Bevy assets
///
/// Scaled images and rasterized text are keyed so repeated requests reuse
/// the same entry.
#[derive(Resource, Default)]
pub struct ImageRegistry {
    pub entries: Vec<RegistryEntry>,
    pub scaled: HashMap<(ImageHandle, Size), ImageHandle>,
    pub texts: HashMap<(String, TextStyle), ImageHandle>,
}

impl ImageRegistry {
    pub fn get(&self, index: u32) -> Option<&RegistryEntry> {
        self.entries.get(index as usize)
    }
}
