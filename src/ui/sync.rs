//! Systems for mirroring the draw list into Bevy entities

use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::components::{FrameDrawList, FrameSprite, GameSettings, ImageRegistry, RegistryEntry};

/// Depth step between consecutive blits so later draws land on top
const Z_STEP: f32 = 0.001;

/// System to respawn one sprite or text entity per blit
///
/// Scene coordinates have their origin at the top left with y pointing down;
/// the 2D camera is centered with y pointing up.
pub fn sync_frame(
    mut commands: Commands,
    frame: Res<FrameDrawList>,
    registry: Res<ImageRegistry>,
    settings: Res<GameSettings>,
    drawn: Query<Entity, With<FrameSprite>>,
) {
    for entity in drawn.iter() {
        commands.entity(entity).despawn();
    }

    let screen = settings.config.screen;
    let half_w = screen.w as f32 / 2.0;
    let half_h = screen.h as f32 / 2.0;

    for (i, call) in frame.0.calls().iter().enumerate() {
        let Some(entry) = registry.get(call.image.0) else {
            continue;
        };
        let transform = Transform::from_xyz(
            call.at.x as f32 - half_w,
            half_h - call.at.y as f32,
            i as f32 * Z_STEP,
        );

        match entry {
            RegistryEntry::Image { handle, size } => {
                commands.spawn((
                    FrameSprite,
                    Sprite {
                        image: handle.clone(),
                        custom_size: size.map(|s| Vec2::new(s.w as f32, s.h as f32)),
                        ..default()
                    },
                    Anchor::TOP_LEFT,
                    transform,
                ));
            }
            RegistryEntry::Text {
                text,
                font,
                size,
                color,
            } => {
                commands.spawn((
                    FrameSprite,
                    Text2d::new(text.clone()),
                    TextFont {
                        font: font.clone().unwrap_or_default(),
                        font_size: *size as f32,
                        ..default()
                    },
                    TextColor(*color),
                    Anchor::TOP_LEFT,
                    transform,
                ));
            }
        }
    }
}
