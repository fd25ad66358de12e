//! Input handling and the per-frame game tick

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use log::error;

use super::components::{FrameDrawList, GameResource, GameSettings, ImageRegistry};
use super::graphics::BevyGraphics;
use crate::scene::{InputEvent, Millis, PointerButton, Position};

const BUTTONS: [(MouseButton, PointerButton); 3] = [
    (MouseButton::Left, PointerButton::Left),
    (MouseButton::Middle, PointerButton::Middle),
    (MouseButton::Right, PointerButton::Right),
];

/// Translate this frame's Bevy input into scene events
///
/// With the cursor outside the window, presses are dropped but releases are
/// still reported at the last known pointer position, so no button stays held.
fn poll_events(
    last_pointer: Position,
    cursor: Option<Vec2>,
    mouse: &ButtonInput<MouseButton>,
    keyboard: &ButtonInput<KeyCode>,
) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if keyboard.just_pressed(KeyCode::Escape) {
        events.push(InputEvent::Quit);
    }

    let cursor = cursor.map(|cursor| Position::new(cursor.x as i32, cursor.y as i32));
    if let Some(pos) = cursor.filter(|pos| *pos != last_pointer) {
        events.push(InputEvent::PointerMoved { pos });
    }
    let pos = cursor.unwrap_or(last_pointer);

    for (mouse_button, button) in BUTTONS {
        if cursor.is_some() && mouse.just_pressed(mouse_button) {
            events.push(InputEvent::PointerDown { button, pos });
        }
        if mouse.just_released(mouse_button) {
            events.push(InputEvent::PointerUp { button, pos });
        }
    }
    events
}

/// System to run one game tick
#[allow(clippy::too_many_arguments)]
pub fn tick_game(
    game: Option<NonSendMut<GameResource>>,
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    asset_server: Res<AssetServer>,
    settings: Res<GameSettings>,
    mut registry: ResMut<ImageRegistry>,
    mut frame: ResMut<FrameDrawList>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(mut game) = game else {
        error!("No game to run, shutting down");
        exit.write(AppExit::error());
        return;
    };
    let game = &mut game.0;

    let cursor = windows.single().ok().and_then(Window::cursor_position);
    let events = poll_events(game.pointer(), cursor, &mouse, &keyboard);
    let now = Millis(time.elapsed().as_millis() as u64);
    let mut gfx = BevyGraphics::new(&asset_server, &settings.asset_root, &mut registry);

    frame.0.clear();
    game.tick(now, &events, &mut gfx, &mut frame.0);

    if game.quit_requested() {
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed_and_released(button: MouseButton) -> ButtonInput<MouseButton> {
        let mut mouse = ButtonInput::default();
        mouse.press(button);
        mouse.release(button);
        mouse
    }

    #[test]
    fn release_outside_window_uses_last_pointer() {
        let last = Position::new(40, 50);
        let mouse = pressed_and_released(MouseButton::Left);
        let keyboard = ButtonInput::default();

        let events = poll_events(last, None, &mouse, &keyboard);

        assert_eq!(
            events,
            vec![InputEvent::PointerUp {
                button: PointerButton::Left,
                pos: last,
            }]
        );
    }

    #[test]
    fn cursor_inside_window_reports_move_press_and_release() {
        let mouse = pressed_and_released(MouseButton::Left);
        let keyboard = ButtonInput::default();

        let events = poll_events(
            Position::new(0, 0),
            Some(Vec2::new(12.7, 30.2)),
            &mouse,
            &keyboard,
        );

        let pos = Position::new(12, 30);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMoved { pos },
                InputEvent::PointerDown {
                    button: PointerButton::Left,
                    pos,
                },
                InputEvent::PointerUp {
                    button: PointerButton::Left,
                    pos,
                },
            ]
        );
    }
}
