//! Restaurant screens assembled from scene nodes
//!
//! Each screen is a struct owning its nodes plus whatever extra state it
//! needs. The [`Screens`] set renders them in a fixed order and applies the
//! commands that switch between them.

mod assets;
mod finish;
mod gameplay;
mod kitchen;
mod menu;
mod storage;

use anyhow::{Context, Result};
use log::info;

pub use assets::ItemArt;
pub use finish::WinScreen;
pub use gameplay::{GameplayScreen, View};
pub use menu::MainMenuScreen;
pub use storage::StorageRoomView;

use crate::scene::{
    Canvas, EventBus, FrameContext, Graphics, Millis, Rect, SceneCommand, SceneNode, ScreenId,
};
use crate::simulation::{GameConfig, GameSession};

/// A top-level screen
pub trait Screen {
    fn node(&self) -> &SceneNode;
    fn node_mut(&mut self) -> &mut SceneNode;

    fn is_visible(&self) -> bool {
        self.node().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.node_mut().set_visible(visible);
    }

    fn render(&mut self, ctx: &mut FrameContext<'_>, canvas: &mut dyn Canvas) {
        self.node_mut().render(ctx, canvas);
    }

    fn collect_buttons(&self, out: &mut Vec<Rect>) {
        self.node().collect_buttons(out);
    }
}

pub struct Screens {
    pub main_menu: MainMenuScreen,
    pub gameplay: GameplayScreen,
    pub win: WinScreen,
}

impl Screens {
    /// Build every screen; any missing asset aborts
    pub fn build(
        config: &GameConfig,
        bus: &mut EventBus,
        gfx: &mut dyn Graphics,
        now: Millis,
    ) -> Result<Self> {
        let main_menu =
            MainMenuScreen::build(config, bus, gfx, now).context("failed to build the main menu")?;
        let gameplay =
            GameplayScreen::build(config, bus, gfx).context("failed to build the gameplay screen")?;
        let win = WinScreen::build(config, bus, gfx).context("failed to build the win screen")?;

        let mut screens = Self {
            main_menu,
            gameplay,
            win,
        };
        screens.show(ScreenId::MainMenu);
        Ok(screens)
    }

    fn screen_mut(&mut self, id: ScreenId) -> &mut dyn Screen {
        match id {
            ScreenId::MainMenu => &mut self.main_menu,
            ScreenId::Gameplay => &mut self.gameplay,
            ScreenId::Win => &mut self.win,
        }
    }

    /// Hide every screen but `id`
    pub fn show(&mut self, id: ScreenId) {
        for other in [ScreenId::MainMenu, ScreenId::Gameplay, ScreenId::Win] {
            if other != id {
                self.screen_mut(other).set_visible(false);
            }
        }
        self.screen_mut(id).set_visible(true);
    }

    pub fn is_showing(&self, id: ScreenId) -> bool {
        match id {
            ScreenId::MainMenu => self.main_menu.is_visible(),
            ScreenId::Gameplay => self.gameplay.is_visible(),
            ScreenId::Win => self.win.is_visible(),
        }
    }

    pub fn render(&mut self, ctx: &mut FrameContext<'_>, canvas: &mut dyn Canvas) {
        self.main_menu.render(ctx, canvas);
        self.gameplay.render(ctx, canvas);
        self.win.render(ctx, canvas);
    }

    pub fn collect_buttons(&self, out: &mut Vec<Rect>) {
        self.main_menu.collect_buttons(out);
        self.gameplay.collect_buttons(out);
        self.win.collect_buttons(out);
    }

    /// Apply one deferred command
    pub fn apply(
        &mut self,
        command: SceneCommand,
        session: &mut GameSession,
        gfx: &mut dyn Graphics,
        now: Millis,
    ) {
        match command {
            SceneCommand::ShowScreen(id) => {
                info!("Switching to {id:?}");
                self.show(id);
            }
            SceneCommand::TurnLeft => self.gameplay.turn_left(gfx),
            SceneCommand::TurnRight => self.gameplay.turn_right(gfx),
            SceneCommand::OpenFreezer => self.gameplay.open_freezer(),
            SceneCommand::CloseFreezer => self.gameplay.close_freezer(),
            SceneCommand::StartShift => {
                session.reset_game();
                session.start_game(now);
                self.gameplay.reset(gfx);
                self.show(ScreenId::Gameplay);
            }
            SceneCommand::ReturnToMenu => {
                session.reset_game();
                self.show(ScreenId::MainMenu);
            }
        }
    }
}
