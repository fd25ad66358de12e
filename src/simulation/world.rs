//! The game driver that ties the session, the scene tree and input together
//!
//! This is the entry point for running the restaurant without any Bevy
//! dependencies. One call to [`Game::tick`] is one frame:
//!
//! 1. every polled input event is broadcast to all registered buttons
//! 2. the screens are rendered once, running update hooks and drawing
//! 3. commands queued by actions and hooks are applied, so their effect is
//!    visible from the next frame on

use anyhow::{Context, Result};
use log::info;

use super::game_state::{GameConfig, GameSession};
use crate::scene::{
    Canvas, EventBus, FrameContext, Graphics, InputEvent, Millis, Position, Rect, SceneCommand,
    ScreenId,
};
use crate::screens::{Screens, View};

pub struct Game {
    config: GameConfig,
    bus: EventBus,
    session: GameSession,
    screens: Screens,
    pointer: Position,
    commands: Vec<SceneCommand>,
    quit_requested: bool,
    frame: u64,
}

impl Game {
    /// Build the whole scene tree; fails if any asset cannot be loaded
    pub fn new(config: GameConfig, gfx: &mut dyn Graphics, now: Millis) -> Result<Self> {
        let mut bus = EventBus::new();
        let session = GameSession::new(&config);
        let screens =
            Screens::build(&config, &mut bus, gfx, now).context("failed to build the scene tree")?;
        info!("Scene tree built with {} buttons", bus.len());

        Ok(Self {
            config,
            bus,
            session,
            screens,
            pointer: Position::default(),
            commands: Vec::new(),
            quit_requested: false,
            frame: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Position {
        self.pointer
    }

    pub fn current_screen(&self) -> ScreenId {
        [ScreenId::Win, ScreenId::Gameplay, ScreenId::MainMenu]
            .into_iter()
            .find(|id| self.screens.is_showing(*id))
            .unwrap_or(ScreenId::MainMenu)
    }

    pub fn current_view(&self) -> View {
        self.screens.gameplay.current_view()
    }

    /// Hit rectangles of every button that would react to a click right now
    pub fn visible_buttons(&self) -> Vec<Rect> {
        let mut out = Vec::new();
        self.screens.collect_buttons(&mut out);
        out
    }

    /// Run one frame
    pub fn tick(
        &mut self,
        now: Millis,
        events: &[InputEvent],
        gfx: &mut dyn Graphics,
        canvas: &mut dyn Canvas,
    ) {
        for event in events {
            match *event {
                InputEvent::Quit => {
                    info!("Quit requested");
                    self.quit_requested = true;
                }
                InputEvent::PointerDown { pos, .. }
                | InputEvent::PointerUp { pos, .. }
                | InputEvent::PointerMoved { pos } => self.pointer = pos,
            }

            let mut ctx = FrameContext {
                now,
                pointer: self.pointer,
                session: &mut self.session,
                commands: &mut self.commands,
                gfx: &mut *gfx,
                hidden_mode: self.config.hidden_mode,
            };
            self.bus.broadcast(event, &mut ctx);
        }

        let mut ctx = FrameContext {
            now,
            pointer: self.pointer,
            session: &mut self.session,
            commands: &mut self.commands,
            gfx: &mut *gfx,
            hidden_mode: self.config.hidden_mode,
        };
        self.screens.render(&mut ctx, canvas);

        for command in std::mem::take(&mut self.commands) {
            self.screens.apply(command, &mut self.session, gfx, now);
        }
        self.frame += 1;
    }

    /// Print a summary of the game state
    pub fn print_summary(&self, now: Millis) {
        println!("=== Burger Shift Summary ===");
        println!("Frame: {}", self.frame);
        println!("Screen: {:?}", self.current_screen());
        if self.current_screen() == ScreenId::Gameplay {
            let freezer = if self.screens.gameplay.storage().is_freezer_open() {
                " (freezer open)"
            } else {
                ""
            };
            println!("View: {}{}", self.current_view().label(), freezer);
        }
        println!("{}", self.session.summary(now));
        println!("Clickable buttons: {}", self.visible_buttons().len());
    }
}
