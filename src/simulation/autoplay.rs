//! A random player for headless runs
//!
//! Every few ticks it moves the pointer to the middle of a random clickable
//! button and clicks it. Seeding makes a run reproducible.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::world::Game;
use crate::scene::{InputEvent, PointerButton};

pub struct AutoPlayer {
    rng: Option<StdRng>,
    ticks_between_clicks: u32,
    countdown: u32,
}

impl AutoPlayer {
    pub fn new(ticks_between_clicks: u32) -> Self {
        Self {
            rng: None,
            ticks_between_clicks: ticks_between_clicks.max(1),
            countdown: ticks_between_clicks.max(1),
        }
    }

    pub fn new_with_seed(ticks_between_clicks: u32, seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
            ..Self::new(ticks_between_clicks)
        }
    }

    /// Input for the next tick; empty on most ticks
    pub fn next_events(&mut self, game: &Game) -> Vec<InputEvent> {
        self.countdown -= 1;
        if self.countdown > 0 {
            return Vec::new();
        }
        self.countdown = self.ticks_between_clicks;

        let buttons = game.visible_buttons();
        let target = match &mut self.rng {
            Some(rng) => buttons.choose(rng),
            None => buttons.choose(&mut rand::rng()),
        };
        let Some(target) = target else {
            return Vec::new();
        };

        let pos = target.center();
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
    }
}
