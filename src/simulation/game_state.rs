//! Session state for one shift at the restaurant
//!
//! The session owns everything button actions and update hooks mutate: the
//! shift clock, the player's inventory and the cooking equipment. It is
//! created once at startup and reset between shifts.

use log::{debug, info};

use super::clock::SessionClock;
use super::cooking::{CookState, CookStation, Kitchen};
use super::items::{Inventory, Item};
use crate::scene::{HiddenMode, Millis, Size, HOST_TICK_RATE};

/// Window size the scene layout is authored for
pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;

/// One shift lasts ten real minutes
pub const DEFAULT_SHIFT_DURATION_MS: u64 = 600_000;
/// 9 AM to 5 PM
pub const DEFAULT_SHIFT_START_HOUR: u32 = 9;
pub const DEFAULT_SHIFT_END_HOUR: u32 = 17;

/// Cook times per station
pub const DEFAULT_GRILL_COOK_MS: u64 = 15_000;
pub const DEFAULT_FRYER_COOK_MS: u64 = 10_000;

/// Equipment layout
pub const DEFAULT_PATTY_SLOTS: usize = 3;
pub const DEFAULT_HOTDOG_SLOTS: usize = 2;
pub const DEFAULT_FRYER_LANES: usize = 2;

/// Tunables for a game instance
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen: Size,
    pub tick_rate: u32,
    pub shift_start_hour: u32,
    pub shift_end_hour: u32,
    pub shift_duration_ms: u64,
    pub grill_cook_ms: u64,
    pub fryer_cook_ms: u64,
    pub patty_slots: usize,
    pub hotdog_slots: usize,
    pub fryer_lanes: usize,
    pub hidden_mode: HiddenMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            tick_rate: HOST_TICK_RATE,
            shift_start_hour: DEFAULT_SHIFT_START_HOUR,
            shift_end_hour: DEFAULT_SHIFT_END_HOUR,
            shift_duration_ms: DEFAULT_SHIFT_DURATION_MS,
            grill_cook_ms: DEFAULT_GRILL_COOK_MS,
            fryer_cook_ms: DEFAULT_FRYER_COOK_MS,
            patty_slots: DEFAULT_PATTY_SLOTS,
            hotdog_slots: DEFAULT_HOTDOG_SLOTS,
            fryer_lanes: DEFAULT_FRYER_LANES,
            hidden_mode: HiddenMode::default(),
        }
    }
}

impl GameConfig {
    /// Milliseconds per tick at the configured rate
    pub fn tick_ms(&self) -> u64 {
        1000 / self.tick_rate.max(1) as u64
    }
}

/// Shared game state handed to hooks and actions
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub clock: SessionClock,
    pub inventory: Inventory,
    pub kitchen: Kitchen,
    started: bool,
    over: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            clock: SessionClock::new(
                config.shift_start_hour,
                config.shift_end_hour,
                config.shift_duration_ms,
            ),
            inventory: Inventory::new(),
            kitchen: Kitchen {
                grill: CookStation::grill(
                    config.patty_slots,
                    config.hotdog_slots,
                    config.grill_cook_ms,
                ),
                fryer: CookStation::fryer(config.fryer_lanes, config.fryer_cook_ms),
            },
            started: false,
            over: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn start_game(&mut self, now: Millis) {
        self.clock.start(now);
        self.started = true;
        info!(
            "Shift started ({} to {})",
            self.clock.start_hour(),
            self.clock.end_hour()
        );
    }

    /// Back to the pre-shift state: clock stopped, hands empty, equipment clear
    pub fn reset_game(&mut self) {
        self.started = false;
        self.over = false;
        self.clock.reset();
        self.inventory.clear();
        self.kitchen.reset();
    }

    /// True exactly once: on the first check at or after the shift's end
    pub fn check_clock_ended(&mut self, now: Millis) -> bool {
        if !self.started || self.over {
            return false;
        }
        let Some(hour) = self.clock.current_hour(now) else {
            return false;
        };
        if hour >= self.clock.adjusted_end_hour() as f64 {
            self.over = true;
            info!("Shift over at hour {hour:.2}");
            return true;
        }
        false
    }

    /// Put an item in the player's hands if they are free
    pub fn pick_up(&mut self, item: Item) -> bool {
        let stored = self.inventory.add_item(item);
        if stored {
            debug!("{} acquired", item.name());
        } else {
            debug!("hands full, {} left behind", item.name());
        }
        stored
    }

    pub fn interact_grill(&mut self, slot: usize, now: Millis) -> bool {
        self.kitchen
            .grill
            .interact(slot, &mut self.inventory, now)
    }

    pub fn interact_fryer(&mut self, lane: usize, now: Millis) -> bool {
        self.kitchen
            .fryer
            .interact(lane, &mut self.inventory, now)
    }

    /// Drop whatever the player is holding
    pub fn discard(&mut self) -> Option<Item> {
        let dropped = self.inventory.get_item();
        if let Some(item) = dropped {
            debug!("{} thrown away", item.name());
        }
        dropped
    }

    /// One-line status for console output
    pub fn summary(&self, now: Millis) -> String {
        let clock = self
            .clock
            .standard_time(now)
            .unwrap_or_else(|| "--".to_string());
        let holding = self
            .inventory
            .peek()
            .map(|item| item.name())
            .unwrap_or("nothing");
        let slots = |station: &CookStation| {
            station
                .slots()
                .iter()
                .map(|slot| match slot.state() {
                    CookState::Empty => '_',
                    CookState::Raw => 'r',
                    CookState::Cooked => 'C',
                })
                .collect::<String>()
        };
        format!(
            "Clock: {} | Holding: {} | Grill: [{}] | Fryer: [{}] | Started: {} | Over: {}",
            clock,
            holding,
            slots(&self.kitchen.grill),
            slots(&self.kitchen.fryer),
            self.started,
            self.over
        )
    }
}
