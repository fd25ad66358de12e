//! Cook stations for the restaurant
//!
//! Every grill slot and fryer lane is an independent timed state machine:
//!
//! - `Empty` -> `Raw` when the player interacts while holding the matching
//!   raw item (the item is consumed)
//! - `Raw` -> `Cooked` on update once the recipe's duration has elapsed
//! - `Cooked` -> `Empty` when the player interacts with a free inventory
//!   (the cooked item moves into the inventory)

use log::debug;

use super::game_state::{DEFAULT_FRYER_COOK_MS, DEFAULT_GRILL_COOK_MS};
use super::items::{Inventory, Item};
use crate::scene::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookState {
    Empty,
    Raw,
    Cooked,
}

/// Which raw item a slot accepts, what it turns into, and how long it takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub raw: Item,
    pub cooked: Item,
    pub duration_ms: u64,
}

impl Recipe {
    pub const PATTY: Recipe = Recipe {
        raw: Item::RawPatty,
        cooked: Item::CookedPatty,
        duration_ms: DEFAULT_GRILL_COOK_MS,
    };

    pub const HOTDOG: Recipe = Recipe {
        raw: Item::RawHotdog,
        cooked: Item::CookedHotdog,
        duration_ms: DEFAULT_GRILL_COOK_MS,
    };

    pub const FRIES: Recipe = Recipe {
        raw: Item::RawFries,
        cooked: Item::CookedFries,
        duration_ms: DEFAULT_FRYER_COOK_MS,
    };

    pub fn with_duration(self, duration_ms: u64) -> Recipe {
        Recipe {
            duration_ms,
            ..self
        }
    }
}

/// A single grill slot or fryer lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookSlot {
    recipe: Recipe,
    state: CookState,
    cook_start: Option<Millis>,
}

impl CookSlot {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            state: CookState::Empty,
            cook_start: None,
        }
    }

    pub fn recipe(&self) -> Recipe {
        self.recipe
    }

    /// State as of the last update or interaction
    pub fn state(&self) -> CookState {
        self.state
    }

    pub fn cook_start(&self) -> Option<Millis> {
        self.cook_start
    }

    /// Time left before a raw slot is done
    pub fn remaining_ms(&self, now: Millis) -> Option<u64> {
        match (self.state, self.cook_start) {
            (CookState::Raw, Some(start)) => {
                Some(self.recipe.duration_ms.saturating_sub(now.since(start)))
            }
            _ => None,
        }
    }

    /// Finish cooking if the duration has elapsed
    pub fn update(&mut self, now: Millis) -> CookState {
        if let (CookState::Raw, Some(start)) = (self.state, self.cook_start) {
            if now.since(start) >= self.recipe.duration_ms {
                self.state = CookState::Cooked;
                self.cook_start = None;
                debug!("{} is done", self.recipe.cooked.name());
            }
        }
        self.state
    }

    /// Player clicked the slot; returns true if the state changed
    pub fn interact(&mut self, inventory: &mut Inventory, now: Millis) -> bool {
        match self.update(now) {
            CookState::Empty => {
                if inventory.peek() != Some(self.recipe.raw) {
                    return false;
                }
                inventory.get_item();
                self.state = CookState::Raw;
                self.cook_start = Some(now);
                debug!("started cooking {}", self.recipe.raw.name());
                true
            }
            CookState::Raw => false,
            CookState::Cooked => {
                if !inventory.add_item(self.recipe.cooked) {
                    return false;
                }
                self.state = CookState::Empty;
                debug!("collected {}", self.recipe.cooked.name());
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = CookState::Empty;
        self.cook_start = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationKind {
    Grill,
    Fryer,
}

/// A group of slots that sit together on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookStation {
    kind: StationKind,
    slots: Vec<CookSlot>,
}

impl CookStation {
    /// Patty slots first, then hotdog slots
    pub fn grill(patty_slots: usize, hotdog_slots: usize, cook_ms: u64) -> Self {
        let patty = Recipe::PATTY.with_duration(cook_ms);
        let hotdog = Recipe::HOTDOG.with_duration(cook_ms);
        let slots = std::iter::repeat(patty)
            .take(patty_slots)
            .chain(std::iter::repeat(hotdog).take(hotdog_slots))
            .map(CookSlot::new)
            .collect();
        Self {
            kind: StationKind::Grill,
            slots,
        }
    }

    pub fn fryer(lanes: usize, cook_ms: u64) -> Self {
        let fries = Recipe::FRIES.with_duration(cook_ms);
        Self {
            kind: StationKind::Fryer,
            slots: (0..lanes).map(|_| CookSlot::new(fries)).collect(),
        }
    }

    pub fn kind(&self) -> StationKind {
        self.kind
    }

    pub fn slots(&self) -> &[CookSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&CookSlot> {
        self.slots.get(index)
    }

    pub fn update(&mut self, now: Millis) {
        for slot in &mut self.slots {
            slot.update(now);
        }
    }

    /// Interact with one slot; unknown indices are ignored
    pub fn interact(&mut self, index: usize, inventory: &mut Inventory, now: Millis) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => slot.interact(inventory, now),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.reset();
        }
    }
}

/// All cooking equipment in the restaurant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kitchen {
    pub grill: CookStation,
    pub fryer: CookStation,
}

impl Kitchen {
    pub fn update(&mut self, now: Millis) {
        self.grill.update(now);
        self.fryer.update(now);
    }

    pub fn reset(&mut self) {
        self.grill.reset();
        self.fryer.reset();
    }
}
