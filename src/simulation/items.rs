//! Items and the player's single-slot inventory

/// Everything the player can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    BurgerBun,
    HotdogBun,
    RawPatty,
    CookedPatty,
    RawHotdog,
    CookedHotdog,
    RawFries,
    CookedFries,
}

impl Item {
    pub const ALL: [Item; 8] = [
        Item::BurgerBun,
        Item::HotdogBun,
        Item::RawPatty,
        Item::CookedPatty,
        Item::RawHotdog,
        Item::CookedHotdog,
        Item::RawFries,
        Item::CookedFries,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Item::BurgerBun => "Burger Bun",
            Item::HotdogBun => "Hotdog Bun",
            Item::RawPatty => "Raw Patty",
            Item::CookedPatty => "Cooked Patty",
            Item::RawHotdog => "Raw Hotdog",
            Item::CookedHotdog => "Cooked Hotdog",
            Item::RawFries => "Raw Fries",
            Item::CookedFries => "Cooked Fries",
        }
    }
}

/// Holds at most one item. The first item in stays until taken out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    slot: Option<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `item` if the slot is free; returns whether it was stored
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.slot.is_some() {
            return false;
        }
        self.slot = Some(item);
        true
    }

    pub fn peek(&self) -> Option<Item> {
        self.slot
    }

    /// Take the item out, leaving the slot free
    pub fn get_item(&mut self) -> Option<Item> {
        self.slot.take()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
