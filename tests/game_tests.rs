//! Game mechanics validation test
//!
//! Covers the clock, inventory and cooking rules on their own, then plays a
//! shift through the full scene tree with synthetic clicks.

use burger_shift::scene::{DrawList, HeadlessGraphics, InputEvent, Millis, Position, ScreenId};
use burger_shift::screens::View;
use burger_shift::simulation::{
    military_to_standard_time, CookSlot, CookState, CookStation, Game, GameConfig, GameSession,
    Inventory, Item, Recipe, SessionClock, StationKind, DEFAULT_FRYER_COOK_MS,
    DEFAULT_FRYER_LANES, DEFAULT_GRILL_COOK_MS, DEFAULT_SHIFT_DURATION_MS,
};

#[test]
fn test_military_to_standard_time() {
    let cases = [
        (0.1, "12 AM"),
        (1.0, "1 AM"),
        (11.9, "11 AM"),
        (12.0, "12 PM"),
        (16.0, "4 PM"),
        (23.5, "11 PM"),
        (24.0, "0 AM"),
        (26.0, "2 AM"),
    ];
    for (hour, expected) in cases {
        assert_eq!(military_to_standard_time(hour), expected, "hour {hour}");
    }
}

#[test]
fn test_clock_maps_real_time_to_shift_hours() {
    let mut clock = SessionClock::default();
    assert_eq!(clock.current_hour(Millis(0)), None);
    assert_eq!(clock.standard_time(Millis(0)), None);

    clock.start(Millis(1_000));
    assert!(clock.is_running());
    assert_eq!(clock.current_hour(Millis(1_000)), Some(9.0));
    // Eight in-game hours over ten real minutes: one hour is 75 seconds
    assert_eq!(clock.current_hour(Millis(76_000)), Some(10.0));
    assert_eq!(clock.standard_time(Millis(301_000)), Some("1 PM".to_string()));

    clock.reset();
    assert!(!clock.is_running());
}

#[test]
fn test_clock_wraps_past_midnight() {
    let clock = SessionClock::new(22, 2, 400_000);
    assert_eq!(clock.shift_span_hours(), 4);
    assert_eq!(clock.adjusted_end_hour(), 26);

    let mut clock = clock;
    clock.start(Millis(0));
    assert_eq!(clock.standard_time(Millis(200_000)), Some("0 AM".to_string()));
    assert_eq!(clock.current_hour(Millis(400_000)), Some(26.0));
}

#[test]
fn test_inventory_holds_one_item() {
    let mut inventory = Inventory::new();
    assert!(inventory.is_empty());

    assert!(inventory.add_item(Item::BurgerBun));
    assert!(!inventory.add_item(Item::HotdogBun));
    assert_eq!(inventory.peek(), Some(Item::BurgerBun));

    assert_eq!(inventory.get_item(), Some(Item::BurgerBun));
    assert_eq!(inventory.get_item(), None);
    assert!(inventory.is_empty());
}

#[test]
fn test_cook_slot_cycle() {
    let mut slot = CookSlot::new(Recipe::PATTY);
    let mut inventory = Inventory::new();

    // Nothing to put down
    assert!(!slot.interact(&mut inventory, Millis(0)));

    // Wrong ingredient stays in hand
    inventory.add_item(Item::RawHotdog);
    assert!(!slot.interact(&mut inventory, Millis(0)));
    assert_eq!(inventory.get_item(), Some(Item::RawHotdog));

    inventory.add_item(Item::RawPatty);
    assert!(slot.interact(&mut inventory, Millis(1_000)));
    assert!(inventory.is_empty());
    assert_eq!(slot.state(), CookState::Raw);
    assert_eq!(slot.cook_start(), Some(Millis(1_000)));
    assert_eq!(slot.remaining_ms(Millis(6_000)), Some(DEFAULT_GRILL_COOK_MS - 5_000));

    assert_eq!(slot.update(Millis(1_000 + DEFAULT_GRILL_COOK_MS - 1)), CookState::Raw);
    assert!(!slot.interact(&mut inventory, Millis(1_000 + DEFAULT_GRILL_COOK_MS - 1)));
    assert_eq!(slot.update(Millis(1_000 + DEFAULT_GRILL_COOK_MS)), CookState::Cooked);
    assert_eq!(slot.remaining_ms(Millis(1_000 + DEFAULT_GRILL_COOK_MS)), None);

    // Full hands block collection
    inventory.add_item(Item::BurgerBun);
    assert!(!slot.interact(&mut inventory, Millis(20_000)));
    assert_eq!(slot.state(), CookState::Cooked);

    inventory.clear();
    assert!(slot.interact(&mut inventory, Millis(20_000)));
    assert_eq!(inventory.peek(), Some(Item::CookedPatty));
    assert_eq!(slot.state(), CookState::Empty);
}

#[test]
fn test_interact_refreshes_before_deciding() {
    let mut slot = CookSlot::new(Recipe::FRIES.with_duration(500));
    let mut inventory = Inventory::new();
    inventory.add_item(Item::RawFries);
    slot.interact(&mut inventory, Millis(0));

    // No update call in between; the interaction itself notices the fries are done
    assert!(slot.interact(&mut inventory, Millis(500)));
    assert_eq!(inventory.peek(), Some(Item::CookedFries));
}

#[test]
fn test_grill_lays_out_patties_first() {
    let grill = CookStation::grill(3, 2, 1_000);
    assert_eq!(grill.kind(), StationKind::Grill);
    let raws: Vec<Item> = grill.slots().iter().map(|slot| slot.recipe().raw).collect();
    assert_eq!(
        raws,
        vec![
            Item::RawPatty,
            Item::RawPatty,
            Item::RawPatty,
            Item::RawHotdog,
            Item::RawHotdog
        ]
    );

    let fryer = CookStation::fryer(2, 1_000);
    assert_eq!(fryer.kind(), StationKind::Fryer);
    assert_eq!(fryer.slots().len(), 2);
    assert!(fryer.slot(2).is_none());
}

#[test]
fn test_session_shift_ends_once() {
    let mut session = GameSession::default();
    assert!(!session.check_clock_ended(Millis(DEFAULT_SHIFT_DURATION_MS)));

    session.start_game(Millis(0));
    assert!(session.is_started());
    assert!(!session.check_clock_ended(Millis(DEFAULT_SHIFT_DURATION_MS - 1)));
    assert!(session.check_clock_ended(Millis(DEFAULT_SHIFT_DURATION_MS)));
    assert!(session.is_over());
    assert!(!session.check_clock_ended(Millis(DEFAULT_SHIFT_DURATION_MS + 1)));
}

#[test]
fn test_fryer_lane_cooks_at_default_duration() {
    let mut fryer = CookStation::fryer(DEFAULT_FRYER_LANES, DEFAULT_FRYER_COOK_MS);
    let mut inventory = Inventory::new();
    inventory.add_item(Item::RawFries);
    assert!(fryer.interact(1, &mut inventory, Millis(0)));
    assert_eq!(fryer.slot(1).unwrap().state(), CookState::Raw);

    fryer.update(Millis(9_999));
    assert_eq!(fryer.slot(1).unwrap().state(), CookState::Raw);
    assert_eq!(fryer.slot(1).unwrap().remaining_ms(Millis(9_999)), Some(1));

    fryer.update(Millis(10_000));
    assert_eq!(fryer.slot(1).unwrap().state(), CookState::Cooked);
    // The other lane was never loaded
    assert_eq!(fryer.slot(0).unwrap().state(), CookState::Empty);
}

#[test]
fn test_shift_stays_over_when_clock_goes_back() {
    let mut session = GameSession::default();
    session.start_game(Millis(1_000));

    assert!(session.check_clock_ended(Millis(601_000)));
    assert!(!session.check_clock_ended(Millis(10)));
    assert!(session.is_over());
    assert!(!session.check_clock_ended(Millis(700_000)));
    assert!(session.is_over());
}

#[test]
fn test_session_reset_clears_everything() {
    let mut session = GameSession::default();
    session.start_game(Millis(0));
    session.pick_up(Item::RawPatty);
    assert!(session.interact_grill(0, Millis(0)));
    session.pick_up(Item::BurgerBun);

    session.reset_game();

    assert!(!session.is_started());
    assert!(!session.is_over());
    assert!(!session.clock.is_running());
    assert!(session.inventory.is_empty());
    assert_eq!(session.kitchen.grill.slot(0).unwrap().state(), CookState::Empty);
}

#[test]
fn test_discard_empties_hands() {
    let mut session = GameSession::default();
    assert_eq!(session.discard(), None);
    session.pick_up(Item::HotdogBun);
    assert_eq!(session.discard(), Some(Item::HotdogBun));
    assert!(session.inventory.is_empty());
}

/// A game driven by synthetic clicks, one tick per interaction
struct Harness {
    game: Game,
    gfx: HeadlessGraphics,
    canvas: DrawList,
    now: Millis,
}

impl Harness {
    fn new() -> Self {
        let mut gfx = HeadlessGraphics::new();
        let game = Game::new(GameConfig::default(), &mut gfx, Millis(0)).unwrap();
        Self {
            game,
            gfx,
            canvas: DrawList::new(),
            now: Millis(0),
        }
    }

    fn tick(&mut self, events: &[InputEvent]) {
        self.canvas.clear();
        self.game
            .tick(self.now, events, &mut self.gfx, &mut self.canvas);
    }

    fn wait(&mut self, ms: u64) {
        self.now = self.now.plus(ms);
        self.tick(&[]);
    }

    fn click(&mut self, x: i32, y: i32) {
        self.now = self.now.plus(16);
        self.tick(&InputEvent::left_click(Position::new(x, y)));
    }

    fn holding(&self) -> Option<Item> {
        self.game.session().inventory.peek()
    }

    fn label(&self, child: usize) -> String {
        self.game
            .screens()
            .gameplay
            .hud()
            .child(child)
            .and_then(|node| node.text())
            .map(|label| label.text().to_string())
            .unwrap_or_default()
    }

    fn start_shift(&mut self) {
        self.click(420, 430);
    }
}

const VIEW_LABEL: usize = 0;
const CLOCK: usize = 4;

#[test]
fn test_game_starts_on_main_menu() {
    let mut h = Harness::new();
    assert_eq!(h.game.current_screen(), ScreenId::MainMenu);
    assert_eq!(h.game.visible_buttons().len(), 1);
    // Every screen registers its buttons up front
    assert!(h.game.bus().len() > h.game.visible_buttons().len());

    h.tick(&[]);
    assert!(!h.canvas.is_empty());
    assert!(!h.game.session().is_started());
}

#[test]
fn test_missing_assets_fail_construction() {
    let mut gfx = HeadlessGraphics::with_asset_root("/definitely/not/here");
    assert!(Game::new(GameConfig::default(), &mut gfx, Millis(0)).is_err());
}

#[test]
fn test_play_starts_shift() {
    let mut h = Harness::new();
    let registered = h.game.bus().len();
    h.start_shift();

    assert_eq!(h.game.current_screen(), ScreenId::Gameplay);
    assert_eq!(h.game.bus().len(), registered);
    assert_eq!(h.game.current_view(), View::Counter);
    assert!(h.game.session().is_started());
    // Counter has no buttons of its own, only the two arrows
    assert_eq!(h.game.visible_buttons().len(), 2);

    h.wait(16);
    assert_eq!(h.label(CLOCK), "9 AM");
    assert_eq!(h.label(VIEW_LABEL), "Counter");
}

#[test]
fn test_view_rotation_wraps() {
    let mut h = Harness::new();
    h.start_shift();

    let mut seen = Vec::new();
    for _ in 0..4 {
        h.click(1155, 645);
        seen.push(h.game.current_view());
    }
    assert_eq!(
        seen,
        vec![View::Kitchen, View::DriveThrough, View::StorageRoom, View::Counter]
    );

    h.click(125, 645);
    assert_eq!(h.game.current_view(), View::StorageRoom);
    assert_eq!(h.label(VIEW_LABEL), "Storage Room");

    let gameplay = &h.game.screens().gameplay;
    assert!(gameplay.view_node(View::StorageRoom).is_visible());
    assert!(!gameplay.view_node(View::Counter).is_visible());
    assert!(!gameplay.view_node(View::Kitchen).is_visible());
}

#[test]
fn test_storage_shelves_and_freezer() {
    let mut h = Harness::new();
    h.start_shift();
    h.click(125, 645);
    assert_eq!(h.game.current_view(), View::StorageRoom);

    // Burger buns from the shelf; hands are then full
    h.click(995, 375);
    assert_eq!(h.holding(), Some(Item::BurgerBun));
    h.click(785, 205);
    assert_eq!(h.holding(), Some(Item::BurgerBun));
    h.game.session_mut().discard();

    h.click(475, 455);
    assert!(h.game.screens().gameplay.storage().is_freezer_open());
    h.click(640, 290);
    assert_eq!(h.holding(), Some(Item::RawHotdog));

    h.click(640, 510);
    assert!(!h.game.screens().gameplay.storage().is_freezer_open());
    assert_eq!(h.game.current_view(), View::StorageRoom);
}

#[test]
fn test_cook_a_patty_end_to_end() {
    let mut h = Harness::new();
    h.start_shift();

    // Counter -> storage room -> freezer -> raw patty
    h.click(125, 645);
    h.click(475, 455);
    h.click(325, 290);
    assert_eq!(h.holding(), Some(Item::RawPatty));
    h.click(640, 510);

    // Storage room -> counter -> kitchen
    h.click(1155, 645);
    h.click(1155, 645);
    assert_eq!(h.game.current_view(), View::Kitchen);

    h.click(425, 365);
    assert_eq!(h.holding(), None);
    let grill = &h.game.session().kitchen.grill;
    assert_eq!(grill.slot(0).unwrap().state(), CookState::Raw);

    h.wait(DEFAULT_GRILL_COOK_MS - 16);
    assert_eq!(
        h.game.session().kitchen.grill.slot(0).unwrap().state(),
        CookState::Raw
    );
    h.wait(16);
    assert_eq!(
        h.game.session().kitchen.grill.slot(0).unwrap().state(),
        CookState::Cooked
    );

    h.click(425, 365);
    assert_eq!(h.holding(), Some(Item::CookedPatty));

    // Trash can
    h.click(130, 530);
    assert_eq!(h.holding(), None);
}

#[test]
fn test_shift_end_shows_win_screen_and_menu_resets() {
    let mut h = Harness::new();
    h.start_shift();
    h.click(125, 645);
    h.click(995, 375);
    assert_eq!(h.holding(), Some(Item::BurgerBun));

    h.wait(DEFAULT_SHIFT_DURATION_MS);
    assert_eq!(h.game.current_screen(), ScreenId::Win);
    assert!(h.game.session().is_over());

    h.wait(1_000);
    assert_eq!(h.game.current_screen(), ScreenId::Win);
    assert_eq!(h.game.visible_buttons().len(), 1);

    h.click(640, 620);
    assert_eq!(h.game.current_screen(), ScreenId::MainMenu);
    assert!(!h.game.session().is_started());
    assert_eq!(h.holding(), None);

    // A second shift starts back at the counter
    h.start_shift();
    assert_eq!(h.game.current_view(), View::Counter);
    assert!(!h.game.session().is_over());
}

#[test]
fn test_quit_event_is_recorded() {
    let mut h = Harness::new();
    h.now = h.now.plus(16);
    h.tick(&[InputEvent::Quit]);
    assert!(h.game.quit_requested());
    assert_eq!(h.game.frame(), 1);
}
