//! Storage room view: bun shelves and the freezer
//!
//! The room has two sub-views that replace each other. Cascading visibility
//! would show both, so every visibility change re-asserts which one is open.

use anyhow::Result;

use super::assets;
use crate::scene::{
    Color, EventBus, Graphics, SceneCommand, SceneNode, TextLabel, TextStyle,
};
use crate::simulation::{GameConfig, Item};

pub struct StorageRoomView {
    node: SceneNode,
    shelves: usize,
    freezer: usize,
    freezer_open: bool,
}

fn pick_up_button(x: i32, y: i32, w: u32, h: u32, item: Item, bus: &mut EventBus) -> SceneNode {
    let mut button = SceneNode::button(x, y, w, h, bus);
    button.set_action(Box::new(move |ctx| {
        ctx.session.pick_up(item);
    }));
    button
}

fn highlight(config: &GameConfig, gfx: &mut dyn Graphics, path: &str) -> Result<SceneNode> {
    let mut node = SceneNode::new(0, 0, config.screen.w, config.screen.h);
    node.set_image(assets::load(gfx, path)?, gfx);
    node.set_visible(false);
    Ok(node)
}

fn build_shelves(config: &GameConfig, bus: &mut EventBus, gfx: &mut dyn Graphics) -> Result<SceneNode> {
    let mut shelves = SceneNode::new(0, 0, config.screen.w, config.screen.h);
    shelves.set_image(assets::load(gfx, assets::STORAGE_BACKGROUND)?, gfx);

    let burger_highlight = shelves.add_child(highlight(config, gfx, assets::BURGER_BUN_HIGHLIGHT)?);
    let hotdog_highlight = shelves.add_child(highlight(config, gfx, assets::HOTDOG_BUN_HIGHLIGHT)?);
    let freezer_highlight = shelves.add_child(highlight(config, gfx, assets::FREEZER_HIGHLIGHT)?);

    let hotdog_bun = shelves.add_child(pick_up_button(670, 130, 230, 150, Item::HotdogBun, bus));
    let burger_bun = shelves.add_child(pick_up_button(870, 300, 250, 150, Item::BurgerBun, bus));

    let mut freezer = SceneNode::button(350, 280, 250, 350, bus);
    freezer.set_action(Box::new(|ctx| ctx.issue(SceneCommand::OpenFreezer)));
    let freezer = shelves.add_child(freezer);

    let highlights = [
        (burger_highlight, burger_bun),
        (hotdog_highlight, hotdog_bun),
        (freezer_highlight, freezer),
    ];
    shelves.set_update(Box::new(move |node, _ctx| {
        for (highlight, button) in highlights {
            let hovered = node.child(button).is_some_and(|b| b.is_hovered());
            if let Some(highlight) = node.child_mut(highlight) {
                highlight.set_visible(hovered);
            }
        }
    }));

    Ok(shelves)
}

fn build_freezer(config: &GameConfig, bus: &mut EventBus, gfx: &mut dyn Graphics) -> Result<SceneNode> {
    let mut freezer = SceneNode::new(0, 0, config.screen.w, config.screen.h);
    freezer.set_image(assets::load(gfx, assets::FREEZER_BACKGROUND)?, gfx);

    freezer.add_child(pick_up_button(200, 180, 250, 220, Item::RawPatty, bus));
    freezer.add_child(pick_up_button(515, 180, 250, 220, Item::RawHotdog, bus));
    freezer.add_child(pick_up_button(830, 180, 250, 220, Item::RawFries, bus));

    let mut back = SceneNode::button(540, 470, 200, 80, bus);
    let style = TextStyle {
        size: 40,
        color: Color::WHITE,
        ..TextStyle::default()
    };
    back.set_text(TextLabel::with_style("Back", style, gfx));
    back.set_action(Box::new(|ctx| ctx.issue(SceneCommand::CloseFreezer)));
    freezer.add_child(back);

    Ok(freezer)
}

impl StorageRoomView {
    pub fn build(config: &GameConfig, bus: &mut EventBus, gfx: &mut dyn Graphics) -> Result<Self> {
        let mut node = SceneNode::new(0, 0, config.screen.w, config.screen.h);
        let shelves = node.add_child(build_shelves(config, bus, gfx)?);
        let freezer = node.add_child(build_freezer(config, bus, gfx)?);

        let mut view = Self {
            node,
            shelves,
            freezer,
            freezer_open: false,
        };
        view.reassert();
        Ok(view)
    }

    pub fn node(&self) -> &SceneNode {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut SceneNode {
        &mut self.node
    }

    pub fn is_freezer_open(&self) -> bool {
        self.freezer_open
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.node.set_visible(visible);
        self.reassert();
    }

    pub fn open_freezer(&mut self) {
        self.freezer_open = true;
        self.reassert();
    }

    pub fn close_freezer(&mut self) {
        self.freezer_open = false;
        self.reassert();
    }

    /// Show exactly one sub-view while the room itself is visible
    fn reassert(&mut self) {
        if !self.node.is_visible() {
            return;
        }
        let open = self.freezer_open;
        if let Some(shelves) = self.node.child_mut(self.shelves) {
            shelves.set_visible(!open);
        }
        if let Some(freezer) = self.node.child_mut(self.freezer) {
            freezer.set_visible(open);
        }
    }
}
