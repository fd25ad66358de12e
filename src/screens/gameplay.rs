//! Gameplay screen: four rotating views under a shared HUD
//!
//! Only the active view is visible at a time. Showing the screen therefore
//! does not simply cascade: every view is switched off first and the active
//! one is switched back on.

use anyhow::Result;
use log::info;

use super::assets::{self, ItemArt};
use super::kitchen;
use super::storage::StorageRoomView;
use super::Screen;
use crate::scene::{
    Canvas, Color, EventBus, FrameContext, Graphics, Rect, SceneCommand, SceneNode, ScreenId,
    TextLabel, TextStyle,
};
use crate::simulation::{GameConfig, Item};

/// Views in rotation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Counter,
    Kitchen,
    DriveThrough,
    StorageRoom,
}

impl View {
    pub const ROTATION: [View; 4] = [
        View::Counter,
        View::Kitchen,
        View::DriveThrough,
        View::StorageRoom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Counter => "Counter",
            View::Kitchen => "Kitchen",
            View::DriveThrough => "Drive Through",
            View::StorageRoom => "Storage Room",
        }
    }
}

pub struct GameplayScreen {
    counter: SceneNode,
    kitchen: SceneNode,
    drive_through: SceneNode,
    storage: StorageRoomView,
    hud: SceneNode,
    view_label: usize,
    view_index: usize,
    visible: bool,
}

fn background_view(config: &GameConfig, gfx: &mut dyn Graphics, path: &str) -> Result<SceneNode> {
    let mut node = SceneNode::new(0, 0, config.screen.w, config.screen.h);
    let mut background = SceneNode::new(0, 0, config.screen.w, config.screen.h);
    background.set_image(assets::load(gfx, path)?, gfx);
    node.add_child(background);
    Ok(node)
}

fn arrow_button(
    x: i32,
    path: &str,
    command: SceneCommand,
    bus: &mut EventBus,
    gfx: &mut dyn Graphics,
) -> Result<SceneNode> {
    let mut button = SceneNode::button(x, 620, 50, 50, bus);
    button.set_image(assets::load(gfx, path)?, gfx);
    button.set_action(Box::new(move |ctx| ctx.issue(command)));
    Ok(button)
}

/// Text showing the in-game hour; also where the end of the shift is noticed
fn clock_node(gfx: &mut dyn Graphics) -> Result<SceneNode> {
    let style = TextStyle {
        size: 70,
        color: Color::from_hex("#FFFFFF")?,
        ..TextStyle::default()
    };
    let mut node = SceneNode::new(10, 10, 100, 100);
    node.set_text(TextLabel::with_style("clock", style, gfx));
    node.set_update(Box::new(|node, ctx| {
        if let Some(time) = ctx.session.clock.standard_time(ctx.now) {
            if let Some(label) = node.text_mut() {
                if label.text() != time {
                    label.set_text(time, ctx.gfx);
                }
            }
        }
        if ctx.session.check_clock_ended(ctx.now) {
            ctx.issue(SceneCommand::ShowScreen(ScreenId::Win));
        }
    }));
    Ok(node)
}

/// Shows whatever the player is holding
fn inventory_node(art: &ItemArt) -> SceneNode {
    let mut node = SceneNode::new(100, 100, 200, 200);
    let art = art.clone();
    let mut shown: Option<Item> = None;
    node.set_update(Box::new(move |node, ctx| {
        let held = ctx.session.inventory.peek();
        if held == shown {
            return;
        }
        match held.and_then(|item| art.get(item)) {
            Some(image) => node.set_image(image, ctx.gfx),
            None => node.clear_image(),
        }
        shown = held;
    }));
    node
}

fn build_hud(
    config: &GameConfig,
    bus: &mut EventBus,
    gfx: &mut dyn Graphics,
    art: &ItemArt,
) -> Result<(SceneNode, usize)> {
    let mut hud = SceneNode::new(0, 0, config.screen.w, config.screen.h);
    // Cook timers run no matter which view is showing
    hud.set_update(Box::new(|_node, ctx| {
        ctx.session.kitchen.update(ctx.now);
    }));

    let label_style = TextStyle {
        font: Some(assets::VIEW_LABEL_FONT.to_string()),
        size: 50,
        color: Color::from_hex("#FFFFFF")?,
        ..TextStyle::default()
    };
    let mut label = SceneNode::new(520, 630, 100, 100);
    label.set_text(TextLabel::with_style(View::Counter.label(), label_style, gfx));
    let view_label = hud.add_child(label);

    hud.add_child(inventory_node(art));
    hud.add_child(arrow_button(
        1130,
        assets::ARROW_RIGHT,
        SceneCommand::TurnRight,
        bus,
        gfx,
    )?);
    hud.add_child(arrow_button(
        100,
        assets::ARROW_LEFT,
        SceneCommand::TurnLeft,
        bus,
        gfx,
    )?);
    hud.add_child(clock_node(gfx)?);

    Ok((hud, view_label))
}

impl GameplayScreen {
    pub fn build(config: &GameConfig, bus: &mut EventBus, gfx: &mut dyn Graphics) -> Result<Self> {
        let art = ItemArt::load(gfx)?;

        // Registration order decides event delivery order, so views first
        let counter = background_view(config, gfx, assets::COUNTER_BACKGROUND)?;
        let kitchen = kitchen::build(config, bus, gfx, &art)?;
        let drive_through = background_view(config, gfx, assets::DRIVE_THROUGH_BACKGROUND)?;
        let storage = StorageRoomView::build(config, bus, gfx)?;
        let (hud, view_label) = build_hud(config, bus, gfx, &art)?;

        let mut screen = Self {
            counter,
            kitchen,
            drive_through,
            storage,
            hud,
            view_label,
            view_index: 0,
            visible: true,
        };
        screen.reset_views(gfx);
        Ok(screen)
    }

    pub fn current_view(&self) -> View {
        View::ROTATION[self.view_index]
    }

    pub fn storage(&self) -> &StorageRoomView {
        &self.storage
    }

    pub fn hud(&self) -> &SceneNode {
        &self.hud
    }

    pub fn view_node(&self, view: View) -> &SceneNode {
        match view {
            View::Counter => &self.counter,
            View::Kitchen => &self.kitchen,
            View::DriveThrough => &self.drive_through,
            View::StorageRoom => self.storage.node(),
        }
    }

    fn set_view_visible(&mut self, view: View, visible: bool) {
        match view {
            View::Counter => self.counter.set_visible(visible),
            View::Kitchen => self.kitchen.set_visible(visible),
            View::DriveThrough => self.drive_through.set_visible(visible),
            View::StorageRoom => self.storage.set_visible(visible),
        }
    }

    /// Switch every view off, then the active one back on
    fn reset_views(&mut self, gfx: &mut dyn Graphics) {
        self.view_index = self.view_index.min(View::ROTATION.len() - 1);
        let active = self.current_view();
        for view in View::ROTATION {
            self.set_view_visible(view, false);
        }
        if self.visible {
            self.set_view_visible(active, true);
        }
        if let Some(label) = self
            .hud
            .child_mut(self.view_label)
            .and_then(|node| node.text_mut())
        {
            label.set_text(active.label(), gfx);
        }
    }

    pub fn turn_right(&mut self, gfx: &mut dyn Graphics) {
        self.view_index = (self.view_index + 1) % View::ROTATION.len();
        self.reset_views(gfx);
    }

    pub fn turn_left(&mut self, gfx: &mut dyn Graphics) {
        let count = View::ROTATION.len();
        self.view_index = (self.view_index + count - 1) % count;
        self.reset_views(gfx);
    }

    pub fn open_freezer(&mut self) {
        self.storage.open_freezer();
    }

    pub fn close_freezer(&mut self) {
        self.storage.close_freezer();
    }

    /// Back to the counter with the freezer shut
    pub fn reset(&mut self, gfx: &mut dyn Graphics) {
        self.view_index = 0;
        self.storage.close_freezer();
        self.reset_views(gfx);
        info!("Gameplay reset to the {} view", self.current_view().label());
    }
}

impl Screen for GameplayScreen {
    fn node(&self) -> &SceneNode {
        &self.hud
    }

    fn node_mut(&mut self) -> &mut SceneNode {
        &mut self.hud
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.hud.set_visible(visible);
        for view in View::ROTATION {
            self.set_view_visible(view, false);
        }
        if visible {
            self.set_view_visible(self.current_view(), true);
        }
    }

    fn render(&mut self, ctx: &mut FrameContext<'_>, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        self.counter.render(ctx, canvas);
        self.kitchen.render(ctx, canvas);
        self.drive_through.render(ctx, canvas);
        self.storage.node_mut().render(ctx, canvas);
        self.hud.render(ctx, canvas);
    }

    fn collect_buttons(&self, out: &mut Vec<Rect>) {
        if !self.visible {
            return;
        }
        for view in View::ROTATION {
            self.view_node(view).collect_buttons(out);
        }
        self.hud.collect_buttons(out);
    }
}
