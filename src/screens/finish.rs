//! End-of-shift screen

use anyhow::Result;

use super::{assets, Screen};
use crate::scene::{Color, EventBus, Graphics, SceneCommand, SceneNode, TextLabel, TextStyle};
use crate::simulation::GameConfig;

pub struct WinScreen {
    node: SceneNode,
}

impl WinScreen {
    pub fn build(config: &GameConfig, bus: &mut EventBus, gfx: &mut dyn Graphics) -> Result<Self> {
        let screen = config.screen;
        let mut node = SceneNode::new(0, 0, screen.w, screen.h);

        let mut background = SceneNode::new(0, 0, screen.w, screen.h);
        background.set_image(assets::load(gfx, assets::WIN_BACKGROUND)?, gfx);

        let mut menu = SceneNode::button(540, 580, 200, 80, bus);
        let style = TextStyle {
            size: 40,
            color: Color::WHITE,
            ..TextStyle::default()
        };
        menu.set_text(TextLabel::with_style("Main Menu", style, gfx));
        menu.set_action(Box::new(|ctx| ctx.issue(SceneCommand::ReturnToMenu)));

        node.add_child(background);
        node.add_child(menu);
        Ok(Self { node })
    }
}

impl Screen for WinScreen {
    fn node(&self) -> &SceneNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut SceneNode {
        &mut self.node
    }
}
