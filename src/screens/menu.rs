//! Title screen with the animated background and the play button

use anyhow::{Context, Result};

use super::{assets, Screen};
use crate::scene::{AnimatedSprite, EventBus, Graphics, Millis, SceneCommand, SceneNode};
use crate::simulation::GameConfig;

pub struct MainMenuScreen {
    node: SceneNode,
}

impl MainMenuScreen {
    pub fn build(
        config: &GameConfig,
        bus: &mut EventBus,
        gfx: &mut dyn Graphics,
        now: Millis,
    ) -> Result<Self> {
        let screen = config.screen;
        let mut node = SceneNode::new(0, 0, screen.w, screen.h);

        let mut background = SceneNode::new(0, 0, screen.w, screen.h);
        let title = AnimatedSprite::load(&assets::title_animation(), screen, gfx, now)
            .context("failed to load the title animation")?;
        background.set_animation(title);

        let mut play = SceneNode::button(270, 380, 300, 100, bus);
        play.set_action(Box::new(|ctx| ctx.issue(SceneCommand::StartShift)));

        node.add_child(background);
        node.add_child(play);
        Ok(Self { node })
    }
}

impl Screen for MainMenuScreen {
    fn node(&self) -> &SceneNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut SceneNode {
        &mut self.node
    }
}
