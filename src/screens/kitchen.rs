//! Kitchen view: grill slots, fryer lanes and the trash can
//!
//! The cooking state lives in the session. The background's hook advances
//! the timers and picks each slot's overlay from its current state, so there
//! is no separate view object to keep in sync.

use anyhow::Result;

use super::assets::{self, ItemArt};
use crate::scene::{EventBus, Graphics, SceneNode};
use crate::simulation::{CookState, GameConfig, StationKind};

const GRILL_ORIGIN: (i32, i32) = (380, 330);
const GRILL_SLOT_SIZE: (u32, u32) = (90, 70);
const GRILL_SLOT_SPACING: i32 = 100;

const FRYER_ORIGIN: (i32, i32) = (960, 360);
const FRYER_LANE_SIZE: (u32, u32) = (100, 140);
const FRYER_LANE_SPACING: i32 = 120;

/// A slot button and the overlay it currently shows
struct SlotOverlay {
    child: usize,
    station: StationKind,
    slot: usize,
    shown: Option<CookState>,
}

pub fn build(
    config: &GameConfig,
    bus: &mut EventBus,
    gfx: &mut dyn Graphics,
    art: &ItemArt,
) -> Result<SceneNode> {
    let screen = config.screen;
    let mut node = SceneNode::new(0, 0, screen.w, screen.h);

    let mut background = SceneNode::new(0, 0, screen.w, screen.h);
    background.set_image(assets::load(gfx, assets::KITCHEN_BACKGROUND)?, gfx);

    let mut overlays = Vec::new();

    let grill_slots = config.patty_slots + config.hotdog_slots;
    for slot in 0..grill_slots {
        let mut button = SceneNode::button(
            GRILL_ORIGIN.0 + slot as i32 * GRILL_SLOT_SPACING,
            GRILL_ORIGIN.1,
            GRILL_SLOT_SIZE.0,
            GRILL_SLOT_SIZE.1,
            bus,
        );
        button.set_action(Box::new(move |ctx| {
            ctx.session.interact_grill(slot, ctx.now);
        }));
        overlays.push(SlotOverlay {
            child: background.add_child(button),
            station: StationKind::Grill,
            slot,
            shown: None,
        });
    }

    for lane in 0..config.fryer_lanes {
        let mut button = SceneNode::button(
            FRYER_ORIGIN.0 + lane as i32 * FRYER_LANE_SPACING,
            FRYER_ORIGIN.1,
            FRYER_LANE_SIZE.0,
            FRYER_LANE_SIZE.1,
            bus,
        );
        button.set_action(Box::new(move |ctx| {
            ctx.session.interact_fryer(lane, ctx.now);
        }));
        overlays.push(SlotOverlay {
            child: background.add_child(button),
            station: StationKind::Fryer,
            slot: lane,
            shown: None,
        });
    }

    let mut trash = SceneNode::button(60, 440, 140, 180, bus);
    trash.set_image(assets::load(gfx, assets::TRASH)?, gfx);
    trash.set_action(Box::new(|ctx| {
        ctx.session.discard();
    }));
    background.add_child(trash);

    let art = art.clone();
    background.set_update(Box::new(move |node, ctx| {
        ctx.session.kitchen.update(ctx.now);

        for overlay in &mut overlays {
            let station = match overlay.station {
                StationKind::Grill => &ctx.session.kitchen.grill,
                StationKind::Fryer => &ctx.session.kitchen.fryer,
            };
            let Some(slot) = station.slot(overlay.slot) else {
                continue;
            };
            let (state, recipe) = (slot.state(), slot.recipe());
            if overlay.shown == Some(state) {
                continue;
            }
            let Some(button) = node.child_mut(overlay.child) else {
                continue;
            };
            let image = match state {
                CookState::Empty => None,
                CookState::Raw => art.get(recipe.raw),
                CookState::Cooked => art.get(recipe.cooked),
            };
            match image {
                Some(image) => button.set_image(image, ctx.gfx),
                None => button.clear_image(),
            }
            overlay.shown = Some(state);
        }
    }));

    node.add_child(background);
    Ok(node)
}
