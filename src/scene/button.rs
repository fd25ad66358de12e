//! Clickable nodes
//!
//! A button is a [`SceneNode`] with a shared [`Button`] capability. The same
//! capability is registered with the [`EventBus`], which is how clicks reach
//! it; the node keeps its rectangle and visibility in sync on every change.

use std::cell::RefCell;
use std::rc::Rc;

use super::events::{EventBus, EventHandler};
use super::node::{FrameContext, SceneNode};
use super::types::{InputEvent, PointerButton, Position, Rect};

/// Invoked on a qualifying press
pub type ActionFn = Box<dyn FnMut(&mut FrameContext<'_>)>;

pub struct Button {
    pub(super) rect: Rect,
    pub(super) visible: bool,
    hovered: bool,
    /// Set on press, cleared on release
    on_hold: bool,
    /// When false, presses while already held are ignored
    allow_hold: bool,
    action: Option<ActionFn>,
}

impl Button {
    fn new(rect: Rect) -> Self {
        Self {
            rect,
            visible: true,
            hovered: false,
            on_hold: false,
            allow_hold: false,
            action: None,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_held(&self) -> bool {
        self.on_hold
    }

    pub(super) fn update_hover(&mut self, pointer: Position) {
        self.hovered = self.rect.contains(pointer);
    }
}

impl EventHandler for Button {
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut FrameContext<'_>) {
        if !self.visible {
            return;
        }

        match *event {
            InputEvent::PointerUp { .. } => {
                self.on_hold = false;
            }
            InputEvent::PointerDown { button, pos } => {
                if !self.allow_hold && self.on_hold {
                    return;
                }
                if button == PointerButton::Left && self.rect.contains(pos) {
                    if let Some(action) = self.action.as_mut() {
                        action(ctx);
                    }
                }
                // Also set for presses outside the rectangle
                self.on_hold = true;
            }
            _ => {}
        }
    }
}

impl SceneNode {
    /// A node with a button capability registered on `bus`
    pub fn button(x: i32, y: i32, w: u32, h: u32, bus: &mut EventBus) -> Self {
        let mut node = SceneNode::new(x, y, w, h);
        let button = Rc::new(RefCell::new(Button::new(node.rect())));
        bus.register(button.clone());
        node.button = Some(button);
        node
    }

    pub fn is_button(&self) -> bool {
        self.button.is_some()
    }

    /// Bind the press action; no effect on plain nodes
    pub fn set_action(&mut self, action: ActionFn) {
        if let Some(button) = &self.button {
            button.borrow_mut().action = Some(action);
        }
    }

    pub fn set_allow_hold(&mut self, allow_hold: bool) {
        if let Some(button) = &self.button {
            button.borrow_mut().allow_hold = allow_hold;
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.button
            .as_ref()
            .is_some_and(|button| button.borrow().is_hovered())
    }

    pub fn is_held(&self) -> bool {
        self.button
            .as_ref()
            .is_some_and(|button| button.borrow().is_held())
    }

    pub fn hit_rect(&self) -> Option<Rect> {
        self.button.as_ref().map(|button| button.borrow().rect())
    }
}
