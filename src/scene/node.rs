//! The retained scene tree
//!
//! A [`SceneNode`] is a positioned rectangle that may carry an image, an
//! animation, a text label and a button capability, plus an ordered list of
//! owned children. The tree is built once at startup and afterwards only
//! toggled through visibility; nodes are never detached.
//!
//! Positions are absolute. Attaching a child offsets it by the parent's
//! position, and moving a node moves its whole subtree by the same delta.
//!
//! Visibility cascades: `set_visible` applies to every descendant. A
//! composite that needs some children to differ from the cascade (rotating
//! views, sub-screens) calls `set_visible` first and then re-asserts the
//! state of those children itself.

use std::cell::RefCell;
use std::rc::Rc;

use super::animation::AnimatedSprite;
use super::button::Button;
use super::canvas::{Canvas, Graphics};
use super::text::TextLabel;
use super::types::{ImageHandle, Millis, Position, Rect, Size};
use crate::simulation::GameSession;

/// Top-level screens the game switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    MainMenu,
    Gameplay,
    Win,
}

/// Deferred side effects requested by hooks and button actions
///
/// They are applied after the render pass, so a transition shows up on the
/// next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    ShowScreen(ScreenId),
    TurnLeft,
    TurnRight,
    OpenFreezer,
    CloseFreezer,
    /// Reset and start the session, then show gameplay
    StartShift,
    /// Reset the session and go back to the main menu
    ReturnToMenu,
}

/// What `hidden` suppresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HiddenMode {
    /// Hidden nodes (and their subtrees) still run update hooks but draw nothing
    #[default]
    KeepUpdating,
    /// Hidden nodes are skipped entirely, like invisible ones
    Suspend,
}

/// Everything hooks and actions can reach during one tick
pub struct FrameContext<'a> {
    pub now: Millis,
    pub pointer: Position,
    pub session: &'a mut GameSession,
    pub commands: &'a mut Vec<SceneCommand>,
    pub gfx: &'a mut dyn Graphics,
    pub hidden_mode: HiddenMode,
}

impl FrameContext<'_> {
    pub fn issue(&mut self, command: SceneCommand) {
        self.commands.push(command);
    }
}

/// Per-frame hook; receives the node it is attached to
pub type UpdateFn = Box<dyn FnMut(&mut SceneNode, &mut FrameContext<'_>)>;

pub struct SceneNode {
    position: Position,
    size: Size,
    /// Image as loaded, before scaling to the node size
    image_source: Option<ImageHandle>,
    image: Option<ImageHandle>,
    animation: Option<AnimatedSprite>,
    text: Option<TextLabel>,
    children: Vec<SceneNode>,
    visible: bool,
    hidden: bool,
    update: Option<UpdateFn>,
    pub(super) button: Option<Rc<RefCell<Button>>>,
}

impl SceneNode {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            position: Position::new(x, y),
            size: Size::new(w, h),
            image_source: None,
            image: None,
            animation: None,
            text: None,
            children: Vec::new(),
            visible: true,
            hidden: false,
            update: None,
            button: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn image(&self) -> Option<ImageHandle> {
        self.image
    }

    pub fn text(&self) -> Option<&TextLabel> {
        self.text.as_ref()
    }

    pub fn text_mut(&mut self) -> Option<&mut TextLabel> {
        self.text.as_mut()
    }

    pub fn animation(&self) -> Option<&AnimatedSprite> {
        self.animation.as_ref()
    }

    pub fn animation_mut(&mut self) -> Option<&mut AnimatedSprite> {
        self.animation.as_mut()
    }

    /// Set the image, scaled to this node's size
    pub fn set_image(&mut self, image: ImageHandle, gfx: &mut dyn Graphics) {
        self.image_source = Some(image);
        self.image = Some(gfx.scale_image(image, self.size));
    }

    pub fn clear_image(&mut self) {
        self.image_source = None;
        self.image = None;
    }

    pub fn set_animation(&mut self, animation: AnimatedSprite) {
        self.animation = Some(animation);
    }

    pub fn set_text(&mut self, text: TextLabel) {
        self.text = Some(text);
    }

    pub fn clear_text(&mut self) {
        self.text = None;
    }

    pub fn set_update(&mut self, hook: UpdateFn) {
        self.update = Some(hook);
    }

    /// Suppress drawing without stopping the node
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Set visibility on this node and every descendant
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.sync_button();
        for child in &mut self.children {
            child.set_visible(visible);
        }
    }

    /// Move to an absolute position, carrying the subtree along
    pub fn set_coord(&mut self, x: i32, y: i32) {
        let dx = x - self.position.x;
        let dy = y - self.position.y;
        self.position = Position::new(x, y);
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
        self.sync_button();
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.set_coord(self.position.x + dx, self.position.y + dy);
    }

    /// Resize, rescaling image and animation frames from their sources
    pub fn set_scale(&mut self, w: u32, h: u32, gfx: &mut dyn Graphics) {
        self.size = Size::new(w, h);
        if let Some(source) = self.image_source {
            self.image = Some(gfx.scale_image(source, self.size));
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.set_scale(self.size, gfx);
        }
        self.sync_button();
    }

    /// Attach a child given in parent-relative coordinates; returns its index
    pub fn add_child(&mut self, mut child: SceneNode) -> usize {
        child.move_by(self.position.x, self.position.y);
        self.children.push(child);
        self.children.len() - 1
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&SceneNode> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut SceneNode> {
        self.children.get_mut(index)
    }

    /// Follow a path of child indices
    pub fn descendant(&self, path: &[usize]) -> Option<&SceneNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut SceneNode> {
        let mut node = self;
        for &index in path {
            node = node.children.get_mut(index)?;
        }
        Some(node)
    }

    fn sync_button(&self) {
        if let Some(button) = &self.button {
            let mut button = button.borrow_mut();
            button.rect = self.rect();
            button.visible = self.visible;
        }
    }

    /// Update and draw this subtree
    ///
    /// Invisible nodes are skipped entirely. Hidden nodes run their hook but
    /// neither they nor their descendants draw, unless the context's
    /// [`HiddenMode`] says to skip them too.
    pub fn render(&mut self, ctx: &mut FrameContext<'_>, canvas: &mut dyn Canvas) {
        self.render_subtree(ctx, canvas, true);
    }

    fn render_subtree(&mut self, ctx: &mut FrameContext<'_>, canvas: &mut dyn Canvas, draw: bool) {
        if let Some(button) = &self.button {
            button.borrow_mut().update_hover(ctx.pointer);
        }

        if !self.visible {
            return;
        }
        if self.hidden && ctx.hidden_mode == HiddenMode::Suspend {
            return;
        }

        if let Some(mut hook) = self.update.take() {
            hook(self, ctx);
            if self.update.is_none() {
                self.update = Some(hook);
            }
            if !self.visible {
                return;
            }
        }

        let draw = draw && !self.hidden;
        if draw {
            self.draw_content(ctx.now, canvas);
        }

        for child in &mut self.children {
            child.render_subtree(ctx, canvas, draw);
        }
    }

    /// Image, then animation frame, then text. An animation replaces the image.
    fn draw_content(&mut self, now: Millis, canvas: &mut dyn Canvas) {
        if let Some(animation) = self.animation.as_mut() {
            canvas.blit(animation.current_frame(now), self.position);
        } else if let Some(image) = self.image {
            canvas.blit(image, self.position);
        }
        if let Some(text) = &self.text {
            canvas.blit(text.rendered(), self.position);
        }
    }

    /// Hit rectangles of buttons in this subtree that currently accept input
    pub fn collect_buttons(&self, out: &mut Vec<Rect>) {
        if !self.visible {
            return;
        }
        if let Some(button) = &self.button {
            out.push(button.borrow().rect);
        }
        for child in &self.children {
            child.collect_buttons(out);
        }
    }
}
