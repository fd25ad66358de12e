//! Event broadcasting
//!
//! Interactive nodes register a handler once at construction. Every polled
//! input event is then fanned out to all handlers, in registration order,
//! before the tree is rendered.

use std::cell::RefCell;
use std::rc::Rc;

use super::node::FrameContext;
use super::types::InputEvent;

/// Receiver of broadcast input events
pub trait EventHandler {
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut FrameContext<'_>);
}

/// Token returned by [`EventBus::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub usize);

/// Shared, single-threaded handle to a registered handler
pub type SharedHandler = Rc<RefCell<dyn EventHandler>>;

#[derive(Default)]
pub struct EventBus {
    handlers: Vec<(HandlerId, SharedHandler)>,
    next_id: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: SharedHandler) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Returns false if the handler was not registered
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver one event to every handler, synchronously
    pub fn broadcast(&self, event: &InputEvent, ctx: &mut FrameContext<'_>) {
        for (_, handler) in &self.handlers {
            handler.borrow_mut().handle_event(event, ctx);
        }
    }
}
