//! 全局点击监听：显式订阅，Drop 时自动退订

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

new_key_type! { pub struct ListenerId; }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub x: u16,
    pub y: u16,
}

type Handler<T> = Box<dyn Fn(ClickEvent) -> Option<T>>;
type Registry<T> = RefCell<SlotMap<ListenerId, Handler<T>>>;

/// Handlers run for every click that reaches the shell, wherever it lands.
///
/// Handlers only produce messages; they must not subscribe or unsubscribe
/// from inside `emit`.
pub struct ClickListeners<T> {
    registry: Rc<Registry<T>>,
}

impl<T> ClickListeners<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(SlotMap::with_key())),
        }
    }

    pub fn subscribe(
        &self,
        handler: impl Fn(ClickEvent) -> Option<T> + 'static,
    ) -> Subscription<T> {
        let id = self.registry.borrow_mut().insert(Box::new(handler));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn emit(&self, event: ClickEvent) -> Vec<T> {
        self.registry
            .borrow()
            .values()
            .filter_map(|handler| handler(event))
            .collect()
    }
}

impl<T> Default for ClickListeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ClickListeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickListeners")
            .field("len", &self.len())
            .finish()
    }
}

/// Keeps a handler registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the handler"]
pub struct Subscription<T> {
    id: ListenerId,
    registry: Weak<Registry<T>>,
}

impl<T> Subscription<T> {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/listener.rs"]
mod tests;
