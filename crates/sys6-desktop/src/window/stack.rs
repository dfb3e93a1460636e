//! Arena of windows plus a separate z-order
//!
//! Window records live in stable arena slots addressed by [`WindowId`].
//! Paint and hit-test order is a separate list of IDs, back-to-front. Opening
//! and closing only touch that list; a slot is freed once its close
//! animation has finished, so an in-flight transition always refers to a
//! live record.

use crate::types::WindowId;

use super::{Window, WindowConfig};

/// Where a window is in its open/close cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Zoom-in playing; stored but not yet in the z-order
    Opening,
    /// In the z-order and interactive
    Open,
    /// Zoom-out playing; still painted, no longer interactive
    Closing,
}

#[derive(Debug)]
struct Slot {
    window: Window,
    lifecycle: Lifecycle,
}

/// Window storage and z-order
#[derive(Debug, Default)]
pub struct WindowStack {
    slots: Vec<Option<Slot>>,
    z_order: Vec<WindowId>,
}

impl WindowStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new window in the `Opening` state and return its ID
    pub fn insert(&mut self, config: &WindowConfig, default_thumb_height: i32) -> WindowId {
        let id = self.slots.len() as WindowId;
        self.slots.push(Some(Slot {
            window: Window::new(id, config, default_thumb_height),
            lifecycle: Lifecycle::Opening,
        }));
        id
    }

    fn slot(&self, id: WindowId) -> Option<&Slot> {
        self.slots.get(id as usize).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: WindowId) -> Option<&mut Slot> {
        self.slots.get_mut(id as usize).and_then(Option::as_mut)
    }

    /// Move an `Opening` window to the top of the z-order
    pub fn attach(&mut self, id: WindowId) -> bool {
        match self.slot_mut(id) {
            Some(slot) if slot.lifecycle == Lifecycle::Opening => {
                slot.lifecycle = Lifecycle::Open;
                self.z_order.push(id);
                true
            }
            _ => false,
        }
    }

    /// Mark an `Open` window as closing; false for any other state
    pub fn begin_close(&mut self, id: WindowId) -> bool {
        match self.slot_mut(id) {
            Some(slot) if slot.lifecycle == Lifecycle::Open => {
                slot.lifecycle = Lifecycle::Closing;
                true
            }
            _ => false,
        }
    }

    /// Drop a window from the z-order and free its slot
    pub fn release(&mut self, id: WindowId) -> Option<Window> {
        self.z_order.retain(|&z| z != id);
        self.slots
            .get_mut(id as usize)
            .and_then(Option::take)
            .map(|slot| slot.window)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.slot(id).map(|slot| &slot.window)
    }

    /// Mutable access, only for windows that are `Open`
    pub(crate) fn get_open_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.slot_mut(id)
            .filter(|slot| slot.lifecycle == Lifecycle::Open)
            .map(|slot| &mut slot.window)
    }

    pub fn lifecycle(&self, id: WindowId) -> Option<Lifecycle> {
        self.slot(id).map(|slot| slot.lifecycle)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.slot(id).is_some()
    }

    /// IDs in the z-order, back-to-front
    pub fn z_order(&self) -> &[WindowId] {
        &self.z_order
    }

    /// Number of windows in the z-order
    pub fn len(&self) -> usize {
        self.z_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z_order.is_empty()
    }

    /// Windows in paint order (back-to-front), including closing ones
    pub fn back_to_front(&self) -> impl Iterator<Item = &Window> {
        self.z_order.iter().filter_map(move |&id| self.get(id))
    }

    /// Interactive windows in hit-test order (front-to-back)
    pub fn front_to_back_open(&self) -> impl Iterator<Item = &Window> {
        self.z_order.iter().rev().filter_map(move |&id| {
            self.slot(id)
                .filter(|slot| slot.lifecycle == Lifecycle::Open)
                .map(|slot| &slot.window)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;

    fn config(title: &str) -> WindowConfig {
        WindowConfig::new(Rect::new(0, 0, 200, 150), title)
    }

    #[test]
    fn test_insert_is_not_in_z_order() {
        let mut stack = WindowStack::new();
        let id = stack.insert(&config("A"), 30);

        assert!(stack.contains(id));
        assert_eq!(stack.lifecycle(id), Some(Lifecycle::Opening));
        assert!(stack.is_empty());
        assert!(stack.get_open_mut(id).is_none());
    }

    #[test]
    fn test_attach_orders_back_to_front() {
        let mut stack = WindowStack::new();
        let a = stack.insert(&config("A"), 30);
        let b = stack.insert(&config("B"), 30);
        // Attach out of creation order; z-order follows attach order
        assert!(stack.attach(b));
        assert!(stack.attach(a));

        assert_eq!(stack.z_order(), &[b, a]);
        let titles: Vec<_> = stack.front_to_back_open().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_attach_twice_is_rejected() {
        let mut stack = WindowStack::new();
        let a = stack.insert(&config("A"), 30);
        assert!(stack.attach(a));
        assert!(!stack.attach(a));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_closing_window_is_painted_but_not_interactive() {
        let mut stack = WindowStack::new();
        let a = stack.insert(&config("A"), 30);
        stack.attach(a);

        assert!(stack.begin_close(a));
        assert!(!stack.begin_close(a));
        assert_eq!(stack.back_to_front().count(), 1);
        assert_eq!(stack.front_to_back_open().count(), 0);
        assert!(stack.get_open_mut(a).is_none());
    }

    #[test]
    fn test_release_frees_slot_and_ids_are_not_reused() {
        let mut stack = WindowStack::new();
        let a = stack.insert(&config("A"), 30);
        stack.attach(a);
        stack.begin_close(a);

        let released = stack.release(a).unwrap();
        assert_eq!(released.title, "A");
        assert!(!stack.contains(a));
        assert!(stack.is_empty());
        assert!(stack.release(a).is_none());

        let b = stack.insert(&config("B"), 30);
        assert_ne!(a, b);
    }

    #[test]
    fn test_unknown_ids_miss() {
        let mut stack = WindowStack::new();
        assert!(stack.get(7).is_none());
        assert!(!stack.attach(7));
        assert!(!stack.begin_close(7));
        assert!(stack.lifecycle(7).is_none());
    }
}
