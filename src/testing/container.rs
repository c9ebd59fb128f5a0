use crate::*;
use std::{cell::RefCell, rc::Rc};

/// In-memory scroll container. Clones share state so a test can keep a handle
/// after moving one into an indicator.
#[derive(Debug, Clone, Default)]
pub struct FakeContainer {
    state: Rc<RefCell<FakeState>>,
}

#[derive(Debug, Default)]
struct FakeState {
    geometry: ScrollGeometry,
    next_id: u64,
    live: Vec<Subscription>,
    released: usize,
    reads: usize,
}

impl FakeContainer {
    pub fn new(geometry: ScrollGeometry) -> Self {
        let container = Self::default();
        container.set(geometry);
        container
    }

    pub fn set(&self, geometry: ScrollGeometry) {
        self.state.borrow_mut().geometry = geometry;
    }

    pub fn scroll_to(&self, offset: f64) {
        self.state.borrow_mut().geometry.scroll_offset = offset;
    }

    /// Subscriptions not yet released.
    pub fn live(&self) -> Vec<Subscription> {
        self.state.borrow().live.clone()
    }

    pub fn released(&self) -> usize {
        self.state.borrow().released
    }

    /// Number of geometry reads so far.
    pub fn reads(&self) -> usize {
        self.state.borrow().reads
    }
}

impl ScrollContainer for FakeContainer {
    fn geometry(&self) -> ScrollGeometry {
        let mut state = self.state.borrow_mut();
        state.reads += 1;
        state.geometry
    }

    fn subscribe(&mut self, source: EventSource) -> Subscription {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let subscription = Subscription {
            source,
            id: state.next_id,
        };
        state.live.push(subscription);
        trace!("Subscribed {subscription:?}");
        subscription
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        let mut state = self.state.borrow_mut();
        let before = state.live.len();
        state.live.retain(|s| *s != subscription);
        assert_eq!(state.live.len() + 1, before, "{subscription:?} was not live");
        state.released += 1;
    }
}
