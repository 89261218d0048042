//! Move intents buffered between input polling and the simulation.

use log::warn;

use crate::board::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Move(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub handled: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            handled: false,
        }
    }
}

/// Append-only batch of events with a fixed capacity. Draining applies each
/// pending event once in enqueue order and then starts a new batch.
#[derive(Debug)]
pub struct EventQueue {
    events: Vec<Event>,
    capacity: usize,
}

impl EventQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Queue an event. Returns false (and drops it) when the batch is full.
    pub fn push(&mut self, kind: EventKind) -> bool {
        if self.events.len() >= self.capacity {
            warn!("event queue full ({}), dropping {kind:?}", self.capacity);
            return false;
        }
        self.events.push(Event::new(kind));
        true
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events not yet applied.
    pub fn pending(&self) -> usize {
        self.events.iter().filter(|e| !e.handled).count()
    }

    /// Feed every unhandled event to `apply` in FIFO order, mark it handled,
    /// then clear the batch. Returns how many events were applied.
    pub fn drain(&mut self, mut apply: impl FnMut(&Event)) -> usize {
        let mut applied = 0;
        for event in self.events.iter_mut().filter(|e| !e.handled) {
            apply(event);
            event.handled = true;
            applied += 1;
        }
        self.events.clear();
        applied
    }

    /// Drop everything queued without applying it.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_enqueue_order() {
        let mut q = EventQueue::with_capacity(8);
        q.push(EventKind::Move(Direction::North));
        q.push(EventKind::Move(Direction::East));
        q.push(EventKind::Move(Direction::South));
        let mut seen = Vec::new();
        assert_eq!(q.drain(|e| seen.push(e.kind)), 3);
        assert_eq!(
            seen,
            vec![
                EventKind::Move(Direction::North),
                EventKind::Move(Direction::East),
                EventKind::Move(Direction::South),
            ]
        );
    }

    #[test]
    fn events_are_never_applied_twice() {
        let mut q = EventQueue::with_capacity(8);
        q.push(EventKind::Move(Direction::West));
        let mut count = 0;
        q.drain(|_| count += 1);
        q.drain(|_| count += 1);
        assert_eq!(count, 1);
        assert!(q.is_empty());
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn empty_queue_applies_nothing() {
        let mut q = EventQueue::with_capacity(4);
        assert_eq!(q.drain(|_| panic!("nothing queued")), 0);
    }

    #[test]
    fn full_queue_drops_new_events() {
        let mut q = EventQueue::with_capacity(2);
        assert!(q.push(EventKind::Move(Direction::North)));
        assert!(q.push(EventKind::Move(Direction::North)));
        assert!(!q.push(EventKind::Move(Direction::South)));
        assert_eq!(q.len(), 2);
        q.drain(|_| {});
        assert!(q.push(EventKind::Move(Direction::South)));
    }
}
