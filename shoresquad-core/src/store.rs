//! In-memory event collection.

use std::collections::HashSet;

use crate::error::{ShoreSquadError, ShoreSquadResult};
use crate::event::{Event, EventDraft};

/// Ordered collection of cleanup events, most recently created first.
///
/// Single owner. Id assignment happens inside `insert_front`, so a caller
/// sharing the store across tasks must serialize access to the whole call.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// Replace the contents with `events`, keeping their order.
    pub fn seed(&mut self, events: Vec<Event>) -> ShoreSquadResult<()> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                return Err(ShoreSquadError::DuplicateEventId(event.id));
            }
        }
        self.events = events;
        Ok(())
    }

    /// Insert a new event at the front, assigning `id = count + 1`.
    pub fn insert_front(&mut self, draft: EventDraft) -> &Event {
        let id = self.next_id();
        self.events.insert(0, draft.into_event(id));
        &self.events[0]
    }

    /// Add one participant. Returns false if no event has that id.
    pub fn increment_participants(&mut self, id: u32) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                event.participants += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    // Seeds may carry ids above the current count, so never hand out one
    // that is already taken.
    fn next_id(&self) -> u32 {
        let mut id = self.events.len() as u32 + 1;
        while self.get(id).is_some() {
            id += 1;
        }
        id
    }
}
