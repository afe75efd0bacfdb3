use uuid::Uuid;

use flora_core::SessionId;

use crate::{Event, EventEnvelope};

/// In-memory, append-only event history for one session.
///
/// Nothing is persisted; the log lives exactly as long as the session does.
#[derive(Debug, Clone)]
pub struct EventLog<E> {
    session_id: SessionId,
    entries: Vec<EventEnvelope<E>>,
}

impl<E: Event> EventLog<E> {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            entries: Vec::new(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Sequence number of the last recorded event (0 when empty).
    pub fn current_sequence(&self) -> u64 {
        self.entries.last().map(|e| e.sequence_number()).unwrap_or(0)
    }

    /// Append events in order, assigning consecutive sequence numbers.
    ///
    /// Returns the envelopes that were recorded by this call.
    pub fn append(&mut self, events: impl IntoIterator<Item = E>) -> &[EventEnvelope<E>] {
        let start = self.entries.len();
        let mut next = self.current_sequence() + 1;
        for payload in events {
            tracing::trace!(
                session_id = %self.session_id,
                sequence_number = next,
                event_type = payload.event_type(),
                "event recorded"
            );
            self.entries.push(EventEnvelope::new(
                Uuid::now_v7(),
                self.session_id,
                next,
                payload,
            ));
            next += 1;
        }
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[EventEnvelope<E>] {
        &self.entries
    }

    /// Payloads in recording order, ready to be replayed onto an empty aggregate.
    pub fn payloads(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(EventEnvelope::payload)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
