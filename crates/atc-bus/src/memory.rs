//! In-process broker for single-machine runs and tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use atc_core::Identity;

use crate::bus::{BusError, BusResult, MessageBus};
use crate::message::Message;

/// Queues keyed by bound consumer identity.  One per broker, shared by every
/// handle through the `Arc`.
#[derive(Default)]
struct Broker {
    queues: HashMap<Identity, VecDeque<Message>>,
}

impl Broker {
    /// Structural counterpart of topic routing: `""` matches every queue,
    /// `kind` every queue of that kind, `kind.id` exactly one.
    fn deliver(&mut self, message: Message) {
        for (identity, queue) in self.queues.iter_mut() {
            let matches = match (message.receiver_type(), message.receiver_id()) {
                (None, _)             => true,
                (Some(kind), None)    => identity.kind == kind,
                (Some(kind), Some(id)) => identity.kind == kind && identity.id == *id,
            };
            if matches {
                queue.push_back(message.clone());
            }
        }
    }
}

/// A handle onto a shared in-memory broker.
///
/// `InMemoryBus::new()` creates a fresh broker; [`handle`][Self::handle] mints
/// further unbound connections onto the same broker, one per agent thread.
/// Messages are moved between queues as values — no serialization happens on
/// this path (the JSON codec is for real broker bindings and tests).
///
/// A message published while no matching queue is bound is dropped, exactly
/// as a topic exchange drops unroutable publishes.
pub struct InMemoryBus {
    broker: Arc<Mutex<Broker>>,
    bound:  Option<Identity>,
}

impl InMemoryBus {
    /// Create a fresh broker and the first (unbound) handle onto it.
    pub fn new() -> Self {
        InMemoryBus { broker: Arc::new(Mutex::new(Broker::default())), bound: None }
    }

    /// A new unbound connection sharing this broker.
    pub fn handle(&self) -> Self {
        InMemoryBus { broker: Arc::clone(&self.broker), bound: None }
    }
}

impl Default for InMemoryBus {
    fn default() -> Self {
        InMemoryBus::new()
    }
}

impl MessageBus for InMemoryBus {
    fn connect(&mut self) -> BusResult<()> {
        // Producers need no queue; the broker exists from construction.
        Ok(())
    }

    fn connect_as(&mut self, identity: &Identity) -> BusResult<()> {
        let mut broker = self.broker.lock().map_err(|_| BusError::Poisoned)?;
        broker.queues.entry(identity.clone()).or_default();
        self.bound = Some(identity.clone());
        Ok(())
    }

    fn publish(&mut self, message: Message) -> BusResult<()> {
        let mut broker = self.broker.lock().map_err(|_| BusError::Poisoned)?;
        broker.deliver(message);
        Ok(())
    }

    fn drain(&mut self, identity: &Identity) -> BusResult<Vec<Message>> {
        let mut broker = self.broker.lock().map_err(|_| BusError::Poisoned)?;
        let queue = broker
            .queues
            .get_mut(identity)
            .ok_or_else(|| BusError::UnknownConsumer(identity.to_string()))?;
        Ok(queue.drain(..).collect())
    }

    fn disconnect(&mut self) -> BusResult<()> {
        let Some(identity) = self.bound.take() else {
            return Ok(());
        };
        let mut broker = self.broker.lock().map_err(|_| BusError::Poisoned)?;
        broker.queues.remove(&identity);
        Ok(())
    }
}

impl Drop for InMemoryBus {
    fn drop(&mut self) {
        // Best effort; a poisoned broker is already fatal elsewhere.
        let _ = self.disconnect();
    }
}
