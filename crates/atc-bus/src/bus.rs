//! The transport contract every broker binding implements.

use atc_core::Identity;
use thiserror::Error;

use crate::message::Message;

/// A connection to a message broker, owned exclusively by one agent.
///
/// Protocol: `connect`/`connect_as` before any traffic, then any number of
/// `publish`/`drain` calls, then `disconnect`.  Every failure is fatal to the
/// owning agent — callers propagate, they never retry.
pub trait MessageBus: Send {
    /// Bind as an anonymous producer (no consumer queue).  Used by the host
    /// process to publish the exit broadcast.
    fn connect(&mut self) -> BusResult<()>;

    /// Declare `identity`'s consumer queue and bind it to receive
    /// broadcast-all, broadcast-to-kind, and direct `kind.id` traffic.
    /// Must complete before peers can deliver to this identity.
    fn connect_as(&mut self, identity: &Identity) -> BusResult<()>;

    /// Publish one message, routed by its receiver fields.  Delivering to
    /// zero queues is a valid outcome, not an error.
    fn publish(&mut self, message: Message) -> BusResult<()>;

    /// Remove and return everything currently queued for `identity`, oldest
    /// first.  Never blocks; an empty queue yields an empty `Vec`.
    fn drain(&mut self, identity: &Identity) -> BusResult<Vec<Message>>;

    /// Tear down this connection's consumer queue, if any.  Idempotent.
    fn disconnect(&mut self) -> BusResult<()>;
}

/// Transport failures.  All of them abort the owning agent.
#[derive(Debug, Error)]
pub enum BusError {
    /// Another connection panicked while holding the broker lock.
    #[error("broker lock poisoned")]
    Poisoned,

    /// `drain` was called for an identity that never connected.
    #[error("no consumer queue bound for {0}")]
    UnknownConsumer(String),

    /// Wire (de)serialization failed.
    #[error("wire codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Shorthand result type for bus operations.
pub type BusResult<T> = Result<T, BusError>;
