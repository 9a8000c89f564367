//! `atc-bus` — the message layer of the `atc` airport simulation.
//!
//! Agents never share memory; everything they know about each other arrives
//! through this crate.  A [`Message`] is an immutable envelope around one of
//! the closed set of [`Payload`] variants, addressed to everyone, to a whole
//! agent kind, or to a single agent.  A [`MessageBus`] delivers envelopes to
//! per-identity queues which consumers drain without blocking.
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`message`] | `Message` envelope, routing keys, JSON wire codec    |
//! | [`payload`] | `Payload` union and the per-variant payload structs  |
//! | [`bus`]     | `MessageBus` trait, `BusError`                       |
//! | [`memory`]  | `InMemoryBus` — in-process broker for demos/tests    |

pub mod bus;
pub mod memory;
pub mod message;
pub mod payload;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bus::{BusError, BusResult, MessageBus};
pub use memory::InMemoryBus;
pub use message::Message;
pub use payload::{LandingResponse, Payload, PositionReport, StatusReport, WeatherReport};
