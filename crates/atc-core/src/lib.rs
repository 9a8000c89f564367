//! `atc-core` — foundational types for the `atc` airport simulation.
//!
//! This crate is a dependency of every other `atc-*` crate.  It intentionally
//! has no `atc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `AgentKind`, `AgentId`, `Identity`                      |
//! | [`vec2`]   | `Vec2`, planar distance and heading helpers             |
//! | [`status`] | `PlaneStatus`, `WeatherKind`                            |
//! | [`rng`]    | `AgentRng` (per-agent deterministic RNG)                |
//! | [`range`]  | `Bounds`, `RangeError` (settings validation)            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; required by |
//! |         | `atc-bus` for the wire codec.                              |

pub mod ids;
pub mod range;
pub mod rng;
pub mod status;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AgentId, AgentKind, Identity};
pub use range::{Bounds, RangeError};
pub use rng::AgentRng;
pub use status::{PlaneStatus, WeatherKind};
pub use vec2::Vec2;
