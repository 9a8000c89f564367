//! The closed set of message payloads.
//!
//! `Payload` is an adjacently tagged union: on the wire it contributes the
//! `type` discriminator and the `payload` object to the envelope.  The
//! discriminator strings are a fixed protocol surface — consumers dispatch on
//! them, so renaming a variant here is a wire-breaking change.

use atc_core::{PlaneStatus, Vec2, WeatherKind};
use serde::{Deserialize, Serialize};

/// Everything that can travel in a [`Message`][crate::Message].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Payload {
    /// Host-issued shutdown broadcast.  Empty.
    #[serde(rename = "SystemExitMessage")]
    SystemExit,

    /// An aircraft asking the dispatcher for a route.  Empty — the envelope
    /// sender identifies the requester.
    #[serde(rename = "LandingRequestMessage")]
    LandingRequest,

    /// The dispatcher's accept/deny answer to a landing request.
    #[serde(rename = "LandingResponseMessage")]
    LandingResponse(LandingResponse),

    /// An aircraft announcing where it is, for peer collision checks.
    #[serde(rename = "PlanePositionMessage")]
    PositionReport(PositionReport),

    /// The environment broadcasting a weather change.
    #[serde(rename = "WeatherUpdateMessage")]
    WeatherUpdate(WeatherReport),

    /// An aircraft reporting its kinematic state and flight phase.
    #[serde(rename = "PlaneStatusMessage")]
    StatusReport(StatusReport),
}

// ── Per-variant payload structs ───────────────────────────────────────────────

/// Answer to a landing request.  Accepted iff both route points are present;
/// a denial carries only the zone radius the aircraft should hold at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingResponse {
    pub enter:               Option<Vec2>,
    pub landing_zone:        Option<Vec2>,
    pub airport_zone_radius: f32,
}

impl LandingResponse {
    pub fn accepted(enter: Vec2, landing_zone: Vec2, airport_zone_radius: f32) -> Self {
        LandingResponse {
            enter:        Some(enter),
            landing_zone: Some(landing_zone),
            airport_zone_radius,
        }
    }

    pub fn denied(airport_zone_radius: f32) -> Self {
        LandingResponse { enter: None, landing_zone: None, airport_zone_radius }
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.enter.is_some() && self.landing_zone.is_some()
    }
}

/// Position sighting used by peers to evaluate the collision predicate.
/// A missing crash probability means "assume your own".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReport {
    pub position:          Vec2,
    #[serde(default)]
    pub crash_probability: Option<f32>,
}

/// Full kinematic state + flight phase, consumed by the dispatcher's registry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub position: Vec2,
    pub speed:    f32,
    pub angle:    f32,
    pub status:   PlaneStatus,
}

/// A weather level change and the accident risk it implies per tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub weather:              WeatherKind,
    pub accident_probability: f32,
}
