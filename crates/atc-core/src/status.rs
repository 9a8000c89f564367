//! Domain enums shared across the bus payloads and the agent crates.

// ── PlaneStatus ───────────────────────────────────────────────────────────────

/// Aircraft flight phase.
///
/// Transitions form a line from `Approaching` to `Landed`, with the hold
/// detour `InQueue → ExitingQueue` and the terminal escape hatch `Crashed`
/// reachable from every non-terminal phase:
///
/// ```text
/// Approaching ─┬─► Entering ─────────┐
///              └─► InQueue ─► ExitingQueue ─► Descending ─► Landing ─► Landed
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaneStatus {
    /// Flying toward the airport zone, not yet authorized to land.
    #[default]
    Approaching,
    /// Authorized; flying toward the assigned route's entry point.
    Entering,
    /// Holding: circling on the airport-zone boundary awaiting authorization.
    InQueue,
    /// Authorized while holding; circling until the entry point is reached.
    ExitingQueue,
    /// On the route, flying from the entry point to the landing zone.
    Descending,
    /// Over the runway, decelerating.
    Landing,
    /// Stopped on the runway.  Terminal.
    Landed,
    /// Lost to collision or weather.  Terminal.
    Crashed,
}

impl PlaneStatus {
    /// `true` for the two states with no outgoing transitions.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, PlaneStatus::Landed | PlaneStatus::Crashed)
    }

    /// Stable integer code used in the per-agent state log.
    pub fn code(self) -> u8 {
        match self {
            PlaneStatus::Approaching  => 0,
            PlaneStatus::Entering     => 1,
            PlaneStatus::InQueue      => 2,
            PlaneStatus::ExitingQueue => 3,
            PlaneStatus::Descending   => 4,
            PlaneStatus::Landing      => 5,
            PlaneStatus::Landed       => 6,
            PlaneStatus::Crashed      => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlaneStatus::Approaching  => "approaching",
            PlaneStatus::Entering     => "entering",
            PlaneStatus::InQueue      => "in-queue",
            PlaneStatus::ExitingQueue => "exiting-queue",
            PlaneStatus::Descending   => "descending",
            PlaneStatus::Landing      => "landing",
            PlaneStatus::Landed       => "landed",
            PlaneStatus::Crashed      => "crashed",
        }
    }
}

impl std::fmt::Display for PlaneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WeatherKind ───────────────────────────────────────────────────────────────

/// Weather severity level, ordered from calmest to harshest.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherKind {
    #[default]
    Clear,
    Clouds,
    Rain,
    Fog,
    Storm,
}

impl WeatherKind {
    /// One level harsher, saturating at `Storm`.
    pub fn raised(self) -> WeatherKind {
        match self {
            WeatherKind::Clear  => WeatherKind::Clouds,
            WeatherKind::Clouds => WeatherKind::Rain,
            WeatherKind::Rain   => WeatherKind::Fog,
            WeatherKind::Fog    => WeatherKind::Storm,
            WeatherKind::Storm  => WeatherKind::Storm,
        }
    }

    /// One level calmer, saturating at `Clear`.
    pub fn lowered(self) -> WeatherKind {
        match self {
            WeatherKind::Clear  => WeatherKind::Clear,
            WeatherKind::Clouds => WeatherKind::Clear,
            WeatherKind::Rain   => WeatherKind::Clouds,
            WeatherKind::Fog    => WeatherKind::Rain,
            WeatherKind::Storm  => WeatherKind::Fog,
        }
    }

    /// Per-tick accident probability advertised to aircraft at this level.
    ///
    /// The table is not monotone in severity: fog carries no accident risk.
    pub fn accident_probability(self) -> f32 {
        match self {
            WeatherKind::Clear  => 0.00010,
            WeatherKind::Clouds => 0.00012,
            WeatherKind::Rain   => 0.00025,
            WeatherKind::Fog    => 0.0,
            WeatherKind::Storm  => 0.00035,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeatherKind::Clear  => "clear",
            WeatherKind::Clouds => "clouds",
            WeatherKind::Rain   => "rain",
            WeatherKind::Fog    => "fog",
            WeatherKind::Storm  => "storm",
        }
    }
}

impl std::fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
