//! Agent identity: a closed kind enum plus a free-form id string.
//!
//! The pair `(kind, id)` is the unit of addressing on the bus.  Its canonical
//! text form `kind.id` doubles as the consumer queue name and the routing key
//! for direct messages, so `Display` on [`Identity`] is load-bearing, not just
//! a debug nicety.

use std::fmt;

// ── AgentKind ─────────────────────────────────────────────────────────────────

/// The closed set of agent types that can appear on the bus.
///
/// `System` is reserved for the out-of-band host identity that broadcasts the
/// exit signal; no agent loop runs under it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentKind {
    Plane,
    Dispatcher,
    Environment,
    System,
}

impl AgentKind {
    /// Wire/queue-name label, also the broadcast-to-kind routing key.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Plane       => "plane",
            AgentKind::Dispatcher  => "dispatcher",
            AgentKind::Environment => "environment",
            AgentKind::System      => "system",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AgentId ───────────────────────────────────────────────────────────────────

/// Free-form agent identifier, unique within a kind ("dispatcher", "7421", …).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        AgentId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        AgentId(s.to_owned())
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        AgentId(s)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Identity ──────────────────────────────────────────────────────────────────

/// A fully qualified bus address: which kind of agent, and which instance.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity {
    pub kind: AgentKind,
    pub id:   AgentId,
}

impl Identity {
    pub fn new(kind: AgentKind, id: impl Into<AgentId>) -> Self {
        Identity { kind, id: id.into() }
    }

    /// The reserved host identity used as the sender of exit broadcasts.
    pub fn system() -> Self {
        Identity::new(AgentKind::System, "system")
    }
}

impl fmt::Display for Identity {
    /// Canonical `kind.id` form — the consumer queue name on the bus.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.id)
    }
}
