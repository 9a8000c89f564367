//! The immutable message envelope and its routing/addressing rules.

use atc_core::{AgentId, AgentKind, Identity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::payload::Payload;

/// One message on the bus.
///
/// Envelopes are created by the [`broadcast`][Message::broadcast],
/// [`to_kind`][Message::to_kind] and [`direct`][Message::direct] constructors
/// and never mutated afterwards; the constructors enforce by shape the
/// invariant that a receiver id is only ever present together with a receiver
/// kind.
///
/// Wire form (one JSON object per message):
///
/// ```json
/// { "id": "…", "time": "…", "senderId": "7421", "senderType": "plane",
///   "receiverType": "dispatcher", "type": "LandingRequestMessage" }
/// ```
///
/// `receiverType`/`receiverId` are omitted when absent; `type` and `payload`
/// come from the [`Payload`] union.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id:   Uuid,
    time: DateTime<Utc>,
    sender_id:   AgentId,
    sender_type: AgentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receiver_type: Option<AgentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receiver_id: Option<AgentId>,
    #[serde(flatten)]
    body: Payload,
}

impl Message {
    fn new(
        sender: &Identity,
        receiver_type: Option<AgentKind>,
        receiver_id: Option<AgentId>,
        body: Payload,
    ) -> Self {
        Message {
            id: Uuid::new_v4(),
            time: Utc::now(),
            sender_id: sender.id.clone(),
            sender_type: sender.kind,
            receiver_type,
            receiver_id,
            body,
        }
    }

    /// Address every bound consumer on the bus.
    pub fn broadcast(sender: &Identity, body: Payload) -> Self {
        Message::new(sender, None, None, body)
    }

    /// Address every consumer of one agent kind.
    pub fn to_kind(sender: &Identity, kind: AgentKind, body: Payload) -> Self {
        Message::new(sender, Some(kind), None, body)
    }

    /// Address exactly one consumer.
    pub fn direct(sender: &Identity, receiver: &Identity, body: Payload) -> Self {
        Message::new(sender, Some(receiver.kind), Some(receiver.id.clone()), body)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    #[inline]
    pub fn sender_id(&self) -> &AgentId {
        &self.sender_id
    }

    #[inline]
    pub fn sender_type(&self) -> AgentKind {
        self.sender_type
    }

    #[inline]
    pub fn receiver_type(&self) -> Option<AgentKind> {
        self.receiver_type
    }

    #[inline]
    pub fn receiver_id(&self) -> Option<&AgentId> {
        self.receiver_id.as_ref()
    }

    #[inline]
    pub fn body(&self) -> &Payload {
        &self.body
    }

    // ── Routing and addressing ────────────────────────────────────────────────

    /// The routing key a broker would publish this message under:
    /// `""` broadcast-all, `kind` broadcast-to-kind, `kind.id` direct.
    pub fn routing_key(&self) -> String {
        match (self.receiver_type, &self.receiver_id) {
            (None, _)            => String::new(),
            (Some(kind), None)   => kind.as_str().to_owned(),
            (Some(kind), Some(id)) => format!("{kind}.{id}"),
        }
    }

    /// `true` when `identity` sent this message.
    pub fn is_from(&self, identity: &Identity) -> bool {
        self.sender_type == identity.kind && self.sender_id == identity.id
    }

    /// `true` when this message may be handed to `identity`: the receiver
    /// kind and id each either match or are absent (broadcast).
    pub fn is_addressed_to(&self, identity: &Identity) -> bool {
        let kind_ok = self.receiver_type.is_none_or(|k| k == identity.kind);
        let id_ok = self.receiver_id.as_ref().is_none_or(|id| *id == identity.id);
        kind_ok && id_ok
    }

    // ── Wire codec ────────────────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Message, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
