//! Per-callback view the runner hands to an agent.

use atc_bus::Message;
use atc_core::AgentRng;

/// Everything an agent may touch during one callback.
///
/// Fields are public so an agent can hold `&mut outbox` and `&mut rng` at the
/// same time.  The inbox is already filtered: it contains only messages
/// addressed to this agent and none of the agent's own, in arrival order.
pub struct StepContext<'a> {
    /// Tick counter, starting at 0.  `initialize` sees 0, `teardown` sees the
    /// index of the last tick.
    pub step: u64,
    /// Simulated seconds covered by this tick.
    pub time_step: f32,
    /// Messages consumed by this tick.
    pub inbox: &'a [Message],
    /// Messages to publish once the callback returns, in enqueue order.
    pub outbox: &'a mut Vec<Message>,
    /// This agent's private random stream.
    pub rng: &'a mut AgentRng,
}

impl<'a> StepContext<'a> {
    pub fn new(
        step: u64,
        time_step: f32,
        inbox: &'a [Message],
        outbox: &'a mut Vec<Message>,
        rng: &'a mut AgentRng,
    ) -> Self {
        StepContext { step, time_step, inbox, outbox, rng }
    }

    /// Enqueue a message for publication after this callback.
    pub fn send(&mut self, message: Message) {
        self.outbox.push(message);
    }
}
