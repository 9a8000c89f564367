//! The tick loop that turns an [`Agent`] into a running process.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, info_span};

use atc_bus::{BusResult, Message, MessageBus};
use atc_core::Identity;

use crate::agent::Agent;
use crate::context::StepContext;
use crate::observer::AgentObserver;
use crate::settings::TickSettings;
use crate::error::RunResult;

/// Drives one agent against one bus connection.
///
/// The runner owns the connection for the whole run: it binds the agent's
/// queue, feeds each tick from it and publishes whatever the tick produced.
/// Ticks are paced additively: the full `sleep_time` is slept after each
/// tick regardless of how long the tick took, so a run drifts rather than
/// skips when the host is slow.
pub struct AgentRunner<A, B> {
    identity: Identity,
    settings: TickSettings,
    agent:    A,
    bus:      B,
}

impl<A: Agent, B: MessageBus> AgentRunner<A, B> {
    pub fn new(identity: Identity, settings: TickSettings, agent: A, bus: B) -> Self {
        AgentRunner { identity, settings, agent, bus }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Run the agent to completion and return its final state.
    ///
    /// The sequence per tick is fixed: drain the queue, drop messages not
    /// addressed to this agent and messages it sent itself, step, publish the
    /// outbox in enqueue order, notify the observer, pace.  `initialize` and
    /// `teardown` get the same outbox treatment outside the loop.
    pub fn run<O>(mut self, initial: A::State, observer: &mut O) -> RunResult<A::State>
    where
        O: AgentObserver<A::State>,
    {
        let span = info_span!("agent", kind = %self.identity.kind, id = %self.identity.id);
        let _enter = span.enter();

        let mut rng = self.settings.rng();
        self.bus.connect_as(&self.identity)?;

        let mut outbox: Vec<Message> = Vec::new();
        let mut state = {
            let mut ctx =
                StepContext::new(0, self.settings.time_step(), &[], &mut outbox, &mut rng);
            self.agent.initialize(initial, &mut ctx)
        };
        flush(&mut self.bus, &mut outbox)?;
        observer.on_started(&self.identity, &state);
        info!("agent started");

        let mut step: u64 = 0;
        loop {
            let tick_start = Instant::now();
            outbox.clear();

            let mut inbox = self.bus.drain(&self.identity)?;
            inbox.retain(|m| m.is_addressed_to(&self.identity) && !m.is_from(&self.identity));

            let (control, next) = {
                let mut ctx = StepContext::new(
                    step,
                    self.settings.time_step(),
                    &inbox,
                    &mut outbox,
                    &mut rng,
                );
                self.agent.step(state, &mut ctx)
            };
            state = next;

            flush(&mut self.bus, &mut outbox)?;
            observer.on_state(step, &state);
            debug!(
                step,
                received = inbox.len(),
                tick_ms = tick_start.elapsed().as_millis() as u64,
                "tick done"
            );

            if control.is_stop() {
                break;
            }
            self.pace();
            step += 1;
        }

        {
            let mut ctx =
                StepContext::new(step, self.settings.time_step(), &[], &mut outbox, &mut rng);
            self.agent.teardown(&state, &mut ctx);
        }
        flush(&mut self.bus, &mut outbox)?;
        observer.on_stopped(step, &state);
        self.bus.disconnect()?;
        info!(last_step = step, "agent stopped");

        Ok(state)
    }

    fn pace(&self) {
        let sleep_time = self.settings.sleep_time();
        if sleep_time > 0.0 {
            thread::sleep(Duration::from_secs_f32(sleep_time));
        }
    }
}

fn flush<B: MessageBus>(bus: &mut B, outbox: &mut Vec<Message>) -> BusResult<()> {
    for message in outbox.drain(..) {
        bus.publish(message)?;
    }
    Ok(())
}
