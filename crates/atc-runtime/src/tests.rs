//! Integration tests for atc-runtime, run over the in-memory bus.

use chrono::{DateTime, Utc};

use atc_bus::{InMemoryBus, LandingResponse, Message, MessageBus, Payload, WeatherReport};
use atc_core::{AgentKind, Identity, WeatherKind};

use crate::{
    Agent, AgentObserver, AgentRunner, AgentState, Control, NoopObserver, Stateless, StepContext,
    TickSettings,
};

fn plane(id: &str) -> Identity {
    Identity::new(AgentKind::Plane, id)
}

fn fast() -> TickSettings {
    TickSettings::new(1.0, 0.0).unwrap()
}

/// State that remembers how often it was stepped and who wrote to it.
#[derive(Clone, Debug)]
struct Trace {
    time:  DateTime<Utc>,
    ticks: u32,
    seen:  Vec<String>,
}

impl Trace {
    fn new() -> Self {
        Trace { time: Utc::now(), ticks: 0, seen: Vec::new() }
    }
}

impl AgentState for Trace {
    fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Records inbox senders and stops once `ctx.step` reaches `last`.
struct Recorder {
    last: u64,
}

impl Agent for Recorder {
    type State = Trace;

    fn step(&mut self, state: Trace, ctx: &mut StepContext<'_>) -> (Control, Trace) {
        let mut next = state;
        next.time = Utc::now();
        next.ticks += 1;
        for message in ctx.inbox {
            next.seen.push(message.sender_id().as_str().to_owned());
        }
        let control = if ctx.step >= self.last { Control::Stop } else { Control::Continue };
        (control, next)
    }
}

/// Emits one marker message per lifecycle stage, all to `sink`.
struct Chatter {
    me:   Identity,
    sink: Identity,
}

impl Chatter {
    fn say(&self, marker: f32, ctx: &mut StepContext<'_>) {
        let body = Payload::LandingResponse(LandingResponse::denied(marker));
        ctx.send(Message::direct(&self.me, &self.sink, body));
    }
}

impl Agent for Chatter {
    type State = Stateless;

    fn initialize(&mut self, state: Stateless, ctx: &mut StepContext<'_>) -> Stateless {
        self.say(1.0, ctx);
        self.say(2.0, ctx);
        state
    }

    fn step(&mut self, state: Stateless, ctx: &mut StepContext<'_>) -> (Control, Stateless) {
        self.say(3.0, ctx);
        (Control::Stop, state.touch())
    }

    fn teardown(&mut self, _state: &Stateless, ctx: &mut StepContext<'_>) {
        self.say(4.0, ctx);
    }
}

#[derive(Default)]
struct CountingObserver {
    started: Option<String>,
    states:  Vec<u64>,
    stopped: Option<u64>,
}

impl AgentObserver<Trace> for CountingObserver {
    fn on_started(&mut self, identity: &Identity, _state: &Trace) {
        self.started = Some(identity.to_string());
    }

    fn on_state(&mut self, step: u64, _state: &Trace) {
        self.states.push(step);
    }

    fn on_stopped(&mut self, step: u64, _state: &Trace) {
        self.stopped = Some(step);
    }
}

mod settings {
    use super::*;

    #[test]
    fn zero_time_step_rejected() {
        let err = TickSettings::new(0.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "time step must be in range (0, 10] but got 0");
    }

    #[test]
    fn time_step_upper_bound_is_inclusive() {
        assert!(TickSettings::new(10.0, 0.0).is_ok());
        assert!(TickSettings::new(10.1, 0.0).is_err());
    }

    #[test]
    fn sleep_time_upper_bound() {
        assert!(TickSettings::new(1.0, 10.0).is_ok());
        assert!(TickSettings::new(1.0, 10.5).is_err());
    }

    #[test]
    fn negative_sleep_means_real_time() {
        let settings = TickSettings::new(0.25, -1.0).unwrap();
        assert_eq!(settings.sleep_time(), 0.25);
    }

    #[test]
    fn seed_is_off_by_default() {
        let settings = fast();
        assert_eq!(settings.seed(), None);
        assert_eq!(settings.with_seed(7).seed(), Some(7));
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn runs_until_the_agent_stops() {
        let runner = AgentRunner::new(plane("p-7"), fast(), Recorder { last: 2 }, InMemoryBus::new());
        let mut observer = CountingObserver::default();

        let last = runner.run(Trace::new(), &mut observer).unwrap();

        assert_eq!(last.ticks, 3);
        assert_eq!(observer.started.as_deref(), Some("plane.p-7"));
        assert_eq!(observer.states, vec![0, 1, 2]);
        assert_eq!(observer.stopped, Some(2));
    }

    #[test]
    fn single_tick_run() {
        let runner = AgentRunner::new(plane("p-1"), fast(), Recorder { last: 0 }, InMemoryBus::new());
        let last = runner.run(Trace::new(), &mut NoopObserver).unwrap();
        assert_eq!(last.ticks, 1);
    }
}

mod filtering {
    use super::*;

    #[test]
    fn inbox_skips_foreign_and_own_messages() {
        let me = plane("p-1");
        let tower = Identity::new(AgentKind::Dispatcher, "tower");
        let world = Identity::new(AgentKind::Environment, "world");

        let root = InMemoryBus::new();
        let mut setup = root.handle();
        setup.connect_as(&me).unwrap();

        let denial = Payload::LandingResponse(LandingResponse::denied(42.0));
        let weather = Payload::WeatherUpdate(WeatherReport {
            weather:              WeatherKind::Rain,
            accident_probability: 0.25e-3,
        });
        setup.publish(Message::direct(&tower, &me, denial)).unwrap();
        // A plane's own kind-wide broadcast lands in its queue as well; the
        // runner has to drop it.
        setup.publish(Message::to_kind(&me, AgentKind::Plane, Payload::LandingRequest)).unwrap();
        setup.publish(Message::broadcast(&world, weather)).unwrap();
        setup.publish(Message::to_kind(&tower, AgentKind::Dispatcher, Payload::SystemExit)).unwrap();

        let runner = AgentRunner::new(me, fast(), Recorder { last: 0 }, root.handle());
        let last = runner.run(Trace::new(), &mut NoopObserver).unwrap();

        assert_eq!(last.seen, vec!["tower".to_owned(), "world".to_owned()]);
    }
}

mod outbox {
    use super::*;

    #[test]
    fn published_in_enqueue_order_across_the_lifecycle() {
        let me = plane("chatter");
        let sink = Identity::new(AgentKind::Dispatcher, "sink");

        let root = InMemoryBus::new();
        let mut receiver = root.handle();
        receiver.connect_as(&sink).unwrap();

        let agent = Chatter { me: me.clone(), sink: sink.clone() };
        let runner = AgentRunner::new(me, fast(), agent, root.handle());
        runner.run(Stateless::new(), &mut NoopObserver).unwrap();

        let markers: Vec<f32> = receiver
            .drain(&sink)
            .unwrap()
            .iter()
            .map(|m| match m.body() {
                Payload::LandingResponse(r) => r.airport_zone_radius,
                other => panic!("unexpected payload {other:?}"),
            })
            .collect();
        assert_eq!(markers, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
