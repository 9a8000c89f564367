//! Aircraft agent: approach, hold, descend, land or crash.

use std::f32::consts::PI;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use atc_bus::{LandingResponse, Message, Payload, PositionReport, StatusReport};
use atc_core::{AgentKind, AgentRng, Bounds, Identity, PlaneStatus, RangeError, Vec2};
use atc_runtime::{Agent, AgentState, Control, StepContext};

/// Zone radius an aircraft assumes until the dispatcher advertises the real
/// one in a landing denial.
const ASSUMED_ZONE_RADIUS: f32 = 1500.0;

/// Aircraft tuning, validated eagerly.
#[derive(Clone, Debug)]
pub struct PlaneSettings {
    crash_probability:  f32,
    random_crash_error: f32,
    deceleration:       f32,
}

impl PlaneSettings {
    /// Checks every parameter against its range: crash probability [0, 1],
    /// random crash error [0, 0.2], braking deceleration [1, 20] m/s².
    pub fn new(
        crash_probability: f32,
        random_crash_error: f32,
        deceleration: f32,
    ) -> Result<Self, RangeError> {
        let crash_probability = Bounds::closed(0.0, 1.0).check("crash probability", crash_probability)?;
        let random_crash_error =
            Bounds::closed(0.0, 0.2).check("random crash error", random_crash_error)?;
        let deceleration = Bounds::closed(1.0, 20.0).check("deceleration", deceleration)?;
        Ok(PlaneSettings { crash_probability, random_crash_error, deceleration })
    }
}

impl Default for PlaneSettings {
    fn default() -> Self {
        PlaneSettings { crash_probability: 0.5, random_crash_error: 0.1, deceleration: 10.0 }
    }
}

/// Kinematic state of one aircraft.
///
/// `angle` is the heading in radians.  While the aircraft holds in the
/// queue, the heading doubles as the polar angle of its position on the
/// holding circle.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneState {
    time:         DateTime<Utc>,
    pub position: Vec2,
    pub speed:    f32,
    pub angle:    f32,
    pub status:   PlaneStatus,
}

impl PlaneState {
    pub fn new(position: Vec2, speed: f32) -> Self {
        PlaneState {
            time: Utc::now(),
            position,
            speed,
            angle: 0.0,
            status: PlaneStatus::Approaching,
        }
    }
}

impl AgentState for PlaneState {
    fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }

    fn log_headers() -> &'static [&'static str] {
        &["posX", "posY", "speed", "angle", "statusCode"]
    }

    fn log_record(&self) -> Vec<String> {
        vec![
            format!("{:.1}", self.position.x),
            format!("{:.1}", self.position.y),
            format!("{:.1}", self.speed),
            format!("{:.3}", self.angle),
            self.status.code().to_string(),
        ]
    }
}

/// Entry point and runway end granted by the dispatcher.
#[derive(Clone, Copy, Debug)]
struct Clearance {
    enter:        Vec2,
    landing_zone: Vec2,
}

/// An aircraft on approach.
///
/// Flies straight toward the origin until the dispatcher assigns it a route
/// or turns it into the holding circle; collisions and weather accidents can
/// end the flight at any point before touchdown.
pub struct PlaneAgent {
    identity:            Identity,
    crash_probability:   f32,
    random_crash_error:  f32,
    deceleration:        f32,
    airport_zone_radius: f32,
    clearance:           Option<Clearance>,
}

impl PlaneAgent {
    pub fn new(id: &str, settings: PlaneSettings) -> Self {
        PlaneAgent {
            identity:            Identity::new(AgentKind::Plane, id),
            crash_probability:   settings.crash_probability,
            random_crash_error:  settings.random_crash_error,
            deceleration:        settings.deceleration,
            airport_zone_radius: ASSUMED_ZONE_RADIUS,
            clearance:           None,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Collision test against another aircraft's reported position.
    ///
    /// The base probability is the mean of both aircraft's thresholds; a
    /// report without one counts as flying with ours.  The distance decay
    /// makes a hit certain at zero distance.
    fn collides_with(&self, state: &PlaneState, report: &PositionReport, rng: &mut AgentRng) -> bool {
        let peer = report.crash_probability.unwrap_or(self.crash_probability);
        let threshold = (self.crash_probability + peer) / 2.0;
        let d2 = state.position.distance_squared(report.position);
        let noise = rng.random::<f32>() * self.random_crash_error;
        1.0 / (d2 / 500.0 + 1.0) + noise >= threshold
    }

    fn on_landing_response(&mut self, state: &mut PlaneState, response: &LandingResponse) {
        if !response.is_accepted() {
            debug!(radius = response.airport_zone_radius, "landing denied");
            self.airport_zone_radius = response.airport_zone_radius;
            return;
        }
        let (Some(enter), Some(landing_zone)) = (response.enter, response.landing_zone) else {
            return;
        };
        self.clearance = Some(Clearance { enter, landing_zone });
        info!(enter = %enter, landing_zone = %landing_zone, "landing authorized");

        match state.status {
            PlaneStatus::Approaching => {
                state.angle = state.position.angle_to(enter);
                state.status = PlaneStatus::Entering;
            }
            PlaneStatus::InQueue => state.status = PlaneStatus::ExitingQueue,
            _ => {}
        }
    }

    /// One motion update: along the holding circle while queued, otherwise
    /// straight along the heading.
    fn advance(&self, state: &mut PlaneState, time_step: f32) {
        if matches!(state.status, PlaneStatus::InQueue | PlaneStatus::ExitingQueue) {
            state.angle += state.speed / self.airport_zone_radius * time_step;
            state.position = Vec2::from_angle(state.angle) * self.airport_zone_radius;
        } else {
            state.position =
                state.position + Vec2::from_angle(state.angle) * (state.speed * time_step);
        }
    }

    /// Status transitions triggered by where the aircraft now is, at most one
    /// per tick.  `dr`, the distance covered this tick, doubles as the
    /// arrival tolerance.
    fn apply_boundaries(&self, state: &mut PlaneState, time_step: f32) {
        let dr = state.speed * time_step;
        match state.status {
            PlaneStatus::Approaching
                if state.position.in_range(Vec2::ZERO, self.airport_zone_radius + dr / 2.0) =>
            {
                state.status = PlaneStatus::InQueue;
                state.angle += PI;
                info!("holding: reached the zone without clearance");
            }
            PlaneStatus::Entering | PlaneStatus::ExitingQueue => {
                if let Some(Clearance { enter, landing_zone }) = self.clearance {
                    if state.position.in_range(enter, dr) {
                        state.status = PlaneStatus::Descending;
                        state.angle = state.position.angle_to(landing_zone);
                        info!("descending: entry point reached");
                    }
                }
            }
            PlaneStatus::Descending => {
                if let Some(Clearance { landing_zone, .. }) = self.clearance {
                    if state.position.in_range(landing_zone, dr) {
                        state.status = PlaneStatus::Landing;
                        state.angle = state.position.angle_to_origin();
                        info!("landing: over the strip");
                    }
                }
            }
            PlaneStatus::Landing => {
                // Braking is per tick, not per simulated second.
                state.speed -= self.deceleration;
                if state.speed <= 0.0 {
                    state.status = PlaneStatus::Landed;
                    info!("landed");
                }
            }
            _ => {}
        }
    }

    fn status_report(&self, state: &PlaneState) -> Message {
        Message::to_kind(
            &self.identity,
            AgentKind::Dispatcher,
            Payload::StatusReport(StatusReport {
                position: state.position,
                speed:    state.speed,
                angle:    state.angle,
                status:   state.status,
            }),
        )
    }

    /// Final transition: mark the state, report it, stop the loop.
    fn crash(&self, state: &mut PlaneState, ctx: &mut StepContext<'_>) -> Control {
        state.status = PlaneStatus::Crashed;
        state.time = Utc::now();
        ctx.send(self.status_report(state));
        Control::Stop
    }
}

impl Agent for PlaneAgent {
    type State = PlaneState;

    /// Starts the approach: heading toward the origin, then one status
    /// report for the dispatcher and one position announcement for the other
    /// aircraft.
    fn initialize(&mut self, state: PlaneState, ctx: &mut StepContext<'_>) -> PlaneState {
        let mut state = state;
        state.status = PlaneStatus::Approaching;
        state.angle = state.position.angle_to_origin();
        state.time = Utc::now();

        ctx.send(self.status_report(&state));
        ctx.send(Message::to_kind(
            &self.identity,
            AgentKind::Plane,
            Payload::PositionReport(PositionReport {
                position:          state.position,
                crash_probability: Some(self.crash_probability),
            }),
        ));
        info!(position = %state.position, speed = state.speed, "approach started");
        state
    }

    fn step(&mut self, state: PlaneState, ctx: &mut StepContext<'_>) -> (Control, PlaneState) {
        let mut next = state;
        let prev_status = next.status;

        let inbox = ctx.inbox;
        for message in inbox {
            match message.body() {
                Payload::PositionReport(report) => {
                    if self.collides_with(&next, report, ctx.rng) {
                        info!(other = %message.sender_id(), "mid-air collision");
                        let control = self.crash(&mut next, ctx);
                        return (control, next);
                    }
                }
                Payload::LandingResponse(response) => self.on_landing_response(&mut next, response),
                Payload::WeatherUpdate(report) => {
                    if ctx.rng.random::<f32>() < report.accident_probability {
                        info!(weather = %report.weather, "weather accident");
                        let control = self.crash(&mut next, ctx);
                        return (control, next);
                    }
                }
                Payload::SystemExit => {
                    info!("exit signal received");
                    return (Control::Stop, next);
                }
                _ => {}
            }
        }

        self.advance(&mut next, ctx.time_step);
        self.apply_boundaries(&mut next, ctx.time_step);
        next.time = Utc::now();

        if next.status != prev_status {
            ctx.send(self.status_report(&next));
        }
        if matches!(next.status, PlaneStatus::Approaching | PlaneStatus::InQueue) {
            ctx.send(Message::to_kind(&self.identity, AgentKind::Dispatcher, Payload::LandingRequest));
        }

        let control =
            if next.status == PlaneStatus::Landed { Control::Stop } else { Control::Continue };
        (control, next)
    }
}
