//! Landing-traffic dispatcher.

use tracing::{debug, info};

use atc_bus::{LandingResponse, Message, Payload, StatusReport};
use atc_core::{AgentId, AgentKind, Bounds, Identity, RangeError, Vec2};
use atc_runtime::{Agent, Control, Stateless, StepContext};

use crate::registry::{PlaneFix, PlaneRegistry};

/// One way into the airport: an entry point on the zone boundary paired with
/// the nearer end of the runway.  Built once at startup, never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingRoute {
    pub id:           usize,
    pub enter:        Vec2,
    pub landing_zone: Vec2,
}

/// Dispatcher tuning, validated eagerly.
#[derive(Clone, Debug)]
pub struct DispatcherSettings {
    min_separation:       f32,
    airstrip_length:      f32,
    airport_zone_radius:  f32,
    route_count:          usize,
    max_planes_per_route: usize,
}

impl DispatcherSettings {
    /// Checks every parameter against its range: separation (0, ∞) m,
    /// airstrip length [100, 1000] m, zone radius (airstrip, 1000] m, route
    /// count [1, 10].  The per-route maximum is deliberately unbounded.
    pub fn new(
        min_separation: f32,
        airstrip_length: f32,
        airport_zone_radius: f32,
        route_count: usize,
        max_planes_per_route: usize,
    ) -> Result<Self, RangeError> {
        let min_separation = Bounds::above(0.0).check("minimum separation", min_separation)?;
        let airstrip_length =
            Bounds::closed(100.0, 1000.0).check("airstrip length", airstrip_length)?;
        let airport_zone_radius = Bounds::closed_right(airstrip_length, 1000.0)
            .check("airport zone radius", airport_zone_radius)?;
        let route_count =
            Bounds::closed(1.0, 10.0).check("route count", route_count as f32)? as usize;
        Ok(DispatcherSettings {
            min_separation,
            airstrip_length,
            airport_zone_radius,
            route_count,
            max_planes_per_route,
        })
    }
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        DispatcherSettings {
            min_separation:       200.0,
            airstrip_length:      300.0,
            airport_zone_radius:  1000.0,
            route_count:          3,
            max_planes_per_route: 0,
        }
    }
}

/// Admission control for landing traffic.
///
/// Stateless from the runtime's point of view: the route table and the plane
/// registry are agent-local memory, touched only by this agent's own loop
/// thread, so no locking is involved.
pub struct DispatcherAgent {
    identity:             Identity,
    min_separation:       f32,
    airport_zone_radius:  f32,
    max_planes_per_route: usize,
    routes:               Vec<LandingRoute>,
    registry:             PlaneRegistry,
}

impl DispatcherAgent {
    pub fn new(id: &str, settings: DispatcherSettings) -> Self {
        let zone_a = Vec2::new(-settings.airstrip_length / 2.0, 0.0);
        let zone_b = Vec2::new(settings.airstrip_length / 2.0, 0.0);

        // TODO: `spacing` is a degrees-scale number (360/n) but is used as
        // radians below, so entry points are not evenly spaced around the
        // circle.  Confirm the intended layout before changing it; planes
        // aim at whatever points they are told.
        let spacing = 360.0 / settings.route_count as f32;
        let routes = (0..settings.route_count)
            .map(|i| {
                let theta = spacing * i as f32;
                let enter = Vec2::new(theta.cos(), theta.sin()) * settings.airport_zone_radius;
                let landing_zone = if (enter.x - zone_a.x).abs() < (enter.x - zone_b.x).abs() {
                    zone_a
                } else {
                    zone_b
                };
                LandingRoute { id: i, enter, landing_zone }
            })
            .collect();

        DispatcherAgent {
            identity: Identity::new(AgentKind::Dispatcher, id),
            min_separation: settings.min_separation,
            airport_zone_radius: settings.airport_zone_radius,
            max_planes_per_route: settings.max_planes_per_route,
            routes,
            registry: PlaneRegistry::new(settings.route_count),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn routes(&self) -> &[LandingRoute] {
        &self.routes
    }

    fn on_status_report(&mut self, sender: &AgentId, report: &StatusReport) {
        debug!(plane = %sender, status = %report.status, "status report");
        self.registry.record(sender, PlaneFix { position: report.position, status: report.status });
    }

    /// Rank routes by distance to the requester and grant the first one with
    /// spare capacity and enough separation; otherwise deny.  Requests from
    /// unknown or already-assigned aircraft are ignored, which makes
    /// re-sending a request every tick harmless.
    fn on_landing_request(&mut self, sender: &AgentId, ctx: &mut StepContext<'_>) {
        let Some(fix) = self.registry.waiting_fix(sender) else {
            return;
        };
        let position = fix.position;

        let mut ranked: Vec<&LandingRoute> = self.routes.iter().collect();
        ranked.sort_by(|a, b| {
            position.distance_squared(a.enter).total_cmp(&position.distance_squared(b.enter))
        });

        for route in ranked {
            // Capacity is checked against the count before this assignment,
            // so a route can end up holding max + 1 aircraft.
            if self.registry.assigned_count(route.id) > self.max_planes_per_route {
                continue;
            }
            let nearest = self
                .registry
                .assigned(route.id)
                .map(|other| other.position.distance(position))
                .min_by(f32::total_cmp);
            if nearest.is_none_or(|distance| distance > self.min_separation) {
                info!(plane = %sender, route = route.id, "landing authorized");
                self.registry.assign(sender, route.id);
                let body = Payload::LandingResponse(LandingResponse::accepted(
                    route.enter,
                    route.landing_zone,
                    self.airport_zone_radius,
                ));
                ctx.send(Message::direct(&self.identity, &plane_identity(sender), body));
                return;
            }
        }

        info!(plane = %sender, "landing denied");
        let body = Payload::LandingResponse(LandingResponse::denied(self.airport_zone_radius));
        ctx.send(Message::direct(&self.identity, &plane_identity(sender), body));
    }
}

impl Agent for DispatcherAgent {
    type State = Stateless;

    fn step(&mut self, state: Stateless, ctx: &mut StepContext<'_>) -> (Control, Stateless) {
        let inbox = ctx.inbox;
        for message in inbox {
            match message.body() {
                Payload::StatusReport(report) => self.on_status_report(message.sender_id(), report),
                Payload::LandingRequest => self.on_landing_request(message.sender_id(), ctx),
                Payload::SystemExit => {
                    info!("exit signal received");
                    return (Control::Stop, state);
                }
                _ => {}
            }
        }
        (Control::Continue, state.touch())
    }
}

fn plane_identity(id: &AgentId) -> Identity {
    Identity::new(AgentKind::Plane, id.as_str())
}
