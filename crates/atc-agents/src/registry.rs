//! Dispatcher-side bookkeeping of known aircraft.

use std::collections::HashMap;

use atc_core::{AgentId, PlaneStatus, Vec2};

/// Last reported position and status of one aircraft.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneFix {
    pub position: Vec2,
    pub status:   PlaneStatus,
}

/// Which bucket the registry keeps an aircraft in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Waiting,
    Route(usize),
}

/// Every aircraft the dispatcher has heard from, either waiting for a
/// landing slot or assigned to a route.
///
/// An id lives in at most one bucket at any time: [`record`](Self::record)
/// inserts unknown aircraft into the waiting bucket, [`assign`](Self::assign)
/// moves one to a route bucket, a terminal status removes it entirely.
#[derive(Debug)]
pub struct PlaneRegistry {
    waiting: HashMap<AgentId, PlaneFix>,
    routes:  Vec<HashMap<AgentId, PlaneFix>>,
}

impl PlaneRegistry {
    pub fn new(route_count: usize) -> Self {
        PlaneRegistry { waiting: HashMap::new(), routes: vec![HashMap::new(); route_count] }
    }

    /// Apply one status report.  Terminal aircraft leave the registry,
    /// unknown live aircraft enter the waiting bucket, known aircraft are
    /// updated in whatever bucket they occupy.
    pub fn record(&mut self, id: &AgentId, fix: PlaneFix) {
        if fix.status.is_terminal() {
            self.remove(id);
        } else if !self.update(id, fix) {
            self.waiting.insert(id.clone(), fix);
        }
    }

    /// Move a waiting aircraft to a route bucket; no-op for aircraft that
    /// are not currently waiting.
    pub fn assign(&mut self, id: &AgentId, route: usize) {
        if let Some(fix) = self.waiting.remove(id) {
            self.routes[route].insert(id.clone(), fix);
        }
    }

    /// The aircraft's fix if it is still waiting for a slot.
    pub fn waiting_fix(&self, id: &AgentId) -> Option<PlaneFix> {
        self.waiting.get(id).copied()
    }

    /// Where the aircraft currently is, if known.
    pub fn slot(&self, id: &AgentId) -> Option<Slot> {
        if self.waiting.contains_key(id) {
            return Some(Slot::Waiting);
        }
        self.routes.iter().position(|bucket| bucket.contains_key(id)).map(Slot::Route)
    }

    pub fn assigned_count(&self, route: usize) -> usize {
        self.routes[route].len()
    }

    /// Fixes of all aircraft assigned to `route`, in no particular order.
    pub fn assigned(&self, route: usize) -> impl Iterator<Item = &PlaneFix> {
        self.routes[route].values()
    }

    fn remove(&mut self, id: &AgentId) {
        if self.waiting.remove(id).is_some() {
            return;
        }
        for bucket in &mut self.routes {
            if bucket.remove(id).is_some() {
                return;
            }
        }
    }

    /// Overwrite the stored fix wherever the id lives.  False if unknown.
    fn update(&mut self, id: &AgentId, fix: PlaneFix) -> bool {
        if let Some(stored) = self.waiting.get_mut(id) {
            *stored = fix;
            return true;
        }
        for bucket in &mut self.routes {
            if let Some(stored) = bucket.get_mut(id) {
                *stored = fix;
                return true;
            }
        }
        false
    }
}
