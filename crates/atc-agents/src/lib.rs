//! The three agent kinds of the airport simulation.
//!
//! Aircraft approach the airport, ask the dispatcher for a landing slot and
//! either land, hold in a circular queue, or crash.  The dispatcher assigns
//! landing routes under capacity and separation constraints.  The environment
//! drives a five-level weather process that raises the accident risk for
//! everyone in the air.  All three implement [`Agent`](atc_runtime::Agent)
//! and talk only through the bus.
//!
//! | Module | Contents |
//! |-----------------|--------------------------------------------------------------|
//! | [`plane`]       | [`PlaneAgent`], [`PlaneState`], [`PlaneSettings`]            |
//! | [`dispatcher`]  | [`DispatcherAgent`], [`DispatcherSettings`], [`LandingRoute`]|
//! | [`registry`]    | [`PlaneRegistry`], [`PlaneFix`], [`Slot`]                    |
//! | [`environment`] | [`EnvironmentAgent`], [`WeatherState`], [`EnvironmentSettings`] |

pub mod dispatcher;
pub mod environment;
pub mod plane;
pub mod registry;

pub use dispatcher::{DispatcherAgent, DispatcherSettings, LandingRoute};
pub use environment::{EnvironmentAgent, EnvironmentSettings, WeatherState};
pub use plane::{PlaneAgent, PlaneSettings, PlaneState};
pub use registry::{PlaneFix, PlaneRegistry, Slot};
