//! Weather source: a one-variable random walk over five levels.

use chrono::{DateTime, Utc};
use tracing::info;

use atc_bus::{Message, Payload, WeatherReport};
use atc_core::{AgentKind, Bounds, Identity, RangeError, WeatherKind};
use atc_runtime::{Agent, AgentState, Control, StepContext};

/// Environment tuning, validated eagerly.
#[derive(Clone, Debug)]
pub struct EnvironmentSettings {
    change_probability: f32,
}

impl EnvironmentSettings {
    /// `change_probability` is the per-tick chance of a weather move and
    /// must be in [0, 0.1].
    pub fn new(change_probability: f32) -> Result<Self, RangeError> {
        let change_probability =
            Bounds::closed(0.0, 0.1).check("weather change probability", change_probability)?;
        Ok(EnvironmentSettings { change_probability })
    }
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        EnvironmentSettings { change_probability: 0.0 }
    }
}

/// Current weather level.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherState {
    time:        DateTime<Utc>,
    pub weather: WeatherKind,
}

impl WeatherState {
    pub fn new(weather: WeatherKind) -> Self {
        WeatherState { time: Utc::now(), weather }
    }
}

impl Default for WeatherState {
    fn default() -> Self {
        WeatherState::new(WeatherKind::Clear)
    }
}

impl AgentState for WeatherState {
    fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }

    fn log_headers() -> &'static [&'static str] {
        &["weather", "accidentProbability"]
    }

    fn log_record(&self) -> Vec<String> {
        vec![self.weather.as_str().to_owned(), self.weather.accident_probability().to_string()]
    }
}

/// Drives the weather level up or down one step at random and tells every
/// aircraft about actual changes along with the accident probability that
/// comes with the new level.
pub struct EnvironmentAgent {
    identity:           Identity,
    change_probability: f32,
}

impl EnvironmentAgent {
    pub fn new(id: &str, settings: EnvironmentSettings) -> Self {
        EnvironmentAgent {
            identity:           Identity::new(AgentKind::Environment, id),
            change_probability: settings.change_probability,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Agent for EnvironmentAgent {
    type State = WeatherState;

    fn step(&mut self, state: WeatherState, ctx: &mut StepContext<'_>) -> (Control, WeatherState) {
        if ctx.inbox.iter().any(|m| matches!(m.body(), Payload::SystemExit)) {
            info!("exit signal received");
            return (Control::Stop, state);
        }

        let mut next = state;
        next.time = Utc::now();

        if ctx.rng.random::<f32>() < self.change_probability {
            let raise = ctx.rng.random::<f32>() > 0.5;
            let shifted = if raise { next.weather.raised() } else { next.weather.lowered() };
            // A move that saturates at the bound is not a change and stays
            // unannounced.
            if shifted != next.weather {
                next.weather = shifted;
                info!(weather = %shifted, "weather changed");
                ctx.send(Message::to_kind(
                    &self.identity,
                    AgentKind::Plane,
                    Payload::WeatherUpdate(WeatherReport {
                        weather:              shifted,
                        accident_probability: shifted.accident_probability(),
                    }),
                ));
            }
        }

        (Control::Continue, next)
    }
}
