//! airport — approach control demo for the atc agent framework.
//!
//! Eight aircraft spawn on a ring outside the airport zone and negotiate
//! landing slots with a single dispatcher while the weather drifts.  Every
//! agent runs on its own thread and talks only through the shared in-memory
//! bus; per-agent state traces land in `output/airport/`.
//!
//! Run with `RUST_LOG=debug` to watch the conversation tick by tick.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use atc_agents::{
    DispatcherAgent, DispatcherSettings, EnvironmentAgent, EnvironmentSettings, PlaneAgent,
    PlaneSettings, PlaneState, WeatherState,
};
use atc_bus::{InMemoryBus, Message, MessageBus, Payload};
use atc_core::{AgentRng, Identity, Vec2};
use atc_output::CsvStateLog;
use atc_runtime::{AgentRunner, NoopObserver, Stateless, TickSettings};

// ── Constants ─────────────────────────────────────────────────────────────────

const PLANE_COUNT:          usize = 8;
const SEED:                 u64   = 42;
const TIME_STEP_SECS:       f32   = 1.0;   // one simulated second per tick
const SLEEP_SECS:           f32   = 0.01;  // wall-clock pacing between ticks
const CRUISE_SPEED_M_S:     f32   = 100.0;
const SPAWN_MIN_M:          f32   = 2_600.0;
const SPAWN_MAX_M:          f32   = 4_000.0;
const ROUTE_COUNT:          usize = 3;
const MAX_PLANES_PER_ROUTE: usize = 1;
const WEATHER_CHANGE_PROB:  f32   = 0.05;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== airport — approach control demo ===");
    println!("Planes: {PLANE_COUNT}  |  Seed: {SEED}  |  Logs: output/airport/");
    println!();
    info!(planes = PLANE_COUNT, seed = SEED, "airport demo starting");

    let output_dir = Path::new("output/airport");
    std::fs::create_dir_all(output_dir)?;

    // 1. Shared bus; one handle per agent thread plus one for the host.
    let root = InMemoryBus::new();

    // 2. Control tower.
    let tower_settings =
        DispatcherSettings::new(200.0, 300.0, 1_000.0, ROUTE_COUNT, MAX_PLANES_PER_ROUTE)?;
    let tower = DispatcherAgent::new("tower", tower_settings);
    let ticks = TickSettings::new(TIME_STEP_SECS, SLEEP_SECS)?;
    let tower_runner =
        AgentRunner::new(tower.identity().clone(), ticks.with_seed(SEED), tower, root.handle());
    let tower_thread = thread::spawn(move || tower_runner.run(Stateless::new(), &mut NoopObserver));

    // 3. Weather, with its own trace on disk.
    let world = EnvironmentAgent::new("field", EnvironmentSettings::new(WEATHER_CHANGE_PROB)?);
    let world_identity = world.identity().clone();
    let ticks = TickSettings::new(TIME_STEP_SECS, SLEEP_SECS)?.with_seed(SEED + 1);
    let world_runner = AgentRunner::new(world_identity.clone(), ticks, world, root.handle());
    let world_dir = output_dir.to_path_buf();
    let world_thread = thread::spawn(move || -> Result<WeatherState> {
        let mut log = CsvStateLog::create(&world_dir, &world_identity)?;
        let state = world_runner.run(WeatherState::default(), &mut log)?;
        if let Some(err) = log.take_error() {
            eprintln!("output error for {world_identity}: {err}");
        }
        Ok(state)
    });

    // The tower must be listening before the first landing request goes out,
    // or an unanswered plane ends up holding at its assumed zone radius.
    thread::sleep(Duration::from_millis(100));

    // 4. The fleet: random four-digit tail numbers on a spawn ring.
    let mut spawn_rng = AgentRng::seeded(SEED);
    let mut tail_numbers: Vec<u32> = Vec::with_capacity(PLANE_COUNT);
    while tail_numbers.len() < PLANE_COUNT {
        let tail = spawn_rng.gen_range(1_000..10_000u32);
        if !tail_numbers.contains(&tail) {
            tail_numbers.push(tail);
        }
    }

    let t0 = Instant::now();
    let mut planes = Vec::with_capacity(PLANE_COUNT);
    for (i, tail) in tail_numbers.iter().enumerate() {
        let bearing = spawn_rng.gen_range(0.0..std::f32::consts::TAU);
        let range = spawn_rng.gen_range(SPAWN_MIN_M..SPAWN_MAX_M);
        let start = Vec2::from_angle(bearing) * range;

        let agent = PlaneAgent::new(&tail.to_string(), PlaneSettings::default());
        let identity = agent.identity().clone();
        let ticks = TickSettings::new(TIME_STEP_SECS, SLEEP_SECS)?.with_seed(SEED + 2 + i as u64);
        let runner = AgentRunner::new(identity.clone(), ticks, agent, root.handle());

        let dir = output_dir.to_path_buf();
        planes.push(thread::spawn(move || -> Result<PlaneState> {
            let mut log = CsvStateLog::create(&dir, &identity)?;
            let state = runner.run(PlaneState::new(start, CRUISE_SPEED_M_S), &mut log)?;
            if let Some(err) = log.take_error() {
                eprintln!("output error for {identity}: {err}");
            }
            Ok(state)
        }));
    }

    // 5. Wait for every plane to touch down (or go down).
    let mut outcomes = Vec::with_capacity(PLANE_COUNT);
    for handle in planes {
        outcomes.push(handle.join().unwrap()?);
    }
    let elapsed = t0.elapsed();

    // 6. Shut the field down.
    let mut host = root.handle();
    host.connect()?;
    host.publish(Message::broadcast(&Identity::system(), Payload::SystemExit))?;
    tower_thread.join().unwrap()?;
    let weather = world_thread.join().unwrap()?;

    // 7. Outcome table.
    println!("Fleet complete in {:.2} s, final weather: {}", elapsed.as_secs_f64(), weather.weather);
    println!();
    println!("{:<8} {:<14} {:>10} {:>10}", "Plane", "Outcome", "x", "y");
    println!("{}", "-".repeat(44));
    for (tail, state) in tail_numbers.iter().zip(&outcomes) {
        println!(
            "{:<8} {:<14} {:>10.1} {:>10.1}",
            tail,
            state.status.as_str(),
            state.position.x,
            state.position.y,
        );
    }

    Ok(())
}
