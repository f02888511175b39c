//! Headless playground demo
//!
//! Steps the simulation at a fixed 60 Hz over the classic world, fires a
//! scripted jump partway through, and logs the player trajectory. Pass a
//! path to a world config JSON to run a custom scene:
//!
//! ```text
//! RUST_LOG=info cargo run --bin orbit-demo [world.json]
//! ```

use orbitfall_engine::sim::Simulation;
use orbitfall_engine::world::WorldConfig;

/// Fixed timestep in seconds (60 Hz).
const DT: f32 = 1.0 / 60.0;

/// Total ticks to simulate (10 seconds).
const TICKS: u32 = 600;

/// Tick on which the scripted jump fires.
const JUMP_TICK: u32 = 180;

fn main() -> Result<(), orbitfall_engine::SimError> {
    env_logger::init();

    let world = match std::env::args().nth(1) {
        Some(path) => WorldConfig::from_file(path)?,
        None => WorldConfig::playground(),
    };
    let mut sim = Simulation::new(world)?;

    for tick in 0..TICKS {
        if tick == JUMP_TICK {
            sim.request_jump();
        }
        sim.step(DT)?;

        if tick % 60 == 0 {
            let p = sim.player().position;
            log::info!(
                "t={:>4.1}s player=({:>7.3}, {:>7.3}, {:>7.3}) jumping={}",
                tick as f32 * DT,
                p.x,
                p.y,
                p.z,
                sim.player().is_jumping()
            );
        }
    }

    let p = sim.player().position;
    log::info!("done: player at ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    Ok(())
}
