//! Moving Platforms headless runner
//!
//! Builds the default level and drives it with the seeded demo input for a
//! fixed number of frames, logging where the actor and camera end up.
//!
//! Usage: `moving-platforms [seed] [frames] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use moving_platforms::Tuning;
    use moving_platforms::consts::TICKS_PER_SECOND;
    use moving_platforms::sim::{DemoDriver, SimEvent, default_level, tick};

    env_logger::init();
    log::info!("Moving Platforms (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let frames: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * u64::from(TICKS_PER_SECOND));

    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let mut world = default_level(tuning);
    let mut driver = DemoDriver::new(seed);
    log::info!("Running {} frames with seed {}", frames, seed);

    let (mut jumps, mut shots, mut stuck) = (0u32, 0u32, 0u32);
    for _ in 0..frames {
        tick(&mut world, &driver.next_input());

        for event in &world.events {
            match event {
                SimEvent::Jumped => jumps += 1,
                SimEvent::ShotFired => shots += 1,
                SimEvent::StuckOverlap { .. } | SimEvent::Crushed { .. } => stuck += 1,
                _ => {}
            }
        }

        if world.time_ticks % u64::from(TICKS_PER_SECOND) == 0 {
            log::info!(
                "t={}s actor={:?} (screen {:?}) riding={:?} viewport={:?}",
                world.time_ticks / u64::from(TICKS_PER_SECOND),
                world.actor.rect.pos,
                world.camera.to_screen(world.actor.rect.pos),
                world.actor.resting_on,
                world.camera.viewport.pos
            );
        }
    }

    log::info!(
        "Done: {} jumps, {} shots, {} collision recoveries, {} projectiles in flight, holding {:?}",
        jumps,
        shots,
        stuck,
        world.projectiles.len(),
        world.actor.arsenal.active().map(|w| w.kind)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds embed the simulation in a host page
}
