//! # Headless Soak
//!
//! Drives a world without a renderer for a fixed number of frames:
//! - emitters spawn drifting particles through `WorldCommands`
//! - particles leave the world extents and get culled
//! - every frame's statistics are accumulated and printed at the end
//!
//! Usage: `headless_soak [world.toml] [frames]`

use std::cell::Cell;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Instant;

use lumen_core::{
    Entity, FrameStats, ListenerResult, Vec2, World, WorldCommands, WorldConfig, WorldExtents,
    WorldListener,
};

const DEFAULT_FRAMES: u32 = 600;
const DT: f32 = 1.0 / 60.0;
const ARENA_SIZE: f32 = 200.0;
const EMITTER_COUNT: u16 = 8;
const CONTACT_RADIUS: f32 = 1.5;

/// Moves every entity carrying a `velocity` attribute.
struct Drift;

impl WorldListener for Drift {
    fn on_update(
        &mut self,
        entity: &mut Entity,
        delta: f32,
        _commands: &mut WorldCommands,
    ) -> ListenerResult {
        if let Some(&velocity) = entity.attribute::<Vec2>("velocity") {
            entity.remember_position();
            entity.position += velocity * delta;
        }
        Ok(())
    }
}

/// Emitters fire one particle every `interval` seconds.
struct Emitters {
    interval: f32,
    fired: u16,
}

impl WorldListener for Emitters {
    fn on_update(
        &mut self,
        entity: &mut Entity,
        delta: f32,
        commands: &mut WorldCommands,
    ) -> ListenerResult {
        let Some(cooldown) = entity.attribute_mut::<f32>("cooldown") else {
            return Ok(());
        };
        *cooldown -= delta;
        if *cooldown > 0.0 {
            return Ok(());
        }
        *cooldown += self.interval;

        let origin = entity.center();
        let heading = f32::from(self.fired) * 0.618_034 * std::f32::consts::TAU;
        let velocity = Vec2::new(heading.cos(), heading.sin()) * 40.0;
        commands.spawn_with(move |particle| {
            particle.position = origin;
            particle.set_dimensions(1.0, 1.0);
            particle.z_index = 1;
            particle.set_attribute("velocity", velocity);
        });
        self.fired = self.fired.wrapping_add(1);
        Ok(())
    }
}

/// Counts particle pairs whose centers are within `CONTACT_RADIUS`.
struct Contacts {
    touching: Rc<Cell<u64>>,
}

impl WorldListener for Contacts {
    fn on_interact(
        &mut self,
        entity: &mut Entity,
        other: &Entity,
        _delta: f32,
        _commands: &mut WorldCommands,
    ) -> ListenerResult {
        if entity.center().distance(other.center()) <= CONTACT_RADIUS {
            self.touching.set(self.touching.get() + 1);
        }
        Ok(())
    }
}

fn accumulate(total: &mut FrameStats, frame: &FrameStats) {
    total.added += frame.added;
    total.culled += frame.culled;
    total.updated += frame.updated;
    total.interactions += frame.interactions;
    total.removed += frame.removed;
    total.consistency_violations += frame.consistency_violations;
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match WorldConfig::from_toml_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => WorldConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         LUMEN - HEADLESS WORLD SOAK                              ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    println!("┌─ CONFIGURATION ─────────────────────────────────────────────────┐");
    println!("│ Cache Size:         {}", config.cache_size);
    println!("│ Id Strategy:        {:?}", config.id_strategy);
    println!("│ Frames:             {frames}");
    println!("│ Arena:              {ARENA_SIZE}x{ARENA_SIZE}");
    println!("│ Emitters:           {EMITTER_COUNT}");
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();

    let mut world = World::with_config(&config);
    world.set_bounds(WorldExtents::from_size(ARENA_SIZE, ARENA_SIZE));
    world.add_listener(Drift);
    world.add_listener(Emitters {
        interval: 0.25,
        fired: 0,
    });
    let touching = Rc::new(Cell::new(0));
    world.add_listener(Contacts {
        touching: Rc::clone(&touching),
    });

    for i in 0..EMITTER_COUNT {
        let x = (f32::from(i) + 0.5) * ARENA_SIZE / f32::from(EMITTER_COUNT);
        let spawned = world.add_object_with(
            |e| {
                e.set_position(x, ARENA_SIZE / 2.0);
                e.set_dimensions(2.0, 2.0);
                e.persistent = true;
                e.active = false;
                e.set_attribute("cooldown", f32::from(i) * 0.03);
            },
            false,
        );
        if let Err(err) = spawned {
            eprintln!("failed to place emitter {i}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let start = Instant::now();
    let mut total = FrameStats::default();
    let mut peak = 0;

    for frame in 0..frames {
        match world.update(DT) {
            Ok(stats) => accumulate(&mut total, &stats),
            Err(err) => {
                eprintln!("frame {frame} failed: {err}");
                return ExitCode::FAILURE;
            }
        }
        peak = peak.max(world.size());
    }

    let elapsed = start.elapsed();

    println!("┌─ RESULTS ───────────────────────────────────────────────────────┐");
    println!("│ Real Time:          {:.3} s", elapsed.as_secs_f64());
    println!(
        "│ Per Frame:          {:.1} µs",
        elapsed.as_secs_f64() * 1e6 / f64::from(frames.max(1))
    );
    println!("│ Alive At End:       {}", world.size());
    println!("│ Peak Alive:         {peak}");
    println!("│ Pool Slots:         {}", world.pool().capacity());
    println!("│ Added:              {}", total.added);
    println!("│ Culled:             {}", total.culled);
    println!("│ Removed:            {}", total.removed);
    println!("│ Updates:            {}", total.updated);
    println!("│ Interactions:       {}", total.interactions);
    println!("│ Contacts:           {}", touching.get());
    println!("│ Violations:         {}", total.consistency_violations);
    println!("└──────────────────────────────────────────────────────────────────┘");

    if total.consistency_violations == 0 {
        println!("✅ World stayed consistent");
        ExitCode::SUCCESS
    } else {
        println!("❌ World reported consistency violations");
        ExitCode::FAILURE
    }
}
