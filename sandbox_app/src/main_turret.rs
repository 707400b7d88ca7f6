//! Turret demo
//!
//! A turret at the arena center leads bouncing targets and logs each
//! firing solution.
//!
//! Usage: `turret_demo [config.toml|config.ron]`

use rand::rngs::StdRng;
use rand::SeedableRng;
use sandbox_app::logging::{self, info, warn};
use sandbox_app::prelude::*;

fn main() -> Result<(), SandboxError> {
    logging::init();

    let config = SandboxConfig::load_or_default(std::env::args().nth(1))?;
    let arena = Cube::from_center_radius(Vt::ZERO, config.world_half_size);
    let mut rng = StdRng::seed_from_u64(config.seed);

    if config.turret.bullet_speed <= config.max_speed {
        warn!(
            "Bullet speed {} does not exceed target speed {}; many targets will be unreachable",
            config.turret.bullet_speed, config.max_speed
        );
    }

    let mut targets: Vec<Target> = (0..config.target_count)
        .map(|_| {
            let position = arena.rand_vector(&mut rng);
            let velocity = Vt::rand_vt(&mut rng, -1.0, 1.0).normalized_to(config.max_speed);
            Target::new(position, velocity)
        })
        .collect();

    let mut turret = Turret::new(arena.center(), config.turret.clone());
    let mut shots = 0_u32;

    for step in 0..config.steps {
        for target in &mut targets {
            target.advance(config.time_step, &arena);
        }

        if let Some(shot) = turret.update(config.time_step, &targets) {
            shots += 1;
            let target = &targets[shot.target];
            info!(
                "Step {step}: fire at target {} ({}) -> aim {} in {:.2}s, {:.1} deg off current bearing",
                shot.target,
                target.position,
                shot.solution.aim_point,
                shot.solution.time,
                (target.position - turret.position)
                    .angle(shot.solution.direction)
                    .to_degrees()
            );
        }
    }

    info!("Fired {shots} shots over {} steps", config.steps);
    Ok(())
}
