//! Octree demo
//!
//! Scatters items through the arena, lets them drift for a number of steps
//! while the octree follows them, and logs tree shape and query results.
//!
//! Usage: `octree_demo [config.toml|config.ron]`

use rand::rngs::StdRng;
use rand::SeedableRng;
use sandbox_app::logging::{self, debug, info};
use sandbox_app::prelude::*;

const ITEM_RADII: [f64; 4] = [0.5, 1.0, 1.5, 2.0];

struct Drifter {
    key: ItemKey,
    velocity: Vt,
}

fn main() -> Result<(), SandboxError> {
    logging::init();

    let config = SandboxConfig::load_or_default(std::env::args().nth(1))?;
    let arena = Cube::from_center_radius(Vt::ZERO, config.world_half_size);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut octree = Octree::new(arena, config.octree.clone());

    info!("Arena {arena}, spawning {} items", config.item_count);
    let mut drifters = Vec::with_capacity(config.item_count);
    for index in 0..config.item_count {
        let position = arena.rand_vector(&mut rng);
        let velocity = Vt::rand_vt(&mut rng, -1.0, 1.0).normalized_to(config.max_speed);
        let radius = ITEM_RADII[index % ITEM_RADII.len()];
        let key = octree.insert(position, radius, index)?;
        drifters.push(Drifter { key, velocity });
    }
    log_shape(&octree);

    for step in 0..config.steps {
        for drifter in &mut drifters {
            let Some(item) = octree.get(drifter.key) else {
                continue;
            };
            let mut position = item.position + drifter.velocity * config.time_step;
            let faces = position.make_in(&arena);
            for axis in 0..3 {
                if faces.touches_axis(axis) {
                    drifter.velocity[axis] = -drifter.velocity[axis];
                }
            }
            octree.relocate(drifter.key, position)?;
        }

        if step % 100 == 0 {
            debug!("Step {step}: depth {}", octree.depth());
        }
    }
    log_shape(&octree);

    let probe = Vt::ZERO;
    let radius = config.world_half_size / 4.0;
    let near = octree.query_sphere(probe, radius);
    info!("{} items within {radius:.2} of {probe}", near.len());

    let corner = arena.octant_box(arena.center(), Octant::all());
    let in_corner = octree.query_box(&corner);
    info!("{} items in octant {corner}", in_corner.len());

    Ok(())
}

fn log_shape(octree: &Octree<usize>) {
    let leaves = octree.get_all_leaves();
    let occupied = leaves.iter().filter(|leaf| !leaf.items.is_empty()).count();
    info!(
        "Octree: {} items, depth {}, {} leaves ({occupied} occupied)",
        octree.len(),
        octree.depth(),
        leaves.len()
    );
}
