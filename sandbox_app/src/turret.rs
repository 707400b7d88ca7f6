//! Turret targeting AI
//!
//! Leads moving targets with the kernel's intercept-time solver and keeps
//! targets bouncing inside the arena using box clamping plus reflection.

use fvector3d::{ClampFaces, Cube, Vt};

use crate::config::TurretConfig;

/// Firing solution for one target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSolution {
    /// Seconds until the projectile meets the target
    pub time: f64,
    /// Where the target will be at `time`
    pub aim_point: Vt,
    /// Unit direction from the turret to `aim_point`
    pub direction: Vt,
}

/// Solve the lead for a target moving at constant velocity.
///
/// Returns `None` when no future intercept exists or the intercept lies
/// beyond `config.max_range`.
pub fn aim(shooter: Vt, target_pos: Vt, target_vel: Vt, config: &TurretConfig) -> Option<AimSolution> {
    let time = shooter.calc_aim_ahead_dur(target_pos, target_vel, config.bullet_speed);
    if time.is_infinite() {
        return None;
    }

    let aim_point = target_pos + target_vel * time;
    if shooter.len_to(aim_point) > config.max_range {
        return None;
    }

    Some(AimSolution {
        time,
        aim_point,
        direction: (aim_point - shooter).normalized(),
    })
}

/// Target moving in a straight line that bounces off the arena walls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Current position
    pub position: Vt,
    /// Current velocity
    pub velocity: Vt,
}

impl Target {
    /// Create a new target
    pub const fn new(position: Vt, velocity: Vt) -> Self {
        Self { position, velocity }
    }

    /// Step the target by `dt` seconds, bouncing off any wall it crossed.
    ///
    /// Returns the walls that were hit.
    pub fn advance(&mut self, dt: f64, arena: &Cube) -> ClampFaces {
        self.position += self.velocity * dt;
        let faces = self.position.make_in(arena);
        for (axis, normal) in [Vt::UNIT_X, Vt::UNIT_Y, Vt::UNIT_Z].into_iter().enumerate() {
            if faces.touches_axis(axis) {
                self.velocity = self.velocity.reflect(normal);
            }
        }
        faces
    }
}

/// Shot fired by a [`Turret`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    /// Index of the target in the slice passed to [`Turret::update`]
    pub target: usize,
    /// Firing solution used
    pub solution: AimSolution,
}

/// Stationary turret with a fire cooldown
#[derive(Debug, Clone)]
pub struct Turret {
    /// Turret position
    pub position: Vt,
    config: TurretConfig,
    cooldown: f64,
}

impl Turret {
    /// Create a turret ready to fire
    pub const fn new(position: Vt, config: TurretConfig) -> Self {
        Self {
            position,
            config,
            cooldown: 0.0,
        }
    }

    /// Pick the target with the soonest intercept
    pub fn select_target(&self, targets: &[Target]) -> Option<(usize, AimSolution)> {
        targets
            .iter()
            .enumerate()
            .filter_map(|(index, target)| {
                aim(self.position, target.position, target.velocity, &self.config)
                    .map(|solution| (index, solution))
            })
            .min_by(|(_, a), (_, b)| a.time.total_cmp(&b.time))
    }

    /// Advance the cooldown by `dt` and fire at the best target when ready
    pub fn update(&mut self, dt: f64, targets: &[Target]) -> Option<Shot> {
        self.cooldown = (self.cooldown - dt).max(0.0);
        if self.cooldown > 0.0 {
            return None;
        }

        let (target, solution) = self.select_target(targets)?;
        self.cooldown = self.config.fire_interval;
        Some(Shot { target, solution })
    }
}
