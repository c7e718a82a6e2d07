//! Build fully-initialized simulation scenarios from configuration and
//! run the per-frame pipeline
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - world state (`World` with balls at t = 0)
//! - active force set (`ForceSet`)
//! - interaction controller state (`InteractionState`)
//!
//! The scenario is inserted into Bevy as a `Resource` and stepped once
//! per frame by the visualization layer.

use bevy::prelude::Resource;
use rand::Rng;

use crate::configuration::config::{BallConfig, ScenarioConfig};
use crate::simulation::collisions::resolve_collisions;
use crate::simulation::forces::{ForceSet, MutualGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::interaction::{InputSnapshot, InteractionState};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Ball, DrawRecord, Rgba, World};
use crate::simulation::vec2::NVec2;

/// Bevy resource representing a fully-initialized simulation scenario.
///
/// This is the main "runtime bundle" constructed from a
/// [`ScenarioConfig`]: parameters, current world state, the set of
/// active force laws, and the interaction controller.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub world: World,
    pub forces: ForceSet,
    pub interaction: InteractionState,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Balls: map `BallConfig` -> runtime `Ball`; mass is derived
        // from the radius, never read from the file
        let balls: Vec<Ball> = cfg
            .balls
            .iter()
            .map(|bc: &BallConfig| {
                Ball::new(
                    bc.radius,
                    Rgba {
                        r: bc.color[0],
                        g: bc.color[1],
                        b: bc.color[2],
                        a: bc.color[3],
                    },
                    NVec2::new(bc.x[0], bc.x[1]),
                    NVec2::new(bc.v[0], bc.v[1]),
                )
            })
            .collect();

        let world = World { balls, t: 0.0 };

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            screen_width: p_cfg.screen_width,
            screen_height: p_cfg.screen_height,
            fps: p_cfg.fps,
            g: p_cfg.g,
            restitution: p_cfg.restitution,
            velocity_clamp: p_cfg.velocity_clamp,
            line_scale_force: p_cfg.line_scale_force,
            line_scale_velocity: p_cfg.line_scale_velocity,
        };

        let forces = ForceSet::new().with(MutualGravity { g: parameters.g });

        Self {
            parameters,
            world,
            forces,
            interaction: InteractionState::default(),
        }
    }

    /// Advance the simulation by one frame of `dt` seconds.
    ///
    /// Fixed stage order: spawn/pick selection, force accumulation,
    /// integration (with clamp and wrap), pick manipulation, collision
    /// resolution. Collision response is a post-integration correction
    /// and always runs last.
    pub fn step(&mut self, input: &InputSnapshot, dt: f64, rng: &mut impl Rng) {
        self.interaction.spawn_and_select(&mut self.world, input, rng);

        let mut forces = vec![NVec2::zeros(); self.world.balls.len()];
        self.forces.accumulate_forces(&self.world, &mut forces);
        for (ball, force) in self.world.balls.iter_mut().zip(forces.iter()) {
            ball.force = *force;
        }

        euler_integrator(&mut self.world, &self.parameters, dt);

        self.interaction.manipulate(&mut self.world, input);

        resolve_collisions(&mut self.world, &self.parameters);
    }

    /// Read-only draw records for the render layer, one per ball, with
    /// the debug vector endpoints pre-scaled by the configured factors.
    pub fn draw_records(&self) -> Vec<DrawRecord> {
        self.world
            .balls
            .iter()
            .map(|ball| DrawRecord {
                center: ball.position,
                radius: ball.radius,
                color: ball.color,
                velocity_end: ball.position + ball.velocity * self.parameters.line_scale_velocity,
                force_end: ball.position + ball.force * self.parameters.line_scale_force,
            })
            .collect()
    }

    /// The extra debug line from the picked ball to the pointer, shown
    /// while the right button is held on a pick.
    pub fn pick_line(&self, input: &InputSnapshot) -> Option<(NVec2, NVec2)> {
        let index = self.interaction.picked?;
        if input.right.held {
            Some((self.world.balls[index].position, input.pointer))
        } else {
            None
        }
    }
}
