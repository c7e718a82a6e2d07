//! Pointer and keyboard interaction with the ball world
//!
//! The platform layer delivers one [`InputSnapshot`] per frame; the
//! controller maps it onto picking up, dragging, and flinging a single
//! selected ball, and onto spawning a new ball that grows while the
//! spawn key is held. The pick is a plain index into `World::balls`,
//! valid forever since balls are never removed; clearing it never
//! touches the ball itself.

use rand::Rng;

use super::states::{Ball, Rgba, World};
use super::vec2::{self, NVec2};

/// Edge/level state of one button for one frame.
/// `down` and `up` are pulses, true for exactly the transition frame;
/// `held` is level-true every frame the button is physically pressed,
/// including the down frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonPulse {
    pub down: bool,
    pub held: bool,
    pub up: bool,
}

/// Everything the simulation consumes from the platform for one frame.
#[derive(Debug, Clone)]
pub struct InputSnapshot {
    pub quit: bool,
    pub pointer: NVec2, // world coordinates, pixels
    pub left: ButtonPulse,
    pub middle: ButtonPulse,
    pub right: ButtonPulse,
    pub spawn: ButtonPulse,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            quit: false,
            pointer: NVec2::zeros(),
            left: ButtonPulse::default(),
            middle: ButtonPulse::default(),
            right: ButtonPulse::default(),
            spawn: ButtonPulse::default(),
        }
    }
}

/// Transient controller state carried across frames.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub picked: Option<usize>,
}

impl InteractionState {
    /// Start-of-frame phase: spawn/grow a ball on the spawn key, then
    /// scan for a new pick.
    ///
    /// A spawn `down` pulse appends a radius-1 ball at the pointer with
    /// a random color; while the key is held the newest ball's radius
    /// tracks the distance from its center to the pointer, clamped to a
    /// minimum of 1. Release finalizes the ball as-is.
    ///
    /// Selection: the first ball in creation order containing the
    /// pointer becomes picked when left or right is in its down pulse.
    pub fn spawn_and_select(&mut self, world: &mut World, input: &InputSnapshot, rng: &mut impl Rng) {
        if input.spawn.down {
            let color = Rgba {
                r: rng.gen(),
                g: rng.gen(),
                b: rng.gen(),
                a: 255,
            };
            world
                .balls
                .push(Ball::new(1.0, color, input.pointer, NVec2::zeros()));
        }
        if input.spawn.held {
            if let Some(ball) = world.balls.last_mut() {
                let radius =
                    vec2::length(vec2::vector_from_positions(ball.position, input.pointer));
                ball.set_radius(radius.max(1.0));
            }
        }

        if input.left.down || input.right.down {
            if let Some(index) = world
                .balls
                .iter()
                .position(|ball| ball.contains_point(input.pointer))
            {
                self.picked = Some(index);
            }
        }
    }

    /// Post-integration phase: override the picked ball's dynamics.
    ///
    /// Left down arrests the ball (force and velocity zeroed); left
    /// held re-arrests it every frame and snaps it rigidly to the
    /// pointer; left up releases with no velocity imparted. Right up
    /// flings: velocity becomes the raw pixel offset from the pointer
    /// to the ball, and the pick is released. If left and right are
    /// both in their down pulse the whole phase is a no-op.
    pub fn manipulate(&mut self, world: &mut World, input: &InputSnapshot) {
        let Some(index) = self.picked else {
            return;
        };
        if input.left.down && input.right.down {
            return;
        }

        if input.left.down {
            let ball = &mut world.balls[index];
            ball.force = NVec2::zeros();
            ball.velocity = NVec2::zeros();
        }
        if input.left.held {
            let ball = &mut world.balls[index];
            ball.force = NVec2::zeros();
            ball.velocity = NVec2::zeros();
            ball.position = input.pointer;
        }
        if input.left.up {
            self.picked = None;
        }

        if input.right.up {
            let ball = &mut world.balls[index];
            ball.velocity = vec2::vector_from_positions(input.pointer, ball.position);
            self.picked = None;
        }
    }
}
