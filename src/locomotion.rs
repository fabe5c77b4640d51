//! Per-tick character physics: jump impulse, gravity, ground clamp, and
//! yaw-relative horizontal displacement.
//!
//! Vertical physics is deliberately tick-rate-coupled: `gravity` and
//! `jump_speed` are per-tick velocity amounts applied once per frame, not
//! wall-clock rates. Clip playback (see [`crate::selector`]) runs on measured
//! wall-clock time instead; the game feel depends on keeping the two apart.

use crate::config::{JumpConfig, MovementConfig};
use crate::input::{Intent, ANALOG_DEADZONE};
use crate::wrap_angle_tau;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// Motion summary derived by [`LocomotionState::integrate`], consumed by the
/// animation selector. `running` is threaded explicitly instead of living in a
/// global the way ambient "is running" flags tend to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Motion {
    /// Any movement input above the deadzone this tick (including turning).
    pub moving: bool,
    /// Off the ground, whether from a jump or a fall.
    pub airborne: bool,
    /// Run button held with meaningful forward input.
    pub running: bool,
}

/// Position, facing, and vertical-motion state for the single playable
/// character. Exclusively mutated by [`LocomotionState::integrate`].
#[derive(Clone, Copy, Debug)]
pub struct LocomotionState {
    pub position: Vec3,
    /// Facing angle in radians, always in `[0, 2π)`. Zero faces -Z.
    pub rotation_y: f32,
    pub velocity_y: f32,
    /// Ground plane height, constant per scene.
    pub ground_y: f32,
    pub grounded: bool,
    jump_latched: bool,
}

impl LocomotionState {
    pub fn new(ground_y: f32) -> Self {
        Self {
            position: Vec3::new(0.0, ground_y, 0.0),
            // The spawn faces back down the tunnel.
            rotation_y: wrap_angle_tau(FRAC_PI_2 + PI),
            velocity_y: 0.0,
            ground_y,
            grounded: true,
            jump_latched: false,
        }
    }

    /// Unit forward vector for the current facing (zero rotation faces -Z).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.rotation_y.sin(), 0.0, -self.rotation_y.cos())
    }

    /// Unit strafe vector, perpendicular to [`Self::forward`] on the ground plane.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.rotation_y.cos(), 0.0, self.rotation_y.sin())
    }

    /// Where the mesh is drawn: the logic position pushed `forward_offset`
    /// units ahead along facing. Cosmetic decoupling of the visual model from
    /// the logical origin; the camera aims at this point too.
    #[must_use]
    pub fn model_position(&self, forward_offset: f32) -> Vec3 {
        self.position + self.forward() * forward_offset
    }

    /// Advances one tick: jump trigger, gravity, ground clamp, then horizontal
    /// displacement and turning from `intent`.
    pub fn integrate(&mut self, intent: &Intent, movement: &MovementConfig, jump: &JumpConfig) -> Motion {
        // Jump trigger latches on the rising edge so a held button fires once.
        if intent.jump && self.grounded && !self.jump_latched {
            self.velocity_y = jump.jump_speed;
            self.grounded = false;
            self.jump_latched = true;
        } else if !intent.jump {
            self.jump_latched = false;
        }

        self.velocity_y -= jump.gravity;
        self.position.y += self.velocity_y;

        if self.position.y <= self.ground_y {
            self.position.y = self.ground_y;
            self.velocity_y = 0.0;
            self.grounded = true;
        }

        let running = intent.run && intent.move_forward.abs() > ANALOG_DEADZONE;
        let speed = if running { movement.player_speed * movement.run_speed_mult } else { movement.player_speed };

        // Displacement uses the facing from the start of the tick; turning below
        // takes effect next tick.
        let mut displacement = Vec3::ZERO;
        if intent.move_forward != 0.0 {
            displacement += self.forward() * intent.move_forward * speed;
        }
        if intent.move_right != 0.0 {
            displacement += self.right() * intent.move_right * speed * movement.strafe_mult;
        }

        if intent.turn_rate != 0.0 {
            // Turn assist keys off the raw run button, not the derived flag.
            let turn_speed =
                if intent.run { movement.turn_speed * movement.run_turn_mult } else { movement.turn_speed };
            self.rotation_y = wrap_angle_tau(self.rotation_y + intent.turn_rate * turn_speed);
        }

        self.position += displacement;

        let moving = intent.move_forward.abs() > ANALOG_DEADZONE
            || intent.move_right.abs() > ANALOG_DEADZONE
            || intent.turn_rate.abs() > ANALOG_DEADZONE;

        Motion { moving, airborne: !self.grounded, running }
    }
}
