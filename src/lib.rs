pub mod actor;
pub mod camera;
pub mod cli;
pub mod clip;
pub mod config;
pub mod events;
pub mod input;
pub mod inspector;
pub mod locomotion;
pub mod render;
pub mod selector;
pub mod time;

pub use actor::Actor;
pub use render::{Renderer, StubRenderer};

/// Normalizes an angle into `[0, 2π)`.
pub(crate) fn wrap_angle_tau(mut radians: f32) -> f32 {
    let tau = std::f32::consts::TAU;
    while radians < 0.0 {
        radians += tau;
    }
    while radians >= tau {
        radians -= tau;
    }
    radians
}

#[cfg(test)]
mod tests {
    use super::wrap_angle_tau;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn wrap_angle_tau_stays_in_range() {
        for raw in [-3.0 * PI, -0.1, 0.0, PI, TAU, TAU + 0.5, 9.0 * PI] {
            let wrapped = wrap_angle_tau(raw);
            assert!((0.0..TAU).contains(&wrapped), "{raw} wrapped to {wrapped}");
        }
    }
}
