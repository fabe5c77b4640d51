//! Maps raw pad samples to a structured per-tick intent record.
//!
//! The platform layer samples the pad once per tick and hands the snapshot here;
//! everything downstream (locomotion, animation) reads only [`Intent`].

/// Digital button snapshot for one tick. Named flags, no bitmask decoding here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PadButtons {
    pub d_up: bool,
    pub d_down: bool,
    pub d_left: bool,
    pub d_right: bool,
    pub a: bool,
    pub b: bool,
    pub z: bool,
    pub c_up: bool,
    pub c_down: bool,
    pub c_left: bool,
    pub c_right: bool,
    pub l: bool,
    pub r: bool,
    pub start: bool,
}

/// Analog stick snapshot; raw signed hardware bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PadSticks {
    pub stick_x: i8,
    pub stick_y: i8,
}

/// Below this magnitude an analog axis is treated as centered and the digital
/// fallback for that axis applies.
pub const ANALOG_DEADZONE: f32 = 0.1;

/// Structured movement/action intent for one tick. Recomputed every tick,
/// never stored across ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Intent {
    /// Forward/back axis in `[-1, 1]`; positive is forward.
    pub move_forward: f32,
    /// Strafe axis in `[-1, 1]`. No pad control feeds this today; the
    /// locomotion path for it stays live for future bindings.
    pub move_right: f32,
    /// Turn axis in `[-1, 1]`; positive turns right.
    pub turn_rate: f32,
    pub jump: bool,
    pub action: bool,
    pub secondary_action: bool,
    pub run: bool,
    pub pause: bool,
    pub select: bool,
    pub cancel: bool,
    pub camera_reset: bool,
    pub camera_x: f32,
    pub camera_y: f32,
}

fn axis(raw: i8) -> f32 {
    (f32::from(raw) / 127.0).clamp(-1.0, 1.0)
}

/// Pure mapping from one pad snapshot to an [`Intent`]. Analog wins per axis;
/// if an axis is inside [`ANALOG_DEADZONE`] the d-pad drives that axis instead.
#[must_use]
pub fn normalize(buttons: PadButtons, sticks: PadSticks) -> Intent {
    let mut intent =
        Intent { move_forward: axis(sticks.stick_y), turn_rate: axis(sticks.stick_x), ..Intent::default() };

    if intent.move_forward.abs() < ANALOG_DEADZONE {
        if buttons.d_up {
            intent.move_forward = 1.0;
        } else if buttons.d_down {
            intent.move_forward = -1.0;
        }
    }
    if intent.turn_rate.abs() < ANALOG_DEADZONE {
        if buttons.d_left {
            intent.turn_rate = -1.0;
        } else if buttons.d_right {
            intent.turn_rate = 1.0;
        }
    }

    intent.jump = buttons.a;
    intent.action = buttons.b;
    intent.secondary_action = buttons.c_up;
    intent.run = buttons.z;

    if buttons.c_left {
        intent.camera_x = -1.0;
    } else if buttons.c_right {
        intent.camera_x = 1.0;
    }
    if buttons.c_up {
        intent.camera_y = 1.0;
    } else if buttons.c_down {
        intent.camera_y = -1.0;
    }
    intent.camera_reset = buttons.l;

    intent.pause = buttons.start;
    intent.select = buttons.a;
    intent.cancel = buttons.b;

    intent
}
