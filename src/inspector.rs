//! Optional clip inspector overlay.
//!
//! Borrows the selector's clip instances to scrub, retime, and blend-preview
//! clips while gameplay transitions are suppressed. It never owns the
//! instances; deactivating hands the skeleton back through
//! [`AnimationSelector::regain_control`]. Blend preview drives a private
//! secondary skeleton so the gameplay skeleton is never double-written.

use crate::input::{PadButtons, PadSticks};
use crate::render::{ModelHandle, Renderer, SkeletonHandle};
use crate::selector::AnimationSelector;
use anyhow::Result;

const BLEND_STEP: f32 = 0.0075;
const CURSOR_STEP: f32 = 0.0001;
const SPEED_STEP: f32 = 0.0001;

pub struct ClipInspector {
    active: bool,
    active_clip: usize,
    blend_clip: Option<usize>,
    blend_factor: f32,
    time_cursor: f32,
    blend_skeleton: SkeletonHandle,
    show_help: bool,
}

impl ClipInspector {
    /// Creates the private blend-preview skeleton for `model`.
    pub fn new(model: ModelHandle, renderer: &mut dyn Renderer) -> Result<Self> {
        let blend_skeleton = renderer.create_skeleton(model)?;
        Ok(Self {
            active: false,
            active_clip: 0,
            blend_clip: None,
            blend_factor: 0.0,
            time_cursor: 0.5,
            blend_skeleton,
            show_help: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn active_clip(&self) -> usize {
        self.active_clip
    }

    pub fn blend_clip(&self) -> Option<usize> {
        self.blend_clip
    }

    pub fn blend_factor(&self) -> f32 {
        self.blend_factor
    }

    pub fn time_cursor(&self) -> f32 {
        self.time_cursor
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Toggles the overlay. Leaving it returns skeleton control to the
    /// selector's own chosen clip.
    pub fn toggle(&mut self, selector: &mut AnimationSelector) {
        self.active = !self.active;
        if !self.active {
            selector.regain_control();
        }
    }

    /// One overlay tick. `pressed` carries this frame's button edges, `held`
    /// the level state; both come from the same pad the gameplay reads.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        selector: &mut AnimationSelector,
        skeleton: SkeletonHandle,
        pressed: PadButtons,
        held: PadButtons,
        sticks: PadSticks,
        delta_seconds: f32,
        renderer: &mut dyn Renderer,
    ) {
        if !self.active || selector.clip_count() == 0 {
            return;
        }
        let count = selector.clip_count();

        let last = self.active_clip;
        if pressed.c_up {
            self.active_clip = (self.active_clip + count - 1) % count;
        }
        if pressed.c_down {
            self.active_clip = (self.active_clip + 1) % count;
        }
        if last != self.active_clip {
            if let Some(instance) = selector.instance_mut(self.active_clip) {
                instance.set_playing(true);
            }
        }

        if pressed.start {
            if let Some(instance) = selector.instance_mut(self.active_clip) {
                let playing = instance.is_playing();
                instance.set_playing(!playing);
            }
        }
        if pressed.z {
            if let Some(instance) = selector.instance_mut(self.active_clip) {
                let looping = instance.is_looping();
                instance.set_looping(!looping);
            }
        }
        if pressed.l {
            self.show_help = !self.show_help;
        }

        if held.c_left {
            self.blend_factor -= BLEND_STEP;
        }
        if held.c_right {
            self.blend_factor += BLEND_STEP;
        }
        self.blend_factor = self.blend_factor.clamp(0.0, 1.0);

        if pressed.b {
            self.blend_clip = if self.blend_clip == Some(self.active_clip) {
                None
            } else {
                Some(self.active_clip)
            };
        }

        self.time_cursor += f32::from(sticks.stick_x) * CURSOR_STEP;
        let duration = selector.catalog().get(self.active_clip).map_or(1.0, |def| def.duration);
        if self.time_cursor < 0.0 {
            self.time_cursor = duration;
        } else if self.time_cursor > duration {
            self.time_cursor = 0.0;
        }

        if pressed.a {
            let cursor = self.time_cursor;
            if let Some(instance) = selector.instance_mut(self.active_clip) {
                instance.set_time(cursor);
            }
        }

        if let Some(instance) = selector.instance_mut(self.active_clip) {
            let speed = instance.speed() + f32::from(sticks.stick_y) * SPEED_STEP;
            instance.set_speed(speed);
            instance.advance(delta_seconds);
            let sample = instance.sample();
            renderer.pose_skeleton(skeleton, Some(sample));
        }

        if let Some(blend) = self.blend_clip.filter(|b| *b != self.active_clip) {
            if let Some(instance) = selector.instance_mut(blend) {
                instance.advance(delta_seconds);
                let sample = instance.sample();
                renderer.pose_skeleton(self.blend_skeleton, Some(sample));
            }
        }
    }

    /// Releases the private blend skeleton.
    pub fn destroy(self, renderer: &mut dyn Renderer) {
        renderer.destroy_skeleton(self.blend_skeleton);
    }
}
