//! The playable character: composes input normalization, locomotion, and the
//! animation selector into one per-tick update, and owns the render-side
//! handles for the character model and skeleton.

use crate::camera;
use crate::clip::ClipCatalog;
use crate::config::DemoConfig;
use crate::events::{EventBus, GameEvent};
use crate::input::{self, PadButtons, PadSticks};
use crate::locomotion::LocomotionState;
use crate::render::{ModelHandle, Renderer, SkeletonHandle};
use crate::selector::AnimationSelector;
use anyhow::Result;
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::PI;

pub struct Actor {
    config: DemoConfig,
    model: ModelHandle,
    skeleton: SkeletonHandle,
    pub locomotion: LocomotionState,
    pub selector: AnimationSelector,
    events: EventBus,
}

impl Actor {
    /// Loads the character model, creates its skeleton, and binds the
    /// animation selector against the model's clip catalog.
    pub fn spawn(config: DemoConfig, renderer: &mut dyn Renderer) -> Result<Self> {
        let model = renderer.load_model(&config.model.path)?;
        let skeleton = renderer.create_skeleton(model)?;
        let catalog: ClipCatalog = renderer.clip_catalog(model);
        if catalog.is_empty() {
            log::warn!("model '{}' has no animation clips; character will not animate", config.model.path);
        }
        let selector = AnimationSelector::new(catalog);
        let locomotion = LocomotionState::new(config.jump.ground_y);
        Ok(Self { config, model, skeleton, locomotion, selector, events: EventBus::new() })
    }

    pub fn model(&self) -> ModelHandle {
        self.model
    }

    pub fn skeleton(&self) -> SkeletonHandle {
        self.skeleton
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// One frame: normalize input → integrate physics → drive the animation
    /// state machine → compute the world transform → submit the draw.
    /// `delta_seconds` is wall-clock time and feeds clip playback only.
    pub fn tick(
        &mut self,
        buttons: PadButtons,
        sticks: PadSticks,
        menu_active: bool,
        delta_seconds: f32,
        renderer: &mut dyn Renderer,
    ) -> Mat4 {
        let intent = input::normalize(buttons, sticks);

        let was_grounded = self.locomotion.grounded;
        let motion = self.locomotion.integrate(&intent, &self.config.movement, &self.config.jump);
        if was_grounded && motion.airborne {
            self.events.push(GameEvent::JumpStarted { velocity: self.config.jump.jump_speed });
        } else if !was_grounded && !motion.airborne {
            self.events.push(GameEvent::Landed { position_y: self.locomotion.position.y });
        }

        self.selector.update(self.skeleton, motion, menu_active, delta_seconds, renderer, &mut self.events);

        let transform = self.render_transform();
        renderer.draw(self.model, self.skeleton, transform);
        transform
    }

    /// World transform for the skinned draw: fixed scale, the model offset
    /// ahead of the logic position, and yaw flipped by π because the asset's
    /// forward axis is reversed relative to the logic convention.
    #[must_use]
    pub fn render_transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.config.model.scale),
            Quat::from_rotation_y(self.locomotion.rotation_y + PI),
            self.model_position(),
        )
    }

    #[must_use]
    pub fn model_position(&self) -> Vec3 {
        self.locomotion.model_position(self.config.model.forward_offset)
    }

    /// Follow-camera eye for the current state; consumed by the external camera.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        camera::follow_eye(&self.locomotion, self.config.model.forward_offset, &self.config.camera)
    }

    /// Follow-camera look-at target for the current state.
    #[must_use]
    pub fn camera_target(&self) -> Vec3 {
        camera::follow_target(&self.locomotion, self.config.model.forward_offset, &self.config.camera)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Releases the render-side resources. The selector's clip instances drop
    /// with the actor.
    pub fn despawn(self, renderer: &mut dyn Renderer) {
        renderer.destroy_skeleton(self.skeleton);
        renderer.destroy_model(self.model);
    }
}
