//! Animation state machine: picks the one clip that drives the skeleton each
//! tick from the motion flags, and advances its playback.
//!
//! Role clips (idle/walk/run/jump) are resolved by name exactly once at
//! construction; every per-tick decision dispatches on stored indices. A role
//! whose clip is missing from the catalog simply makes that transition
//! unreachable — never an error. Nothing in here returns a failure: the worst
//! outcome of any anomaly is "no animation change this tick".

use crate::clip::{ClipCatalog, ClipInstance, PoseSample};
use crate::events::{EventBus, GameEvent};
use crate::locomotion::Motion;
use crate::render::{Renderer, SkeletonHandle};
use std::sync::Arc;

/// Semantically significant clip names the selector binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipRole {
    Idle,
    Walk,
    Run,
    Jump,
}

impl ClipRole {
    pub const ALL: [ClipRole; 4] = [ClipRole::Idle, ClipRole::Walk, ClipRole::Run, ClipRole::Jump];

    pub const fn clip_name(self) -> &'static str {
        match self {
            ClipRole::Idle => "Idle",
            ClipRole::Walk => "Walk",
            ClipRole::Run => "Run",
            ClipRole::Jump => "Jump",
        }
    }
}

/// Observable state, derived from the currently bound clip index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimState {
    Idle,
    Walking,
    Running,
    Jumping,
    /// A non-role clip is bound (e.g. the inspector attached one).
    Other,
    /// Nothing drives the skeleton.
    None,
}

pub struct AnimationSelector {
    catalog: ClipCatalog,
    instances: Vec<ClipInstance>,
    current: Option<usize>,
    idle: Option<usize>,
    walk: Option<usize>,
    run: Option<usize>,
    jump: Option<usize>,
    moving: bool,
    was_moving: bool,
    airborne: bool,
    was_airborne: bool,
}

impl AnimationSelector {
    /// Builds one instance per catalog entry and resolves the role bindings.
    pub fn new(catalog: ClipCatalog) -> Self {
        let instances =
            catalog.iter().enumerate().map(|(index, def)| ClipInstance::new(index, def)).collect::<Vec<_>>();
        let resolve = |role: ClipRole| {
            let index = catalog.find(role.clip_name());
            match index {
                Some(i) => log::debug!("bound {role:?} to clip {i}"),
                None => log::debug!("no {role:?} clip in catalog; transition disabled"),
            }
            index
        };
        let (idle, walk, run, jump) =
            (resolve(ClipRole::Idle), resolve(ClipRole::Walk), resolve(ClipRole::Run), resolve(ClipRole::Jump));
        Self {
            catalog,
            instances,
            current: None,
            idle,
            walk,
            run,
            jump,
            moving: false,
            was_moving: false,
            airborne: false,
            was_airborne: false,
        }
    }

    pub fn clip_count(&self) -> usize {
        self.instances.len()
    }

    pub fn catalog(&self) -> &ClipCatalog {
        &self.catalog
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn role_index(&self, role: ClipRole) -> Option<usize> {
        match role {
            ClipRole::Idle => self.idle,
            ClipRole::Walk => self.walk,
            ClipRole::Run => self.run,
            ClipRole::Jump => self.jump,
        }
    }

    pub fn state(&self) -> AnimState {
        match self.current {
            None => AnimState::None,
            Some(index) if Some(index) == self.jump => AnimState::Jumping,
            Some(index) if Some(index) == self.run => AnimState::Running,
            Some(index) if Some(index) == self.walk => AnimState::Walking,
            Some(index) if Some(index) == self.idle => AnimState::Idle,
            Some(_) => AnimState::Other,
        }
    }

    pub fn instance(&self, index: usize) -> Option<&ClipInstance> {
        self.instances.get(index)
    }

    /// Mutable instance access for the inspector overlay. The selector
    /// tolerates external mutation; [`Self::regain_control`] restores its own
    /// flags when the overlay hands the skeleton back.
    pub fn instance_mut(&mut self, index: usize) -> Option<&mut ClipInstance> {
        self.instances.get_mut(index)
    }

    fn clip_name(&self, index: usize) -> Arc<str> {
        self.catalog.get(index).map(|def| Arc::clone(&def.name)).unwrap_or_else(|| Arc::from("?"))
    }

    /// Binds `index` as the driving clip, playing, with the given loop flag.
    fn attach(&mut self, index: usize, looping: bool, events: &mut EventBus) {
        let name = self.clip_name(index);
        if let Some(instance) = self.instances.get_mut(index) {
            instance.set_playing(true);
            instance.set_looping(looping);
            self.current = Some(index);
            events.push(GameEvent::ClipStarted { clip: name });
        }
    }

    fn stop_current(&mut self, events: &mut EventBus) {
        if let Some(index) = self.current.take() {
            let name = self.clip_name(index);
            if let Some(instance) = self.instances.get_mut(index) {
                instance.set_playing(false);
            }
            events.push(GameEvent::ClipStopped { clip: name });
        }
    }

    /// One tick of transition logic followed by unconditional pose propagation.
    ///
    /// `delta_seconds` is measured wall-clock time; clip playback runs on it
    /// while the physics feeding `motion` stays fixed-step. When `menu_active`
    /// the transition logic is suppressed entirely and only the pose of
    /// whatever is already bound reaches the skeleton.
    pub fn update(
        &mut self,
        skeleton: SkeletonHandle,
        motion: Motion,
        menu_active: bool,
        delta_seconds: f32,
        renderer: &mut dyn Renderer,
        events: &mut EventBus,
    ) {
        if !menu_active && !self.instances.is_empty() {
            self.was_moving = self.moving;
            self.moving = motion.moving;
            self.was_airborne = self.airborne;
            self.airborne = motion.airborne;

            if self.airborne && !self.was_airborne {
                // Rule 1: jump start always wins. One-shot.
                if let Some(jump) = self.jump {
                    self.attach(jump, false, events);
                }
            } else if !self.airborne {
                // Rule 2 is the surrounding condition: airborne ticks hold state.
                if motion.running && self.run.is_some() {
                    // Rule 3: running, with self-heal when the loop lapses.
                    let run = self.run.expect("checked is_some");
                    if self.current != Some(run) {
                        self.attach(run, true, events);
                    } else if let Some(instance) = self.instances.get_mut(run) {
                        if !instance.is_playing() {
                            instance.set_playing(true);
                        }
                    }
                } else if self.moving && !self.was_moving {
                    // Rule 4: walk start on the movement rising edge.
                    if let Some(walk) = self.walk {
                        self.attach(walk, true, events);
                    }
                } else if !self.moving && self.was_moving {
                    // Rule 5: idle resume on the falling edge, or stop outright.
                    if let Some(idle) = self.idle {
                        self.attach(idle, true, events);
                    } else {
                        self.stop_current(events);
                    }
                }
                // Rule 6: cold start — nothing bound yet and no edge fired.
                if self.current.is_none() && !self.moving {
                    if let Some(idle) = self.idle {
                        self.attach(idle, true, events);
                    }
                }
            }

            // Rule 7: the one-shot jump finished. Runs after the rules above so
            // a re-jump issued this same tick is not overridden.
            if let (Some(current), Some(jump)) = (self.current, self.jump) {
                if current == jump && self.instances.get(current).is_some_and(|i| !i.is_playing()) {
                    if self.moving && self.walk.is_some() {
                        let walk = self.walk.expect("checked is_some");
                        self.attach(walk, true, events);
                    } else if let Some(idle) = self.idle {
                        self.attach(idle, true, events);
                    }
                }
            }

            // Rule 8: advance the driving clip by wall-clock delta.
            if let Some(current) = self.current {
                if let Some(instance) = self.instances.get_mut(current) {
                    if instance.is_playing() {
                        instance.advance(delta_seconds);
                    }
                }
            }
        }

        // Skeleton update is unconditional, bound clip or not.
        renderer.pose_skeleton(skeleton, self.pose_sample());
    }

    /// The sample that should currently pose the skeleton, if any clip is bound.
    pub fn pose_sample(&self) -> Option<PoseSample> {
        self.current.and_then(|index| self.instances.get(index)).map(ClipInstance::sample)
    }

    /// Re-asserts the selector's choice after an external overlay mutated the
    /// shared instances: restores play/loop flags appropriate to the bound
    /// clip's role. The next `update` call resumes normal transitions.
    pub fn regain_control(&mut self) {
        if let Some(current) = self.current {
            let looping = Some(current) != self.jump;
            if let Some(instance) = self.instances.get_mut(current) {
                instance.set_looping(looping);
                instance.set_playing(true);
            }
        }
    }
}
