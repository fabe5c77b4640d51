//! Renderer collaborator seam.
//!
//! The gameplay core never talks to a GPU; it resolves which clip drives the
//! skeleton at what time and hands that (plus a world transform) across this
//! trait. Loading is fallible; the per-tick calls are not — a stale handle is
//! logged and ignored, never propagated into the frame loop.

use crate::clip::{ClipCatalog, PoseSample};
use anyhow::{bail, Result};
use glam::Mat4;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SkeletonHandle(pub u32);

pub trait Renderer {
    fn load_model(&mut self, path: &str) -> Result<ModelHandle>;
    fn create_skeleton(&mut self, model: ModelHandle) -> Result<SkeletonHandle>;
    /// The immutable clip list the model ships with.
    fn clip_catalog(&self, model: ModelHandle) -> ClipCatalog;
    /// Per-tick pose propagation. Called unconditionally every tick, with
    /// `None` when no clip drives the skeleton (rest pose).
    fn pose_skeleton(&mut self, skeleton: SkeletonHandle, sample: Option<PoseSample>);
    fn draw(&mut self, model: ModelHandle, skeleton: SkeletonHandle, transform: Mat4);
    fn destroy_skeleton(&mut self, skeleton: SkeletonHandle);
    fn destroy_model(&mut self, model: ModelHandle);
}

/// Call record kept by [`StubRenderer`] so tests and the demo harness can
/// assert on what the core asked the backend to do.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    LoadModel { path: PathBuf, handle: ModelHandle },
    CreateSkeleton { model: ModelHandle, handle: SkeletonHandle },
    PoseSkeleton { skeleton: SkeletonHandle, sample: Option<PoseSample> },
    Draw { model: ModelHandle, skeleton: SkeletonHandle, transform: Mat4 },
    DestroySkeleton(SkeletonHandle),
    DestroyModel(ModelHandle),
}

/// Headless renderer backend: serves a fixed catalog and records every call.
/// Used by the demo binary and the integration tests.
pub struct StubRenderer {
    catalog: ClipCatalog,
    next_handle: u32,
    models: Vec<ModelHandle>,
    skeletons: Vec<SkeletonHandle>,
    pub calls: Vec<RenderCall>,
}

impl StubRenderer {
    pub fn with_catalog(catalog: ClipCatalog) -> Self {
        Self { catalog, next_handle: 1, models: Vec::new(), skeletons: Vec::new(), calls: Vec::new() }
    }

    pub fn from_catalog_file(path: &str) -> Result<Self> {
        Ok(Self::with_catalog(ClipCatalog::from_file(path)?))
    }

    fn next(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    /// The most recent pose sample sent for `skeleton`, if any call was made.
    pub fn last_pose(&self, skeleton: SkeletonHandle) -> Option<Option<PoseSample>> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::PoseSkeleton { skeleton: s, sample } if *s == skeleton => Some(*sample),
            _ => None,
        })
    }

    pub fn drain_calls(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Renderer for StubRenderer {
    fn load_model(&mut self, path: &str) -> Result<ModelHandle> {
        if path.is_empty() {
            bail!("Empty model path");
        }
        let handle = ModelHandle(self.next());
        self.models.push(handle);
        self.calls.push(RenderCall::LoadModel { path: PathBuf::from(path), handle });
        Ok(handle)
    }

    fn create_skeleton(&mut self, model: ModelHandle) -> Result<SkeletonHandle> {
        if !self.models.contains(&model) {
            bail!("Unknown model handle {model:?}");
        }
        let handle = SkeletonHandle(self.next());
        self.skeletons.push(handle);
        self.calls.push(RenderCall::CreateSkeleton { model, handle });
        Ok(handle)
    }

    fn clip_catalog(&self, _model: ModelHandle) -> ClipCatalog {
        self.catalog.clone()
    }

    fn pose_skeleton(&mut self, skeleton: SkeletonHandle, sample: Option<PoseSample>) {
        if !self.skeletons.contains(&skeleton) {
            log::warn!("pose_skeleton on unknown skeleton {skeleton:?}; ignored");
            return;
        }
        self.calls.push(RenderCall::PoseSkeleton { skeleton, sample });
    }

    fn draw(&mut self, model: ModelHandle, skeleton: SkeletonHandle, transform: Mat4) {
        if !self.models.contains(&model) || !self.skeletons.contains(&skeleton) {
            log::warn!("draw with stale handles (model {model:?}, skeleton {skeleton:?}); ignored");
            return;
        }
        self.calls.push(RenderCall::Draw { model, skeleton, transform });
    }

    fn destroy_skeleton(&mut self, skeleton: SkeletonHandle) {
        self.skeletons.retain(|s| *s != skeleton);
        self.calls.push(RenderCall::DestroySkeleton(skeleton));
    }

    fn destroy_model(&mut self, model: ModelHandle) {
        self.models.retain(|m| *m != model);
        self.calls.push(RenderCall::DestroyModel(model));
    }
}
