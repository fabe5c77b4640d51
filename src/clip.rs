//! Clip catalog and per-clip playback state.
//!
//! The catalog is the immutable list of named clips a model ships with; the
//! selector owns one [`ClipInstance`] per catalog entry for the actor's
//! lifetime. Keyframe evaluation itself lives behind the renderer seam — the
//! gameplay side only tracks which clip drives the skeleton and at what time.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// One catalog entry, immutable once loaded.
#[derive(Clone, Debug)]
pub struct ClipDef {
    pub name: Arc<str>,
    /// Seconds, always > 0.
    pub duration: f32,
    pub keyframe_count: u32,
}

/// Ordered, immutable clip list for one model.
#[derive(Clone, Debug, Default)]
pub struct ClipCatalog {
    clips: Vec<ClipDef>,
}

#[derive(Deserialize)]
struct CatalogFile {
    clips: Vec<ClipEntryFile>,
}

#[derive(Deserialize)]
struct ClipEntryFile {
    name: String,
    duration: f32,
    #[serde(default)]
    keyframe_count: u32,
}

impl ClipCatalog {
    pub fn from_entries(clips: Vec<ClipDef>) -> Result<Self> {
        for clip in &clips {
            if !(clip.duration > 0.0) {
                bail!("Clip '{}' has non-positive duration {}", clip.name, clip.duration);
            }
            if clips.iter().filter(|other| other.name == clip.name).count() > 1 {
                bail!("Clip name '{}' appears more than once in the catalog", clip.name);
            }
        }
        Ok(Self { clips })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let raw: CatalogFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        let clips = raw
            .clips
            .into_iter()
            .map(|entry| ClipDef {
                name: Arc::from(entry.name),
                duration: entry.duration,
                keyframe_count: entry.keyframe_count,
            })
            .collect();
        Self::from_entries(clips).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClipDef> {
        self.clips.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClipDef> {
        self.clips.iter()
    }

    /// Exact-name lookup, used once at selector construction.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.clips.iter().position(|clip| clip.name.as_ref() == name)
    }
}

/// What currently drives a skeleton: a clip index into the catalog plus a
/// playback time in seconds. Handed to the renderer for pose evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseSample {
    pub clip: usize,
    pub time: f32,
}

/// Mutable playback state bound to one catalog entry. Created once per entry
/// at actor construction, released at teardown.
#[derive(Clone, Debug)]
pub struct ClipInstance {
    clip: usize,
    duration: f32,
    time: f32,
    speed: f32,
    playing: bool,
    looping: bool,
}

impl ClipInstance {
    pub fn new(clip: usize, def: &ClipDef) -> Self {
        Self { clip, duration: def.duration, time: 0.0, speed: 1.0, playing: false, looping: false }
    }

    pub fn clip_index(&self) -> usize {
        self.clip
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_playing(&mut self, playing: bool) {
        if playing && !self.looping && self.time >= self.duration {
            // Replaying a finished one-shot restarts it.
            self.time = 0.0;
        }
        self.playing = playing;
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time.clamp(0.0, self.duration);
    }

    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.speed = speed.max(0.0);
        }
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Advances playback by `delta` wall-clock seconds. Looping clips wrap into
    /// `[0, duration)`; a one-shot holds its final pose and stops reporting
    /// playing when it runs off the end.
    pub fn advance(&mut self, delta: f32) {
        if !self.playing || delta <= 0.0 {
            return;
        }
        self.time += delta * self.speed;
        if self.looping {
            if self.time >= self.duration {
                self.time %= self.duration;
            }
        } else if self.time >= self.duration {
            self.time = self.duration;
            self.playing = false;
        }
    }

    pub fn sample(&self) -> PoseSample {
        PoseSample { clip: self.clip, time: self.time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str, duration: f32) -> ClipDef {
        ClipDef { name: Arc::from(name), duration, keyframe_count: 12 }
    }

    #[test]
    fn looping_clip_wraps_time() {
        let mut instance = ClipInstance::new(0, &def("Walk", 0.8));
        instance.set_looping(true);
        instance.set_playing(true);
        instance.advance(2.0);
        assert!(instance.is_playing());
        assert!((instance.time() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn one_shot_stops_at_end_and_holds_final_pose() {
        let mut instance = ClipInstance::new(3, &def("Jump", 0.5));
        instance.set_playing(true);
        instance.advance(0.3);
        assert!(instance.is_playing());
        instance.advance(0.3);
        assert!(!instance.is_playing());
        assert!((instance.time() - 0.5).abs() < 1e-6);
        // Replaying restarts from zero.
        instance.set_playing(true);
        assert_eq!(instance.time(), 0.0);
    }

    #[test]
    fn speed_scales_advance_and_rejects_negatives() {
        let mut instance = ClipInstance::new(0, &def("Idle", 2.0));
        instance.set_playing(true);
        instance.set_speed(2.0);
        instance.advance(0.5);
        assert!((instance.time() - 1.0).abs() < 1e-6);
        instance.set_speed(-1.0);
        assert_eq!(instance.speed(), 0.0);
        instance.set_speed(f32::NAN);
        assert_eq!(instance.speed(), 0.0, "non-finite speed is ignored");
    }

    #[test]
    fn paused_instance_does_not_advance() {
        let mut instance = ClipInstance::new(0, &def("Idle", 2.0));
        instance.advance(1.0);
        assert_eq!(instance.time(), 0.0);
    }

    #[test]
    fn set_time_clamps_into_clip_range() {
        let mut instance = ClipInstance::new(0, &def("Idle", 1.5));
        instance.set_time(9.0);
        assert!((instance.time() - 1.5).abs() < 1e-6);
        instance.set_time(-1.0);
        assert_eq!(instance.time(), 0.0);
    }

    #[test]
    fn catalog_rejects_bad_entries() {
        assert!(ClipCatalog::from_entries(vec![def("Walk", 0.0)]).is_err());
        assert!(ClipCatalog::from_entries(vec![def("Walk", 1.0), def("Walk", 2.0)]).is_err());
    }

    #[test]
    fn catalog_finds_clips_by_exact_name() {
        let catalog = ClipCatalog::from_entries(vec![def("Idle", 1.0), def("Walk", 1.0)]).expect("catalog");
        assert_eq!(catalog.find("Walk"), Some(1));
        assert_eq!(catalog.find("walk"), None);
        assert_eq!(catalog.find("Run"), None);
    }
}
