use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Horizontal movement and turning tuning. All constants are per-tick amounts,
/// set once at startup and immutable afterwards.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MovementConfig {
    #[serde(default = "MovementConfig::default_player_speed")]
    pub player_speed: f32,
    #[serde(default = "MovementConfig::default_turn_speed")]
    pub turn_speed: f32,
    #[serde(default = "MovementConfig::default_run_speed_mult")]
    pub run_speed_mult: f32,
    #[serde(default = "MovementConfig::default_strafe_mult")]
    pub strafe_mult: f32,
    #[serde(default = "MovementConfig::default_run_turn_mult")]
    pub run_turn_mult: f32,
}

impl MovementConfig {
    const fn default_player_speed() -> f32 {
        3.0
    }
    const fn default_turn_speed() -> f32 {
        0.05
    }
    const fn default_run_speed_mult() -> f32 {
        2.0
    }
    const fn default_strafe_mult() -> f32 {
        0.7
    }
    const fn default_run_turn_mult() -> f32 {
        1.3
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            player_speed: Self::default_player_speed(),
            turn_speed: Self::default_turn_speed(),
            run_speed_mult: Self::default_run_speed_mult(),
            strafe_mult: Self::default_strafe_mult(),
            run_turn_mult: Self::default_run_turn_mult(),
        }
    }
}

/// Vertical physics tuning. `jump_speed` and `gravity` are per-tick velocity
/// amounts, not per-second rates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct JumpConfig {
    #[serde(default = "JumpConfig::default_jump_speed")]
    pub jump_speed: f32,
    #[serde(default = "JumpConfig::default_gravity")]
    pub gravity: f32,
    #[serde(default)]
    pub ground_y: f32,
}

impl JumpConfig {
    const fn default_jump_speed() -> f32 {
        8.0
    }
    const fn default_gravity() -> f32 {
        0.5
    }
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self { jump_speed: Self::default_jump_speed(), gravity: Self::default_gravity(), ground_y: 0.0 }
    }
}

/// Third-person follow camera tuning.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "CameraConfig::default_distance")]
    pub distance: f32,
    #[serde(default = "CameraConfig::default_height")]
    pub height: f32,
    #[serde(default = "CameraConfig::default_look_ahead")]
    pub look_ahead: f32,
    #[serde(default = "CameraConfig::default_look_up")]
    pub look_up: f32,
}

impl CameraConfig {
    const fn default_distance() -> f32 {
        200.0
    }
    const fn default_height() -> f32 {
        200.0
    }
    const fn default_look_ahead() -> f32 {
        100.0
    }
    const fn default_look_up() -> f32 {
        125.0
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: Self::default_distance(),
            height: Self::default_height(),
            look_ahead: Self::default_look_ahead(),
            look_up: Self::default_look_up(),
        }
    }
}

/// Model presentation tuning. The mesh is drawn `forward_offset` units ahead of
/// the logic position along facing; the asset's forward axis is reversed, so
/// the render transform adds π to the logical yaw.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "ModelConfig::default_path")]
    pub path: String,
    #[serde(default = "ModelConfig::default_scale")]
    pub scale: f32,
    #[serde(default = "ModelConfig::default_forward_offset")]
    pub forward_offset: f32,
}

impl ModelConfig {
    fn default_path() -> String {
        "assets/player.model".to_string()
    }
    const fn default_scale() -> f32 {
        1.22
    }
    const fn default_forward_offset() -> f32 {
        20.0
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            scale: Self::default_scale(),
            forward_offset: Self::default_forward_offset(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub jump: JumpConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Loads `path`, falling back to defaults (with a logged warning) when the
    /// file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err:#}; falling back to default tuning");
                Self::default()
            }
        }
    }
}
