use crate::components::Side;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Linear RGBA player color, carried through to presentation untouched
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Difficulty key selecting one settings profile for every CPU handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuMode {
    Easy,
    Normal,
    Hard,
}

/// Behavior settings applied uniformly to all CPU input handlers at setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuSettings {
    /// Commanded slide rate as a fraction of full paddle speed, 0.0..=1.0.
    pub track_rate: f32,
    /// Tracking error the handler tolerates before moving at all.
    pub deadzone: f32,
}

/// Per-mode CPU settings table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuProfiles {
    profiles: HashMap<CpuMode, CpuSettings>,
}

impl CpuProfiles {
    pub fn new(profiles: HashMap<CpuMode, CpuSettings>) -> Self {
        Self { profiles }
    }

    pub fn settings_for(&self, mode: CpuMode) -> Option<CpuSettings> {
        self.profiles.get(&mode).copied()
    }
}

impl Default for CpuProfiles {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            CpuMode::Easy,
            CpuSettings {
                track_rate: 0.4,
                deadzone: 1.2,
            },
        );
        profiles.insert(
            CpuMode::Normal,
            CpuSettings {
                track_rate: 0.7,
                deadzone: 0.6,
            },
        );
        profiles.insert(
            CpuMode::Hard,
            CpuSettings {
                track_rate: 1.0,
                deadzone: 0.2,
            },
        );
        Self { profiles }
    }
}

/// Match configuration, consumed at setup and never mutated afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    pub home_color: Color,
    pub away_color: Color,
    /// Kickoff offset from the table center; X mirrors by side, Y is shared.
    pub ball_spawn_offset: Vec2,
    pub cpu_mode: CpuMode,
    pub cpu_profiles: CpuProfiles,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            home_color: Color::rgb(0.9, 0.2, 0.2),
            away_color: Color::rgb(0.2, 0.4, 0.9),
            ball_spawn_offset: Vec2::new(-4.0, 0.0),
            cpu_mode: CpuMode::Normal,
            cpu_profiles: CpuProfiles::default(),
        }
    }
}

/// Mirrored kickoff position: +X offset for the home side, -X for away.
pub fn spawn_position(center: Vec2, offset: Vec2, side: Side) -> Vec2 {
    let x = match side {
        Side::Home => center.x + offset.x,
        Side::Away => center.x - offset.x,
    };
    Vec2::new(x, center.y + offset.y)
}

/// Fatal configuration error raised during match assembly
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("no CPU settings profile for mode {0:?}")]
    UnknownCpuMode(CpuMode),

    #[error("no paddles assembled for the {0:?} side")]
    EmptyRoster(Side),

    #[error("no input handlers bound for the home side")]
    NoHomeHandlers,
}
