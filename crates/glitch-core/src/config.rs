//! Configuration surface for the glitch grid engine
//!
//! Everything is optional with sensible defaults, so hosts can construct a
//! config in code or load one from a TOML file:
//!
//! ```toml
//! theme = "cyberpunk"
//! pattern = "wave"
//! intensity = "high"
//! scanlines = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Named color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Classic,
    Matrix,
    Cyberpunk,
    Retro,
    Minimal,
}

impl Theme {
    /// Parse a theme name, falling back to the default for unknown names
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "classic" => Self::Classic,
            "matrix" => Self::Matrix,
            "cyberpunk" => Self::Cyberpunk,
            "retro" => Self::Retro,
            "minimal" => Self::Minimal,
            other => {
                log::warn!("unknown theme '{}', using classic", other);
                Self::Classic
            }
        }
    }

    /// Theme name as used in config files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Matrix => "matrix",
            Self::Cyberpunk => "cyberpunk",
            Self::Retro => "retro",
            Self::Minimal => "minimal",
        }
    }
}

/// Motion pattern
///
/// `Wave`, `Spiral` and `Ripple` displace cells at draw time; `Cascade`
/// biases which cells are selected for mutation; `Random` does neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    #[default]
    Random,
    Wave,
    Spiral,
    Ripple,
    Cascade,
}

/// Mutation intensity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
    Extreme,
}

impl Intensity {
    /// Fraction of cells eligible for mutation per tick
    pub fn factor(&self) -> f64 {
        match self {
            Self::Low => 0.02,
            Self::Medium => 0.05,
            Self::High => 0.1,
            Self::Extreme => 0.2,
        }
    }

    /// Multiplier applied to the base tick interval
    pub fn speed_factor(&self) -> f64 {
        match self {
            Self::Low => 2.0,
            Self::Medium => 1.0,
            Self::High => 0.5,
            Self::Extreme => 0.2,
        }
    }
}

/// Directional hint for pointer displacement
///
/// Accepted for interface compatibility; the current pattern set derives its
/// directions from cell positions and does not consume the hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Font configuration
///
/// Only `size` affects the engine (it fixes the glyph cell metrics). The
/// family is advisory, kept for hosts that composite real text on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Font size in pixels; cell width/height derive from it
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "monospace".to_string(),
            size: 16.0,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
    /// Color theme
    pub theme: Theme,
    /// Motion pattern
    pub pattern: Pattern,
    /// Mutation intensity
    pub intensity: Intensity,
    /// Base tick interval in milliseconds, scaled by intensity
    pub base_interval_ms: f64,
    /// Palette override as `#rrggbb` strings; empty or absent keeps the
    /// theme default
    pub palette: Option<Vec<String>>,
    /// Character set override; empty or absent keeps the theme default
    pub charset: Option<String>,
    /// Pointer displacement direction hint
    pub direction: Direction,
    /// Blend mutated colors over several frames instead of snapping
    pub smooth_transitions: bool,
    /// Pause the animation while the pointer is over the surface
    pub pause_on_hover: bool,
    /// Rebuild the grid on (debounced) surface resize
    pub responsive_resize: bool,
    /// Scanline overlay
    pub scanlines: bool,
    /// Pixel noise overlay
    pub noise: bool,
    /// Track pointer position (required by the ripple pattern)
    pub pointer_tracking: bool,
    /// Reduced-computation mode: no off-surface buffering, no noise overlay
    pub performance_mode: bool,
    /// Font settings
    pub font: FontConfig,
    /// Fixed PRNG seed for reproducible output
    pub seed: Option<u32>,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            pattern: Pattern::default(),
            intensity: Intensity::default(),
            base_interval_ms: 50.0,
            palette: None,
            charset: None,
            direction: Direction::default(),
            smooth_transitions: true,
            pause_on_hover: false,
            responsive_resize: true,
            scanlines: false,
            noise: false,
            pointer_tracking: false,
            performance_mode: false,
            font: FontConfig::default(),
            seed: None,
        }
    }
}

impl GlitchConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Effective tick interval in milliseconds
    pub fn effective_interval_ms(&self) -> f64 {
        self.base_interval_ms * self.intensity.speed_factor()
    }

    /// Generate a commented default config file
    pub fn generate_default_config() -> String {
        r##"# Glitch grid configuration

# Color theme: classic, matrix, cyberpunk, retro, minimal
theme = "classic"

# Motion pattern: random, wave, spiral, ripple, cascade
pattern = "random"

# Mutation intensity: low, medium, high, extreme
intensity = "medium"

# Base tick interval in milliseconds (scaled by intensity)
base_interval_ms = 50.0

# Palette override (uncomment to replace the theme palette)
# palette = ["#ff2a6d", "#05d9e8", "#d1f7ff"]

# Character set override
# charset = "01"

# Pointer displacement direction hint: up, down, left, right
direction = "down"

# Blend mutated colors over several frames
smooth_transitions = true

# Pause while the pointer is over the surface
pause_on_hover = false

# Rebuild the grid on surface resize
responsive_resize = true

# Post-processing overlays
scanlines = false
noise = false

# Track pointer position (required by the ripple pattern)
pointer_tracking = false

# Skip off-surface buffering and the noise overlay
performance_mode = false

[font]
family = "monospace"
size = 16.0
"##
        .to_string()
    }
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
}
