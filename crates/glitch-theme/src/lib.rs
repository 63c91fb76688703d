//! Bundled themes and theme resolution
//!
//! Each theme carries a default palette, a default glyph character set, and
//! the visual modifiers the renderer applies for it. Callers can override
//! palette and charset; overrides always win when they are non-empty, and
//! fall back to the theme default (never an empty set) when they are not.

use glitch_core::color::{self, Rgb};
use glitch_core::Theme;

/// Bundled theme data
pub struct ThemeDef {
    pub name: &'static str,
    pub palette: &'static [Rgb],
    pub charset: &'static str,
    /// Draw a glow halo around glyphs
    pub glow: bool,
    /// Oscillate per-glyph alpha over time
    pub alpha_oscillation: bool,
}

/// Classic theme - cool terminal grays with a blue accent
pub const CLASSIC: ThemeDef = ThemeDef {
    name: "classic",
    palette: &[
        Rgb::new(224, 224, 224),
        Rgb::new(160, 160, 176),
        Rgb::new(96, 112, 128),
        Rgb::new(255, 255, 255),
        Rgb::new(90, 140, 255),
    ],
    charset: "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%&*+=?",
    glow: false,
    alpha_oscillation: false,
};

/// Matrix theme - phosphor greens, katakana rain
pub const MATRIX: ThemeDef = ThemeDef {
    name: "matrix",
    palette: &[
        Rgb::new(0, 255, 65),
        Rgb::new(0, 184, 46),
        Rgb::new(0, 143, 17),
        Rgb::new(128, 255, 159),
        Rgb::new(0, 59, 0),
    ],
    charset: "アイウエオカキクケコサシスセソタチツテト0123456789",
    glow: true,
    alpha_oscillation: false,
};

/// Cyberpunk theme - neon pink/cyan with flicker
pub const CYBERPUNK: ThemeDef = ThemeDef {
    name: "cyberpunk",
    palette: &[
        Rgb::new(255, 42, 109),
        Rgb::new(5, 217, 232),
        Rgb::new(209, 247, 255),
        Rgb::new(249, 240, 2),
        Rgb::new(166, 99, 204),
    ],
    charset: "01<>/\\|{}[]=+*#@$%&!?",
    glow: true,
    alpha_oscillation: true,
};

/// Retro theme - amber monochrome blocks
pub const RETRO: ThemeDef = ThemeDef {
    name: "retro",
    palette: &[
        Rgb::new(255, 176, 0),
        Rgb::new(255, 136, 0),
        Rgb::new(204, 102, 0),
        Rgb::new(255, 210, 128),
    ],
    charset: "█▓▒░▄▀▌▐■0123456789",
    glow: false,
    alpha_oscillation: false,
};

/// Minimal theme - sparse monochrome dots
pub const MINIMAL: ThemeDef = ThemeDef {
    name: "minimal",
    palette: &[
        Rgb::new(51, 51, 51),
        Rgb::new(102, 102, 102),
        Rgb::new(153, 153, 153),
        Rgb::new(204, 204, 204),
    ],
    charset: ".:·°∙○●+x",
    glow: false,
    alpha_oscillation: false,
};

/// All bundled themes
pub const ALL_THEMES: &[&ThemeDef] = &[&CLASSIC, &MATRIX, &CYBERPUNK, &RETRO, &MINIMAL];

/// Get the bundled definition for a theme
pub fn theme_def(theme: Theme) -> &'static ThemeDef {
    match theme {
        Theme::Classic => &CLASSIC,
        Theme::Matrix => &MATRIX,
        Theme::Cyberpunk => &CYBERPUNK,
        Theme::Retro => &RETRO,
        Theme::Minimal => &MINIMAL,
    }
}

/// A theme with overrides applied, ready for the renderer
///
/// Both `palette` and `charset` are guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    pub name: &'static str,
    pub palette: Vec<Rgb>,
    pub charset: Vec<char>,
    pub glow: bool,
    pub alpha_oscillation: bool,
}

/// Resolve a theme, applying caller overrides
///
/// Overrides take precedence over the theme defaults. An override that
/// resolves to an empty set (no entries, or no parseable colors) is invalid
/// configuration and falls back to the theme default for that value.
pub fn resolve(
    theme: Theme,
    palette_override: Option<&[String]>,
    charset_override: Option<&str>,
) -> ResolvedTheme {
    let def = theme_def(theme);

    let palette = match palette_override {
        Some(entries) => {
            let parsed: Vec<Rgb> = entries
                .iter()
                .filter_map(|entry| {
                    let rgb = color::parse_hex(entry);
                    if rgb.is_none() {
                        log::warn!("ignoring unparseable palette color '{}'", entry);
                    }
                    rgb
                })
                .collect();
            if parsed.is_empty() {
                log::warn!("empty palette override, using {} defaults", def.name);
                def.palette.to_vec()
            } else {
                parsed
            }
        }
        None => def.palette.to_vec(),
    };

    let charset = match charset_override {
        Some(chars) if !chars.is_empty() => chars.chars().collect(),
        Some(_) => {
            log::warn!("empty charset override, using {} defaults", def.name);
            def.charset.chars().collect()
        }
        None => def.charset.chars().collect(),
    };

    ResolvedTheme {
        name: def.name,
        palette,
        charset,
        glow: def.glow,
        alpha_oscillation: def.alpha_oscillation,
    }
}
