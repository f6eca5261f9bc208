use crate::assets::color::Color;
use crate::settings::model::{SettingsPatch, StyleSettings};

/// Named, read-only settings partial offered to users as a starting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    /// Stable identifier, e.g. `"glassmorphism"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Fields overwritten when the preset is applied.
    pub patch: SettingsPatch,
}

impl Preset {
    /// Apply this preset onto `settings`, returning the merged value.
    pub fn apply(&self, settings: &StyleSettings) -> StyleSettings {
        settings.with_patch(&self.patch)
    }
}

const EMPTY: SettingsPatch = SettingsPatch {
    padding: None,
    border_radius: None,
    shadow_intensity: None,
    background_color: None,
    gradient_start: None,
    gradient_end: None,
    use_gradient: None,
    blur_background: None,
    aspect_ratio: None,
};

const fn gradient(padding: f64, radius: f64, shadow: f64, start: Color, end: Color) -> SettingsPatch {
    SettingsPatch {
        padding: Some(padding),
        border_radius: Some(radius),
        shadow_intensity: Some(shadow),
        use_gradient: Some(true),
        gradient_start: Some(start),
        gradient_end: Some(end),
        blur_background: Some(false),
        ..EMPTY
    }
}

const fn solid(padding: f64, radius: f64, shadow: f64, background: Color) -> SettingsPatch {
    SettingsPatch {
        padding: Some(padding),
        border_radius: Some(radius),
        shadow_intensity: Some(shadow),
        background_color: Some(background),
        use_gradient: Some(false),
        blur_background: Some(false),
        ..EMPTY
    }
}

static PRESETS: [Preset; 15] = [
    Preset {
        id: "candy-pop",
        name: "Candy Pop",
        description: "Playful pastel",
        patch: gradient(56.0, 24.0, 30.0, Color::rgb(0xff, 0x9a, 0x9e), Color::rgb(0xfe, 0xcf, 0xef)),
    },
    Preset {
        id: "tropical-burst",
        name: "Tropical Burst",
        description: "Warm and vibrant",
        patch: gradient(60.0, 20.0, 40.0, Color::rgb(0xf6, 0xd3, 0x65), Color::rgb(0xfd, 0xa0, 0x85)),
    },
    Preset {
        id: "glassmorphism",
        name: "Glassmorphism",
        description: "Blurred background with soft shadow",
        patch: SettingsPatch {
            blur_background: Some(true),
            ..gradient(64.0, 24.0, 40.0, Color::rgb(0xa8, 0xed, 0xea), Color::rgb(0xfe, 0xd6, 0xe3))
        },
    },
    Preset {
        id: "soft-lavender",
        name: "Soft Lavender",
        description: "Calm and gentle",
        patch: gradient(52.0, 28.0, 25.0, Color::rgb(0xe0, 0xc3, 0xfc), Color::rgb(0xf0, 0x93, 0xfb)),
    },
    Preset {
        id: "graphite",
        name: "Graphite",
        description: "Modern contrast",
        patch: solid(48.0, 14.0, 35.0, Color::rgb(0x2a, 0x2a, 0x2a)),
    },
    Preset {
        id: "neon-cyber",
        name: "Neon Cyber",
        description: "Neon glow",
        patch: gradient(64.0, 20.0, 55.0, Color::rgb(0x00, 0xf5, 0xff), Color::rgb(0xff, 0x00, 0xff)),
    },
    Preset {
        id: "royal-blue",
        name: "Royal Blue",
        description: "Strong and clean",
        patch: gradient(56.0, 18.0, 30.0, Color::rgb(0x4f, 0xac, 0xfe), Color::rgb(0x00, 0xf2, 0xfe)),
    },
    Preset {
        id: "pearl-light",
        name: "Pearl Light",
        description: "Smooth minimal",
        patch: solid(44.0, 16.0, 18.0, Color::rgb(0xf7, 0xf7, 0xf9)),
    },
    Preset {
        id: "gradient-purple",
        name: "Purple Gradient",
        description: "Teal to purple gradient",
        patch: gradient(56.0, 20.0, 35.0, Color::rgb(0x66, 0x7e, 0xea), Color::rgb(0x76, 0x4b, 0xa2)),
    },
    Preset {
        id: "gradient-sunset",
        name: "Sunset Gradient",
        description: "Pink to orange warmth",
        patch: gradient(56.0, 20.0, 35.0, Color::rgb(0xf0, 0x93, 0xfb), Color::rgb(0xf5, 0x57, 0x6c)),
    },
    Preset {
        id: "minimal-light",
        name: "Minimal Light",
        description: "Clean white background",
        patch: solid(40.0, 12.0, 20.0, Color::WHITE),
    },
    Preset {
        id: "minimal-dark",
        name: "Minimal Dark",
        description: "Clean dark background",
        patch: solid(40.0, 12.0, 25.0, Color::rgb(0x1a, 0x1a, 0x2e)),
    },
    Preset {
        id: "heavy-shadow",
        name: "Heavy Shadow",
        description: "Dramatic drop shadow",
        patch: solid(72.0, 16.0, 60.0, Color::rgb(0xf8, 0xf9, 0xfa)),
    },
    Preset {
        id: "rounded-card",
        name: "Rounded Card",
        description: "Extra rounded corners",
        patch: solid(48.0, 32.0, 30.0, Color::WHITE),
    },
    Preset {
        id: "ocean-gradient",
        name: "Ocean Gradient",
        description: "Blue to teal waves",
        patch: gradient(56.0, 20.0, 30.0, Color::rgb(0x21, 0x93, 0xb0), Color::rgb(0x6d, 0xd5, 0xed)),
    },
];

/// The preset catalog in display order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
#[path = "../../tests/unit/settings/presets.rs"]
mod tests;
