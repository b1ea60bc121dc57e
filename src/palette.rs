//! Colour roles
//!
//! The renderer asks for colours by role; the palette maps roles to CSS
//! colour strings. Overrides can be persisted separately from scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;

/// Semantic colour slots used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    SkyTop,
    SkyBottom,
    Cloud,
    Ice,
    IceShadow,
    IceCrack,
    Shadow,
    Penguin,
    PenguinBelly,
    Beak,
    Eye,
    Flipper,
    Spike,
    SpikeHighlight,
    Fish,
    FishEye,
}

impl ColorRole {
    pub const ALL: [ColorRole; 16] = [
        ColorRole::SkyTop,
        ColorRole::SkyBottom,
        ColorRole::Cloud,
        ColorRole::Ice,
        ColorRole::IceShadow,
        ColorRole::IceCrack,
        ColorRole::Shadow,
        ColorRole::Penguin,
        ColorRole::PenguinBelly,
        ColorRole::Beak,
        ColorRole::Eye,
        ColorRole::Flipper,
        ColorRole::Spike,
        ColorRole::SpikeHighlight,
        ColorRole::Fish,
        ColorRole::FishEye,
    ];

    /// Built-in colour for this role
    pub fn default_color(&self) -> &'static str {
        match self {
            ColorRole::SkyTop => "#81caff",
            ColorRole::SkyBottom => "#e8f6ff",
            ColorRole::Cloud => "#b4dfff",
            ColorRole::Ice => "#dff3ff",
            ColorRole::IceShadow => "#a9d6f2",
            ColorRole::IceCrack => "rgba(12, 45, 76, 0.25)",
            ColorRole::Shadow => "rgba(0,0,0,0.15)",
            ColorRole::Penguin => "#1b2a4a",
            ColorRole::PenguinBelly => "#f4f8ff",
            ColorRole::Beak => "#f7a21b",
            ColorRole::Eye => "#0b1b35",
            ColorRole::Flipper => "#0d1729",
            ColorRole::Spike => "#b9e4ff",
            ColorRole::SpikeHighlight => "#e9f7ff",
            ColorRole::Fish => "#ff8c42",
            ColorRole::FishEye => "#ffd6a1",
        }
    }
}

/// Role → colour mapping; roles without an override use their default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default)]
    pub overrides: BTreeMap<ColorRole, String>,
}

impl Palette {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "super_penguin_palette";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self, role: ColorRole) -> &str {
        self.overrides
            .get(&role)
            .map(String::as_str)
            .unwrap_or_else(|| role.default_color())
    }

    pub fn set(&mut self, role: ColorRole, color: impl Into<String>) {
        self.overrides.insert(role, color.into());
    }

    /// Load overrides from storage, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<Palette>(&json) {
                Ok(palette) => {
                    log::info!("Loaded {} palette overrides", palette.overrides.len());
                    return palette;
                }
                Err(e) => log::warn!("Ignoring malformed palette: {}", e),
            }
        }
        Self::default()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set(Self::STORAGE_KEY, &json);
            log::info!("Palette saved");
        }
    }
}
