use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::hotkey::Hotkey;

const APP_DIR: &str = "fixfont";
const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeySettings {
    /// Re-applies the font fix to the game window
    pub fix_font: Hotkey,
    /// Brings the tool's own window to the front
    pub show_me: Hotkey,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            fix_font: Hotkey::DEFAULT_FIX,
            show_me: Hotkey::DEFAULT_SHOW,
        }
    }
}

impl HotkeySettings {
    /// Replace any hotkey that can't be registered with its default.
    pub fn sanitized(self) -> Self {
        Self {
            fix_font: valid_or_default("fix_font", self.fix_font, Hotkey::DEFAULT_FIX),
            show_me: valid_or_default("show_me", self.show_me, Hotkey::DEFAULT_SHOW),
        }
    }
}

fn valid_or_default(name: &str, hotkey: Hotkey, default: Hotkey) -> Hotkey {
    if hotkey.is_valid() {
        hotkey
    } else {
        warn!(
            "Stored {name} hotkey {:?} is not usable, falling back to {default}",
            hotkey.to_setting()
        );
        default
    }
}

impl std::fmt::Display for HotkeySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fix Font: {}", describe(&self.fix_font))?;
        writeln!(f, "Show Me: {}", describe(&self.show_me))?;
        Ok(())
    }
}

fn describe(hotkey: &Hotkey) -> String {
    if hotkey.is_valid() {
        hotkey.to_string()
    } else {
        format!("{hotkey} (invalid)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hotkeys: HotkeySettings,
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "------------------------------")?;
        writeln!(f, "Hotkeys:")?;
        write!(f, "{}", self.hotkeys)?;
        Ok(())
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_settings_path())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_settings_path())
    }

    pub fn load_from(settings_path: &Path) -> Result<Self> {
        if settings_path.exists() {
            let contents =
                fs::read_to_string(settings_path).context("Failed to read settings file")?;
            let settings: Settings =
                serde_json::from_str(&contents).context("Failed to parse settings")?;
            debug!("Loaded settings from {:?}", settings_path);
            Ok(settings)
        } else {
            info!("No settings file found, using defaults");
            let settings = Settings::default();
            // Try to save defaults, but don't fail if we can't
            if let Err(e) = settings.save_to(settings_path) {
                warn!("Could not write default settings: {e:#}");
            }
            Ok(settings)
        }
    }

    pub fn save_to(&self, settings_path: &Path) -> Result<()> {
        // Ensure the config directory exists
        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(settings_path, json).context("Failed to write settings file")?;

        debug!("Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn get_settings_path() -> PathBuf {
        if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(config_dir)
                .join(APP_DIR)
                .join(SETTINGS_FILENAME)
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join(APP_DIR)
                .join(SETTINGS_FILENAME)
        } else {
            // Fallback to current directory
            PathBuf::from(".").join(SETTINGS_FILENAME)
        }
    }
}
