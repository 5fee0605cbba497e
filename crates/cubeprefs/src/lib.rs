//! User preferences.
//!
//! Preferences are stored as YAML. Missing fields are filled in from the
//! bundled `default.yaml`.

#![allow(missing_docs)] // fields are documented on the structs that matter

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

mod animation;
mod interaction;

pub use animation::*;
pub use interaction::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
}
impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}
impl Preferences {
    /// Loads preferences from `user_file`, layered over the defaults. If
    /// loading fails, logs a warning and returns the default preferences.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e:#}");
            Self::default()
        })
    }

    /// Loads preferences from `user_file`, layered over the defaults.
    pub fn try_load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = user_file {
            log::debug!("Loading preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }
        let mut prefs: Self = config
            .build()
            .and_then(|c| c.try_deserialize())
            .wrap_err("error reading preferences")?;
        prefs.sanitize();
        Ok(prefs)
    }

    /// Parses preferences from a YAML string, layered over the defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let mut prefs: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT))
            .add_source(config::File::from_str(s, PREFS_FILE_FORMAT))
            .build()
            .and_then(|c| c.try_deserialize())
            .wrap_err("error parsing preferences")?;
        prefs.sanitize();
        Ok(prefs)
    }

    /// Serializes the preferences to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Saves the preferences to a YAML file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        Ok(())
    }

    /// Replaces values that would stall or break the animation with their
    /// defaults.
    fn sanitize(&mut self) {
        let defaults = &DEFAULT_PREFS;
        let anim = &mut self.animation;
        if !(anim.turn_speed.is_finite() && anim.turn_speed > 0.0) {
            log::warn!(
                "Invalid turn speed {}; using default {}",
                anim.turn_speed,
                defaults.animation.turn_speed,
            );
            anim.turn_speed = defaults.animation.turn_speed;
        }
        if !(anim.max_speedup.is_finite() && anim.max_speedup >= 1.0) {
            log::warn!("Invalid max speedup {}; using default", anim.max_speedup);
            anim.max_speedup = defaults.animation.max_speedup;
        }
        let interaction = &mut self.interaction;
        if !(interaction.drag_threshold.is_finite() && interaction.drag_threshold >= 0.0) {
            log::warn!(
                "Invalid drag threshold {}; using default",
                interaction.drag_threshold,
            );
            interaction.drag_threshold = defaults.interaction.drag_threshold;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs() {
        let prefs = Preferences::default();
        assert_eq!(prefs.animation.turn_speed, 8.0);
        assert!(!prefs.animation.dynamic_turn_speed);
        assert_eq!(prefs.interaction.drag_threshold, 75.0);
    }

    #[test]
    fn test_partial_yaml_is_layered_over_defaults() {
        let prefs = Preferences::from_yaml_str("animation:\n  turn_speed: 20.0\n").unwrap();
        assert_eq!(prefs.animation.turn_speed, 20.0);
        assert_eq!(prefs.animation.max_speedup, DEFAULT_PREFS.animation.max_speedup);
        assert_eq!(prefs.interaction, DEFAULT_PREFS.interaction);
    }

    #[test]
    fn test_invalid_values_are_replaced() {
        let prefs = Preferences::from_yaml_str(
            "animation:\n  turn_speed: -1.0\ninteraction:\n  drag_threshold: -5.0\n",
        )
        .unwrap();
        assert_eq!(prefs.animation.turn_speed, DEFAULT_PREFS.animation.turn_speed);
        assert_eq!(
            prefs.interaction.drag_threshold,
            DEFAULT_PREFS.interaction.drag_threshold,
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("cubeturn.yaml");
        let mut prefs = Preferences::default();
        prefs.animation.dynamic_turn_speed = true;
        prefs.interaction.drag_threshold = 50.0;
        prefs.save(&path).unwrap();
        assert_eq!(Preferences::try_load(Some(path.as_path())).unwrap(), prefs);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.yaml");
        assert!(Preferences::try_load(Some(path.as_path())).is_err());
        assert_eq!(Preferences::load(Some(path.as_path())), Preferences::default());
    }

    #[test]
    fn test_speedup() {
        let mut anim = Preferences::default().animation;
        assert_eq!(anim.speedup(5), 1.0);
        anim.dynamic_turn_speed = true;
        assert_eq!(anim.speedup(1), 1.0);
        assert!((anim.speedup(2) - std::f32::consts::E).abs() < 1e-5);
        assert_eq!(anim.speedup(10), anim.max_speedup);
    }
}
