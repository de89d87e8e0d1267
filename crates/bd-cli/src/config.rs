//! Configuration loading and management.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bd_core::{AttributeSet, BurnDirection, TrackedAttribute, Unit};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// An extra tracked attribute, as written in configuration.
///
/// The unit arrives as a string and is validated when the attribute set is
/// built; anything but `hours` or `points` is rejected there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedAttributeConfig {
    /// The item field name to track.
    pub name: String,
    /// The unit the field is measured in (`hours` or `points`).
    pub unit: String,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Which way charts burn. Recorded on every report; the computation
    /// itself is direction-agnostic.
    #[serde(default)]
    pub burn_direction: BurnDirection,

    /// Attributes tracked in addition to the standard pair.
    #[serde(default)]
    pub tracked_attributes: Vec<TrackedAttributeConfig>,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (BD_*)
        figment = figment.merge(Env::prefixed("BD_"));

        figment.extract()
    }

    /// The attribute set reports are built against: the standard pair plus
    /// any configured extras. Fails on an unsupported unit string or a
    /// duplicated attribute name.
    pub fn attribute_set(&self) -> anyhow::Result<AttributeSet> {
        let mut attributes: Vec<TrackedAttribute> =
            AttributeSet::default().iter().cloned().collect();
        for extra in &self.tracked_attributes {
            let unit: Unit = extra
                .unit
                .parse()
                .with_context(|| format!("tracked attribute '{}'", extra.name))?;
            attributes.push(TrackedAttribute::new(&extra.name, unit));
        }
        AttributeSet::new(attributes).context("invalid tracked attribute configuration")
    }
}

/// Returns the platform-specific config directory for bd.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bd"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_burns_down() {
        let config = Config::default();
        assert_eq!(config.burn_direction, BurnDirection::Down);
        assert!(config.tracked_attributes.is_empty());
    }

    #[test]
    fn default_attribute_set_is_the_standard_pair() {
        let set = Config::default().attribute_set().unwrap();
        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["remaining_hours", "story_points"]);
    }

    #[test]
    fn config_file_overrides_default() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "burn_direction = \"up\"").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.burn_direction, BurnDirection::Up);
    }

    #[test]
    fn env_overrides_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "burn_direction = \"down\"")?;
            jail.set_env("BD_BURN_DIRECTION", "up");

            let config = Config::load_from(Some(Path::new("config.toml")))?;
            assert_eq!(config.burn_direction, BurnDirection::Up);
            Ok(())
        });
    }

    #[test]
    fn invalid_direction_in_config_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "burn_direction = \"sideways\"").unwrap();

        assert!(Config::load_from(Some(&path)).is_err());
    }

    #[test]
    fn extra_tracked_attributes_merge_with_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[[tracked_attributes]]\nname = \"velocity\"\nunit = \"points\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        let set = config.attribute_set().unwrap();

        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["remaining_hours", "story_points", "velocity"]);
        assert_eq!(set.unit_for("velocity"), Some(Unit::Points));
    }

    #[test]
    fn unsupported_unit_in_config_is_an_error() {
        let config = Config {
            burn_direction: BurnDirection::Down,
            tracked_attributes: vec![TrackedAttributeConfig {
                name: "cycle_time".to_string(),
                unit: "days".to_string(),
            }],
        };

        let err = config.attribute_set().unwrap_err();
        assert!(format!("{err:#}").contains("unsupported unit 'days'"));
    }

    #[test]
    fn duplicated_tracked_attribute_is_an_error() {
        let config = Config {
            burn_direction: BurnDirection::Down,
            tracked_attributes: vec![TrackedAttributeConfig {
                name: "remaining_hours".to_string(),
                unit: "hours".to_string(),
            }],
        };

        let err = config.attribute_set().unwrap_err();
        assert!(format!("{err:#}").contains("tracked more than once"));
    }
}
