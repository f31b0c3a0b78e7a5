//! Runtime configuration with TOML preset support.
//!
//! All tweakable settings (camera sensitivity, projection, display
//! toggles) are consolidated here. Options serialize to/from TOML for
//! view presets; a JSON Schema describes the UI-exposed subset.

mod camera;
mod display;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and sensitivity parameters.
    pub camera: CameraOptions,
    /// Display toggles.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewError> {
        let content = std::fs::read_to_string(path).map_err(ViewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
angle_factor = 0.02
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.angle_factor, 0.02);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.camera.zoom_factor, 1.0);
        assert!(!opts.display.show_floor);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("display"));

        // Exposed camera fields are present, skipped ones absent
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("angle_factor").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("initial_elevation").is_none());
    }
}
