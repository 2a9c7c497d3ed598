//! Lightbox transition options with TOML preset support.
//!
//! Timing, curves and colours live in [`MotionOptions`]; the ids and classes
//! tying the animator to the page markup live in [`DomOptions`]. Options
//! serialize to/from TOML so a deployment can retune the zoom without a
//! rebuild.

mod dom;
mod motion;

use std::path::Path;

pub use dom::DomOptions;
pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LightboxError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct LightboxOptions {
    /// Transition timing and colours.
    pub motion: MotionOptions,
    /// Page markup hooks.
    #[schemars(skip)]
    pub dom: DomOptions,
}

impl LightboxOptions {
    /// Generate JSON Schema describing the tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(LightboxOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, LightboxError> {
        toml::from_str(content)
            .map_err(|e| LightboxError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LightboxError> {
        let content =
            std::fs::read_to_string(path).map_err(LightboxError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LightboxError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LightboxError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LightboxError::Io)?;
        }
        std::fs::write(path, content).map_err(LightboxError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = LightboxOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: LightboxOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r##"
[motion]
zoom_ms = 500
zoom_easing = "ease_out"

[dom]
grid_selector = "#grid"
"##;
        let opts = LightboxOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.motion.zoom_ms, 500);
        assert_eq!(opts.motion.zoom_easing, EasingFunction::EaseOut);
        assert_eq!(opts.dom.grid_selector, "#grid");
        // Everything else should be default
        assert_eq!(opts.motion.measure_frames, 3);
        assert_eq!(opts.dom.wireframe_class, "wireframe-rect");
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let err = LightboxOptions::from_toml("[motion]\nzoom_ms = \"slow\"")
            .unwrap_err();
        assert!(matches!(err, LightboxError::OptionsParse(_)));
    }

    #[test]
    fn measure_budget_is_at_least_one_frame() {
        let mut motion = MotionOptions::default();
        motion.measure_frames = 0;
        assert_eq!(motion.measure_budget(), 1);
        motion.measure_frames = 4;
        assert_eq!(motion.measure_budget(), 4);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("fringe-lightbox-opts-{}", std::process::id()));
        let path = dir.join("lightbox.toml");
        let mut opts = LightboxOptions::default();
        opts.motion.dim_in_ms = 120;
        opts.save(&path).unwrap();
        let loaded = LightboxOptions::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_exposes_motion_only() {
        let schema_value =
            serde_json::to_value(LightboxOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("motion"));
        assert!(!props.contains_key("dom"));

        let motion = &props["motion"]["properties"];
        assert!(motion.get("zoom_ms").is_some());
        assert!(motion.get("dim_color").is_none());
    }
}
