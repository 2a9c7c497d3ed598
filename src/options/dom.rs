use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ids, classes and selectors linking the animator to the page markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Markup", inline)]
#[serde(default)]
pub struct DomOptions {
    /// Id of the lightbox's large image.
    pub lightbox_image_id: String,
    /// Id of the lightbox backdrop container.
    pub backdrop_id: String,
    /// Selector scoping thumbnail lookups to the grid.
    pub grid_selector: String,
    /// Class marking the thumbnail currently shown large.
    pub active_class: String,
    /// Class of the wireframe overlay.
    pub wireframe_class: String,
}

impl Default for DomOptions {
    fn default() -> Self {
        Self {
            lightbox_image_id: "lightbox-image".to_owned(),
            backdrop_id: "lightbox-backdrop".to_owned(),
            grid_selector: ".gallery-grid".to_owned(),
            active_class: "lightbox-active".to_owned(),
            wireframe_class: "wireframe-rect".to_owned(),
        }
    }
}
