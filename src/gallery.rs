//! The gallery state the animator reads and mutates.
//!
//! The animator never stores `images`, the open flag or the active index
//! itself. It reads them through [`GalleryState`] and requests changes
//! through the setters, so the host decides how state is kept (signals,
//! reducers, plain cells).

use serde::{Deserialize, Serialize};

/// One image of the current campaign, as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    /// CDN URL. `None` while the listing has no public URL for the blob.
    pub src: Option<String>,
    /// Blob file name, used for captions and keys.
    pub file_name: String,
}

impl GalleryImage {
    /// Image with a resolved URL.
    pub fn new(src: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            file_name: file_name.into(),
        }
    }

    /// Parse the backend's JSON image list.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }
}

/// Owner of the gallery/lightbox state.
///
/// Setters are fire-and-forget requests: the new value may only become
/// visible through the getters after the host's next commit.
pub trait GalleryState: 'static {
    /// Image at `index`, if any.
    fn image(&self, index: usize) -> Option<GalleryImage>;
    /// Number of images in the current set.
    fn image_count(&self) -> usize;
    /// Whether the lightbox is open.
    fn is_lightbox_open(&self) -> bool;
    /// Index of the image shown in the lightbox.
    fn lightbox_index(&self) -> usize;
    /// Whether the user asked for reduced motion.
    fn reduce_motion(&self) -> bool;
    /// Request a new lightbox index.
    fn set_lightbox_index(&self, index: usize);
    /// Request the lightbox open or closed.
    fn set_lightbox_open(&self, open: bool);
    /// Request the large lightbox image hidden (while a proxy stands in
    /// for it) or shown.
    fn set_hide_lightbox_image(&self, hide: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_listing() {
        let json = r#"[
            {"src": "https://cdn.example/c1/a.jpg", "fileName": "a.jpg"},
            {"src": null, "fileName": "pending.jpg"}
        ]"#;
        let images = GalleryImage::list_from_json(json).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], GalleryImage::new("https://cdn.example/c1/a.jpg", "a.jpg"));
        assert_eq!(images[1].src, None);
        assert_eq!(images[1].file_name, "pending.jpg");
    }

    #[test]
    fn missing_file_name_is_rejected() {
        assert!(GalleryImage::list_from_json(r#"[{"src": "a"}]"#).is_err());
    }
}
