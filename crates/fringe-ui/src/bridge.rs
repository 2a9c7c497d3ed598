//! Bridge between the hosting page and the Dioxus app.
//!
//! **Inbound**: the page lists a campaign through the backend and
//! dispatches `fringe-images` on `window` with the JSON image list as the
//! event detail (a string). Each dispatch replaces the grid's contents.
//!
//! **Environment**: the reduced-motion preference comes from the
//! `prefers-reduced-motion` media query and is tracked live.

use dioxus::signals::{Signal, Writable};
use fringe_lightbox::GalleryImage;
use wasm_bindgen::prelude::*;

const IMAGES_EVENT: &str = "fringe-images";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Inbound listeners ────────────────────────────────────────────────────

/// Register the `fringe-images` listener pushing parsed image lists into
/// `images_sig`. Call once at app startup.
pub fn register_images_listener(mut images_sig: Signal<Vec<GalleryImage>>) {
    let on_images = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(
        move |evt: web_sys::CustomEvent| {
            let Some(json_str) = evt.detail().as_string() else {
                log::warn!("{IMAGES_EVENT} detail is not a string");
                return;
            };
            match GalleryImage::list_from_json(&json_str) {
                Ok(images) => {
                    log::info!("loaded {} images", images.len());
                    images_sig.set(images);
                }
                Err(e) => log::warn!("bad {IMAGES_EVENT} payload: {e}"),
            }
        },
    );
    let Some(window) = web_sys::window() else {
        log::error!("no global window, {IMAGES_EVENT} listener not added");
        return;
    };
    if let Err(e) = window.add_event_listener_with_callback(
        IMAGES_EVENT,
        on_images.as_ref().unchecked_ref(),
    ) {
        log::error!("failed to add {IMAGES_EVENT} listener: {e:?}");
        return;
    }
    on_images.forget();
}

/// Mirror the reduced-motion media query into `reduce_sig`, now and on
/// every change.
pub fn register_reduced_motion_listener(mut reduce_sig: Signal<bool>) {
    let query = web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten());
    let Some(query) = query else {
        log::debug!("matchMedia unavailable, assuming full motion");
        return;
    };
    reduce_sig.set(query.matches());

    let on_change = Closure::<dyn FnMut(web_sys::Event)>::new({
        let query = query.clone();
        move |_evt: web_sys::Event| reduce_sig.set(query.matches())
    });
    if let Err(e) = query
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
    {
        log::debug!("failed to watch {REDUCED_MOTION_QUERY}: {e:?}");
        return;
    }
    on_change.forget();
}

// ── Element lookup ───────────────────────────────────────────────────────

/// The thumbnail image of grid button `index`, or the button itself when
/// it has no image.
pub fn thumbnail_element(index: usize) -> Option<web_sys::Element> {
    let button = web_sys::window()?
        .document()?
        .get_element_by_id(&thumbnail_id(index))?;
    // The grid lookup marks the <img>, so hand that over when it exists.
    match button.query_selector("img") {
        Ok(Some(image)) => Some(image),
        Ok(None) => Some(button),
        Err(e) => {
            log::debug!("thumbnail {index} image lookup failed: {e:?}");
            Some(button)
        }
    }
}

/// DOM id of the grid button for image `index`.
pub fn thumbnail_id(index: usize) -> String {
    format!("thumb-{index}")
}
