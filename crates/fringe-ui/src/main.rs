// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]

//! Dioxus web app for the Fringe Matrix gallery.
//!
//! Renders the campaign grid and the lightbox, and wires both to the
//! `fringe-lightbox` animator. The hosting page feeds image lists in
//! through the bridge.

mod bridge;
mod state;

use dioxus::prelude::*;
use fringe_lightbox::web::{init_logging, DomSurface};
use fringe_lightbox::{GalleryState, LightboxAnimator, LightboxOptions};

use crate::state::GallerySignals;

type Animator = LightboxAnimator<DomSurface, GallerySignals>;

fn main() {
    init_logging(log::Level::Info);
    dioxus::launch(app);
}

fn app() -> Element {
    let gallery = GallerySignals::use_new();
    let options = use_hook(LightboxOptions::default);
    let animator: Signal<Option<Animator>> = use_signal(|| {
        match DomSurface::new(&options.dom) {
            Ok(surface) => Some(LightboxAnimator::new(surface, gallery, options.clone())),
            Err(e) => {
                log::error!("lightbox transitions disabled: {e}");
                None
            }
        }
    });

    // Register page listeners once on mount.
    use_hook(move || {
        bridge::register_images_listener(gallery.images);
        bridge::register_reduced_motion_listener(gallery.reduce_motion);
    });

    // Runs after each commit that touched the open flag or index.
    use_effect(move || {
        let animator = animator.read();
        let Some(animator) = animator.as_ref() else {
            return;
        };
        if let Some(effect) = animator.commit() {
            let _ = spawn(effect);
        }
    });

    use_drop(move || {
        if let Some(animator) = animator.peek().as_ref() {
            animator.teardown();
        }
    });

    let open_at = move |index: usize| {
        let thumb = bridge::thumbnail_element(index);
        match animator.read().as_ref() {
            Some(animator) => animator.open_lightbox(index, thumb.as_ref()),
            None => {
                gallery.set_lightbox_index(index);
                gallery.set_lightbox_open(true);
            }
        }
    };
    let close = move |()| match animator.read().as_ref() {
        Some(animator) => {
            let _ = spawn(animator.close_lightbox());
        }
        None => gallery.set_lightbox_open(false),
    };

    rsx! {
        Grid { gallery, on_open: open_at }
        if *gallery.open.read() {
            Lightbox {
                gallery,
                backdrop_id: options.dom.backdrop_id.clone(),
                image_id: options.dom.lightbox_image_id.clone(),
                on_close: close,
            }
        }
    }
}

/// The campaign grid. Each thumbnail opens the lightbox at its index.
#[component]
fn Grid(gallery: GallerySignals, on_open: EventHandler<usize>) -> Element {
    let images = gallery.images.read();
    if images.is_empty() {
        return rsx! {
            div { class: "gallery-empty", "No images in this campaign yet." }
        };
    }
    rsx! {
        div { class: "gallery-grid",
            for (index, image) in images.iter().enumerate() {
                button {
                    key: "{image.file_name}",
                    id: bridge::thumbnail_id(index),
                    class: "gallery-thumb",
                    r#type: "button",
                    onclick: move |_| on_open.call(index),
                    if let Some(src) = &image.src {
                        img { src: "{src}", alt: "{image.file_name}", loading: "lazy" }
                    } else {
                        span { class: "gallery-missing", "{image.file_name}" }
                    }
                }
            }
        }
    }
}

/// Backdrop, large image and navigation. Clicking the backdrop closes.
#[component]
fn Lightbox(
    gallery: GallerySignals,
    backdrop_id: String,
    image_id: String,
    on_close: EventHandler<()>,
) -> Element {
    let index = *gallery.index.read();
    let image = gallery.image(index);
    let visibility = if *gallery.hide_image.read() { "hidden" } else { "visible" };
    let navigate = move |forward: bool| {
        if let Some(next) = gallery.step(forward) {
            gallery.set_lightbox_index(next);
        }
    };

    rsx! {
        div {
            id: "{backdrop_id}",
            class: "lightbox",
            onclick: move |_| on_close.call(()),
            if let Some(src) = image.as_ref().and_then(|image| image.src.clone()) {
                img {
                    id: "{image_id}",
                    class: "lightbox-image",
                    src: "{src}",
                    style: "visibility: {visibility}",
                    onclick: move |evt| evt.stop_propagation(),
                }
            }
            button {
                class: "lightbox-prev",
                r#type: "button",
                onclick: move |evt| {
                    evt.stop_propagation();
                    navigate(false);
                },
                "‹"
            }
            button {
                class: "lightbox-next",
                r#type: "button",
                onclick: move |evt| {
                    evt.stop_propagation();
                    navigate(true);
                },
                "›"
            }
        }
    }
}
