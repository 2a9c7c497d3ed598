use futures::channel::oneshot;
use futures::future::FutureExt;
use gloo::render::request_animation_frame;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Animation, Document, Element, FillMode, HtmlElement, KeyframeAnimationOptions};

use crate::animation::keyframes::{Keyframes, Timing};
use crate::error::LightboxError;
use crate::geometry::Rect;
use crate::options::DomOptions;
use crate::surface::{AnimationFinished, NextFrame, OverlayNodes, Surface};
use crate::util::selector::{class_selector, thumbnail_selector};

/// Overlay styling that never changes between transitions.
const OVERLAY_FRAME_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("display", "none"),
    ("overflow", "hidden"),
    ("pointer-events", "none"),
    ("z-index", "1001"),
    ("box-sizing", "border-box"),
];
const OVERLAY_IMAGE_STYLE: &[(&str, &str)] = &[
    ("display", "none"),
    ("width", "100%"),
    ("height", "100%"),
];

/// The live document as an animation surface.
pub struct DomSurface {
    document: Document,
    lightbox_image_id: String,
    backdrop_id: String,
    grid_selector: String,
}

impl DomSurface {
    /// Surface over the current window's document.
    ///
    /// # Errors
    ///
    /// [`LightboxError::Unsupported`] outside a browser window.
    pub fn new(dom: &DomOptions) -> Result<Self, LightboxError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(LightboxError::Unsupported("window.document"))?;
        Ok(Self::with_document(document, dom))
    }

    /// Surface over a specific document.
    #[must_use]
    pub fn with_document(document: Document, dom: &DomOptions) -> Self {
        Self {
            document,
            lightbox_image_id: dom.lightbox_image_id.clone(),
            backdrop_id: dom.backdrop_id.clone(),
            grid_selector: dom.grid_selector.clone(),
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::debug!("bad selector {selector}: {e:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn html(element: &Element) -> Result<&HtmlElement, LightboxError> {
        element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| LightboxError::Dom(format!("<{}> has no style", element.tag_name())))
    }

    fn create_styled(
        &self,
        tag: &str,
        styles: &[(&str, &str)],
    ) -> Result<Element, LightboxError> {
        let element = self.document.create_element(tag)?;
        for (property, value) in styles {
            self.set_style(&element, property, value)?;
        }
        Ok(element)
    }
}

impl Surface for DomSurface {
    type Element = Element;

    fn lightbox_image(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.lightbox_image_id)
    }

    fn backdrop(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.backdrop_id)
    }

    fn find_thumbnail(&self, src: &str) -> Option<Element> {
        let selector = thumbnail_selector(&self.grid_selector, src);
        self.document.query_selector(&selector).ok().flatten()
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        self.query_all(&class_selector(class))
    }

    fn image_source(&self, element: &Element) -> Option<String> {
        if element.tag_name().eq_ignore_ascii_case("img") {
            return element.get_attribute("src");
        }
        element
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|image| image.get_attribute("src"))
    }

    fn rect(&self, element: &Element) -> Rect {
        if !element.is_connected() {
            return Rect::ZERO;
        }
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn is_connected(&self, element: &Element) -> bool {
        element.is_connected()
    }

    fn set_class(
        &self,
        element: &Element,
        class: &str,
        enabled: bool,
    ) -> Result<(), LightboxError> {
        let _ = element.class_list().toggle_with_force(class, enabled)?;
        Ok(())
    }

    fn set_style(
        &self,
        element: &Element,
        property: &str,
        value: &str,
    ) -> Result<(), LightboxError> {
        Self::html(element)?
            .style()
            .set_property(property, value)
            .map_err(LightboxError::from)
    }

    fn set_image_source(&self, element: &Element, src: &str) -> Result<(), LightboxError> {
        element.set_attribute("src", src).map_err(LightboxError::from)
    }

    fn create_overlay(&self, class: &str) -> Result<OverlayNodes<Element>, LightboxError> {
        let body = self
            .document
            .body()
            .ok_or(LightboxError::Unsupported("document.body"))?;
        let frame = self.create_styled("div", OVERLAY_FRAME_STYLE)?;
        frame.set_class_name(class);
        frame.set_attribute("aria-hidden", "true")?;
        let image = self.create_styled("img", OVERLAY_IMAGE_STYLE)?;
        image.set_attribute("alt", "")?;
        let _ = frame.append_child(&image)?;
        let _ = body.append_child(&frame)?;
        Ok(OverlayNodes { frame, image })
    }

    fn animate(
        &self,
        element: &Element,
        keyframes: &Keyframes,
        timing: &Timing,
    ) -> Result<AnimationFinished, LightboxError> {
        let frames = Array::new();
        for keyframe in keyframes.to_css() {
            let frame = Object::new();
            for (property, value) in keyframe {
                let _ = Reflect::set(&frame, &JsValue::from_str(property), &JsValue::from_str(&value))?;
            }
            let _ = frames.push(&frame);
        }

        let options = KeyframeAnimationOptions::new();
        options.set_duration(&JsValue::from_f64(timing.duration_ms()));
        options.set_easing(&timing.easing.to_css());
        options.set_fill(FillMode::Forwards);

        let animation = element.animate_with_keyframe_animation_options(Some(&*frames), &options)?;
        let finished = JsFuture::from(animation.finished()?);
        Ok(async move {
            let _ = finished.await?;
            // The committed style takes over from the filled end state.
            animation.cancel();
            Ok::<(), LightboxError>(())
        }
        .boxed_local())
    }

    fn cancel_animations(&self, element: &Element) -> Result<(), LightboxError> {
        for animation in element.get_animations().iter() {
            let animation: Animation = animation.dyn_into()?;
            animation.cancel();
        }
        Ok(())
    }

    fn remove(&self, element: &Element) -> Result<(), LightboxError> {
        let Some(parent) = element.parent_node() else {
            return Ok(());
        };
        if let Err(e) = parent.remove_child(element) {
            log::debug!("removeChild failed, detaching directly: {e:?}");
            element.remove();
        }
        Ok(())
    }

    fn next_frame(&self) -> NextFrame {
        let (tx, rx) = oneshot::channel();
        let handle = request_animation_frame(move |_| {
            let _ = tx.send(());
        });
        async move {
            // Dropping the handle cancels the request.
            let _handle = handle;
            let _ = rx.await;
        }
        .boxed_local()
    }
}
