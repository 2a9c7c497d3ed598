//! In-memory surface and gallery used by the unit tests.
//!
//! `MockDom` records every animation and frame request. Frames only fire
//! when a test calls [`MockDom::tick`], and animations finish immediately,
//! fail, refuse to start, or wait for [`MockDom::finish_animations`]
//! depending on [`AnimateMode`].

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::{self, FutureExt};

use crate::animation::keyframes::{Keyframes, Timing};
use crate::error::LightboxError;
use crate::gallery::{GalleryImage, GalleryState};
use crate::geometry::Rect;
use crate::surface::{AnimationFinished, NextFrame, OverlayNodes, Surface};

/// Node handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Debug, Default)]
struct Node {
    rect: Rect,
    scripted_rects: VecDeque<Rect>,
    src: Option<String>,
    child_image: Option<NodeId>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    connected: bool,
    thumbnail: bool,
}

/// How `animate` behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimateMode {
    /// Finished resolves right away.
    Immediate,
    /// Starts, then finishes with an error.
    Fail,
    /// Refuses to start.
    Unsupported,
    /// Finished resolves on `finish_animations`.
    Manual,
}

/// One recorded `animate` call.
#[derive(Debug, Clone)]
pub(crate) struct AnimateCall {
    pub(crate) element: NodeId,
    pub(crate) keyframes: Keyframes,
    pub(crate) timing: Timing,
}

pub(crate) struct MockDom {
    nodes: RefCell<Vec<Node>>,
    lightbox_image: Cell<Option<NodeId>>,
    backdrop: Cell<Option<NodeId>>,
    calls: RefCell<Vec<AnimateCall>>,
    mode: Cell<AnimateMode>,
    running: RefCell<Vec<oneshot::Sender<Result<(), LightboxError>>>>,
    frames: RefCell<Vec<oneshot::Sender<()>>>,
    frame_requests: Cell<usize>,
    overlays_created: Cell<usize>,
    cancelled: Cell<usize>,
    fail_removal: Cell<bool>,
    fail_classes: Cell<bool>,
}

impl MockDom {
    pub(crate) fn new() -> Self {
        Self {
            nodes: RefCell::new(Vec::new()),
            lightbox_image: Cell::new(None),
            backdrop: Cell::new(None),
            calls: RefCell::new(Vec::new()),
            mode: Cell::new(AnimateMode::Immediate),
            running: RefCell::new(Vec::new()),
            frames: RefCell::new(Vec::new()),
            frame_requests: Cell::new(0),
            overlays_created: Cell::new(0),
            cancelled: Cell::new(0),
            fail_removal: Cell::new(false),
            fail_classes: Cell::new(false),
        }
    }

    fn add(&self, node: Node) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        NodeId(nodes.len() - 1)
    }

    /// Grid thumbnail `<img>` with the given URL and rect.
    pub(crate) fn add_thumbnail(&self, src: &str, rect: Rect) -> NodeId {
        self.add(Node {
            rect,
            src: Some(src.to_owned()),
            connected: true,
            thumbnail: true,
            ..Node::default()
        })
    }

    /// Wrapper element (e.g. a button) around an image node.
    pub(crate) fn add_wrapper(&self, image: NodeId, rect: Rect) -> NodeId {
        self.add(Node {
            rect,
            child_image: Some(image),
            connected: true,
            ..Node::default()
        })
    }

    /// Mount the lightbox image and backdrop.
    pub(crate) fn mount_lightbox(&self, image_rect: Rect) -> (NodeId, NodeId) {
        let image = self.add(Node {
            rect: image_rect,
            connected: true,
            ..Node::default()
        });
        let backdrop = self.add(Node {
            connected: true,
            ..Node::default()
        });
        self.lightbox_image.set(Some(image));
        self.backdrop.set(Some(backdrop));
        (image, backdrop)
    }

    pub(crate) fn unmount_lightbox(&self) {
        self.lightbox_image.set(None);
        self.backdrop.set(None);
    }

    pub(crate) fn set_rect(&self, id: NodeId, rect: Rect) {
        self.nodes.borrow_mut()[id.0].rect = rect;
    }

    /// Rects returned by the next reads of `id`, before falling back to
    /// its stored rect.
    pub(crate) fn script_rects(&self, id: NodeId, rects: &[Rect]) {
        self.nodes.borrow_mut()[id.0]
            .scripted_rects
            .extend(rects.iter().copied());
    }

    pub(crate) fn set_mode(&self, mode: AnimateMode) {
        self.mode.set(mode);
    }

    pub(crate) fn fail_removal(&self) {
        self.fail_removal.set(true);
    }

    pub(crate) fn fail_classes(&self) {
        self.fail_classes.set(true);
    }

    pub(crate) fn detach(&self, id: NodeId) {
        self.nodes.borrow_mut()[id.0].connected = false;
    }

    pub(crate) fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes.borrow()[id.0].classes.contains(class)
    }

    pub(crate) fn add_class(&self, id: NodeId, class: &str) {
        let _ = self.nodes.borrow_mut()[id.0].classes.insert(class.to_owned());
    }

    pub(crate) fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[id.0].styles.get(property).cloned()
    }

    pub(crate) fn connected(&self, id: NodeId) -> bool {
        self.nodes.borrow()[id.0].connected
    }

    /// Connected nodes carrying `class`.
    pub(crate) fn count_with_class(&self, class: &str) -> usize {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| n.connected && n.classes.contains(class))
            .count()
    }

    pub(crate) fn calls(&self) -> Vec<AnimateCall> {
        self.calls.borrow().clone()
    }

    /// Recorded geometry animations as (from, to).
    pub(crate) fn geometry_calls(&self) -> Vec<(Rect, Rect)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c.keyframes {
                Keyframes::Geometry { from, to, .. } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    /// Recorded backdrop animations, `true` for dimming.
    pub(crate) fn backdrop_calls(&self) -> Vec<bool> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c.keyframes {
                Keyframes::BackgroundColor { from, to } => Some(to.a > from.a),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn frame_requests(&self) -> usize {
        self.frame_requests.get()
    }

    /// Frame requests whose future is still alive.
    pub(crate) fn pending_frames(&self) -> usize {
        self.frames
            .borrow()
            .iter()
            .filter(|tx| !tx.is_canceled())
            .count()
    }

    /// Fire every pending frame. Returns how many were delivered.
    pub(crate) fn tick(&self) -> usize {
        let frames: Vec<_> = self.frames.borrow_mut().drain(..).collect();
        frames
            .into_iter()
            .map(|tx| tx.send(()))
            .filter(Result::is_ok)
            .count()
    }

    /// Resolve every running manual animation successfully.
    pub(crate) fn finish_animations(&self) {
        let running: Vec<_> = self.running.borrow_mut().drain(..).collect();
        for tx in running {
            let _ = tx.send(Ok(()));
        }
    }

    pub(crate) fn overlays_created(&self) -> usize {
        self.overlays_created.get()
    }

    pub(crate) fn cancelled(&self) -> usize {
        self.cancelled.get()
    }
}

impl Surface for MockDom {
    type Element = NodeId;

    fn lightbox_image(&self) -> Option<NodeId> {
        self.lightbox_image.get()
    }

    fn backdrop(&self) -> Option<NodeId> {
        self.backdrop.get()
    }

    fn find_thumbnail(&self, src: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| {
                n.thumbnail && n.connected && n.src.as_deref() == Some(src)
            })
            .map(NodeId)
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.connected && n.classes.contains(class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn image_source(&self, element: &NodeId) -> Option<String> {
        let nodes = self.nodes.borrow();
        let node = &nodes[element.0];
        node.src
            .clone()
            .or_else(|| node.child_image.and_then(|c| nodes[c.0].src.clone()))
    }

    fn rect(&self, element: &NodeId) -> Rect {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[element.0];
        if !node.connected {
            return Rect::ZERO;
        }
        node.scripted_rects.pop_front().unwrap_or(node.rect)
    }

    fn is_connected(&self, element: &NodeId) -> bool {
        self.connected(*element)
    }

    fn set_class(
        &self,
        element: &NodeId,
        class: &str,
        enabled: bool,
    ) -> Result<(), LightboxError> {
        if self.fail_classes.get() {
            return Err(LightboxError::Dom("classList is read-only".to_owned()));
        }
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        if enabled {
            let _ = classes.insert(class.to_owned());
        } else {
            let _ = classes.remove(class);
        }
        Ok(())
    }

    fn set_style(
        &self,
        element: &NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), LightboxError> {
        let _ = self.nodes.borrow_mut()[element.0]
            .styles
            .insert(property.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_image_source(
        &self,
        element: &NodeId,
        src: &str,
    ) -> Result<(), LightboxError> {
        self.nodes.borrow_mut()[element.0].src = Some(src.to_owned());
        Ok(())
    }

    fn create_overlay(
        &self,
        class: &str,
    ) -> Result<OverlayNodes<NodeId>, LightboxError> {
        self.overlays_created.set(self.overlays_created.get() + 1);
        let image = self.add(Node {
            connected: true,
            ..Node::default()
        });
        let mut classes = BTreeSet::new();
        let _ = classes.insert(class.to_owned());
        let frame = self.add(Node {
            child_image: Some(image),
            classes,
            connected: true,
            ..Node::default()
        });
        Ok(OverlayNodes { frame, image })
    }

    fn animate(
        &self,
        element: &NodeId,
        keyframes: &Keyframes,
        timing: &Timing,
    ) -> Result<AnimationFinished, LightboxError> {
        if self.mode.get() == AnimateMode::Unsupported {
            return Err(LightboxError::Unsupported("Element.animate"));
        }
        self.calls.borrow_mut().push(AnimateCall {
            element: *element,
            keyframes: keyframes.clone(),
            timing: *timing,
        });
        match self.mode.get() {
            AnimateMode::Fail => Ok(future::ready(Err(LightboxError::Dom(
                "animation aborted".to_owned(),
            )))
            .boxed_local()),
            AnimateMode::Manual => {
                let (tx, rx) = oneshot::channel();
                self.running.borrow_mut().push(tx);
                Ok(async move {
                    rx.await.unwrap_or_else(|_| {
                        Err(LightboxError::Dom("animation dropped".to_owned()))
                    })
                }
                .boxed_local())
            }
            AnimateMode::Immediate | AnimateMode::Unsupported => {
                Ok(future::ready(Ok(())).boxed_local())
            }
        }
    }

    fn cancel_animations(&self, _element: &NodeId) -> Result<(), LightboxError> {
        self.cancelled.set(self.cancelled.get() + 1);
        Ok(())
    }

    fn remove(&self, element: &NodeId) -> Result<(), LightboxError> {
        if self.fail_removal.get() {
            return Err(LightboxError::Dom("node is not a child".to_owned()));
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes[element.0].connected = false;
        if let Some(child) = nodes[element.0].child_image {
            nodes[child.0].connected = false;
        }
        Ok(())
    }

    fn next_frame(&self) -> NextFrame {
        self.frame_requests.set(self.frame_requests.get() + 1);
        let (tx, rx) = oneshot::channel();
        self.frames.borrow_mut().push(tx);
        async move {
            let _ = rx.await;
        }
        .boxed_local()
    }
}

/// Gallery state applying setters immediately.
pub(crate) struct MockGallery {
    pub(crate) images: RefCell<Vec<GalleryImage>>,
    pub(crate) open: Cell<bool>,
    pub(crate) index: Cell<usize>,
    pub(crate) hide_image: Cell<bool>,
    pub(crate) reduce_motion: Cell<bool>,
}

impl MockGallery {
    pub(crate) fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images: RefCell::new(images),
            open: Cell::new(false),
            index: Cell::new(0),
            hide_image: Cell::new(false),
            reduce_motion: Cell::new(false),
        }
    }
}

impl GalleryState for MockGallery {
    fn image(&self, index: usize) -> Option<GalleryImage> {
        self.images.borrow().get(index).cloned()
    }

    fn image_count(&self) -> usize {
        self.images.borrow().len()
    }

    fn is_lightbox_open(&self) -> bool {
        self.open.get()
    }

    fn lightbox_index(&self) -> usize {
        self.index.get()
    }

    fn reduce_motion(&self) -> bool {
        self.reduce_motion.get()
    }

    fn set_lightbox_index(&self, index: usize) {
        self.index.set(index);
    }

    fn set_lightbox_open(&self, open: bool) {
        self.open.set(open);
    }

    fn set_hide_lightbox_image(&self, hide: bool) {
        self.hide_image.set(hide);
    }
}

/// CDN URL of the `i`th test image.
pub(crate) fn image_url(i: usize) -> String {
    format!("https://cdn.example/campaign/{i}.jpg")
}

/// `n` images with matching URLs.
pub(crate) fn images(n: usize) -> Vec<GalleryImage> {
    (0..n)
        .map(|i| GalleryImage::new(image_url(i), format!("{i}.jpg")))
        .collect()
}

/// Run until no task can progress, firing frames as long as any task waits
/// on one. Gives up after `max_frames` frames.
pub(crate) fn drive(pool: &mut LocalPool, dom: &MockDom, max_frames: usize) {
    pool.run_until_stalled();
    for _ in 0..max_frames {
        if dom.tick() == 0 {
            break;
        }
        pool.run_until_stalled();
    }
}
