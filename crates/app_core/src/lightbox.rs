//! Lightbox viewer state machine
//!
//! `Closed` until [`Lightbox::open`] succeeds; while open the session
//! tracks the current index, zoom, pan, drag and load state. Every index
//! change resets the view and re-enters `Loading`. All transitions are
//! synchronous and driven by the UI thread.

use crate::model::ImageItem;
use std::ops::Sub;
use std::sync::Arc;

pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.5;

/// Pointer position or pan offset in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Best-effort background fetch of images the user is likely to open next.
/// Completion is never awaited and failures are swallowed.
pub trait Preloader: Send + Sync {
    fn preload(&self, item: &ImageItem);
}

/// Preloader that does nothing
pub struct NoPreload;

impl Preloader for NoPreload {
    fn preload(&self, _item: &ImageItem) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
}

/// Transient state that exists only while the lightbox is open
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSession {
    pub index: usize,
    pub scale: f32,
    pub pan: Point,
    pub load: LoadState,
    drag_anchor: Option<Point>,
}

impl ViewerSession {
    fn at(index: usize) -> Self {
        Self {
            index,
            scale: MIN_SCALE,
            pan: Point::ZERO,
            load: LoadState::Loading,
            drag_anchor: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn is_loaded(&self) -> bool {
        self.load == LoadState::Loaded
    }

    fn reset_view(&mut self) {
        self.scale = MIN_SCALE;
        self.pan = Point::ZERO;
    }
}

/// Image transform: scale first, then translate by `pan / scale` in the
/// image's local space. The on-screen displacement therefore equals `pan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub translate: Point,
}

impl ViewTransform {
    pub fn new(scale: f32, pan: Point) -> Self {
        Self {
            scale,
            translate: Point::new(pan.x / scale, pan.y / scale),
        }
    }

    /// Screen offset of the image centre from the viewport centre
    pub fn screen_offset(&self) -> Point {
        Point::new(self.translate.x * self.scale, self.translate.y * self.scale)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(MIN_SCALE, Point::ZERO)
    }
}

/// Full-screen viewer over one image sequence
pub struct Lightbox {
    items: Vec<ImageItem>,
    session: Option<ViewerSession>,
    preloader: Arc<dyn Preloader>,
}

impl Lightbox {
    pub fn new(preloader: Arc<dyn Preloader>) -> Self {
        Self {
            items: Vec::new(),
            session: None,
            preloader,
        }
    }

    pub fn without_preload() -> Self {
        Self::new(Arc::new(NoPreload))
    }

    /// Open on `items` at `index`. Does nothing when the sequence is empty
    /// or the index is out of range. Returns whether the viewer opened.
    pub fn open(&mut self, items: Vec<ImageItem>, index: usize) -> bool {
        if index >= items.len() {
            tracing::debug!(index, len = items.len(), "lightbox open ignored");
            return false;
        }

        self.items = items;
        self.session = Some(ViewerSession::at(index));
        tracing::debug!(index, len = self.items.len(), "lightbox opened");
        self.preload_neighbours();
        true
    }

    /// Close and drop the session. In-flight preloads are left to finish.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("lightbox closed");
        }
        self.items.clear();
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ViewerSession> {
        self.session.as_ref()
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&ImageItem> {
        self.session.as_ref().and_then(|s| self.items.get(s.index))
    }

    pub fn next(&mut self) {
        let len = self.items.len();
        self.go_to(|index| (index + 1) % len);
    }

    pub fn prev(&mut self) {
        let len = self.items.len();
        self.go_to(|index| (index + len - 1) % len);
    }

    fn go_to(&mut self, step: impl FnOnce(usize) -> usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.index = step(session.index);
        session.reset_view();
        session.drag_anchor = None;
        session.load = LoadState::Loading;
        self.preload_neighbours();
    }

    pub fn can_zoom_in(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.scale < MAX_SCALE)
    }

    pub fn can_zoom_out(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.scale > MIN_SCALE)
    }

    pub fn zoom_in(&mut self) {
        if let Some(s) = self.session.as_mut().filter(|s| s.scale < MAX_SCALE) {
            s.scale = (s.scale + ZOOM_STEP).min(MAX_SCALE);
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(s) = self.session.as_mut().filter(|s| s.scale > MIN_SCALE) {
            s.scale = (s.scale - ZOOM_STEP).max(MIN_SCALE);
        }
    }

    pub fn reset_view(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.reset_view();
        }
    }

    /// Start panning; ignored at scale 1
    pub fn begin_drag(&mut self, pointer: Point) {
        if let Some(s) = self.session.as_mut().filter(|s| s.scale > MIN_SCALE) {
            s.drag_anchor = Some(pointer - s.pan);
        }
    }

    /// Pan 1:1 with the pointer relative to the anchor
    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(s) = self.session.as_mut().filter(|s| s.scale > MIN_SCALE) {
            if let Some(anchor) = s.drag_anchor {
                s.pan = pointer - anchor;
            }
        }
    }

    /// Pointer released or left the viewing surface
    pub fn end_drag(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.drag_anchor = None;
        }
    }

    /// Decode-complete signal for `image_id`. Signals for anything other
    /// than the current image are stale and ignored.
    pub fn mark_loaded(&mut self, image_id: &str) {
        let current = self.current().map(|item| item.id.as_str() == image_id);
        if current == Some(true) {
            if let Some(s) = self.session.as_mut() {
                s.load = LoadState::Loaded;
            }
        }
    }

    pub fn transform(&self) -> ViewTransform {
        self.session
            .as_ref()
            .map(|s| ViewTransform::new(s.scale, s.pan))
            .unwrap_or_default()
    }

    /// `"3 / 7"` style position label
    pub fn counter_label(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| format!("{} / {}", s.index + 1, self.items.len()))
    }

    /// Scale as a rounded percentage for the zoom toolbar
    pub fn zoom_percent(&self) -> Option<u32> {
        self.session
            .as_ref()
            .map(|s| (s.scale * 100.0).round() as u32)
    }

    fn preload_neighbours(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        for index in neighbours(session.index, self.items.len()) {
            self.preloader.preload(&self.items[index]);
        }
    }
}

/// Indices adjacent to `index` with wraparound, each listed once.
/// A single image is its own neighbour.
pub fn neighbours(index: usize, len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let next = (index + 1) % len;
    let prev = (index + len - 1) % len;
    if next == prev {
        vec![next]
    } else {
        vec![next, prev]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl Preloader for Recorder {
        fn preload(&self, item: &ImageItem) {
            self.0.lock().push(item.id.clone());
        }
    }

    fn images(n: usize) -> Vec<ImageItem> {
        (0..n)
            .map(|i| ImageItem::new(format!("img-{}", i), format!("{}.jpg", i)))
            .collect()
    }

    fn opened(n: usize, index: usize) -> Lightbox {
        let mut lb = Lightbox::without_preload();
        assert!(lb.open(images(n), index));
        lb
    }

    fn index(lb: &Lightbox) -> usize {
        lb.session().unwrap().index
    }

    fn scale(lb: &Lightbox) -> f32 {
        lb.session().unwrap().scale
    }

    fn pan(lb: &Lightbox) -> Point {
        lb.session().unwrap().pan
    }

    #[test]
    fn test_open_rejects_empty_and_out_of_range() {
        let mut lb = Lightbox::without_preload();
        assert!(!lb.open(Vec::new(), 0));
        assert!(!lb.is_open());
        assert!(!lb.open(images(2), 2));
        assert!(!lb.is_open());
    }

    #[test]
    fn test_open_enters_loading_at_index() {
        let lb = opened(3, 1);
        let s = lb.session().unwrap();
        assert_eq!(s.index, 1);
        assert_eq!(s.load, LoadState::Loading);
        assert_eq!(s.scale, 1.0);
        assert_eq!(lb.counter_label().as_deref(), Some("2 / 3"));
    }

    #[test]
    fn test_next_wraps_around() {
        let mut lb = opened(3, 0);
        lb.next();
        assert_eq!(index(&lb), 1);
        lb.next();
        assert_eq!(index(&lb), 2);
        lb.next();
        assert_eq!(index(&lb), 0);
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut lb = opened(3, 0);
        lb.prev();
        assert_eq!(index(&lb), 2);
    }

    #[test]
    fn test_next_n_times_is_cyclic() {
        for n in 1..6 {
            for start in 0..n {
                let mut lb = opened(n, start);
                for _ in 0..n {
                    lb.next();
                }
                assert_eq!(index(&lb), start);
            }
        }
    }

    #[test]
    fn test_single_item_wraps_to_itself() {
        let mut lb = opened(1, 0);
        lb.next();
        assert_eq!(index(&lb), 0);
        lb.prev();
        assert_eq!(index(&lb), 0);
    }

    #[test]
    fn test_zoom_clamped_path() {
        let mut lb = opened(3, 0);
        lb.zoom_in();
        lb.zoom_in();
        lb.zoom_in();
        assert_eq!(scale(&lb), 2.5);
        lb.zoom_in();
        assert_eq!(scale(&lb), 3.0);
        assert!(!lb.can_zoom_in());
        lb.zoom_in();
        assert_eq!(scale(&lb), 3.0);
    }

    #[test]
    fn test_zoom_out_stops_at_one() {
        let mut lb = opened(2, 0);
        assert!(!lb.can_zoom_out());
        lb.zoom_out();
        assert_eq!(scale(&lb), 1.0);
        lb.zoom_in();
        lb.zoom_out();
        lb.zoom_out();
        assert_eq!(scale(&lb), 1.0);
    }

    #[test]
    fn test_scale_stays_in_bounds() {
        let mut lb = opened(2, 0);
        // Deterministic mix of zoom operations
        for step in 0..200u32 {
            if (step * 7 + 3) % 5 < 3 {
                lb.zoom_in();
            } else {
                lb.zoom_out();
            }
            let s = scale(&lb);
            assert!((MIN_SCALE..=MAX_SCALE).contains(&s));
        }
    }

    #[test]
    fn test_navigation_resets_view() {
        let mut lb = opened(3, 0);
        lb.zoom_in();
        lb.begin_drag(Point::new(10.0, 10.0));
        lb.drag_to(Point::new(40.0, 25.0));
        lb.mark_loaded("img-0");
        assert_ne!(pan(&lb), Point::ZERO);

        lb.next();
        let s = lb.session().unwrap();
        assert_eq!(s.scale, 1.0);
        assert_eq!(s.pan, Point::ZERO);
        assert_eq!(s.load, LoadState::Loading);

        lb.zoom_in();
        lb.prev();
        assert_eq!(scale(&lb), 1.0);
    }

    #[test]
    fn test_navigation_ends_drag() {
        let mut lb = opened(3, 0);
        lb.zoom_in();
        lb.begin_drag(Point::new(100.0, 100.0));
        lb.next();
        assert!(!lb.session().unwrap().is_dragging());

        // No begin_drag after navigating, so the pan must not move
        lb.zoom_in();
        lb.drag_to(Point::new(400.0, 300.0));
        assert_eq!(pan(&lb), Point::ZERO);

        lb.begin_drag(Point::new(10.0, 10.0));
        lb.prev();
        assert!(!lb.session().unwrap().is_dragging());
    }

    #[test]
    fn test_drag_ignored_at_unit_scale() {
        let mut lb = opened(2, 0);
        lb.begin_drag(Point::new(5.0, 5.0));
        lb.drag_to(Point::new(50.0, 80.0));
        assert_eq!(pan(&lb), Point::ZERO);
        assert!(!lb.session().unwrap().is_dragging());
    }

    #[test]
    fn test_drag_pans_relative_to_anchor() {
        let mut lb = opened(2, 0);
        lb.zoom_in();
        lb.begin_drag(Point::new(100.0, 100.0));
        lb.drag_to(Point::new(130.0, 90.0));
        assert_eq!(pan(&lb), Point::new(30.0, -10.0));

        // A second drag continues from the current pan
        lb.end_drag();
        lb.begin_drag(Point::new(0.0, 0.0));
        lb.drag_to(Point::new(5.0, 5.0));
        assert_eq!(pan(&lb), Point::new(35.0, -5.0));
    }

    #[test]
    fn test_drag_after_end_has_no_effect() {
        let mut lb = opened(2, 0);
        lb.zoom_in();
        lb.begin_drag(Point::new(0.0, 0.0));
        lb.drag_to(Point::new(10.0, 10.0));
        lb.end_drag();
        lb.drag_to(Point::new(99.0, 99.0));
        assert_eq!(pan(&lb), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_reset_view() {
        let mut lb = opened(2, 0);
        lb.zoom_in();
        lb.zoom_in();
        lb.begin_drag(Point::ZERO);
        lb.drag_to(Point::new(3.0, 4.0));
        lb.reset_view();
        assert_eq!(scale(&lb), 1.0);
        assert_eq!(pan(&lb), Point::ZERO);
    }

    #[test]
    fn test_transform_divides_pan_by_scale() {
        let mut lb = opened(2, 0);
        lb.zoom_in();
        lb.zoom_in();
        lb.begin_drag(Point::ZERO);
        lb.drag_to(Point::new(40.0, -20.0));

        let t = lb.transform();
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.translate, Point::new(20.0, -10.0));
        assert_eq!(t.screen_offset(), Point::new(40.0, -20.0));
    }

    #[test]
    fn test_stale_load_signal_ignored() {
        let mut lb = opened(3, 0);
        lb.mark_loaded("img-1");
        assert!(!lb.session().unwrap().is_loaded());
        lb.mark_loaded("img-0");
        assert!(lb.session().unwrap().is_loaded());
    }

    #[test]
    fn test_close_discards_session() {
        let mut lb = opened(3, 2);
        lb.close();
        assert!(!lb.is_open());
        assert!(lb.current().is_none());
        // Operations on a closed viewer are inert
        lb.next();
        lb.zoom_in();
        assert!(lb.session().is_none());
    }

    #[test]
    fn test_preloads_neighbours() {
        let recorder = Arc::new(Recorder::default());
        let mut lb = Lightbox::new(recorder.clone());
        lb.open(images(4), 0);
        assert_eq!(*recorder.0.lock(), vec!["img-1", "img-3"]);

        recorder.0.lock().clear();
        lb.next();
        assert_eq!(*recorder.0.lock(), vec!["img-2", "img-0"]);
    }

    #[test]
    fn test_zoom_percent() {
        let mut lb = opened(2, 0);
        assert_eq!(lb.zoom_percent(), Some(100));
        lb.zoom_in();
        assert_eq!(lb.zoom_percent(), Some(150));
        lb.close();
        assert_eq!(lb.zoom_percent(), None);
    }

    #[test]
    fn test_neighbours() {
        assert!(neighbours(0, 0).is_empty());
        assert_eq!(neighbours(0, 1), vec![0]);
        assert_eq!(neighbours(0, 2), vec![1]);
        assert_eq!(neighbours(2, 3), vec![0, 1]);
    }
}
