use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::engine::ScrollRevealEngine;
use super::geometry::Rect;
use super::intent::{AnimationIntent, VisualState};
use super::stagger::StaggerGroup;

const KEY_ATTRIBUTE: &str = "data-reveal-key";
/// Observer ratios are reported at every 5% step.
const OBSERVER_STEPS: u32 = 20;

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("no browser window")]
    NoWindow,
    #[error("intersection observer unavailable: {0}")]
    Observer(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealKey(u32);

impl RevealKey {
    fn from_element(element: &Element) -> Option<Self> {
        element.get_attribute(KEY_ATTRIBUTE)?.parse().ok().map(RevealKey)
    }
}

impl fmt::Display for RevealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The one outstanding `requestAnimationFrame` id, if any.
#[derive(Debug, Default)]
struct FrameSlot(Option<i32>);

impl FrameSlot {
    /// A new frame is needed when none is outstanding and work is pending.
    fn wants_frame(&self, pending: bool) -> bool {
        self.0.is_none() && pending
    }

    fn fill(&mut self, id: i32) {
        self.0 = Some(id);
    }

    /// The frame ran.
    fn clear(&mut self) {
        self.0 = None;
    }

    /// Id to cancel once no work is left.
    fn take_if_idle(&mut self, pending: bool) -> Option<i32> {
        if pending {
            None
        } else {
            self.0.take()
        }
    }

    fn take(&mut self) -> Option<i32> {
        self.0.take()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct DriverState {
    engine: ScrollRevealEngine<RevealKey>,
    elements: HashMap<RevealKey, HtmlElement>,
    observer: Option<IntersectionObserver>,
    frame: FrameSlot,
    next_key: u32,
}

impl DriverState {
    fn allocate(&mut self, element: &HtmlElement) -> RevealKey {
        let key = RevealKey(self.next_key);
        self.next_key += 1;
        let _ = element.set_attribute(KEY_ATTRIBUTE, &key.to_string());
        self.elements.insert(key, element.clone());
        key
    }

    /// Start observing `key`, or reveal at once when there is no observer.
    fn watch(&mut self, key: RevealKey, element: &HtmlElement) {
        if !self.engine.is_watching(key) {
            return;
        }
        let now = now_ms();
        let observed = match &self.observer {
            Some(observer) => {
                observer.observe(element);
                true
            }
            None => false,
        };
        if observed {
            // the first scroll event may never come
            self.report(key, measure(element), now);
        } else {
            self.engine.on_intersection_change(key, 1.0, now);
        }
    }

    fn report(&mut self, key: RevealKey, fraction: f64, now: f64) {
        self.engine.on_intersection_change(key, fraction, now);
        if !self.engine.is_watching(key) {
            if let (Some(observer), Some(element)) = (&self.observer, self.elements.get(&key)) {
                observer.unobserve(element);
            }
        }
    }

    fn release(&mut self, key: RevealKey) {
        self.engine.unregister(key);
        if let Some(element) = self.elements.remove(&key) {
            if let Some(observer) = &self.observer {
                observer.unobserve(&element);
            }
            let _ = element.remove_attribute(KEY_ATTRIBUTE);
        }
    }

    fn prune_detached(&mut self) {
        let detached: Vec<RevealKey> = self
            .elements
            .iter()
            .filter(|(_, element)| !element.is_connected())
            .map(|(key, _)| *key)
            .collect();
        for key in detached {
            debug!("reveal {} left the document, releasing", key);
            self.release(key);
        }
    }

    fn cancel_frame_if_idle(&mut self) {
        let pending = self.engine.has_pending_frames();
        if let Some(id) = self.frame.take_if_idle(pending) {
            if let Some(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Binds [`ScrollRevealEngine`] to the page: an `IntersectionObserver` feeds
/// visibility, a `requestAnimationFrame` loop writes the styles.
pub struct RevealDriver {
    state: Rc<RefCell<DriverState>>,
    frame_callback: FrameCallback,
    _observer_callback: Option<ObserverCallback>,
}

impl RevealDriver {
    /// Falls back to revealing everything on registration if the observer
    /// cannot be created, so content never stays hidden.
    pub fn new() -> Self {
        let state = Rc::new(RefCell::new(DriverState {
            engine: ScrollRevealEngine::new(),
            elements: HashMap::new(),
            observer: None,
            frame: FrameSlot::default(),
            next_key: 0,
        }));
        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));

        {
            let weak_state = Rc::downgrade(&state);
            let weak_frame = Rc::downgrade(&frame_callback);
            *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                let (Some(state), Some(frame_callback)) = (weak_state.upgrade(), weak_frame.upgrade())
                else {
                    return;
                };
                run_frame(&state, now);
                schedule_frame(&state, &frame_callback);
            }) as Box<dyn FnMut(f64)>));
        }

        let observer_callback = intersection_callback(Rc::downgrade(&state), Rc::downgrade(&frame_callback));
        let observer_callback = match build_observer(&observer_callback) {
            Ok(observer) => {
                state.borrow_mut().observer = Some(observer);
                Some(observer_callback)
            }
            Err(e) => {
                warn!("Scroll reveals disabled, showing content directly: {}", e);
                None
            }
        };

        Self {
            state,
            frame_callback,
            _observer_callback: observer_callback,
        }
    }

    pub fn register(&self, element: HtmlElement, intent: AnimationIntent) -> RevealKey {
        let key = {
            let mut state = self.state.borrow_mut();
            let key = state.allocate(&element);
            state.engine.register(key, intent, now_ms());
            state.watch(key, &element);
            key
        };
        schedule_frame(&self.state, &self.frame_callback);
        key
    }

    /// Register a staggered group. The parent key comes first in the result.
    pub fn register_group(&self, parent: HtmlElement, group: StaggerGroup<HtmlElement>) -> Vec<RevealKey> {
        let keys = {
            let mut state = self.state.borrow_mut();
            let parent_key = state.allocate(&parent);
            let mut keys = vec![parent_key];
            let group = group.filter_map_keys(|child| {
                let key = state.allocate(&child);
                keys.push(key);
                Some(key)
            });
            state.engine.register_group(parent_key, group, now_ms());
            state.watch(parent_key, &parent);
            keys
        };
        schedule_frame(&self.state, &self.frame_callback);
        keys
    }

    /// Stop observing `key` and cancel its pending frame work.
    pub fn unregister(&self, key: RevealKey) {
        let mut state = self.state.borrow_mut();
        state.release(key);
        state.cancel_frame_if_idle();
    }

    pub fn active_observations(&self) -> usize {
        self.state.borrow().engine.watch_count()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().engine.in_flight()
    }
}

impl Default for RevealDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RevealDriver {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        if let Some(observer) = state.observer.take() {
            observer.disconnect();
        }
        if let Some(id) = state.frame.take() {
            if let Some(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

fn intersection_callback(
    state: Weak<RefCell<DriverState>>,
    frame_callback: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
) -> ObserverCallback {
    Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let (Some(state), Some(frame_callback)) = (state.upgrade(), frame_callback.upgrade()) else {
            return;
        };
        let now = now_ms();
        {
            let mut state = state.borrow_mut();
            state.prune_detached();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(key) = RevealKey::from_element(&entry.target()) else {
                    continue;
                };
                state.report(key, entry.intersection_ratio(), now);
            }
        }
        schedule_frame(&state, &frame_callback);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>)
}

fn build_observer(callback: &ObserverCallback) -> Result<IntersectionObserver, RevealError> {
    window().ok_or(RevealError::NoWindow)?;
    let thresholds = Array::new();
    for step in 0..=OBSERVER_STEPS {
        thresholds.push(&JsValue::from_f64(step as f64 / OBSERVER_STEPS as f64));
    }
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| RevealError::Observer(format!("{:?}", e)))
}

fn run_frame(state: &Rc<RefCell<DriverState>>, now: f64) {
    let mut state = state.borrow_mut();
    state.frame.clear();
    state.prune_detached();
    let updates = state.engine.tick(now);
    for update in updates {
        if let Some(element) = state.elements.get(&update.key) {
            apply_state(element, &update.state);
        }
    }
}

fn schedule_frame(state: &Rc<RefCell<DriverState>>, frame_callback: &FrameCallback) {
    let mut state = state.borrow_mut();
    let pending = state.engine.has_pending_frames();
    if !state.frame.wants_frame(pending) {
        return;
    }
    let Some(window) = window() else {
        return;
    };
    if let Some(callback) = frame_callback.borrow().as_ref() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => state.frame.fill(id),
            Err(e) => warn!("Could not schedule reveal frame: {:?}", e),
        }
    }
}

/// Write `visual` onto the element's inline style.
pub fn apply_state(element: &HtmlElement, visual: &VisualState) {
    let style = element.style();
    for (property, value) in visual.css_declarations() {
        let _ = style.set_property(property, &value);
    }
}

fn measure(element: &HtmlElement) -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let bounds = element.get_bounding_client_rect();
    Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height())
        .visible_fraction(&Rect::new(0.0, 0.0, width, height))
}

fn now_ms() -> f64 {
    window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::reveal::stagger::Stagger;

    #[test]
    fn test_frame_requested_once_while_pending() {
        let mut frame = FrameSlot::default();
        assert!(!frame.wants_frame(false));
        assert!(frame.wants_frame(true));
        frame.fill(3);
        assert!(!frame.wants_frame(true), "one request at a time");
        frame.clear();
        assert!(frame.wants_frame(true));
    }

    #[test]
    fn test_idle_frame_is_cancelled_after_unregister() {
        let mut engine = ScrollRevealEngine::new();
        let mut frame = FrameSlot::default();
        let group = StaggerGroup::new(
            AnimationIntent::fade_in().threshold(0.5),
            Stagger::new(Duration::from_millis(120)),
        )
        .child(RevealKey(1), AnimationIntent::fade_up())
        .child(RevealKey(2), AnimationIntent::fade_up());
        engine.register_group(RevealKey(0), group, 0.0);
        engine.on_intersection_change(RevealKey(0), 1.0, 0.0);
        assert!(frame.wants_frame(engine.has_pending_frames()));
        frame.fill(7);

        assert_eq!(frame.take_if_idle(engine.has_pending_frames()), None, "work still running");
        engine.unregister(RevealKey(0));
        assert_eq!(engine.watch_count(), 0);
        assert_eq!(frame.take_if_idle(engine.has_pending_frames()), Some(7));
        assert!(!frame.wants_frame(engine.has_pending_frames()));
    }

    #[test]
    fn test_unregister_before_fire_needs_no_frame() {
        let mut engine = ScrollRevealEngine::new();
        let mut frame = FrameSlot::default();
        engine.register(RevealKey(0), AnimationIntent::fade_up().threshold(0.6), 0.0);
        assert_eq!(engine.watch_count(), 1);
        assert!(!frame.wants_frame(engine.has_pending_frames()));

        engine.unregister(RevealKey(0));
        assert_eq!(engine.watch_count(), 0);
        assert_eq!(frame.take_if_idle(engine.has_pending_frames()), None);
    }
}
