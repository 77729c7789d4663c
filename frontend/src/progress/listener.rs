use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, EventTarget, HtmlElement, Window};

use super::state::{ScrollMetrics, ScrollProgressState};

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("no browser window")]
    NoWindow,
    #[error("could not listen for {event}: {reason}")]
    Listen { event: &'static str, reason: String },
}

/// What the indicator measures.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ScrollContainer {
    /// The whole page, scrolled by the window
    #[default]
    Document,
    Element(HtmlElement),
}

impl ScrollContainer {
    fn metrics(&self, window: &Window) -> ScrollMetrics {
        match self {
            ScrollContainer::Document => {
                let offset = window.scroll_y().unwrap_or(0.0);
                window
                    .document()
                    .and_then(|document| document.document_element())
                    .map(|root| {
                        ScrollMetrics::of_element(offset, root.scroll_height(), root.client_height())
                    })
                    .unwrap_or_default()
            }
            ScrollContainer::Element(element) => ScrollMetrics::of_element(
                element.scroll_top() as f64,
                element.scroll_height(),
                element.client_height(),
            ),
        }
    }

    /// Elements do not get resize events, the window does.
    fn event_targets(&self, window: &Window) -> Vec<(EventTarget, &'static str)> {
        let window_target: EventTarget = window.clone().into();
        match self {
            ScrollContainer::Document => vec![
                (window_target.clone(), "scroll"),
                (window_target, "resize"),
            ],
            ScrollContainer::Element(element) => vec![
                (element.clone().into(), "scroll"),
                (window_target, "resize"),
            ],
        }
    }
}

/// Normalized scroll completion of a container, kept current by its
/// scroll and resize events until [`detach`](Self::detach) or drop.
pub struct ScrollProgressIndicator {
    state: Rc<RefCell<ScrollProgressState>>,
    listeners: Vec<(EventTarget, &'static str)>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl ScrollProgressIndicator {
    /// Start listening. `on_progress` runs synchronously on every event and
    /// once right away with the current value.
    pub fn attach(
        container: ScrollContainer,
        on_progress: impl Fn(f64) + 'static,
    ) -> Result<Self, ProgressError> {
        let window = window().ok_or(ProgressError::NoWindow)?;
        let state = Rc::new(RefCell::new(ScrollProgressState::default()));
        let targets = container.event_targets(&window);

        let update = {
            let state = state.clone();
            move || {
                let progress = state.borrow_mut().update(container.metrics(&window));
                on_progress(progress);
            }
        };
        let callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);

        let mut indicator = Self {
            state,
            listeners: Vec::with_capacity(targets.len()),
            callback: Some(callback),
        };
        for (target, event) in targets {
            let Some(callback) = indicator.callback.as_ref() else {
                break;
            };
            target
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .map_err(|e| ProgressError::Listen {
                    event,
                    reason: format!("{:?}", e),
                })?;
            indicator.listeners.push((target, event));
        }

        if let Some(callback) = indicator.callback.as_ref() {
            let _ = callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL);
        }
        debug!("Scroll progress attached to {} event sources", indicator.listeners.len());
        Ok(indicator)
    }

    pub fn current_progress(&self) -> f64 {
        self.state.borrow().current_progress()
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Remove every listener. Safe to call more than once.
    pub fn detach(&mut self) {
        match self.callback.take() {
            Some(callback) => {
                remove_all(&mut self.listeners, |target, event| {
                    target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                });
            }
            None => self.listeners.clear(),
        }
        self.state.borrow_mut().reset();
    }
}

/// Run `remove` on every recorded listener and forget them all, failed
/// removals included. Returns how many were removed cleanly.
fn remove_all<T, E: fmt::Debug>(
    listeners: &mut Vec<(T, &'static str)>,
    mut remove: impl FnMut(&T, &'static str) -> Result<(), E>,
) -> usize {
    let mut removed = 0;
    for (target, event) in listeners.drain(..) {
        match remove(&target, event) {
            Ok(()) => removed += 1,
            Err(e) => warn!("Failed to remove {} listener: {:?}", event, e),
        }
    }
    removed
}

impl Drop for ScrollProgressIndicator {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_all_forgets_every_listener() {
        let mut listeners = vec![("window", "scroll"), ("window", "resize")];
        let mut seen = Vec::new();
        let removed = remove_all(&mut listeners, |target, event| {
            seen.push((*target, event));
            if event == "resize" {
                Err("gone")
            } else {
                Ok(())
            }
        });
        assert_eq!(removed, 1);
        assert_eq!(seen, vec![("window", "scroll"), ("window", "resize")]);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_remove_all_twice_is_a_no_op() {
        let mut listeners = vec![("main", "scroll")];
        assert_eq!(remove_all(&mut listeners, |_, _| Ok::<(), ()>(())), 1);
        let mut calls = 0;
        assert_eq!(
            remove_all(&mut listeners, |_, _| {
                calls += 1;
                Ok::<(), ()>(())
            }),
            0
        );
        assert_eq!(calls, 0);
    }
}
