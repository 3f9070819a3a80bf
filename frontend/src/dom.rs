//! Browser event sources wired into [`Subject`]s, plus the DOM-backed
//! [`AnchorScroller`]. Each bridge detaches itself when dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use crate::navigation::AnchorScroller;
use crate::observer::Subject;

/// Publishes `window.scrollY` on every scroll event.
pub struct WindowScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl WindowScrollListener {
    pub fn attach(offset: Subject<f64>) -> Option<Self> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                log::warn!("no window, scroll tracking disabled");
                return None;
            }
        };

        let callback = Closure::<dyn Fn()>::new({
            let offset = offset.clone();
            move || {
                if let Some(win) = web_sys::window() {
                    if let Ok(scroll_y) = win.scroll_y() {
                        offset.publish(scroll_y);
                    }
                }
            }
        });

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to add scroll listener: {:?}", err);
            return None;
        }

        // Initial value, the page may be restored mid-scroll
        if let Ok(scroll_y) = window.scroll_y() {
            offset.publish(scroll_y);
        }

        Some(Self { window, callback })
    }
}

impl Drop for WindowScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove scroll listener: {:?}", err);
        }
    }
}

/// Publishes whether `target` intersects the viewport.
///
/// With `once` set the underlying observer disconnects itself after the
/// first positive report.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(target: &Element, visible: Subject<bool>, once: bool) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                visible.publish(intersecting);
                if intersecting && once {
                    observer.disconnect();
                }
            },
        );

        let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("failed to create intersection observer: {:?}", err);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smooth-scrolls to the element whose id matches the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DomAnchorScroller;

impl AnchorScroller for DomAnchorScroller {
    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor));

        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}
