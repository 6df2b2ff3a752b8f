//! One-shot viewport visibility detection, shared by the stat-card count-up
//! trigger and deferred thumbnail loading.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// Runs `on_visible` the first time `target` intersects the viewport, then
/// disconnects the observation. The callback fires at most once; there is no
/// re-trigger when the element scrolls out and back in.
pub fn observe_once(target: &Element, on_visible: impl FnOnce() + 'static) {
    let pending = Rc::new(RefCell::new(Some(on_visible)));
    let pending_in_callback = pending.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                if let Some(cb) = pending_in_callback.borrow_mut().take() {
                    cb();
                }
            }
        },
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(target);
            // stays alive until the observer disconnects itself
            callback.forget();
        }
        Err(_) => {
            // No observer support: treat the element as visible right away so
            // the page still fills in.
            log::warn!("IntersectionObserver unavailable, firing immediately");
            drop(callback);
            if let Some(cb) = pending.borrow_mut().take() {
                cb();
            }
        }
    }
}
