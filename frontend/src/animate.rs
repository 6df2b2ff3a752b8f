//! Count-up animation for the homepage stat cards.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::utils::format_number;

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Displayed value at `elapsed_ms` into a `start`..`end` tween of
/// `duration_ms`. Progress is clamped to [0, 1], so the value never
/// overshoots and holds `end` once the duration has passed.
pub fn value_at(start: i64, end: i64, elapsed_ms: f64, duration_ms: f64) -> i64 {
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    let eased = ease_out_quart(progress);
    (start as f64 + (end - start) as f64 * eased).floor() as i64
}

/// Tweens the element's text from `start` to `end` over `duration_ms`,
/// with thousands separators, one requestAnimationFrame tick at a time.
/// The closure keeps itself alive until the final frame, then drops.
pub fn animate_value(element: HtmlElement, start: i64, end: i64, duration_ms: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(performance) = window.performance() else {
        return;
    };
    let start_time = performance.now();

    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let kickoff = handle.clone();

    *kickoff.borrow_mut() = Some(Closure::new(move |frame_time: f64| {
        let elapsed = frame_time - start_time;
        let current = value_at(start, end, elapsed, duration_ms);
        element.set_text_content(Some(&format_number(current)));

        if elapsed < duration_ms {
            if let Some(callback) = handle.borrow().as_ref() {
                request_animation_frame(callback);
            }
        } else {
            // Done for good; release the self-referencing closure.
            let _ = handle.borrow_mut().take();
        }
    }));

    if let Some(callback) = kickoff.borrow().as_ref() {
        request_animation_frame(callback);
    };
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        assert_eq!(value_at(0, 250, 0.0, 2000.0), 0);
        assert_eq!(value_at(0, 250, 2000.0, 2000.0), 250);
        // well past the duration the value holds, never overshoots
        assert_eq!(value_at(0, 250, 10_000.0, 2000.0), 250);
    }

    #[test]
    fn test_displayed_values_are_non_decreasing() {
        let mut previous = i64::MIN;
        let mut elapsed = 0.0;
        while elapsed <= 2500.0 {
            let value = value_at(0, 250, elapsed, 2000.0);
            assert!(value >= previous, "decreased at {elapsed}ms");
            assert!(value <= 250);
            previous = value;
            elapsed += 10.0;
        }
    }

    #[test]
    fn test_ease_out_quart_front_loads_progress() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        // more than half the distance is covered in the first quarter
        assert!(ease_out_quart(0.25) > 0.5);
    }

    #[test]
    fn test_nonzero_start() {
        assert_eq!(value_at(100, 100, 1000.0, 2000.0), 100);
        assert_eq!(value_at(50, 250, 2000.0, 2000.0), 250);
        assert!(value_at(50, 250, 500.0, 2000.0) >= 50);
    }
}
