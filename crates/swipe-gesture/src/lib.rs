//! Swipe Gesture Utilities
//!
//! Pointer/touch tracking for swipeable cards.
//! Uses an axis lock to tell horizontal swipes from vertical scrolls,
//! and a release threshold to tell commits from snap backs.

mod decision;
mod gesture;

pub use decision::{decide, Release, SwipeDirection, COMMIT_THRESHOLD_PX};
pub use gesture::{AxisLock, GestureTracker, Point, AXIS_LOCK_PX};

use wasm_bindgen::JsCast;

/// Client position of a mouse event
pub fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Client position of the first active touch, if any
pub fn touch_point(ev: &web_sys::TouchEvent) -> Option<Point> {
    ev.touches()
        .get(0)
        .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
}

/// True if the event started on a button or link inside the card.
/// Those keep their own click behaviour and never start a swipe.
pub fn starts_on_control(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button, a").ok().flatten())
        .is_some()
}
