//! Gesture Tracking
//!
//! Turns a stream of pointer positions into a horizontal drag offset.
//! The first movement past the lock distance decides whether the gesture
//! is a horizontal swipe or a vertical scroll; that decision holds until
//! the gesture ends.

/// Movement in pixels before the axis is decided
pub const AXIS_LOCK_PX: f64 = 10.0;

/// Pointer position in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis decision for the current gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisLock {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

/// Per-interaction drag state
#[derive(Clone, Debug)]
pub struct GestureTracker {
    start: Point,
    axis: AxisLock,
    offset: f64,
    active: bool,
    lock_distance: f64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(AXIS_LOCK_PX)
    }
}

impl GestureTracker {
    pub fn new(lock_distance: f64) -> Self {
        Self {
            start: Point::default(),
            axis: AxisLock::Undetermined,
            offset: 0.0,
            active: false,
            lock_distance,
        }
    }

    /// Start a new gesture at `at`
    pub fn begin(&mut self, at: Point) {
        self.start = at;
        self.axis = AxisLock::Undetermined;
        self.offset = 0.0;
        self.active = true;
    }

    /// Feed a pointer position. Returns true if the offset changed.
    pub fn move_to(&mut self, at: Point) -> bool {
        if !self.active {
            return false;
        }

        let dx = at.x - self.start.x;
        let dy = at.y - self.start.y;

        if self.axis == AxisLock::Undetermined && dx.abs().max(dy.abs()) > self.lock_distance {
            self.axis = if dx.abs() > dy.abs() {
                AxisLock::Horizontal
            } else {
                AxisLock::Vertical
            };
        }

        if self.axis == AxisLock::Horizontal && self.offset != dx {
            self.offset = dx;
            return true;
        }
        false
    }

    /// Finish the gesture, yielding the final horizontal offset.
    /// Returns None when no gesture was in progress.
    pub fn end(&mut self) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.offset)
    }

    /// Drop the current gesture without a decision
    pub fn cancel(&mut self) {
        self.active = false;
        self.offset = 0.0;
    }

    pub fn reset_offset(&mut self) {
        self.offset = 0.0;
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn axis(&self) -> AxisLock {
        self.axis
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Horizontal drags own the touch stream; vertical ones leave it
    /// to native scrolling.
    pub fn prevents_scroll(&self) -> bool {
        self.active && self.axis == AxisLock::Horizontal
    }
}
