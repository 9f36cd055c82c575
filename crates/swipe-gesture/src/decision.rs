//! Release Decision
//!
//! What a finished gesture means: a committed swipe or a snap back.

/// Release distance in pixels beyond which a swipe commits
pub const COMMIT_THRESHOLD_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// +1 for right, -1 for left
    pub fn sign(self) -> f64 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Outcome of releasing a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    Commit(SwipeDirection),
    SnapBack,
}

/// Classify a final offset against `threshold` (strictly greater commits)
pub fn decide(offset: f64, threshold: f64) -> Release {
    if offset.abs() > threshold {
        if offset > 0.0 {
            Release::Commit(SwipeDirection::Right)
        } else {
            Release::Commit(SwipeDirection::Left)
        }
    } else {
        Release::SnapBack
    }
}
