//! Feed Configuration
//!
//! Tunables for gesture detection, commit decisions and card animation.

use log::LevelFilter;
use serde::Deserialize;
use swipe_gesture::{AXIS_LOCK_PX, COMMIT_THRESHOLD_PX};

/// Settings shipped with the app bundle
const BUNDLED: &str = include_str!("../assets/feed.json");

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Movement before a gesture locks to an axis (px)
    pub axis_lock_px: f64,
    /// Release distance that commits a swipe (px)
    pub commit_threshold_px: f64,
    /// Drag distance that shows the LIKE / NOPE label (px)
    pub hint_px: f64,
    /// Delay between a commit and the next card (ms)
    pub exit_delay_ms: u32,
    /// Card rotation per pixel of drag (deg)
    pub rotation_per_px: f64,
    /// Horizontal travel of an exiting card (% of its width)
    pub exit_translate_pct: f64,
    /// Rotation of an exiting card (deg)
    pub exit_rotation_deg: f64,
    /// Snap back / exit transition length (s)
    pub transition_secs: f64,
    pub log_level: LevelFilter,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            axis_lock_px: AXIS_LOCK_PX,
            commit_threshold_px: COMMIT_THRESHOLD_PX,
            hint_px: 50.0,
            exit_delay_ms: 300,
            rotation_per_px: 0.08,
            exit_translate_pct: 120.0,
            exit_rotation_deg: 20.0,
            transition_secs: 0.3,
            log_level: LevelFilter::Info,
        }
    }
}

impl FeedConfig {
    /// Parse the bundled settings; missing keys take their defaults
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUNDLED)
    }
}
