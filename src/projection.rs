//! Card Projection
//!
//! Maps drag offset and exit state to the active card's inline style.

use swipe_gesture::SwipeDirection;

use crate::config::FeedConfig;

/// Inline style for the active card
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub transform: String,
    pub opacity: f64,
    pub transition: String,
    pub cursor: &'static str,
}

impl CardStyle {
    pub fn to_css(&self) -> String {
        format!(
            "transform: {}; opacity: {}; transition: {}; cursor: {};",
            self.transform, self.opacity, self.transition, self.cursor
        )
    }
}

/// Overlay label shown while dragging
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeHint {
    Like,
    Nope,
}

impl SwipeHint {
    pub fn label(self) -> &'static str {
        match self {
            SwipeHint::Like => "LIKE",
            SwipeHint::Nope => "NOPE",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            SwipeHint::Like => "swipe-label swipe-like",
            SwipeHint::Nope => "swipe-label swipe-nope",
        }
    }
}

pub fn project(
    offset: f64,
    exit: Option<SwipeDirection>,
    dragging: bool,
    config: &FeedConfig,
) -> CardStyle {
    let (transform, opacity) = match exit {
        Some(direction) => {
            let sign = direction.sign();
            (
                format!(
                    "translateX({}%) rotate({}deg)",
                    sign * config.exit_translate_pct,
                    sign * config.exit_rotation_deg
                ),
                0.0,
            )
        }
        None => (
            format!(
                "translateX({}px) rotate({}deg)",
                offset,
                offset * config.rotation_per_px
            ),
            1.0,
        ),
    };

    // Instant while dragging so the card follows the pointer without lag
    let transition = if dragging {
        "none".to_string()
    } else {
        format!(
            "transform {secs}s ease, opacity {secs}s ease",
            secs = config.transition_secs
        )
    };

    CardStyle {
        transform,
        opacity,
        transition,
        cursor: if dragging { "grabbing" } else { "grab" },
    }
}

pub fn swipe_hint(offset: f64, config: &FeedConfig) -> Option<SwipeHint> {
    if offset > config.hint_px {
        Some(SwipeHint::Like)
    } else if offset < -config.hint_px {
        Some(SwipeHint::Nope)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_card() {
        let style = project(0.0, None, false, &FeedConfig::default());
        assert_eq!(style.transform, "translateX(0px) rotate(0deg)");
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.transition, "transform 0.3s ease, opacity 0.3s ease");
        assert_eq!(style.cursor, "grab");
    }

    #[test]
    fn test_dragging_card_rotates_with_offset() {
        let config = FeedConfig::default();
        let style = project(120.0, None, true, &config);
        assert_eq!(style.transform, "translateX(120px) rotate(9.6deg)");
        assert_eq!(style.transition, "none");
        assert_eq!(style.cursor, "grabbing");

        let style = project(-50.0, None, true, &config);
        assert_eq!(style.transform, "translateX(-50px) rotate(-4deg)");
    }

    #[test]
    fn test_exit_overrides_offset() {
        let config = FeedConfig::default();
        let left = project(-30.0, Some(SwipeDirection::Left), false, &config);
        assert_eq!(left.transform, "translateX(-120%) rotate(-20deg)");
        assert_eq!(left.opacity, 0.0);

        let right = project(130.0, Some(SwipeDirection::Right), false, &config);
        assert_eq!(right.transform, "translateX(120%) rotate(20deg)");
        assert_eq!(right.opacity, 0.0);
    }

    #[test]
    fn test_to_css() {
        let css = project(0.0, Some(SwipeDirection::Right), false, &FeedConfig::default()).to_css();
        assert_eq!(
            css,
            "transform: translateX(120%) rotate(20deg); opacity: 0; \
             transition: transform 0.3s ease, opacity 0.3s ease; cursor: grab;"
        );
    }

    #[test]
    fn test_swipe_hint() {
        let config = FeedConfig::default();
        assert_eq!(swipe_hint(51.0, &config), Some(SwipeHint::Like));
        assert_eq!(swipe_hint(-51.0, &config), Some(SwipeHint::Nope));
        assert_eq!(swipe_hint(50.0, &config), None);
        assert_eq!(swipe_hint(-50.0, &config), None);
        assert_eq!(swipe_hint(0.0, &config), None);
        assert_eq!(SwipeHint::Like.label(), "LIKE");
    }
}
