//! UI Components
//!
//! Leptos components for the landing page and the swipe feed.

mod action_bar;
mod bottom_nav;
mod card_face;
mod landing_page;
mod swipe_feed;

pub use action_bar::ActionBar;
pub use bottom_nav::{BottomNav, NavTab};
pub use card_face::CardFace;
pub use landing_page::LandingPage;
pub use swipe_feed::SwipeFeed;
