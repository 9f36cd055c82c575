//! Swipe Feed Frontend Entry Point

use leptos::prelude::*;
use log::LevelFilter;
use swipe_feed_ui::app::App;
use swipe_feed_ui::config::FeedConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = FeedConfig::load();
    let level = config.as_ref().map_or(LevelFilter::Info, |c| c.log_level);
    // Only fails if a logger is already installed
    let _ = console_logger::init(level);

    let config = config.unwrap_or_else(|e| {
        log::warn!("[APP] bundled config invalid, using defaults: {}", e);
        FeedConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
