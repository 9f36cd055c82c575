//! Swipe Feed App
//!
//! Root component: landing page until a catalog is picked, then the feed.

use leptos::prelude::*;

use crate::components::{LandingPage, SwipeFeed};
use crate::config::FeedConfig;
use crate::context::{AppContext, Screen};

#[component]
pub fn App(config: FeedConfig) -> impl IntoView {
    let ctx = AppContext::new(config, signal(Screen::Landing));
    provide_context(ctx);

    view! {
        {move || match ctx.screen.get() {
            Screen::Landing => view! { <LandingPage /> }.into_any(),
            Screen::Feed(kind) => match kind.load() {
                Ok(catalog) => {
                    log::info!("[APP] loaded {} cards", catalog.len());
                    view! { <SwipeFeed catalog=catalog /> }.into_any()
                }
                Err(e) => {
                    log::error!("[APP] failed to load {} catalog: {}", kind.label(), e);
                    view! { <p class="load-error">"Could not load cards."</p> }.into_any()
                }
            },
        }}
    }
}
