//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::CatalogKind;
use crate::config::FeedConfig;

/// Which screen is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Feed(CatalogKind),
}

/// App-wide settings and signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: FeedConfig,
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
}

impl AppContext {
    pub fn new(config: FeedConfig, screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            config,
            screen: screen.0,
            set_screen: screen.1,
        }
    }

    /// Switch to the swipe feed for `kind`
    pub fn open_feed(&self, kind: CatalogKind) {
        log::info!("[APP] opening {} feed", kind.label());
        self.set_screen.set(Screen::Feed(kind));
    }
}
