//! Bottom Navigation Component
//!
//! Decorative tab bar; only the active tab indicator changes.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Discover,
    Likes,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 4] = [NavTab::Home, NavTab::Discover, NavTab::Likes, NavTab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Discover => "Discover",
            NavTab::Likes => "Likes",
            NavTab::Profile => "Profile",
        }
    }

    fn icon(self) -> AnyView {
        match self {
            NavTab::Home => view! {
                <svg viewBox="0 0 24 24" fill="currentColor" class="nav-icon">
                    <path d="M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-4 0a1 1 0 01-1-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 01-1 1" />
                </svg>
            }
            .into_any(),
            NavTab::Discover => view! {
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="nav-icon">
                    <circle cx="11" cy="11" r="8" />
                    <line x1="21" y1="21" x2="16.65" y2="16.65" />
                </svg>
            }
            .into_any(),
            NavTab::Likes => view! {
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="nav-icon">
                    <path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z" />
                </svg>
            }
            .into_any(),
            NavTab::Profile => view! {
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="nav-icon">
                    <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
                    <circle cx="12" cy="7" r="4" />
                </svg>
            }
            .into_any(),
        }
    }
}

#[component]
pub fn BottomNav(active: NavTab) -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            {NavTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button class=if tab == active { "nav-btn nav-active" } else { "nav-btn" }>
                            {tab.icon()}
                            <span>{tab.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
