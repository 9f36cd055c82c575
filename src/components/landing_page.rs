//! Landing Page Component
//!
//! Static hero with a button per built-in catalog.

use leptos::prelude::*;

use crate::catalog::CatalogKind;
use crate::context::AppContext;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="landing">
            <main class="landing-main">
                <h1 class="landing-title">"Hello World"</h1>
                <p class="landing-subtitle">"This is a Progressive Web App"</p>
                <div class="landing-actions">
                    {[CatalogKind::Sites, CatalogKind::Creators]
                        .into_iter()
                        .map(move |kind| {
                            view! {
                                <button class="landing-btn" on:click=move |_| ctx.open_feed(kind)>
                                    {format!("Browse {}", kind.label())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}
