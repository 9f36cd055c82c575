//! Card Face Component
//!
//! Media, overlay and text of a card. The background card shows the
//! title only.

use leptos::prelude::*;

use crate::format::{display_url, screenshot_url};
use crate::models::{Card, CardMedia};

#[component]
pub fn CardFace(card: Card, #[prop(optional)] compact: bool) -> impl IntoView {
    let media = match &card.media {
        CardMedia::Screenshot { url } => view! {
            <img
                src=screenshot_url(url)
                alt=card.title.clone()
                class="card-screenshot"
                draggable="false"
            />
        }
        .into_any(),
        CardMedia::Gradient { from, to, initials } => view! {
            <div
                class="card-gradient"
                style=format!("background: linear-gradient(135deg, {}, {});", from, to)
            >
                <span class="card-avatar">{initials.clone()}</span>
            </div>
        }
        .into_any(),
    };

    // Handle for people, bare domain for sites
    let subtitle = card
        .handle
        .clone()
        .or_else(|| card.link().map(|url| display_url(url).to_string()));

    let details = (!compact).then(|| {
        view! {
            <p class="card-caption">{card.caption.clone()}</p>
            {subtitle.map(|s| view! { <p class="card-url">{s}</p> })}
        }
    });

    view! {
        {media}
        <div class="card-overlay"></div>
        <div class="card-content-inner">
            <p class="card-site-title">{card.title.clone()}</p>
            {details}
        </div>
    }
}
