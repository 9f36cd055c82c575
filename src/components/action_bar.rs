//! Action Bar Component
//!
//! Side buttons on the active card: like, comments, share and visit.
//! Clicks never reach the card underneath.

use leptos::prelude::*;

use crate::format::format_count;
use crate::models::Card;

const HEART_PATH: &str = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z";
const COMMENT_PATH: &str = "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z";

#[component]
pub fn ActionBar(
    card: Memo<Card>,
    liked: Memo<bool>,
    /// Displayed like count, including the session's own like
    likes: Memo<u32>,
    #[prop(into)] on_toggle_like: Callback<()>,
) -> impl IntoView {
    let link = move || card.with(|c| c.link().map(str::to_string));

    view! {
        <div class="card-actions">
            <button
                class=move || if liked.get() { "action-btn liked" } else { "action-btn" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_toggle_like.run(());
                }
            >
                <svg
                    viewBox="0 0 24 24"
                    fill=move || if liked.get() { "currentColor" } else { "none" }
                    stroke="currentColor"
                    stroke-width="2"
                    class="action-icon"
                >
                    <path d=HEART_PATH />
                </svg>
                <span class="action-count">{move || format_count(likes.get())}</span>
            </button>

            <button class="action-btn" on:click=move |ev| ev.stop_propagation()>
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="action-icon">
                    <path d=COMMENT_PATH />
                </svg>
                <span class="action-count">{move || card.with(|c| format_count(c.comments))}</span>
            </button>

            <button class="action-btn" on:click=move |ev| ev.stop_propagation()>
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="action-icon">
                    <path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8" />
                    <polyline points="16 6 12 2 8 6" />
                    <line x1="12" y1="2" x2="12" y2="15" />
                </svg>
                <span class="action-count">"Share"</span>
            </button>

            {move || link().map(|url| view! {
                <a
                    class="action-btn"
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="action-icon">
                        <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
                        <polyline points="15 3 21 3 21 9" />
                        <line x1="10" y1="14" x2="21" y2="3" />
                    </svg>
                    <span class="action-count">"Visit"</span>
                </a>
            })}
        </div>
    }
}
