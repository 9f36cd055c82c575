//! Swipe Feed Component
//!
//! Card stack driven by mouse and touch gestures. Swipe right to like,
//! left to skip; short drags snap back.

use leptos::prelude::*;
use swipe_gesture::{mouse_point, starts_on_control, touch_point};

use crate::catalog::Catalog;
use crate::components::{ActionBar, BottomNav, CardFace, NavTab};
use crate::context::AppContext;
use crate::feed::{finish_gesture, FeedState};
use crate::timer::{BrowserScheduler, BrowserTimer, TimerHandle};

#[component]
pub fn SwipeFeed(catalog: Catalog) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let feed = RwSignal::new(FeedState::new(catalog, ctx.config));

    // Pending advance after a committed swipe
    let pending = StoredValue::new_local(None::<BrowserTimer>);
    on_cleanup(move || {
        if let Some(timer) = pending.try_update_value(Option::take).flatten() {
            timer.cancel();
        }
    });

    let release = move || {
        if let Some(timer) = finish_gesture(&feed, &BrowserScheduler) {
            pending.set_value(Some(timer));
        }
    };

    let on_mousedown = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || starts_on_control(&ev) {
            return;
        }
        let at = mouse_point(&ev);
        feed.update(|f| f.begin(at));
    };

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let at = mouse_point(&ev);
        feed.maybe_update(|f| f.move_to(at));
    };

    let on_touchstart = move |ev: web_sys::TouchEvent| {
        if starts_on_control(&ev) {
            return;
        }
        if let Some(at) = touch_point(&ev) {
            feed.update(|f| f.begin(at));
        }
    };

    let on_touchmove = move |ev: web_sys::TouchEvent| {
        if let Some(at) = touch_point(&ev) {
            feed.maybe_update(|f| f.move_to(at));
        }
        // Horizontal swipes own the touch; vertical ones scroll the page
        if feed.with_untracked(FeedState::prevents_scroll) {
            ev.prevent_default();
        }
    };

    let on_toggle_like = Callback::new(move |_: ()| {
        feed.update(|f| {
            let id = f.active_card().id;
            let liked = f.toggle_like(id);
            log::debug!("[FEED] card {} liked={}", id, liked);
        });
    });

    let active = Memo::new(move |_| feed.with(|f| f.active_card().clone()));
    let next = Memo::new(move |_| feed.with(|f| f.next_card().clone()));
    let liked = Memo::new(move |_| feed.with(|f| f.is_liked(f.active_card().id)));
    let likes = Memo::new(move |_| feed.with(|f| f.display_likes(f.active_card())));
    let card_style = Memo::new(move |_| feed.with(|f| f.card_style().to_css()));
    let hint = Memo::new(move |_| feed.with(FeedState::hint));
    let position = Memo::new(move |_| feed.with(FeedState::position));

    view! {
        <div class="swipe-feed-container">
            <div class="card-stack">
                // Background (next) card
                <div class="card-bg">
                    {move || view! { <CardFace card=next.get() compact=true /> }}
                </div>

                // Active card
                <div
                    class="card-active"
                    style=move || card_style.get()
                    on:mousedown=on_mousedown
                    on:mousemove=on_mousemove
                    on:mouseup=move |_| release()
                    on:mouseleave=move |_| release()
                    on:touchstart=on_touchstart
                    on:touchmove=on_touchmove
                    on:touchend=move |_| release()
                    on:touchcancel=move |_| feed.update(FeedState::cancel)
                >
                    {move || view! { <CardFace card=active.get() /> }}

                    {move || hint.get().map(|h| view! { <div class=h.class()>{h.label()}</div> })}

                    <ActionBar
                        card=active
                        liked=liked
                        likes=likes
                        on_toggle_like=on_toggle_like
                    />
                </div>
            </div>

            <div class="card-counter">
                {move || {
                    let (index, total) = position.get();
                    format!("{} / {}", index, total)
                }}
            </div>

            <BottomNav active=NavTab::Home />

            <div class="swipe-hint-text">"Swipe right to like, left to skip"</div>
        </div>
    }
}
