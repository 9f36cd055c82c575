//! Swipe Feed State
//!
//! The card stack's state machine: gesture tracking, commit decisions,
//! the circular feed cursor and the session's like set. Rendering reads
//! from here; events write through the methods below.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use leptos::prelude::*;
use swipe_gesture::{decide, GestureTracker, Point, Release, SwipeDirection};

use crate::catalog::Catalog;
use crate::config::FeedConfig;
use crate::models::Card;
use crate::projection::{self, CardStyle, SwipeHint};
use crate::timer::Scheduler;

#[derive(Debug, Clone)]
pub struct FeedState {
    catalog: Catalog,
    config: FeedConfig,
    /// Always `< catalog.len()`
    cursor: usize,
    liked: HashSet<u32>,
    gesture: GestureTracker,
    /// Set while the active card animates out
    exit: Option<SwipeDirection>,
}

impl FeedState {
    pub fn new(catalog: Catalog, config: FeedConfig) -> Self {
        Self {
            catalog,
            config,
            cursor: 0,
            liked: HashSet::new(),
            gesture: GestureTracker::new(config.axis_lock_px),
            exit: None,
        }
    }

    // ========================
    // Gesture
    // ========================

    /// Pointer down on the active card. Ignored while a card is exiting.
    pub fn begin(&mut self, at: Point) {
        if self.exit.is_some() {
            log::debug!("[FEED] gesture ignored, card {} still exiting", self.active_card().id);
            return;
        }
        self.gesture.begin(at);
    }

    /// Pointer moved. Returns true if the card needs to be redrawn.
    pub fn move_to(&mut self, at: Point) -> bool {
        self.gesture.move_to(at)
    }

    /// Pointer released. Returns None if no gesture was in progress.
    ///
    /// A commit marks the exit direction (and likes the card on a right
    /// swipe); the caller must call `complete_exit` once the exit animation
    /// has played. A snap back takes effect immediately.
    pub fn end(&mut self) -> Option<Release> {
        let offset = self.gesture.end()?;
        let release = decide(offset, self.config.commit_threshold_px);
        match release {
            Release::Commit(direction) => {
                let id = self.active_card().id;
                self.exit = Some(direction);
                if direction == SwipeDirection::Right {
                    self.set_liked(id, true);
                }
                log::info!("[FEED] card {} swiped {:?} (offset {})", id, direction, offset);
            }
            Release::SnapBack => {
                self.gesture.reset_offset();
            }
        }
        Some(release)
    }

    /// Drop an in-progress gesture without deciding anything
    pub fn cancel(&mut self) {
        self.gesture.cancel();
    }

    /// Advance past the exited card and reset for the next gesture.
    /// No-op if nothing is exiting.
    pub fn complete_exit(&mut self) {
        if self.exit.take().is_none() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.catalog.len();
        self.gesture.reset_offset();
        log::debug!("[FEED] cursor at {}", self.cursor);
    }

    // ========================
    // Likes
    // ========================

    /// Flip like membership; returns the new state
    pub fn toggle_like(&mut self, id: u32) -> bool {
        let liked = !self.liked.contains(&id);
        self.set_liked(id, liked);
        liked
    }

    pub fn set_liked(&mut self, id: u32, liked: bool) {
        if liked {
            self.liked.insert(id);
        } else {
            self.liked.remove(&id);
        }
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    /// Base likes plus the session's own like
    pub fn display_likes(&self, card: &Card) -> u32 {
        card.likes + u32::from(self.is_liked(card.id))
    }

    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }

    // ========================
    // Read side
    // ========================

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active_card(&self) -> &Card {
        self.catalog.get(self.cursor)
    }

    pub fn next_card(&self) -> &Card {
        self.catalog.get(self.cursor + 1)
    }

    /// 1-based position and total, for the "3 / 25" counter
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.catalog.len())
    }

    pub fn offset(&self) -> f64 {
        self.gesture.offset()
    }

    pub fn exit(&self) -> Option<SwipeDirection> {
        self.exit
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn prevents_scroll(&self) -> bool {
        self.gesture.prevents_scroll()
    }

    pub fn exit_delay_ms(&self) -> u32 {
        self.config.exit_delay_ms
    }

    pub fn card_style(&self) -> CardStyle {
        projection::project(self.offset(), self.exit, self.is_dragging(), &self.config)
    }

    pub fn hint(&self) -> Option<SwipeHint> {
        projection::swipe_hint(self.offset(), &self.config)
    }
}

/// Shared, mutable access to a feed from event handlers and timers
pub trait FeedHandle: Clone + 'static {
    /// Returns None if the feed is gone
    fn with_mut<R>(&self, f: impl FnOnce(&mut FeedState) -> R) -> Option<R>;
}

impl FeedHandle for RwSignal<FeedState> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut FeedState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FeedHandle for Rc<RefCell<FeedState>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut FeedState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Release the current gesture. On a commit, schedules the cursor advance
/// after the exit delay and returns the pending timer.
pub fn finish_gesture<H, S>(feed: &H, scheduler: &S) -> Option<S::Handle>
where
    H: FeedHandle,
    S: Scheduler,
{
    let (release, delay_ms) = feed
        .with_mut(|f| f.end().map(|release| (release, f.exit_delay_ms())))
        .flatten()?;

    match release {
        Release::Commit(_) => {
            let feed = feed.clone();
            Some(scheduler.schedule(delay_ms, move || {
                feed.with_mut(FeedState::complete_exit);
            }))
        }
        Release::SnapBack => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardMedia;
    use crate::timer::manual::ManualScheduler;
    use crate::timer::TimerHandle;

    fn make_card(id: u32, likes: u32) -> Card {
        Card {
            id,
            title: format!("Card {}", id),
            caption: String::new(),
            handle: None,
            media: CardMedia::Screenshot { url: format!("https://site{}.example", id) },
            likes,
            comments: 0,
        }
    }

    fn make_feed(n: u32) -> FeedState {
        let cards = (1..=n).map(|id| make_card(id, 45200)).collect();
        FeedState::new(Catalog::new(cards).unwrap(), FeedConfig::default())
    }

    fn shared_feed(n: u32) -> Rc<RefCell<FeedState>> {
        Rc::new(RefCell::new(make_feed(n)))
    }

    /// Horizontal drag from the origin ending at `dx`
    fn drag(feed: &mut FeedState, dx: f64) {
        feed.begin(Point::new(0.0, 0.0));
        feed.move_to(Point::new(dx / 2.0, 1.0));
        feed.move_to(Point::new(dx, 2.0));
    }

    fn swipe<S: Scheduler>(feed: &Rc<RefCell<FeedState>>, sched: &S, dx: f64) -> Option<S::Handle> {
        drag(&mut feed.borrow_mut(), dx);
        finish_gesture(feed, sched)
    }

    #[test]
    fn test_commit_right_likes_and_advances_after_delay() {
        let feed = shared_feed(5);
        let sched = ManualScheduler::new();

        let timer = swipe(&feed, &sched, 120.0);
        assert!(timer.is_some());
        {
            let f = feed.borrow();
            assert_eq!(f.exit(), Some(SwipeDirection::Right));
            assert!(f.is_liked(1));
            assert_eq!(f.cursor(), 0);
            assert!(!f.is_dragging());
        }

        sched.advance(299);
        assert_eq!(feed.borrow().cursor(), 0);

        sched.advance(1);
        let f = feed.borrow();
        assert_eq!(f.cursor(), 1);
        assert_eq!(f.offset(), 0.0);
        assert_eq!(f.exit(), None);
        assert_eq!(f.active_card().id, 2);
    }

    #[test]
    fn test_commit_left_skips_without_like() {
        let feed = shared_feed(5);
        let sched = ManualScheduler::new();

        swipe(&feed, &sched, -150.0);
        assert_eq!(feed.borrow().exit(), Some(SwipeDirection::Left));
        assert_eq!(feed.borrow().liked_count(), 0);

        sched.advance(300);
        assert_eq!(feed.borrow().cursor(), 1);
    }

    #[test]
    fn test_below_threshold_snaps_back_immediately() {
        let feed = shared_feed(5);
        let sched = ManualScheduler::new();

        let timer = swipe(&feed, &sched, 40.0);
        assert!(timer.is_none());
        assert_eq!(sched.pending(), 0);

        let f = feed.borrow();
        assert_eq!(f.exit(), None);
        assert_eq!(f.offset(), 0.0);
        assert_eq!(f.cursor(), 0);
        assert!(!f.is_liked(1));
    }

    #[test]
    fn test_vertical_gesture_never_moves_cursor() {
        let feed = shared_feed(3);
        let sched = ManualScheduler::new();
        {
            let mut f = feed.borrow_mut();
            f.begin(Point::new(0.0, 0.0));
            f.move_to(Point::new(5.0, 30.0));
            f.move_to(Point::new(400.0, 40.0));
            assert_eq!(f.offset(), 0.0);
        }
        assert!(finish_gesture(&feed, &sched).is_none());
        sched.advance(1000);
        assert_eq!(feed.borrow().cursor(), 0);
    }

    #[test]
    fn test_end_without_gesture_is_noop() {
        let feed = shared_feed(3);
        let sched = ManualScheduler::new();
        assert!(finish_gesture(&feed, &sched).is_none());
        assert_eq!(feed.borrow_mut().end(), None);
    }

    #[test]
    fn test_move_without_begin_is_ignored() {
        let mut feed = make_feed(3);
        assert!(!feed.move_to(Point::new(300.0, 0.0)));
        assert_eq!(feed.offset(), 0.0);
        assert_eq!(feed.end(), None);
    }

    #[test]
    fn test_begin_ignored_while_exiting() {
        let feed = shared_feed(3);
        let sched = ManualScheduler::new();
        swipe(&feed, &sched, 200.0);

        {
            let mut f = feed.borrow_mut();
            f.begin(Point::new(0.0, 0.0));
            assert!(!f.is_dragging());
            f.move_to(Point::new(-200.0, 0.0));
        }
        assert!(finish_gesture(&feed, &sched).is_none());

        sched.advance(300);
        assert_eq!(feed.borrow().cursor(), 1);
        assert!(feed.borrow().is_liked(1));
    }

    #[test]
    fn test_n_commits_wrap_cursor() {
        let feed = shared_feed(4);
        let sched = ManualScheduler::new();
        for i in 0..4 {
            let dx = if i % 2 == 0 { 150.0 } else { -150.0 };
            swipe(&feed, &sched, dx);
            sched.advance(300);
        }
        assert_eq!(feed.borrow().cursor(), 0);
        assert_eq!(feed.borrow().active_card().id, 1);
    }

    #[test]
    fn test_likes_persist_across_wrap() {
        let feed = shared_feed(2);
        let sched = ManualScheduler::new();
        swipe(&feed, &sched, 150.0);
        sched.advance(300);
        swipe(&feed, &sched, -150.0);
        sched.advance(300);

        let f = feed.borrow();
        assert_eq!(f.active_card().id, 1);
        assert!(f.is_liked(1));
        assert!(!f.is_liked(2));
    }

    #[test]
    fn test_cancelled_exit_keeps_cursor() {
        let feed = shared_feed(3);
        let sched = ManualScheduler::new();
        let timer = swipe(&feed, &sched, 150.0).unwrap();
        timer.cancel();
        sched.advance(1000);
        assert_eq!(feed.borrow().cursor(), 0);
        assert_eq!(feed.borrow().exit(), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_complete_exit_without_exit_is_noop() {
        let mut feed = make_feed(3);
        feed.complete_exit();
        assert_eq!(feed.cursor(), 0);
    }

    #[test]
    fn test_toggle_like_is_involution() {
        let mut feed = make_feed(3);
        assert!(feed.toggle_like(2));
        assert!(feed.is_liked(2));
        assert!(!feed.toggle_like(2));
        assert!(!feed.is_liked(2));
    }

    #[test]
    fn test_swipe_like_and_toggle_share_membership() {
        let feed = shared_feed(3);
        let sched = ManualScheduler::new();

        // Liked by toggle, then swiped right: still a single membership
        feed.borrow_mut().toggle_like(1);
        swipe(&feed, &sched, 150.0);
        assert!(feed.borrow().is_liked(1));
        assert_eq!(feed.borrow().liked_count(), 1);

        // Toggling now removes the swipe's like
        assert!(!feed.borrow_mut().toggle_like(1));
        assert_eq!(feed.borrow().liked_count(), 0);
    }

    #[test]
    fn test_display_likes() {
        let mut feed = make_feed(3);
        let card = feed.active_card().clone();
        assert_eq!(feed.display_likes(&card), 45200);
        feed.toggle_like(card.id);
        assert_eq!(feed.display_likes(&card), 45201);
        feed.toggle_like(card.id);
        assert_eq!(feed.display_likes(&card), 45200);
    }

    #[test]
    fn test_next_card_and_position() {
        let feed = shared_feed(3);
        let sched = ManualScheduler::new();
        assert_eq!(feed.borrow().next_card().id, 2);
        assert_eq!(feed.borrow().position(), (1, 3));

        for _ in 0..2 {
            swipe(&feed, &sched, -150.0);
            sched.advance(300);
        }
        let f = feed.borrow();
        assert_eq!(f.active_card().id, 3);
        assert_eq!(f.next_card().id, 1);
        assert_eq!(f.position(), (3, 3));
    }

    #[test]
    fn test_single_card_catalog() {
        let feed = shared_feed(1);
        let sched = ManualScheduler::new();
        assert_eq!(feed.borrow().next_card().id, 1);
        swipe(&feed, &sched, 150.0);
        sched.advance(300);
        assert_eq!(feed.borrow().cursor(), 0);
    }

    #[test]
    fn test_card_style_follows_state() {
        let mut feed = make_feed(3);
        drag(&mut feed, 60.0);
        assert_eq!(feed.card_style().transition, "none");
        assert_eq!(feed.hint(), Some(SwipeHint::Like));

        feed.end();
        // Snap back: offset cleared, transition re-enabled
        assert_eq!(feed.card_style().transform, "translateX(0px) rotate(0deg)");
        assert_ne!(feed.card_style().transition, "none");
        assert_eq!(feed.hint(), None);
    }

    #[test]
    fn test_cancel_drops_gesture() {
        let mut feed = make_feed(3);
        drag(&mut feed, 200.0);
        feed.cancel();
        assert_eq!(feed.end(), None);
        assert_eq!(feed.offset(), 0.0);
        assert_eq!(feed.exit(), None);
    }
}
