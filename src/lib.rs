//! Swipe Feed UI
//!
//! Tinder-style card feed for the browser, built with Leptos.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod context;
pub mod feed;
pub mod format;
pub mod models;
pub mod projection;
pub mod timer;
