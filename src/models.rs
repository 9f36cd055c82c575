//! Feed Models
//!
//! Card records shown in the swipe feed.

use serde::{Deserialize, Serialize};

/// One feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub caption: String,
    #[serde(default)]
    pub handle: Option<String>,
    pub media: CardMedia,
    pub likes: u32,
    pub comments: u32,
}

/// What fills the card background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardMedia {
    /// Screenshot of a website, fetched from the thumbnail service
    Screenshot { url: String },
    /// Two-colour gradient with avatar initials
    Gradient {
        from: String,
        to: String,
        initials: String,
    },
}

impl Card {
    /// External URL the card links to (site cards only)
    pub fn link(&self) -> Option<&str> {
        match &self.media {
            CardMedia::Screenshot { url } => Some(url),
            CardMedia::Gradient { .. } => None,
        }
    }
}
