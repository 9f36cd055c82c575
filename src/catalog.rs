//! Card Catalog
//!
//! Immutable, ordered card lists handed to the feed at construction.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{Card, CardMedia};

/// Gradient-avatar cards shipped with the bundle
const CREATORS_JSON: &str = include_str!("../assets/creators.json");

/// (id, url, title, description, likes, comments)
const SITES: &[(u32, &str, &str, &str, u32, u32)] = &[
    (1, "https://github.com", "GitHub", "Where the world builds software", 45200, 1230),
    (2, "https://stackoverflow.com", "Stack Overflow", "Where developers learn & share", 38100, 982),
    (3, "https://reddit.com", "Reddit", "The front page of the internet", 52300, 2100),
    (4, "https://wikipedia.org", "Wikipedia", "The free encyclopedia", 61000, 1540),
    (5, "https://dribbble.com", "Dribbble", "Discover the world's top designers", 19800, 567),
    (6, "https://codepen.io", "CodePen", "Social development environment", 14300, 432),
    (7, "https://medium.com", "Medium", "Where good ideas find you", 27600, 891),
    (8, "https://spotify.com", "Spotify", "Music for everyone", 67400, 3200),
    (9, "https://twitch.tv", "Twitch", "Live streaming platform", 41200, 1870),
    (10, "https://figma.com", "Figma", "Collaborative design tool", 22100, 645),
    (11, "https://notion.so", "Notion", "All-in-one workspace", 31500, 920),
    (12, "https://vercel.com", "Vercel", "Develop. Preview. Ship.", 18700, 413),
    (13, "https://netflix.com", "Netflix", "Watch anywhere. Cancel anytime.", 72100, 4100),
    (14, "https://producthunt.com", "Product Hunt", "The best new products in tech", 15400, 378),
    (15, "https://discord.com", "Discord", "Your place to talk and hang out", 48900, 2340),
    (16, "https://airbnb.com", "Airbnb", "Belong anywhere", 35600, 1120),
    (17, "https://behance.net", "Behance", "Creative portfolios showcase", 12800, 298),
    (18, "https://unsplash.com", "Unsplash", "Beautiful free images & pictures", 29300, 756),
    (19, "https://dev.to", "DEV Community", "Community of software developers", 16200, 501),
    (20, "https://linear.app", "Linear", "The issue tracking tool you'll enjoy using", 11400, 267),
    (21, "https://stripe.com", "Stripe", "Payments infrastructure for the internet", 24800, 612),
    (22, "https://openai.com", "OpenAI", "Creating safe artificial general intelligence", 58700, 3400),
    (23, "https://tailwindcss.com", "Tailwind CSS", "Rapidly build modern websites", 20100, 489),
    (24, "https://nextjs.org", "Next.js", "The React framework for the web", 26500, 710),
    (25, "https://youtube.com", "YouTube", "Broadcast yourself", 89100, 5600),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no cards")]
    Empty,
    #[error("duplicate card id {0}")]
    DuplicateId(u32),
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which built-in list to browse
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKind {
    Sites,
    Creators,
}

impl CatalogKind {
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Sites => "Sites",
            CatalogKind::Creators => "Creators",
        }
    }

    pub fn load(self) -> Result<Catalog, CatalogError> {
        match self {
            CatalogKind::Sites => Catalog::new(site_cards()),
            CatalogKind::Creators => Catalog::from_json(CREATORS_JSON),
        }
    }
}

/// Non-empty card list with unique ids. Cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    cards: Arc<[Card]>,
}

impl Catalog {
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
        }
        Ok(Self { cards: cards.into() })
    }

    /// Parse a JSON array of cards
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Card at `index`, wrapping around the end of the list
    pub fn get(&self, index: usize) -> &Card {
        &self.cards[index % self.cards.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

fn site_cards() -> Vec<Card> {
    SITES
        .iter()
        .map(|&(id, url, title, description, likes, comments)| Card {
            id,
            title: title.to_string(),
            caption: description.to_string(),
            handle: None,
            media: CardMedia::Screenshot { url: url.to_string() },
            likes,
            comments,
        })
        .collect()
}
