//! Situation cards shown when a tile is visited or inspected.
//!
//! Content is a pure function of the tile's linear index: the catalogue is
//! cycled so that every tile has a card no matter how large the board is.

use crate::assets::{SITUATION_CATALOGUE, get_asset_bytes};
use crate::error::SituationError;

/// Illustration drawn at the top of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardArt {
    Sun,
    Moon,
    Star,
    Comet,
}

impl CardArt {
    const ALL: [CardArt; 4] = [CardArt::Sun, CardArt::Moon, CardArt::Star, CardArt::Comet];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Situation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub art: CardArt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    title: String,
    description: String,
}

/// Parsed catalogue of card texts.
#[derive(Debug, Clone)]
pub struct SituationDeck {
    entries: Vec<Entry>,
}

impl SituationDeck {
    /// Loads the catalogue embedded in the binary.
    pub fn load() -> Result<Self, SituationError> {
        let bytes = get_asset_bytes(SITUATION_CATALOGUE)
            .ok_or_else(|| SituationError::MissingCatalogue(SITUATION_CATALOGUE.to_string()))?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    /// Parses `title | description` lines. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, SituationError> {
        let mut entries = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (title, description) = line
                .split_once('|')
                .map(|(t, d)| (t.trim(), d.trim()))
                .filter(|(t, d)| !t.is_empty() && !d.is_empty())
                .ok_or(SituationError::MalformedEntry { line: i + 1 })?;
            entries.push(Entry {
                title: title.to_string(),
                description: description.to_string(),
            });
        }
        if entries.is_empty() {
            return Err(SituationError::EmptyCatalogue);
        }
        log::info!("Loaded {} situation entries.", entries.len());
        Ok(SituationDeck { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Card for the 1-based tile `index`.
    pub fn situation(&self, index: usize) -> Situation {
        let offset = index.saturating_sub(1);
        let entry = &self.entries[offset % self.entries.len()];
        Situation {
            id: format!("situation-{}", index),
            title: entry.title.clone(),
            description: entry.description.clone(),
            art: CardArt::ALL[offset % CardArt::ALL.len()],
        }
    }

    /// Cards for tiles 1..=total, in index order.
    pub fn situations(&self, total: usize) -> Vec<Situation> {
        (1..=total).map(|i| self.situation(i)).collect()
    }
}
