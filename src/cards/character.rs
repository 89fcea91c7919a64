//! Character records - the cards of a duel.
//!
//! A `Character` is immutable from the engine's point of view. Only the id
//! and the power statistics matter for battles; alignment is used for
//! roster filtering and the rest is display metadata carried through.

use serde::{Deserialize, Serialize};

use super::stats::PowerStats;

/// Unique character identifier, as assigned by the character feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// Moral alignment from the character's biography.
///
/// The feed uses `"good"`, `"bad"` and `"neutral"`; anything else (the
/// feed writes `"-"` for unknown) becomes `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Good,
    Bad,
    Neutral,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Biography metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Biography {
    pub full_name: String,
    pub publisher: Option<String>,
    pub alignment: Alignment,
}

/// Portrait URLs by size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
}

/// A playable character card.
///
/// ## Example
///
/// ```
/// use hero_duel::cards::{Alignment, Character, CharacterId, PowerStats};
///
/// let hulk = Character::new(CharacterId::new(332), "Hulk", PowerStats::from_array([88, 100, 63, 100, 98, 85]))
///     .with_alignment(Alignment::Good)
///     .with_publisher("Marvel Comics");
///
/// assert_eq!(hulk.total_power(), 534);
/// assert_eq!(hulk.alignment(), Alignment::Good);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub powerstats: PowerStats,
    #[serde(default)]
    pub biography: Biography,
    #[serde(default)]
    pub images: Images,
}

impl Character {
    /// Create a character with empty metadata.
    #[must_use]
    pub fn new(id: CharacterId, name: impl Into<String>, powerstats: PowerStats) -> Self {
        Self {
            id,
            name: name.into(),
            slug: String::new(),
            powerstats,
            biography: Biography::default(),
            images: Images::default(),
        }
    }

    /// Set the alignment (builder pattern).
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.biography.alignment = alignment;
        self
    }

    /// Set the publisher (builder pattern).
    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.biography.publisher = Some(publisher.into());
        self
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.biography.alignment
    }

    /// Sum of the six power statistics.
    #[must_use]
    pub fn total_power(&self) -> u32 {
        self.powerstats.total()
    }

    /// Case-insensitive publisher match. Characters without a publisher
    /// never match.
    #[must_use]
    pub fn published_by(&self, publisher: &str) -> bool {
        self.biography
            .publisher
            .as_deref()
            .is_some_and(|p| p.eq_ignore_ascii_case(publisher))
    }
}
