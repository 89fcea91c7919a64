//! Where characters come from.
//!
//! A session only needs a list of [`Character`]s. `CharacterSource` hides
//! whether that list is parsed from the superhero-api JSON dump or built
//! in memory.

use std::io::Read;
use std::path::Path;

use crate::cards::Character;

/// Errors while loading characters.
#[derive(Debug)]
pub enum SourceError {
    /// The payload is not a valid character list.
    Json(serde_json::Error),
    /// The payload could not be read.
    Io(std::io::Error),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Json(e) => write!(f, "Failed to parse characters: {}", e),
            SourceError::Io(e) => write!(f, "Failed to read characters: {}", e),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Json(e) => Some(e),
            SourceError::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Json(e)
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

/// Supplier of characters for a roster.
pub trait CharacterSource {
    fn characters(&self) -> Result<Vec<Character>, SourceError>;

    /// Characters whose publisher matches, ignoring case.
    fn characters_by_publisher(&self, publisher: &str) -> Result<Vec<Character>, SourceError> {
        let mut all = self.characters()?;
        all.retain(|c| c.published_by(publisher));
        Ok(all)
    }
}

/// Characters parsed from a superhero-api style JSON array.
///
/// Unknown fields (appearance, work, connections, ...) are ignored.
#[derive(Clone, Debug, Default)]
pub struct JsonCharacterSource {
    characters: Vec<Character>,
    publisher: Option<String>,
}

impl JsonCharacterSource {
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let characters = serde_json::from_str(json)?;
        Ok(Self { characters, publisher: None })
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, SourceError> {
        let characters = serde_json::from_reader(reader)?;
        Ok(Self { characters, publisher: None })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Keep only characters from this publisher.
    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Number of parsed characters before the publisher filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl CharacterSource for JsonCharacterSource {
    fn characters(&self) -> Result<Vec<Character>, SourceError> {
        let selected = match &self.publisher {
            Some(publisher) => self
                .characters
                .iter()
                .filter(|c| c.published_by(publisher))
                .cloned()
                .collect(),
            None => self.characters.clone(),
        };
        Ok(selected)
    }
}

/// A fixed, in-memory character list.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    characters: Vec<Character>,
}

impl MemorySource {
    #[must_use]
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }
}

impl CharacterSource for MemorySource {
    fn characters(&self) -> Result<Vec<Character>, SourceError> {
        Ok(self.characters.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Alignment, CharacterId, PowerStats};

    const FEED: &str = r#"[
        {
            "id": 1, "name": "A-Bomb", "slug": "1-a-bomb",
            "powerstats": {"intelligence": 38, "strength": 100, "speed": 17,
                           "durability": 80, "power": 24, "combat": 64},
            "appearance": {"gender": "Male"},
            "biography": {"fullName": "Richard Milhouse Jones",
                          "publisher": "Marvel Comics", "alignment": "good"},
            "images": {"xs": "xs.jpg", "sm": "sm.jpg", "md": "md.jpg", "lg": "lg.jpg"}
        },
        {
            "id": 70, "name": "Batman", "slug": "70-batman",
            "powerstats": {"intelligence": 100, "strength": 26, "speed": 27,
                           "durability": 50, "power": 47, "combat": 100},
            "biography": {"fullName": "Bruce Wayne", "publisher": "DC Comics",
                          "alignment": "good"}
        },
        {
            "id": 5, "name": "Abomination", "slug": "5-abomination",
            "powerstats": {"intelligence": 63, "strength": 80, "speed": 53,
                           "durability": 90, "power": 62, "combat": 95},
            "biography": {"fullName": "Emil Blonsky", "publisher": null,
                          "alignment": "bad"}
        }
    ]"#;

    #[test]
    fn test_parse_feed() {
        let source = JsonCharacterSource::from_json(FEED).unwrap();
        let characters = source.characters().unwrap();

        assert_eq!(source.len(), 3);
        assert_eq!(characters[1].id, CharacterId::new(70));
        assert_eq!(characters[1].powerstats.total(), 350);
        assert_eq!(characters[2].alignment(), Alignment::Bad);
    }

    #[test]
    fn test_publisher_filter_ignores_case() {
        let source = JsonCharacterSource::from_json(FEED)
            .unwrap()
            .with_publisher("marvel COMICS");
        let names: Vec<_> = source.characters().unwrap().into_iter().map(|c| c.name).collect();

        assert_eq!(names, vec!["A-Bomb"]);
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonCharacterSource::from_json("[{\"id\": \"x\"}]").unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = JsonCharacterSource::from_path("/nonexistent/all.json").unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn test_memory_source_by_publisher() {
        let source = MemorySource::new(vec![
            Character::new(CharacterId::new(1), "One", PowerStats::uniform(1)).with_publisher("DC Comics"),
            Character::new(CharacterId::new(2), "Two", PowerStats::uniform(2)),
        ]);

        assert_eq!(source.characters().unwrap().len(), 2);
        assert_eq!(source.characters_by_publisher("dc comics").unwrap().len(), 1);
    }
}
