//! Character roster and the character browser's selection state

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One transformation variant of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub name: String,
    /// Artwork asset path
    pub artwork: String,
    /// Artwork width in pixels, used to size the artwork frame
    pub width: u16,
    pub quote: String,
    /// Icon asset path
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Romanized name shown under the display name
    pub eng_name: String,
    pub icon: String,
    /// Transformation selected when the browser opens
    #[serde(default)]
    pub default_transformation: usize,
    pub transformations: Vec<Transformation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Character selected when the browser opens
    #[serde(default)]
    pub initial_character: usize,
    pub characters: Vec<Character>,
}

fn transformation(name: &str, artwork: &str, width: u16, quote: &str, icon: &str) -> Transformation {
    Transformation {
        name: name.to_string(),
        artwork: artwork.to_string(),
        width,
        quote: quote.to_string(),
        icon: icon.to_string(),
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            initial_character: 2,
            characters: vec![
                Character {
                    name: "손오공".to_string(),
                    eng_name: "songoku".to_string(),
                    icon: "/s.png".to_string(),
                    default_transformation: 0,
                    transformations: vec![
                        transformation(
                            "초사이어인",
                            "/s2.webp",
                            750,
                            "\"넌 내 소중한 것들을 많이 빼앗아 갔어.. 절대로 용서 못해!\"",
                            "/s-sai-icon.png",
                        ),
                        transformation(
                            "초사이어인 갓",
                            "/s3.webp",
                            550,
                            "\"별은 부술 수 있어도, 단 한 명의 인간은 부술 수 없나보군...\"",
                            "/s-god-icon.png",
                        ),
                        transformation(
                            "초사이어인 블루",
                            "/s4.webp",
                            900,
                            "\"이제부터가 진정한 승부다.\"",
                            "/s-blue-icon.png",
                        ),
                    ],
                },
                Character {
                    name: "배지터".to_string(),
                    eng_name: "vegeta".to_string(),
                    icon: "/v.png".to_string(),
                    default_transformation: 1,
                    transformations: vec![
                        transformation(
                            "초사이어인",
                            "/v2.webp",
                            650,
                            "\"움직이지 못하는 사이어인은 필요없다!\"",
                            "/v-sai-icon.png",
                        ),
                        transformation(
                            "초사이어인 갓",
                            "/v3.webp",
                            550,
                            "\"노력해도 절대 넘어설 수 없는 벽이 있다는 것을 보여주마.\"",
                            "/v-god-icon.png",
                        ),
                        transformation(
                            "초사이어인 블루",
                            "/v4.webp",
                            350,
                            "\"파괴할 수조차 없는 기술을 먹여주지.\"",
                            "/v-blue-icon.png",
                        ),
                    ],
                },
                Character {
                    name: "오지터".to_string(),
                    eng_name: "Gogeta".to_string(),
                    icon: "/sv-normal-icon.png".to_string(),
                    default_transformation: 2,
                    transformations: vec![
                        transformation(
                            "노말",
                            "/sv1.png",
                            650,
                            "\"흠, 난 오지터. 오공과 베지터가 합체한 거라고.\"",
                            "/sv-normal-icon.png",
                        ),
                        transformation(
                            "초사이어인",
                            "/sv2.webp",
                            650,
                            "\"30분이나 필요 없어. 손가락 하나면 충분하다!\"",
                            "/sv-sai-icon.png",
                        ),
                        transformation(
                            "초사이어인 블루",
                            "/sv3.webp",
                            550,
                            "\"자, 이제 결판을 내자고.\"",
                            "/sv-blue-icon.png",
                        ),
                    ],
                },
            ],
        }
    }
}

impl Roster {
    /// Load and validate a roster from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let roster: Roster =
            toml::from_str(content).map_err(|e| Error::Roster(e.to_string()))?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn validate(&self) -> Result<()> {
        if self.characters.is_empty() {
            return Err(Error::Roster("roster has no characters".to_string()));
        }
        if self.initial_character >= self.characters.len() {
            return Err(Error::Roster(format!(
                "initial_character {} is out of range (roster has {} characters)",
                self.initial_character,
                self.characters.len()
            )));
        }
        for character in &self.characters {
            if character.transformations.is_empty() {
                return Err(Error::Roster(format!(
                    "character '{}' has no transformations",
                    character.eng_name
                )));
            }
            if character.default_transformation >= character.transformations.len() {
                return Err(Error::Roster(format!(
                    "character '{}' default_transformation {} is out of range",
                    character.eng_name, character.default_transformation
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    /// Widest artwork in the roster, used to scale artwork frames
    pub fn max_artwork_width(&self) -> u16 {
        self.characters
            .iter()
            .flat_map(|c| c.transformations.iter())
            .map(|t| t.width)
            .max()
            .unwrap_or(1)
            .max(1)
    }
}

/// Selection state of the character browser
///
/// Lives only while the character page is the active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    selected: usize,
    /// Selected transformation per character
    transformations: Vec<usize>,
}

impl BrowserState {
    pub fn new(roster: &Roster) -> Self {
        Self {
            selected: roster.initial_character.min(roster.len().saturating_sub(1)),
            transformations: roster
                .characters
                .iter()
                .map(|c| c.default_transformation)
                .collect(),
        }
    }

    pub fn selected_character(&self) -> usize {
        self.selected
    }

    /// Selected transformation of the given character
    pub fn transformation_of(&self, character: usize) -> Option<usize> {
        self.transformations.get(character).copied()
    }

    pub fn selected_transformation(&self) -> usize {
        self.transformation_of(self.selected).unwrap_or(0)
    }

    /// Select a character; out-of-range indices are ignored
    pub fn select_character(&mut self, index: usize) -> bool {
        if index >= self.transformations.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Select a transformation of the current character
    pub fn select_transformation(&mut self, roster: &Roster, index: usize) -> bool {
        let Some(character) = roster.get(self.selected) else {
            return false;
        };
        if index >= character.transformations.len() {
            return false;
        }
        match self.transformations.get_mut(self.selected) {
            Some(slot) => {
                *slot = index;
                true
            }
            None => false,
        }
    }

    pub fn current<'a>(&self, roster: &'a Roster) -> Option<(&'a Character, &'a Transformation)> {
        let character = roster.get(self.selected)?;
        let transformation = character.transformations.get(self.selected_transformation())?;
        Some((character, transformation))
    }
}
