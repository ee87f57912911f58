use serde::{Deserialize, Deserializer, Serialize};

use super::card::CardConfig;
use super::{ids, new_id, now_millis};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::template::{CardInfo, ProjectInfo, builtin_skeleton, render_template};
use crate::domain::value_objects::Strategy;

/// A card project in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "ids::string_or_number")]
    pub id: String,
    pub name: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_edited: i64,
    pub data: ProjectData,
}

/// The editable content of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub name: String,
    #[serde(default, deserialize_with = "strategy_lossy")]
    pub strategy: Strategy,
    #[serde(default)]
    pub custom_template: String,
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

fn strategy_lossy<'de, D: Deserializer<'de>>(d: D) -> Result<Strategy, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(Strategy::parse_lossy(&raw))
}

impl Project {
    /// A fresh, empty project.
    ///
    /// Custom projects start from the Vanilla skeleton so there is something
    /// to edit.
    pub fn new(name: impl Into<String>, strategy: Strategy) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        let custom_template = match strategy {
            Strategy::Custom => builtin_skeleton(Strategy::Vanilla).to_string(),
            _ => String::new(),
        };
        Ok(Self {
            id: new_id(),
            name: name.clone(),
            last_edited: now_millis(),
            data: ProjectData {
                name,
                strategy,
                custom_template,
                cards: Vec::new(),
            },
        })
    }

    pub fn touch(&mut self) {
        self.last_edited = now_millis();
    }

    pub fn strategy(&self) -> Strategy {
        self.data.strategy
    }

    /// Render source for `card` with this project's strategy and template.
    pub fn render(&self, card: CardInfo<'_>) -> String {
        render_template(
            self.data.strategy,
            Some(self.data.custom_template.as_str()),
            ProjectInfo::new(&self.data.name),
            card,
        )
    }

    pub fn cards(&self) -> &[CardConfig] {
        &self.data.cards
    }

    pub fn card(&self, index: usize) -> DomainResult<&CardConfig> {
        self.data.cards.get(index).ok_or_else(|| self.card_not_found(index))
    }

    pub fn card_mut(&mut self, index: usize) -> DomainResult<&mut CardConfig> {
        let err = self.card_not_found(index);
        self.data.cards.get_mut(index).ok_or(err)
    }

    /// Append a new card with generated code; returns its index.
    pub fn add_card(&mut self) -> usize {
        let number = self.data.cards.len() + 1;
        let class_name = format!("NewCard{number}");
        let code = self.render(CardInfo::new().name(&class_name));
        self.data.cards.push(CardConfig {
            name: format!("New Card {number}"),
            code,
            ..CardConfig::default()
        });
        self.touch();
        number - 1
    }

    pub fn remove_card(&mut self, index: usize) -> DomainResult<CardConfig> {
        if index >= self.data.cards.len() {
            return Err(self.card_not_found(index));
        }
        self.touch();
        Ok(self.data.cards.remove(index))
    }

    fn card_not_found(&self, index: usize) -> DomainError {
        DomainError::CardNotFound {
            project: self.id.clone(),
            index,
        }
    }
}
