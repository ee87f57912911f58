use serde::{Deserialize, Serialize};

use super::ids;
use crate::domain::value_objects::Strategy;

/// A reusable piece of card code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(deserialize_with = "ids::string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    /// `None` means the snippet sits at the root.
    #[serde(default, deserialize_with = "ids::optional_string_or_number")]
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetFolder {
    #[serde(deserialize_with = "ids::string_or_number")]
    pub id: String,
    pub name: String,
}

/// One list per strategy, keyed `Vanilla` / `ModsPlus` / `Custom` on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "PascalCase",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct PerStrategy<T> {
    #[serde(default)]
    vanilla: Vec<T>,
    #[serde(default)]
    mods_plus: Vec<T>,
    #[serde(default)]
    custom: Vec<T>,
}

impl<T> Default for PerStrategy<T> {
    fn default() -> Self {
        Self {
            vanilla: Vec::new(),
            mods_plus: Vec::new(),
            custom: Vec::new(),
        }
    }
}

impl<T> PerStrategy<T> {
    pub fn get(&self, strategy: Strategy) -> &[T] {
        match strategy {
            Strategy::Vanilla => &self.vanilla,
            Strategy::ModsPlus => &self.mods_plus,
            Strategy::Custom => &self.custom,
        }
    }

    pub fn get_mut(&mut self, strategy: Strategy) -> &mut Vec<T> {
        match strategy {
            Strategy::Vanilla => &mut self.vanilla,
            Strategy::ModsPlus => &mut self.mods_plus,
            Strategy::Custom => &mut self.custom,
        }
    }

    pub fn total(&self) -> usize {
        self.vanilla.len() + self.mods_plus.len() + self.custom.len()
    }
}
