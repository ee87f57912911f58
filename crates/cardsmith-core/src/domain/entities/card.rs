use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::extractor::{ExtractedStat, extract_stats};
use crate::domain::injector::inject_stats;
use crate::domain::overrides::find_override;
use crate::domain::stats::StatValues;

/// Editable fields of a card, by their stored names.
pub const CARD_FIELDS: &[&str] = &[
    "name",
    "desc",
    "rarity",
    "theme",
    "customColor",
    "image",
    "allowMultiple",
    "code",
];

/// Structured card state plus its current source buffer.
///
/// Field names match the persisted JSON (`customColor`, `allowMultiple`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardConfig {
    pub name: String,
    pub desc: String,
    pub rarity: String,
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
    /// `None` means "leave `GetAllowMultiple` alone".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub code: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            name: "New Card".into(),
            desc: "Description".into(),
            rarity: "Common".into(),
            theme: "DestructiveRed".into(),
            custom_color: None,
            allow_multiple: None,
            image: None,
            code: String::new(),
        }
    }
}

impl CardConfig {
    /// Configured value for a boolean override field, if any.
    pub fn override_value(&self, field: &str) -> Option<bool> {
        find_override(field).and_then(|o| (o.value)(self))
    }

    /// Set a field from its textual form.
    ///
    /// Optional fields are cleared by an empty value.
    pub fn set_field(&mut self, field: &str, value: &str) -> DomainResult<()> {
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());
        match field {
            "name" => self.name = value.into(),
            "desc" => self.desc = value.into(),
            "rarity" => self.rarity = value.into(),
            "theme" => self.theme = value.into(),
            "customColor" => self.custom_color = optional(value),
            "image" => self.image = optional(value),
            "code" => self.code = value.into(),
            "allowMultiple" => {
                self.allow_multiple = match value.to_ascii_lowercase().as_str() {
                    "" => None,
                    "true" | "yes" | "1" => Some(true),
                    "false" | "no" | "0" => Some(false),
                    _ => {
                        return Err(DomainError::InvalidCardValue {
                            field: field.into(),
                            reason: format!("expected true or false, got '{value}'"),
                        });
                    }
                }
            }
            _ => {
                return Err(DomainError::UnknownCardField {
                    field: field.into(),
                });
            }
        }
        Ok(())
    }

    /// Rewrite this card's code with `values` and its current overrides.
    pub fn apply_stats(&mut self, values: &StatValues) {
        let code = inject_stats(&self.code, values, self);
        self.code = code;
    }

    /// Stat preview derived from the current code.
    pub fn stats_preview(&self) -> Vec<ExtractedStat> {
        extract_stats(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_known_fields() {
        let mut card = CardConfig::default();
        card.set_field("name", "Fireball").unwrap();
        card.set_field("customColor", "#ff0000").unwrap();
        card.set_field("allowMultiple", "false").unwrap();
        assert_eq!(card.name, "Fireball");
        assert_eq!(card.custom_color.as_deref(), Some("#ff0000"));
        assert_eq!(card.allow_multiple, Some(false));

        card.set_field("customColor", "").unwrap();
        assert!(card.custom_color.is_none());
    }

    #[test]
    fn set_field_rejects_unknown_and_bad_bool() {
        let mut card = CardConfig::default();
        assert!(matches!(
            card.set_field("mana", "1"),
            Err(DomainError::UnknownCardField { .. })
        ));
        assert!(matches!(
            card.set_field("allowMultiple", "maybe"),
            Err(DomainError::InvalidCardValue { .. })
        ));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let card: CardConfig = serde_json::from_str(r#"{"name":"X","allowMultiple":true}"#).unwrap();
        assert_eq!(card.name, "X");
        assert_eq!(card.rarity, "Common");
        assert_eq!(card.allow_multiple, Some(true));
    }

    #[test]
    fn apply_then_preview() {
        let mut card = CardConfig {
            code: "void SetupCard() {\n}\n".into(),
            ..CardConfig::default()
        };
        card.apply_stats(&StatValues::new().with("health", 1.5).unwrap());
        let preview = card.stats_preview();
        assert_eq!(preview.len(), 1);
        assert_eq!(preview[0].label, "Health");
        assert_eq!(preview[0].value, 1.5);
    }
}
