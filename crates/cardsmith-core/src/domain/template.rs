//! Template engine: turns card metadata into a C# source unit.
//!
//! Substitution is literal and global. There is no escaping and no
//! conditional syntax; a `{{TOKEN}}` that is not one of the five known
//! placeholders is left untouched.

use tracing::trace;

use crate::domain::entities::CardConfig;
use crate::domain::skeletons;
use crate::domain::value_objects::Strategy;

/// Placeholder tokens understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Desc,
    ModName,
    Rarity,
    Theme,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Self::Name,
        Self::Desc,
        Self::ModName,
        Self::Rarity,
        Self::Theme,
    ];

    pub const fn token(&self) -> &'static str {
        match self {
            Self::Name => "{{NAME}}",
            Self::Desc => "{{DESC}}",
            Self::ModName => "{{MODNAME}}",
            Self::Rarity => "{{RARITY}}",
            Self::Theme => "{{THEME}}",
        }
    }

    /// Text substituted when the field is absent or empty.
    pub const fn fallback(&self) -> &'static str {
        match self {
            Self::Name => "CardName",
            Self::Desc => "Description",
            Self::ModName => "MyMod",
            Self::Rarity => "Common",
            Self::Theme => "DestructiveRed",
        }
    }
}

/// Project-level inputs to rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectInfo<'a> {
    pub name: &'a str,
}

impl<'a> ProjectInfo<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

/// Card-level inputs to rendering. `None` and `""` both mean absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardInfo<'a> {
    pub name: Option<&'a str>,
    pub desc: Option<&'a str>,
    pub rarity: Option<&'a str>,
    pub theme: Option<&'a str>,
}

impl<'a> CardInfo<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn desc(mut self, desc: &'a str) -> Self {
        self.desc = Some(desc);
        self
    }

    pub fn rarity(mut self, rarity: &'a str) -> Self {
        self.rarity = Some(rarity);
        self
    }

    pub fn theme(mut self, theme: &'a str) -> Self {
        self.theme = Some(theme);
        self
    }
}

impl<'a> From<&'a CardConfig> for CardInfo<'a> {
    fn from(card: &'a CardConfig) -> Self {
        Self {
            name: Some(card.name.as_str()),
            desc: Some(card.desc.as_str()),
            rarity: Some(card.rarity.as_str()),
            theme: Some(card.theme.as_str()),
        }
    }
}

/// The built-in skeleton for a strategy.
///
/// `Custom` has no built-in text of its own and shares the Vanilla one.
pub fn builtin_skeleton(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::ModsPlus => skeletons::MODS_PLUS,
        Strategy::Vanilla | Strategy::Custom => skeletons::VANILLA,
    }
}

/// Strip everything except ASCII letters and digits.
///
/// Returns an empty string when nothing survives; callers apply the
/// `MyMod` fallback.
pub fn sanitize_mod_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Render a card source unit.
///
/// A non-empty `custom_template` is used verbatim only for
/// [`Strategy::Custom`]; it is ignored for the built-in strategies.
pub fn render_template(
    strategy: Strategy,
    custom_template: Option<&str>,
    project: ProjectInfo<'_>,
    card: CardInfo<'_>,
) -> String {
    let skeleton = match (strategy, custom_template) {
        (Strategy::Custom, Some(text)) if !text.is_empty() => text,
        _ => builtin_skeleton(strategy),
    };

    let mod_name = sanitize_mod_name(project.name);
    trace!(%strategy, mod_name = %mod_name, "rendering card template");

    let mut out = skeleton.to_string();
    for placeholder in Placeholder::ALL {
        let value = match placeholder {
            Placeholder::Name => card.name,
            Placeholder::Desc => card.desc,
            Placeholder::ModName => Some(mod_name.as_str()),
            Placeholder::Rarity => card.rarity,
            Placeholder::Theme => card.theme,
        }
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder.fallback());

        out = out.replace(placeholder.token(), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_card() -> CardInfo<'static> {
        CardInfo::new()
            .name("Fireball")
            .desc("Shoots fire")
            .rarity("Rare")
            .theme("FirepowerYellow")
    }

    #[test]
    fn all_placeholders_are_substituted() {
        for strategy in [Strategy::Vanilla, Strategy::ModsPlus] {
            let out = render_template(strategy, None, ProjectInfo::new("Mod"), full_card());
            assert!(!out.contains("{{"), "{strategy} left a placeholder");
            assert!(out.contains("Fireball"));
            assert!(out.contains("Shoots fire"));
        }
    }

    #[test]
    fn mod_name_is_sanitized() {
        let out = render_template(
            Strategy::Vanilla,
            None,
            ProjectInfo::new("My Mod! 2.0"),
            CardInfo::new(),
        );
        assert!(out.contains("namespace MyMod20.Cards"));
        assert!(out.contains("return \"MyMod20\";"));
    }

    #[test]
    fn empty_mod_name_falls_back() {
        let out = render_template(
            Strategy::Vanilla,
            None,
            ProjectInfo::new("!!!"),
            CardInfo::new(),
        );
        assert!(out.contains("namespace MyMod.Cards"));
    }

    #[test]
    fn missing_fields_use_fallbacks() {
        let out = render_template(
            Strategy::Vanilla,
            None,
            ProjectInfo::new("Mod"),
            CardInfo::new().name(""),
        );
        assert!(out.contains("class CardName : CustomCard"));
        assert!(out.contains("return \"Description\";"));
        assert!(out.contains("CardInfo.Rarity.Common"));
        assert!(out.contains("CardThemeColorType.DestructiveRed"));
    }

    #[test]
    fn custom_template_used_verbatim() {
        let out = render_template(
            Strategy::Custom,
            Some("// {{NAME}} in {{MODNAME}} {{UNKNOWN}}"),
            ProjectInfo::new("Cool Mod"),
            full_card(),
        );
        assert_eq!(out, "// Fireball in CoolMod {{UNKNOWN}}");
    }

    #[test]
    fn empty_custom_template_uses_vanilla() {
        let custom = render_template(
            Strategy::Custom,
            Some(""),
            ProjectInfo::new("Mod"),
            full_card(),
        );
        let vanilla = render_template(Strategy::Vanilla, None, ProjectInfo::new("Mod"), full_card());
        assert_eq!(custom, vanilla);
    }

    #[test]
    fn custom_text_ignored_for_builtin_strategy() {
        let out = render_template(
            Strategy::ModsPlus,
            Some("nope"),
            ProjectInfo::new("Mod"),
            full_card(),
        );
        assert!(out.contains("SimpleCard"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render_template(Strategy::Vanilla, None, ProjectInfo::new("M"), full_card());
        let b = render_template(Strategy::Vanilla, None, ProjectInfo::new("M"), full_card());
        assert_eq!(a, b);
    }
}
