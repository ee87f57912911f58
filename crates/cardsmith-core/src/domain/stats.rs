//! Stat registry and per-session stat values.
//!
//! The registry is static configuration: every tunable stat, its label, its
//! kind and the dotted assignment path it is written to. Declaration order
//! is significant; the injector emits assignments in exactly this order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::StatKind;

/// Static declaration of one tunable numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: StatKind,
    pub path: &'static str,
    pub step: Option<f64>,
}

impl StatDescriptor {
    const fn mult(key: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            key,
            label,
            kind: StatKind::Mult,
            path,
            step: None,
        }
    }

    const fn add(key: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            key,
            label,
            kind: StatKind::Add,
            path,
            step: Some(1.0),
        }
    }

    /// Value at which this stat is omitted from generated code.
    pub const fn neutral(&self) -> f64 {
        self.kind.neutral()
    }
}

/// A named category of stats, e.g. "Gun Stats".
#[derive(Debug, Clone, Copy)]
pub struct StatGroup {
    pub name: &'static str,
    pub stats: &'static [StatDescriptor],
}

const GUN_STATS: &[StatDescriptor] = &[
    StatDescriptor::mult("damage", "Damage", "gun.damage"),
    StatDescriptor::add("ammo", "Ammo", "gun.ammo"),
    StatDescriptor::mult("reload", "Reload Time", "gun.reloadTime"),
    StatDescriptor::mult("attackSpeed", "Attack Speed", "gun.attackSpeed"),
    StatDescriptor::add("projectiles", "Projectiles", "gun.numberOfProjectiles"),
    StatDescriptor::add("bursts", "Bursts", "gun.bursts"),
    StatDescriptor::add("reflects", "Bounces", "gun.reflects"),
    StatDescriptor::mult("projSpeed", "Proj. Speed", "gun.projectileSpeed"),
    StatDescriptor::mult("knockback", "Knockback", "gun.knockback"),
    StatDescriptor::mult("spread", "Spread", "gun.spread"),
    StatDescriptor::mult("recoil", "Recoil", "gun.recoil"),
];

const CHARACTER_STATS: &[StatDescriptor] = &[
    StatDescriptor::mult("health", "Health", "statModifiers.health"),
    StatDescriptor::mult("speed", "Move Speed", "statModifiers.movementSpeed"),
    StatDescriptor::mult("jump", "Jump Height", "statModifiers.jump"),
    StatDescriptor::mult("gravity", "Gravity", "statModifiers.gravity"),
    StatDescriptor::mult("size", "Size", "statModifiers.sizeMultiplier"),
    StatDescriptor::add("regen", "Regeneration", "statModifiers.regen"),
    StatDescriptor::mult("lifesteal", "Life Steal", "statModifiers.lifeSteal"),
];

const BLOCK_STATS: &[StatDescriptor] = &[
    StatDescriptor::mult("blockCD", "Cooldown", "block.cdMultiplier"),
    StatDescriptor::add("blockHealing", "Healing", "block.healing"),
    StatDescriptor::mult("blockForce", "Force", "block.forceToAdd"),
];

/// All stat groups in display order.
pub static STAT_GROUPS: &[StatGroup] = &[
    StatGroup {
        name: "Gun Stats",
        stats: GUN_STATS,
    },
    StatGroup {
        name: "Character Stats",
        stats: CHARACTER_STATS,
    },
    StatGroup {
        name: "Block Stats",
        stats: BLOCK_STATS,
    },
];

/// Iterate every descriptor in group/declaration order.
pub fn all_stats() -> impl Iterator<Item = &'static StatDescriptor> {
    STAT_GROUPS.iter().flat_map(|g| g.stats.iter())
}

/// Look up a descriptor by its stable key (exact match).
pub fn find_stat(key: &str) -> Option<&'static StatDescriptor> {
    all_stats().find(|s| s.key == key)
}

/// Look up a group by name, ignoring ASCII case. The " Stats" suffix is
/// optional, so `gun` finds "Gun Stats".
pub fn find_group(name: &str) -> Option<&'static StatGroup> {
    STAT_GROUPS.iter().find(|g| {
        g.name.eq_ignore_ascii_case(name)
            || g
                .name
                .strip_suffix(" Stats")
                .is_some_and(|short| short.eq_ignore_ascii_case(name))
    })
}

// ── StatValues ───────────────────────────────────────────────────────────────

/// Values the user has configured for the active card.
///
/// Keys not present read as the descriptor's neutral default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatValues {
    values: BTreeMap<&'static str, f64>,
}

impl StatValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `key`, or the neutral default.
    ///
    /// Returns `None` only for keys outside the registry.
    pub fn get(&self, key: &str) -> Option<f64> {
        let desc = find_stat(key)?;
        Some(self.value_of(desc))
    }

    pub(crate) fn value_of(&self, desc: &StatDescriptor) -> f64 {
        self.values.get(desc.key).copied().unwrap_or(desc.neutral())
    }

    /// Set a stat value. Unknown keys and non-finite values are rejected.
    pub fn set(&mut self, key: &str, value: f64) -> DomainResult<()> {
        let desc = find_stat(key).ok_or_else(|| DomainError::UnknownStat { key: key.into() })?;
        if !value.is_finite() {
            return Err(DomainError::InvalidStatValue {
                key: key.into(),
                reason: "value must be a finite number".into(),
            });
        }
        self.values.insert(desc.key, value);
        Ok(())
    }

    /// Builder-style [`StatValues::set`].
    pub fn with(mut self, key: &str, value: f64) -> DomainResult<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Parse and apply a `key=value` assignment.
    pub fn set_assignment(&mut self, input: &str) -> DomainResult<()> {
        let (key, value) = parse_assignment(input)?;
        self.set(key, value)
    }

    /// Whether `desc` currently differs from its neutral default.
    pub fn is_active(&self, desc: &StatDescriptor) -> bool {
        self.value_of(desc) != desc.neutral()
    }

    /// Drop all configured values; used when the active card changes.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split `key=value` into its parts.
pub fn parse_assignment(input: &str) -> DomainResult<(&str, f64)> {
    let malformed = || DomainError::MalformedAssignment {
        input: input.to_string(),
    };
    let (key, raw) = input.split_once('=').ok_or_else(malformed)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(malformed());
    }
    let value = raw
        .trim()
        .trim_end_matches(['f', 'F'])
        .parse::<f64>()
        .map_err(|e| DomainError::InvalidStatValue {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keys_are_unique() {
        let mut keys: Vec<_> = all_stats().map(|s| s.key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn registry_order_starts_with_gun_damage() {
        let first = all_stats().next().unwrap();
        assert_eq!(first.key, "damage");
        assert_eq!(first.path, "gun.damage");
        assert_eq!(all_stats().count(), 21);
    }

    #[test]
    fn add_stats_step_by_one() {
        assert_eq!(find_stat("ammo").unwrap().step, Some(1.0));
        assert_eq!(find_stat("damage").unwrap().step, None);
    }

    #[test]
    fn missing_values_read_as_neutral() {
        let values = StatValues::new();
        assert_eq!(values.get("damage"), Some(1.0));
        assert_eq!(values.get("ammo"), Some(0.0));
        assert_eq!(values.get("nope"), None);
    }

    #[test]
    fn set_rejects_unknown_and_non_finite() {
        let mut values = StatValues::new();
        assert!(matches!(
            values.set("mana", 2.0),
            Err(DomainError::UnknownStat { .. })
        ));
        assert!(matches!(
            values.set("damage", f64::NAN),
            Err(DomainError::InvalidStatValue { .. })
        ));
    }

    #[test]
    fn reset_clears_everything() {
        let mut values = StatValues::new().with("damage", 2.0).unwrap();
        assert!(values.is_active(find_stat("damage").unwrap()));
        values.reset();
        assert!(values.is_empty());
        assert!(!values.is_active(find_stat("damage").unwrap()));
    }

    #[test]
    fn assignment_parsing() {
        assert_eq!(parse_assignment("damage=2.5").unwrap(), ("damage", 2.5));
        assert_eq!(parse_assignment(" ammo = 3 ").unwrap(), ("ammo", 3.0));
        assert_eq!(parse_assignment("speed=1.2f").unwrap(), ("speed", 1.2));
        assert!(parse_assignment("damage").is_err());
        assert!(parse_assignment("=2").is_err());
        assert!(parse_assignment("damage=lots").is_err());
    }

    #[test]
    fn group_lookup_ignores_case() {
        assert_eq!(find_group("block stats").unwrap().stats.len(), 3);
        assert_eq!(find_group("GUN").unwrap().name, "Gun Stats");
        assert!(find_group("Magic Stats").is_none());
        assert!(find_group("Stats").is_none());
    }
}
