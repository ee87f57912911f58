//! Domain value objects: Strategy and StatKind.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Their string
//! forms match the keys used by the persisted library blob.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Strategy ─────────────────────────────────────────────────────────────────

/// Which code-generation skeleton a project uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    Vanilla,
    ModsPlus,
    Custom,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::Vanilla, Self::ModsPlus, Self::Custom];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vanilla => "Vanilla",
            Self::ModsPlus => "ModsPlus",
            Self::Custom => "Custom",
        }
    }

    /// Parse a strategy, degrading to [`Strategy::Vanilla`] for anything
    /// unrecognised. Used wherever rendering must not fail.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vanilla" => Ok(Self::Vanilla),
            "modsplus" | "mods-plus" | "mods_plus" => Ok(Self::ModsPlus),
            "custom" => Ok(Self::Custom),
            other => Err(DomainError::UnknownStrategy(other.to_string())),
        }
    }
}

// ── StatKind ─────────────────────────────────────────────────────────────────

/// How a stat combines with the base value in game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    /// Multiplier; neutral at `1`.
    Mult,
    /// Flat addition; neutral at `0`.
    Add,
}

impl StatKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mult => "mult",
            Self::Add => "add",
        }
    }

    /// The value at which a stat of this kind has no effect.
    pub const fn neutral(self) -> f64 {
        match self {
            Self::Mult => 1.0,
            Self::Add => 0.0,
        }
    }

    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mult)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("VANILLA".parse::<Strategy>().unwrap(), Strategy::Vanilla);
        assert_eq!("mods-plus".parse::<Strategy>().unwrap(), Strategy::ModsPlus);
        assert_eq!("ModsPlus".parse::<Strategy>().unwrap(), Strategy::ModsPlus);
        assert_eq!("custom".parse::<Strategy>().unwrap(), Strategy::Custom);
        assert!("fancy".parse::<Strategy>().is_err());
    }

    #[test]
    fn unknown_strategy_degrades_to_vanilla() {
        assert_eq!(Strategy::parse_lossy("whatever"), Strategy::Vanilla);
    }

    #[test]
    fn strategy_serializes_with_storage_names() {
        let json = serde_json::to_string(&Strategy::ModsPlus).unwrap();
        assert_eq!(json, "\"ModsPlus\"");
    }

    #[test]
    fn neutral_values() {
        assert_eq!(StatKind::Mult.neutral(), 1.0);
        assert_eq!(StatKind::Add.neutral(), 0.0);
    }
}
