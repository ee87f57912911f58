//! Stat extractor: recover a stat preview from arbitrary card source.
//!
//! Each pattern looks for the first `<path> = <number>` assignment in the
//! whole buffer. Results come out in pattern order, not text order.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// One stat recovered from source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedStat {
    pub label: &'static str,
    /// NaN when the captured numeral could not be parsed.
    pub value: f64,
    pub is_multiplicative: bool,
}

impl ExtractedStat {
    /// `false` for entries whose numeral failed to parse.
    pub fn is_valid(&self) -> bool {
        self.value.is_finite()
    }
}

#[derive(Debug, Clone, Copy)]
enum Numeral {
    /// Digits and dots, optional trailing `f`.
    Float,
    /// Digits only.
    Integer,
}

struct StatPattern {
    label: &'static str,
    path: &'static str,
    numeral: Numeral,
    is_multiplicative: bool,
}

impl StatPattern {
    const fn float(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            numeral: Numeral::Float,
            is_multiplicative: true,
        }
    }

    const fn integer(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            numeral: Numeral::Integer,
            is_multiplicative: false,
        }
    }
}

const PATTERNS: &[StatPattern] = &[
    StatPattern::float("Damage", "gun.damage"),
    StatPattern::float("Health", "statModifiers.health"),
    StatPattern::integer("Ammo", "gun.ammo"),
    StatPattern::float("Reload", "gun.reloadTime"),
    StatPattern::integer("Projectiles", "gun.numberOfProjectiles"),
    StatPattern::integer("Bursts", "gun.bursts"),
    StatPattern::integer("Bounces", "gun.reflects"),
    StatPattern::float("Knockback", "gun.knockback"),
    StatPattern::float("Speed", "statModifiers.movementSpeed"),
    StatPattern::float("Jump", "statModifiers.jump"),
    StatPattern::float("BlockCD", "block.cdMultiplier"),
];

/// Compiled patterns, index-aligned with [`PATTERNS`].
fn compiled() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        PATTERNS
            .iter()
            .map(|p| {
                let numeral = match p.numeral {
                    Numeral::Float => r"([0-9.]+)f?",
                    Numeral::Integer => r"([0-9]+)",
                };
                let pattern = format!(r"(?i){}\s*=\s*{}", regex::escape(p.path), numeral);
                Regex::new(&pattern).expect("stat pattern is a valid regex")
            })
            .collect()
    })
}

/// Parse the longest leading float in `raw`; NaN when there is none.
///
/// `"1.2.3"` reads as `1.2`, `"."` as NaN.
fn parse_leading_float(raw: &str) -> f64 {
    let mut seen_dot = false;
    let end = raw
        .char_indices()
        .find(|&(_, c)| match c {
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            c => !c.is_ascii_digit(),
        })
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].parse().unwrap_or(f64::NAN)
}

/// Scan `text` for every known stat assignment.
pub fn extract_stats(text: &str) -> Vec<ExtractedStat> {
    PATTERNS
        .iter()
        .zip(compiled())
        .filter_map(|(pattern, regex)| {
            let caps = regex.captures(text)?;
            let raw = caps.get(1)?.as_str();
            Some(ExtractedStat {
                label: pattern.label,
                value: parse_leading_float(raw),
                is_multiplicative: pattern.is_multiplicative,
            })
        })
        .collect()
}
