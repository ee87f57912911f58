//! Stat injector: keeps the generated stats block and the boolean override
//! methods of a card source buffer in sync with structured card state.
//!
//! Applying the injector twice with the same inputs yields the same buffer
//! as applying it once. Text outside the stats region and outside the
//! override lines is preserved byte-for-byte.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::domain::entities::CardConfig;
use crate::domain::overrides::{OVERRIDES, OverrideDescriptor};
use crate::domain::region::{SETUP_ANCHOR, STATS_END, STATS_START, StatsRegion, scrub_markers};
use crate::domain::stats::{StatDescriptor, StatValues, all_stats};
use crate::domain::value_objects::StatKind;

const BLOCK_INDENT: &str = "            ";
const METHOD_INDENT: &str = "    ";

/// Format a stat value as a C# numeric literal.
///
/// Multipliers, speed stats and non-integers get the `f` suffix so the
/// literal is a `float`; other integers are emitted bare.
pub fn format_literal(desc: &StatDescriptor, value: f64) -> String {
    let float = desc.kind == StatKind::Mult
        || desc.key.contains("speed")
        || desc.key.contains("Speed")
        || value.fract() != 0.0;
    if float {
        format!("{value}f")
    } else {
        format!("{value}")
    }
}

/// Build the full generated block, markers included.
///
/// The block starts with indentation and ends right after the end marker.
pub fn generate_block(values: &StatValues) -> String {
    let mut block = format!("{BLOCK_INDENT}{STATS_START}\n");
    for desc in all_stats().filter(|d| values.is_active(d)) {
        let literal = format_literal(desc, values.value_of(desc));
        block.push_str(&format!("{BLOCK_INDENT}{} = {};\n", desc.path, literal));
    }
    block.push_str(BLOCK_INDENT);
    block.push_str(STATS_END);
    block
}

fn override_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        OVERRIDES
            .iter()
            .map(|o| {
                let pattern = format!(
                    r"public override bool {}\(\)\s*\{{ return (true|false); \}}",
                    regex::escape(o.method)
                );
                Regex::new(&pattern).expect("override pattern is a valid regex")
            })
            .collect()
    })
}

/// Rewrite (or insert) one override method so it returns `value`.
fn apply_override(text: String, desc: &OverrideDescriptor, pattern: &Regex, value: bool) -> String {
    let implementation = desc.implementation(value);

    if pattern.is_match(&text) {
        return pattern
            .replace(&text, NoExpand(&implementation))
            .into_owned();
    }

    match text.rfind('}') {
        Some(idx) => {
            debug!(method = desc.method, "inserting override before last closing brace");
            let mut out = String::with_capacity(text.len() + implementation.len() + 8);
            out.push_str(&text[..idx]);
            out.push_str(METHOD_INDENT);
            out.push_str(&implementation);
            out.push('\n');
            out.push_str(&text[idx..]);
            out
        }
        None => {
            debug!(method = desc.method, "no closing brace; override skipped");
            text
        }
    }
}

/// Put `block` into `text`, replacing any existing region.
fn splice_block(text: &str, block: &str) -> String {
    if let Some(region) = StatsRegion::locate(text) {
        let prefix = scrub_markers(region.prefix());
        let suffix = scrub_markers(region.suffix());
        return format!("{prefix}{block}{suffix}");
    }

    let text = scrub_markers(text);
    let brace = text
        .find(SETUP_ANCHOR)
        .and_then(|at| text[at..].find('{').map(|rel| at + rel));

    match brace {
        Some(idx) => {
            let (head, tail) = text.split_at(idx + 1);
            format!("{head}\n{block}{tail}")
        }
        None => {
            debug!("setup anchor not found; appending stats block");
            format!("{text}\n{block}")
        }
    }
}

/// Inject the current stat values and card overrides into `text`.
pub fn inject_stats(text: &str, values: &StatValues, card: &CardConfig) -> String {
    let block = generate_block(values);

    // Splice first: the setup anchor must never resolve to an override's brace.
    let mut out = splice_block(text, &block);
    for (desc, pattern) in OVERRIDES.iter().zip(override_patterns()) {
        if let Some(value) = card.override_value(desc.field) {
            out = apply_override(out, desc, pattern, value);
        }
    }
    out
}
