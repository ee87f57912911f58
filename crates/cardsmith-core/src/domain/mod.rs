// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Cardsmith.
//!
//! Pure logic only. Storage is reached through the ports in
//! `crate::application`.
//!
//! - **No I/O**: no filesystem, network, or external calls
//! - **Synchronous**: every transform is a plain function over in-memory text
//! - **Three transforms**: [`render_template`], [`inject_stats`],
//!   [`extract_stats`]. None of them can fail.
//! - **Library model**: [`Library`] and its projects, cards and snippets
//!
pub mod entities;
pub mod error;
pub mod extractor;
pub mod injector;
pub mod overrides;
pub mod region;
pub mod skeletons;
pub mod stats;
pub mod template;
pub mod value_objects;

pub use entities::{
    CARD_FIELDS, CardConfig, LIBRARY_KEY, Library, PerStrategy, Project, ProjectData, Snippet,
    SnippetFolder,
};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use extractor::{ExtractedStat, extract_stats};
pub use injector::{format_literal, generate_block, inject_stats};
pub use overrides::{OVERRIDES, OverrideDescriptor, find_override};
pub use region::{SETUP_ANCHOR, STATS_END, STATS_START, StatsRegion};
pub use stats::{
    STAT_GROUPS, StatDescriptor, StatGroup, StatValues, all_stats, find_group, find_stat,
    parse_assignment,
};
pub use template::{
    CardInfo, Placeholder, ProjectInfo, builtin_skeleton, render_template, sanitize_mod_name,
};
pub use value_objects::{StatKind, Strategy};
