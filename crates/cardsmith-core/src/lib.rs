//! Cardsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Cardsmith
//! card authoring toolkit, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          cardsmith-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (LibraryService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (KeyValueStore)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    cardsmith-adapters (Infrastructure)  │
//! │         (MemoryStore, FileStore)        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (templates, stat injection/extraction, │
//! │            project library)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cardsmith_core::domain::{
//!     CardConfig, CardInfo, ProjectInfo, StatValues, Strategy, extract_stats, inject_stats,
//!     render_template,
//! };
//!
//! // 1. Render a card stub
//! let code = render_template(
//!     Strategy::Vanilla,
//!     None,
//!     ProjectInfo::new("My Mod"),
//!     CardInfo::new().name("Fireball"),
//! );
//!
//! // 2. Write stats into it
//! let values = StatValues::new().with("damage", 2.0).unwrap();
//! let code = inject_stats(&code, &values, &CardConfig::default());
//!
//! // 3. Read them back
//! let preview = extract_stats(&code);
//! assert_eq!(preview[0].label, "Damage");
//! assert_eq!(preview[0].value, 2.0);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{LibraryService, ports::KeyValueStore};
    pub use crate::domain::{
        CardConfig, CardInfo, ExtractedStat, Library, Project, ProjectInfo, Snippet,
        SnippetFolder, StatKind, StatValues, Strategy, extract_stats, inject_stats,
        render_template,
    };
    pub use crate::error::{CardsmithError, CardsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
