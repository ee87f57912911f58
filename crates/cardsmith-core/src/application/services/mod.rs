//! Application services - orchestrate use cases.

pub mod library_service;

pub use library_service::LibraryService;
