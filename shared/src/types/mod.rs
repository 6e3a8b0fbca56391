//! Type definitions shared by the API and service layers

pub mod language;

pub use language::Language;
