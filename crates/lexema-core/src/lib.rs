//! Shared types for lexema corpus analysis.
//!
//! - [`category`] -- fixed-width category tags and their word classes
//! - [`analysis`] -- per-token analysis entries and synonym entries
//! - [`token`] -- tokenizer output
//! - [`character`] -- Spanish character classification

pub mod analysis;
pub mod category;
pub mod character;
pub mod token;

pub use analysis::{AnalysisEntry, SynonymEntry};
pub use category::{Category, CategoryError, WordClass};
pub use token::{Token, TokenType};
