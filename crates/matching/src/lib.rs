//! Ingredient-to-recipe matching and ranking.
//!
//! The two components here are deliberately pure: the normalizer knows
//! nothing but strings, and the matcher is a function of its inputs with
//! no I/O. Candidate recipes come from the store crate; results go back
//! to the web layer for serialization.

pub mod matcher;
pub mod normalizer;
pub mod types;

pub use matcher::search;
pub use normalizer::{names_match, normalize};
pub use types::{Ingredient, InstructionStep, MatchResult, Recipe, SortMethod};
