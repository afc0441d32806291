//! Production rate helpers for Captain of Industry.
//!
//! Converts raw recipe counts into per-second rates and picks display units
//! for them.

pub mod calculator;
pub mod error;
pub mod logger;
pub mod models;
pub mod parse;

pub use calculator::{
    Calculator, CoiCalculator, IoRate, RecipeSummary, count_per_second, format_count_per_second,
    summarize_recipe,
};
pub use error::{CalcError, Result};
pub use models::{
    FormattedRate, GameItem, GameItemExData, GameItemExType, GameItemType, Recipe, RecipeIo,
};
pub use parse::IoSpec;
