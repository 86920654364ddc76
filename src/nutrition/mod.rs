//! Nutrition rule engine
//!
//! Schema, rounding, %DV and amount formatting for label values.

pub mod daily_value;
pub mod facts;
pub mod format;
pub mod rounding;
pub mod schema;
pub mod units;

pub use daily_value::{percent_daily_value, DailyValue};
pub use facts::{
    compute_facts, validate_amount, validate_servings, DailyValueResult, NutrientFacts,
    NutrientValue, RoundedValue,
};
pub use format::{format_amount, format_nutrient_amount};
pub use rounding::round_amount;
pub use schema::{nutrient_spec, Emphasis, NutrientId, NutrientSpec, RoundingCategory, NUTRIENT_SCHEMA};
pub use units::{Precision, Unit};
