//! Percent Daily Value calculation

use serde::{Deserialize, Serialize};

use super::schema::NutrientSpec;

/// %DV of a rounded amount, or no reference at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyValue {
    Percent(u32),
    NotApplicable,
}

impl DailyValue {
    pub fn percent(&self) -> Option<u32> {
        match self {
            DailyValue::Percent(p) => Some(*p),
            DailyValue::NotApplicable => None,
        }
    }

    /// Cell text as printed, e.g. "14%"
    pub fn display(&self) -> String {
        match self {
            DailyValue::Percent(p) => format!("{}%", p),
            DailyValue::NotApplicable => String::new(),
        }
    }
}

/// Compute %DV from an already-rounded amount
///
/// Always use the rounded amount so the printed percentage agrees with the
/// printed quantity.
pub fn percent_daily_value(spec: &NutrientSpec, rounded_amount: f64) -> DailyValue {
    match spec.daily_value {
        Some(reference) => {
            let percent = (rounded_amount / reference * 100.0).round();
            DailyValue::Percent(percent.max(0.0) as u32)
        }
        None => DailyValue::NotApplicable,
    }
}
