//! Amount formatting
//!
//! Turns rounded amounts into the text printed in the amount columns.

use super::schema::NutrientSpec;
use super::units::{render_tenths, Unit};

/// Format a rounded amount with its unit suffix
///
/// Calories print no amount text (the figure is drawn separately), and a
/// positive gram amount under 1 prints as "<1g".
pub fn format_amount(amount: f64, unit: Unit) -> String {
    format_with(amount, unit, render_tenths)
}

/// Format a nutrient's rounded amount using its declared precision
pub fn format_nutrient_amount(spec: &NutrientSpec, amount: f64) -> String {
    let precision = spec.rounding.precision();
    format_with(amount, spec.unit, |a| precision.render(a))
}

fn format_with(amount: f64, unit: Unit, render: impl Fn(f64) -> String) -> String {
    match unit {
        Unit::None => String::new(),
        Unit::G if amount > 0.0 && amount < 1.0 => "<1g".to_string(),
        _ => format!("{}{}", render(amount), unit.suffix()),
    }
}
