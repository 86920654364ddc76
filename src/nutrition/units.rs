//! Label units and display precision
//!
//! Units printed on the panel and how many decimals a rounded amount carries.

use serde::{Deserialize, Serialize};

/// Unit a nutrient amount is declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Unitless (Calories)
    #[serde(rename = "")]
    None,
    /// Grams
    G,
    /// Milligrams
    Mg,
    /// Micrograms
    Mcg,
}

impl Unit {
    /// Suffix appended to a printed amount
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::G => "g",
            Unit::Mg => "mg",
            Unit::Mcg => "mcg",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" => Some(Unit::None),
            "g" | "gram" | "grams" => Some(Unit::G),
            "mg" | "milligram" | "milligrams" => Some(Unit::Mg),
            "mcg" | "µg" | "microgram" | "micrograms" => Some(Unit::Mcg),
            _ => None,
        }
    }
}

/// How many decimals a rounded amount may carry when printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Always a whole number
    Whole,
    /// Whole or half steps, printed with one decimal when not integral
    Half,
}

impl Precision {
    /// Render a rounded amount with this precision, without unit
    pub fn render(&self, amount: f64) -> String {
        match self {
            Precision::Whole => format!("{:.0}", amount),
            Precision::Half => render_tenths(amount),
        }
    }
}

/// Integral values print without a decimal point, everything else with one
pub(crate) fn render_tenths(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.1}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_suffix() {
        assert_eq!(Unit::None.suffix(), "");
        assert_eq!(Unit::G.suffix(), "g");
        assert_eq!(Unit::Mg.suffix(), "mg");
        assert_eq!(Unit::Mcg.suffix(), "mcg");
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!(Unit::from_str("g"), Some(Unit::G));
        assert_eq!(Unit::from_str(" MG "), Some(Unit::Mg));
        assert_eq!(Unit::from_str("micrograms"), Some(Unit::Mcg));
        assert_eq!(Unit::from_str(""), Some(Unit::None));
        assert_eq!(Unit::from_str("oz"), None);
    }

    #[test]
    fn test_unit_serde_names() {
        assert_eq!(serde_json::to_string(&Unit::None).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Unit::Mcg).unwrap(), "\"mcg\"");
    }

    #[test]
    fn test_precision_render() {
        assert_eq!(Precision::Whole.render(170.0), "170");
        assert_eq!(Precision::Half.render(3.5), "3.5");
        assert_eq!(Precision::Half.render(5.0), "5");
        assert_eq!(Precision::Half.render(0.0), "0");
    }
}
