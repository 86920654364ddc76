//! Nutrient schema
//!
//! The fixed, regulation-ordered table of nutrients a panel can show.

use serde::{Deserialize, Serialize};

use super::units::{Precision, Unit};

/// Identifier of a supported nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientId {
    Calories,
    TotalFat,
    SaturatedFat,
    TransFat,
    Cholesterol,
    Sodium,
    TotalCarbohydrate,
    DietaryFiber,
    TotalSugars,
    AddedSugars,
    Protein,
    VitaminD,
    Calcium,
    Iron,
    Potassium,
}

impl NutrientId {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientId::Calories => "calories",
            NutrientId::TotalFat => "total_fat",
            NutrientId::SaturatedFat => "saturated_fat",
            NutrientId::TransFat => "trans_fat",
            NutrientId::Cholesterol => "cholesterol",
            NutrientId::Sodium => "sodium",
            NutrientId::TotalCarbohydrate => "total_carbohydrate",
            NutrientId::DietaryFiber => "dietary_fiber",
            NutrientId::TotalSugars => "total_sugars",
            NutrientId::AddedSugars => "added_sugars",
            NutrientId::Protein => "protein",
            NutrientId::VitaminD => "vitamin_d",
            NutrientId::Calcium => "calcium",
            NutrientId::Iron => "iron",
            NutrientId::Potassium => "potassium",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        NUTRIENT_SCHEMA
            .iter()
            .map(|spec| spec.id)
            .find(|id| id.as_str() == s.trim())
    }
}

impl std::fmt::Display for NutrientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regulatory rounding rule family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingCategory {
    Calories,
    FatGroup,
    Cholesterol,
    Sodium,
    CarbProteinGroup,
    VitaminMineral,
}

impl RoundingCategory {
    /// Decimal precision of amounts produced by this category's rule
    pub fn precision(&self) -> Precision {
        match self {
            RoundingCategory::FatGroup => Precision::Half,
            RoundingCategory::Calories
            | RoundingCategory::Cholesterol
            | RoundingCategory::Sodium
            | RoundingCategory::CarbProteinGroup
            | RoundingCategory::VitaminMineral => Precision::Whole,
        }
    }
}

/// Structural role of a nutrient on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// The large Calories figure
    Headline,
    /// Bold top-level row
    Major,
    /// Indented once under a major row
    Sub,
    /// Indented twice
    SubSub,
    /// Vitamin and mineral rows below the thick rule
    Micronutrient,
}

/// Static description of one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientSpec {
    pub id: NutrientId,
    pub display_name: &'static str,
    pub unit: Unit,
    pub rounding: RoundingCategory,
    /// Reference daily value in `unit`; `None` means no %DV is ever computed
    pub daily_value: Option<f64>,
    pub emphasis: Emphasis,
}

const fn spec(
    id: NutrientId,
    display_name: &'static str,
    unit: Unit,
    rounding: RoundingCategory,
    daily_value: Option<f64>,
    emphasis: Emphasis,
) -> NutrientSpec {
    NutrientSpec {
        id,
        display_name,
        unit,
        rounding,
        daily_value,
        emphasis,
    }
}

/// Every supported nutrient in canonical display order
pub static NUTRIENT_SCHEMA: [NutrientSpec; 15] = [
    spec(NutrientId::Calories, "Calories", Unit::None, RoundingCategory::Calories, None, Emphasis::Headline),
    spec(NutrientId::TotalFat, "Total Fat", Unit::G, RoundingCategory::FatGroup, Some(78.0), Emphasis::Major),
    spec(NutrientId::SaturatedFat, "Saturated Fat", Unit::G, RoundingCategory::FatGroup, Some(20.0), Emphasis::Sub),
    spec(NutrientId::TransFat, "Trans Fat", Unit::G, RoundingCategory::FatGroup, None, Emphasis::Sub),
    spec(NutrientId::Cholesterol, "Cholesterol", Unit::Mg, RoundingCategory::Cholesterol, Some(300.0), Emphasis::Major),
    spec(NutrientId::Sodium, "Sodium", Unit::Mg, RoundingCategory::Sodium, Some(2300.0), Emphasis::Major),
    spec(NutrientId::TotalCarbohydrate, "Total Carbohydrate", Unit::G, RoundingCategory::CarbProteinGroup, Some(275.0), Emphasis::Major),
    spec(NutrientId::DietaryFiber, "Dietary Fiber", Unit::G, RoundingCategory::CarbProteinGroup, Some(28.0), Emphasis::Sub),
    spec(NutrientId::TotalSugars, "Total Sugars", Unit::G, RoundingCategory::CarbProteinGroup, None, Emphasis::Sub),
    spec(NutrientId::AddedSugars, "Added Sugars", Unit::G, RoundingCategory::CarbProteinGroup, Some(50.0), Emphasis::SubSub),
    spec(NutrientId::Protein, "Protein", Unit::G, RoundingCategory::CarbProteinGroup, Some(50.0), Emphasis::Major),
    spec(NutrientId::VitaminD, "Vitamin D", Unit::Mcg, RoundingCategory::VitaminMineral, Some(20.0), Emphasis::Micronutrient),
    spec(NutrientId::Calcium, "Calcium", Unit::Mg, RoundingCategory::VitaminMineral, Some(1300.0), Emphasis::Micronutrient),
    spec(NutrientId::Iron, "Iron", Unit::Mg, RoundingCategory::VitaminMineral, Some(18.0), Emphasis::Micronutrient),
    spec(NutrientId::Potassium, "Potassium", Unit::Mg, RoundingCategory::VitaminMineral, Some(4700.0), Emphasis::Micronutrient),
];

/// Look up the spec for a nutrient
pub fn nutrient_spec(id: NutrientId) -> &'static NutrientSpec {
    // The table is indexed in declaration order of `NutrientId`
    &NUTRIENT_SCHEMA[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_ids_unique() {
        let ids: HashSet<NutrientId> = NUTRIENT_SCHEMA.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), NUTRIENT_SCHEMA.len());
    }

    #[test]
    fn test_schema_lookup_matches_index() {
        for spec in NUTRIENT_SCHEMA.iter() {
            assert_eq!(nutrient_spec(spec.id).id, spec.id);
        }
    }

    #[test]
    fn test_schema_order() {
        assert_eq!(NUTRIENT_SCHEMA[0].id, NutrientId::Calories);
        assert_eq!(NUTRIENT_SCHEMA[14].id, NutrientId::Potassium);
        let added = NUTRIENT_SCHEMA.iter().position(|s| s.id == NutrientId::AddedSugars).unwrap();
        assert_eq!(NUTRIENT_SCHEMA[added - 1].id, NutrientId::TotalSugars);
    }

    #[test]
    fn test_daily_value_references_positive() {
        for spec in NUTRIENT_SCHEMA.iter() {
            if let Some(dv) = spec.daily_value {
                assert!(dv > 0.0, "{} has non-positive DV", spec.id);
            }
        }
        assert!(nutrient_spec(NutrientId::TransFat).daily_value.is_none());
        assert!(nutrient_spec(NutrientId::TotalSugars).daily_value.is_none());
        assert_eq!(nutrient_spec(NutrientId::Sodium).daily_value, Some(2300.0));
    }

    #[test]
    fn test_nutrient_id_round_trips_through_str() {
        for spec in NUTRIENT_SCHEMA.iter() {
            assert_eq!(NutrientId::from_str(spec.id.as_str()), Some(spec.id));
        }
        assert_eq!(NutrientId::from_str("vitamin_c"), None);
    }

    #[test]
    fn test_nutrient_id_serde_matches_as_str() {
        let json = serde_json::to_string(&NutrientId::TotalCarbohydrate).unwrap();
        assert_eq!(json, "\"total_carbohydrate\"");
    }

    #[test]
    fn test_precision_per_category() {
        assert_eq!(RoundingCategory::FatGroup.precision(), Precision::Half);
        assert_eq!(RoundingCategory::Sodium.precision(), Precision::Whole);
    }
}
