//! Per-nutrient facts
//!
//! Validates a request, derives per-container amounts, then rounds, computes
//! %DV and formats each nutrient in schema order.

use serde::Serialize;

use crate::error::{PanelError, PanelResult};
use crate::models::PanelRequest;

use super::daily_value::{percent_daily_value, DailyValue};
use super::format::format_nutrient_amount;
use super::rounding::round_amount;
use super::schema::{NutrientId, NutrientSpec, NUTRIENT_SCHEMA};

/// Raw amounts for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientValue {
    pub raw_serving: f64,
    /// Always `raw_serving * servings_per_container`
    pub raw_container: f64,
}

impl NutrientValue {
    pub fn new(raw_serving: f64, servings_per_container: u32) -> Self {
        Self {
            raw_serving,
            raw_container: raw_serving * servings_per_container as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundedValue {
    pub serving: f64,
    pub container: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyValueResult {
    pub serving: DailyValue,
    pub container: DailyValue,
}

/// Everything the layout needs to know about one nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientFacts {
    pub spec: &'static NutrientSpec,
    pub value: NutrientValue,
    pub rounded: RoundedValue,
    pub daily_value: DailyValueResult,
    pub serving_text: String,
    pub container_text: String,
}

impl NutrientFacts {
    /// Round, compute %DV and format a single nutrient
    pub fn compute(spec: &'static NutrientSpec, value: NutrientValue) -> Self {
        let rounded = RoundedValue {
            serving: round_amount(spec.rounding, value.raw_serving),
            container: round_amount(spec.rounding, value.raw_container),
        };
        let daily_value = DailyValueResult {
            serving: percent_daily_value(spec, rounded.serving),
            container: percent_daily_value(spec, rounded.container),
        };

        Self {
            spec,
            value,
            rounded,
            daily_value,
            serving_text: format_nutrient_amount(spec, rounded.serving),
            container_text: format_nutrient_amount(spec, rounded.container),
        }
    }

    pub fn id(&self) -> NutrientId {
        self.spec.id
    }
}

/// Check that servings per container is a positive integer
pub fn validate_servings(servings_per_container: i64) -> PanelResult<u32> {
    if servings_per_container < 1 {
        return Err(PanelError::InvalidServingsCount(servings_per_container));
    }
    u32::try_from(servings_per_container)
        .map_err(|_| PanelError::InvalidServingsCount(servings_per_container))
}

/// Check a single raw amount
pub fn validate_amount(id: NutrientId, amount: f64) -> PanelResult<f64> {
    if !amount.is_finite() {
        return Err(PanelError::invalid_amount(id.as_str(), "amount must be a finite number"));
    }
    if amount < 0.0 {
        return Err(PanelError::invalid_amount(
            id.as_str(),
            format!("amount must not be negative, got {}", amount),
        ));
    }
    Ok(amount)
}

/// Validate a request and compute facts for every nutrient in schema order
///
/// Fails before any rounding happens; no partial result is returned.
pub fn compute_facts(request: &PanelRequest) -> PanelResult<Vec<NutrientFacts>> {
    let servings = validate_servings(request.product.servings_per_container)?;

    if let Some(unknown) = request
        .serving_amounts
        .keys()
        .find(|key| NutrientId::from_str(key).is_none())
    {
        return Err(PanelError::UnknownNutrientId(unknown.clone()));
    }

    let values = NUTRIENT_SCHEMA
        .iter()
        .map(|spec| {
            let raw = request
                .serving_amounts
                .get(spec.id.as_str())
                .copied()
                .ok_or_else(|| PanelError::invalid_amount(spec.id.as_str(), "amount is missing"))?;
            let raw = validate_amount(spec.id, raw)?;
            let value = NutrientValue::new(raw, servings);
            if !value.raw_container.is_finite() {
                return Err(PanelError::invalid_amount(spec.id.as_str(), "per-container amount overflows"));
            }
            Ok((spec, value))
        })
        .collect::<PanelResult<Vec<_>>>()?;

    tracing::debug!(
        "Validated {} nutrient amounts for '{}' ({} servings)",
        values.len(),
        request.product.name,
        servings
    );

    Ok(values
        .into_iter()
        .map(|(spec, value)| NutrientFacts::compute(spec, value))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_request;

    fn facts_for(facts: &[NutrientFacts], id: NutrientId) -> &NutrientFacts {
        facts.iter().find(|f| f.id() == id).unwrap()
    }

    #[test]
    fn test_container_amount_is_derived() {
        let value = NutrientValue::new(110.0, 3);
        assert_eq!(value.raw_container, 330.0);
    }

    #[test]
    fn test_sample_calories_and_sodium() {
        let facts = compute_facts(&sample_request()).unwrap();

        let calories = facts_for(&facts, NutrientId::Calories);
        assert_eq!(calories.value.raw_container, 510.0);
        assert_eq!(calories.rounded.serving, 170.0);
        assert_eq!(calories.rounded.container, 510.0);
        assert_eq!(calories.daily_value.serving, DailyValue::NotApplicable);
        assert_eq!(calories.serving_text, "");

        let sodium = facts_for(&facts, NutrientId::Sodium);
        assert_eq!(sodium.rounded.container, 330.0);
        assert_eq!(sodium.daily_value.serving, DailyValue::Percent(5));
        assert_eq!(sodium.daily_value.container, DailyValue::Percent(14));
        assert_eq!(sodium.serving_text, "110mg");
        assert_eq!(sodium.container_text, "330mg");
    }

    #[test]
    fn test_dv_uses_rounded_not_raw() {
        let mut request = sample_request();
        // 0.4g serving (raw 2% DV) and 1.2g container (raw 6% DV)
        request.serving_amounts.insert("saturated_fat".to_string(), 0.4);
        let facts = compute_facts(&request).unwrap();
        let sat = facts_for(&facts, NutrientId::SaturatedFat);
        assert_eq!(sat.rounded.serving, 0.0);
        assert_eq!(sat.daily_value.serving, DailyValue::Percent(0));
        assert_eq!(sat.rounded.container, 1.0);
        assert_eq!(sat.daily_value.container, DailyValue::Percent(5));
    }

    #[test]
    fn test_facts_in_schema_order() {
        let facts = compute_facts(&sample_request()).unwrap();
        let ids: Vec<NutrientId> = facts.iter().map(|f| f.id()).collect();
        let schema_ids: Vec<NutrientId> = NUTRIENT_SCHEMA.iter().map(|s| s.id).collect();
        assert_eq!(ids, schema_ids);
    }

    #[test]
    fn test_trans_fat_dv_not_applicable() {
        let facts = compute_facts(&sample_request()).unwrap();
        let trans = facts_for(&facts, NutrientId::TransFat);
        assert_eq!(trans.daily_value.serving, DailyValue::NotApplicable);
        assert_eq!(trans.serving_text, "0g");
    }

    #[test]
    fn test_invalid_servings_rejected() {
        let mut request = sample_request();
        request.product.servings_per_container = 0;
        assert!(matches!(compute_facts(&request), Err(PanelError::InvalidServingsCount(0))));

        request.product.servings_per_container = -2;
        assert!(matches!(compute_facts(&request), Err(PanelError::InvalidServingsCount(-2))));
    }

    #[test]
    fn test_servings_checked_before_amounts() {
        let mut request = sample_request();
        request.product.servings_per_container = 0;
        request.serving_amounts.insert("sodium".to_string(), -1.0);
        assert!(matches!(compute_facts(&request), Err(PanelError::InvalidServingsCount(_))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut request = sample_request();
        request.serving_amounts.insert("sodium".to_string(), -5.0);
        match compute_facts(&request) {
            Err(PanelError::InvalidAmount { nutrient, .. }) => assert_eq!(nutrient, "sodium"),
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let mut request = sample_request();
        request.serving_amounts.insert("iron".to_string(), f64::NAN);
        assert!(matches!(compute_facts(&request), Err(PanelError::InvalidAmount { .. })));

        request.serving_amounts.insert("iron".to_string(), f64::INFINITY);
        assert!(matches!(compute_facts(&request), Err(PanelError::InvalidAmount { .. })));
    }

    #[test]
    fn test_missing_amount_rejected() {
        let mut request = sample_request();
        request.serving_amounts.remove("protein");
        match compute_facts(&request) {
            Err(PanelError::InvalidAmount { nutrient, reason }) => {
                assert_eq!(nutrient, "protein");
                assert!(reason.contains("missing"));
            }
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_container_overflow_rejected() {
        let mut request = sample_request();
        request.serving_amounts.insert("sodium".to_string(), 1e308);
        match compute_facts(&request) {
            Err(PanelError::InvalidAmount { nutrient, reason }) => {
                assert_eq!(nutrient, "sodium");
                assert!(reason.contains("overflows"));
            }
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut request = sample_request();
        request.serving_amounts.insert("vitamin_c".to_string(), 10.0);
        match compute_facts(&request) {
            Err(PanelError::UnknownNutrientId(id)) => assert_eq!(id, "vitamin_c"),
            other => panic!("expected UnknownNutrientId, got {:?}", other),
        }
    }

    #[test]
    fn test_error_classification() {
        assert!(PanelError::InvalidServingsCount(0).is_user_error());
        assert!(!PanelError::UnknownNutrientId("x".into()).is_user_error());
    }
}
