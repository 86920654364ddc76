//! Panel MCP Tools
//!
//! Generate panels, round single amounts and describe the nutrient schema.

use std::path::Path;

use serde::Serialize;

use crate::error::{PanelError, PanelResult};
use crate::layout::generate_panel as build_layout;
use crate::models::{PanelLayout, PanelRequest};
use crate::nutrition::{
    format_nutrient_amount, nutrient_spec, percent_daily_value, round_amount, validate_amount,
    NutrientFacts, NutrientId, RoundingCategory, Unit, NUTRIENT_SCHEMA,
};
use crate::render::{export_file_name, export_panel, ExportFormat, ExportedFile, RenderOptions};

/// Headline figures shown after a panel is generated
#[derive(Debug, Serialize)]
pub struct PanelSummary {
    pub product_name: String,
    pub serving_size: String,
    pub servings_per_container: i64,
    pub calories_per_serving: f64,
    pub calories_per_container: f64,
    pub total_nutrients: usize,
}

/// One nutrient's raw, rounded and displayed values
#[derive(Debug, Serialize)]
pub struct NutrientFactDetail {
    pub id: NutrientId,
    pub name: &'static str,
    pub unit: Unit,
    pub raw_serving: f64,
    pub raw_container: f64,
    pub rounded_serving: f64,
    pub rounded_container: f64,
    pub dv_serving: Option<u32>,
    pub dv_container: Option<u32>,
    pub serving_text: String,
    pub container_text: String,
}

impl From<&NutrientFacts> for NutrientFactDetail {
    fn from(facts: &NutrientFacts) -> Self {
        Self {
            id: facts.spec.id,
            name: facts.spec.display_name,
            unit: facts.spec.unit,
            raw_serving: facts.value.raw_serving,
            raw_container: facts.value.raw_container,
            rounded_serving: facts.rounded.serving,
            rounded_container: facts.rounded.container,
            dv_serving: facts.daily_value.serving.percent(),
            dv_container: facts.daily_value.container.percent(),
            serving_text: facts.serving_text.clone(),
            container_text: facts.container_text.clone(),
        }
    }
}

/// Response for generate_nutrition_panel
#[derive(Debug, Serialize)]
pub struct GeneratePanelResponse {
    pub summary: PanelSummary,
    pub nutrients: Vec<NutrientFactDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<PanelLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportedFile>,
    pub generated_at: String,
}

/// Response for round_nutrient
#[derive(Debug, Serialize)]
pub struct RoundNutrientResponse {
    pub id: NutrientId,
    pub name: &'static str,
    pub rounding: RoundingCategory,
    pub raw: f64,
    pub rounded: f64,
    pub display: String,
    pub daily_value: Option<u32>,
}

/// One schema entry for list_nutrients
#[derive(Debug, Serialize)]
pub struct NutrientInfo {
    pub id: NutrientId,
    pub name: &'static str,
    pub unit: &'static str,
    pub rounding: RoundingCategory,
    pub daily_value: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ListNutrientsResponse {
    pub nutrients: Vec<NutrientInfo>,
    pub total: usize,
}

/// Generate a panel and optionally export it into `output_dir`
pub fn generate_panel(
    request: &PanelRequest,
    export: Option<ExportFormat>,
    include_layout: bool,
    output_dir: &Path,
    options: &RenderOptions,
) -> PanelResult<GeneratePanelResponse> {
    let (facts, layout) = build_layout(request)?;

    let calories = facts
        .iter()
        .find(|f| f.id() == NutrientId::Calories)
        .map(|f| f.rounded)
        .ok_or_else(|| PanelError::UnknownNutrientId(NutrientId::Calories.to_string()))?;

    let export = match export {
        Some(format) => {
            let path = output_dir.join(export_file_name(&request.product.name, format));
            Some(export_panel(&layout, format, options, &path)?)
        }
        None => None,
    };

    Ok(GeneratePanelResponse {
        summary: PanelSummary {
            product_name: request.product.name.clone(),
            serving_size: request.product.serving_size.clone(),
            servings_per_container: request.product.servings_per_container,
            calories_per_serving: calories.serving,
            calories_per_container: calories.container,
            total_nutrients: facts.len(),
        },
        nutrients: facts.iter().map(NutrientFactDetail::from).collect(),
        layout: include_layout.then_some(layout),
        export,
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Round a single amount with its nutrient's rule
pub fn round_nutrient(id: &str, amount: f64) -> PanelResult<RoundNutrientResponse> {
    let id = NutrientId::from_str(id).ok_or_else(|| PanelError::UnknownNutrientId(id.to_string()))?;
    let amount = validate_amount(id, amount)?;
    let spec = nutrient_spec(id);
    let rounded = round_amount(spec.rounding, amount);

    Ok(RoundNutrientResponse {
        id,
        name: spec.display_name,
        rounding: spec.rounding,
        raw: amount,
        rounded,
        display: format_nutrient_amount(spec, rounded),
        daily_value: percent_daily_value(spec, rounded).percent(),
    })
}

/// Describe the nutrient schema in panel order
pub fn list_nutrients() -> ListNutrientsResponse {
    let nutrients: Vec<NutrientInfo> = NUTRIENT_SCHEMA
        .iter()
        .map(|spec| NutrientInfo {
            id: spec.id,
            name: spec.display_name,
            unit: spec.unit.suffix(),
            rounding: spec.rounding,
            daily_value: spec.daily_value,
        })
        .collect();

    let total = nutrients.len();
    ListNutrientsResponse { nutrients, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_request;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("nfp-test-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_generate_panel_summary() {
        let response = generate_panel(
            &sample_request(),
            None,
            false,
            Path::new("."),
            &RenderOptions::default(),
        )
        .unwrap();

        assert_eq!(response.summary.product_name, "My Product");
        assert_eq!(response.summary.calories_per_serving, 170.0);
        assert_eq!(response.summary.calories_per_container, 510.0);
        assert_eq!(response.summary.total_nutrients, 15);
        assert!(response.layout.is_none());
        assert!(response.export.is_none());

        let sodium = response.nutrients.iter().find(|n| n.id == NutrientId::Sodium).unwrap();
        assert_eq!(sodium.dv_serving, Some(5));
        assert_eq!(sodium.dv_container, Some(14));
        assert_eq!(sodium.container_text, "330mg");
    }

    #[test]
    fn test_generate_panel_rejects_bad_servings() {
        let mut request = sample_request();
        request.product.servings_per_container = 0;

        let err = generate_panel(&request, None, true, Path::new("."), &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, PanelError::InvalidServingsCount(0)));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_generate_panel_exports_pdf() {
        let dir = temp_dir("export");
        let response = generate_panel(
            &sample_request(),
            Some(ExportFormat::Pdf),
            true,
            &dir,
            &RenderOptions::default(),
        )
        .unwrap();

        let export = response.export.unwrap();
        assert!(export.file_path.ends_with("My_Product_NFP.pdf"));
        assert!(export.bytes_written > 0);
        assert!(response.layout.is_some());

        let bytes = std::fs::read(&export.file_path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_round_nutrient() {
        let r = round_nutrient("sodium", 145.0).unwrap();
        assert_eq!(r.rounded, 150.0);
        assert_eq!(r.display, "150mg");
        assert_eq!(r.daily_value, Some(7));

        let r = round_nutrient("total_fat", 0.4).unwrap();
        assert_eq!(r.rounded, 0.0);
        assert_eq!(r.display, "0g");

        let r = round_nutrient("calories", 155.0).unwrap();
        assert_eq!(r.rounded, 160.0);
        assert_eq!(r.display, "");
        assert_eq!(r.daily_value, None);
    }

    #[test]
    fn test_round_nutrient_errors() {
        assert!(matches!(
            round_nutrient("vitamin_k", 1.0),
            Err(PanelError::UnknownNutrientId(id)) if id == "vitamin_k"
        ));
        assert!(round_nutrient("sodium", -1.0).is_err());
        assert!(round_nutrient("sodium", f64::NAN).is_err());
    }

    #[test]
    fn test_list_nutrients() {
        let response = list_nutrients();
        assert_eq!(response.total, 15);
        assert_eq!(response.nutrients[0].id, NutrientId::Calories);
        assert_eq!(response.nutrients[5].unit, "mg");
        assert_eq!(response.nutrients[5].daily_value, Some(2300.0));
        assert_eq!(response.nutrients[3].daily_value, None);
    }
}
