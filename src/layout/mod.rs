//! Panel layout
//!
//! Turns computed nutrient facts into a positioned `PanelLayout`.

pub mod builder;
pub mod geometry;

pub use builder::{build_panel, PanelLayoutBuilder};

use crate::error::PanelResult;
use crate::models::{PanelLayout, PanelRequest};
use crate::nutrition::{compute_facts, NutrientFacts};

/// Validate, compute and lay out a request in one call
pub fn generate_panel(request: &PanelRequest) -> PanelResult<(Vec<NutrientFacts>, PanelLayout)> {
    let facts = compute_facts(request)?;
    let layout = build_panel(&request.product, &facts)?;
    Ok((facts, layout))
}
