//! Product input model
//!
//! What a caller hands to the generator: product metadata plus raw
//! per-serving amounts keyed by nutrient id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Product metadata printed in the panel header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMeta {
    pub name: String,
    pub serving_size: String,
    /// Must be at least 1; kept signed so bad input can be reported
    pub servings_per_container: i64,
}

/// A complete panel generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRequest {
    pub product: ProductMeta,
    /// Raw per-serving amounts keyed by nutrient id (e.g. "total_fat")
    pub serving_amounts: BTreeMap<String, f64>,
}

impl PanelRequest {
    pub fn new(product: ProductMeta, serving_amounts: BTreeMap<String, f64>) -> Self {
        Self {
            product,
            serving_amounts,
        }
    }
}

/// The default product of the label form, useful for demos and tests
pub fn sample_request() -> PanelRequest {
    let amounts = [
        ("calories", 170.0),
        ("total_fat", 6.0),
        ("saturated_fat", 3.5),
        ("trans_fat", 0.0),
        ("cholesterol", 15.0),
        ("sodium", 110.0),
        ("total_carbohydrate", 24.0),
        ("dietary_fiber", 1.0),
        ("total_sugars", 18.0),
        ("added_sugars", 15.0),
        ("protein", 6.0),
        ("vitamin_d", 0.0),
        ("calcium", 260.0),
        ("iron", 0.0),
        ("potassium", 240.0),
    ];

    PanelRequest {
        product: ProductMeta {
            name: "My Product".to_string(),
            serving_size: "2/3 cup (124g)".to_string(),
            servings_per_container: 3,
        },
        serving_amounts: amounts
            .iter()
            .map(|(id, amount)| (id.to_string(), *amount))
            .collect(),
    }
}
