//! Panel geometry constants
//!
//! Panel units: the page is 10 wide and 16 tall, y grows upward.

pub const PANEL_WIDTH: f64 = 10.0;
pub const PANEL_HEIGHT: f64 = 16.0;

// ============================================================================
// Columns
// ============================================================================

pub const LABEL_X: f64 = 0.5;
pub const SERVING_AMOUNT_X: f64 = 4.2;
pub const SERVING_DV_X: f64 = 5.2;
pub const CONTAINER_AMOUNT_X: f64 = 7.2;
pub const CONTAINER_DV_X: f64 = 8.2;

pub const LEFT_SEPARATOR_X: f64 = 5.5;
pub const RIGHT_SEPARATOR_X: f64 = 8.5;

/// Center of the "Per Serving" heading and calorie figure
pub const SERVING_HEADING_X: f64 = (LABEL_X + LEFT_SEPARATOR_X) / 2.0 + 0.7;
/// Center of the "Per Container" heading and calorie figure
pub const CONTAINER_HEADING_X: f64 = (LEFT_SEPARATOR_X + RIGHT_SEPARATOR_X) / 2.0 + 0.8;

pub const SERVING_SIZE_VALUE_X: f64 = LABEL_X + 2.5;
pub const INDENT_STEP: f64 = 0.25;

// ============================================================================
// Vertical rhythm
// ============================================================================

pub const TOP_MARGIN: f64 = 15.5;
pub const LINE_HEIGHT: f64 = 0.32;

pub const AFTER_TITLE: f64 = 0.7;
pub const AFTER_SERVINGS_LINE: f64 = 0.35;
pub const AFTER_SERVING_SIZE: f64 = 0.35;
pub const AFTER_THICK_RULE: f64 = 0.35;
pub const AFTER_HEADINGS: f64 = 0.45;
pub const AFTER_HEADING_RULE: f64 = 0.35;
pub const AFTER_CALORIES: f64 = 0.5;
pub const AFTER_CALORIES_RULE: f64 = 0.3;
pub const AFTER_DV_HEADING: f64 = 0.22;
pub const AFTER_DV_RULE: f64 = 0.32;
/// Calorie figures sit slightly below the row cursor
pub const CALORIE_FIGURE_DROP: f64 = 0.05;

pub const GAP_AFTER_THIN: f64 = 0.05;
pub const GAP_AFTER_MEDIUM: f64 = 0.05;
pub const GAP_AFTER_THICK: f64 = 0.15;

pub const FOOTER_OFFSET: f64 = 0.25;
pub const FOOTER_LINE_SPACING: f64 = 0.15;

// ============================================================================
// Font scale (points)
// ============================================================================

pub const TITLE_SIZE: f64 = 28.0;
pub const SERVING_INFO_SIZE: f64 = 10.0;
pub const HEADING_SIZE: f64 = 11.0;
pub const CALORIES_LABEL_SIZE: f64 = 13.0;
pub const CALORIES_FIGURE_SIZE: f64 = 23.0;
pub const DV_HEADING_SIZE: f64 = 8.0;
pub const MAJOR_ROW_SIZE: f64 = 11.0;
pub const SUB_ROW_SIZE: f64 = 10.0;
pub const SUB_SUB_ROW_SIZE: f64 = 9.5;
pub const MICRONUTRIENT_ROW_SIZE: f64 = 10.5;
pub const AMOUNT_SIZE: f64 = 11.0;
pub const SUB_SUB_AMOUNT_SIZE: f64 = 10.0;
pub const DV_SIZE: f64 = 11.0;
pub const FOOTER_SIZE: f64 = 8.0;

// ============================================================================
// Strokes and frame
// ============================================================================

pub const VERTICAL_SEPARATOR_WIDTH: f64 = 1.0;
pub const VERTICAL_SEPARATOR_OPACITY: f64 = 0.5;
pub const BORDER_STROKE: f64 = 2.0;

pub const BORDER_X: f64 = LABEL_X - 0.1;
pub const BORDER_Y: f64 = 0.3;
pub const BORDER_WIDTH_UNITS: f64 = CONTAINER_DV_X - LABEL_X + 0.3;
pub const BORDER_HEIGHT_UNITS: f64 = TOP_MARGIN - 0.2;

pub const FOOTNOTE: [&str; 3] = [
    "*The % Daily Value (DV) tells you how much a nutrient in a",
    "serving of food contributes to a daily diet. 2,000 calories a",
    "day is used for general nutrition advice.",
];
