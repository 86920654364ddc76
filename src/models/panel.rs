//! Panel layout model
//!
//! Renderer-agnostic description of a finished label. Coordinates are panel
//! units: x grows to the right, y grows upward, the page spans 10 x 16.

use serde::{Deserialize, Serialize};

use crate::nutrition::NutrientId;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Horizontal anchor of a text item relative to its x position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Horizontal rule weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    None,
    Thin,
    Medium,
    Thick,
}

impl Separator {
    /// Stroke width in points
    pub fn line_width(&self) -> f64 {
        match self {
            Separator::None => 0.0,
            Separator::Thin => 0.8,
            Separator::Medium => 5.0,
            Separator::Thick => 10.0,
        }
    }
}

/// A positioned piece of text, top-anchored at `y`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Relative scale in points, not pixels
    pub font_size: f64,
    pub weight: FontWeight,
    pub align: TextAlign,
}

impl TextItem {
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size: f64, weight: FontWeight, align: TextAlign) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            weight,
            align,
        }
    }
}

/// Horizontal rule spanning the panel width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub weight: Separator,
}

/// Vertical line dividing the two value columns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalSeparator {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub line_width: f64,
    pub opacity: f64,
}

/// Axis-aligned rectangle with its origin at the lower-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// X positions of the label and the four value columns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnPositions {
    pub label_x: f64,
    pub serving_amount_x: f64,
    pub serving_dv_x: f64,
    pub container_amount_x: f64,
    pub container_dv_x: f64,
}

/// Title, servings line and serving size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleBlock {
    pub title: TextItem,
    pub servings_per_container: TextItem,
    pub serving_size_label: TextItem,
    pub serving_size_value: TextItem,
}

/// "Per Serving" / "Per Container" and the two "% DV*" sub-headings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeadings {
    pub per_serving: TextItem,
    pub per_container: TextItem,
    pub dv_serving: TextItem,
    pub dv_container: TextItem,
}

/// The Calories line with its large figures and no %DV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriesRow {
    pub label: TextItem,
    pub serving: TextItem,
    pub container: TextItem,
}

/// One nutrient line below the %DV heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub nutrient: NutrientId,
    pub label: String,
    /// 0 to 2
    pub indent_level: u8,
    pub label_x: f64,
    pub weight: FontWeight,
    pub font_size: f64,
    pub value_font_size: f64,
    pub serving_text: String,
    pub container_text: String,
    pub dv_serving_text: String,
    pub dv_container_text: String,
    pub y: f64,
    pub separator_after: Separator,
}

/// Footnote under the last rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub lines: Vec<String>,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub line_spacing: f64,
}

/// A complete, immutable panel ready for a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub width: f64,
    pub height: f64,
    pub title: TitleBlock,
    pub headings: ColumnHeadings,
    pub calories: CaloriesRow,
    pub rows: Vec<LayoutRow>,
    pub rules: Vec<Rule>,
    pub columns: ColumnPositions,
    pub vertical_separators: [VerticalSeparator; 2],
    pub border: Rect,
    pub border_stroke: f64,
    pub footer: Footer,
    pub dv_font_size: f64,
}

impl PanelLayout {
    /// Flatten every text element into positioned items, in drawing order
    pub fn text_items(&self) -> Vec<TextItem> {
        let mut items = vec![
            self.title.title.clone(),
            self.title.servings_per_container.clone(),
            self.title.serving_size_label.clone(),
            self.title.serving_size_value.clone(),
            self.headings.per_serving.clone(),
            self.headings.per_container.clone(),
            self.calories.label.clone(),
            self.calories.serving.clone(),
            self.calories.container.clone(),
            self.headings.dv_serving.clone(),
            self.headings.dv_container.clone(),
        ];

        for row in &self.rows {
            items.push(TextItem::new(&row.label, row.label_x, row.y, row.font_size, row.weight, TextAlign::Left));
            items.push(TextItem::new(
                &row.serving_text,
                self.columns.serving_amount_x,
                row.y,
                row.value_font_size,
                FontWeight::Normal,
                TextAlign::Right,
            ));
            items.push(TextItem::new(
                &row.container_text,
                self.columns.container_amount_x,
                row.y,
                row.value_font_size,
                FontWeight::Normal,
                TextAlign::Right,
            ));
            if !row.dv_serving_text.is_empty() {
                items.push(TextItem::new(
                    &row.dv_serving_text,
                    self.columns.serving_dv_x,
                    row.y,
                    self.dv_font_size,
                    FontWeight::Bold,
                    TextAlign::Right,
                ));
            }
            if !row.dv_container_text.is_empty() {
                items.push(TextItem::new(
                    &row.dv_container_text,
                    self.columns.container_dv_x,
                    row.y,
                    self.dv_font_size,
                    FontWeight::Bold,
                    TextAlign::Right,
                ));
            }
        }

        for (i, line) in self.footer.lines.iter().enumerate() {
            items.push(TextItem::new(
                line,
                self.footer.x,
                self.footer.y - i as f64 * self.footer.line_spacing,
                self.footer.font_size,
                FontWeight::Normal,
                TextAlign::Left,
            ));
        }

        items
    }

    /// Find the row for a nutrient
    pub fn row(&self, nutrient: NutrientId) -> Option<&LayoutRow> {
        self.rows.iter().find(|r| r.nutrient == nutrient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_widths_ordered() {
        assert_eq!(Separator::None.line_width(), 0.0);
        assert!(Separator::Thin.line_width() < Separator::Medium.line_width());
        assert!(Separator::Medium.line_width() < Separator::Thick.line_width());
    }

    #[test]
    fn test_separator_serde() {
        assert_eq!(serde_json::to_string(&Separator::Thick).unwrap(), "\"thick\"");
        let parsed: Separator = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, Separator::None);
    }
}
