//! Panel layout builder
//!
//! Walks the computed nutrient facts in schema order with a downward-moving
//! cursor and emits positioned text, rows and rules.

use crate::error::{PanelError, PanelResult};
use crate::models::{
    CaloriesRow, ColumnHeadings, ColumnPositions, FontWeight, Footer, LayoutRow, PanelLayout,
    ProductMeta, Rect, Rule, Separator, TextAlign, TextItem, TitleBlock, VerticalSeparator,
};
use crate::nutrition::{validate_servings, Emphasis, NutrientFacts, NutrientId, NUTRIENT_SCHEMA};

use super::geometry::*;

/// Font weight, indentation and sizes of a nutrient row
#[derive(Debug, Clone, Copy, PartialEq)]
struct RowStyle {
    indent_level: u8,
    weight: FontWeight,
    font_size: f64,
    value_font_size: f64,
}

fn row_style(emphasis: Emphasis) -> RowStyle {
    match emphasis {
        Emphasis::Headline | Emphasis::Major => RowStyle {
            indent_level: 0,
            weight: FontWeight::Bold,
            font_size: MAJOR_ROW_SIZE,
            value_font_size: AMOUNT_SIZE,
        },
        Emphasis::Sub => RowStyle {
            indent_level: 1,
            weight: FontWeight::Normal,
            font_size: SUB_ROW_SIZE,
            value_font_size: AMOUNT_SIZE,
        },
        Emphasis::SubSub => RowStyle {
            indent_level: 2,
            weight: FontWeight::Normal,
            font_size: SUB_SUB_ROW_SIZE,
            value_font_size: SUB_SUB_AMOUNT_SIZE,
        },
        Emphasis::Micronutrient => RowStyle {
            indent_level: 0,
            weight: FontWeight::Normal,
            font_size: MICRONUTRIENT_ROW_SIZE,
            value_font_size: AMOUNT_SIZE,
        },
    }
}

/// Row label, which differs from the schema name for two nutrients
fn row_label(facts: &NutrientFacts) -> &'static str {
    match facts.id() {
        NutrientId::TotalCarbohydrate => "Total Carb.",
        NutrientId::AddedSugars => "Incl. Added Sugars",
        _ => facts.spec.display_name,
    }
}

/// Rows that print their amount but never a %DV
fn suppresses_daily_value(id: NutrientId) -> bool {
    matches!(id, NutrientId::TransFat | NutrientId::TotalSugars)
}

/// Rule drawn under a row
fn separator_after(id: NutrientId) -> Separator {
    match id {
        NutrientId::TransFat | NutrientId::Cholesterol | NutrientId::Sodium | NutrientId::AddedSugars => {
            Separator::Thin
        }
        NutrientId::Protein => Separator::Thick,
        NutrientId::Potassium => Separator::Medium,
        NutrientId::Calories
        | NutrientId::TotalFat
        | NutrientId::SaturatedFat
        | NutrientId::TotalCarbohydrate
        | NutrientId::DietaryFiber
        | NutrientId::TotalSugars
        | NutrientId::VitaminD
        | NutrientId::Calcium
        | NutrientId::Iron => Separator::None,
    }
}

fn gap_after(separator: Separator) -> f64 {
    match separator {
        Separator::None => 0.0,
        Separator::Thin => GAP_AFTER_THIN,
        Separator::Medium => GAP_AFTER_MEDIUM,
        Separator::Thick => GAP_AFTER_THICK,
    }
}

fn servings_line(servings: u32) -> String {
    if servings == 1 {
        "1 serving per container".to_string()
    } else {
        format!("{} servings per container", servings)
    }
}

/// Builds one `PanelLayout` per product
#[derive(Debug)]
pub struct PanelLayoutBuilder<'a> {
    product: &'a ProductMeta,
    cursor: f64,
    rows: Vec<LayoutRow>,
    rules: Vec<Rule>,
}

impl<'a> PanelLayoutBuilder<'a> {
    pub fn new(product: &'a ProductMeta) -> Self {
        Self {
            product,
            cursor: TOP_MARGIN,
            rows: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Consume the builder and lay out the given facts
    ///
    /// `facts` must hold an entry for every schema nutrient; rows always come
    /// out in schema order whatever order the slice is in.
    pub fn build(mut self, facts: &[NutrientFacts]) -> PanelResult<PanelLayout> {
        let servings = validate_servings(self.product.servings_per_container)?;
        let lookup = |id: NutrientId| {
            facts
                .iter()
                .find(|f| f.id() == id)
                .ok_or_else(|| PanelError::UnknownNutrientId(id.as_str().to_string()))
        };

        // Title block
        let title = TextItem::new("Nutrition Facts", LABEL_X, self.cursor, TITLE_SIZE, FontWeight::Bold, TextAlign::Left);
        self.cursor -= AFTER_TITLE;
        let servings_per_container = TextItem::new(
            servings_line(servings),
            LABEL_X,
            self.cursor,
            SERVING_INFO_SIZE,
            FontWeight::Normal,
            TextAlign::Left,
        );
        self.cursor -= AFTER_SERVINGS_LINE;
        let serving_size_label =
            TextItem::new("Serving size", LABEL_X, self.cursor, SERVING_INFO_SIZE, FontWeight::Bold, TextAlign::Left);
        let serving_size_value = TextItem::new(
            &self.product.serving_size,
            SERVING_SIZE_VALUE_X,
            self.cursor,
            SERVING_INFO_SIZE,
            FontWeight::Bold,
            TextAlign::Left,
        );
        self.cursor -= AFTER_SERVING_SIZE;
        self.rule(Separator::Thick);
        self.cursor -= AFTER_THICK_RULE;

        // Column headings
        let separators_top = self.cursor;
        let per_serving = TextItem::new(
            "Per Serving",
            SERVING_HEADING_X,
            self.cursor,
            HEADING_SIZE,
            FontWeight::Bold,
            TextAlign::Center,
        );
        let per_container = TextItem::new(
            "Per Container",
            CONTAINER_HEADING_X,
            self.cursor,
            HEADING_SIZE,
            FontWeight::Bold,
            TextAlign::Center,
        );
        self.cursor -= AFTER_HEADINGS;
        self.rule(Separator::Medium);
        self.cursor -= AFTER_HEADING_RULE;

        // Calories
        let calories = lookup(NutrientId::Calories)?;
        let figure_y = self.cursor - CALORIE_FIGURE_DROP;
        let calories_row = CaloriesRow {
            label: TextItem::new(
                calories.spec.display_name,
                LABEL_X,
                self.cursor,
                CALORIES_LABEL_SIZE,
                FontWeight::Bold,
                TextAlign::Left,
            ),
            serving: TextItem::new(
                format!("{:.0}", calories.rounded.serving),
                SERVING_HEADING_X,
                figure_y,
                CALORIES_FIGURE_SIZE,
                FontWeight::Bold,
                TextAlign::Center,
            ),
            container: TextItem::new(
                format!("{:.0}", calories.rounded.container),
                CONTAINER_HEADING_X,
                figure_y,
                CALORIES_FIGURE_SIZE,
                FontWeight::Bold,
                TextAlign::Center,
            ),
        };
        self.cursor -= AFTER_CALORIES;
        self.rule(Separator::Medium);
        self.cursor -= AFTER_CALORIES_RULE;

        // %DV sub-headings
        let dv_serving = TextItem::new("% DV*", SERVING_DV_X, self.cursor, DV_HEADING_SIZE, FontWeight::Bold, TextAlign::Right);
        let dv_container =
            TextItem::new("% DV*", CONTAINER_DV_X, self.cursor, DV_HEADING_SIZE, FontWeight::Bold, TextAlign::Right);
        self.cursor -= AFTER_DV_HEADING;
        self.rule(Separator::Thin);
        self.cursor -= AFTER_DV_RULE;

        // Nutrient rows
        for spec in NUTRIENT_SCHEMA.iter().filter(|s| s.id != NutrientId::Calories) {
            let facts = lookup(spec.id)?;
            self.push_row(facts);
        }

        tracing::debug!("Laid out {} nutrient rows for '{}'", self.rows.len(), self.product.name);

        let separators_bottom = self.cursor;
        let vertical_separators = [LEFT_SEPARATOR_X, RIGHT_SEPARATOR_X].map(|x| VerticalSeparator {
            x,
            y_top: separators_top,
            y_bottom: separators_bottom,
            line_width: VERTICAL_SEPARATOR_WIDTH,
            opacity: VERTICAL_SEPARATOR_OPACITY,
        });

        let footer = Footer {
            lines: FOOTNOTE.iter().map(|line| line.to_string()).collect(),
            x: LABEL_X,
            y: separators_bottom - FOOTER_OFFSET,
            font_size: FOOTER_SIZE,
            line_spacing: FOOTER_LINE_SPACING,
        };

        Ok(PanelLayout {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            title: TitleBlock {
                title,
                servings_per_container,
                serving_size_label,
                serving_size_value,
            },
            headings: ColumnHeadings {
                per_serving,
                per_container,
                dv_serving,
                dv_container,
            },
            calories: calories_row,
            rows: self.rows,
            rules: self.rules,
            columns: ColumnPositions {
                label_x: LABEL_X,
                serving_amount_x: SERVING_AMOUNT_X,
                serving_dv_x: SERVING_DV_X,
                container_amount_x: CONTAINER_AMOUNT_X,
                container_dv_x: CONTAINER_DV_X,
            },
            vertical_separators,
            border: Rect {
                x: BORDER_X,
                y: BORDER_Y,
                width: BORDER_WIDTH_UNITS,
                height: BORDER_HEIGHT_UNITS,
            },
            border_stroke: BORDER_STROKE,
            footer,
            dv_font_size: DV_SIZE,
        })
    }

    fn push_row(&mut self, facts: &NutrientFacts) {
        let id = facts.id();
        let style = row_style(facts.spec.emphasis);
        let separator = separator_after(id);

        let (dv_serving_text, dv_container_text) = if suppresses_daily_value(id) {
            (String::new(), String::new())
        } else {
            (facts.daily_value.serving.display(), facts.daily_value.container.display())
        };

        self.rows.push(LayoutRow {
            nutrient: id,
            label: row_label(facts).to_string(),
            indent_level: style.indent_level,
            label_x: LABEL_X + INDENT_STEP * style.indent_level as f64,
            weight: style.weight,
            font_size: style.font_size,
            value_font_size: style.value_font_size,
            serving_text: facts.serving_text.clone(),
            container_text: facts.container_text.clone(),
            dv_serving_text,
            dv_container_text,
            y: self.cursor,
            separator_after: separator,
        });

        self.cursor -= LINE_HEIGHT;
        if separator != Separator::None {
            self.rule(separator);
            self.cursor -= gap_after(separator);
        }
    }

    fn rule(&mut self, weight: Separator) {
        self.rules.push(Rule {
            y: self.cursor,
            x_start: LABEL_X,
            x_end: CONTAINER_DV_X,
            weight,
        });
    }
}

/// Lay out a panel for the given product and computed facts
pub fn build_panel(product: &ProductMeta, facts: &[NutrientFacts]) -> PanelResult<PanelLayout> {
    PanelLayoutBuilder::new(product).build(facts)
}
