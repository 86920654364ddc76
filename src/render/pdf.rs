//! Vector renderer (printpdf)
//!
//! One page with the builtin Helvetica faces. Builtin fonts carry no metrics
//! we can query, so right and centered text use an approximate advance width.

use std::io::BufWriter;

use printpdf::*;

use crate::error::PanelResult;
use crate::models::{FontWeight, PanelLayout, Separator, TextAlign, TextItem};

use super::{render_error, PAGE_HEIGHT_IN, PAGE_WIDTH_IN};

const MM_PER_INCH: f32 = 25.4;
const MM_PER_PT: f32 = MM_PER_INCH / 72.0;
/// Helvetica ascender as a fraction of the font size
const ASCENT: f32 = 0.718;

const COLOR_BLACK: (u8, u8, u8) = (0, 0, 0);
const COLOR_GRAY: (u8, u8, u8) = (128, 128, 128);

fn rgb_to_printpdf(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, None))
}

/// Approximate Helvetica advance width in em
fn char_width(c: char, bold: bool) -> f32 {
    let base = match c {
        ' ' | '.' | ',' | ':' | ';' | 'i' | 'l' | 'j' | '\'' | '!' | '|' => 0.278,
        'f' | 't' | 'r' | '/' | '(' | ')' | '-' => 0.333,
        '0'..='9' => 0.556,
        '%' => 0.889,
        'm' | 'M' => 0.833,
        'w' | 'W' => 0.75,
        '*' => 0.389,
        '<' => 0.584,
        c if c.is_ascii_uppercase() => 0.667,
        _ => 0.556,
    };
    if bold {
        base * 1.05
    } else {
        base
    }
}

fn text_width_mm(text: &str, size_pt: f32, bold: bool) -> f32 {
    text.chars().map(|c| char_width(c, bold)).sum::<f32>() * size_pt * MM_PER_PT
}

/// Maps panel units to millimetres; PDF y already grows upward
#[derive(Debug, Clone, Copy)]
struct PageMap {
    mm_per_unit_x: f32,
    mm_per_unit_y: f32,
}

impl PageMap {
    fn new(layout: &PanelLayout) -> Self {
        Self {
            mm_per_unit_x: PAGE_WIDTH_IN as f32 * MM_PER_INCH / layout.width as f32,
            mm_per_unit_y: PAGE_HEIGHT_IN as f32 * MM_PER_INCH / layout.height as f32,
        }
    }

    fn x(&self, x: f64) -> f32 {
        x as f32 * self.mm_per_unit_x
    }

    fn y(&self, y: f64) -> f32 {
        y as f32 * self.mm_per_unit_y
    }
}

fn add_text(layer: &PdfLayerReference, font: &IndirectFontRef, item: &TextItem, map: &PageMap) {
    let size = item.font_size as f32;
    let bold = item.weight == FontWeight::Bold;
    let width = text_width_mm(&item.text, size, bold);
    let x = match item.align {
        TextAlign::Left => map.x(item.x),
        TextAlign::Center => map.x(item.x) - width / 2.0,
        TextAlign::Right => map.x(item.x) - width,
    };
    // Items are top-anchored, PDF text sits on its baseline
    let baseline = map.y(item.y) - size * ASCENT * MM_PER_PT;

    layer.set_fill_color(rgb_to_printpdf(COLOR_BLACK.0, COLOR_BLACK.1, COLOR_BLACK.2));
    layer.use_text(item.text.as_str(), size, Mm(x), Mm(baseline), font);
}

fn add_path(layer: &PdfLayerReference, points: &[(f32, f32)], closed: bool, color: (u8, u8, u8), width: f32) {
    layer.set_outline_color(rgb_to_printpdf(color.0, color.1, color.2));
    layer.set_outline_thickness(width);

    let line = Line {
        points: points
            .iter()
            .map(|&(x, y)| (Point::new(Mm(x), Mm(y)), false))
            .collect(),
        is_closed: closed,
    };
    layer.add_line(line);
}

/// Render the panel as a single-page PDF
pub fn render_pdf(layout: &PanelLayout) -> PanelResult<Vec<u8>> {
    let page_width = PAGE_WIDTH_IN as f32 * MM_PER_INCH;
    let page_height = PAGE_HEIGHT_IN as f32 * MM_PER_INCH;
    let (doc, page1, layer1) = PdfDocument::new(
        "Nutrition Facts",
        Mm(page_width),
        Mm(page_height),
        "Panel",
    );

    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_error)?;
    let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(render_error)?;
    let layer = doc.get_page(page1).get_layer(layer1);
    let map = PageMap::new(layout);

    let border = layout.border;
    add_path(
        &layer,
        &[
            (map.x(border.x), map.y(border.y)),
            (map.x(border.x + border.width), map.y(border.y)),
            (map.x(border.x + border.width), map.y(border.y + border.height)),
            (map.x(border.x), map.y(border.y + border.height)),
        ],
        true,
        COLOR_BLACK,
        layout.border_stroke as f32,
    );

    for rule in layout.rules.iter().filter(|r| r.weight != Separator::None) {
        add_path(
            &layer,
            &[(map.x(rule.x_start), map.y(rule.y)), (map.x(rule.x_end), map.y(rule.y))],
            false,
            COLOR_BLACK,
            rule.weight.line_width() as f32,
        );
    }

    // Half-opacity black on white, drawn as solid gray
    for sep in layout.vertical_separators.iter() {
        add_path(
            &layer,
            &[(map.x(sep.x), map.y(sep.y_top)), (map.x(sep.x), map.y(sep.y_bottom))],
            false,
            COLOR_GRAY,
            sep.line_width as f32,
        );
    }

    for item in layout.text_items().iter().filter(|t| !t.text.is_empty()) {
        let face = match item.weight {
            FontWeight::Bold => &font_bold,
            FontWeight::Normal => &font,
        };
        add_text(&layer, face, item, &map);
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer).map_err(render_error)?;
    let bytes = writer.into_inner().map_err(render_error)?;

    tracing::debug!("Rendered PDF ({} bytes)", bytes.len());

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate_panel;
    use crate::models::sample_request;

    #[test]
    fn test_render_pdf_produces_document() {
        let (_, layout) = generate_panel(&sample_request()).unwrap();
        let bytes = render_pdf(&layout).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let small = text_width_mm("14%", 8.0, true);
        let large = text_width_mm("14%", 16.0, true);
        assert!((large - 2.0 * small).abs() < 1e-4);
        assert!(text_width_mm("Sodium", 11.0, true) > text_width_mm("Sodium", 11.0, false));
    }

    #[test]
    fn test_page_map() {
        let (_, layout) = generate_panel(&sample_request()).unwrap();
        let map = PageMap::new(&layout);
        assert!((map.x(10.0) - 203.2).abs() < 1e-3);
        assert!((map.y(16.0) - 355.6).abs() < 1e-3);
    }
}
