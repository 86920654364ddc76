//! Raster renderer (plotters)

use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, IntoFont, TextStyle};
use plotters_bitmap::BitMapBackend;

use crate::error::{PanelError, PanelResult};
use crate::models::{FontWeight, PanelLayout, Separator, TextAlign, TextItem};

use super::{render_error, RenderOptions, DPI_RANGE};

/// Maps panel units onto the pixel grid
#[derive(Debug, Clone, Copy)]
struct PixelMap {
    width: f64,
    height: f64,
    units_wide: f64,
    units_tall: f64,
    dpi: f64,
}

impl PixelMap {
    fn x(&self, x: f64) -> i32 {
        (x / self.units_wide * self.width).round() as i32
    }

    fn y(&self, y: f64) -> i32 {
        ((self.units_tall - y) / self.units_tall * self.height).round() as i32
    }

    fn points(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    fn stroke(&self, pt: f64) -> u32 {
        self.points(pt).round().max(1.0) as u32
    }
}

fn text_style(item: &TextItem, map: &PixelMap) -> TextStyle<'static> {
    let font_style = match item.weight {
        FontWeight::Bold => FontStyle::Bold,
        FontWeight::Normal => FontStyle::Normal,
    };
    let h_pos = match item.align {
        TextAlign::Left => HPos::Left,
        TextAlign::Center => HPos::Center,
        TextAlign::Right => HPos::Right,
    };

    ("sans-serif", map.points(item.font_size))
        .into_font()
        .style(font_style)
        .color(&BLACK)
        .pos(Pos::new(h_pos, VPos::Top))
}

/// Render the panel as PNG bytes
pub fn render_png(layout: &PanelLayout, options: &RenderOptions) -> PanelResult<Vec<u8>> {
    if !DPI_RANGE.contains(&options.dpi) {
        return Err(PanelError::InvalidResolution(options.dpi));
    }
    let (width, height) = options.pixel_size();
    let map = PixelMap {
        width: width as f64,
        height: height as f64,
        units_wide: layout.width,
        units_tall: layout.height,
        dpi: options.dpi.max(1) as f64,
    };

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| PanelError::Render(format!("{}x{} image is too large", width, height)))?;
    let mut buffer = vec![0u8; len];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let border = layout.border;
        root.draw(&Rectangle::new(
            [
                (map.x(border.x), map.y(border.y + border.height)),
                (map.x(border.x + border.width), map.y(border.y)),
            ],
            BLACK.stroke_width(map.stroke(layout.border_stroke)),
        ))
        .map_err(render_error)?;

        for rule in layout.rules.iter().filter(|r| r.weight != Separator::None) {
            root.draw(&PathElement::new(
                vec![(map.x(rule.x_start), map.y(rule.y)), (map.x(rule.x_end), map.y(rule.y))],
                BLACK.stroke_width(map.stroke(rule.weight.line_width())),
            ))
            .map_err(render_error)?;
        }

        for sep in layout.vertical_separators.iter() {
            root.draw(&PathElement::new(
                vec![(map.x(sep.x), map.y(sep.y_top)), (map.x(sep.x), map.y(sep.y_bottom))],
                BLACK.mix(sep.opacity).stroke_width(map.stroke(sep.line_width)),
            ))
            .map_err(render_error)?;
        }

        for item in layout.text_items().iter().filter(|t| !t.text.is_empty()) {
            let style = text_style(item, &map);
            root.draw_text(&item.text, &style, (map.x(item.x), map.y(item.y)))
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }

    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| PanelError::Render("Failed to create image from buffer".to_string()))?;

    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(render_error)?;

    tracing::debug!("Rendered {}x{} PNG ({} bytes)", width, height, png_bytes.len());

    Ok(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> PixelMap {
        PixelMap {
            width: 2400.0,
            height: 4200.0,
            units_wide: 10.0,
            units_tall: 16.0,
            dpi: 300.0,
        }
    }

    #[test]
    fn test_render_png_sample() {
        let (_, layout) = crate::layout::generate_panel(&crate::models::sample_request()).unwrap();
        let options = RenderOptions { dpi: 72 };
        let bytes = render_png(&layout, &options).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));

        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), options.pixel_size());
    }

    #[test]
    fn test_render_png_rejects_huge_dpi() {
        let (_, layout) = crate::layout::generate_panel(&crate::models::sample_request()).unwrap();
        let err = render_png(&layout, &RenderOptions { dpi: 5000 }).unwrap_err();
        assert!(matches!(err, PanelError::InvalidResolution(5000)));
    }

    #[test]
    fn test_pixel_mapping_flips_y() {
        let m = map();
        assert_eq!(m.x(0.0), 0);
        assert_eq!(m.x(5.0), 1200);
        assert_eq!(m.y(16.0), 0);
        assert_eq!(m.y(0.0), 4200);
        assert_eq!(m.y(8.0), 2100);
    }

    #[test]
    fn test_stroke_in_pixels() {
        let m = map();
        assert_eq!(m.stroke(10.0), 42);
        assert_eq!(m.stroke(0.8), 3);
        assert_eq!(m.stroke(0.0), 1);
    }
}
