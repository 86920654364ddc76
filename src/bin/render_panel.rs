//! Render a nutrition panel to PNG or PDF
//!
//! Usage: render_panel [input.json] [output.png|output.pdf]
//!
//! Without an input file the built-in sample product is rendered. Without an
//! output path the file goes to the output directory as `<name>_NFP.png`.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use nfp::models::{sample_request, PanelRequest};
use nfp::render::{export_file_name, export_panel, ExportFormat, RenderOptions};

fn load_request(path: Option<&String>) -> Result<PanelRequest, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(sample_request()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nfp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = load_request(args.first())?;

    let output = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => nfp::config::output_dir().join(export_file_name(&request.product.name, ExportFormat::Png)),
    };
    let format = ExportFormat::from_path(&output)
        .ok_or_else(|| format!("Cannot tell format from '{}', use .png or .pdf", output.display()))?;

    let (facts, layout) = nfp::generate_panel(&request)?;

    eprintln!("{}", nfp::build_info::BuildInfo::current().label());

    println!("Nutrition Facts: {}", request.product.name);
    println!("  Serving size: {}", request.product.serving_size);
    println!("  Servings per container: {}", request.product.servings_per_container);
    for f in &facts {
        // Calories carry no unit text; show the rounded figure instead
        let (serving, container) = if f.serving_text.is_empty() {
            (f.rounded.serving.to_string(), f.rounded.container.to_string())
        } else {
            (f.serving_text.clone(), f.container_text.clone())
        };
        println!(
            "  {:<20} {:>8} {:>5} | {:>8} {:>5}",
            f.spec.display_name,
            serving,
            f.daily_value.serving.display(),
            container,
            f.daily_value.container.display(),
        );
    }

    let exported = export_panel(&layout, format, &RenderOptions::default(), &output)?;
    println!("Wrote {} ({} bytes)", exported.file_path, exported.bytes_written);

    Ok(())
}
