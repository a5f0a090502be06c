use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::Parser;
use image::{GrayImage, ImageFormat};
use serde::Serialize;

use img2desmos::ConvertConfig;

#[derive(Parser)]
#[command(
    name = "img2desmos",
    about = "Raster image to graphing-calculator equations"
)]
struct Cli {
    /// Input image (PNG, JPEG, BMP) or a ready-made SVG
    #[arg(short, long)]
    input: PathBuf,

    /// Output file, one equation per line
    #[arg(short, long)]
    output: PathBuf,

    /// Also write a JSON report (equations, count, edge image)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Save the edge bitmap to this path
    #[arg(long)]
    edges: Option<PathBuf>,

    /// Gaussian pre-smoothing sigma before Canny (0 = off)
    #[arg(long, default_value = "1.1")]
    blur: f32,

    /// Canny low threshold
    #[arg(long, default_value = "50")]
    canny_low: f32,

    /// Canny high threshold
    #[arg(long, default_value = "150")]
    canny_high: f32,

    /// Potrace binary
    #[arg(long, default_value = "potrace")]
    potrace: PathBuf,

    /// Work directory for intermediate files (default: system temp)
    #[arg(long)]
    workdir: Option<PathBuf>,

    /// Keep the intermediate bitmap and SVG
    #[arg(long)]
    keep_intermediates: bool,
}

/// Shape of the `--json` report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    success: bool,
    equations: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    edges_image: Option<String>,
    equation_count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConvertConfig {
        blur_sigma: cli.blur,
        canny_low: cli.canny_low,
        canny_high: cli.canny_high,
        potrace: cli.potrace.clone(),
        workdir: cli.workdir.clone(),
        keep_intermediates: cli.keep_intermediates,
    };

    // Header
    eprintln!();
    eprintln!("  img2desmos \u{00b7} {}", cli.input.display());
    eprintln!();

    let from_svg = cli
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let (equations, edge_image) = if from_svg {
        let svg_text = fs::read_to_string(&cli.input)?;
        (img2desmos::svg_to_equations(&svg_text)?, None)
    } else {
        let result = img2desmos::convert(&cli.input, &config)?;
        (result.equations, Some(result.edge_image))
    };

    let mut text = equations.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    fs::write(&cli.output, text)?;

    if let (Some(path), Some(edges)) = (&cli.edges, &edge_image) {
        edges.save(path)?;
    }

    if let Some(path) = &cli.json {
        let edges_image = edge_image.as_ref().map(encode_edges).transpose()?;
        let report = Report {
            success: true,
            equations: &equations,
            edges_image,
            equation_count: equations.len(),
        };
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }

    // Footer
    eprintln!();
    eprintln!(
        "  \u{2713} {} ({} equations)",
        cli.output.display(),
        equations.len()
    );
    eprintln!();

    Ok(())
}

/// Encode the edge bitmap as a base64 BMP data URL.
fn encode_edges(edges: &GrayImage) -> Result<String, image::ImageError> {
    let mut buf = Vec::new();
    edges.write_to(&mut Cursor::new(&mut buf), ImageFormat::Bmp)?;
    Ok(format!("data:image/bmp;base64,{}", STANDARD.encode(&buf)))
}
