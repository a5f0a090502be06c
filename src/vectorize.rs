//! External vectorization: edge bitmap → SVG outlines via potrace.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use image::GrayImage;

use crate::config::ConvertConfig;
use crate::error::ConvertError;

/// Run the edge bitmap through potrace and return the SVG text.
pub fn vectorize(edges: &GrayImage, config: &ConvertConfig) -> Result<String, ConvertError> {
    let dir = workdir(config)?;
    let bmp_path = dir.join("edges.bmp");
    let svg_path = dir.join("outlines.svg");

    edges.save(&bmp_path).map_err(|e| {
        ConvertError::Vectorize(format!("writing {}: {}", bmp_path.display(), e))
    })?;

    let output = Command::new(&config.potrace)
        .arg(&bmp_path)
        .args(["-s", "-o"])
        .arg(&svg_path)
        .output()
        .map_err(|e| {
            ConvertError::Vectorize(format!("running {}: {}", config.potrace.display(), e))
        })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ConvertError::Vectorize(format!(
            "{} exited with {}: {}",
            config.potrace.display(),
            output.status,
            stderr.trim(),
        )));
    }

    let svg = fs::read_to_string(&svg_path)?;
    if !config.keep_intermediates {
        let _ = fs::remove_file(&bmp_path);
        let _ = fs::remove_file(&svg_path);
    }
    Ok(svg)
}

/// Resolve and create the work directory for intermediate files.
fn workdir(config: &ConvertConfig) -> Result<PathBuf, ConvertError> {
    let dir = match &config.workdir {
        Some(dir) => dir.clone(),
        None => std::env::temp_dir().join(format!("img2desmos-{}", std::process::id())),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
