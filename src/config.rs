use std::path::PathBuf;

/// All conversion parameters in one struct.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    // -- Edge detection --
    /// Gaussian pre-smoothing sigma before Canny. 0 disables the pass.
    pub blur_sigma: f32,
    /// Canny low threshold (weak edges).
    pub canny_low: f32,
    /// Canny high threshold (strong edges).
    pub canny_high: f32,

    // -- Vectorization --
    /// Path to the potrace binary.
    pub potrace: PathBuf,
    /// Work directory for intermediate files. None = per-process directory
    /// under the system temp dir.
    pub workdir: Option<PathBuf>,
    /// Keep the intermediate bitmap and SVG instead of deleting them.
    pub keep_intermediates: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 1.1,
            canny_low: 50.0,
            canny_high: 150.0,
            potrace: PathBuf::from("potrace"),
            workdir: None,
            keep_intermediates: false,
        }
    }
}
