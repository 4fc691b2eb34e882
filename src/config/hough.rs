use crate::detector::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct HoughToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Zero padding added around the decoded input raster.
    #[serde(default)]
    pub margin: usize,
    #[serde(default)]
    pub detector: DetectorParams,
    pub output: HoughOutputConfig,
}

/// Where the tool writes its results. Images are optional debug dumps.
#[derive(Debug, Deserialize)]
pub struct HoughOutputConfig {
    #[serde(rename = "lines_json")]
    pub lines_json: PathBuf,
    #[serde(default)]
    pub binary_image: Option<PathBuf>,
    #[serde(default)]
    pub accumulator_image: Option<PathBuf>,
    #[serde(default)]
    pub maxima_image: Option<PathBuf>,
}

impl HoughOutputConfig {
    /// Whether any intermediate raster has to be kept for dumping.
    pub fn wants_stage_images(&self) -> bool {
        self.binary_image.is_some()
            || self.accumulator_image.is_some()
            || self.maxima_image.is_some()
    }
}

pub fn load_config(path: &Path) -> Result<HoughToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<HoughToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
