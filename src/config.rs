use std::path::PathBuf;

pub const DEFAULT_SOURCE_ROOT: &str = "data_src";
pub const DEFAULT_DEST_ROOT: &str = "data";
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["html", "css", "js"];

/// Where to read assets from, where to write artifacts to, and which
/// filename suffixes qualify for compression.
#[derive(Debug, Clone)]
pub struct CompressConfig {
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    pub extensions: Vec<String>,
}
impl CompressConfig {
    pub fn new<S: Into<PathBuf>, D: Into<PathBuf>>(source_root: S, dest_root: D) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            ..Self::default()
        }
    }
}
impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            dest_root: PathBuf::from(DEFAULT_DEST_ROOT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}
