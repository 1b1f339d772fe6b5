use crate::error::{CliError, Result};
use serde::Deserialize;
use splitleafs::core::io::format::InputFormat;
use splitleafs::core::models::atom::Axis;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub axis: Option<Axis>,
    pub atom: Option<String>,
    pub format: Option<InputFormat>,
    #[serde(rename = "keep-residue")]
    pub keep_residue: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
