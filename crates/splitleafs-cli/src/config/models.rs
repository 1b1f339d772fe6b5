use splitleafs::core::io::format::InputFormat;
use splitleafs::engine::config::SplitConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `None` reads the standard input.
    pub input_path: Option<PathBuf>,
    /// `None` writes the standard output.
    pub output_path: Option<PathBuf>,
    pub format: InputFormat,
    pub core_config: SplitConfig,
}
