use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use splitleafs::core::io::format::InputFormat;
use splitleafs::engine::config::{SplitConfigBuilder, SplitMode};
use tracing::debug;

/// Merges command-line flags over the optional config file over defaults.
///
/// Nothing here reads the input structure, so every configuration error
/// surfaces before any input is consumed.
pub fn build_config(args: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let axis = args
        .axis
        .map(Into::into)
        .or(file_config.axis)
        .unwrap_or(defaults.axis);

    let atom_name = args
        .atom
        .clone()
        .or(file_config.atom)
        .unwrap_or(defaults.atom);

    let format = args
        .format
        .map(Into::into)
        .or(file_config.format)
        .or_else(|| args.input.as_deref().and_then(InputFormat::from_path))
        .unwrap_or(defaults.format);

    let keep_residue = match (args.keep_residue, args.keep_atom) {
        (true, _) => true,
        (false, true) => false,
        (false, false) => file_config.keep_residue.unwrap_or(defaults.keep_residue),
    };
    let mode = if keep_residue {
        SplitMode::Residue
    } else {
        SplitMode::Atom
    };

    let core_config = SplitConfigBuilder::new()
        .axis(axis)
        .atom_name(atom_name)
        .mode(mode)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(
        "Resolved configuration: format={}, axis={}, atom='{}', mode={:?}",
        format, core_config.axis, core_config.atom_name, core_config.mode
    );

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        format,
        core_config,
    })
}
