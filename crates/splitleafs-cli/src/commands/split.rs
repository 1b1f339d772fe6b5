use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use splitleafs::{
    core::io::{
        ndx::{write_index, write_summary},
        records::{read_atoms, read_atoms_from_path},
    },
    core::models::atom::AtomRecord,
    engine::progress::ProgressReporter,
    workflows,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub fn run(config: &AppConfig) -> Result<()> {
    let atoms = match &config.input_path {
        Some(path) => {
            info!("Loading {} structure from {:?}", config.format, path);
            read_atoms_from_path(path, config.format).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })?
        }
        None => {
            info!("Loading {} structure from standard input", config.format);
            read_atoms(&mut io::stdin().lock(), config.format)?
        }
    };

    let index = split_to_index(&atoms, config)?;

    match &config.output_path {
        Some(path) => {
            info!("Writing index to {:?}", path);
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(&index.content)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&index.content)?;
            stdout.flush()?;
        }
    }

    io::stderr().lock().write_all(&index.summary)?;
    Ok(())
}

/// A fully rendered index file and its per-group summary.
#[derive(Debug)]
pub struct RenderedIndex {
    pub content: Vec<u8>,
    pub summary: Vec<u8>,
}

/// Splits the leaflets and renders the index in memory, so that a failure
/// never leaves a partially written index behind.
pub fn split_to_index(atoms: &[AtomRecord], config: &AppConfig) -> Result<RenderedIndex> {
    info!("Read {} atom record(s).", atoms.len());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let result = workflows::split::run(atoms, &config.core_config, &reporter)?;

    if result.groups.is_empty() {
        warn!("Both leaflet groups are empty.");
    }

    let mut content = Vec::new();
    write_index(&result.groups, &mut content)?;
    let mut summary = Vec::new();
    write_summary(&result.groups, &mut summary)?;

    Ok(RenderedIndex { content, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitleafs::core::io::format::InputFormat;
    use splitleafs::core::models::atom::Axis;
    use splitleafs::engine::config::{SplitConfigBuilder, SplitMode};
    use splitleafs::engine::error::EngineError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const BILAYER_GRO: &str = "\
Small bilayer
    6
    1DPPC   NC3    1   1.000   1.000   4.300
    1DPPC    P1    2   1.000   1.000   4.000
    2DPPC   NC3    3   2.000   1.000   0.700
    2DPPC    P1    4   2.000   1.000   1.000
    3DPPC    P1    5   3.000   1.000   3.800
    3DPPC   NC3    6   3.000   1.000   4.100
   4.00000   4.00000   5.00000
";

    fn app_config(
        input_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        mode: SplitMode,
        atom_name: &str,
    ) -> AppConfig {
        AppConfig {
            input_path,
            output_path,
            format: InputFormat::Gro,
            core_config: SplitConfigBuilder::new()
                .axis(Axis::Z)
                .atom_name(atom_name)
                .mode(mode)
                .build()
                .unwrap(),
        }
    }

    fn atoms() -> Vec<AtomRecord> {
        read_atoms(&mut BILAYER_GRO.as_bytes(), InputFormat::Gro).unwrap()
    }

    #[test]
    fn split_to_index_renders_reference_atoms() {
        let config = app_config(None, None, SplitMode::Atom, "P1");
        let index = split_to_index(&atoms(), &config).unwrap();

        assert_eq!(
            String::from_utf8(index.content).unwrap(),
            "[ upper_leaflet ]\n2 5\n[ lower_leaflet ]\n4\n"
        );
        assert_eq!(
            String::from_utf8(index.summary).unwrap(),
            "upper_leaflet: 2 atoms\nlower_leaflet: 1 atoms\n"
        );
    }

    #[test]
    fn split_to_index_renders_whole_residues() {
        let config = app_config(None, None, SplitMode::Residue, "P1");
        let index = split_to_index(&atoms(), &config).unwrap();

        assert_eq!(
            String::from_utf8(index.content).unwrap(),
            "[ upper_leaflet ]\n1 2 5 6\n[ lower_leaflet ]\n3 4\n"
        );
    }

    #[test]
    fn split_to_index_fails_without_reference_atoms() {
        let config = app_config(None, None, SplitMode::Atom, "PO4");
        let result = split_to_index(&atoms(), &config);

        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::EmptySelection { .. }))
        ));
    }

    #[test]
    fn run_reads_and_writes_files() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bilayer.gro");
        let output = dir.path().join("leaflets.ndx");
        std::fs::write(&input, BILAYER_GRO).unwrap();

        let config = app_config(Some(input), Some(output.clone()), SplitMode::Atom, "P1");
        run(&config).unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        assert_eq!(written, "[ upper_leaflet ]\n2 5\n[ lower_leaflet ]\n4\n");
    }

    #[test]
    fn run_writes_nothing_when_split_fails() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bilayer.gro");
        let output = dir.path().join("leaflets.ndx");
        std::fs::write(&input, BILAYER_GRO).unwrap();

        let config = app_config(Some(input), Some(output.clone()), SplitMode::Atom, "PO4");
        assert!(run(&config).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn run_reports_malformed_input_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("broken.gro");
        let output = dir.path().join("leaflets.ndx");
        std::fs::write(
            &input,
            "Broken\n    1\n    1DPPC    P1    1   1.000   1.000   oops\n   1.0   1.0   1.0\n",
        )
        .unwrap();

        let config = app_config(Some(input.clone()), Some(output.clone()), SplitMode::Atom, "P1");
        let err = run(&config).unwrap_err();

        assert!(matches!(err, CliError::FileParsing { ref path, .. } if *path == input));
        assert!(err.to_string().contains("line 3"));
        assert!(!output.exists());
    }
}
