use crate::core::models::atom::AtomRecord;
use crate::core::models::leaflet::LeafletGroups;
use crate::engine::classify::{split_atoms, split_residues};
use crate::engine::config::{SplitConfig, SplitMode};
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::selection::{axis_coordinates, mean, select_atom_name};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// Mean coordinate of the reference atoms along the configured axis.
    pub threshold: f64,
    /// Number of atoms matching the reference atom name.
    pub reference_count: usize,
    pub groups: LeafletGroups,
    /// Residues holding several reference atoms (residue mode only).
    pub ambiguous_residues: Vec<isize>,
}

/// Computes the mean coordinate of the reference atoms along `config.axis`.
pub fn compute_threshold(atoms: &[AtomRecord], config: &SplitConfig) -> Result<f64, EngineError> {
    let coordinates = axis_coordinates(select_atom_name(atoms, &config.atom_name), config.axis);
    mean(coordinates).ok_or_else(|| EngineError::EmptySelection {
        atom_name: config.atom_name.clone(),
    })
}

#[instrument(skip_all, name = "split_workflow")]
pub fn run(
    atoms: &[AtomRecord],
    config: &SplitConfig,
    reporter: &ProgressReporter,
) -> Result<SplitResult, EngineError> {
    // === Phase 1: Reference plane ===
    let threshold = reporter.phase("Threshold", || {
        info!(
            "Computing reference plane from '{}' atoms along {}.",
            config.atom_name, config.axis
        );
        compute_threshold(atoms, config)
    })?;
    let reference_count = select_atom_name(atoms, &config.atom_name).count();
    debug!(
        "Reference plane at {} = {} ({} reference atoms out of {}).",
        config.axis,
        threshold,
        reference_count,
        atoms.len()
    );
    reporter.message(format!("Reference plane at {} = {:.4}", config.axis, threshold));

    // === Phase 2: Classification ===
    let (groups, ambiguous_residues) = reporter.phase("Classification", || match config.mode {
        SplitMode::Atom => {
            info!("Assigning reference atoms to leaflets.");
            let reference = select_atom_name(atoms, &config.atom_name);
            (split_atoms(reference, threshold, config.axis), Vec::new())
        }
        SplitMode::Residue => {
            info!("Assigning whole residues to leaflets.");
            let split = split_residues(atoms, &config.atom_name, threshold, config.axis);
            for resid in &split.ambiguous_residues {
                warn!(
                    "Residue {} holds more than one '{}' atom; its atoms were assigned more than once.",
                    resid, config.atom_name
                );
            }
            (split.groups, split.ambiguous_residues)
        }
    });

    info!(
        "Split complete: {} atom(s) assigned across both leaflets.",
        groups.len()
    );

    Ok(SplitResult {
        threshold,
        reference_count,
        groups,
        ambiguous_residues,
    })
}
