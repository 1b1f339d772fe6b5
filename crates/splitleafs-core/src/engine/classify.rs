//! Leaflet classifiers.
//!
//! Both classifiers compare coordinates to a precomputed threshold with
//! [`Leaflet::from_coordinate`], so an atom lying exactly on the reference
//! plane always lands in the upper leaflet.

use crate::core::models::atom::{AtomRecord, Axis};
use crate::core::models::leaflet::{Leaflet, LeafletGroups};

/// Assigns every given atom to a leaflet by its own coordinate.
///
/// Callers pass the reference atoms only; each one produces exactly one id.
pub fn split_atoms<'a, I>(atoms: I, threshold: f64, axis: Axis) -> LeafletGroups
where
    I: IntoIterator<Item = &'a AtomRecord>,
{
    let mut groups = LeafletGroups::new();
    for atom in atoms {
        let leaflet = Leaflet::from_coordinate(atom.coordinate(axis), threshold);
        groups.push(leaflet, atom.atomid);
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// No reference atom seen yet in the current residue run.
    Unresolved,
    /// The run has been assigned to a leaflet by its last reference atom.
    Resolved(Leaflet),
}

/// Outcome of a per-residue split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidueSplit {
    pub groups: LeafletGroups,
    /// Residues whose run held more than one reference atom, in input order.
    pub ambiguous_residues: Vec<isize>,
}

/// Streaming per-residue classifier.
///
/// A residue run is a maximal sequence of consecutive atoms sharing a resid.
/// Atoms are buffered until the run's reference atom shows up; the reference
/// atom's coordinate then picks the leaflet and the buffer (reference atom
/// included) is flushed into it. Later atoms of a resolved run go straight to
/// that leaflet. Runs without a reference atom contribute nothing.
pub struct ResidueSplitter<'a> {
    atom_name: &'a str,
    axis: Axis,
    threshold: f64,
    groups: LeafletGroups,
    current_resid: Option<isize>,
    run_atoms: Vec<usize>,
    run_matches: usize,
    state: RunState,
    ambiguous_residues: Vec<isize>,
}

impl<'a> ResidueSplitter<'a> {
    pub fn new(atom_name: &'a str, axis: Axis, threshold: f64) -> Self {
        Self {
            atom_name,
            axis,
            threshold,
            groups: LeafletGroups::new(),
            current_resid: None,
            run_atoms: Vec::new(),
            run_matches: 0,
            state: RunState::Unresolved,
            ambiguous_residues: Vec::new(),
        }
    }

    pub fn push(&mut self, atom: &AtomRecord) {
        if self.current_resid != Some(atom.resid) {
            self.start_run(atom.resid);
        }
        self.run_atoms.push(atom.atomid);

        if atom.atom_name == self.atom_name {
            self.resolve(atom);
        } else if let RunState::Resolved(leaflet) = self.state {
            self.groups.push(leaflet, atom.atomid);
        }
    }

    pub fn finish(self) -> ResidueSplit {
        ResidueSplit {
            groups: self.groups,
            ambiguous_residues: self.ambiguous_residues,
        }
    }

    fn start_run(&mut self, resid: isize) {
        self.current_resid = Some(resid);
        self.run_atoms.clear();
        self.run_matches = 0;
        self.state = RunState::Unresolved;
    }

    fn resolve(&mut self, atom: &AtomRecord) {
        let leaflet = Leaflet::from_coordinate(atom.coordinate(self.axis), self.threshold);
        self.run_matches += 1;
        if self.run_matches == 2 {
            self.ambiguous_residues.push(atom.resid);
        }
        // TODO: settle how a residue with several reference atoms is assigned.
        // Every match flushes the whole run seen so far, so a second match
        // duplicates ids and the later leaflet wins for the remaining atoms.
        self.groups.extend(leaflet, self.run_atoms.iter().copied());
        self.state = RunState::Resolved(leaflet);
    }
}

/// Assigns whole residues to leaflets, scanning `atoms` in input order.
pub fn split_residues<'a, I>(
    atoms: I,
    atom_name: &str,
    threshold: f64,
    axis: Axis,
) -> ResidueSplit
where
    I: IntoIterator<Item = &'a AtomRecord>,
{
    let mut splitter = ResidueSplitter::new(atom_name, axis, threshold);
    for atom in atoms {
        splitter.push(atom);
    }
    splitter.finish()
}
