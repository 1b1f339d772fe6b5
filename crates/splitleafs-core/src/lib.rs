//! # splitleafs Core Library
//!
//! Splits the atoms of a lipid bilayer snapshot into its two leaflets and
//! writes them as groups of a GROMACS index file.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Immutable atom records, the leaflet group
//!   container, the fixed-column record parser for GRO and PDB files, and the
//!   index file writer.
//!
//! - **[`engine`]: The Logic Core.** Run configuration, atom selection, the
//!   mean-threshold reduction and both leaflet classifiers (per atom and per
//!   residue).
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into
//!   a complete leaflet split of an already parsed atom list.

pub mod core;
pub mod engine;
pub mod workflows;
