//! Provides input/output functionality for the supported file formats.
//!
//! Coordinates are read from fixed-column GRO or PDB text, where each format
//! is described by a static column table. Leaflet groups are written as a
//! GROMACS index (`.ndx`) file.

pub mod format;
pub mod ndx;
pub mod records;
