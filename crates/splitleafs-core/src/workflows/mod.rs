//! # Workflows Module
//!
//! High-level entry points that run a complete leaflet split.
//!
//! - **Split Workflow** ([`split`]) - Computes the reference plane from the
//!   configured reference atoms, then classifies atoms or whole residues
//!   into the upper and lower leaflets.

pub mod split;
