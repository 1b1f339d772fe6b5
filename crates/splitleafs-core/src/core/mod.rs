//! # Core Module
//!
//! Stateless building blocks of the leaflet split.
//!
//! - **Atom and group models** ([`models`]) - Parsed atom records, the
//!   discriminating axis and the two leaflet groups.
//! - **File I/O** ([`io`]) - Fixed-column GRO/PDB parsing and index writing.

pub mod io;
pub mod models;
