use nalgebra::Point3;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The Cartesian axis used to tell the two leaflets apart.
///
/// The axis is expected to be the bilayer normal: atoms are compared to the
/// reference plane along this direction only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Index of the axis into a coordinate triple.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid axis '{0}' (expected x, y or z)")]
pub struct ParseAxisError(pub String);

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(ParseAxisError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Axis {
    type Error = ParseAxisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One atom line of a coordinate file.
///
/// Records are created by the parser and never modified afterwards; every
/// downstream stage only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The residue number; consecutive atoms sharing it form one residue.
    pub resid: isize,
    /// The residue name (e.g., "POPC").
    pub resname: String,
    /// The atom name (e.g., "P1", "PO4").
    pub atom_name: String,
    /// The atom serial number written to the index file.
    pub atomid: usize,
    /// The atom coordinates, in the units of the input file.
    pub position: Point3<f64>,
}

impl AtomRecord {
    pub fn new(
        resid: isize,
        resname: &str,
        atom_name: &str,
        atomid: usize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            resid,
            resname: resname.to_string(),
            atom_name: atom_name.to_string(),
            atomid,
            position,
        }
    }

    /// Returns the coordinate of the atom along `axis`.
    #[inline]
    pub fn coordinate(&self, axis: Axis) -> f64 {
        self.position[axis.index()]
    }
}
