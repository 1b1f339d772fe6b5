use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// A half-open `[start, end)` character range of a fixed-column record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub start: usize,
    pub end: usize,
}

impl Columns {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slices the columns out of `line` and trims the result.
    ///
    /// Offsets are bytes; record lines are checked to be ASCII before any
    /// field is extracted.
    ///
    /// A line shorter than the range yields whatever part of the range it
    /// covers, so a truncated line gives an empty or partial field.
    pub fn extract<'a>(&self, line: &'a str) -> &'a str {
        let end = self.end.min(line.len());
        let start = self.start.min(end);
        line.get(start..end).unwrap_or("").trim()
    }
}

impl fmt::Display for Columns {
    // 1-based inclusive, the way file format documentation lists columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start + 1, self.end)
    }
}

/// Column layout of one atom record format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    /// When set, only lines starting with this exact tag are atom records.
    pub record_tag: Option<&'static str>,
    pub resid: Columns,
    pub resname: Columns,
    pub atom_name: Columns,
    pub atomid: Columns,
    pub x: Columns,
    pub y: Columns,
    pub z: Columns,
}

impl FormatSpec {
    /// Whether `line` holds an atom record under this layout.
    pub fn accepts(&self, line: &str) -> bool {
        match self.record_tag {
            Some(tag) => line.get(..tag.len()) == Some(tag),
            None => true,
        }
    }
}

pub static GRO_LAYOUT: FormatSpec = FormatSpec {
    record_tag: None,
    resid: Columns::new(0, 5),
    resname: Columns::new(5, 10),
    atom_name: Columns::new(10, 15),
    atomid: Columns::new(15, 20),
    x: Columns::new(20, 28),
    y: Columns::new(28, 36),
    z: Columns::new(36, 44),
};

pub static PDB_LAYOUT: FormatSpec = FormatSpec {
    record_tag: Some("ATOM  "),
    resid: Columns::new(22, 26),
    resname: Columns::new(18, 20),
    atom_name: Columns::new(12, 16),
    atomid: Columns::new(6, 11),
    x: Columns::new(30, 38),
    y: Columns::new(38, 46),
    z: Columns::new(46, 54),
};

/// The supported coordinate file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum InputFormat {
    /// GROMACS `.gro`: a title line, an atom count line, one line per atom
    /// and a trailing box vector line.
    #[default]
    Gro,
    /// Protein Data Bank `.pdb`: only `ATOM` records are read.
    Pdb,
}

impl InputFormat {
    pub fn spec(self) -> &'static FormatSpec {
        match self {
            InputFormat::Gro => &GRO_LAYOUT,
            InputFormat::Pdb => &PDB_LAYOUT,
        }
    }

    /// Number of framing lines before and after the atom records.
    pub fn framing(self) -> (usize, usize) {
        match self {
            InputFormat::Gro => (2, 1),
            InputFormat::Pdb => (0, 0),
        }
    }

    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension.to_lowercase().as_str() {
            "gro" => Some(InputFormat::Gro),
            "pdb" | "ent" => Some(InputFormat::Pdb),
            _ => None,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Gro => f.write_str("gro"),
            InputFormat::Pdb => f.write_str("pdb"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input format '{0}' (expected gro, pdb, a or b)")]
pub struct ParseFormatError(pub String);

impl FromStr for InputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gro" | "a" => Ok(InputFormat::Gro),
            "pdb" | "b" => Ok(InputFormat::Pdb),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl TryFrom<String> for InputFormat {
    type Error = ParseFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
