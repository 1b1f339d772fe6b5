use crate::core::io::format::{Columns, FormatSpec, InputFormat};
use crate::core::models::atom::AtomRecord;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: RecordParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordParseErrorKind {
    #[error("Invalid integer for '{field}' in columns {columns} (value: '{value}')")]
    InvalidInt {
        field: &'static str,
        columns: Columns,
        value: String,
    },
    #[error("Invalid float for '{field}' in columns {columns} (value: '{value}')")]
    InvalidFloat {
        field: &'static str,
        columns: Columns,
        value: String,
    },
    #[error("Non-ASCII character '{character}' at column {column}; records must be ASCII")]
    NonAscii { column: usize, character: char },
}

fn parse_int<T: std::str::FromStr>(
    line: &str,
    field: &'static str,
    columns: Columns,
) -> Result<T, RecordParseErrorKind> {
    let value = columns.extract(line);
    value.parse().map_err(|_| RecordParseErrorKind::InvalidInt {
        field,
        columns,
        value: value.into(),
    })
}

fn parse_float(
    line: &str,
    field: &'static str,
    columns: Columns,
) -> Result<f64, RecordParseErrorKind> {
    let value = columns.extract(line);
    value.parse().map_err(|_| RecordParseErrorKind::InvalidFloat {
        field,
        columns,
        value: value.into(),
    })
}

/// Converts one atom line according to `spec`.
///
/// Columns are byte offsets, so a line holding any non-ASCII character is
/// rejected before a field is sliced out of it.
pub fn parse_record(line: &str, spec: &FormatSpec) -> Result<AtomRecord, RecordParseErrorKind> {
    if let Some((index, character)) = line.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(RecordParseErrorKind::NonAscii {
            column: line[..index].chars().count() + 1,
            character,
        });
    }

    let resid = parse_int(line, "resid", spec.resid)?;
    let atomid = parse_int(line, "atomid", spec.atomid)?;
    let x = parse_float(line, "x", spec.x)?;
    let y = parse_float(line, "y", spec.y)?;
    let z = parse_float(line, "z", spec.z)?;

    Ok(AtomRecord::new(
        resid,
        spec.resname.extract(line),
        spec.atom_name.extract(line),
        atomid,
        Point3::new(x, y, z),
    ))
}

/// Lazily converts numbered lines into atom records.
///
/// Lines rejected by the layout's record tag are skipped without error. The
/// first line that fails to convert yields an error carrying its line number.
pub struct AtomRecords<I> {
    lines: I,
    spec: &'static FormatSpec,
}

impl<I> AtomRecords<I> {
    pub fn new(lines: I, spec: &'static FormatSpec) -> Self {
        Self { lines, spec }
    }
}

impl<I, S> Iterator for AtomRecords<I>
where
    I: Iterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    type Item = Result<AtomRecord, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (line_num, line) in self.lines.by_ref() {
            let line = line.as_ref();
            if !self.spec.accepts(line) {
                continue;
            }
            return Some(
                parse_record(line, self.spec).map_err(|kind| RecordError::Parse {
                    line: line_num,
                    kind,
                }),
            );
        }
        None
    }
}

/// Returns the lines left once `head` leading and `tail` trailing framing
/// lines are removed. Too short an input leaves nothing.
fn strip_framing(lines: &[String], head: usize, tail: usize) -> &[String] {
    if lines.len() <= head + tail {
        return &[];
    }
    &lines[head..lines.len() - tail]
}

/// Reads every atom record of a coordinate file.
///
/// The whole input is read before parsing starts. GRO header and box lines
/// are dropped here; the record parser itself never sees them.
pub fn read_atoms(
    reader: &mut impl BufRead,
    format: InputFormat,
) -> Result<Vec<AtomRecord>, RecordError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    let (head, tail) = format.framing();
    let body = strip_framing(&lines, head, tail);

    let numbered = body
        .iter()
        .enumerate()
        .map(|(i, line)| (head + i + 1, line.as_str()));
    AtomRecords::new(numbered, format.spec()).collect()
}

pub fn read_atoms_from_path<P: AsRef<Path>>(
    path: P,
    format: InputFormat,
) -> Result<Vec<AtomRecord>, RecordError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_atoms(&mut reader, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::format::{GRO_LAYOUT, PDB_LAYOUT};
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn gro_line(resid: isize, resname: &str, name: &str, atomid: usize, xyz: [f64; 3]) -> String {
        format!(
            "{:>5}{:<5}{:>5}{:>5}{:>8.3}{:>8.3}{:>8.3}",
            resid, resname, name, atomid, xyz[0], xyz[1], xyz[2]
        )
    }

    fn pdb_line(atomid: usize, name: &str, resname: &str, resid: isize, xyz: [f64; 3]) -> String {
        format!(
            "ATOM  {:>5} {:<4} {:<3} A{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00",
            atomid, name, resname, resid, xyz[0], xyz[1], xyz[2]
        )
    }

    fn gro_file(atom_lines: &[String]) -> String {
        let mut content = format!("Bilayer\n{:>5}\n", atom_lines.len());
        for line in atom_lines {
            content.push_str(line);
            content.push('\n');
        }
        content.push_str("   5.00000   5.00000  10.00000\n");
        content
    }

    #[test]
    fn parse_record_reads_every_gro_field() {
        let line = gro_line(12, "POPC", "P1", 345, [1.25, -2.5, 3.125]);
        let atom = parse_record(&line, &GRO_LAYOUT).unwrap();

        assert_eq!(atom.resid, 12);
        assert_eq!(atom.resname, "POPC");
        assert_eq!(atom.atom_name, "P1");
        assert_eq!(atom.atomid, 345);
        assert_eq!(atom.position, Point3::new(1.25, -2.5, 3.125));
    }

    #[test]
    fn parse_record_reads_every_pdb_field() {
        let line = pdb_line(77, "P1", "DPC", 9, [10.5, 20.25, 30.0]);
        let atom = parse_record(&line, &PDB_LAYOUT).unwrap();

        assert_eq!(atom.resid, 9);
        assert_eq!(atom.resname, "PC");
        assert_eq!(atom.atom_name, "P1");
        assert_eq!(atom.atomid, 77);
        assert_eq!(atom.position, Point3::new(10.5, 20.25, 30.0));
    }

    #[test]
    fn parse_record_ignores_trailing_gro_velocities() {
        let line = format!(
            "{}{:>8.4}{:>8.4}{:>8.4}",
            gro_line(1, "DPPC", "NC3", 1, [1.0, 2.0, 3.0]),
            0.1,
            0.2,
            0.3
        );
        let atom = parse_record(&line, &GRO_LAYOUT).unwrap();
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn parse_record_reports_invalid_float_field() {
        let line = gro_line(1, "POPC", "P1", 1, [1.0, 2.0, 3.0]).replace("   3.000", "   abcde");
        let err = parse_record(&line, &GRO_LAYOUT).unwrap_err();
        assert_eq!(
            err,
            RecordParseErrorKind::InvalidFloat {
                field: "z",
                columns: Columns::new(36, 44),
                value: "abcde".into(),
            }
        );
    }

    #[test]
    fn parse_record_reports_invalid_integer_field() {
        let line = gro_line(1, "POPC", "P1", 1, [1.0, 2.0, 3.0]).replacen("    1", "   x1", 1);
        let err = parse_record(&line, &GRO_LAYOUT).unwrap_err();
        assert!(matches!(
            err,
            RecordParseErrorKind::InvalidInt { field: "resid", ref value, .. } if value == "x1"
        ));
    }

    #[test]
    fn parse_record_rejects_truncated_line() {
        let line = gro_line(1, "POPC", "P1", 1, [1.0, 2.0, 3.0]);
        let err = parse_record(&line[..30], &GRO_LAYOUT).unwrap_err();
        assert!(matches!(
            err,
            RecordParseErrorKind::InvalidFloat { field: "y", .. }
        ));
    }

    #[test]
    fn parse_record_rejects_non_ascii_line() {
        let line = gro_line(1, "POPé", "P1", 1, [1.0, 2.0, 3.0]);
        let err = parse_record(&line, &GRO_LAYOUT).unwrap_err();
        assert_eq!(
            err,
            RecordParseErrorKind::NonAscii {
                column: 9,
                character: 'é',
            }
        );
    }

    #[test]
    fn read_atoms_reports_non_ascii_line_number() {
        let content = gro_file(&[
            gro_line(1, "POPC", "P1", 1, [0.0, 0.0, 1.0]),
            gro_line(2, "POPé", "P1", 2, [0.0, 0.0, 2.0]),
        ]);
        let err = read_atoms(&mut Cursor::new(content), InputFormat::Gro).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Parse {
                line: 4,
                kind: RecordParseErrorKind::NonAscii { .. }
            }
        ));
        assert!(err.to_string().contains("Non-ASCII character 'é' at column 9"));
    }

    #[test]
    fn read_atoms_strips_gro_header_and_box_lines() {
        let content = gro_file(&[
            gro_line(1, "POPC", "NC3", 1, [0.0, 0.0, 4.0]),
            gro_line(1, "POPC", "P1", 2, [0.0, 0.0, 3.5]),
        ]);
        let atoms = read_atoms(&mut Cursor::new(content), InputFormat::Gro).unwrap();

        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0].atomid, 1);
        assert_eq!(atoms[1].atom_name, "P1");
    }

    #[test]
    fn read_atoms_returns_nothing_for_gro_without_atom_lines() {
        let content = "Title\n    0\n   1.0   1.0   1.0\n";
        let atoms = read_atoms(&mut Cursor::new(content), InputFormat::Gro).unwrap();
        assert!(atoms.is_empty());

        let atoms = read_atoms(&mut Cursor::new("Title\n"), InputFormat::Gro).unwrap();
        assert!(atoms.is_empty());
    }

    #[test]
    fn read_atoms_reports_physical_line_number_for_gro() {
        let content = gro_file(&[
            gro_line(1, "POPC", "P1", 1, [0.0, 0.0, 1.0]),
            "    1POPC   P1    2   bad".to_string(),
        ]);
        let err = read_atoms(&mut Cursor::new(content), InputFormat::Gro).unwrap_err();
        assert!(matches!(err, RecordError::Parse { line: 4, .. }));
        assert!(err.to_string().starts_with("Parse error on line 4:"));
    }

    #[test]
    fn read_atoms_keeps_only_pdb_atom_records() {
        let content = [
            "TITLE     bilayer".to_string(),
            "CRYST1   50.000   50.000  100.000  90.00  90.00  90.00 P 1           1".to_string(),
            pdb_line(1, "NC3", "PC", 1, [0.0, 0.0, 40.0]),
            "HETATM    2  O   HOH A   2       0.000   0.000   0.000".to_string(),
            "garbage line without a tag".to_string(),
            pdb_line(3, "P1", "PC", 1, [0.0, 0.0, 35.0]),
            "TER".to_string(),
            "END".to_string(),
        ]
        .join("\n");
        let atoms = read_atoms(&mut Cursor::new(content), InputFormat::Pdb).unwrap();

        let ids: Vec<usize> = atoms.iter().map(|a| a.atomid).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn read_atoms_reports_pdb_line_number() {
        let content = [
            "REMARK first".to_string(),
            pdb_line(1, "P1", "PC", 1, [0.0, 0.0, 35.0]).replace("  35.000", "  ??????"),
        ]
        .join("\n");
        let err = read_atoms(&mut Cursor::new(content), InputFormat::Pdb).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Parse {
                line: 2,
                kind: RecordParseErrorKind::InvalidFloat { field: "z", .. }
            }
        ));
    }

    #[test]
    fn atom_records_are_lazy_and_stop_at_first_error() {
        let lines = vec![
            (1usize, gro_line(1, "POPC", "P1", 1, [0.0, 0.0, 1.0])),
            (2, "not an atom".to_string()),
            (3, gro_line(2, "POPC", "P1", 2, [0.0, 0.0, 2.0])),
        ];
        let mut records = AtomRecords::new(lines.into_iter(), &GRO_LAYOUT);

        assert!(records.next().unwrap().is_ok());
        assert!(matches!(
            records.next().unwrap(),
            Err(RecordError::Parse { line: 2, .. })
        ));
        assert!(records.next().unwrap().is_ok());
        assert!(records.next().is_none());
    }

    #[test]
    fn read_atoms_from_path_reads_file_on_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            gro_file(&[gro_line(3, "POPE", "P1", 7, [0.5, 0.5, 2.5])])
        )
        .unwrap();

        let atoms = read_atoms_from_path(file.path(), InputFormat::Gro).unwrap();
        assert_eq!(atoms.len(), 1);
        assert_eq!(atoms[0].resid, 3);
        assert_eq!(atoms[0].resname, "POPE");
    }

    #[test]
    fn read_atoms_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_atoms_from_path(dir.path().join("missing.gro"), InputFormat::Gro);
        assert!(matches!(result, Err(RecordError::Io(_))));
    }
}
