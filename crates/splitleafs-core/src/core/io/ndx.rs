use crate::core::models::leaflet::LeafletGroups;
use std::io::{self, Write};

/// Maximum width of an atom id line in the index file.
pub const LINE_WIDTH: usize = 80;

/// Greedily packs space-separated atom ids into lines of at most `width`
/// characters. An empty id list yields no lines.
pub fn wrap_ids(atomids: &[usize], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for atomid in atomids {
        let word = atomid.to_string();
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Writes both leaflet groups as a GROMACS index file, upper leaflet first.
///
/// Each group is a `[ name ]` header followed by its wrapped id lines. An
/// empty group still gets a single empty line under its header.
pub fn write_index(groups: &LeafletGroups, writer: &mut impl Write) -> io::Result<()> {
    for (leaflet, atomids) in groups.iter() {
        writeln!(writer, "[ {} ]", leaflet.group_name())?;
        writeln!(writer, "{}", wrap_ids(atomids, LINE_WIDTH).join("\n"))?;
    }
    Ok(())
}

/// Writes the `<group>: <n> atoms` summary lines, upper leaflet first.
pub fn write_summary(groups: &LeafletGroups, writer: &mut impl Write) -> io::Result<()> {
    for (leaflet, atomids) in groups.iter() {
        writeln!(writer, "{}: {} atoms", leaflet.group_name(), atomids.len())?;
    }
    Ok(())
}
