use crate::core::models::atom::{AtomRecord, Axis};

/// Lazily keeps the atoms named exactly `atom_name`, in input order.
pub fn select_atom_name<'a, I>(
    atoms: I,
    atom_name: &'a str,
) -> impl Iterator<Item = &'a AtomRecord>
where
    I: IntoIterator<Item = &'a AtomRecord>,
{
    atoms.into_iter().filter(move |atom| atom.atom_name == atom_name)
}

/// Lazily projects atoms onto `axis`.
pub fn axis_coordinates<'a, I>(atoms: I, axis: Axis) -> impl Iterator<Item = f64>
where
    I: IntoIterator<Item = &'a AtomRecord>,
{
    atoms.into_iter().map(move |atom| atom.coordinate(axis))
}

/// Arithmetic mean of a sequence, or `None` when it is empty.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}
