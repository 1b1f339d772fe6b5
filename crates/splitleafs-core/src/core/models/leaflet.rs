/// One of the two layers of a lipid bilayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaflet {
    /// Atoms at or above the reference plane.
    Upper,
    /// Atoms strictly below the reference plane.
    Lower,
}

impl Leaflet {
    /// Both leaflets, in the order they are written to an index file.
    pub const ALL: [Leaflet; 2] = [Leaflet::Upper, Leaflet::Lower];

    /// Assigns a coordinate to a leaflet. Values equal to the threshold go to
    /// the upper leaflet.
    #[inline]
    pub fn from_coordinate(value: f64, threshold: f64) -> Self {
        if value >= threshold {
            Leaflet::Upper
        } else {
            Leaflet::Lower
        }
    }

    /// The index group name of the leaflet.
    pub fn group_name(self) -> &'static str {
        match self {
            Leaflet::Upper => "upper_leaflet",
            Leaflet::Lower => "lower_leaflet",
        }
    }
}

/// The atom ids of both leaflets, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafletGroups {
    upper: Vec<usize>,
    lower: Vec<usize>,
}

impl LeafletGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, leaflet: Leaflet, atomid: usize) {
        self.group_mut(leaflet).push(atomid);
    }

    pub fn extend<I>(&mut self, leaflet: Leaflet, atomids: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.group_mut(leaflet).extend(atomids);
    }

    pub fn get(&self, leaflet: Leaflet) -> &[usize] {
        match leaflet {
            Leaflet::Upper => &self.upper,
            Leaflet::Lower => &self.lower,
        }
    }

    /// Iterates over both groups, upper leaflet first.
    pub fn iter(&self) -> impl Iterator<Item = (Leaflet, &[usize])> {
        Leaflet::ALL.into_iter().map(|leaflet| (leaflet, self.get(leaflet)))
    }

    /// Total number of ids over both groups.
    pub fn len(&self) -> usize {
        self.upper.len() + self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn group_mut(&mut self, leaflet: Leaflet) -> &mut Vec<usize> {
        match leaflet {
            Leaflet::Upper => &mut self.upper,
            Leaflet::Lower => &mut self.lower,
        }
    }
}
