use splitleafs::core::io::format::InputFormat;
use splitleafs::core::models::atom::Axis;

pub struct DefaultsConfig {
    pub axis: Axis,
    pub atom: String,
    pub format: InputFormat,
    pub keep_residue: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Z,
            atom: "P1".to_string(),
            format: InputFormat::Gro,
            keep_residue: false,
        }
    }
}
