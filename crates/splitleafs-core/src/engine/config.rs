use crate::core::models::atom::Axis;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// What ends up in the leaflet groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Only the reference atoms themselves.
    #[default]
    Atom,
    /// Every atom of each residue that owns a reference atom.
    Residue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub axis: Axis,
    pub atom_name: String,
    pub mode: SplitMode,
}

#[derive(Default)]
pub struct SplitConfigBuilder {
    axis: Option<Axis>,
    atom_name: Option<String>,
    mode: Option<SplitMode>,
}

impl SplitConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }
    pub fn atom_name(mut self, name: impl Into<String>) -> Self {
        self.atom_name = Some(name.into());
        self
    }
    pub fn mode(mut self, mode: SplitMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn build(self) -> Result<SplitConfig, ConfigError> {
        let atom_name = self
            .atom_name
            .ok_or(ConfigError::MissingParameter("atom_name"))?;
        // Parsed names are trimmed, so these could never match anything.
        if atom_name.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "atom_name",
                reason: "reference atom name cannot be empty".to_string(),
            });
        }
        if atom_name.trim() != atom_name {
            return Err(ConfigError::InvalidParameter {
                parameter: "atom_name",
                reason: format!("'{}' has leading or trailing whitespace", atom_name),
            });
        }

        Ok(SplitConfig {
            axis: self.axis.ok_or(ConfigError::MissingParameter("axis"))?,
            atom_name,
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
        })
    }
}
