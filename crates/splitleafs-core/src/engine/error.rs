use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("No matching atoms for reference atom name '{atom_name}'")]
    EmptySelection { atom_name: String },
}
