use super::config::ConfigError;
use crate::core::models::camera::CameraVectorError;
use thiserror::Error;

/// Malformed scene input. Always fatal to the compilation call that saw it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Camera vector must hold 18 or 21 values, found {found}")]
    CameraVectorLength { found: usize },

    #[error("Camera vector value at index {index} is not finite")]
    NonFiniteCameraValue { index: usize },

    #[error("Camera matrix has zero scale and cannot be inverted")]
    DegenerateCamera,

    #[error("Got {flags} channel flags for {atoms} atoms")]
    FlagCountMismatch { atoms: usize, flags: usize },

    #[error("Atom {atom_id} has no chain identifier")]
    MissingChain { atom_id: i64 },

    #[error("Residue '{residue}' of chain '{chain}' is not a plain integer")]
    NonNumericResidue { chain: String, residue: String },

    #[error("Atom {atom_id} uses color {color_id}, which is not in the palette")]
    UnknownColor { atom_id: i64, color_id: i32 },

    #[error("Invalid centroid mode '{0}', expected unaltered, origin or custom")]
    InvalidCentroidMode(String),

    #[error("Centroid mode 'custom' requires an origin")]
    MissingOrigin,

    #[error("Malformed mesh on line {line}: {reason}")]
    MalformedMesh { line: usize, reason: String },
}

impl From<CameraVectorError> for InputError {
    fn from(err: CameraVectorError) -> Self {
        match err {
            CameraVectorError::InvalidLength { found } => InputError::CameraVectorLength { found },
            CameraVectorError::NonFinite { index } => InputError::NonFiniteCameraValue { index },
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
}

impl From<CameraVectorError> for EngineError {
    fn from(err: CameraVectorError) -> Self {
        EngineError::Input(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_vector_errors_map_to_input_errors() {
        let err: EngineError = CameraVectorError::InvalidLength { found: 5 }.into();
        assert_eq!(
            err,
            EngineError::Input(InputError::CameraVectorLength { found: 5 })
        );
        let err: InputError = CameraVectorError::NonFinite { index: 2 }.into();
        assert_eq!(err, InputError::NonFiniteCameraValue { index: 2 });
    }

    #[test]
    fn messages_name_the_offending_atom() {
        let err = EngineError::from(InputError::UnknownColor {
            atom_id: 42,
            color_id: 9999,
        });
        assert_eq!(
            err.to_string(),
            "Invalid input: Atom 42 uses color 9999, which is not in the palette"
        );
    }
}
