use nalgebra::{Matrix3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CameraVectorError {
    #[error("Camera vector must hold 18 or 21 values, found {found}")]
    InvalidLength { found: usize },
    #[error("Camera vector value at index {index} is not finite")]
    NonFinite { index: usize },
}

/// Raw camera parameters in the engine's fixed field order.
///
/// | indices | meaning |
/// |---------|---------|
/// | 0..9    | 3x3 rotation, row-major |
/// | 9..12   | depth offset (camera position relative to the origin of rotation) |
/// | 12..15  | world position (origin of rotation) |
/// | 15..    | slab / clip offsets (front, rear, then engine-specific trailing fields) |
#[derive(Debug, Clone, PartialEq)]
pub struct CameraVector {
    values: Vec<f64>,
}

impl CameraVector {
    pub const BASE_LEN: usize = 18;
    pub const EXTENDED_LEN: usize = 21;

    pub fn new(values: Vec<f64>) -> Result<Self, CameraVectorError> {
        if values.len() != Self::BASE_LEN && values.len() != Self::EXTENDED_LEN {
            return Err(CameraVectorError::InvalidLength {
                found: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(CameraVectorError::NonFinite { index });
        }
        Ok(Self { values })
    }

    pub fn rotation(&self) -> Matrix3<f64> {
        Matrix3::from_row_slice(&self.values[0..9])
    }

    pub fn depth(&self) -> Vector3<f64> {
        Vector3::from_column_slice(&self.values[9..12])
    }

    pub fn position(&self) -> Vector3<f64> {
        Vector3::from_column_slice(&self.values[12..15])
    }

    /// Front and rear clip offsets.
    pub fn clip(&self) -> (f64, f64) {
        (self.values[15], self.values[16])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<&[f64]> for CameraVector {
    type Error = CameraVectorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}
