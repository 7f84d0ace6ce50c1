use super::traits::SceneInput;
use crate::core::models::camera::{CameraVector, CameraVectorError};
use std::io::{self, BufRead, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid camera vector: {0}")]
    Camera(#[from] CameraVectorError),
}

/// Extracts the camera values from the text printed by the engine's `get_view`.
///
/// The dump wraps the numbers in `set_view (\ ... )` with line continuations.
/// Backslashes and commas are stripped from every whitespace-separated token;
/// a token counts as a number only if it has a `.` after its first character,
/// which skips the command words, the brackets and bare integers.
pub fn parse_camera_text(text: &str) -> Vec<f64> {
    text.split_whitespace()
        .map(|token| token.replace(['\\', ','], ""))
        .filter(|token| token.find('.').is_some_and(|pos| pos > 0))
        .filter_map(|token| token.parse::<f64>().ok())
        .collect()
}

/// Reader for a `get_view` dump, producing a validated [`CameraVector`].
pub struct ViewFile;

impl SceneInput for ViewFile {
    type Output = CameraVector;
    type Error = ViewError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(CameraVector::new(parse_camera_text(&text))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GET_VIEW: &str = r"PyMOL>get_view
### cut below here and paste into script ###
set_view (\
     0.713286161,   -0.240867347,   -0.658183515,\
    -0.586845875,    0.285716951,   -0.757614613,\
     0.370531619,    0.927575946,    0.047745105,\
     0.000000000,    0.000000000, -134.460998535,\
    34.146690369,   26.952993393,   30.669181824,\
   106.009231567,  162.912765503,  -20.000000000 )
### cut above here and paste into script ###
";

    #[test]
    fn parse_camera_text_reads_all_eighteen_values() {
        let values = parse_camera_text(GET_VIEW);
        assert_eq!(values.len(), 18);
        assert!((values[0] - 0.713286161).abs() < 1e-9);
        assert!((values[11] + 134.460998535).abs() < 1e-9);
        assert!((values[17] + 20.0).abs() < 1e-9);
    }

    #[test]
    fn parse_camera_text_skips_words_and_integers() {
        assert_eq!(parse_camera_text("set_view ( 1, 2.5, .5, -3.0 )"), vec![2.5, -3.0]);
    }

    #[test]
    fn view_file_returns_camera_vector() {
        let camera = ViewFile::read_from_str(GET_VIEW).unwrap();
        assert_eq!(camera.len(), 18);
        assert!((camera.position()[0] - 34.146690369).abs() < 1e-9);
    }

    #[test]
    fn view_file_rejects_truncated_dump() {
        let result = ViewFile::read_from_str("set_view (\\\n 1.0, 2.0, 3.0 )");
        assert!(matches!(
            result,
            Err(ViewError::Camera(CameraVectorError::InvalidLength { found: 3 }))
        ));
    }
}
