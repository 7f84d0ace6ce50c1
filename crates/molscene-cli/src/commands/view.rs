use crate::cli::ViewArgs;
use crate::error::{CliError, Result};
use molscene::core::io::{traits::SceneInput, view::ViewFile};
use molscene::engine::tasks::camera::{self, CameraTransform};
use tracing::info;

/// Formats the matrix as four rows of four values.
pub fn format_matrix(transform: &CameraTransform) -> String {
    transform
        .to_array()
        .chunks(4)
        .map(|row| {
            row.iter()
                .map(|v| format!("{:>14.6}", v))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(args: ViewArgs) -> Result<()> {
    info!("Loading camera view from {:?}", args.input);
    let camera = ViewFile::read_from_path(&args.input).map_err(|e| CliError::parsing(&args.input, e))?;
    let transform = camera::convert(&camera);

    println!("{}", format_matrix(&transform));
    if args.validation {
        println!();
        println!("{}", transform.validation_script);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use molscene::core::models::camera::CameraVector;

    #[test]
    fn matrix_prints_as_four_rows() {
        let mut values = vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        values.extend([0.0, 0.0, -50.0, 1.0, 2.0, 3.0, 40.0, 60.0, -20.0]);
        let transform = camera::convert(&CameraVector::new(values).unwrap());

        let text = format_matrix(&transform);
        let rows: Vec<_> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.split_whitespace().count() == 4));
    }

    #[test]
    fn truncated_view_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.txt");
        std::fs::write(&path, "set_view ( 1.0, 2.0 )").unwrap();
        let result = run(ViewArgs {
            input: path,
            validation: false,
        });
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
