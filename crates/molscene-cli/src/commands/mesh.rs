use crate::cli::MeshArgs;
use crate::error::Result;
use crate::utils::output;
use molscene::engine::error::EngineError;
use molscene::engine::tasks::mesh::{self, CentroidMode, MeshOptions};
use tracing::info;

pub fn run(args: MeshArgs) -> Result<()> {
    let centroid = args
        .centroid
        .parse::<CentroidMode>()
        .map_err(EngineError::from)?;
    let options = MeshOptions {
        scale: args.scale,
        centroid,
        origin: args.origin,
    };

    info!("Reading mesh from {:?}", args.input);
    let text = std::fs::read_to_string(&args.input)?;
    let objects = mesh::run(&text, &options).map_err(EngineError::from)?;

    output::write_json(args.output.as_deref(), &objects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use molscene::engine::error::InputError;
    use std::fs;

    fn args(input: std::path::PathBuf, output: std::path::PathBuf, centroid: &str) -> MeshArgs {
        MeshArgs {
            input,
            scale: None,
            centroid: centroid.to_string(),
            origin: None,
            output: Some(output),
        }
    }

    #[test]
    fn triangle_mesh_is_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tri.obj");
        let output = dir.path().join("tri.json");
        fs::write(&input, "o tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        run(args(input, output.clone(), "unaltered")).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "tri");
        assert_eq!(value[0]["triangles"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn unknown_centroid_mode_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tri.obj");
        fs::write(&input, "").unwrap();
        let result = run(args(input, dir.path().join("out.json"), "middle"));
        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::Input(
                InputError::InvalidCentroidMode(_)
            )))
        ));
    }
}
