use crate::cli::{AtomFormat, TranspileArgs};
use crate::config::PartialTranspileConfig;
use crate::error::{CliError, Result};
use crate::utils::output;
use crate::utils::progress::CliProgressHandler;
use molscene::{
    core::io::{iterate::IterateFile, traits::SceneInput, view::ViewFile},
    core::models::atom::AtomRecord,
    engine::progress::ProgressReporter,
    workflows,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

fn load_atoms(path: &Path, format: AtomFormat) -> Result<Vec<AtomRecord>> {
    info!("Loading {:?} atom dump from {:?}", format, path);
    match format {
        AtomFormat::Iterate => {
            IterateFile::read_from_path(path).map_err(|e| CliError::parsing(path, e))
        }
        AtomFormat::Json => {
            let reader = BufReader::new(File::open(path)?);
            serde_json::from_reader(reader).map_err(|e| CliError::parsing(path, e))
        }
    }
}

pub fn run(args: TranspileArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialTranspileConfig::from_file(path)?,
        None => PartialTranspileConfig::default(),
    };
    let base_dir = args.config.as_deref().and_then(Path::parent);
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args, base_dir)?;

    let format = args.format.unwrap_or_else(|| AtomFormat::infer(&args.atoms));
    let atoms = load_atoms(&args.atoms, format)?;
    if atoms.is_empty() {
        warn!("Atom dump {:?} contains no atoms.", args.atoms);
    }

    let camera = match &args.view {
        Some(path) => {
            info!("Loading camera view from {:?}", path);
            Some(ViewFile::read_from_path(path).map_err(|e| CliError::parsing(path, e))?)
        }
        None => None,
    };

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the scene compilation workflow...");
    let scene = workflows::transpile::run(
        &atoms,
        camera.as_ref().map(|c| c.as_slice()),
        &config,
        &reporter,
    )?;

    info!(
        representations = scene.representations.len(),
        serial_colors = scene.colors.serial.len(),
        structure_records = scene.structure_records.len(),
        "Scene compiled."
    );
    output::write_json(args.output.as_deref(), &scene)?;
    if let Some(path) = &args.output {
        if !quiet {
            eprintln!("✓ Scene written to: {}", path.display());
        }
    }
    Ok(())
}
