use crate::core::models::atom::AtomRecord;
use crate::core::models::color_map::ColorMap;
use crate::core::models::representation::RepresentationSet;
use crate::core::models::structure::StructureRecord;
use crate::engine::config::{RenderSettings, StickStyle, TranspileConfig};
use crate::engine::context::CompileContext;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::tasks::camera::CameraTransform;
use crate::engine::tasks::describe::StructureDescription;
use crate::engine::tasks::representation::DecodedRepresentations;
use crate::engine::tasks::{self, secondary_structure};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Renderer camera in plain arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraSummary {
    /// Orientation matrix entries, row by row.
    pub matrix: [f64; 16],
    pub position: [f64; 3],
    pub teleposition: [f64; 3],
    pub scale: f64,
    pub slab_near: f64,
    pub slab_far: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_script: Option<String>,
}

impl CameraSummary {
    fn from_transform(transform: CameraTransform, keep_script: bool) -> Self {
        Self {
            matrix: transform.to_array(),
            position: transform.position.into(),
            teleposition: transform.teleposition.into(),
            scale: transform.scale,
            slab_near: transform.slab_near,
            slab_far: transform.slab_far,
            validation_script: keep_script.then_some(transform.validation_script),
        }
    }
}

/// Everything a renderer needs to rebuild the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    pub camera: Option<CameraSummary>,
    pub representations: RepresentationSet,
    pub labels: BTreeMap<String, String>,
    pub colors: ColorMap,
    pub structure_records: Vec<StructureRecord>,
    pub description: StructureDescription,
    pub stick_style: StickStyle,
    pub render: RenderSettings,
}

impl SceneDescription {
    /// The HELIX and SHEET records as a PDB header block, one line per record.
    pub fn pdb_header(&self) -> String {
        secondary_structure::to_pdb_lines(&self.structure_records).join("\n")
    }
}

type Layers = (
    Result<DecodedRepresentations, EngineError>,
    Result<ColorMap, EngineError>,
    Vec<StructureRecord>,
);

fn decode_representations(
    atoms: &[AtomRecord],
    context: &CompileContext,
) -> Result<DecodedRepresentations, EngineError> {
    context.reporter.phase("Representations", || {
        tasks::representation::run(atoms, context)
    })
}

fn reduce_colors(atoms: &[AtomRecord], context: &CompileContext) -> Result<ColorMap, EngineError> {
    context
        .reporter
        .phase("Colors", || tasks::color::run(atoms, context))
}

fn encode_structure(atoms: &[AtomRecord], context: &CompileContext) -> Vec<StructureRecord> {
    context.reporter.phase("Secondary structure", || {
        tasks::secondary_structure::run(atoms, context)
    })
}

#[cfg(feature = "parallel")]
fn compile_layers(atoms: &[AtomRecord], context: &CompileContext) -> Layers {
    let (representations, (colors, structure)) = rayon::join(
        || decode_representations(atoms, context),
        || {
            rayon::join(
                || reduce_colors(atoms, context),
                || encode_structure(atoms, context),
            )
        },
    );
    (representations, colors, structure)
}

#[cfg(not(feature = "parallel"))]
fn compile_layers(atoms: &[AtomRecord], context: &CompileContext) -> Layers {
    (
        decode_representations(atoms, context),
        reduce_colors(atoms, context),
        encode_structure(atoms, context),
    )
}

/// Compiles atoms and an optional camera vector into a [`SceneDescription`].
///
/// # Errors
///
/// Returns the first [`EngineError`] raised by any task; no partial scene is produced.
#[instrument(skip_all, name = "transpile_workflow")]
pub fn run(
    atoms: &[AtomRecord],
    camera: Option<&[f64]>,
    config: &TranspileConfig,
    reporter: &ProgressReporter,
) -> Result<SceneDescription, EngineError> {
    info!(
        atoms = atoms.len(),
        camera = camera.is_some(),
        "Starting scene compilation."
    );
    let context = CompileContext::new(config, reporter);

    let camera = match camera {
        Some(values) => {
            let transform = reporter.phase("Camera", || tasks::camera::run(values, &context))?;
            Some(CameraSummary::from_transform(transform, config.validation))
        }
        None => {
            debug!("No camera vector supplied, skipping camera conversion.");
            None
        }
    };

    let (representations, colors, structure_records) = compile_layers(atoms, &context);
    let DecodedRepresentations {
        channels: representations,
        labels,
    } = representations?;
    let colors = colors?;

    let description = reporter.phase("Description", || tasks::describe::run(atoms));

    info!(
        labels = labels.len(),
        structure_records = structure_records.len(),
        "Scene compilation complete."
    );

    Ok(SceneDescription {
        camera,
        representations,
        labels,
        colors,
        structure_records,
        description,
        stick_style: config.stick_style,
        render: config.render.clone(),
    })
}
