use crate::core::models::camera::CameraVector;
use crate::engine::context::CompileContext;
use crate::engine::error::{EngineError, InputError};
use crate::engine::progress::Progress;
use nalgebra::{Matrix3, Matrix4, Vector3};
use std::fmt::Write;
use tracing::{debug, info, instrument};

/// Half-length of the world axis arrows drawn by the validation script.
const AXIS_EXTENT: i32 = 50;

const SCALE_EPSILON: f64 = 1e-12;

/// Sign mask turning the engine's camera rotation into the renderer's handedness.
///
/// Columns 0 and 2 are negated. The mask is its own inverse.
fn handedness_mask() -> Matrix3<f64> {
    Matrix3::new(
        -1.0, 1.0, -1.0, //
        -1.0, 1.0, -1.0, //
        -1.0, 1.0, -1.0,
    )
}

/// Renderer camera derived from one engine camera vector.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransform {
    /// Row-major 4x4 orientation matrix.
    ///
    /// The top-left block is the adjusted rotation times `scale`, the last column
    /// is `[0, 0, 0, 1]` and the bottom row holds the negated position. A
    /// column-major consumer reading [`CameraTransform::to_array`] therefore sees
    /// the translation in its last column.
    pub matrix: Matrix4<f64>,
    pub rotation: Matrix3<f64>,
    pub adjusted_rotation: Matrix3<f64>,
    /// Origin of rotation in world coordinates.
    pub position: Vector3<f64>,
    /// Where the camera itself sits in world coordinates.
    pub teleposition: Vector3<f64>,
    pub scale: f64,
    pub slab_near: f64,
    pub slab_far: f64,
    /// Engine commands drawing the world axes and the camera offset, then restoring
    /// the original view.
    pub validation_script: String,
}

impl CameraTransform {
    /// The 16 matrix entries, row by row.
    pub fn to_array(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (i, value) in out.iter_mut().enumerate() {
            *value = self.matrix[(i / 4, i % 4)];
        }
        out
    }
}

/// Rotation, position and scale read back from a [`CameraTransform::matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveredOrientation {
    pub rotation: Matrix3<f64>,
    pub position: Vector3<f64>,
    pub scale: f64,
}

pub fn convert(camera: &CameraVector) -> CameraTransform {
    let rotation = camera.rotation();
    let depth = camera.depth();
    let position = camera.position();
    let (front, rear) = camera.clip();

    let scale = depth.z.abs();
    let teleposition = rotation * (-depth) + position;
    let adjusted_rotation = rotation.component_mul(&handedness_mask());

    let mut matrix = Matrix4::identity();
    matrix
        .fixed_view_mut::<3, 3>(0, 0)
        .copy_from(&(adjusted_rotation * scale));
    for axis in 0..3 {
        matrix[(3, axis)] = -position[axis];
    }

    CameraTransform {
        matrix,
        rotation,
        adjusted_rotation,
        position,
        teleposition,
        scale,
        slab_near: depth.z + front,
        slab_far: depth.z + rear,
        validation_script: validation_script(camera, &teleposition, &position),
    }
}

/// Inverts [`convert`] up to the information the matrix keeps.
///
/// # Errors
///
/// Returns [`InputError::DegenerateCamera`] when the rotation block has zero scale.
pub fn recover_orientation(matrix: &Matrix4<f64>) -> Result<RecoveredOrientation, InputError> {
    let block: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    let scale = block.column(0).norm();
    if scale < SCALE_EPSILON {
        return Err(InputError::DegenerateCamera);
    }
    let rotation = (block / scale).component_mul(&handedness_mask());
    let position = Vector3::new(-matrix[(3, 0)], -matrix[(3, 1)], -matrix[(3, 2)]);
    Ok(RecoveredOrientation {
        rotation,
        position,
        scale,
    })
}

fn format_point(v: &Vector3<f64>) -> String {
    format!("[{}, {}, {}]", v.x, v.y, v.z)
}

fn validation_script(
    camera: &CameraVector,
    teleposition: &Vector3<f64>,
    position: &Vector3<f64>,
) -> String {
    let mut script = String::from("axes\n");
    for (axis, color) in ["tv_red", "tv_green", "tv_blue"].iter().enumerate() {
        let mut from = [0; 3];
        let mut to = [0; 3];
        from[axis] = -AXIS_EXTENT;
        to[axis] = AXIS_EXTENT;
        let _ = writeln!(
            script,
            "cgo_arrow [{},{},{}], [{},{},{}], gap=0,color={}",
            from[0], from[1], from[2], to[0], to[1], to[2], color
        );
    }
    let _ = writeln!(
        script,
        "cgo_arrow {}, {}, gap=0",
        format_point(teleposition),
        format_point(position)
    );

    // Fixed-point only: the engine misreads exponents in set_view.
    let rows: Vec<String> = camera
        .as_slice()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|v| format!("{:.6}", v))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    let _ = write!(script, "set_view (\\\n{})", rows.join(",\\\n"));
    script
}

#[instrument(skip_all, name = "camera_task")]
pub fn run(values: &[f64], context: &CompileContext) -> Result<CameraTransform, EngineError> {
    context
        .reporter
        .report(Progress::Message("Converting camera...".to_string()));

    let camera = CameraVector::try_from(values)?;
    let transform = convert(&camera);

    debug!(
        scale = transform.scale,
        slab_near = transform.slab_near,
        slab_far = transform.slab_far,
        "Camera converted."
    );
    info!(values = camera.len(), "Camera transform ready.");
    Ok(transform)
}
