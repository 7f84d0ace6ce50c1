use crate::engine::error::InputError;
use nalgebra::Vector3;
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Where the converted mesh is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentroidMode {
    /// Coordinates are only scaled.
    #[default]
    Unaltered,
    /// The mean vertex of each object is moved to the origin.
    Origin,
    /// The mean vertex of each object is moved to a caller-given point, in scaled units.
    Custom,
}

impl FromStr for CentroidMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unaltered" => Ok(CentroidMode::Unaltered),
            "origin" => Ok(CentroidMode::Origin),
            "custom" => Ok(CentroidMode::Custom),
            _ => Err(InputError::InvalidCentroidMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshOptions {
    /// Target size in Å of the largest extent. `None` or `0` keeps the original size and skips centering.
    pub scale: Option<f64>,
    pub centroid: CentroidMode,
    /// Required by [`CentroidMode::Custom`].
    pub origin: Option<[f64; 3]>,
}

impl MeshOptions {
    fn scale_target(&self) -> Option<f64> {
        self.scale.filter(|s| *s != 0.0)
    }
}

/// One named object of the mesh as a flat triangle list (`x, y, z` per vertex, 3 vertices per triangle).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshObject {
    pub name: String,
    pub triangles: Vec<f64>,
}

/// Per-object vertex statistics. The bounds always include the origin.
struct Extent {
    sum: Vector3<f64>,
    count: usize,
    min: Vector3<f64>,
    max: Vector3<f64>,
}

impl Extent {
    fn new() -> Self {
        Self {
            sum: Vector3::zeros(),
            count: 0,
            min: Vector3::zeros(),
            max: Vector3::zeros(),
        }
    }

    fn add(&mut self, v: &Vector3<f64>) {
        self.sum += v;
        self.count += 1;
        self.min = self.min.inf(v);
        self.max = self.max.sup(v);
    }

    fn mean(&self) -> Vector3<f64> {
        self.sum / self.count.max(1) as f64
    }

    fn largest_side(&self) -> f64 {
        (self.max - self.min).abs().max()
    }
}

struct ObjectBuilder {
    name: String,
    triangles: Vec<f64>,
    extent: Extent,
    /// Scale factor and centroid, fixed at the first face of the object.
    transform: Option<(f64, Vector3<f64>)>,
}

impl ObjectBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            triangles: Vec::new(),
            extent: Extent::new(),
            transform: None,
        }
    }

    fn has_content(&self) -> bool {
        !self.name.is_empty() || !self.triangles.is_empty()
    }

    fn finish(self) -> MeshObject {
        MeshObject {
            name: self.name,
            triangles: self.triangles,
        }
    }

    fn transform(
        &mut self,
        options: &MeshOptions,
        line: usize,
    ) -> Result<(f64, Vector3<f64>), InputError> {
        if let Some(transform) = self.transform {
            return Ok(transform);
        }
        let Some(target) = options.scale_target() else {
            return Ok((1.0, Vector3::zeros()));
        };
        let side = self.extent.largest_side();
        if side == 0.0 {
            return Err(InputError::MalformedMesh {
                line,
                reason: "cannot rescale an object with zero extent".to_string(),
            });
        }
        let factor = target / side;
        let centroid = match options.centroid {
            CentroidMode::Unaltered => Vector3::zeros(),
            CentroidMode::Origin => self.extent.mean(),
            CentroidMode::Custom => {
                let origin = options.origin.ok_or(InputError::MissingOrigin)?;
                self.extent.mean() - Vector3::from(origin) / factor
            }
        };
        debug!(object = %self.name, factor, "Mesh transform fixed.");
        self.transform = Some((factor, centroid));
        Ok((factor, centroid))
    }
}

fn truncate_hundredths(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

fn malformed(line: usize, reason: impl Into<String>) -> InputError {
    InputError::MalformedMesh {
        line,
        reason: reason.into(),
    }
}

fn parse_vertex<'a>(
    fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Vector3<f64>, InputError> {
    let coords = fields
        .take(3)
        .map(|f| {
            f.parse::<f64>()
                .map_err(|_| malformed(line, format!("invalid coordinate '{}'", f)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if coords.len() < 3 {
        return Err(malformed(line, "vertex needs three coordinates"));
    }
    Ok(Vector3::new(coords[0], coords[1], coords[2]))
}

/// Resolves a 1-based (or negative, relative) OBJ vertex reference.
fn resolve_index(token: &str, vertex_count: usize, line: usize) -> Result<usize, InputError> {
    let head = token.split('/').next().unwrap_or_default();
    let index: i64 = head
        .parse()
        .map_err(|_| malformed(line, format!("invalid vertex reference '{}'", token)))?;
    let resolved = if index > 0 {
        index - 1
    } else {
        vertex_count as i64 + index
    };
    if index == 0 || resolved < 0 || resolved >= vertex_count as i64 {
        return Err(malformed(line, format!("vertex {} does not exist", index)));
    }
    Ok(resolved as usize)
}

/// Converts Wavefront OBJ text into flat triangle lists, one per `o` object.
///
/// Only `o`, `v` and `f` records are read; colors, normals and texture
/// coordinates are dropped. Vertex references are global across objects.
/// Centering applies only together with a non-zero scale; the extent used for
/// scaling spans the object's vertices and the origin.
///
/// # Errors
///
/// Returns [`InputError::MissingOrigin`] for a scaled [`CentroidMode::Custom`] without an
/// origin and [`InputError::MalformedMesh`] for unparsable records, dangling
/// vertex references and faces with fewer than three vertices.
pub fn convert<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    options: &MeshOptions,
) -> Result<Vec<MeshObject>, InputError> {
    if options.scale_target().is_some()
        && options.centroid == CentroidMode::Custom
        && options.origin.is_none()
    {
        return Err(InputError::MissingOrigin);
    }

    let mut objects = Vec::new();
    let mut vertices: Vec<Vector3<f64>> = Vec::new();
    let mut current = ObjectBuilder::new("");

    for (i, raw) in lines.into_iter().enumerate() {
        let line = i + 1;
        let mut fields = raw.split_whitespace();
        match fields.next() {
            Some("o") => {
                let name = raw.trim().strip_prefix('o').unwrap_or_default().trim();
                let previous = std::mem::replace(&mut current, ObjectBuilder::new(name));
                if previous.has_content() {
                    objects.push(previous.finish());
                }
            }
            Some("v") => {
                let vertex = parse_vertex(fields, line)?;
                current.extent.add(&vertex);
                vertices.push(vertex);
            }
            Some("f") => {
                let refs: Vec<&str> = fields.collect();
                if refs.len() < 3 {
                    return Err(malformed(line, "face needs three vertices"));
                }
                if refs.len() > 3 {
                    warn!(
                        line,
                        vertices = refs.len(),
                        "Only triangles are supported, extra face vertices dropped."
                    );
                }
                let (factor, centroid) = current.transform(options, line)?;
                for token in &refs[..3] {
                    let vertex = vertices[resolve_index(token, vertices.len(), line)?];
                    current.triangles.extend(
                        ((vertex - centroid) * factor)
                            .iter()
                            .map(|c| truncate_hundredths(*c)),
                    );
                }
            }
            _ => {}
        }
    }
    if current.has_content() {
        objects.push(current.finish());
    }
    Ok(objects)
}

#[instrument(skip_all, name = "mesh_task")]
pub fn run(text: &str, options: &MeshOptions) -> Result<Vec<MeshObject>, InputError> {
    info!(scale = ?options.scale, centroid = ?options.centroid, "Converting mesh.");
    let objects = convert(text.lines(), options)?;
    info!(
        objects = objects.len(),
        triangles = objects.iter().map(|o| o.triangles.len() / 9).sum::<usize>(),
        "Mesh converted."
    );
    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUBE_CORNER: &str = "\
# corner of a cube
o Corner
v 0.0 0.0 0.0
v 2.0 0.0 0.0
v 0.0 4.0 0.0
v 0.0 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1
f 1 2 4
";

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn unscaled_mesh_keeps_coordinates() {
        let objects = run(CUBE_CORNER, &MeshOptions::default()).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].name, "Corner");
        assert_close(
            &objects[0].triangles,
            &[0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        );
    }

    #[test]
    fn scale_fits_the_largest_extent() {
        let options = MeshOptions {
            scale: Some(2.0),
            ..MeshOptions::default()
        };
        let objects = run(CUBE_CORNER, &options).unwrap();
        assert_close(&objects[0].triangles[..9], &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn zero_scale_means_unscaled() {
        let options = MeshOptions {
            scale: Some(0.0),
            ..MeshOptions::default()
        };
        let objects = run(CUBE_CORNER, &options).unwrap();
        assert_close(&objects[0].triangles[3..6], &[2.0, 0.0, 0.0]);
    }

    #[test]
    fn origin_mode_centers_on_mean_vertex() {
        let options = MeshOptions {
            scale: Some(4.0),
            centroid: CentroidMode::Origin,
            ..MeshOptions::default()
        };
        let objects = run(CUBE_CORNER, &options).unwrap();
        // factor 1, mean vertex is (0.5, 1.0, 0.25)
        assert_close(&objects[0].triangles[..3], &[-0.5, -1.0, -0.25]);
    }

    #[test]
    fn centering_is_skipped_without_scale() {
        for options in [
            MeshOptions {
                centroid: CentroidMode::Origin,
                ..MeshOptions::default()
            },
            MeshOptions {
                centroid: CentroidMode::Custom,
                ..MeshOptions::default()
            },
        ] {
            let objects = run(CUBE_CORNER, &options).unwrap();
            assert_close(&objects[0].triangles[3..6], &[2.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn scaling_extent_includes_the_origin() {
        let text = "o F\nv 10 10 10\nv 12 10 10\nv 10 11 10\nf 1 2 3\n";
        let options = MeshOptions {
            scale: Some(6.0),
            ..MeshOptions::default()
        };
        let objects = run(text, &options).unwrap();
        // extent 0..12 gives factor 0.5
        assert_close(&objects[0].triangles[..3], &[5.0, 5.0, 5.0]);
    }

    #[test]
    fn custom_mode_offsets_by_scaled_origin() {
        let options = MeshOptions {
            scale: Some(2.0),
            centroid: CentroidMode::Custom,
            origin: Some([1.0, 1.0, 1.0]),
        };
        let objects = run(CUBE_CORNER, &options).unwrap();
        // factor 0.5, centroid = mean - origin / 0.5 = (-1.5, -1.0, -1.75)
        assert_close(&objects[0].triangles[..3], &[0.75, 0.5, 0.87]);
    }

    #[test]
    fn custom_mode_requires_origin() {
        let options = MeshOptions {
            scale: Some(2.0),
            centroid: CentroidMode::Custom,
            ..MeshOptions::default()
        };
        assert_eq!(run(CUBE_CORNER, &options), Err(InputError::MissingOrigin));
    }

    #[test]
    fn coordinates_are_truncated_not_rounded() {
        let text = "o T\nv 0.129 -0.129 1.999\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let objects = run(text, &MeshOptions::default()).unwrap();
        assert_close(&objects[0].triangles[..3], &[0.12, -0.12, 1.99]);
    }

    #[test]
    fn objects_are_split_and_share_vertex_numbering() {
        let text = "o A\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\no B\nv 0 0 1\nf 1 2 -1\n";
        let objects = run(text, &MeshOptions::default()).unwrap();
        let names: Vec<_> = objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_close(&objects[1].triangles[6..], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn malformed_faces_report_their_line() {
        let short = "o A\nv 0 0 0\nv 1 0 0\nf 1 2\n";
        assert!(matches!(
            run(short, &MeshOptions::default()),
            Err(InputError::MalformedMesh { line: 4, .. })
        ));
        let dangling = "o A\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n";
        assert!(matches!(
            run(dangling, &MeshOptions::default()),
            Err(InputError::MalformedMesh { line: 5, .. })
        ));
    }

    #[test]
    fn quads_keep_their_first_triangle() {
        let text = "o Q\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let objects = run(text, &MeshOptions::default()).unwrap();
        assert_eq!(objects[0].triangles.len(), 9);
    }

    #[test]
    fn centroid_mode_parses_known_keywords() {
        assert_eq!("ORIGIN".parse(), Ok(CentroidMode::Origin));
        assert_eq!(
            "center".parse::<CentroidMode>(),
            Err(InputError::InvalidCentroidMode("center".to_string()))
        );
    }

    #[test]
    fn empty_text_yields_no_objects() {
        assert!(run("", &MeshOptions::default()).unwrap().is_empty());
    }
}
