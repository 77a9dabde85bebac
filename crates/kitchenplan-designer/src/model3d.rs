//! # 3D Model Module
//!
//! Loads item models and measures them. The layout only ever reads the
//! axis-aligned bounding box of a model; it becomes the item's dimensions.
//!
//! ## Supported Formats
//! - STL (STereoLithography), binary or ASCII
//!
//! ## Providers
//! - [`StlAssetProvider`]: reads STL files from an asset root and caches one
//!   shared, immutable mesh per reference
//! - [`StaticAssetProvider`]: in-memory geometry for hosts that measure
//!   models themselves

use anyhow::{anyhow, Result};
use kitchenplan_core::AssetError;
use nalgebra::{Matrix4, Point3, Vector3};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::model::Dimensions;

/// A 3D triangle made up of three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle3D {
    pub vertices: [Point3<f64>; 3],
}

impl Triangle3D {
    pub fn new(v1: Point3<f64>, v2: Point3<f64>, v3: Point3<f64>) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Get bounding box of the triangle
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for vertex in &self.vertices[1..] {
            min = min.inf(vertex);
            max = max.sup(vertex);
        }
        (min, max)
    }
}

/// A 3D mesh model
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh3D {
    pub triangles: Vec<Triangle3D>,
    pub bounds_min: Point3<f64>,
    pub bounds_max: Point3<f64>,
}

impl Mesh3D {
    pub fn new(triangles: Vec<Triangle3D>) -> Self {
        let mut mesh = Self {
            triangles,
            bounds_min: Point3::origin(),
            bounds_max: Point3::origin(),
        };
        mesh.calculate_bounds();
        mesh
    }

    pub fn from_stl_mesh(stl_mesh: &stl_io::IndexedMesh) -> Self {
        let vertex = |index: usize| {
            stl_mesh
                .vertices
                .get(index)
                .map(|v| Point3::new(v[0] as f64, v[1] as f64, v[2] as f64))
        };

        let triangles = stl_mesh
            .faces
            .iter()
            .filter_map(|face| {
                Some(Triangle3D::new(
                    vertex(face.vertices[0])?,
                    vertex(face.vertices[1])?,
                    vertex(face.vertices[2])?,
                ))
            })
            .collect();

        Self::new(triangles)
    }

    /// Closed box spanning `min`..`max`, twelve triangles
    pub fn cuboid(min: Point3<f64>, max: Point3<f64>) -> Self {
        let corner = |x: bool, y: bool, z: bool| {
            Point3::new(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };
        let quads = [
            [(false, false, false), (true, false, false), (true, true, false), (false, true, false)],
            [(false, false, true), (false, true, true), (true, true, true), (true, false, true)],
            [(false, false, false), (false, true, false), (false, true, true), (false, false, true)],
            [(true, false, false), (true, false, true), (true, true, true), (true, true, false)],
            [(false, false, false), (false, false, true), (true, false, true), (true, false, false)],
            [(false, true, false), (true, true, false), (true, true, true), (false, true, true)],
        ];

        let mut triangles = Vec::with_capacity(12);
        for quad in quads {
            let [a, b, c, d] = quad.map(|(x, y, z)| corner(x, y, z));
            triangles.push(Triangle3D::new(a, b, c));
            triangles.push(Triangle3D::new(a, c, d));
        }
        Self::new(triangles)
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    fn calculate_bounds(&mut self) {
        let Some(first) = self.triangles.first() else {
            return;
        };

        let (mut min, mut max) = first.bounds();
        for triangle in &self.triangles[1..] {
            let (tri_min, tri_max) = triangle.bounds();
            min = min.inf(&tri_min);
            max = max.sup(&tri_max);
        }

        self.bounds_min = min;
        self.bounds_max = max;
    }

    /// Transform the mesh using a 4x4 transformation matrix
    pub fn transform(&mut self, transform: &Matrix4<f64>) {
        for triangle in &mut self.triangles {
            for vertex in &mut triangle.vertices {
                *vertex = transform.transform_point(vertex);
            }
        }
        self.calculate_bounds();
    }

    /// Scale the mesh uniformly
    pub fn scale(&mut self, factor: f64) {
        self.transform(&Matrix4::new_scaling(factor));
    }

    /// Swap Y and Z so a Z-up model stands upright in the Y-up layout
    pub fn swap_yz(&mut self) {
        #[rustfmt::skip]
        let swap = Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        self.transform(&swap);
    }

    /// Bounding box extent along X, Y and Z
    pub fn size(&self) -> Vector3<f64> {
        self.bounds_max - self.bounds_min
    }

    /// Bounding box extent as item dimensions
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from_extent(&self.size())
    }
}

/// Supported 3D file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model3DFormat {
    /// STL (STereoLithography) format
    Stl,
}

/// Reads model files into meters in the Y-up layout frame.
///
/// `scale` converts file units to meters (0.001 for models authored in
/// millimeters).
#[derive(Debug, Clone)]
pub struct Model3DImporter {
    pub scale: f64,
    pub z_up: bool,
}

impl Model3DImporter {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            z_up: false,
        }
    }

    /// Non-positive or non-finite factors are ignored
    pub fn with_scale(mut self, scale: f64) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        } else {
            tracing::warn!("Ignoring model scale {}", scale);
        }
        self
    }

    pub fn with_z_up(mut self, z_up: bool) -> Self {
        self.z_up = z_up;
        self
    }

    /// Import 3D model from file path
    pub fn import_file(&self, path: &Path) -> Result<Mesh3D> {
        match Self::detect_format(path)? {
            Model3DFormat::Stl => self.import_stl_file(path),
        }
    }

    /// Import STL from file path
    pub fn import_stl_file(&self, path: &Path) -> Result<Mesh3D> {
        debug!("Importing STL file: {}", path.display());

        let mut file = std::fs::File::open(path)
            .map_err(|e| anyhow!("Failed to open STL file {}: {}", path.display(), e))?;

        let stl = stl_io::read_stl(&mut file)
            .map_err(|e| anyhow!("Failed to parse STL file {}: {}", path.display(), e))?;

        Ok(self.finish(Mesh3D::from_stl_mesh(&stl)))
    }

    /// Import STL from in-memory data
    pub fn import_stl_data(&self, data: &[u8]) -> Result<Mesh3D> {
        debug!("Importing STL from binary data ({} bytes)", data.len());

        let mut cursor = std::io::Cursor::new(data);
        let stl =
            stl_io::read_stl(&mut cursor).map_err(|e| anyhow!("Failed to parse STL data: {}", e))?;

        Ok(self.finish(Mesh3D::from_stl_mesh(&stl)))
    }

    fn finish(&self, mut mesh: Mesh3D) -> Mesh3D {
        debug!("STL contains {} faces", mesh.triangles.len());

        if self.z_up {
            mesh.swap_yz();
        }
        if self.scale != 1.0 {
            debug!("Scaling mesh by factor {}", self.scale);
            mesh.scale(self.scale);
        }

        debug!(
            "Final mesh bounds: {:?} to {:?}",
            mesh.bounds_min, mesh.bounds_max
        );
        mesh
    }

    /// Detect file format from file extension
    pub fn detect_format(path: &Path) -> Result<Model3DFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase())
            .ok_or_else(|| anyhow!("Unable to determine file extension for: {}", path.display()))?;

        match extension.as_str() {
            "stl" => Ok(Model3DFormat::Stl),
            _ => Err(anyhow!("Unsupported 3D file format: .{}", extension)),
        }
    }
}

impl Default for Model3DImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of measurable item geometry.
///
/// Loaded meshes are immutable and shared; providers may hand out the same
/// `Arc` for repeated requests.
pub trait AssetProvider: Send + Sync {
    fn load(&self, reference: &str) -> std::result::Result<Arc<Mesh3D>, AssetError>;

    /// Measure the bounding box of the referenced model.
    ///
    /// Meshes that are empty or flat along any axis have no usable size.
    fn measure(&self, reference: &str) -> std::result::Result<Dimensions, AssetError> {
        let mesh = self.load(reference)?;
        let dimensions = mesh.dimensions();
        if mesh.is_empty() || !dimensions.is_valid() {
            return Err(AssetError::EmptyGeometry {
                reference: reference.to_string(),
            });
        }
        Ok(dimensions)
    }
}

/// Loads STL models from disk relative to an asset root.
#[derive(Debug)]
pub struct StlAssetProvider {
    root: PathBuf,
    importer: Model3DImporter,
    cache: RwLock<HashMap<String, Arc<Mesh3D>>>,
}

impl StlAssetProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            importer: Model3DImporter::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_z_up(mut self, z_up: bool) -> Self {
        self.importer = self.importer.with_z_up(z_up);
        self
    }

    /// File units to meters, applied after the axis swap
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.importer = self.importer.with_scale(scale);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute references are used as is
    pub fn resolve(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }
}

impl AssetProvider for StlAssetProvider {
    fn load(&self, reference: &str) -> std::result::Result<Arc<Mesh3D>, AssetError> {
        if reference.trim().is_empty() {
            return Err(AssetError::EmptyReference);
        }
        if let Some(mesh) = self.cache.read().get(reference) {
            return Ok(Arc::clone(mesh));
        }

        let path = self.resolve(reference);
        if Model3DImporter::detect_format(&path).is_err() {
            return Err(AssetError::UnsupportedFormat {
                reference: reference.to_string(),
            });
        }
        if !path.is_file() {
            return Err(AssetError::NotFound {
                reference: reference.to_string(),
            });
        }

        let mesh = self
            .importer
            .import_file(&path)
            .map_err(|e| AssetError::Parse {
                reference: reference.to_string(),
                reason: e.to_string(),
            })?;

        let mesh = Arc::new(mesh);
        self.cache
            .write()
            .entry(reference.to_string())
            .or_insert_with(|| Arc::clone(&mesh));
        Ok(mesh)
    }
}

/// In-memory geometry keyed by reference.
#[derive(Debug, Default)]
pub struct StaticAssetProvider {
    meshes: RwLock<HashMap<String, Arc<Mesh3D>>>,
}

impl StaticAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, reference: impl Into<String>, mesh: Mesh3D) {
        self.meshes.write().insert(reference.into(), Arc::new(mesh));
    }

    /// Register a box-shaped model of the given size, resting on the floor
    pub fn insert_box(&self, reference: impl Into<String>, dimensions: Dimensions) {
        let half_width = dimensions.width / 2.0;
        let half_depth = dimensions.depth / 2.0;
        self.insert(
            reference,
            Mesh3D::cuboid(
                Point3::new(-half_width, 0.0, -half_depth),
                Point3::new(half_width, dimensions.height, half_depth),
            ),
        );
    }

    pub fn remove(&self, reference: &str) -> bool {
        self.meshes.write().remove(reference).is_some()
    }
}

impl AssetProvider for StaticAssetProvider {
    fn load(&self, reference: &str) -> std::result::Result<Arc<Mesh3D>, AssetError> {
        if reference.trim().is_empty() {
            return Err(AssetError::EmptyReference);
        }
        self.meshes
            .read()
            .get(reference)
            .cloned()
            .ok_or_else(|| AssetError::NotFound {
                reference: reference.to_string(),
            })
    }
}
