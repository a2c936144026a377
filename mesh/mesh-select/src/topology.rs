//! Face topology: face-face adjacency and per-edge border flags.

use hashbrown::HashMap;
use mesh_types::EditMesh;
use tracing::debug;

use crate::error::{SelectError, SelectResult};

/// Face-face adjacency and border flags for the live faces of a mesh.
///
/// Built in O(F) by hashing the undirected edges of every live face.
/// An edge is a border edge when no other live face shares it; an edge
/// whose only opposing face is deleted is therefore a border edge.
/// Edges shared by three or more live faces (non-manifold) yield
/// neither a neighbor nor a border flag.
///
/// The structure is a snapshot: deleting faces or otherwise editing the
/// mesh invalidates it. Callers hold it in a [`TopologyCache`] so the
/// dispatch layer can invalidate it after destructive operations.
///
/// # Example
///
/// ```
/// use mesh_select::FaceTopology;
/// use mesh_types::EditMesh;
///
/// let mesh = EditMesh::from_raw(
///     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0],
///     &[0, 1, 2, 1, 3, 2],
/// );
/// let topology = FaceTopology::build(&mesh).unwrap();
///
/// assert_eq!(topology.border_edge_count(), 4);
/// assert_eq!(topology.neighbors(0), [None, Some(1), None]);
/// ```
#[derive(Debug, Clone)]
pub struct FaceTopology {
    /// Per face, the opposing live face across each of its three edges.
    neighbors: Vec<[Option<u32>; 3]>,
    /// Per face, whether each of its three edges is a border edge.
    border: Vec<[bool; 3]>,
    edge_count: usize,
    border_edge_count: usize,
}

impl FaceTopology {
    /// Build topology from the live faces of a mesh.
    ///
    /// Validates every live face's vertex indices before building, so a
    /// failed build leaves nothing half-constructed.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::InvalidVertexIndex`] if a live face
    /// references a vertex outside the vertex array.
    pub fn build(mesh: &EditMesh) -> SelectResult<Self> {
        let vertex_count = mesh.vertex_count();
        for (_, face) in mesh.live_faces() {
            for &v in &face.vertices {
                if v as usize >= vertex_count {
                    return Err(SelectError::InvalidVertexIndex {
                        index: v,
                        vertex_count,
                    });
                }
            }
        }

        let mut edge_faces: HashMap<(u32, u32), Vec<u32>> = HashMap::new();
        for (face_idx, face) in mesh.live_faces() {
            // Face counts beyond u32::MAX are unsupported; indices are
            // u32 throughout the mesh layer.
            #[allow(clippy::cast_possible_truncation)]
            let face_idx = face_idx as u32;
            for (a, b) in face.edges() {
                edge_faces
                    .entry(normalize_edge(a, b))
                    .or_default()
                    .push(face_idx);
            }
        }

        let mut neighbors = vec![[None; 3]; mesh.face_count()];
        let mut border = vec![[false; 3]; mesh.face_count()];

        for (face_idx, face) in mesh.live_faces() {
            for (slot, (a, b)) in face.edges().into_iter().enumerate() {
                let shared = &edge_faces[&normalize_edge(a, b)];
                match shared.as_slice() {
                    [_] => border[face_idx][slot] = true,
                    [f0, f1] => {
                        let other = if *f0 as usize == face_idx { *f1 } else { *f0 };
                        neighbors[face_idx][slot] = Some(other);
                    }
                    _ => {}
                }
            }
        }

        let edge_count = edge_faces.len();
        let border_edge_count = edge_faces.values().filter(|f| f.len() == 1).count();
        debug!(
            "Built face topology: {} edges, {} border edges",
            edge_count, border_edge_count
        );

        Ok(Self {
            neighbors,
            border,
            edge_count,
            border_edge_count,
        })
    }

    /// The opposing live face across each edge of `face`.
    ///
    /// Edge `i` runs from the face's vertex slot `i` to slot
    /// `(i + 1) % 3`. Deleted faces have no neighbors.
    #[must_use]
    pub fn neighbors(&self, face: u32) -> [Option<u32>; 3] {
        self.neighbors
            .get(face as usize)
            .copied()
            .unwrap_or([None; 3])
    }

    /// Whether `face` owns at least one border edge.
    #[must_use]
    pub fn is_border_face(&self, face: u32) -> bool {
        self.border
            .get(face as usize)
            .is_some_and(|edges| edges.iter().any(|&b| b))
    }

    /// Per-edge border flags for `face`.
    #[must_use]
    pub fn border_edges(&self, face: u32) -> [bool; 3] {
        self.border.get(face as usize).copied().unwrap_or([false; 3])
    }

    /// Iterate over the indices of faces owning at least one border
    /// edge.
    pub fn border_faces(&self) -> impl Iterator<Item = u32> + '_ {
        self.border
            .iter()
            .enumerate()
            .filter(|(_, edges)| edges.iter().any(|&b| b))
            .map(|(i, _)| {
                #[allow(clippy::cast_possible_truncation)]
                let i = i as u32;
                i
            })
    }

    /// Total number of undirected edges among live faces.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of border edges.
    #[must_use]
    pub fn border_edge_count(&self) -> usize {
        self.border_edge_count
    }

    /// Number of face slots covered (total face storage at build time).
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.neighbors.len()
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}

/// Caller-owned holder for lazily built [`FaceTopology`].
///
/// The dispatch layer builds through the cache on demand and
/// invalidates it after destructive operations; the host invalidates it
/// after any other topology-altering edit.
///
/// # Example
///
/// ```
/// use mesh_select::TopologyCache;
/// use mesh_types::tetrahedron;
///
/// let mesh = tetrahedron();
/// let mut cache = TopologyCache::new();
/// assert!(!cache.is_valid());
///
/// let topology = cache.get_or_build(&mesh).unwrap();
/// assert_eq!(topology.border_edge_count(), 0);
/// assert!(cache.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TopologyCache {
    topology: Option<FaceTopology>,
}

impl TopologyCache {
    /// Create an empty cache.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { topology: None }
    }

    /// The cached topology, if valid.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Option<&FaceTopology> {
        self.topology.as_ref()
    }

    /// The cached topology, building it from `mesh` first if the cache
    /// is empty.
    ///
    /// # Errors
    ///
    /// Propagates [`FaceTopology::build`] errors; the cache stays empty
    /// on failure.
    pub fn get_or_build(&mut self, mesh: &EditMesh) -> SelectResult<&FaceTopology> {
        if self.topology.is_none() {
            self.topology = Some(FaceTopology::build(mesh)?);
        }
        self.topology.as_ref().ok_or(SelectError::TopologyMissing)
    }

    /// Drop the cached topology.
    #[inline]
    pub fn invalidate(&mut self) {
        self.topology = None;
    }

    /// Whether the cache currently holds a topology.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.topology.is_some()
    }
}
