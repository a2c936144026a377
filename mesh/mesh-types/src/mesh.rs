//! Indexed triangle mesh with deferred element removal.

use crate::{Face, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh whose elements carry selection and deletion
/// flags.
///
/// The mesh owns vertex and face storage exclusively. Removal is
/// two-phase: operations set the `deleted` flag and leave storage
/// untouched, so element indices stay stable while adjacency tables or
/// selection passes reference them; [`compact`](Self::compact) is the
/// separate pass that reclaims storage.
///
/// Live counts are derived from the flags rather than stored, so they
/// cannot drift out of sync with the element arrays.
///
/// # Example
///
/// ```
/// use mesh_types::{EditMesh, Face, Vertex};
///
/// let mut mesh = EditMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push(Face::new([0, 1, 2]));
///
/// mesh.faces[0].deleted = true;
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.live_face_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditMesh {
    /// Vertex storage, including deleted vertices awaiting compaction.
    pub vertices: Vec<Vertex>,

    /// Face storage, including deleted faces awaiting compaction.
    pub faces: Vec<Face>,
}

impl EditMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// # Arguments
    ///
    /// * `positions` - Flat array `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat array `[v0a, v1a, v2a, v0b, v1b, v2b, ...]`
    ///
    /// Returns an empty mesh if either array's length is not divisible
    /// by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::EditMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = EditMesh::from_raw(&positions, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| Face::new([c[0], c[1], c[2]]))
            .collect();

        Self { vertices, faces }
    }

    /// Total number of vertices in storage, including deleted ones.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of faces in storage, including deleted ones.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of live (not deleted) vertices.
    #[must_use]
    pub fn live_vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_live()).count()
    }

    /// Number of live (not deleted) faces.
    #[must_use]
    pub fn live_face_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_live()).count()
    }

    /// Check if the mesh has no faces in storage.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterate over live faces with their storage indices.
    pub fn live_faces(&self) -> impl Iterator<Item = (usize, &Face)> {
        self.faces.iter().enumerate().filter(|(_, f)| f.is_live())
    }

    /// Reclaim storage held by deleted elements.
    ///
    /// Drops deleted faces, drops deleted vertices that no live face
    /// still references, and remaps face indices accordingly. This is
    /// the only operation that moves elements; any adjacency data built
    /// before a `compact` call is invalid afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::tetrahedron;
    ///
    /// let mut mesh = tetrahedron();
    /// mesh.faces[0].deleted = true;
    /// mesh.compact();
    ///
    /// assert_eq!(mesh.face_count(), 3);
    /// assert!(mesh.faces.iter().all(|f| !f.deleted));
    /// ```
    pub fn compact(&mut self) {
        let mut keep = vec![false; self.vertices.len()];
        for (i, vertex) in self.vertices.iter().enumerate() {
            if vertex.is_live() {
                keep[i] = true;
            }
        }

        self.faces.retain(|f| f.is_live());

        // A deleted vertex still referenced by a live face must not be
        // dropped, or the face would dangle.
        for face in &self.faces {
            for &v in &face.vertices {
                keep[v as usize] = true;
            }
        }

        let mut remap = vec![0u32; self.vertices.len()];
        let mut next = 0u32;
        for (i, kept) in keep.iter().enumerate() {
            if *kept {
                remap[i] = next;
                next += 1;
            }
        }

        let mut vertices = Vec::with_capacity(next as usize);
        for (i, vertex) in self.vertices.drain(..).enumerate() {
            if keep[i] {
                vertices.push(vertex);
            }
        }
        self.vertices = vertices;

        for face in &mut self.faces {
            for v in &mut face.vertices {
                *v = remap[*v as usize];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> EditMesh {
        let mut mesh = EditMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push(Face::new([0, 1, 2]));
        mesh
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = EditMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.live_face_count(), 0);
    }

    #[test]
    fn mesh_from_raw() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0, 1, 2];

        let mesh = EditMesh::from_raw(&positions, &indices);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn mesh_from_raw_rejects_ragged_input() {
        let mesh = EditMesh::from_raw(&[0.0, 0.0], &[0, 1, 2]);
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn live_counts_follow_flags() {
        let mut mesh = triangle_mesh();
        assert_eq!(mesh.live_face_count(), 1);
        assert_eq!(mesh.live_vertex_count(), 3);

        mesh.faces[0].deleted = true;
        mesh.vertices[1].deleted = true;
        assert_eq!(mesh.live_face_count(), 0);
        assert_eq!(mesh.live_vertex_count(), 2);
        // Storage untouched until compaction.
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn live_faces_skips_deleted() {
        let mut mesh = triangle_mesh();
        mesh.faces.push(Face::new([2, 1, 0]));
        mesh.faces[0].deleted = true;

        let live: Vec<usize> = mesh.live_faces().map(|(i, _)| i).collect();
        assert_eq!(live, vec![1]);
    }

    #[test]
    fn compact_drops_deleted_faces_and_remaps() {
        let mut mesh = triangle_mesh();
        mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
        mesh.faces.push(Face::new([1, 3, 2]));

        mesh.faces[0].deleted = true;
        // Vertex 0 is now unreferenced but stays live; only deleted
        // vertices are dropped.
        mesh.compact();

        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces[0].vertices, [1, 3, 2]);
    }

    #[test]
    fn compact_drops_deleted_unreferenced_vertices() {
        let mut mesh = triangle_mesh();
        mesh.vertices.push(Vertex::from_coords(5.0, 5.0, 5.0));
        mesh.vertices[3].deleted = true;

        mesh.compact();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces[0].vertices, [0, 1, 2]);
    }

    #[test]
    fn compact_keeps_deleted_vertex_referenced_by_live_face() {
        let mut mesh = triangle_mesh();
        mesh.vertices[2].deleted = true;

        mesh.compact();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces[0].vertices, [0, 1, 2]);
    }

    #[test]
    fn compact_preserves_selection_flags() {
        let mut mesh = triangle_mesh();
        mesh.faces.push(Face::new([2, 1, 0]));
        mesh.faces[1].selected = true;
        mesh.faces[0].deleted = true;

        mesh.compact();

        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.faces[0].selected);
    }
}
