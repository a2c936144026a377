//! Low-level selection-update passes.
//!
//! Every pass is one sweep over an element array (plus a second sweep
//! for the strict vertex pass), skips deleted elements, and mutates
//! flags in place. The face-gather passes ([`face_from_vertex_loose`],
//! [`face_from_vertex_strict`]) read vertex flags and write each face's
//! own flag only, so they run data-parallel over the face array; the
//! scatter passes (vertex flags written from faces) stay sequential.
//!
//! Vertices with no live incident face are never selected by
//! propagation: the strict pass starts from the faces that are
//! selected, not from a vacuous "all of nothing" condition.

use mesh_types::EditMesh;
use rayon::prelude::*;

/// Select every live face. Returns the selected-face count after the
/// pass.
///
/// # Example
///
/// ```
/// use mesh_select::update::select_all_faces;
/// use mesh_types::tetrahedron;
///
/// let mut mesh = tetrahedron();
/// assert_eq!(select_all_faces(&mut mesh), 4);
/// ```
pub fn select_all_faces(mesh: &mut EditMesh) -> usize {
    let mut count = 0;
    for face in mesh.faces.iter_mut().filter(|f| f.is_live()) {
        face.selected = true;
        count += 1;
    }
    count
}

/// Deselect every live face. Returns the selected-face count after the
/// pass (always zero).
pub fn clear_face_selection(mesh: &mut EditMesh) -> usize {
    for face in mesh.faces.iter_mut().filter(|f| f.is_live()) {
        face.selected = false;
    }
    0
}

/// Flip the selection flag of every live face. Returns the
/// selected-face count after the pass.
pub fn invert_face_selection(mesh: &mut EditMesh) -> usize {
    let mut count = 0;
    for face in mesh.faces.iter_mut().filter(|f| f.is_live()) {
        face.selected = !face.selected;
        if face.selected {
            count += 1;
        }
    }
    count
}

/// Select every live vertex. Returns the selected-vertex count after
/// the pass.
pub fn select_all_vertices(mesh: &mut EditMesh) -> usize {
    let mut count = 0;
    for vertex in mesh.vertices.iter_mut().filter(|v| v.is_live()) {
        vertex.selected = true;
        count += 1;
    }
    count
}

/// Deselect every live vertex. Returns the selected-vertex count after
/// the pass (always zero).
pub fn clear_vertex_selection(mesh: &mut EditMesh) -> usize {
    for vertex in mesh.vertices.iter_mut().filter(|v| v.is_live()) {
        vertex.selected = false;
    }
    0
}

/// Flip the selection flag of every live vertex. Returns the
/// selected-vertex count after the pass.
pub fn invert_vertex_selection(mesh: &mut EditMesh) -> usize {
    let mut count = 0;
    for vertex in mesh.vertices.iter_mut().filter(|v| v.is_live()) {
        vertex.selected = !vertex.selected;
        if vertex.selected {
            count += 1;
        }
    }
    count
}

/// Select each vertex incident to at least one selected live face.
///
/// Clears the vertex selection first, then scatters from selected
/// faces. Returns the selected-vertex count after the pass.
pub fn vertex_from_face_loose(mesh: &mut EditMesh) -> usize {
    clear_vertex_selection(mesh);
    for face in &mesh.faces {
        if face.deleted || !face.selected {
            continue;
        }
        for &v in &face.vertices {
            mesh.vertices[v as usize].selected = true;
        }
    }
    selected_vertex_count(mesh)
}

/// Select each vertex whose live incident faces are all selected (and
/// that has at least one live incident face).
///
/// Two sweeps: scatter selection from selected faces, then clear any
/// vertex touched by an unselected live face. Returns the
/// selected-vertex count after the pass.
pub fn vertex_from_face_strict(mesh: &mut EditMesh) -> usize {
    vertex_from_face_loose(mesh);
    for face in &mesh.faces {
        if face.deleted || face.selected {
            continue;
        }
        for &v in &face.vertices {
            mesh.vertices[v as usize].selected = false;
        }
    }
    selected_vertex_count(mesh)
}

/// Select each live face with at least one selected vertex.
///
/// Gather pass: runs parallel over faces, reading vertex flags only.
/// Returns the selected-face count after the pass.
pub fn face_from_vertex_loose(mesh: &mut EditMesh) -> usize {
    let vertices = &mesh.vertices;
    mesh.faces
        .par_iter_mut()
        .filter(|f| f.is_live())
        .for_each(|face| {
            face.selected = face
                .vertices
                .iter()
                .any(|&v| vertices[v as usize].selected);
        });
    selected_face_count(mesh)
}

/// Select each live face whose three vertices are all selected.
///
/// Gather pass: runs parallel over faces, reading vertex flags only.
/// Returns the selected-face count after the pass.
pub fn face_from_vertex_strict(mesh: &mut EditMesh) -> usize {
    let vertices = &mesh.vertices;
    mesh.faces
        .par_iter_mut()
        .filter(|f| f.is_live())
        .for_each(|face| {
            face.selected = face
                .vertices
                .iter()
                .all(|&v| vertices[v as usize].selected);
        });
    selected_face_count(mesh)
}

/// Number of selected live faces.
#[must_use]
pub fn selected_face_count(mesh: &EditMesh) -> usize {
    mesh.faces
        .iter()
        .filter(|f| f.is_live() && f.selected)
        .count()
}

/// Number of selected live vertices.
#[must_use]
pub fn selected_vertex_count(mesh: &EditMesh) -> usize {
    mesh.vertices
        .iter()
        .filter(|v| v.is_live() && v.selected)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{tetrahedron, EditMesh, Face, Vertex};

    /// Two triangles sharing the edge (1, 2).
    fn two_triangles() -> EditMesh {
        let mut mesh = EditMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
        mesh.faces.push(Face::new([0, 1, 2]));
        mesh.faces.push(Face::new([1, 3, 2]));
        mesh
    }

    #[test]
    fn all_clear_invert_roundtrip() {
        let mut mesh = tetrahedron();

        assert_eq!(select_all_faces(&mut mesh), 4);
        assert_eq!(selected_face_count(&mesh), 4);

        assert_eq!(invert_face_selection(&mut mesh), 0);
        assert_eq!(clear_face_selection(&mut mesh), 0);
        assert_eq!(invert_face_selection(&mut mesh), 4);
    }

    #[test]
    fn sweeps_skip_deleted_faces() {
        let mut mesh = tetrahedron();
        mesh.faces[0].deleted = true;

        assert_eq!(select_all_faces(&mut mesh), 3);
        assert!(!mesh.faces[0].selected);
    }

    #[test]
    fn vertex_from_face_loose_marks_incident_vertices() {
        let mut mesh = two_triangles();
        mesh.faces[0].selected = true;

        assert_eq!(vertex_from_face_loose(&mut mesh), 3);
        assert!(mesh.vertices[0].selected);
        assert!(mesh.vertices[1].selected);
        assert!(mesh.vertices[2].selected);
        assert!(!mesh.vertices[3].selected);
    }

    #[test]
    fn vertex_from_face_strict_requires_full_star() {
        let mut mesh = two_triangles();
        mesh.faces[0].selected = true;

        // Vertices 1 and 2 also touch the unselected face.
        assert_eq!(vertex_from_face_strict(&mut mesh), 1);
        assert!(mesh.vertices[0].selected);
        assert!(!mesh.vertices[1].selected);
        assert!(!mesh.vertices[2].selected);
    }

    #[test]
    fn vertex_from_face_strict_ignores_deleted_star_faces() {
        let mut mesh = two_triangles();
        mesh.faces[0].selected = true;
        mesh.faces[1].deleted = true;

        // With the unselected face deleted, the full live star of
        // vertices 1 and 2 is selected.
        assert_eq!(vertex_from_face_strict(&mut mesh), 3);
    }

    #[test]
    fn isolated_vertex_never_selected_by_propagation() {
        let mut mesh = two_triangles();
        mesh.vertices.push(Vertex::from_coords(9.0, 9.0, 9.0));
        select_all_faces(&mut mesh);

        vertex_from_face_strict(&mut mesh);
        assert!(!mesh.vertices[4].selected);
    }

    #[test]
    fn face_from_vertex_loose_and_strict() {
        let mut mesh = two_triangles();
        mesh.vertices[1].selected = true;
        mesh.vertices[2].selected = true;

        assert_eq!(face_from_vertex_loose(&mut mesh), 2);

        clear_face_selection(&mut mesh);
        // Only face 1 would have all vertices selected if vertex 3 joins.
        assert_eq!(face_from_vertex_strict(&mut mesh), 0);
        mesh.vertices[3].selected = true;
        assert_eq!(face_from_vertex_strict(&mut mesh), 1);
        assert!(mesh.faces[1].selected);
    }

    #[test]
    fn vertex_sweeps() {
        let mut mesh = two_triangles();
        assert_eq!(select_all_vertices(&mut mesh), 4);
        assert_eq!(invert_vertex_selection(&mut mesh), 0);
        mesh.vertices[0].selected = true;
        assert_eq!(clear_vertex_selection(&mut mesh), 0);
        assert_eq!(selected_vertex_count(&mesh), 0);
    }

    #[test]
    fn empty_mesh_is_a_noop() {
        let mut mesh = EditMesh::new();
        assert_eq!(select_all_faces(&mut mesh), 0);
        assert_eq!(vertex_from_face_strict(&mut mesh), 0);
        assert_eq!(face_from_vertex_loose(&mut mesh), 0);
    }
}
