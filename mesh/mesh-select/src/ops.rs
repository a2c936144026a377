//! Composite selection operations.
//!
//! Each operation is a stateless pass (or pair of passes) over the mesh
//! driven by the current flags. No mode persists between calls except
//! the flags themselves.

use mesh_types::EditMesh;
use tracing::{debug, info};

use crate::topology::FaceTopology;
use crate::update;

/// Shrink the face selection by one topological ring.
///
/// Strict two-pass: a vertex stays selected only if every live face
/// incident to it is selected, then a face stays selected only if all
/// three of its vertices are. A uniformly selected or uniformly
/// unselected mesh is unchanged. Returns the selected-face count after
/// the operation.
///
/// # Example
///
/// ```
/// use mesh_select::erode_selection;
/// use mesh_types::tetrahedron;
///
/// let mut mesh = tetrahedron();
/// mesh.faces[0].selected = true;
///
/// // One face is not a full ring; eroding removes it entirely.
/// assert_eq!(erode_selection(&mut mesh), 0);
/// ```
pub fn erode_selection(mesh: &mut EditMesh) -> usize {
    update::vertex_from_face_strict(mesh);
    let selected = update::face_from_vertex_strict(mesh);
    debug!("Eroded selection to {} faces", selected);
    selected
}

/// Grow the face selection by one topological ring.
///
/// Loose two-pass: a vertex becomes selected if any live face incident
/// to it is selected, then a face becomes selected if any of its
/// vertices is. Returns the selected-face count after the operation.
///
/// # Example
///
/// ```
/// use mesh_select::dilate_selection;
/// use mesh_types::tetrahedron;
///
/// let mut mesh = tetrahedron();
/// mesh.faces[0].selected = true;
///
/// // Every face of a tetrahedron touches every vertex ring.
/// assert_eq!(dilate_selection(&mut mesh), 4);
/// ```
pub fn dilate_selection(mesh: &mut EditMesh) -> usize {
    update::vertex_from_face_loose(mesh);
    let selected = update::face_from_vertex_loose(mesh);
    debug!("Dilated selection to {} faces", selected);
    selected
}

/// Replace the face selection with the faces owning at least one border
/// edge.
///
/// `topology` must have been built from the mesh in its current state;
/// the dispatch layer in [`apply`](crate::apply) handles building or
/// rejecting per the configured policy. Returns the selected-face count
/// after the operation.
pub fn select_border_faces(mesh: &mut EditMesh, topology: &FaceTopology) -> usize {
    let mut selected = 0;
    for (face_idx, face) in mesh.faces.iter_mut().enumerate() {
        if face.deleted {
            continue;
        }
        // Face counts beyond u32::MAX are unsupported; indices are u32
        // throughout the mesh layer.
        #[allow(clippy::cast_possible_truncation)]
        let face_idx = face_idx as u32;
        face.selected = topology.is_border_face(face_idx);
        if face.selected {
            selected += 1;
        }
    }
    debug!("Selected {} border faces", selected);
    selected
}

/// Mark every selected live face as deleted.
///
/// Storage is untouched (compaction is a separate explicit pass on the
/// mesh), so face indices remain stable, but any cached topology no
/// longer reflects the mesh. Returns the number of faces deleted.
pub fn delete_selected_faces(mesh: &mut EditMesh) -> usize {
    let mut deleted = 0;
    for face in mesh.faces.iter_mut().filter(|f| f.is_live() && f.selected) {
        face.deleted = true;
        deleted += 1;
    }
    info!("Deleted {} selected faces", deleted);
    deleted
}
